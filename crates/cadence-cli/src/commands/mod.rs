pub mod cycle;
pub mod notify;
pub mod sentiment;
pub mod streak;
pub mod tasks;
