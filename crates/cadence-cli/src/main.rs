use clap::{Parser, Subcommand};

mod commands;
mod common;

#[derive(Parser)]
#[command(name = "cadence", version, about = "Cadence analytics CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Cycle prediction and insights
    Cycle {
        #[command(subcommand)]
        action: commands::cycle::CycleAction,
    },
    /// Task productivity reports
    Tasks {
        #[command(subcommand)]
        action: commands::tasks::TasksAction,
    },
    /// Journaling streaks
    Streak {
        #[command(subcommand)]
        action: commands::streak::StreakAction,
    },
    /// Sentiment scoring of free text
    Sentiment {
        #[command(subcommand)]
        action: commands::sentiment::SentimentAction,
    },
    /// Notification quiet-hours checks
    Notify {
        #[command(subcommand)]
        action: commands::notify::NotifyAction,
    },
}

fn main() {
    let cli = Cli::parse();
    let result = match cli.command {
        Commands::Cycle { action } => commands::cycle::run(action),
        Commands::Tasks { action } => commands::tasks::run(action),
        Commands::Streak { action } => commands::streak::run(action),
        Commands::Sentiment { action } => commands::sentiment::run(action),
        Commands::Notify { action } => commands::notify::run(action),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
