use crate::demo::{run_demo, run_rank_report, DemoArgs, RankArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use recognition_board::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "Recognition Board",
    about = "Rank employees, award badges, and serve the recognition leaderboard",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP service (default command)
    Serve(ServeArgs),
    /// Rank an exported activity snapshot and print the leaderboard
    Leaderboard {
        #[command(subcommand)]
        command: LeaderboardCommand,
    },
    /// Walk through the bundled demo dataset
    Demo(DemoArgs),
}

#[derive(Subcommand, Debug)]
enum LeaderboardCommand {
    /// Rank a JSON or CSV snapshot and print the requested page
    Rank(RankArgs),
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Leaderboard {
            command: LeaderboardCommand::Rank(args),
        } => run_rank_report(args),
        Command::Demo(args) => run_demo(args),
    }
}
