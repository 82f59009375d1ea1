use crate::demo::{run_demo, run_mortgage_calculate, CalculateArgs, DemoArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use propmarket::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "Property Marketplace Engine",
    about = "Serve and exercise the property marketplace estimation engine",
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
    /// Mortgage calculations from the terminal
    Mortgage {
        #[command(subcommand)]
        command: MortgageCommand,
    },
    /// Run a walkthrough of all four engine operations on sample data
    Demo(DemoArgs),
}

#[derive(Subcommand, Debug)]
enum MortgageCommand {
    /// Quote the monthly payment and lifetime cost of a fixed-rate loan
    Calculate(CalculateArgs),
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
        Command::Mortgage {
            command: MortgageCommand::Calculate(args),
        } => run_mortgage_calculate(args),
        Command::Demo(args) => run_demo(args),
    }
}
