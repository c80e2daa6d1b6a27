use crate::demo::{run_demo, run_vendor_search, DemoArgs, VendorSearchArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use event_ai::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "Agentic Event Orchestrator",
    about = "Demonstrate and run the Agentic Event Orchestrator from the command line",
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
    /// Inspect the vendor catalog from the command line
    Vendors {
        #[command(subcommand)]
        command: VendorCommand,
    },
    /// Run an end-to-end CLI demo covering planning and approval
    Demo(DemoArgs),
}

#[derive(Subcommand, Debug)]
enum VendorCommand {
    /// Rank catalog vendors against event requirements
    Search(VendorSearchArgs),
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
        Command::Vendors {
            command: VendorCommand::Search(args),
        } => run_vendor_search(args),
        Command::Demo(args) => run_demo(args),
    }
}
