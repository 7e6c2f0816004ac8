mod commands;
mod output;
mod terminal;

use commands::{CommandLine, Commands, discover};

use crate::terminal::logging;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let commands = CommandLine::parse_args();

    match commands.command {
        Commands::Discover(args) => {
            logging::init_logging(args.quiet);
            discover::discover(args).await
        }
    }
}
