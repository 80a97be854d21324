use clap::{Parser, Subcommand};

use crate::commands;

#[derive(Parser)]
#[command(name = "kurtakip")]
#[command(about = "Currency exchange rate tracking API", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the HTTP server
    Serve {
        /// Port to listen on (overrides the PORT environment variable)
        #[arg(short, long)]
        port: Option<u16>,
    },
    /// List the supported currencies
    Currencies,
}

pub fn run() {
    let cli = Cli::parse();

    match cli.command {
        Commands::Serve { port } => {
            commands::serve::run(port);
        }
        Commands::Currencies => {
            commands::currencies::run();
        }
    }
}
