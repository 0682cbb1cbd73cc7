use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "phishguard-demo")]
#[command(author, version, about = "Interactive phishing URL detector demo")]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Start the demo server with web UI
    Start {
        /// Listen port
        #[arg(short, long, default_value = "3000")]
        port: u16,

        /// Listen address
        #[arg(short, long, default_value = "127.0.0.1")]
        address: String,

        /// Model artifact path
        #[arg(short, long, default_value = "./models/phishing.json")]
        model: String,

        /// Enable verbose logging
        #[arg(short, long)]
        verbose: bool,
    },

    /// Check a single URL from the terminal
    Check {
        /// Model artifact path
        #[arg(short, long, default_value = "./models/phishing.json")]
        model: String,

        /// URL to check
        url: String,
    },
}
