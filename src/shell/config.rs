use clap::{Parser, Subcommand};

pub const DEFAULT_LISTEN: &str = "127.0.0.1:5000";
pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:5000";

#[derive(Parser, Clone, Debug)]
#[command(version, about, long_about = None)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Clone, Debug, PartialEq, Eq)]
pub enum Command {
    /// Serve the registration page and endpoint.
    Serve {
        #[arg(
            short,
            long,
            env = "FMS_LISTEN",
            default_value = DEFAULT_LISTEN,
            help = "HTTP listen address"
        )]
        listen: String,
    },
    /// Submit one registration to a running endpoint.
    Submit {
        #[arg(
            long,
            env = "FMS_BASE_URL",
            default_value = DEFAULT_BASE_URL,
            help = "Base URL of the registration endpoint"
        )]
        base_url: String,
        #[arg(long)]
        name: String,
        #[arg(long)]
        email: String,
        #[arg(long, env = "FMS_PASSWORD", hide_env_values = true)]
        password: String,
    },
}
