//! CLI module for the advice proxy

pub mod serve;

use clap::{Parser, Subcommand};

/// Advice Proxy - JSON-RPC caching front for the Advice Slip API
#[derive(Parser)]
#[command(name = "advice-proxy")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Run the JSON-RPC server
    Serve(serve::ServeArgs),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_serve_with_overrides() {
        let cli = Cli::try_parse_from(["advice-proxy", "serve", "--host", "127.0.0.1", "--port", "10001"])
            .unwrap();

        let Command::Serve(args) = cli.command;
        assert_eq!(args.host.as_deref(), Some("127.0.0.1"));
        assert_eq!(args.port, Some(10001));
    }

    #[test]
    fn test_parse_serve_defaults() {
        let cli = Cli::try_parse_from(["advice-proxy", "serve"]).unwrap();

        let Command::Serve(args) = cli.command;
        assert!(args.host.is_none());
        assert!(args.port.is_none());
    }
}
