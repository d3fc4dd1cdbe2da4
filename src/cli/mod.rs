use anyhow::Result;
use clap::{Parser, Subcommand};

pub mod serve;

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: &str = "5000";

#[derive(Subcommand)]
enum Command {
    /// Run the API server
    Serve {
        /// Set the server host address
        #[arg(long, default_value = DEFAULT_HOST)]
        host: String,

        /// Set the server port
        #[arg(long, default_value = DEFAULT_PORT)]
        port: String,
    },
}

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

pub async fn run() -> Result<()> {
    let args = Cli::parse();

    match args.command {
        Some(Command::Serve { host, port }) => {
            serve::run(host, port).await?;
        }
        // Serve on the defaults when no sub command is given
        None => {
            serve::run(DEFAULT_HOST.to_string(), DEFAULT_PORT.to_string()).await?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_serve_defaults() {
        let cli = Cli::try_parse_from(["chatgate", "serve"]).unwrap();
        match cli.command {
            Some(Command::Serve { host, port }) => {
                assert_eq!(host, "127.0.0.1");
                assert_eq!(port, "5000");
            }
            None => panic!("Expected serve command"),
        }
    }

    #[test]
    fn test_no_subcommand() {
        let cli = Cli::try_parse_from(["chatgate"]).unwrap();
        assert!(cli.command.is_none());
    }
}
