//! Hybrid Session Auth - command line entry point
//!
//! | Command | Description |
//! |---------|-------------|
//! | `hsa` / `hsa serve` | Run the HTTP server |
//! | `hsa generate-secret` | Print a new `JWT_CURRENT_SECRET` and `JWT_CURRENT_KID` |
//! | `hsa hash-password <plain>` | Print an Argon2id hash for the user directory |

use clap::{Parser, Subcommand};
use hsa_server::init::{generate_secret, hash_password};
use hsa_server::run_server;

/// Command line interface for Hybrid Session Auth
#[derive(Parser, Debug)]
#[command(name = "hsa")]
#[command(about = "Hybrid JWT session authentication server")]
#[command(version)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, global = true)]
    pub config: Option<std::path::PathBuf>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Subcommands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run the HTTP server (default)
    Serve,
    /// Generate a 512-bit signing secret and a key identifier
    GenerateSecret,
    /// Hash a password with the configured Argon2id parameters
    HashPassword {
        /// Plaintext password
        password: String,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    match cli.command.unwrap_or(Command::Serve) {
        Command::Serve => run_server(cli.config.as_deref()).await,
        Command::GenerateSecret => {
            let (secret, kid) = generate_secret();
            println!("JWT_CURRENT_SECRET={secret}");
            println!("JWT_CURRENT_KID={kid}");
            Ok(())
        }
        Command::HashPassword { password } => {
            println!("{}", hash_password(cli.config.as_deref(), &password)?);
            Ok(())
        }
    }
}
