//! Greeter Control - terminal form for the greeting service
//!
//! Type a name, press Enter, and the greeting from the endpoint shows up
//! below the input.

use clap::{Parser, Subcommand};
use greetctl::endpoint::{parse_base_url, API_URL};
use greetctl::errors::{
    EXIT_GENERAL_ERROR, EXIT_INVALID_ENDPOINT, EXIT_REQUEST_FAILED, EXIT_SUCCESS,
};
use greetctl::{logging, tui, GreetingClient};
use tracing::warn;

// Version is embedded at build time
const VERSION: &str = env!("GREETER_VERSION");

#[derive(Parser)]
#[command(name = "greetctl")]
#[command(about = "Greeter - ask the greeting service to greet you", long_about = None)]
#[command(version = VERSION)]
struct Cli {
    /// Endpoint to use instead of the one built in
    #[arg(long, global = true, value_name = "URL")]
    api_url: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch one greeting and print it, without the form
    Get {
        /// Name to send, passed through as typed
        name: String,
    },
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let raw_url = cli.api_url.as_deref().unwrap_or(API_URL);
    let base = match parse_base_url(raw_url) {
        Ok(url) => url,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(EXIT_INVALID_ENDPOINT);
        }
    };
    let client = GreetingClient::new(base);

    let code = match cli.command {
        Some(Commands::Get { name }) => {
            logging::init_stderr_logging();
            match client.fetch_greeting(&name).await {
                Ok(greeting) => {
                    println!("{}", greeting.unwrap_or_default());
                    EXIT_SUCCESS
                }
                Err(e) => {
                    warn!("Greeting request failed: {:#}", e);
                    EXIT_REQUEST_FAILED
                }
            }
        }
        None => {
            logging::init_file_logging();
            match tui::run(client).await {
                Ok(()) => EXIT_SUCCESS,
                Err(e) => {
                    eprintln!("Error: {:#}", e);
                    EXIT_GENERAL_ERROR
                }
            }
        }
    };

    std::process::exit(code);
}
