//! Caseroute Server CLI
//!
//! Starts the HTTP server for case classification and routing.

use caseroute_server::{config::ServerConfig, start_server, ServerError};
use std::env;
use std::process;

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

async fn run() -> Result<(), ServerError> {
    // Parse command-line arguments
    let args: Vec<String> = env::args().collect();

    let config = if args.len() > 2 && args[1] == "--config" {
        ServerConfig::from_file(&args[2])?
    } else if args.len() > 1 && args[1] == "--help" {
        print_help();
        process::exit(0);
    } else {
        ServerConfig::from_env()?
    };

    start_server(config).await?;

    Ok(())
}

fn print_help() {
    println!("Caseroute Server - Support Case Classification and Routing");
    println!();
    println!("USAGE:");
    println!("    caseroute-server [--config <path-to-config.toml>]");
    println!();
    println!("OPTIONS:");
    println!("    --config <file>    Load configuration from TOML file");
    println!("    --help             Print this help message");
    println!();
    println!("Without --config the server binds 0.0.0.0 on $PORT (default 8000).");
    println!();
    println!("CONFIGURATION:");
    println!("    The TOML config file may contain:");
    println!("    - bind_address: IP address to bind (default '0.0.0.0')");
    println!("    - bind_port: Port number (default 8000)");
    println!("    - max_subject_chars / max_description_chars: request limits");
    println!("    - signals: Array of extra keyword signals");
    println!("      (category, phrase, weight, whole_word)");
    println!();
    println!("LOGGING:");
    println!("    Set RUST_LOG to adjust verbosity (e.g. RUST_LOG=debug).");
    println!();
}
