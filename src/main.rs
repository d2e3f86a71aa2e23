// vepflat - Ensembl VEP annotation flattener
// Copyright (c) 2025 vepflat Contributors
// Licensed under the MIT License

use clap::Parser;
use std::process;
use vepflat::cli::Cli;

#[tokio::main]
async fn main() {
    // Load environment variables from .env file if present
    let _ = dotenvy::dotenv();

    // Invalid arguments (including a missing or non-.txt input file) exit with 2 here
    let cli = Cli::parse();

    let exit_code = match cli.execute().await {
        Ok(code) => code,
        Err(e) => {
            tracing::error!(error = %e, "Command execution failed");
            eprintln!("Error: {e}");
            5 // Fatal error exit code
        }
    };

    process::exit(exit_code);
}
