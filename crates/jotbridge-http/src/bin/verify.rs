//! Verification suite runner binary

use clap::Parser;
use jotbridge_http::http::cli::{Cli, handle_cli_command};

#[tokio::main]
async fn main() {
    env_logger::init();
    let cli = Cli::parse();
    let exit_code = handle_cli_command(cli).await;
    std::process::exit(exit_code);
}
