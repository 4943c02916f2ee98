//! Stub connector gateway binary

use clap::Parser;
use jotbridge_http::http::gateway::server::{GatewayConfig, start_server};

#[derive(Parser)]
#[command(name = "gateway")]
#[command(about = "Stub ESB connector gateway for jotbridge verification")]
#[command(version)]
struct Args {
    #[arg(default_value_t = 8280)]
    port: u16,
    /// API key the stub accepts (defaults to the demo key)
    #[arg(long)]
    api_key: Option<String>,
}

#[tokio::main]
async fn main() {
    jotbridge::telemetry::init();
    let args = Args::parse();

    let mut config = GatewayConfig::default();
    if let Some(api_key) = args.api_key {
        config.api_key = api_key;
    }

    if let Err(e) = start_server(args.port, config).await {
        jotbridge::error!("Gateway exited: {e}");
        std::process::exit(1);
    }
}
