mod cli;
mod commands;

use std::time::Duration;

use clap::Parser;
use eyre::{eyre, WrapErr};

use electronero_rpc_core::rpc::{HttpRpcClient, RequestIds, Service};

#[tokio::main]
async fn main() -> eyre::Result<()> {
    let args = cli::Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .with_file(true)
        .with_line_number(true)
        .with_level(true)
        .init();

    // One transport shared by both services; timeouts live here, not in the
    // RPC client.
    let http = reqwest::Client::builder()
        .connect_timeout(Duration::from_secs(args.connect_timeout_secs))
        .timeout(Duration::from_secs(args.timeout_secs))
        .build()
        .context("build HTTP client")?;

    let clients = commands::Clients {
        daemon: HttpRpcClient::with_http_client(Service::Daemon, &args.daemon_url, http.clone())
            .context("configure daemon RPC client")?
            .with_request_ids(request_ids(args.sequential_ids)),
        wallet: HttpRpcClient::with_http_client(Service::Wallet, &args.wallet_url, http)
            .context("configure wallet RPC client")?
            .with_request_ids(request_ids(args.sequential_ids)),
    };

    let service = args.command.service();
    let endpoint = clients.get(service).endpoint().to_owned();
    tracing::debug!(?service, %endpoint, "running command");

    let output = commands::run(&args.command, &clients)
        .await
        .map_err(|err| {
            eyre!(commands::format_rpc_error(&endpoint, &err))
                .wrap_err("while talking to the Electronero RPC service")
        })?;

    println!("{output}");
    Ok(())
}

fn request_ids(sequential: bool) -> RequestIds {
    if sequential {
        RequestIds::sequential()
    } else {
        RequestIds::default()
    }
}
