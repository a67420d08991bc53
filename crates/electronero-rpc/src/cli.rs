use clap::{Parser, Subcommand, ValueEnum};

/// Query an Electronero daemon or wallet over JSON-RPC.
#[derive(Debug, Parser)]
#[command(version, about)]
pub struct Cli {
    /// Daemon (electronerod) RPC URL.
    #[arg(
        long,
        default_value = "http://127.0.0.1:26968",
        env = "ELECTRONERO_DAEMON_URL"
    )]
    pub daemon_url: String,

    /// Wallet (electronero-wallet-rpc) RPC URL.
    #[arg(
        long,
        default_value = "http://127.0.0.1:26969",
        env = "ELECTRONERO_WALLET_URL"
    )]
    pub wallet_url: String,

    /// Total per-request timeout in seconds.
    #[arg(long, default_value = "30")]
    pub timeout_secs: u64,

    /// TCP connect timeout in seconds.
    #[arg(long, default_value = "10")]
    pub connect_timeout_secs: u64,

    /// Send increasing request ids instead of the fixed id "0".
    #[arg(long)]
    pub sequential_ids: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Print the daemon's current block height.
    BlockCount,

    /// Print the total and unlocked balance of a wallet account.
    Balance {
        #[arg(long, default_value = "0")]
        account_index: u32,
    },

    /// Invoke any JSON-RPC method and print its result.
    Call {
        method: String,

        /// Method parameters as a JSON value.
        #[arg(value_parser = parse_json)]
        params: Option<serde_json::Value>,

        #[arg(long, value_enum, default_value = "daemon")]
        service: ServiceArg,
    },

    /// POST a raw JSON body to one of the daemon's plain HTTP endpoints
    /// (e.g. `/get_info`) and print the response.
    Post {
        path: String,

        /// Request body as a JSON value (defaults to `{}`).
        #[arg(value_parser = parse_json)]
        body: Option<serde_json::Value>,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ServiceArg {
    Daemon,
    Wallet,
}

impl Command {
    /// The service this command talks to.
    pub fn service(&self) -> ServiceArg {
        match self {
            Command::BlockCount | Command::Post { .. } => ServiceArg::Daemon,
            Command::Balance { .. } => ServiceArg::Wallet,
            Command::Call { service, .. } => *service,
        }
    }
}

fn parse_json(raw: &str) -> Result<serde_json::Value, String> {
    serde_json::from_str(raw).map_err(|e| format!("invalid JSON: {e}"))
}
