use electronero_rpc_core::rpc::{ElectroneroRpc, HttpRpcClient};
use electronero_rpc_core::{CoreError, RpcError};
use reqwest::StatusCode;

use crate::cli::{Command, ServiceArg};

pub struct Clients {
    pub daemon: HttpRpcClient,
    pub wallet: HttpRpcClient,
}

impl Clients {
    pub fn get(&self, service: ServiceArg) -> &HttpRpcClient {
        match service {
            ServiceArg::Daemon => &self.daemon,
            ServiceArg::Wallet => &self.wallet,
        }
    }
}

/// Run one command and return what should be printed on stdout.
pub async fn run(command: &Command, clients: &Clients) -> Result<String, CoreError> {
    match command {
        Command::BlockCount => render_block_count(&clients.daemon).await,
        Command::Balance { account_index } => {
            render_balance(&clients.wallet, *account_index).await
        }
        Command::Call {
            method,
            params,
            service,
        } => {
            let params = params.clone().unwrap_or(serde_json::Value::Null);
            let result: serde_json::Value = clients.get(*service).call(method, &params).await?;
            Ok(format!("{result:#}"))
        }
        Command::Post { path, body } => {
            let body = body.clone().unwrap_or_else(|| serde_json::json!({}));
            let response: serde_json::Value = clients.daemon.post_json(path, &body).await?;
            Ok(format!("{response:#}"))
        }
    }
}

pub async fn render_block_count(rpc: &dyn ElectroneroRpc) -> Result<String, CoreError> {
    let count = rpc.get_block_count().await?;
    Ok(count.to_string())
}

pub async fn render_balance(
    rpc: &dyn ElectroneroRpc,
    account_index: u32,
) -> Result<String, CoreError> {
    let balance = rpc.get_balance(account_index).await?;
    Ok(format!(
        "account {account_index}\n  balance:          {}\n  unlocked balance: {}",
        balance.balance, balance.unlocked_balance
    ))
}

pub fn format_rpc_error(endpoint: &str, err: &CoreError) -> String {
    let mut lines = vec![
        format!("request to `{endpoint}` failed"),
        format!("error: {err}"),
    ];

    let hint = match err {
        CoreError::Rpc(RpcError::Transport(e)) if e.is_timeout() => {
            Some("hint: request timed out; raise --timeout-secs or check the node's load")
        }
        CoreError::Rpc(RpcError::Transport(e)) if e.is_connect() => Some(
            "hint: connection failed; verify the service is running and the URL and port are correct",
        ),
        CoreError::Rpc(RpcError::HttpStatus { status }) if *status == StatusCode::UNAUTHORIZED => {
            Some("hint: the service requires RPC login, which this client does not send")
        }
        CoreError::Rpc(RpcError::HttpStatus { status }) if *status == StatusCode::NOT_FOUND => {
            Some("hint: endpoint path is invalid; verify the URL and the raw endpoint path")
        }
        CoreError::Rpc(RpcError::ServerError { code: -32601, .. }) => Some(
            "hint: method not found; check the method name and the target service (--service daemon|wallet)",
        ),
        CoreError::Rpc(RpcError::ServerError { code: -13, .. }) => {
            Some("hint: no wallet is open; open one with the `open_wallet` method first")
        }
        _ => None,
    };
    if let Some(hint) = hint {
        lines.push(hint.to_owned());
    }

    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use async_trait::async_trait;
    use electronero_rpc_core::rpc::Balance;

    use super::*;

    struct FixedRpc;

    #[async_trait]
    impl ElectroneroRpc for FixedRpc {
        async fn get_block_count(&self) -> Result<u64, CoreError> {
            Ok(123_456)
        }

        async fn get_balance(&self, account_index: u32) -> Result<Balance, CoreError> {
            Ok(Balance {
                balance: 1_000 + u64::from(account_index),
                unlocked_balance: 500,
            })
        }
    }

    struct FailingRpc;

    #[async_trait]
    impl ElectroneroRpc for FailingRpc {
        async fn get_block_count(&self) -> Result<u64, CoreError> {
            Err(RpcError::ServerError {
                code: -9,
                message: "core is busy".into(),
            }
            .into())
        }

        async fn get_balance(&self, _account_index: u32) -> Result<Balance, CoreError> {
            Err(RpcError::HttpStatus {
                status: StatusCode::UNAUTHORIZED,
            }
            .into())
        }
    }

    #[tokio::test]
    async fn render_block_count_prints_height() {
        let out = render_block_count(&FixedRpc).await.expect("must render");
        assert_eq!(out, "123456");
    }

    #[tokio::test]
    async fn render_balance_prints_both_amounts() {
        let out = render_balance(&FixedRpc, 2).await.expect("must render");
        assert!(out.starts_with("account 2"));
        assert!(out.contains("balance:          1002"));
        assert!(out.contains("unlocked balance: 500"));
    }

    #[tokio::test]
    async fn render_propagates_rpc_errors() {
        let err = render_block_count(&FailingRpc)
            .await
            .expect_err("server error must propagate");
        assert_eq!(err.to_string(), "RPC error -9: core is busy");

        let err = render_balance(&FailingRpc, 0)
            .await
            .expect_err("status error must propagate");
        let message = format_rpc_error("http://127.0.0.1:26969", &err);
        assert!(message.contains("401 Unauthorized"));
        assert!(message.contains("requires RPC login"));
    }

    #[test]
    fn format_rpc_error_hints_method_not_found() {
        let err = CoreError::from(RpcError::ServerError {
            code: -32601,
            message: "Method not found".into(),
        });
        let message = format_rpc_error("http://127.0.0.1:26968", &err);
        assert!(message.starts_with("request to `http://127.0.0.1:26968` failed"));
        assert!(message.contains("--service daemon|wallet"));
    }

    #[test]
    fn format_rpc_error_without_hint() {
        let err = CoreError::InvalidEndpoint("`x`: expected HTTP(S) URL".into());
        let message = format_rpc_error("x", &err);
        assert_eq!(message.lines().count(), 2);
    }
}
