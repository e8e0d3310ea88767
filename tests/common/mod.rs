use async_trait::async_trait;
use rpc_cli::domain::ports::{RpcClient, RpcMethod, RpcParams};
use rpc_cli::error::{CliError, Result};
use serde_json::{Value, json};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

/// A fake node holding a key/value map, exposing `get`, `set` and `streamO`.
#[derive(Default, Clone)]
pub struct FakeNode {
    entries: Arc<RwLock<HashMap<String, Value>>>,
}

impl FakeNode {
    pub fn new() -> Self {
        Self::default()
    }
}

fn key(method: &str, params: &RpcParams) -> Result<String> {
    match params.first() {
        Some(Value::String(key)) => Ok(key.clone()),
        _ => Err(CliError::RpcError {
            method: method.to_string(),
            message: "expected a string key".to_string(),
        }),
    }
}

#[async_trait]
impl RpcClient for FakeNode {
    fn methods(&self) -> Vec<RpcMethod> {
        vec![
            RpcMethod::new("get"),
            RpcMethod::new("set"),
            RpcMethod::new("streamO"),
        ]
    }

    async fn call(&self, method: &str, params: RpcParams) -> Result<Value> {
        match method {
            "get" => {
                let key = key(method, &params)?;
                let entries = self.entries.read().await;
                entries.get(&key).cloned().ok_or_else(|| CliError::RpcError {
                    method: method.to_string(),
                    message: format!("no entry for {}", key),
                })
            }
            "set" => {
                let key = key(method, &params)?;
                let value = params.get(1).cloned().unwrap_or(Value::Null);
                self.entries.write().await.insert(key, value);
                Ok(json!(true))
            }
            "streamO" => Ok(json!([])),
            other => Err(CliError::UnknownMethod(other.to_string())),
        }
    }
}
