use crate::error::Result;
use async_trait::async_trait;
use serde_json::Value;

/// Positional parameters of a JSON-RPC call.
pub type RpcParams = Vec<Value>;

/// Whether a method may be given a blocking variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncPolicy {
    /// Gets a blocking `<name>S` variant.
    Synchronizable,
    /// Completes immediately; a blocking variant adds nothing.
    SynchronousByNature,
    /// Must only be awaited (one-shot or streaming calls).
    AsyncOnly,
}

impl SyncPolicy {
    /// Infers the policy from the legacy naming convention: a trailing `O`
    /// marks a method that must never be made blocking.
    pub fn from_name(name: &str) -> Self {
        if name.ends_with('O') {
            SyncPolicy::AsyncOnly
        } else {
            SyncPolicy::Synchronizable
        }
    }
}

/// A method exposed by an [`RpcClient`], with its blocking policy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RpcMethod {
    pub name: String,
    pub policy: SyncPolicy,
}

impl RpcMethod {
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        let policy = SyncPolicy::from_name(&name);
        Self { name, policy }
    }

    pub fn with_policy(name: impl Into<String>, policy: SyncPolicy) -> Self {
        Self {
            name: name.into(),
            policy,
        }
    }
}

/// An asynchronous RPC client whose methods can be called by name.
#[async_trait]
pub trait RpcClient: Send + Sync {
    /// Lists every callable method.
    fn methods(&self) -> Vec<RpcMethod>;

    async fn call(&self, method: &str, params: RpcParams) -> Result<Value>;
}

pub type RpcClientBox = Box<dyn RpcClient>;

#[async_trait]
impl<T: RpcClient + ?Sized> RpcClient for Box<T> {
    fn methods(&self) -> Vec<RpcMethod> {
        (**self).methods()
    }

    async fn call(&self, method: &str, params: RpcParams) -> Result<Value> {
        (**self).call(method, params).await
    }
}
