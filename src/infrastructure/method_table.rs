use crate::domain::ports::{RpcClient, RpcMethod, RpcParams, SyncPolicy};
use crate::error::{CliError, Result};
use async_trait::async_trait;
use serde_json::Value;
use std::collections::BTreeMap;
use std::future::Future;
use std::pin::Pin;

pub type RpcFuture = Pin<Box<dyn Future<Output = Result<Value>> + Send>>;

/// A boxed asynchronous handler for a single RPC method.
pub type MethodFn = Box<dyn Fn(RpcParams) -> RpcFuture + Send + Sync>;

struct Entry {
    policy: SyncPolicy,
    handler: MethodFn,
}

/// An [`RpcClient`] assembled from named async closures.
///
/// Useful when the methods to expose are not grouped behind a single type,
/// e.g. a handful of free functions wrapping a transport. Methods are listed
/// in name order.
#[derive(Default)]
pub struct MethodTable {
    methods: BTreeMap<String, Entry>,
}

impl MethodTable {
    /// Creates a new, empty method table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `handler` under `name`, inferring its policy from the name.
    pub fn with_method<F, Fut>(self, name: &str, handler: F) -> Self
    where
        F: Fn(RpcParams) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<Value>> + Send + 'static,
    {
        self.with_method_policy(name, SyncPolicy::from_name(name), handler)
    }

    /// Registers `handler` under `name` with an explicit policy.
    ///
    /// A later registration under the same name replaces the earlier one.
    pub fn with_method_policy<F, Fut>(
        mut self,
        name: &str,
        policy: SyncPolicy,
        handler: F,
    ) -> Self
    where
        F: Fn(RpcParams) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<Value>> + Send + 'static,
    {
        let handler: MethodFn = Box::new(move |params| Box::pin(handler(params)));
        self.methods.insert(name.to_string(), Entry { policy, handler });
        self
    }

    pub fn len(&self) -> usize {
        self.methods.len()
    }

    pub fn is_empty(&self) -> bool {
        self.methods.is_empty()
    }
}

#[async_trait]
impl RpcClient for MethodTable {
    fn methods(&self) -> Vec<RpcMethod> {
        self.methods
            .iter()
            .map(|(name, entry)| RpcMethod::with_policy(name.clone(), entry.policy))
            .collect()
    }

    async fn call(&self, method: &str, params: RpcParams) -> Result<Value> {
        let entry = self
            .methods
            .get(method)
            .ok_or_else(|| CliError::UnknownMethod(method.to_string()))?;
        (entry.handler)(params).await
    }
}
