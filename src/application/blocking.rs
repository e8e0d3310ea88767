use crate::domain::ports::{RpcClient, RpcParams, SyncPolicy};
use crate::error::{CliError, Result};
use serde_json::Value;
use std::collections::BTreeMap;
use std::future::Future;
use std::thread;
use tokio::runtime::{Builder, Handle, Runtime};

/// Suffix appended to a method name to form its blocking variant.
pub const SYNC_SUFFIX: char = 'S';

/// Owns the private runtime and shuts it down without blocking, so the
/// owner can be dropped from inside an async context.
struct Executor {
    runtime: Option<Runtime>,
}

impl Executor {
    fn new() -> Result<Self> {
        let runtime = Builder::new_current_thread().enable_all().build()?;
        Ok(Self {
            runtime: Some(runtime),
        })
    }

    /// Drives `future` to completion. When the calling thread already has a
    /// runtime context, the future is driven from a scoped thread instead.
    fn block_on<F>(&self, future: F) -> Result<Value>
    where
        F: Future<Output = Result<Value>> + Send,
    {
        let Some(runtime) = self.runtime.as_ref() else {
            return Err(CliError::IoError(std::io::Error::other("runtime already shut down")));
        };

        if Handle::try_current().is_err() {
            return runtime.block_on(future);
        }

        tracing::debug!("runtime context present, blocking from a scoped thread");
        thread::scope(|scope| {
            scope
                .spawn(move || runtime.block_on(future))
                .join()
                .unwrap_or_else(|payload| std::panic::resume_unwind(payload))
        })
    }
}

impl Drop for Executor {
    fn drop(&mut self) {
        if let Some(runtime) = self.runtime.take() {
            runtime.shutdown_background();
        }
    }
}

/// Wraps an [`RpcClient`] with blocking variants of its methods.
///
/// For every method whose policy is [`SyncPolicy::Synchronizable`] and whose name
/// is not exempt, a variant named `<method>S` is registered. Calling a variant
/// drives the asynchronous call to completion on a private current-thread runtime
/// and returns its result (or error) directly.
///
/// Variants block the calling thread. From inside `spawn_blocking` or under an
/// entered runtime handle this is fine; from an async task it stalls that task's
/// worker until the call returns. There is no timeout: a call that never
/// completes blocks forever.
pub struct BlockingClient<C: RpcClient> {
    client: C,
    executor: Executor,
    variants: BTreeMap<String, String>,
}

impl<C: RpcClient> BlockingClient<C> {
    /// Computes the variant table for `client` and starts the runtime that backs it.
    ///
    /// # Arguments
    ///
    /// * `client` - The asynchronous client to wrap. Its async methods stay
    ///   reachable through [`BlockingClient::client`].
    /// * `exempt` - Names of methods that are synchronous by nature and must not
    ///   get a variant, whatever their declared policy.
    pub fn install(client: C, exempt: &[&str]) -> Result<Self> {
        let mut variants = BTreeMap::new();
        for method in client.methods() {
            if exempt.contains(&method.name.as_str()) {
                tracing::debug!(method = %method.name, "skipping exempt method");
                continue;
            }
            if method.policy != SyncPolicy::Synchronizable {
                tracing::debug!(method = %method.name, policy = ?method.policy, "skipping method");
                continue;
            }
            let variant = format!("{}{}", method.name, SYNC_SUFFIX);
            tracing::debug!(%variant, "installing blocking variant");
            variants.insert(variant, method.name);
        }

        Ok(Self {
            client,
            executor: Executor::new()?,
            variants,
        })
    }

    pub fn has_variant(&self, name: &str) -> bool {
        self.variants.contains_key(name)
    }

    /// Names of all installed variants, in order.
    pub fn variants(&self) -> impl Iterator<Item = &str> {
        self.variants.keys().map(String::as_str)
    }

    /// Calls the variant `name`, blocking until the underlying method completes.
    pub fn call(&self, name: &str, params: RpcParams) -> Result<Value> {
        let method = self
            .variants
            .get(name)
            .ok_or_else(|| CliError::NoSyncVariant(name.to_string()))?;

        tracing::debug!(variant = name, %method, "blocking on rpc call");
        self.executor.block_on(self.client.call(method, params))
    }

    pub fn client(&self) -> &C {
        &self.client
    }

    pub fn into_inner(self) -> C {
        self.client
    }
}
