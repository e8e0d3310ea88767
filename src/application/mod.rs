//! Application layer adapting asynchronous RPC clients for sequential callers.
//!
//! This module defines the `BlockingClient`, which installs `<method>S` variants
//! that block on a private `tokio` runtime until the wrapped call completes.

pub mod blocking;
