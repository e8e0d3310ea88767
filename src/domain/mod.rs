//! Domain types: bitcoin amounts and the RPC client port.

pub mod amount;
pub mod ports;
