//! Control channel contract
//!
//! The host toolkit exchanges out-of-band control messages with its peer
//! over some transport this crate never sees. Payloads are opaque JSON
//! values; the three operations mirror the shapes a JSON-RPC-like
//! protocol needs. The logger holds a `ControlChannel` only if the host
//! wires one in, and then only to report failures it cannot recover from.

use serde_json::Value;

/// Status of a control-channel operation.
#[derive(Debug, thiserror::Error)]
pub enum ControlError {
    /// The peer rejected the operation with a protocol-level status.
    #[error("control request rejected with status {status}")]
    Rejected { status: i32 },

    /// The message never reached the peer.
    #[error("control transport failed: {0}")]
    Transport(String),
}

pub trait ControlChannel: Send + Sync {
    /// Fire-and-forget notification; no response is expected.
    fn notify(&self, method: &str, params: Value) -> Result<(), ControlError>;

    /// Request/response call; blocks until the peer answers.
    fn call(&self, method: &str, params: Value) -> Result<Value, ControlError>;

    /// Answer a call the peer made earlier, identified by `id`.
    fn respond(&self, method: &str, id: i64, params: Value) -> Result<(), ControlError>;
}
