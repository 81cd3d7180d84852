//! Intermediate-representation service contract
//!
//! The toolkit keeps its working state in an intermediate representation
//! that can be parsed from and emitted to both a textual and a structured
//! form, with named properties readable and writable in between. The
//! representation has no bearing on the logging pipeline; the contract
//! lives here so the toolkit's components agree on the seam.

use serde_json::Value;

/// Status of an IR operation.
#[derive(Debug, thiserror::Error)]
pub enum IrError {
    /// The input could not be parsed into a representation.
    #[error("malformed representation: {0}")]
    Malformed(String),

    /// The named property does not exist in the representation.
    #[error("unknown property '{0}'")]
    UnknownProperty(String),
}

pub trait IrService: Send + Sync {
    /// Load a representation from its textual form, replacing any state.
    fn parse(&mut self, input: &str) -> Result<(), IrError>;

    /// Load a representation from its structured form, replacing any state.
    fn parse_value(&mut self, input: Value) -> Result<(), IrError>;

    /// Emit the current representation in textual form.
    fn emit(&self) -> Result<String, IrError>;

    /// Emit the current representation in structured form.
    fn emit_value(&self) -> Result<Value, IrError>;

    /// Read a named property.
    fn get(&self, property: &str) -> Result<String, IrError>;

    /// Write a named property.
    fn set(&mut self, property: &str, value: &str) -> Result<(), IrError>;
}
