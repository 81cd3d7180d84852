//! Contracts for the host toolkit's external collaborators
//!
//! The logging pipeline lives inside a larger toolkit. Two of that
//! toolkit's components are visible from here only as interfaces: the
//! out-of-band control channel and the intermediate-representation
//! service. Both accept opaque payloads and answer with a status; neither
//! is implemented in this crate.

pub mod control;
pub mod ir;

pub use control::{ControlChannel, ControlError};
pub use ir::{IrError, IrService};
