//! Parameterized chart functions — the registry of indicator/overlay kinds
//! and the value type that carries a kind plus its parameter list.
//!
//! - [`FunctionKind`]: closed enum of kinds, wire tokens, capabilities,
//!   canonical defaults.
//! - [`Function`]: kind + ordered scalar parameters, with the compact
//!   `TOKEN(p1,p2,...)` wire form.

pub mod function;
pub mod kind;

pub use function::Function;
pub use kind::FunctionKind;

/// Errors raised while constructing or parsing functions.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FunctionError {
    #[error("unknown function kind: {0:?}")]
    UnknownKind(String),
    #[error("malformed parameters for {token}: {detail}")]
    MalformedParameter { token: String, detail: String },
}
