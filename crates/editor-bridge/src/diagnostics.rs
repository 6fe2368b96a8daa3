//! Opaque diagnostics payload.
//!
//! Diagnostics are produced by the analysis backend and forwarded verbatim to the host's
//! marker sink. The bridge never interprets their fields.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A single diagnostic for the current document, kept as the backend's JSON payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Diagnostic(Value);

impl Diagnostic {
    /// Wrap a backend-provided payload.
    pub fn new(payload: Value) -> Self {
        Self(payload)
    }

    /// Borrow the raw payload.
    pub fn payload(&self) -> &Value {
        &self.0
    }

    /// Unwrap the raw payload.
    pub fn into_payload(self) -> Value {
        self.0
    }
}

impl From<Value> for Diagnostic {
    fn from(value: Value) -> Self {
        Self(value)
    }
}
