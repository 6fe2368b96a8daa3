//! Editor feature providers.
//!
//! Each provider is a stateless function of a [`crate::DocumentSession`] and a host request. It
//! forwards the request to the backend and reshapes the reply into the contract the host's
//! feature expects. `None` means "decline to provide this feature for this request": both
//! "nothing applicable" and a backend failure collapse to it, failures being logged.

pub mod code_lens;
pub mod completion;
pub mod formatting;
pub mod hover;
pub mod navigation;
pub mod references;
pub mod rename;
pub mod signature_help;
pub mod symbols;

use editor_bridge::BackendReply;

fn settle<T>(reply: BackendReply<T>, query: &'static str) -> Option<T> {
    if let Some(reason) = reply.failure() {
        tracing::warn!(query, reason, "backend query failed");
    }
    reply.into_option()
}
