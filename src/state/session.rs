//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! The session is owned by the auth backend. The app root probes it once and
//! publishes the result; route components read the status to coordinate
//! redirects and sign-in handoff.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

/// Session status as reported by the auth backend.
///
/// Starts as `Loading` until the initial probe resolves.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SessionStatus {
    #[default]
    Loading,
    Authenticated,
    Unauthenticated,
}

/// Session state shared through context as a read-only signal for pages.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SessionState {
    pub status: SessionStatus,
}
