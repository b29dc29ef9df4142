//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is provided through Leptos contexts from the app root. This
//! fragment only tracks the auth session; pages subscribe and react.

pub mod session;
