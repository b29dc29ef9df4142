//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate URL and readiness concerns from page logic to
//! improve reuse and testability.

pub mod callback_url;
pub mod ready;
