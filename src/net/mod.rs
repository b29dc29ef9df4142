//! Networking modules for the auth backend REST surface.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` wraps the session probe and the sign-in handoff. Everything else
//! the product does over the network belongs to other fragments.

pub mod api;
