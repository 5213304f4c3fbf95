//! # Tessera
//!
//! Differential HTML rendering for live, server-driven views.
//!
//! This crate re-exports all Tessera sub-crates for unified documentation
//! and adds the pieces a host application drives them with: a [`Session`]
//! that owns one client's render state, and the demo views behind the
//! `tessera` command.
//!
//! ## Crates
//!
//! - [`carton`] - Shared hashing, counters and escaping
//! - [`rend`] - The differential render engine and wire format
//! - [`html`] - Element DSL
//! - [`dynamic`] - Dynamic boundaries: wraps, components, conditionals, lists
//! - [`stream`] - Keyed stream state

/// Shared hashing, counters and escaping.
pub use tessera_carton as carton;

/// The differential render engine and wire format.
pub use tessera_rend as rend;

/// Element DSL.
pub use tessera_html as html;

/// Dynamic boundaries.
pub use tessera_dynamic as dynamic;

/// Keyed stream state.
pub use tessera_stream as stream;

pub mod demos;
pub mod session;

pub use demos::{render_steps, Demo, DemoError, DemoResult, Format, View};
pub use session::Session;
