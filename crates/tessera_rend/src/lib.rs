//! Tessera render engine.
//!
//! Renders a tree of [`Node`]s either to plain HTML or, for a long-lived
//! session, to a [`Rend`]: the literal fragments of the tree ("statics")
//! separated by the values of its dynamic boundaries ("dynamics"). A client
//! that already holds the statics only needs the dynamics on re-render.
//!
//! # Modules
//!
//! - **node**: the [`Node`] contract implemented by every renderable
//! - **root**: per-session counters and the component template registry
//! - **rend**: the static/dynamic accumulator and its slot values
//! - **comprehension**: range lists and keyed stream reconciliation
//! - **render**: full and diff entry points
//! - **wire**: JSON wire form of render results
//! - **delta**: change-only deltas between two renders
//! - **client**: a client-side patch model that applies the wire form
//!
//! # Example
//!
//! ```
//! use tessera_rend::{render_diff, render_nested, to_json, Node, Rend, RenderResult, Root};
//!
//! struct Greeting(&'static str);
//!
//! impl Node for Greeting {
//!     fn render(
//!         &self,
//!         diff: bool,
//!         root: &mut Root,
//!         rend: &mut Rend,
//!         buf: &mut String,
//!     ) -> RenderResult<()> {
//!         buf.push_str("<p>");
//!         if diff {
//!             let nested = render_nested(root, &Name(self.0))?;
//!             rend.add_dynamic(nested, buf);
//!         } else {
//!             buf.push_str(self.0);
//!         }
//!         buf.push_str("</p>");
//!         Ok(())
//!     }
//! }
//!
//! struct Name(&'static str);
//!
//! impl Node for Name {
//!     fn render(
//!         &self,
//!         _: bool,
//!         _: &mut Root,
//!         _: &mut Rend,
//!         buf: &mut String,
//!     ) -> RenderResult<()> {
//!         buf.push_str(self.0);
//!         Ok(())
//!     }
//! }
//!
//! let rend = render_diff(&mut Root::new(), &Greeting("hi")).unwrap();
//! assert_eq!(to_json(&rend).unwrap(), r#"{"s":["<p>","</p>"],"0":"hi"}"#);
//! ```

pub mod client;
pub mod comprehension;
pub mod delta;
pub mod errors;
pub mod node;
pub mod options;
pub mod rend;
pub mod render;
pub mod root;
pub mod wire;

pub use client::Rendered;
pub use comprehension::{shapes_match, Comprehension, Insert, StreamOp, StreamPatch};
pub use delta::{changes, is_unchanged};
pub use errors::{ClientError, ClientResult, RenderError, RenderResult};
pub use node::{AnyNode, IntoNode, Node};
pub use options::RootOptions;
pub use rend::{Component, Dynamic, Rend};
pub use render::{render_diff, render_full, render_nested};
pub use root::Root;
pub use wire::{to_json, to_json_pretty, to_value};
