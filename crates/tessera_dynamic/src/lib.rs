//! Tessera dynamic boundaries.
//!
//! Everything in this crate marks a part of the node tree that may change
//! between renders. In full mode the helpers render inline; in diff mode
//! each one becomes a dynamic slot of the enclosing render.
//!
//! - [`wrap`], [`text`], [`group`], [`embed`], [`if_some`]: plain slots
//! - [`component`]: slots whose template is deduplicated per session
//! - conditionals: [`if_then`], [`if_else`], [`switch`], [`when`], ...
//! - [`range`]: lists sharing one template
//! - [`stream()`]: keyed list updates from a [`tessera_stream::Stream`]
//!
//! ```
//! use tessera_dynamic::{if_else, text};
//! use tessera_html::{div, nodes};
//! use tessera_rend::{render_diff, to_json, Root};
//!
//! let count = 3;
//! let view = div(nodes![
//!     text(count),
//!     if_else(count > 1, text("items"), text("item")),
//! ]);
//! let rend = render_diff(&mut Root::new(), &view).unwrap();
//! assert_eq!(to_json(&rend).unwrap(), r#"{"s":["<div>","","</div>"],"0":"3","1":{"s":["",""],"0":"items"}}"#);
//! ```

pub mod component;
pub mod conditionals;
pub mod range;
pub mod stream;
pub mod wrap;

pub use component::{component, ComponentNode};
pub use conditionals::{
    case, hide, if_else, if_else_with, if_then, if_then_with, show, switch, switch_default,
    unless, unless_with, when, when_default, when_is, Case, WhenCase,
};
pub use range::{range, RangeNode};
pub use stream::{stream, StreamNode};
pub use wrap::{embed, group, if_some, text, wrap, Group, WrapNode};
