//! Tessera HTML DSL.
//!
//! Constructors for the static parts of a node tree: elements, void
//! elements, attributes, text, raw markup, comments and fragments. None of
//! these introduce a dynamic boundary; wrap them with `tessera_dynamic` to
//! mark the parts that change between renders.
//!
//! ```
//! use tessera_html::{div, class_attr, text, nodes};
//! use tessera_rend::render_full;
//!
//! let card = div(nodes![class_attr("card"), text("Hello & welcome")]);
//! assert_eq!(
//!     render_full(&card).unwrap(),
//!     r#"<div class="card">Hello &amp; welcome</div>"#
//! );
//! ```

pub mod attribute;
pub mod element;
pub mod phx;
pub mod tags;
pub mod text;

pub use attribute::{aria_attr, attr, attrs, data_attr, flag, Attribute, Attributes};
pub use element::{element, void, Element, Void};
pub use tags::*;
pub use text::{comment, fragment, raw, text, Comment, Fragment, Raw, Text};

pub use tessera_rend::nodes;
