//! Carton - The toolbox shared by every Tessera crate.
//!
//! Like a carton holding an artist's tools, this crate keeps the small
//! utilities the render engine and its collaborators all reach for.
//!
//! # Modules
//!
//! - **hash**: xxHash3 fingerprints of static template fragments
//! - **refs**: monotonic reference counters for stream and component ids
//! - **escape**: HTML text and attribute escaping
//!
//! # Example
//!
//! ```
//! use tessera_carton::{fingerprint, Ref};
//!
//! let a = fingerprint(&["<div>", "</div>"]);
//! let b = fingerprint(&["<div>", "</div>"]);
//! assert_eq!(a, b);
//!
//! let mut ids = Ref::new(0);
//! assert_eq!(ids.next_ref(), 1);
//! assert_eq!(ids.next_ref(), 2);
//! ```

pub mod escape;
pub mod hash;
pub mod refs;

pub use escape::{escape_html, escape_html_attr};
pub use hash::{fingerprint, hash_to_hex};
pub use refs::Ref;

// Re-export compact_str::CompactString for convenience
pub use compact_str::format_compact;
pub use compact_str::CompactString;

// Re-export rustc-hash for fast hash maps
pub use rustc_hash::FxHashMap;
