//! Per-session render state.

use tessera_carton::{FxHashMap, Ref};

use crate::RootOptions;

/// State that survives across the re-renders of one session.
///
/// Holds the stream operation counter, the component id counter, and the
/// registry of component templates already sent to the client. A `Root` is
/// owned by exactly one session and mutated only by the engine; exclusive
/// `&mut` access serializes render passes.
#[derive(Debug, Default)]
pub struct Root {
    stream_ref: Ref,
    component_ref: Ref,
    /// Template fingerprint -> assigned component id
    templates: FxHashMap<u64, i64>,
}

impl Root {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: &RootOptions) -> Self {
        Self {
            stream_ref: Ref::new(options.stream_base),
            component_ref: Ref::new(options.component_base),
            templates: FxHashMap::default(),
        }
    }

    /// Advance the stream operation counter.
    pub fn next_stream_id(&mut self) -> i64 {
        self.stream_ref.next_ref()
    }

    /// Advance the component id counter.
    pub fn next_component_id(&mut self) -> i64 {
        self.component_ref.next_ref()
    }

    /// Component id previously assigned to a template fingerprint.
    pub fn template(&self, fingerprint: u64) -> Option<i64> {
        self.templates.get(&fingerprint).copied()
    }

    /// Assign a fresh component id to a template fingerprint.
    pub fn register_template(&mut self, fingerprint: u64) -> i64 {
        let id = self.next_component_id();
        self.templates.insert(fingerprint, id);
        id
    }

    /// Number of registered component templates.
    pub fn template_count(&self) -> usize {
        self.templates.len()
    }
}
