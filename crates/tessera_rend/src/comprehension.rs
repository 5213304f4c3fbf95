//! List renders: range comprehensions and keyed stream reconciliation.

use tessera_carton::CompactString;

use crate::{Dynamic, Rend, RenderError, RenderResult, Root};

/// A list render whose items share one template.
///
/// `statics` and `dynamics` are absent for a pure stream removal; every
/// item in `dynamics` fills the slots of the shared `statics`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Comprehension {
    pub(crate) statics: Option<Vec<String>>,
    pub(crate) fingerprint: Option<u64>,
    pub(crate) dynamics: Vec<Vec<Dynamic>>,
    pub(crate) stream: Option<StreamOp>,
}

/// The stream tuple of a comprehension: `[id, inserts, deletes, reset?]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StreamOp {
    /// Operation id taken from the session's stream counter
    pub id: i64,
    /// One descriptor per inserted item, aligned with the item dynamics
    pub inserts: Vec<Insert>,
    /// DOM ids to remove
    pub deletes: Vec<CompactString>,
    /// Clear the client list before inserting
    pub reset: bool,
}

/// Where a stream item goes on the client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Insert {
    pub dom_id: CompactString,
    /// Position in the list; `-1` appends
    pub at: i64,
    /// Bound on the client list length after inserting
    pub limit: Option<i64>,
}

/// The pending delta of a keyed stream, as consumed by one render.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StreamPatch {
    pub inserts: Vec<Insert>,
    pub deletes: Vec<CompactString>,
    pub reset: bool,
}

impl StreamPatch {
    /// Whether there is nothing to send.
    pub fn is_empty(&self) -> bool {
        self.inserts.is_empty() && self.deletes.is_empty() && !self.reset
    }
}

impl Insert {
    pub fn new(dom_id: impl Into<CompactString>, at: i64, limit: Option<i64>) -> Self {
        Self {
            dom_id: dom_id.into(),
            at,
            limit,
        }
    }

    /// Append at the end of the list, unbounded.
    pub fn append(dom_id: impl Into<CompactString>) -> Self {
        Self::new(dom_id, -1, None)
    }
}

impl Comprehension {
    pub fn statics(&self) -> Option<&[String]> {
        self.statics.as_deref()
    }

    pub fn fingerprint(&self) -> Option<u64> {
        self.fingerprint
    }

    /// Per-item dynamics, positionally aligned with the shared statics.
    pub fn dynamics(&self) -> &[Vec<Dynamic>] {
        &self.dynamics
    }

    pub fn stream(&self) -> Option<&StreamOp> {
        self.stream.as_ref()
    }

    pub fn len(&self) -> usize {
        self.dynamics.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dynamics.is_empty()
    }

    pub fn is_balanced(&self) -> bool {
        match &self.statics {
            Some(statics) => self.dynamics.iter().all(|item| {
                item.len() + 1 == statics.len() && item.iter().all(Dynamic::is_balanced)
            }),
            None => self.dynamics.is_empty(),
        }
    }

    /// Shared-template list of already rendered items.
    fn shared(items: Vec<Rend>, stream: Option<StreamOp>) -> Self {
        let statics = items.first().map(|first| first.statics.clone());
        let fingerprint = items.first().map(Rend::fingerprint);
        Self {
            statics,
            fingerprint,
            dynamics: items.into_iter().map(|item| item.dynamics).collect(),
            stream,
        }
    }

    /// Stream tuple alone, for deletions and resets without inserts.
    fn removal(stream: StreamOp) -> Self {
        Self {
            stream: Some(stream),
            ..Self::default()
        }
    }

    pub(crate) fn write_html(&self, out: &mut String) {
        let Some(statics) = &self.statics else {
            return;
        };
        for item in &self.dynamics {
            for (i, fragment) in statics.iter().enumerate() {
                out.push_str(fragment);
                if let Some(dynamic) = item.get(i) {
                    dynamic.write_html(out);
                }
            }
        }
    }
}

/// Whether every item has exactly the same static fragments.
pub fn shapes_match(items: &[Rend]) -> bool {
    items.windows(2).all(|pair| pair[0].statics == pair[1].statics)
}

impl Rend {
    /// Append a rendered list.
    ///
    /// Items sharing one template become a single comprehension; items of
    /// mixed shapes fall back to one dynamic fragment each.
    pub fn add_list(&mut self, items: Vec<Rend>, buf: &mut String) {
        if shapes_match(&items) {
            self.push_dynamic(
                Dynamic::Comprehension(Comprehension::shared(items, None)),
                buf,
            );
        } else {
            tracing::debug!(items = items.len(), "list items differ in shape");
            for item in items {
                self.add_dynamic(item, buf);
            }
        }
    }

    /// Append the pending delta of a keyed stream.
    ///
    /// `items` are the rendered additions, aligned with `patch.inserts`;
    /// a length mismatch is rejected before anything is appended. An empty
    /// patch leaves no slot at all. A reset is applied by the client before
    /// the inserts of the same operation.
    pub fn add_stream(
        &mut self,
        root: &mut Root,
        patch: StreamPatch,
        items: Vec<Rend>,
        buf: &mut String,
    ) -> RenderResult<()> {
        if patch.inserts.len() != items.len() {
            return Err(RenderError::StreamMismatch {
                inserts: patch.inserts.len(),
                items: items.len(),
            });
        }

        if patch.is_empty() {
            return Ok(());
        }

        let StreamPatch {
            inserts,
            deletes,
            reset,
        } = patch;

        if items.is_empty() {
            let op = StreamOp {
                id: root.next_stream_id(),
                inserts: Vec::new(),
                deletes,
                reset,
            };
            tracing::debug!(id = op.id, deletes = op.deletes.len(), reset, "stream removal");
            self.push_dynamic(Dynamic::Comprehension(Comprehension::removal(op)), buf);
            return Ok(());
        }

        if shapes_match(&items) {
            let op = StreamOp {
                id: root.next_stream_id(),
                inserts,
                deletes,
                reset,
            };
            tracing::debug!(id = op.id, inserts = op.inserts.len(), "stream comprehension");
            self.push_dynamic(
                Dynamic::Comprehension(Comprehension::shared(items, Some(op))),
                buf,
            );
            return Ok(());
        }

        tracing::debug!(items = items.len(), "stream items differ in shape, sending fragments");
        if !deletes.is_empty() || reset {
            let op = StreamOp {
                id: root.next_stream_id(),
                inserts: Vec::new(),
                deletes,
                reset,
            };
            self.push_dynamic(Dynamic::Comprehension(Comprehension::removal(op)), buf);
        }
        for item in items {
            self.add_dynamic(item, buf);
        }
        Ok(())
    }
}
