//! Tessera keyed streams.
//!
//! A [`Stream`] tracks the DOM ids of the entries a client currently holds
//! and queues the changes to send on the next render: additions with their
//! position and length bound, deletions by DOM id, and a reset flag. The
//! render that sends the queue calls [`Stream::clear_pending`] afterwards.
//!
//! ```
//! use tessera_stream::Stream;
//!
//! let mut users = Stream::with_id("users", |name: &&str| format!("users-{}", name));
//! users.insert("ada");
//! users.insert_at("bob", 0, None);
//! assert_eq!(users.dom_ids(), ["users-bob", "users-ada"]);
//!
//! users.clear_pending();
//! users.delete(&"ada").unwrap();
//! assert_eq!(users.deletions(), ["users-ada"]);
//! ```

mod error;

pub use error::{StreamError, StreamResult};

use std::fmt;

use tessera_carton::{format_compact, CompactString, Ref};

/// Position value that appends to the end of the list.
pub const APPEND: i64 = -1;

/// A queued addition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StreamItem<T> {
    pub item: T,
    pub dom_id: CompactString,
    /// Insert position; [`APPEND`] appends, `0` prepends
    pub at: i64,
    /// Positive keeps the first `n` entries, negative the last `n`
    pub limit: Option<i64>,
}

type IdFn<T> = Box<dyn Fn(&T) -> CompactString>;

/// Keyed list state with a queue of pending changes.
pub struct Stream<T> {
    name: CompactString,
    id_fn: Option<IdFn<T>>,
    counter: Ref,
    /// DOM ids in client order
    live: Vec<CompactString>,
    additions: Vec<StreamItem<T>>,
    deletions: Vec<CompactString>,
    reset: bool,
}

impl<T> Stream<T> {
    /// A stream whose ids are `"{name}-{n}"` from a per-stream counter.
    pub fn new(name: impl Into<CompactString>) -> Self {
        Self {
            name: name.into(),
            id_fn: None,
            counter: Ref::default(),
            live: Vec::new(),
            additions: Vec::new(),
            deletions: Vec::new(),
            reset: false,
        }
    }

    /// A stream whose ids are derived from the items themselves.
    pub fn with_id<F, S>(name: impl Into<CompactString>, id_fn: F) -> Self
    where
        F: Fn(&T) -> S + 'static,
        S: Into<CompactString>,
    {
        Self {
            id_fn: Some(Box::new(move |item: &T| id_fn(item).into())),
            ..Self::new(name)
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Append an item. Returns its DOM id.
    pub fn insert(&mut self, item: T) -> CompactString {
        self.insert_at(item, APPEND, None)
    }

    /// Insert an item at `at`, then bound the list by `limit`.
    ///
    /// An item whose DOM id is already live is updated in place.
    pub fn insert_at(&mut self, item: T, at: i64, limit: Option<i64>) -> CompactString {
        let dom_id = self.dom_id_for(&item);
        tracing::trace!(stream = %self.name, %dom_id, at, ?limit, "stream insert");

        if !self.live.contains(&dom_id) {
            match usize::try_from(at) {
                Ok(index) if index < self.live.len() => self.live.insert(index, dom_id.clone()),
                _ => self.live.push(dom_id.clone()),
            }
        }
        if let Some(limit) = limit {
            apply_limit(&mut self.live, limit);
        }

        self.additions.retain(|pending| pending.dom_id != dom_id);
        self.additions.push(StreamItem {
            item,
            dom_id: dom_id.clone(),
            at,
            limit,
        });
        dom_id
    }

    /// Append every item in order.
    pub fn extend(&mut self, items: impl IntoIterator<Item = T>) -> Vec<CompactString> {
        items.into_iter().map(|item| self.insert(item)).collect()
    }

    /// Delete the entry for `item`. Requires an id function.
    pub fn delete(&mut self, item: &T) -> StreamResult<CompactString> {
        let Some(id_fn) = &self.id_fn else {
            return Err(StreamError::Unkeyed(self.name.clone()));
        };
        let dom_id = id_fn(item);
        self.delete_by_id(&dom_id)?;
        Ok(dom_id)
    }

    /// Delete a live entry by DOM id.
    pub fn delete_by_id(&mut self, dom_id: &str) -> StreamResult<()> {
        let Some(index) = self.live.iter().position(|id| id == dom_id) else {
            return Err(StreamError::UnknownId(dom_id.into()));
        };
        tracing::trace!(stream = %self.name, dom_id, "stream delete");
        let dom_id = self.live.remove(index);
        self.additions.retain(|pending| pending.dom_id != dom_id);
        self.deletions.push(dom_id);
        Ok(())
    }

    /// Clear the client list before the next inserts.
    ///
    /// Pending changes queued before the reset are dropped.
    pub fn reset(&mut self) {
        tracing::trace!(stream = %self.name, "stream reset");
        self.live.clear();
        self.additions.clear();
        self.deletions.clear();
        self.reset = true;
    }

    pub fn additions(&self) -> &[StreamItem<T>] {
        &self.additions
    }

    pub fn deletions(&self) -> &[CompactString] {
        &self.deletions
    }

    pub fn is_reset(&self) -> bool {
        self.reset
    }

    /// Whether the next render has anything to send.
    pub fn has_pending(&self) -> bool {
        !self.additions.is_empty() || !self.deletions.is_empty() || self.reset
    }

    /// Forget the queue once a render has sent it.
    pub fn clear_pending(&mut self) {
        self.additions.clear();
        self.deletions.clear();
        self.reset = false;
    }

    /// DOM ids the client holds after the pending changes apply.
    pub fn dom_ids(&self) -> &[CompactString] {
        &self.live
    }

    pub fn len(&self) -> usize {
        self.live.len()
    }

    pub fn is_empty(&self) -> bool {
        self.live.is_empty()
    }

    fn dom_id_for(&mut self, item: &T) -> CompactString {
        match &self.id_fn {
            Some(id_fn) => id_fn(item),
            None => format_compact!("{}-{}", self.name, self.counter.next_ref()),
        }
    }
}

impl<T> fmt::Debug for Stream<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Stream")
            .field("name", &self.name)
            .field("keyed", &self.id_fn.is_some())
            .field("live", &self.live)
            .field("additions", &self.additions.len())
            .field("deletions", &self.deletions)
            .field("reset", &self.reset)
            .finish()
    }
}

fn apply_limit(live: &mut Vec<CompactString>, limit: i64) {
    let keep = usize::try_from(limit.unsigned_abs()).unwrap_or(usize::MAX);
    if live.len() <= keep {
        return;
    }
    if limit >= 0 {
        live.truncate(keep);
    } else {
        live.drain(..live.len() - keep);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counter_ids() {
        let mut s = Stream::new("msgs");
        assert_eq!(s.insert("a"), "msgs-1");
        assert_eq!(s.insert("b"), "msgs-2");
        assert_eq!(s.extend(["c", "d"]), ["msgs-3", "msgs-4"]);
        assert_eq!(s.len(), 4);
        assert_eq!(s.additions().len(), 4);
        assert!(s.has_pending());
    }

    #[test]
    fn test_keyed_update_in_place() {
        let mut s = Stream::with_id("users", |u: &(u32, &str)| format!("users-{}", u.0));
        s.insert((1, "ada"));
        s.insert((2, "bob"));
        s.clear_pending();

        s.insert_at((1, "ada lovelace"), 0, None);
        assert_eq!(s.dom_ids(), ["users-1", "users-2"]);
        assert_eq!(s.additions()[0].item, (1, "ada lovelace"));
        assert_eq!(s.additions()[0].at, 0);
    }

    #[test]
    fn test_repeated_insert_keeps_last_pending() {
        let mut s = Stream::with_id("n", |n: &u32| format!("n-{}", n));
        s.insert(1);
        s.insert_at(1, 0, Some(5));
        assert_eq!(s.additions().len(), 1);
        assert_eq!(s.additions()[0].limit, Some(5));
    }

    #[test]
    fn test_limits() {
        let mut s = Stream::new("l");
        s.extend([1, 2, 3]);
        s.insert_at(4, APPEND, Some(-2));
        assert_eq!(s.dom_ids(), ["l-3", "l-4"]);

        s.insert_at(5, 0, Some(2));
        assert_eq!(s.dom_ids(), ["l-5", "l-3"]);
    }

    #[test]
    fn test_position_out_of_range_appends() {
        let mut s = Stream::new("p");
        s.insert(1);
        s.insert_at(2, 10, None);
        assert_eq!(s.dom_ids(), ["p-1", "p-2"]);
    }

    #[test]
    fn test_delete() {
        let mut s = Stream::with_id("u", |n: &u32| format!("u-{}", n));
        s.extend([1, 2]);
        s.clear_pending();

        assert_eq!(s.delete(&1).unwrap(), "u-1");
        assert_eq!(s.deletions(), ["u-1"]);
        assert_eq!(s.dom_ids(), ["u-2"]);
        assert_eq!(s.delete(&1), Err(StreamError::UnknownId("u-1".into())));
    }

    #[test]
    fn test_delete_drops_pending_addition() {
        let mut s = Stream::new("x");
        let id = s.insert("a");
        s.delete_by_id(&id).unwrap();
        assert!(s.additions().is_empty());
        assert_eq!(s.deletions(), [id]);
        assert!(s.is_empty());
    }

    #[test]
    fn test_unkeyed_delete() {
        let mut s = Stream::new("x");
        s.insert("a");
        assert_eq!(s.delete(&"a"), Err(StreamError::Unkeyed("x".into())));
        assert!(s.delete_by_id("x-9").is_err());
    }

    #[test]
    fn test_reset_then_insert() {
        let mut s = Stream::new("r");
        s.extend(["a", "b"]);
        s.clear_pending();
        s.delete_by_id("r-1").unwrap();

        s.reset();
        s.insert("c");
        assert!(s.is_reset());
        assert!(s.deletions().is_empty());
        assert_eq!(s.dom_ids(), ["r-3"]);
        assert_eq!(s.additions().len(), 1);

        s.clear_pending();
        assert!(!s.has_pending());
        assert!(!s.is_reset());
        assert_eq!(s.name(), "r");
    }
}
