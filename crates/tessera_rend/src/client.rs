//! Client-side model of a rendered tree.
//!
//! [`Rendered`] applies wire values in arrival order the way a browser
//! client would and renders the resulting HTML. It is the reference for the
//! wire contract: applying a diff-mode render to an empty model reproduces
//! the full-mode HTML of the same tree.
//!
//! Stream entries live on the client only. When a tree is replaced (its
//! statics changed), each stream list is carried into the new tree by its
//! container: the tag that opened right before the list and the tag that
//! closed right after it. The list goes into the stream slot sitting inside
//! the same container, or, when the stream was idle and sent no slot, back
//! between the container tags in the static fragment.

use serde_json::{Map, Value};
use tessera_carton::FxHashMap;

use crate::{ClientError, ClientResult};

type Object = Map<String, Value>;
type Templates = FxHashMap<i64, Vec<String>>;

/// Accumulated client state for one session.
#[derive(Debug, Default)]
pub struct Rendered {
    tree: Option<Tree>,
    /// Component id -> statics received with its first sighting
    components: Templates,
}

#[derive(Debug, Clone)]
struct Tree {
    statics: Vec<String>,
    slots: Vec<Slot>,
    /// Stream lists whose slot the latest render omitted, sorted by position
    kept: Vec<Kept>,
}

#[derive(Debug, Clone)]
enum Slot {
    Text(String),
    Tree(Tree),
    List(List),
}

#[derive(Debug, Clone, Default)]
struct List {
    statics: Option<Vec<String>>,
    entries: Vec<Entry>,
    /// Driven by stream operations rather than replaced wholesale
    streamed: bool,
}

#[derive(Debug, Clone)]
struct Entry {
    dom_id: Option<String>,
    html: String,
}

/// A stream list lifted out of a replaced tree with its container tags.
#[derive(Debug, Clone)]
struct Detached {
    open: String,
    close: String,
    list: List,
}

/// A detached stream list anchored inside one static fragment.
#[derive(Debug, Clone)]
struct Kept {
    index: usize,
    /// Byte offset into `statics[index]`
    offset: usize,
    stream: Detached,
}

impl Rendered {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply a full render or a change-only delta.
    ///
    /// An object carrying statics replaces the tree; one without statics
    /// patches the slots it names.
    pub fn apply(&mut self, diff: &Value) -> ClientResult<()> {
        let object = as_object(diff)?;
        let Self { tree, components } = self;
        if !object.contains_key("s") {
            if let Some(existing) = tree.as_mut() {
                return patch_tree(existing, object, components);
            }
        }

        let mut detached = Vec::new();
        if let Some(existing) = tree.as_ref() {
            existing.detach_streams(&mut detached);
        }
        *tree = Some(parse_tree(object, components, &mut detached)?);
        if !detached.is_empty() {
            tracing::debug!(streams = detached.len(), "dropping unplaced stream lists");
        }
        Ok(())
    }

    pub fn is_empty(&self) -> bool {
        self.tree.is_none()
    }

    /// Number of component templates the client has cached.
    pub fn component_count(&self) -> usize {
        self.components.len()
    }

    pub fn to_html(&self) -> String {
        let mut out = String::new();
        if let Some(tree) = &self.tree {
            tree.write_html(&mut out);
        }
        out
    }
}

impl Tree {
    fn write_html(&self, out: &mut String) {
        let mut kept = self.kept.iter().peekable();
        for (i, fragment) in self.statics.iter().enumerate() {
            let mut from = 0;
            while let Some(stream) = kept.next_if(|next| next.index == i) {
                out.push_str(&fragment[from..stream.offset]);
                stream.stream.list.write_html(out);
                from = stream.offset;
            }
            out.push_str(&fragment[from..]);
            if let Some(slot) = self.slots.get(i) {
                slot.write_html(out);
            }
        }
    }

    /// Collect every stream list of this tree and its nested trees.
    fn detach_streams(&self, out: &mut Vec<Detached>) {
        for (i, slot) in self.slots.iter().enumerate() {
            match slot {
                Slot::List(list) if list.streamed => out.push(Detached {
                    open: self.statics.get(i).map_or("", |s| last_tag(s)).to_owned(),
                    close: self.statics.get(i + 1).map_or("", |s| first_tag(s)).to_owned(),
                    list: list.clone(),
                }),
                Slot::Tree(nested) => nested.detach_streams(out),
                _ => {}
            }
        }
        out.extend(self.kept.iter().map(|kept| kept.stream.clone()));
    }
}

impl Slot {
    fn write_html(&self, out: &mut String) {
        match self {
            Self::Text(text) => out.push_str(text),
            Self::Tree(tree) => tree.write_html(out),
            Self::List(list) => list.write_html(out),
        }
    }
}

impl List {
    fn write_html(&self, out: &mut String) {
        for entry in &self.entries {
            out.push_str(&entry.html);
        }
    }

    /// Insert or update an entry, then apply the length bound.
    fn insert(&mut self, dom_id: String, at: i64, limit: Option<i64>, html: String) {
        if let Some(existing) = self
            .entries
            .iter_mut()
            .find(|entry| entry.dom_id.as_deref() == Some(dom_id.as_str()))
        {
            existing.html = html;
        } else {
            let entry = Entry {
                dom_id: Some(dom_id),
                html,
            };
            match usize::try_from(at) {
                Ok(index) if index < self.entries.len() => self.entries.insert(index, entry),
                _ => self.entries.push(entry),
            }
        }

        if let Some(limit) = limit {
            self.apply_limit(limit);
        }
    }

    /// Positive limits keep the first entries, negative ones the last.
    fn apply_limit(&mut self, limit: i64) {
        let keep = usize::try_from(limit.unsigned_abs()).unwrap_or(usize::MAX);
        if self.entries.len() <= keep {
            return;
        }
        if limit >= 0 {
            self.entries.truncate(keep);
        } else {
            let excess = self.entries.len() - keep;
            self.entries.drain(..excess);
        }
    }
}

impl Detached {
    /// Whether this list belongs in a slot between `before` and `after`.
    fn fits_between(&self, before: &str, after: &str) -> bool {
        before.ends_with(self.open.as_str()) && after.starts_with(self.close.as_str())
    }

    /// Where the list goes when its slot is gone: between its container
    /// tags inside one static fragment.
    fn locate(&self, statics: &[String]) -> Option<(usize, usize)> {
        if self.open.is_empty() && self.close.is_empty() {
            return None;
        }
        let seam = format!("{}{}", self.open, self.close);
        statics.iter().enumerate().find_map(|(index, fragment)| {
            fragment.find(&seam).map(|at| (index, at + self.open.len()))
        })
    }
}

/// The tag a static fragment ends with, or all of it when it has none.
fn last_tag(fragment: &str) -> &str {
    fragment.rfind('<').map_or(fragment, |at| &fragment[at..])
}

/// The tag a static fragment starts with, or all of it when it has none.
fn first_tag(fragment: &str) -> &str {
    fragment.find('>').map_or(fragment, |at| &fragment[..=at])
}

fn take_detached(detached: &mut Vec<Detached>, before: &str, after: &str) -> Option<List> {
    let index = detached
        .iter()
        .position(|stream| stream.fits_between(before, after))?;
    Some(detached.remove(index).list)
}

fn place_detached(statics: &[String], detached: &mut Vec<Detached>) -> Vec<Kept> {
    let mut kept = Vec::new();
    let mut unplaced = Vec::new();
    for stream in detached.drain(..) {
        match stream.locate(statics) {
            Some((index, offset)) => kept.push(Kept {
                index,
                offset,
                stream,
            }),
            None => unplaced.push(stream),
        }
    }
    *detached = unplaced;
    kept.sort_by_key(|kept| (kept.index, kept.offset));
    kept
}

fn as_object(value: &Value) -> ClientResult<&Object> {
    value
        .as_object()
        .ok_or_else(|| ClientError::malformed(format!("expected an object, got {}", value)))
}

fn as_array(value: &Value) -> ClientResult<&Vec<Value>> {
    value
        .as_array()
        .ok_or_else(|| ClientError::malformed(format!("expected an array, got {}", value)))
}

fn strings(value: &Value) -> ClientResult<Vec<String>> {
    as_array(value)?
        .iter()
        .map(|item| {
            item.as_str()
                .map(str::to_owned)
                .ok_or_else(|| ClientError::malformed(format!("expected a string, got {}", item)))
        })
        .collect()
}

fn is_list(object: &Object) -> bool {
    object.contains_key("d") || object.contains_key("stream")
}

fn parse_tree(
    object: &Object,
    components: &mut Templates,
    detached: &mut Vec<Detached>,
) -> ClientResult<Tree> {
    let statics = match object.get("s") {
        Some(Value::Number(id)) => {
            let id = id
                .as_i64()
                .ok_or_else(|| ClientError::malformed(format!("bad component id {}", id)))?;
            components
                .get(&id)
                .cloned()
                .ok_or(ClientError::UnknownComponent(id))?
        }
        Some(value) => {
            let statics = strings(value)?;
            if let Some(id) = object.get("c") {
                let id = id
                    .as_i64()
                    .ok_or_else(|| ClientError::malformed(format!("bad component id {}", id)))?;
                components.insert(id, statics.clone());
            }
            statics
        }
        None => return Err(ClientError::malformed("rendered tree has no statics")),
    };

    if statics.is_empty() {
        return Err(ClientError::malformed("rendered tree has empty statics"));
    }

    let mut slots = Vec::with_capacity(statics.len() - 1);
    for (i, pair) in statics.windows(2).enumerate() {
        let value = object
            .get(&i.to_string())
            .ok_or(ClientError::MissingSlot(i))?;
        let slot = match value {
            Value::Object(list) if list.contains_key("stream") => {
                let mut target = take_detached(detached, &pair[0], &pair[1]).unwrap_or_default();
                apply_list(&mut target, list, components)?;
                Slot::List(target)
            }
            value => parse_slot(value, components, detached)?,
        };
        slots.push(slot);
    }
    let kept = place_detached(&statics, detached);
    Ok(Tree {
        statics,
        slots,
        kept,
    })
}

fn parse_slot(
    value: &Value,
    components: &mut Templates,
    detached: &mut Vec<Detached>,
) -> ClientResult<Slot> {
    match value {
        Value::String(text) => Ok(Slot::Text(text.clone())),
        Value::Object(object) if is_list(object) => {
            let mut list = List::default();
            apply_list(&mut list, object, components)?;
            Ok(Slot::List(list))
        }
        Value::Object(object) => Ok(Slot::Tree(parse_tree(object, components, detached)?)),
        other => Err(ClientError::malformed(format!("unexpected slot value {}", other))),
    }
}

fn patch_tree(tree: &mut Tree, object: &Object, components: &mut Templates) -> ClientResult<()> {
    for (key, value) in object {
        let index: usize = key
            .parse()
            .map_err(|_| ClientError::malformed(format!("unexpected patch key {:?}", key)))?;
        let slot = tree
            .slots
            .get_mut(index)
            .ok_or(ClientError::MissingSlot(index))?;
        patch_slot(slot, value, components)?;
    }
    Ok(())
}

fn patch_slot(slot: &mut Slot, value: &Value, components: &mut Templates) -> ClientResult<()> {
    match (slot, value) {
        (Slot::Tree(tree), Value::Object(object))
            if !object.contains_key("s") && !is_list(object) =>
        {
            patch_tree(tree, object, components)
        }
        (Slot::List(list), Value::Object(object)) if is_list(object) => {
            apply_list(list, object, components)
        }
        (slot, value) => {
            let mut detached = Vec::new();
            if let Slot::Tree(tree) = &*slot {
                tree.detach_streams(&mut detached);
            }
            *slot = parse_slot(value, components, &mut detached)?;
            Ok(())
        }
    }
}

fn apply_list(list: &mut List, object: &Object, components: &mut Templates) -> ClientResult<()> {
    if let Some(statics) = object.get("s") {
        list.statics = Some(strings(statics)?);
    }

    let items = match object.get("d") {
        Some(rows) => as_array(rows)?
            .iter()
            .map(|row| render_row(list.statics.as_deref(), row, components))
            .collect::<ClientResult<Vec<_>>>()?,
        None => Vec::new(),
    };

    match object.get("stream") {
        Some(stream) => {
            list.streamed = true;
            apply_stream(list, stream, items)
        }
        None => {
            list.entries = items
                .into_iter()
                .map(|html| Entry { dom_id: None, html })
                .collect();
            Ok(())
        }
    }
}

fn render_row(
    statics: Option<&[String]>,
    row: &Value,
    components: &mut Templates,
) -> ClientResult<String> {
    let statics = statics.ok_or_else(|| ClientError::malformed("list items without statics"))?;
    let values = as_array(row)?;
    if values.len() + 1 != statics.len() {
        return Err(ClientError::malformed(format!(
            "list item has {} values for {} statics",
            values.len(),
            statics.len()
        )));
    }

    let mut html = String::new();
    for (i, fragment) in statics.iter().enumerate() {
        html.push_str(fragment);
        if let Some(value) = values.get(i) {
            parse_slot(value, components, &mut Vec::new())?.write_html(&mut html);
        }
    }
    Ok(html)
}

/// Apply `[id, inserts, deletes, reset?]`: reset, then deletes, then inserts.
fn apply_stream(list: &mut List, stream: &Value, items: Vec<String>) -> ClientResult<()> {
    let parts = as_array(stream)?;
    let inserts = as_array(
        parts
            .get(1)
            .ok_or_else(|| ClientError::malformed("stream tuple without inserts"))?,
    )?;
    let deletes = as_array(
        parts
            .get(2)
            .ok_or_else(|| ClientError::malformed("stream tuple without deletes"))?,
    )?;
    let reset = parts.get(3).and_then(Value::as_bool).unwrap_or(false);

    if inserts.len() != items.len() {
        return Err(ClientError::malformed(format!(
            "{} inserts for {} items",
            inserts.len(),
            items.len()
        )));
    }

    if reset {
        list.entries.clear();
    }

    for id in deletes {
        let id = id
            .as_str()
            .ok_or_else(|| ClientError::malformed(format!("bad dom id {}", id)))?;
        list.entries
            .retain(|entry| entry.dom_id.as_deref() != Some(id));
    }

    for (insert, html) in inserts.iter().zip(items) {
        let insert = as_array(insert)?;
        let dom_id = insert
            .first()
            .and_then(Value::as_str)
            .ok_or_else(|| ClientError::malformed("insert without dom id"))?;
        let at = insert.get(1).and_then(Value::as_i64).unwrap_or(-1);
        let limit = insert.get(2).and_then(Value::as_i64);
        list.insert(dom_id.to_owned(), at, limit, html);
    }
    Ok(())
}
