//! Render accumulators: the static/dynamic split of one render pass.

use tessera_carton::fingerprint;

use crate::{Comprehension, Root};

/// The result of rendering one subtree in diff mode.
///
/// `statics` holds the literal fragments and `dynamics` the values between
/// them. Once sealed, `statics.len() == dynamics.len() + 1`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Rend {
    pub(crate) statics: Vec<String>,
    pub(crate) dynamics: Vec<Dynamic>,
    pub(crate) fingerprint: Option<u64>,
}

/// A value filling one dynamic slot.
#[derive(Debug, Clone, PartialEq)]
pub enum Dynamic {
    /// A nested render without dynamics, collapsed to its literal text
    Text(String),
    /// A nested render with its own statics and dynamics
    Rend(Rend),
    /// A list render sharing one template across its items
    Comprehension(Comprehension),
    /// A component boundary, possibly referring back to a known template
    Component(Component),
}

/// A rendered component boundary.
#[derive(Debug, Clone, PartialEq)]
pub struct Component {
    pub(crate) id: i64,
    pub(crate) shared: bool,
    pub(crate) rend: Rend,
}

impl Rend {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn statics(&self) -> &[String] {
        &self.statics
    }

    pub fn dynamics(&self) -> &[Dynamic] {
        &self.dynamics
    }

    /// Template fingerprint, derived from the statics only.
    pub fn fingerprint(&self) -> u64 {
        self.fingerprint.unwrap_or_else(|| fingerprint(&self.statics))
    }

    /// Whether the render has no dynamic slots.
    pub fn is_static(&self) -> bool {
        self.dynamics.is_empty()
    }

    /// Check `len(statics) == len(dynamics) + 1`, recursively.
    pub fn is_balanced(&self) -> bool {
        self.statics.len() == self.dynamics.len() + 1
            && self.dynamics.iter().all(Dynamic::is_balanced)
    }

    /// Append a nested render as the next dynamic slot.
    ///
    /// The current contents of `buf` become the static fragment preceding
    /// the slot, and `buf` is left empty for the next fragment.
    pub fn add_dynamic(&mut self, nested: Rend, buf: &mut String) {
        self.push_dynamic(nested.into_dynamic(), buf);
    }

    /// Append a nested render as a component boundary.
    ///
    /// A template already registered in this session is sent as a
    /// back-reference to its component id; a new one is registered.
    pub fn add_component(&mut self, root: &mut Root, nested: Rend, buf: &mut String) {
        let fingerprint = nested.fingerprint();
        let component = match root.template(fingerprint) {
            Some(id) => {
                tracing::debug!(id, "component template reused");
                Component {
                    id,
                    shared: true,
                    rend: nested,
                }
            }
            None => {
                let id = root.register_template(fingerprint);
                tracing::debug!(id, "component template registered");
                Component {
                    id,
                    shared: false,
                    rend: nested,
                }
            }
        };
        self.push_dynamic(Dynamic::Component(component), buf);
    }

    pub(crate) fn push_dynamic(&mut self, dynamic: Dynamic, buf: &mut String) {
        self.flush(buf);
        self.dynamics.push(dynamic);
    }

    /// Move the pending literal text into the statics.
    pub(crate) fn flush(&mut self, buf: &mut String) {
        self.statics.push(std::mem::take(buf));
    }

    /// Close the render with its trailing fragment and fix its fingerprint.
    pub(crate) fn seal(&mut self, buf: &mut String) {
        self.flush(buf);
        self.fingerprint = Some(fingerprint(&self.statics));
    }

    /// Convert into a slot value, collapsing pure literals to text.
    pub fn into_dynamic(mut self) -> Dynamic {
        if self.dynamics.is_empty() && self.statics.len() == 1 {
            if let Some(text) = self.statics.pop() {
                return Dynamic::Text(text);
            }
        }
        Dynamic::Rend(self)
    }

    /// Concatenate statics and dynamics back into HTML.
    pub fn to_html(&self) -> String {
        let mut out = String::new();
        self.write_html(&mut out);
        out
    }

    pub(crate) fn write_html(&self, out: &mut String) {
        for (i, fragment) in self.statics.iter().enumerate() {
            out.push_str(fragment);
            if let Some(dynamic) = self.dynamics.get(i) {
                dynamic.write_html(out);
            }
        }
    }
}

impl Dynamic {
    pub fn is_balanced(&self) -> bool {
        match self {
            Self::Text(_) => true,
            Self::Rend(rend) => rend.is_balanced(),
            Self::Comprehension(comprehension) => comprehension.is_balanced(),
            Self::Component(component) => component.rend.is_balanced(),
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            _ => None,
        }
    }

    pub fn as_rend(&self) -> Option<&Rend> {
        match self {
            Self::Rend(rend) => Some(rend),
            _ => None,
        }
    }

    pub fn as_comprehension(&self) -> Option<&Comprehension> {
        match self {
            Self::Comprehension(comprehension) => Some(comprehension),
            _ => None,
        }
    }

    pub fn as_component(&self) -> Option<&Component> {
        match self {
            Self::Component(component) => Some(component),
            _ => None,
        }
    }

    pub(crate) fn write_html(&self, out: &mut String) {
        match self {
            Self::Text(text) => out.push_str(text),
            Self::Rend(rend) => rend.write_html(out),
            Self::Comprehension(comprehension) => comprehension.write_html(out),
            Self::Component(component) => component.rend.write_html(out),
        }
    }
}

impl Component {
    pub fn id(&self) -> i64 {
        self.id
    }

    /// Whether the statics are sent as a back-reference to [`Component::id`].
    pub fn is_shared(&self) -> bool {
        self.shared
    }

    pub fn rend(&self) -> &Rend {
        &self.rend
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sealed(parts: &[&str]) -> Rend {
        let mut rend = Rend::new();
        let (last, rest) = parts.split_last().unwrap();
        for part in rest {
            let mut buf = part.to_string();
            rend.add_dynamic(literal("x"), &mut buf);
        }
        rend.seal(&mut last.to_string());
        rend
    }

    fn literal(text: &str) -> Rend {
        let mut rend = Rend::new();
        rend.seal(&mut text.to_string());
        rend
    }

    #[test]
    fn test_add_dynamic_flushes_buffer() {
        let mut rend = Rend::new();
        let mut buf = String::from("<p>");
        rend.add_dynamic(literal("hi"), &mut buf);
        assert!(buf.is_empty());
        buf.push_str("</p>");
        rend.seal(&mut buf);

        assert_eq!(rend.statics(), ["<p>", "</p>"]);
        assert_eq!(rend.dynamics(), [Dynamic::Text("hi".into())]);
        assert!(rend.is_balanced());
        assert_eq!(rend.to_html(), "<p>hi</p>");
    }

    #[test]
    fn test_into_dynamic_keeps_nested_slots() {
        let nested = sealed(&["<a>", "</a>"]);
        match nested.clone().into_dynamic() {
            Dynamic::Rend(rend) => assert_eq!(rend, nested),
            other => panic!("expected nested rend, got {:?}", other),
        }
    }

    #[test]
    fn test_fingerprint_ignores_dynamic_values() {
        let mut a = Rend::new();
        a.add_dynamic(literal("one"), &mut "<b>".to_string());
        a.seal(&mut "</b>".to_string());

        let mut b = Rend::new();
        b.add_dynamic(literal("two"), &mut "<b>".to_string());
        b.seal(&mut "</b>".to_string());

        assert_eq!(a.fingerprint(), b.fingerprint());
        assert_ne!(a, b);
    }

    #[test]
    fn test_add_component_registers_then_shares() {
        let mut root = Root::new();
        let mut rend = Rend::new();
        let mut buf = String::new();
        rend.add_component(&mut root, sealed(&["<i>", "</i>"]), &mut buf);
        rend.add_component(&mut root, sealed(&["<i>", "</i>"]), &mut buf);
        rend.add_component(&mut root, sealed(&["<u>", "</u>"]), &mut buf);
        rend.seal(&mut buf);

        let ids: Vec<_> = rend
            .dynamics()
            .iter()
            .filter_map(Dynamic::as_component)
            .map(|c| (c.id(), c.is_shared()))
            .collect();
        assert_eq!(ids, [(1, false), (1, true), (2, false)]);
        assert_eq!(root.template_count(), 2);
        assert!(rend.is_balanced());
    }

    #[test]
    fn test_unbalanced_is_detected() {
        let mut rend = Rend::new();
        rend.add_dynamic(literal("x"), &mut String::new());
        assert!(!rend.is_balanced());
    }
}
