//! Change-only deltas between two renders of the same session.

use serde_json::{Map, Value};

use crate::{Dynamic, Rend, RenderResult};

/// Wire value carrying only what changed from `prev` to `next`.
///
/// A changed template (different fingerprint) resends `next` whole.
/// Otherwise the result is an object keyed by slot position holding only
/// the slots whose value changed; nested renders and components that kept
/// their id are diffed recursively. An empty object means nothing changed.
pub fn changes(prev: &Rend, next: &Rend) -> RenderResult<Value> {
    if prev.fingerprint() != next.fingerprint() {
        return Ok(serde_json::to_value(next)?);
    }
    Ok(Value::Object(slot_changes(&prev.dynamics, &next.dynamics)?))
}

/// Whether a delta produced by [`changes`] carries nothing.
pub fn is_unchanged(delta: &Value) -> bool {
    delta.as_object().is_some_and(Map::is_empty)
}

fn slot_changes(prev: &[Dynamic], next: &[Dynamic]) -> RenderResult<Map<String, Value>> {
    let mut out = Map::new();
    for (i, dynamic) in next.iter().enumerate() {
        if let Some(change) = slot_change(prev.get(i), dynamic)? {
            out.insert(i.to_string(), change);
        }
    }
    Ok(out)
}

fn slot_change(prev: Option<&Dynamic>, next: &Dynamic) -> RenderResult<Option<Value>> {
    match (prev, next) {
        (Some(prev), next) if prev == next => Ok(None),
        (Some(Dynamic::Rend(prev)), Dynamic::Rend(next))
            if prev.fingerprint() == next.fingerprint() =>
        {
            nested_change(prev, next)
        }
        (Some(Dynamic::Component(prev)), Dynamic::Component(next)) if prev.id == next.id => {
            nested_change(&prev.rend, &next.rend)
        }
        _ => Ok(Some(serde_json::to_value(next)?)),
    }
}

fn nested_change(prev: &Rend, next: &Rend) -> RenderResult<Option<Value>> {
    let out = slot_changes(&prev.dynamics, &next.dynamics)?;
    Ok((!out.is_empty()).then_some(Value::Object(out)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn text_slot(open: &str, value: &str, close: &str) -> Rend {
        let mut inner = Rend::new();
        inner.seal(&mut value.to_string());
        let mut rend = Rend::new();
        rend.add_dynamic(inner, &mut open.to_string());
        rend.seal(&mut close.to_string());
        rend
    }

    #[test]
    fn test_identical_renders_have_no_changes() {
        let a = text_slot("<p>", "hi", "</p>");
        let delta = changes(&a, &a.clone()).unwrap();
        assert!(is_unchanged(&delta));
    }

    #[test]
    fn test_changed_text_only() {
        let a = text_slot("<p>", "hi", "</p>");
        let b = text_slot("<p>", "bye", "</p>");
        assert_eq!(changes(&a, &b).unwrap(), json!({"0": "bye"}));
    }

    #[test]
    fn test_changed_template_resends_everything() {
        let a = text_slot("<p>", "hi", "</p>");
        let b = text_slot("<h1>", "hi", "</h1>");
        assert_eq!(
            changes(&a, &b).unwrap(),
            json!({"s": ["<h1>", "</h1>"], "0": "hi"})
        );
    }

    #[test]
    fn test_nested_change_is_recursive() {
        let mut a = Rend::new();
        a.add_dynamic(text_slot("<b>", "1", "</b>"), &mut "<div>".to_string());
        a.seal(&mut "</div>".to_string());
        let mut b = Rend::new();
        b.add_dynamic(text_slot("<b>", "2", "</b>"), &mut "<div>".to_string());
        b.seal(&mut "</div>".to_string());

        assert_eq!(changes(&a, &b).unwrap(), json!({"0": {"0": "2"}}));
    }
}
