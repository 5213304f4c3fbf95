//! One client's render session.

use serde_json::Value;
use tessera_rend::{
    changes, render_diff, to_value, Node, Rend, RenderResult, Root, RootOptions,
};

/// Owns the [`Root`] of one connected client and the last render sent to it.
///
/// The first update sends the whole render; later updates send only the
/// slots that changed since the previous one.
#[derive(Debug, Default)]
pub struct Session {
    root: Root,
    last: Option<Rend>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: &RootOptions) -> Self {
        Self {
            root: Root::with_options(options),
            last: None,
        }
    }

    /// Render in diff mode and remember the result.
    pub fn render(&mut self, node: &dyn Node) -> RenderResult<Rend> {
        let rend = render_diff(&mut self.root, node)?;
        self.last = Some(rend.clone());
        Ok(rend)
    }

    /// Render and return the wire value to send: the full render the first
    /// time, a change-only delta afterwards.
    pub fn update(&mut self, node: &dyn Node) -> RenderResult<Value> {
        let next = render_diff(&mut self.root, node)?;
        let value = match &self.last {
            Some(prev) => changes(prev, &next)?,
            None => to_value(&next)?,
        };
        self.last = Some(next);
        Ok(value)
    }

    /// The most recent render, if any.
    pub fn last(&self) -> Option<&Rend> {
        self.last.as_ref()
    }

    pub fn root(&self) -> &Root {
        &self.root
    }
}
