//! Text, raw markup, comment and fragment nodes.

use tessera_carton::escape_html;
use tessera_rend::{AnyNode, Node, Rend, RenderResult, Root};

/// Literal text, escaped on render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Text(String);

/// Markup written verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Raw(String);

/// `<!--comment-->`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Comment(String);

/// Children rendered in order with no wrapping element.
pub struct Fragment {
    children: Vec<AnyNode>,
}

pub fn text(value: impl Into<String>) -> Text {
    Text(value.into())
}

/// Trusted markup. The caller is responsible for its safety.
pub fn raw(value: impl Into<String>) -> Raw {
    Raw(value.into())
}

pub fn comment(value: impl Into<String>) -> Comment {
    Comment(value.into())
}

pub fn fragment(children: Vec<AnyNode>) -> Fragment {
    Fragment { children }
}

impl Node for Text {
    fn render(&self, _: bool, _: &mut Root, _: &mut Rend, buf: &mut String) -> RenderResult<()> {
        buf.push_str(&escape_html(&self.0));
        Ok(())
    }
}

impl Node for Raw {
    fn render(&self, _: bool, _: &mut Root, _: &mut Rend, buf: &mut String) -> RenderResult<()> {
        buf.push_str(&self.0);
        Ok(())
    }
}

impl Node for Comment {
    fn render(&self, _: bool, _: &mut Root, _: &mut Rend, buf: &mut String) -> RenderResult<()> {
        buf.push_str("<!--");
        buf.push_str(&self.0);
        buf.push_str("-->");
        Ok(())
    }
}

impl Node for Fragment {
    fn render(
        &self,
        diff: bool,
        root: &mut Root,
        rend: &mut Rend,
        buf: &mut String,
    ) -> RenderResult<()> {
        self.children.render(diff, root, rend, buf)
    }
}
