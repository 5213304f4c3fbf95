//! Attribute nodes.
//!
//! Attributes render inside the opening tag of their element, as ` name` or
//! ` name="value"`. Values are escaped for a double-quoted context.

use std::fmt::Write;

use tessera_carton::{escape_html_attr, CompactString};
use tessera_rend::{AnyNode, Node, Rend, RenderResult, Root};

/// A single attribute. Multiple values are concatenated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attribute {
    name: CompactString,
    values: Vec<String>,
}

/// A group of attribute nodes rendered in order.
pub struct Attributes {
    attrs: Vec<AnyNode>,
}

/// `name="value"`.
pub fn attr(name: impl Into<CompactString>, value: impl Into<String>) -> Attribute {
    Attribute {
        name: name.into(),
        values: vec![value.into()],
    }
}

/// A value-less attribute such as `disabled`.
pub fn flag(name: impl Into<CompactString>) -> Attribute {
    Attribute {
        name: name.into(),
        values: Vec::new(),
    }
}

/// `data-name="value"`.
pub fn data_attr(name: &str, value: impl Into<String>) -> Attribute {
    attr(tessera_carton::format_compact!("data-{}", name), value)
}

/// `aria-name="value"`.
pub fn aria_attr(name: &str, value: impl Into<String>) -> Attribute {
    attr(tessera_carton::format_compact!("aria-{}", name), value)
}

/// Group attribute nodes so they can be passed as one child.
pub fn attrs(attrs: Vec<AnyNode>) -> Attributes {
    Attributes { attrs }
}

impl Attribute {
    /// Append another value, concatenated without a separator.
    pub fn value(mut self, value: impl Into<String>) -> Self {
        self.values.push(value.into());
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn values(&self) -> &[String] {
        &self.values
    }
}

impl Node for Attribute {
    fn render(&self, _: bool, _: &mut Root, _: &mut Rend, buf: &mut String) -> RenderResult<()> {
        if self.values.is_empty() {
            write!(buf, " {}", self.name)?;
            return Ok(());
        }
        write!(buf, " {}=\"", self.name)?;
        for value in &self.values {
            buf.push_str(&escape_html_attr(value));
        }
        buf.push('"');
        Ok(())
    }

    fn is_attribute(&self) -> bool {
        true
    }
}

impl Node for Attributes {
    fn render(
        &self,
        diff: bool,
        root: &mut Root,
        rend: &mut Rend,
        buf: &mut String,
    ) -> RenderResult<()> {
        self.attrs.render(diff, root, rend, buf)
    }

    fn is_attribute(&self) -> bool {
        true
    }
}
