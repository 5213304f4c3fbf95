//! Convenience components wired to client-side conventions.
//!
//! Each builder produces a plain [`Element`]; options follow the element's
//! built-in attributes, and slot children follow the attributes.

use tessera_rend::{nodes, AnyNode};

use crate::tags::{a, div, href_attr, id_attr, span, tabindex_attr, title};
use crate::{aria_attr, attr, attrs, data_attr, flag, fragment, Element};

/// `<title>` that the client prefixes and suffixes on page title updates.
#[derive(Default)]
pub struct Title {
    prefix: String,
    suffix: String,
    default: String,
    attrs: Vec<AnyNode>,
    children: Vec<AnyNode>,
}

impl Title {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    pub fn suffix(mut self, suffix: impl Into<String>) -> Self {
        self.suffix = suffix.into();
        self
    }

    /// Title used when the page title is empty.
    pub fn default_title(mut self, title: impl Into<String>) -> Self {
        self.default = title.into();
        self
    }

    pub fn attr(mut self, attr: AnyNode) -> Self {
        self.attrs.push(attr);
        self
    }

    pub fn slot(mut self, children: Vec<AnyNode>) -> Self {
        self.children = children;
        self
    }

    pub fn build(self) -> Element {
        title(nodes![
            data_attr("prefix", self.prefix),
            data_attr("default", self.default),
            data_attr("suffix", self.suffix),
            flag("phx-no-format"),
            attrs(self.attrs),
            fragment(self.children),
        ])
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LinkKind {
    /// Mount a new view over the live connection
    Navigate,
    /// Patch the current view
    Patch,
    /// Ordinary browser navigation
    Href,
}

/// `<a>` with live navigation attributes.
pub struct Link {
    kind: LinkKind,
    href: String,
    method: Option<String>,
    replace: bool,
    attrs: Vec<AnyNode>,
    children: Vec<AnyNode>,
}

impl Link {
    fn with_kind(kind: LinkKind, href: impl Into<String>) -> Self {
        Self {
            kind,
            href: href.into(),
            method: None,
            replace: false,
            attrs: Vec::new(),
            children: Vec::new(),
        }
    }

    pub fn navigate(to: impl Into<String>) -> Self {
        Self::with_kind(LinkKind::Navigate, to)
    }

    pub fn patch(to: impl Into<String>) -> Self {
        Self::with_kind(LinkKind::Patch, to)
    }

    pub fn href(href: impl Into<String>) -> Self {
        Self::with_kind(LinkKind::Href, href)
    }

    /// HTTP method for plain links; anything but `get` adds `data-method`.
    pub fn method(mut self, method: impl Into<String>) -> Self {
        self.method = Some(method.into());
        self
    }

    /// Replace the history entry instead of pushing one.
    pub fn replace(mut self, replace: bool) -> Self {
        self.replace = replace;
        self
    }

    pub fn attr(mut self, attr: AnyNode) -> Self {
        self.attrs.push(attr);
        self
    }

    pub fn slot(mut self, children: Vec<AnyNode>) -> Self {
        self.children = children;
        self
    }

    pub fn build(self) -> Element {
        let state = if self.replace { "replace" } else { "push" };
        let mut children = nodes![href_attr(self.href.clone())];
        match self.kind {
            LinkKind::Navigate | LinkKind::Patch => {
                let mode = if self.kind == LinkKind::Navigate {
                    "redirect"
                } else {
                    "patch"
                };
                children.push(Box::new(data_attr("phx-link", mode)));
                children.push(Box::new(data_attr("phx-link-state", state)));
            }
            LinkKind::Href => match self.method.as_deref() {
                Some(method) if method != "get" => {
                    children.push(Box::new(data_attr("method", method)));
                    children.push(Box::new(data_attr("to", self.href)));
                }
                _ => {}
            },
        }
        children.push(Box::new(attrs(self.attrs)));
        children.push(Box::new(fragment(self.children)));
        a(children)
    }
}

/// A `<div>` that keeps keyboard focus cycling inside its children.
pub struct FocusWrap {
    id: String,
    attrs: Vec<AnyNode>,
    children: Vec<AnyNode>,
}

impl FocusWrap {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            attrs: Vec::new(),
            children: Vec::new(),
        }
    }

    pub fn attr(mut self, attr: AnyNode) -> Self {
        self.attrs.push(attr);
        self
    }

    pub fn slot(mut self, children: Vec<AnyNode>) -> Self {
        self.children = children;
        self
    }

    pub fn build(self) -> Element {
        let guard = |suffix: &str| {
            span(nodes![
                id_attr(format!("{}-{}", self.id, suffix)),
                tabindex_attr("0"),
                aria_attr("hidden", "true"),
            ])
        };
        let start = guard("start");
        let end = guard("end");
        div(nodes![
            id_attr(self.id.clone()),
            attr("phx-hook", "Phoenix.FocusWrap"),
            attrs(self.attrs),
            start,
            fragment(self.children),
            end,
        ])
    }
}
