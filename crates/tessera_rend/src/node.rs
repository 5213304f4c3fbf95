//! The node rendering contract.

use crate::{Rend, RenderResult, Root};

/// Something that can render itself into a text buffer.
///
/// In full mode (`diff == false`) every node writes plain HTML into `buf`.
/// In diff mode, literal content is still written into `buf`; only dynamic
/// boundaries flush `buf` into `rend` as the next static fragment and
/// append their nested render as the next dynamic value.
pub trait Node {
    /// Render into `buf`, splitting into `rend` at dynamic boundaries when `diff` is set.
    fn render(
        &self,
        diff: bool,
        root: &mut Root,
        rend: &mut Rend,
        buf: &mut String,
    ) -> RenderResult<()>;

    /// Whether the node renders inside an opening tag rather than as content.
    fn is_attribute(&self) -> bool {
        false
    }
}

/// A boxed, type-erased node.
pub type AnyNode = Box<dyn Node>;

impl<N: Node + ?Sized> Node for Box<N> {
    fn render(
        &self,
        diff: bool,
        root: &mut Root,
        rend: &mut Rend,
        buf: &mut String,
    ) -> RenderResult<()> {
        (**self).render(diff, root, rend, buf)
    }

    fn is_attribute(&self) -> bool {
        (**self).is_attribute()
    }
}

/// An absent node renders nothing and leaves no slot.
impl<N: Node> Node for Option<N> {
    fn render(
        &self,
        diff: bool,
        root: &mut Root,
        rend: &mut Rend,
        buf: &mut String,
    ) -> RenderResult<()> {
        match self {
            Some(node) => node.render(diff, root, rend, buf),
            None => Ok(()),
        }
    }

    fn is_attribute(&self) -> bool {
        self.as_ref().is_some_and(Node::is_attribute)
    }
}

/// A list of nodes renders each in order with no wrapper.
impl<N: Node> Node for Vec<N> {
    fn render(
        &self,
        diff: bool,
        root: &mut Root,
        rend: &mut Rend,
        buf: &mut String,
    ) -> RenderResult<()> {
        for node in self {
            node.render(diff, root, rend, buf)?;
        }
        Ok(())
    }
}

/// Conversion into an [`AnyNode`].
pub trait IntoNode {
    fn into_node(self) -> AnyNode;
}

impl<N: Node + 'static> IntoNode for N {
    #[inline]
    fn into_node(self) -> AnyNode {
        Box::new(self)
    }
}

/// Build a `Vec<AnyNode>` from heterogeneous nodes.
///
/// ```
/// use tessera_rend::{nodes, render_full, Node, Rend, RenderResult, Root};
///
/// struct Raw(&'static str);
///
/// impl Node for Raw {
///     fn render(
///         &self,
///         _: bool,
///         _: &mut Root,
///         _: &mut Rend,
///         buf: &mut String,
///     ) -> RenderResult<()> {
///         buf.push_str(self.0);
///         Ok(())
///     }
/// }
///
/// let children = nodes![Raw("<b>"), Some(Raw("hi")), Raw("</b>")];
/// assert_eq!(render_full(&children).unwrap(), "<b>hi</b>");
/// ```
#[macro_export]
macro_rules! nodes {
    () => {
        ::std::vec::Vec::<$crate::AnyNode>::new()
    };
    ($($node:expr),+ $(,)?) => {
        ::std::vec![$($crate::IntoNode::into_node($node)),+]
    };
}
