//! Range boundaries over plain collections.

use tessera_rend::{render_nested, AnyNode, IntoNode, Node, Rend, RenderResult, Root};

/// A list whose items share a template when they can.
pub struct RangeNode {
    items: Vec<AnyNode>,
}

/// Render one subtree per item.
///
/// In diff mode, items with identical statics are sent as one
/// comprehension; items of mixed shapes are sent as separate slots.
pub fn range<I, F, N>(items: I, mut f: F) -> RangeNode
where
    I: IntoIterator,
    F: FnMut(I::Item) -> N,
    N: IntoNode,
{
    RangeNode {
        items: items.into_iter().map(|item| f(item).into_node()).collect(),
    }
}

impl RangeNode {
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl Node for RangeNode {
    fn render(
        &self,
        diff: bool,
        root: &mut Root,
        rend: &mut Rend,
        buf: &mut String,
    ) -> RenderResult<()> {
        if !diff {
            return self.items.render(diff, root, rend, buf);
        }
        let items = self
            .items
            .iter()
            .map(|item| render_nested(root, item))
            .collect::<RenderResult<Vec<_>>>()?;
        rend.add_list(items, buf);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{component, text};
    use tessera_html::{div, raw};
    use tessera_rend::{nodes, render_diff, render_full, to_json};

    fn json(node: &dyn Node) -> String {
        to_json(&render_diff(&mut Root::new(), node).unwrap()).unwrap()
    }

    #[test]
    fn test_simple_range() {
        let node = range(["a", "b", "c"], |s| div(nodes![text(s)]));
        assert_eq!(node.len(), 3);
        assert_eq!(
            render_full(&node).unwrap(),
            "<div>a</div><div>b</div><div>c</div>"
        );
        assert_eq!(
            json(&node),
            r#"{"s":["",""],"0":{"s":["<div>","</div>"],"d":[["a"],["b"],["c"]]}}"#
        );
    }

    #[test]
    fn test_range_inside_element() {
        let node = div(nodes![range(["a", "b"], |s| div(nodes![raw("Hello "), text(s)]))]);
        assert_eq!(
            render_full(&node).unwrap(),
            "<div><div>Hello a</div><div>Hello b</div></div>"
        );
    }

    #[test]
    fn test_nested_range() {
        let node = range(["a", "b"], |s| {
            range(["1", "2"], move |n| div(nodes![text(format!("{}{}", s, n))]))
        });
        assert_eq!(
            render_full(&node).unwrap(),
            "<div>a1</div><div>a2</div><div>b1</div><div>b2</div>"
        );
        assert_eq!(
            json(&node),
            r#"{"s":["",""],"0":{"s":["",""],"d":[[{"s":["<div>","</div>"],"d":[["a1"],["a2"]]}],[{"s":["<div>","</div>"],"d":[["b1"],["b2"]]}]]}}"#
        );
    }

    #[test]
    fn test_range_of_components() {
        let node = range(["a", "b"], |s| component(div(nodes![raw("Hello "), text(s)])));
        assert_eq!(
            render_full(&node).unwrap(),
            "<div>Hello a</div><div>Hello b</div>"
        );
        assert_eq!(
            json(&node),
            r#"{"s":["",""],"0":{"s":["",""],"d":[[{"s":["<div>Hello ","</div>"],"0":"a","c":1}],[{"s":1,"0":"b"}]]}}"#
        );
    }

    #[test]
    fn test_mixed_shapes() {
        let node = range([true, false], |bold| {
            if bold {
                div(nodes![text("x")])
            } else {
                div(nodes![raw("<i>"), text("y"), raw("</i>")])
            }
        });
        assert_eq!(
            json(&node),
            r#"{"s":["","",""],"0":{"s":["<div>","</div>"],"0":"x"},"1":{"s":["<div><i>","</i></div>"],"0":"y"}}"#
        );
    }

    #[test]
    fn test_empty_range() {
        let node = range(Vec::<u8>::new(), text);
        assert!(node.is_empty());
        assert_eq!(render_full(&node).unwrap(), "");
        assert_eq!(json(&node), r#"{"s":["",""],"0":{"d":[]}}"#);
    }
}
