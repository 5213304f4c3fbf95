//! Stream boundaries.

use tessera_rend::{
    render_nested, AnyNode, Insert, IntoNode, Node, Rend, RenderResult, Root, StreamPatch,
};
use tessera_stream::Stream;

/// The pending changes of a [`Stream`], captured for one render.
pub struct StreamNode {
    patch: StreamPatch,
    /// Rendered additions, aligned with `patch.inserts`
    items: Vec<AnyNode>,
}

/// Render the queued additions of `stream` with `f`.
///
/// Only pending changes are rendered: additions as inserts, deletions by
/// DOM id, and the reset flag. With nothing pending the boundary renders
/// nothing, in either mode. Call [`Stream::clear_pending`] once the render
/// has been sent.
pub fn stream<T, F, N>(stream: &Stream<T>, mut f: F) -> StreamNode
where
    F: FnMut(&T) -> N,
    N: IntoNode,
{
    let (inserts, items): (Vec<Insert>, Vec<AnyNode>) = stream
        .additions()
        .iter()
        .map(|addition| {
            let insert = Insert::new(addition.dom_id.clone(), addition.at, addition.limit);
            (insert, f(&addition.item).into_node())
        })
        .unzip();

    StreamNode {
        patch: StreamPatch {
            inserts,
            deletes: stream.deletions().to_vec(),
            reset: stream.is_reset(),
        },
        items,
    }
}

impl StreamNode {
    pub fn patch(&self) -> &StreamPatch {
        &self.patch
    }
}

impl Node for StreamNode {
    fn render(
        &self,
        diff: bool,
        root: &mut Root,
        rend: &mut Rend,
        buf: &mut String,
    ) -> RenderResult<()> {
        if self.patch.is_empty() {
            tracing::trace!("stream has nothing pending");
            return Ok(());
        }
        if !diff {
            return self.items.render(diff, root, rend, buf);
        }
        let items = self
            .items
            .iter()
            .map(|item| render_nested(root, item))
            .collect::<RenderResult<Vec<_>>>()?;
        rend.add_stream(root, self.patch.clone(), items, buf)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{text, wrap};
    use tessera_html::{id_attr, li, ul};
    use tessera_rend::{nodes, render_diff, render_full, to_json};

    struct User {
        id: u32,
        name: &'static str,
    }

    fn users() -> Stream<User> {
        Stream::with_id("users", |u: &User| format!("users-{}", u.id))
    }

    fn view(s: &Stream<User>) -> tessera_html::Element {
        ul(nodes![
            id_attr("users"),
            stream(s, |u| li(nodes![wrap(id_attr(format!("users-{}", u.id))), text(u.name)])),
        ])
    }

    fn json(root: &mut Root, node: &dyn Node) -> String {
        to_json(&render_diff(root, node).unwrap()).unwrap()
    }

    #[test]
    fn test_nothing_pending() {
        let s = users();
        let node = view(&s);
        assert!(stream(&s, |u| text(u.name)).patch().is_empty());
        assert_eq!(render_full(&node).unwrap(), r#"<ul id="users"></ul>"#);
        assert_eq!(json(&mut Root::new(), &node), r#"{"s":["<ul id=\"users\"></ul>"]}"#);
    }

    #[test]
    fn test_inserts() {
        let mut s = users();
        s.insert(User { id: 1, name: "ada" });
        s.insert(User { id: 2, name: "bob" });
        let node = view(&s);

        assert_eq!(
            render_full(&node).unwrap(),
            r#"<ul id="users"><li id="users-1">ada</li><li id="users-2">bob</li></ul>"#
        );
        insta::assert_snapshot!(
            json(&mut Root::new(), &node),
            @r#"{"s":["<ul id=\"users\">","</ul>"],"0":{"s":["<li",">","</li>"],"d":[[" id=\"users-1\"","ada"],[" id=\"users-2\"","bob"]],"stream":[1,[["users-1",-1,null],["users-2",-1,null]],[]]}}"#
        );
    }

    #[test]
    fn test_delete_then_reset() {
        let mut s = users();
        s.extend([User { id: 1, name: "ada" }, User { id: 2, name: "bob" }]);
        s.clear_pending();
        let mut root = Root::new();

        s.delete(&User { id: 1, name: "ada" }).unwrap();
        insta::assert_snapshot!(
            json(&mut root, &view(&s)),
            @r#"{"s":["<ul id=\"users\">","</ul>"],"0":{"stream":[1,[],["users-1"]]}}"#
        );
        s.clear_pending();

        s.reset();
        s.insert_at(User { id: 3, name: "cy" }, 0, Some(10));
        insta::assert_snapshot!(
            json(&mut root, &view(&s)),
            @r#"{"s":["<ul id=\"users\">","</ul>"],"0":{"s":["<li",">","</li>"],"d":[[" id=\"users-3\"","cy"]],"stream":[2,[["users-3",0,10]],[],true]}}"#
        );
    }
}
