//! Multi-render session tests: diff, delta, and client application.

use serde_json::json;
use tessera_dynamic::{component, if_else, range, show, stream, text, wrap};
use tessera_html::{attr, div, h1, id_attr, li, nodes, p, raw, span, ul, Element};
use tessera_rend::{changes, is_unchanged, render_diff, render_full, to_value, Rendered, Root};
use tessera_stream::Stream;

struct Post {
    id: u32,
    body: &'static str,
}

fn dom_id(post: &Post) -> String {
    format!("posts-{}", post.id)
}

fn feed_view(title: &str, feed: &Stream<Post>) -> Element {
    div(nodes![
        id_attr("app"),
        h1(nodes![text(title)]),
        show(feed.is_empty(), p(nodes![raw("No posts")])),
        ul(nodes![stream(feed, |post| {
            component(li(nodes![wrap(id_attr(dom_id(post))), text(post.body)]))
        })]),
    ])
}

#[test]
fn stream_session_round_trip() {
    let mut feed = Stream::with_id("posts", dom_id);
    let mut root = Root::new();
    let mut client = Rendered::new();

    feed.insert(Post { id: 1, body: "hello" });
    feed.insert(Post { id: 2, body: "world" });
    let first = render_diff(&mut root, &feed_view("Posts", &feed)).unwrap();
    client.apply(&to_value(&first).unwrap()).unwrap();
    feed.clear_pending();

    assert!(first.is_balanced());
    assert_eq!(
        client.to_html(),
        r#"<div id="app"><h1>Posts</h1><ul><li id="posts-1">hello</li><li id="posts-2">world</li></ul></div>"#
    );
    assert_eq!(client.component_count(), 1);

    feed.delete(&Post { id: 1, body: "hello" }).unwrap();
    feed.insert_at(Post { id: 3, body: "first" }, 0, None);
    let second = render_diff(&mut root, &feed_view("Posts (2)", &feed)).unwrap();
    let delta = changes(&first, &second).unwrap();
    feed.clear_pending();

    assert_eq!(delta["0"], "Posts (2)");
    assert_eq!(delta["1"]["stream"], json!([2, [["posts-3", 0, null]], ["posts-1"]]));
    // the row template is already known to the client
    assert_eq!(delta["1"]["d"][0][0]["s"], 1);

    client.apply(&delta).unwrap();
    assert_eq!(
        client.to_html(),
        r#"<div id="app"><h1>Posts (2)</h1><ul><li id="posts-3">first</li><li id="posts-2">world</li></ul></div>"#
    );
    assert_eq!(feed.dom_ids(), ["posts-3", "posts-2"]);
}

fn live_view(title: &str, notice: bool, feed: &Stream<Post>) -> Element {
    div(nodes![
        h1(nodes![text(title)]),
        show(notice, p(nodes![raw("New posts")])),
        ul(nodes![
            id_attr("posts"),
            attr("phx-update", "stream"),
            stream(feed, |post| li(nodes![wrap(id_attr(dom_id(post))), text(post.body)])),
        ]),
    ])
}

fn list(posts: &str) -> String {
    format!(r#"<ul id="posts" phx-update="stream">{}</ul></div>"#, posts)
}

#[test]
fn idle_stream_keeps_client_entries() {
    let mut feed = Stream::with_id("posts", dom_id);
    let mut root = Root::new();
    let mut client = Rendered::new();
    let hello = r#"<li id="posts-1">hello</li>"#;
    let world = r#"<li id="posts-2">world</li>"#;

    feed.insert(Post { id: 1, body: "hello" });
    let mut prev = render_diff(&mut root, &live_view("A", false, &feed)).unwrap();
    client.apply(&to_value(&prev).unwrap()).unwrap();
    feed.clear_pending();
    assert_eq!(client.to_html(), format!("<div><h1>A</h1>{}", list(hello)));

    let mut step = |title: &str, notice: bool, feed: &Stream<Post>| {
        let next = render_diff(&mut root, &live_view(title, notice, feed)).unwrap();
        let delta = changes(&prev, &next).unwrap();
        client.apply(&delta).unwrap();
        prev = next;
        (delta, client.to_html())
    };

    // nothing pending: the stream slot is omitted and the template changes
    let (delta, html) = step("B", false, &feed);
    assert!(delta.get("s").is_some());
    assert_eq!(html, format!("<div><h1>B</h1>{}", list(hello)));

    // a conditional appears next to the idle stream
    let (_, html) = step("B", true, &feed);
    assert_eq!(html, format!("<div><h1>B</h1><p>New posts</p>{}", list(hello)));

    // the stream slot returns and extends the kept entries
    feed.insert(Post { id: 2, body: "world" });
    let (_, html) = step("B", true, &feed);
    feed.clear_pending();
    assert_eq!(
        html,
        format!("<div><h1>B</h1><p>New posts</p>{}", list(&format!("{hello}{world}")))
    );

    let (_, html) = step("C", false, &feed);
    assert_eq!(html, format!("<div><h1>C</h1>{}", list(&format!("{hello}{world}"))));

    // same template again: a plain slot patch
    let (delta, html) = step("D", false, &feed);
    assert_eq!(delta, json!({"0": "D"}));
    assert_eq!(html, format!("<div><h1>D</h1>{}", list(&format!("{hello}{world}"))));
}

fn counter_view(count: i64, tags: &[&str]) -> Element {
    div(nodes![
        span(nodes![text(count)]),
        if_else(count == 1, raw(" item"), raw(" items")),
        ul(nodes![range(tags.iter().copied(), |tag| li(nodes![text(tag)]))]),
    ])
}

#[test]
fn client_matches_full_render_after_each_delta() {
    let mut root = Root::new();
    let mut client = Rendered::new();
    let mut prev = None;

    for (count, tags) in [(0, vec!["a"]), (1, vec!["a", "b"]), (1, vec!["a", "b"]), (5, vec![])] {
        let view = counter_view(count, &tags);
        let next = render_diff(&mut root, &view).unwrap();
        let payload = match &prev {
            Some(prev) => changes(prev, &next).unwrap(),
            None => to_value(&next).unwrap(),
        };
        client.apply(&payload).unwrap();
        assert_eq!(client.to_html(), render_full(&view).unwrap(), "count {}", count);

        if prev.as_ref() == Some(&next) {
            assert!(is_unchanged(&payload));
        }
        prev = Some(next);
    }
}
