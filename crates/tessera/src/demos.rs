//! Demo views driven by the `tessera` command.
//!
//! Each demo is a small stateful [`View`] advanced one step at a time and
//! rendered after every step, the way a host application re-renders after
//! handling an event.

use clap::ValueEnum;
use tessera_dynamic::{component, if_else, range, stream, text, wrap};
use tessera_html::phx::{Link, Title};
use tessera_html::{
    attr, button, class_attr, data_attr, div, h1, id_attr, li, nodes, p, raw, span, ul,
};
use tessera_rend::{
    render_full, to_json, to_json_pretty, AnyNode, IntoNode, RenderError, RootOptions,
};
use tessera_stream::{Stream, StreamError};

use crate::Session;

#[derive(Debug, thiserror::Error)]
pub enum DemoError {
    #[error(transparent)]
    Render(#[from] RenderError),

    #[error(transparent)]
    Stream(#[from] StreamError),
}

pub type DemoResult<T> = Result<T, DemoError>;

/// A stateful view.
pub trait View {
    /// Apply the state change of `step`. Step 0 sets up the initial state.
    fn advance(&mut self, step: usize) -> DemoResult<()>;

    /// Build the node tree for the current state.
    fn render(&self) -> AnyNode;

    /// Called once the render of a step has been sent.
    fn sent(&mut self) {}
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Demo {
    /// A click counter with a pluralized label
    Counter,
    /// A user table rendered as a range of components
    Users,
    /// A post feed rendered as a keyed stream
    Feed,
}

/// Output format of one rendered step.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum Format {
    /// Plain HTML
    #[default]
    Html,
    /// The full statics/dynamics render of every step
    Json,
    /// The full render first, then change-only deltas
    Delta,
}

impl Demo {
    pub const ALL: [Demo; 3] = [Demo::Counter, Demo::Users, Demo::Feed];

    pub fn name(self) -> &'static str {
        match self {
            Self::Counter => "counter",
            Self::Users => "users",
            Self::Feed => "feed",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Self::Counter => "click counter with a pluralized label",
            Self::Users => "user list rendered as a range of components",
            Self::Feed => "post feed rendered as a keyed stream",
        }
    }

    pub fn view(self) -> Box<dyn View> {
        match self {
            Self::Counter => Box::new(Counter::default()),
            Self::Users => Box::new(Users::default()),
            Self::Feed => Box::new(Feed::new()),
        }
    }
}

/// Render `steps` steps of a demo, one output string per step.
pub fn render_steps(
    demo: Demo,
    format: Format,
    steps: usize,
    options: &RootOptions,
    pretty: bool,
) -> DemoResult<Vec<String>> {
    let mut view = demo.view();
    let mut session = Session::with_options(options);
    let mut frames = Vec::with_capacity(steps);

    for step in 0..steps {
        view.advance(step)?;
        let node = view.render();
        let frame = match format {
            Format::Html => render_full(&node)?,
            Format::Json => {
                let rend = session.render(&node)?;
                if pretty {
                    to_json_pretty(&rend)?
                } else {
                    to_json(&rend)?
                }
            }
            Format::Delta => {
                let value = session.update(&node)?;
                if pretty {
                    serde_json::to_string_pretty(&value).map_err(RenderError::from)?
                } else {
                    value.to_string()
                }
            }
        };
        view.sent();
        tracing::debug!(demo = demo.name(), step, bytes = frame.len(), "rendered step");
        frames.push(frame);
    }
    Ok(frames)
}

#[derive(Debug, Default)]
struct Counter {
    count: i64,
}

impl View for Counter {
    fn advance(&mut self, step: usize) -> DemoResult<()> {
        if step > 0 {
            self.count += 1;
        }
        Ok(())
    }

    fn render(&self) -> AnyNode {
        div(nodes![
            class_attr("counter"),
            h1(nodes![raw("Counter")]),
            p(nodes![
                text(self.count),
                if_else(self.count == 1, raw(" click"), raw(" clicks")),
            ]),
            button(nodes![attr("phx-click", "inc"), raw("+")]),
        ])
        .into_node()
    }
}

#[derive(Debug, Default)]
struct Users {
    users: Vec<(u32, String)>,
    next_id: u32,
}

impl Users {
    fn add(&mut self, name: &str) {
        self.next_id += 1;
        self.users.push((self.next_id, name.to_owned()));
    }
}

impl View for Users {
    /// Odd steps add a user, even steps remove the oldest.
    fn advance(&mut self, step: usize) -> DemoResult<()> {
        match step {
            0 => {
                self.add("ada");
                self.add("grace");
            }
            n if n % 2 == 1 => self.add(&format!("user {}", n)),
            _ => {
                if !self.users.is_empty() {
                    self.users.remove(0);
                }
            }
        }
        Ok(())
    }

    fn render(&self) -> AnyNode {
        div(nodes![
            h1(nodes![raw("Users ("), text(self.users.len()), raw(")")]),
            ul(nodes![
                id_attr("users"),
                range(&self.users, |(id, name)| {
                    component(li(nodes![wrap(data_attr("id", id.to_string())), text(name)]))
                }),
            ]),
            Link::patch("/users?page=2")
                .slot(nodes![raw("Next page")])
                .build(),
        ])
        .into_node()
    }
}

struct Post {
    id: u32,
    body: String,
}

struct Feed {
    posts: Stream<Post>,
    next_id: u32,
}

impl Feed {
    fn new() -> Self {
        Self {
            posts: Stream::with_id("posts", |post: &Post| format!("posts-{}", post.id)),
            next_id: 0,
        }
    }

    fn post(&mut self) -> Post {
        self.next_id += 1;
        Post {
            id: self.next_id,
            body: format!("Post {}", self.next_id),
        }
    }
}

impl View for Feed {
    /// Step 0 inserts three posts. After that the steps cycle through
    /// prepend-and-drop-oldest, append, and reset.
    fn advance(&mut self, step: usize) -> DemoResult<()> {
        match step {
            0 => {
                for _ in 0..3 {
                    let post = self.post();
                    self.posts.insert(post);
                }
            }
            n if n % 3 == 1 => {
                if let Some(oldest) = self.posts.dom_ids().last().cloned() {
                    self.posts.delete_by_id(&oldest)?;
                }
                let post = self.post();
                self.posts.insert_at(post, 0, Some(10));
            }
            n if n % 3 == 2 => {
                let post = self.post();
                self.posts.insert(post);
            }
            _ => {
                self.posts.reset();
                let post = self.post();
                self.posts.insert(post);
            }
        }
        Ok(())
    }

    fn render(&self) -> AnyNode {
        div(nodes![
            Title::new().prefix("Feed | ").build(),
            ul(nodes![
                id_attr("posts"),
                attr("phx-update", "stream"),
                stream(&self.posts, |post| {
                    li(nodes![
                        wrap(id_attr(format!("posts-{}", post.id))),
                        span(nodes![text(&post.body)]),
                    ])
                }),
            ]),
        ])
        .into_node()
    }

    fn sent(&mut self) {
        self.posts.clear_pending();
    }
}
