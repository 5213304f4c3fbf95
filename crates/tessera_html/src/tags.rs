//! Shorthand constructors for common elements and attributes.

use tessera_rend::AnyNode;

use crate::{attr, element, flag, void, Attribute, Element, Void};

macro_rules! elements {
    ($($name:ident => $tag:literal),* $(,)?) => {
        $(
            #[doc = concat!("`<", $tag, ">` element.")]
            #[inline]
            pub fn $name(children: Vec<AnyNode>) -> Element {
                element($tag, children)
            }
        )*
    };
}

macro_rules! voids {
    ($($name:ident => $tag:literal),* $(,)?) => {
        $(
            #[doc = concat!("`<", $tag, "/>` void element.")]
            #[inline]
            pub fn $name(children: Vec<AnyNode>) -> Void {
                void($tag, children)
            }
        )*
    };
}

macro_rules! attributes {
    ($($name:ident => $attr:literal),* $(,)?) => {
        $(
            #[doc = concat!("`", $attr, "=\"...\"` attribute.")]
            #[inline]
            pub fn $name(value: impl Into<String>) -> Attribute {
                attr($attr, value)
            }
        )*
    };
}

macro_rules! flags {
    ($($name:ident => $attr:literal),* $(,)?) => {
        $(
            #[doc = concat!("`", $attr, "` boolean attribute.")]
            #[inline]
            pub fn $name() -> Attribute {
                flag($attr)
            }
        )*
    };
}

elements! {
    html => "html",
    head => "head",
    body => "body",
    title => "title",
    script => "script",
    style => "style",
    header => "header",
    footer => "footer",
    nav => "nav",
    section => "section",
    article => "article",
    div => "div",
    span => "span",
    p => "p",
    a => "a",
    h1 => "h1",
    h2 => "h2",
    h3 => "h3",
    strong => "strong",
    em => "em",
    pre => "pre",
    code => "code",
    ul => "ul",
    ol => "ol",
    li => "li",
    table => "table",
    thead => "thead",
    tbody => "tbody",
    tr => "tr",
    th => "th",
    td => "td",
    form => "form",
    label => "label",
    button => "button",
    select => "select",
    option => "option",
    textarea => "textarea",
}

voids! {
    br => "br",
    hr => "hr",
    img => "img",
    input => "input",
    link => "link",
    meta => "meta",
}

attributes! {
    id_attr => "id",
    class_attr => "class",
    style_attr => "style",
    title_attr => "title",
    href_attr => "href",
    src_attr => "src",
    alt_attr => "alt",
    rel_attr => "rel",
    type_attr => "type",
    name_attr => "name",
    value_attr => "value",
    for_attr => "for",
    placeholder_attr => "placeholder",
    action_attr => "action",
    method_attr => "method",
    lang_attr => "lang",
    charset_attr => "charset",
    content_attr => "content",
    role_attr => "role",
    tabindex_attr => "tabindex",
}

flags! {
    async_attr => "async",
    defer_attr => "defer",
    checked_attr => "checked",
    disabled_attr => "disabled",
    hidden_attr => "hidden",
    required_attr => "required",
    selected_attr => "selected",
}
