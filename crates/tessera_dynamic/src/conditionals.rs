//! Conditional rendering.
//!
//! Every helper wraps the chosen branch in a dynamic slot. Helpers that can
//! choose nothing return `Option<WrapNode>`, which renders no slot at all
//! when `None`.

use tessera_rend::{AnyNode, IntoNode};

use crate::{wrap, WrapNode};

/// One arm of [`switch`]: matches when the switched value equals `value`.
pub struct Case<T> {
    value: T,
    result: AnyNode,
}

/// One arm of [`when`]: matches when `condition` holds.
pub struct WhenCase {
    condition: bool,
    result: AnyNode,
}

pub fn case<T>(value: T, result: impl IntoNode) -> Case<T> {
    Case {
        value,
        result: result.into_node(),
    }
}

pub fn when_is(condition: bool, result: impl IntoNode) -> WhenCase {
    WhenCase {
        condition,
        result: result.into_node(),
    }
}

pub fn if_then(condition: bool, then: impl IntoNode) -> Option<WrapNode> {
    condition.then(|| wrap(then))
}

/// Like [`if_then`], building the branch only when it is taken.
pub fn if_then_with<N: IntoNode>(condition: bool, then: impl FnOnce() -> N) -> Option<WrapNode> {
    condition.then(|| wrap(then()))
}

pub fn if_else(condition: bool, then: impl IntoNode, otherwise: impl IntoNode) -> WrapNode {
    if condition {
        wrap(then)
    } else {
        wrap(otherwise)
    }
}

pub fn if_else_with<A, B>(
    condition: bool,
    then: impl FnOnce() -> A,
    otherwise: impl FnOnce() -> B,
) -> WrapNode
where
    A: IntoNode,
    B: IntoNode,
{
    if condition {
        wrap(then())
    } else {
        wrap(otherwise())
    }
}

pub fn unless(condition: bool, then: impl IntoNode) -> Option<WrapNode> {
    if_then(!condition, then)
}

pub fn unless_with<N: IntoNode>(condition: bool, then: impl FnOnce() -> N) -> Option<WrapNode> {
    if_then_with(!condition, then)
}

/// The first case whose value equals `value`.
pub fn switch<T: PartialEq>(value: &T, cases: Vec<Case<T>>) -> Option<WrapNode> {
    cases
        .into_iter()
        .find(|case| case.value == *value)
        .map(|case| wrap(case.result))
}

pub fn switch_default<T: PartialEq>(
    value: &T,
    default: impl IntoNode,
    cases: Vec<Case<T>>,
) -> WrapNode {
    switch(value, cases).unwrap_or_else(|| wrap(default))
}

/// The first case whose condition holds.
pub fn when(cases: Vec<WhenCase>) -> Option<WrapNode> {
    cases
        .into_iter()
        .find(|case| case.condition)
        .map(|case| wrap(case.result))
}

pub fn when_default(default: impl IntoNode, cases: Vec<WhenCase>) -> WrapNode {
    when(cases).unwrap_or_else(|| wrap(default))
}

pub fn show(condition: bool, content: impl IntoNode) -> Option<WrapNode> {
    if_then(condition, content)
}

pub fn hide(condition: bool, content: impl IntoNode) -> Option<WrapNode> {
    unless(condition, content)
}
