//! Render entry points.

use tessera_carton::hash_to_hex;

use crate::{Node, Rend, RenderResult, Root};

/// Render a node tree to plain HTML.
///
/// Dynamic boundaries render straight into the output; the throwaway
/// [`Root`] is never consulted for counters that reach the wire.
pub fn render_full(node: &dyn Node) -> RenderResult<String> {
    let mut root = Root::new();
    let mut rend = Rend::new();
    let mut buf = String::new();
    node.render(false, &mut root, &mut rend, &mut buf)?;
    Ok(buf)
}

/// Render a node tree into its static/dynamic split for one session.
pub fn render_diff(root: &mut Root, node: &dyn Node) -> RenderResult<Rend> {
    let _span = tracing::debug_span!("render_diff").entered();
    let rend = render_nested(root, node)?;
    tracing::debug!(
        statics = rend.statics.len(),
        dynamics = rend.dynamics.len(),
        fingerprint = %hash_to_hex(rend.fingerprint()),
        "rendered diff"
    );
    Ok(rend)
}

/// Render a subtree into a fresh accumulator, in diff mode.
///
/// Dynamic boundaries call this for the subtree they wrap and splice the
/// sealed result into their parent.
pub fn render_nested(root: &mut Root, node: &dyn Node) -> RenderResult<Rend> {
    let mut rend = Rend::new();
    let mut buf = String::new();
    node.render(true, root, &mut rend, &mut buf)?;
    rend.seal(&mut buf);
    Ok(rend)
}
