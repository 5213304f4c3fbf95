//! Session root options.

use serde::{Deserialize, Serialize};

/// Options for a session [`Root`](crate::Root).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RootOptions {
    /// Base value of the stream operation counter (first id is base + 1)
    #[serde(default)]
    pub stream_base: i64,

    /// Base value of the component id counter (first id is base + 1)
    #[serde(default)]
    pub component_base: i64,
}
