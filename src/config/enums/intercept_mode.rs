use serde::{Deserialize, Serialize};

/// `precomputed` derives the key from the route before rendering;
/// `render_time` lets the renderer decide mid-render through a `CacheDecision`.
#[allow(non_camel_case_types)]
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub enum InterceptMode {
    #[default]
    precomputed,
    render_time,
}
