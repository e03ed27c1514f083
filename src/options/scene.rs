//! Mark store options.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Scene", inline)]
#[serde(default)]
/// Mark store sizing.
pub struct SceneOptions {
    /// Marks per octree leaf before it splits.
    #[schemars(title = "Bucket Size", range(min = 1, max = 4096))]
    pub bucket_size: u32,
    /// Half-extent of the cube (centered at the origin) that accepts marks.
    #[schemars(
        title = "Extent",
        range(min = 1.0, max = 10000.0),
        extend("step" = 1.0)
    )]
    pub extent: f32,
    /// Upper bound on marks returned by one visibility query.
    #[schemars(skip)]
    pub max_visible: usize,
}

impl Default for SceneOptions {
    fn default() -> Self {
        Self {
            bucket_size: 128,
            extent: 50.0,
            max_visible: 1_000_000,
        }
    }
}
