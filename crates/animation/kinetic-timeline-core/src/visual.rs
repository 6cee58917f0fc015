//! Visual handles supplied by the host UI layer.
//!
//! The compiler only needs to know which visual a compiled animation belongs to;
//! attaching it to the visual's channel is the render engine's job.

use serde::{Deserialize, Serialize};

/// Opaque identifier of a render-target visual.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct VisualId(pub u64);

/// Anything that can stand in for a visual at compile time.
pub trait VisualHandle {
    fn visual_id(&self) -> VisualId;
}

impl VisualHandle for VisualId {
    fn visual_id(&self) -> VisualId {
        *self
    }
}
