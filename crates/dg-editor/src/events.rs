//! Events reported by the rendering collaborator, and the coordinate
//! translation seam it owns.

use dg_core::{NodeId, Point};

/// A coordinate in screen space, as reported by pointer events.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScreenPoint {
    pub x: f32,
    pub y: f32,
}

impl ScreenPoint {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// Screen → graph coordinate translation. The rendering collaborator knows
/// the viewport transform; the editor core only asks it to translate.
pub trait Projection {
    fn screen_to_graph(&self, point: ScreenPoint) -> Point;
}

/// Pan + uniform-zoom viewport transform: `graph = (screen - pan) / zoom`.
/// The default is the identity (no pan, zoom 1).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PanZoom {
    pub pan_x: f32,
    pub pan_y: f32,
    pub zoom: f32,
}

impl Default for PanZoom {
    fn default() -> Self {
        Self {
            pan_x: 0.0,
            pan_y: 0.0,
            zoom: 1.0,
        }
    }
}

impl Projection for PanZoom {
    fn screen_to_graph(&self, point: ScreenPoint) -> Point {
        Point::new(
            (point.x - self.pan_x) / self.zoom,
            (point.y - self.pan_y) / self.zoom,
        )
    }
}

/// The connection-end event: a drag from a node's connection point was
/// released. `is_valid` says whether the release landed on an existing
/// connection point — if it did, the collaborator already made a normal
/// edge and the editor core has nothing to do.
#[derive(Debug, Clone, PartialEq)]
pub struct ConnectionDrop {
    pub is_valid: bool,
    pub from_node: NodeId,
    pub screen: ScreenPoint,
}
