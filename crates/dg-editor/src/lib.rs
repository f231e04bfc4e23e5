pub mod events;
pub mod session;

pub use events::{ConnectionDrop, PanZoom, Projection, ScreenPoint};
pub use session::EditorSession;
