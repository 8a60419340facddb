//! Presentation module
//!
//! Builds CPU-side triangle lists and HUD text from the game state. Any
//! backend (GPU, software rasterizer, terminal) can consume a `Frame`.

pub mod scene;
pub mod shapes;
pub mod vertex;

pub use scene::{Frame, TextItem, build_frame};
pub use vertex::Vertex;
