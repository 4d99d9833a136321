pub mod braille;
pub mod overlay;
pub mod render;
pub mod tournament_view;

pub use overlay::{OverlayMessage, OverlayStyle};
pub use render::{render, SceneView};
pub use tournament_view::render_tournament;
