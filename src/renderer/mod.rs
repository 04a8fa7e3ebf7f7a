//! Rendering
//!
//! `draw_scene` issues draw calls against a host `Canvas`. `VertexCanvas`
//! turns those calls into triangles a GPU host can upload as-is.

pub mod canvas;
pub mod scene;
pub mod shapes;
pub mod vertex;
pub mod vertex_canvas;

pub use canvas::{Canvas, Sprite, TextAlign};
pub use scene::draw_scene;
pub use vertex::{Color, Vertex, colors};
pub use vertex_canvas::{Frame, TextLabel, VertexCanvas, display_to_ndc};
