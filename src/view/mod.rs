/// View subsystem: the scroll window over the document and the renderer
/// that paints it onto a terminal surface. Nothing here mutates the
/// document; the editing core talks to this layer through `Viewport` and
/// `View::render`.
pub mod renderer;
pub mod viewport;

pub use renderer::{RenderParams, View};
pub use viewport::Viewport;
