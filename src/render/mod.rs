pub mod renderer;
pub mod surface;

pub use renderer::{Board, Renderer};
pub use surface::{BufferSurface, Surface};
