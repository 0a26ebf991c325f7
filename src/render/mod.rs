//! CPU rasterization: color buffer, triangle fill algorithms and lines.

mod framebuffer;
mod rasterizer;
mod renderer;

pub use framebuffer::FrameBuffer;
pub use rasterizer::{
    EdgeFunctionRasterizer, Rasterizer, RasterizerDispatcher, RasterizerType, ScanlineRasterizer,
    Triangle,
};
pub use renderer::Renderer;
