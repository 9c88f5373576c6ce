//! Laying out a classified chord sheet for display

pub mod formatter;
mod renderer;
mod syntax;

pub use renderer::render;
pub use syntax::*;
