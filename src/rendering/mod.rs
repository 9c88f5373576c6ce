//! Renderers for colourizing chord sheets

mod terminal;

pub use terminal::Terminal;
