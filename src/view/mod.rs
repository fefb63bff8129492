mod cards;
mod code;
pub mod description;
mod header;
mod layout;

pub use cards::{render_cards, CardContext};
pub use code::CodeHighlighter;
pub use header::render_header;
pub use layout::FrameGeometry;
