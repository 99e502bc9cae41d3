//! Presentation of highlighted markup

pub mod html;
pub mod terminal;

pub use html::code_block;
pub use terminal::TerminalRenderer;
