pub mod formatter;
pub mod layout;

pub use formatter::{Color, Formatter, StyleError};
pub use layout::{pad_left, pad_left_top, pad_left_top_bottom};
