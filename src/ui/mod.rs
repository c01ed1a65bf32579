pub mod screen;
pub mod spinner;
pub mod wizard;
