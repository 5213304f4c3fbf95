pub mod demos;
pub mod render;
