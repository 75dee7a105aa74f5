pub mod color;
pub mod config;
pub mod constants;
pub mod field;
pub mod grid;
pub mod pointer;
pub mod tween;

pub use color::*;
pub use config::*;
pub use constants::*;
pub use field::*;
pub use grid::*;
pub use pointer::*;
pub use tween::*;
