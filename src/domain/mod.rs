pub mod entities;
pub mod grid;
