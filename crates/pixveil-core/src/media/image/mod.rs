pub mod bit_plane;
pub mod grid;

pub use bit_plane::{conceal, decode, encode, reveal};
