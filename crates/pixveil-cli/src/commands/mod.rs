pub mod hide;
pub mod unveil;
