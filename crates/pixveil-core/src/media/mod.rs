pub mod bit_depth;
pub mod codec_options;
pub mod image;
