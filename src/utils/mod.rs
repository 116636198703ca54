//! Helpers shared by the dataset reader

pub mod decode;
