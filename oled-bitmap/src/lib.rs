pub mod error;
pub mod grid;
pub mod pack;
pub mod binarize;
pub mod header;
pub mod config;
pub mod convert;
