//! Store - Layout files and editor settings
//!
//! This crate handles layout serialization, file operations and editor
//! settings persistence.

mod format;
mod serializer;
mod file_io;
mod error;
mod settings;

pub use format::*;
pub use serializer::*;
pub use file_io::*;
pub use error::*;
pub use settings::*;
