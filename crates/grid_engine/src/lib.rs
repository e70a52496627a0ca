//! Grid Engine - Gesture controllers, layout commands, and the canvas
//!
//! This crate implements the interactive side of the grid: drag and resize
//! gestures that propose candidate rectangles while the pointer moves, the
//! commands that turn a finished gesture (or an explicit edit) into a new
//! layout document, and the `Canvas` that owns the document for an editing
//! session and reports committed changes to its host.

mod command;
mod error;
mod pointer;
mod gesture;
mod drag;
mod resize;
mod canvas;
mod view;

pub use command::*;
pub use error::*;
pub use pointer::*;
pub use gesture::*;
pub use drag::*;
pub use resize::*;
pub use canvas::*;
pub use view::*;
