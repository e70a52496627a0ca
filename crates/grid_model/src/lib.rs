//! Grid Model - Layout document, widget types, and grid geometry
//!
//! This crate provides the data layer of the page builder: the
//! `GridLayoutData` document with its placed `GridItem`s, the widget payload
//! types, and the pure geometry predicates (overlap, collision, clamping)
//! that every layout mutation is validated against.

mod error;
mod item_id;
mod widget;
mod item;
mod geometry;
mod layout;
pub mod config;
pub mod template;
pub mod profile;

pub use error::*;
pub use item_id::*;
pub use widget::*;
pub use item::*;
pub use geometry::*;
pub use layout::*;
pub use config::*;
pub use template::*;
pub use profile::*;
