//! Entity type definitions
//!
//! Timberlist works over three kinds of data:
//!
//! - [`Selection`] / [`Occurrence`] - what the CAD host exported: picked
//!   entities with their oriented bounding boxes and physical properties
//! - [`TimberRecord`] - one distinct component of the cut list, with order
//!   dimensions, board-footage and estimated mass
//! - [`Species`] - the static wood density table behind the mass estimate

pub mod selection;
pub mod species;
pub mod timber;

pub use selection::{Occurrence, Selection, SelectionExport, SelectionKind};
pub use species::Species;
pub use timber::{TimberData, TimberRecord};
