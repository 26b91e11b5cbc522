//! # ZoneKit Editor
//!
//! The editing side of delivery-zone management: the drawing state machine,
//! the per-shop zone collection with snapshot-based change detection, the
//! zone matcher, and the editing session that ties them to a storage
//! backend.

pub mod collection;
pub mod editor;
pub mod matcher;
pub mod session;

pub use collection::{Snapshot, ZoneCollection};
pub use editor::{EditorState, ZoneEditor};
pub use matcher::{find_containing_zones, BoundaryPolicy};
pub use session::EditSession;
