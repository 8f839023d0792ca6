#![deny(clippy::unwrap_used, clippy::expect_used)]

//! Interactive editing operations for font glyph outlines.
//!
//! The crate models glyphs the way a point editor sees them (on-curve
//! anchors, off-curve handles, selection flags) and provides the
//! gesture-level operations on top: smoothness-preserving point
//! translation, shape-aware selection deletion, and glyph-wide batch
//! edits, with change notification, undo snapshots, and cached derived
//! views threaded through an explicit [`EditSession`].

mod anchor;
mod component;
mod contour;
#[cfg(feature = "ufo")]
pub mod convertors;
pub mod edit;
mod error;
pub mod geometry;
mod glyph;
mod guide;
mod history;
mod notification;
mod pen;
mod point;
mod representations;
mod segment;
mod session;

pub use crate::anchor::Anchor;
pub use crate::component::Component;
pub use crate::contour::Contour;
pub use crate::error::GlyphEditError;
pub use crate::glyph::{Glyph, Image};
pub use crate::guide::Guideline;
pub use crate::history::EditHistory;
pub use crate::notification::{HandlerId, Notification, NotificationCenter};
pub use crate::pen::{GlyphBuilderPen, PointPen};
pub use crate::point::{Point, PointType};
pub use crate::representations::{filter_selection, Representations, FILTER_SELECTION};
pub use crate::segment::Segment;
pub use crate::session::{EditSession, DEFAULT_UNDO_DEPTH};
