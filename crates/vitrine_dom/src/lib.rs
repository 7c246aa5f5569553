//! Vitrine document model
//!
//! This crate provides the substrate every Vitrine controller mutates:
//!
//! - **Element tree**: a retained, slotmap-keyed tree of elements with
//!   tags, ids, attributes, classes, and text content
//! - **Page state**: focus and vertical scroll position
//! - **Events**: the typed page events the runtime routes to controllers
//!
//! There is no layout or styling here. Classes and attributes are state
//! the host shell renders however it likes; the model only guarantees
//! that controllers can observe and mutate them deterministically.

pub mod document;
pub mod events;

pub use document::{element, Document, Element, ElementBuilder, NodeId};
pub use events::{Event, EventType};
