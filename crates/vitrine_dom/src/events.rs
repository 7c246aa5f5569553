//! Page events
//!
//! The host shell translates real input into these events and hands
//! them to the page runtime, which routes them by target.

use crate::document::NodeId;

/// The kinds of events the page reacts to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EventType {
    /// Activation of a control (pointer click or keyboard activation).
    Click,
    /// An input lost focus.
    Blur,
    /// The value of an input changed.
    Input,
    /// A form was submitted.
    Submit,
}

/// An event aimed at one node.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Event {
    pub event_type: EventType,
    pub target: NodeId,
}

impl Event {
    pub fn new(event_type: EventType, target: NodeId) -> Self {
        Self { event_type, target }
    }

    pub fn click(target: NodeId) -> Self {
        Self::new(EventType::Click, target)
    }

    pub fn blur(target: NodeId) -> Self {
        Self::new(EventType::Blur, target)
    }

    pub fn input(target: NodeId) -> Self {
        Self::new(EventType::Input, target)
    }

    pub fn submit(target: NodeId) -> Self {
        Self::new(EventType::Submit, target)
    }
}
