//! Screen-reader announcements
//!
//! Each announcement is its own visually hidden live-region node,
//! removed after a fixed delay. Removal is keyed to the node an
//! announcement created, so rapid announcements never tear down a
//! sibling's message early.

use std::time::{Duration, Instant};

use tracing::debug;
use vitrine_dom::{element, Document, NodeId};

/// How long an announcement stays in the tree.
const ANNOUNCEMENT_TTL: Duration = Duration::from_secs(1);

struct Announcement {
    node: NodeId,
    expires_at: Instant,
}

/// Emits transient, assistive-technology-visible status messages.
#[derive(Default)]
pub struct Announcer {
    pending: Vec<Announcement>,
}

impl Announcer {
    pub fn new() -> Self {
        Self {
            pending: Vec::new(),
        }
    }

    /// Append a polite live-region node carrying `message` and schedule
    /// its removal.
    pub fn announce(&mut self, doc: &mut Document, message: &str, now: Instant) -> NodeId {
        debug!("announce: {message}");
        let node = doc.append(
            doc.body(),
            element("div")
                .attr("aria-live", "polite")
                .attr("aria-atomic", "true")
                .class("sr-only")
                .text(message),
        );
        self.pending.push(Announcement {
            node,
            expires_at: now + ANNOUNCEMENT_TTL,
        });
        node
    }

    /// Remove exactly the announcements whose deadline has passed.
    pub fn sweep(&mut self, doc: &mut Document, now: Instant) {
        self.pending.retain(|a| {
            if now >= a.expires_at {
                doc.remove(a.node);
                false
            } else {
                true
            }
        });
    }

    pub fn pending_count(&self) -> usize {
        self.pending.len()
    }
}
