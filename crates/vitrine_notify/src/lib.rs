//! Vitrine toast notifications
//!
//! A toast is a fixed-position banner appended to the body. It stays
//! visible for five seconds, fades for 300 ms, then leaves the tree.
//! Toasts stack freely and each one owns its own deadlines.

use std::time::{Duration, Instant};

use tracing::debug;
use vitrine_dom::{element, Document, NodeId};

/// How long a toast stays fully visible.
const VISIBLE_FOR: Duration = Duration::from_secs(5);

/// How long the fade-out lasts before removal.
const FADE_FOR: Duration = Duration::from_millis(300);

/// Toast visual kinds.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

impl ToastKind {
    /// The kind-specific class rendered on the banner.
    pub fn class(&self) -> &'static str {
        match self {
            ToastKind::Success => "toast-success",
            ToastKind::Error => "toast-error",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Phase {
    Visible,
    Fading,
}

struct Toast {
    node: NodeId,
    phase: Phase,
    deadline: Instant,
}

/// Owns every live toast and advances their lifecycles.
#[derive(Default)]
pub struct ToastStack {
    toasts: Vec<Toast>,
}

impl ToastStack {
    pub fn new() -> Self {
        Self { toasts: Vec::new() }
    }

    /// Show a toast. Concurrent toasts stack; nothing is deduplicated.
    pub fn show(
        &mut self,
        doc: &mut Document,
        message: &str,
        kind: ToastKind,
        now: Instant,
    ) -> NodeId {
        debug!("toast ({kind:?}): {message}");
        let node = doc.append(
            doc.body(),
            element("div")
                .class("toast")
                .class(kind.class())
                .class("position-fixed")
                .text(message),
        );
        self.toasts.push(Toast {
            node,
            phase: Phase::Visible,
            deadline: now + VISIBLE_FOR,
        });
        node
    }

    pub fn success(&mut self, doc: &mut Document, message: &str, now: Instant) -> NodeId {
        self.show(doc, message, ToastKind::Success, now)
    }

    pub fn error(&mut self, doc: &mut Document, message: &str, now: Instant) -> NodeId {
        self.show(doc, message, ToastKind::Error, now)
    }

    /// Advance lifecycles: visible toasts past their deadline start
    /// fading, fading toasts past theirs leave the document.
    pub fn sweep(&mut self, doc: &mut Document, now: Instant) {
        for toast in &mut self.toasts {
            if now >= toast.deadline && toast.phase == Phase::Visible {
                toast.phase = Phase::Fading;
                toast.deadline += FADE_FOR;
                doc.add_class(toast.node, "fade-out");
            }
        }
        self.toasts.retain(|t| {
            if t.phase == Phase::Fading && now >= t.deadline {
                doc.remove(t.node);
                false
            } else {
                true
            }
        });
    }

    /// Number of toasts still in the document (visible or fading).
    pub fn active(&self) -> usize {
        self.toasts.len()
    }
}
