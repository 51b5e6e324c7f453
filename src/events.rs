use tracing::debug;
use crate::rotator::{Rotator, SlideSurface};

/// Host-side happenings that a rotator reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostEvent {
    HoverEnter,
    HoverLeave,
    VisibilityHidden,
    VisibilityRestored,
    NextPressed,
    PreviousPressed,
}

impl<S: SlideSurface> Rotator<S> {
    pub fn handle(&mut self, event: HostEvent) {
        debug!("{}: {:?}", self.label(), event);
        match event {
            HostEvent::HoverEnter | HostEvent::VisibilityHidden => self.pause_auto(),
            HostEvent::HoverLeave | HostEvent::VisibilityRestored => self.start_auto(),
            HostEvent::NextPressed => self.next(),
            HostEvent::PreviousPressed => self.previous(),
        }
    }
}

/// Turns "is the pointer over the region" samples into enter/leave edges.
#[derive(Debug, Default)]
pub struct HoverTracker {
    inside: bool,
}

impl HoverTracker {
    pub fn sample(&mut self, inside: bool) -> Option<HostEvent> {
        if inside == self.inside {
            return None;
        }
        self.inside = inside;
        Some(if inside { HostEvent::HoverEnter } else { HostEvent::HoverLeave })
    }

    pub fn is_inside(&self) -> bool {
        self.inside
    }
}

/// Turns "is the window visible" samples into hidden/restored edges.
#[derive(Debug)]
pub struct VisibilityTracker {
    visible: bool,
}

impl Default for VisibilityTracker {
    fn default() -> Self {
        Self { visible: true }
    }
}

impl VisibilityTracker {
    pub fn sample(&mut self, visible: bool) -> Option<HostEvent> {
        if visible == self.visible {
            return None;
        }
        self.visible = visible;
        Some(if visible { HostEvent::VisibilityRestored } else { HostEvent::VisibilityHidden })
    }
}
