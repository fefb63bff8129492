// Viewport tracker
//
// Decides which catalog section is "active" for the navigation header and
// forwards scroll-to-section requests to the rendering environment.

mod geometry;

pub use geometry::{Extent, Section, SectionGeometry};

use crate::state::NavigationState;
use crate::subscription::{ScrollEvent, ScrollSignal};
use std::sync::mpsc::Receiver;
use tracing::{debug, trace};

/// First section in document order overlapping `viewport`.
///
/// Falls back to `previous` when nothing overlaps, so the highlight never
/// blinks off between sections. A degenerate viewport matches nothing.
pub fn compute_active(
    sections: &[Section],
    viewport: Extent,
    previous: Option<&str>,
) -> Option<String> {
    if !viewport.is_degenerate() {
        for section in sections {
            trace!(
                id = %section.id,
                top = section.extent.top,
                bottom = section.extent.bottom,
                viewport_top = viewport.top,
                viewport_bottom = viewport.bottom,
                "checking section"
            );
            if section.extent.overlaps(&viewport) {
                return Some(section.id.clone());
            }
        }
    }
    previous.map(str::to_string)
}

/// Listens to scroll signals and keeps `NavigationState::active_section` current.
///
/// Subscribes on construction; dropping the tracker releases the subscription.
pub struct ViewportTracker {
    events: Receiver<ScrollEvent>,
}

impl ViewportTracker {
    pub fn new(signal: &mut ScrollSignal) -> Self {
        Self {
            events: signal.subscribe(),
        }
    }

    /// Recompute and publish the active section from current geometry.
    pub fn on_scroll(&self, geometry: &dyn SectionGeometry, state: &mut NavigationState) {
        let sections = geometry.sections();
        let active = compute_active(&sections, geometry.viewport(), state.active_section());
        if active.as_deref() != state.active_section() {
            debug!(from = ?state.active_section(), to = ?active, "active section changed");
        }
        state.set_active_section(active);
    }

    /// Handle every scroll event queued since the last call, in order.
    ///
    /// Returns how many events were handled.
    pub fn process_pending(
        &self,
        geometry: &dyn SectionGeometry,
        state: &mut NavigationState,
    ) -> usize {
        let mut handled = 0;
        while let Ok(event) = self.events.try_recv() {
            trace!(offset = event.offset, "scroll event");
            self.on_scroll(geometry, state);
            handled += 1;
        }
        handled
    }

    /// Smoothly scroll `id` to the top of the viewport.
    ///
    /// Unknown ids are ignored; the return value tells whether the request
    /// reached an element.
    pub fn scroll_to(&self, id: &str, geometry: &mut dyn SectionGeometry) -> bool {
        let found = geometry.scroll_to(id);
        if !found {
            debug!(id, "scroll target not found, ignoring");
        }
        found
    }
}
