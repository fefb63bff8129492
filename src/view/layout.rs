// Section geometry captured while the cards are laid out

use crate::tracker::{Extent, Section, SectionGeometry};
use eframe::egui;

/// Geometry of the last rendered frame, in screen coordinates.
///
/// Scroll requests are parked here and carried out by the card renderer on
/// the next frame, once the target card has a rect again.
#[derive(Debug)]
pub struct FrameGeometry {
    sections: Vec<Section>,
    viewport: Extent,
    pending_scroll: Option<String>,
}

impl Default for FrameGeometry {
    fn default() -> Self {
        Self {
            sections: Vec::new(),
            viewport: Extent::new(0.0, 0.0),
            pending_scroll: None,
        }
    }
}

impl FrameGeometry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Forget the sections of the previous frame.
    pub fn begin_frame(&mut self) {
        self.sections.clear();
    }

    /// Set the visible window of the current frame.
    pub fn set_viewport(&mut self, visible: egui::Rect) {
        self.viewport = Extent::new(visible.top(), visible.bottom());
    }

    pub fn record(&mut self, id: &str, rect: egui::Rect) {
        self.sections
            .push(Section::new(id, Extent::new(rect.top(), rect.bottom())));
    }

    /// True once for the section a scroll was requested for.
    pub fn take_scroll_request(&mut self, id: &str) -> bool {
        if self.pending_scroll.as_deref() == Some(id) {
            self.pending_scroll = None;
            true
        } else {
            false
        }
    }

    pub fn pending_scroll(&self) -> Option<&str> {
        self.pending_scroll.as_deref()
    }
}

/// Show a scroll area whose contents record their sections into `geometry`.
///
/// The viewport is the area's visible inner rect. The clip rect seen by the
/// contents is larger by `clip_rect_margin` and must not be used. Returns the
/// scroll offset egui settled on this frame.
pub fn show_tracked(
    ui: &mut egui::Ui,
    scroll_area: egui::ScrollArea,
    geometry: &mut FrameGeometry,
    add_contents: impl FnOnce(&mut egui::Ui, &mut FrameGeometry),
) -> f32 {
    geometry.begin_frame();
    let output = scroll_area.show(ui, |ui| add_contents(ui, geometry));
    geometry.set_viewport(output.inner_rect);
    output.state.offset.y
}

impl SectionGeometry for FrameGeometry {
    fn sections(&self) -> Vec<Section> {
        self.sections.clone()
    }

    fn viewport(&self) -> Extent {
        self.viewport
    }

    fn scroll_to(&mut self, id: &str) -> bool {
        if self.sections.iter().any(|s| s.id == id) {
            self.pending_scroll = Some(id.to_string());
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tracker::compute_active;
    use eframe::egui::{pos2, vec2, Rect};

    fn frame() -> FrameGeometry {
        let mut geometry = FrameGeometry::new();
        geometry.begin_frame();
        geometry.set_viewport(Rect::from_min_max(pos2(0.0, 40.0), pos2(800.0, 640.0)));
        geometry.record("b-tree", Rect::from_min_max(pos2(0.0, -200.0), pos2(800.0, 100.0)));
        geometry.record("b-plus-tree", Rect::from_min_max(pos2(0.0, 124.0), pos2(800.0, 500.0)));
        geometry
    }

    #[test]
    fn test_records_in_order() {
        let geometry = frame();
        let ids: Vec<_> = geometry.sections().into_iter().map(|s| s.id).collect();
        assert_eq!(ids, vec!["b-tree", "b-plus-tree"]);
        assert_eq!(geometry.viewport(), Extent::new(40.0, 640.0));
    }

    #[test]
    fn test_begin_frame_clears_sections() {
        let mut geometry = frame();
        geometry.begin_frame();
        assert!(geometry.sections().is_empty());
        assert_eq!(geometry.viewport(), Extent::new(40.0, 640.0));
    }

    #[test]
    fn test_viewport_excludes_clip_margin() {
        let ctx = egui::Context::default();
        let mut geometry = FrameGeometry::new();
        let mut clip = Rect::NOTHING;
        let mut offset = f32::NAN;

        let _ = ctx.run(egui::RawInput::default(), |ctx| {
            egui::CentralPanel::default().show(ctx, |ui| {
                offset = show_tracked(
                    ui,
                    egui::ScrollArea::vertical(),
                    &mut geometry,
                    |ui, geometry| {
                        clip = ui.clip_rect();
                        let (rect, _) =
                            ui.allocate_exact_size(vec2(100.0, 5000.0), egui::Sense::hover());
                        geometry.record("b-tree", rect);
                    },
                );
            });
        });

        let margin = ctx.style().visuals.clip_rect_margin;
        assert!(margin > 0.0);
        assert_eq!(offset, 0.0);
        assert_eq!(geometry.sections().len(), 1);

        let viewport = geometry.viewport();
        assert!((viewport.top - (clip.top() + margin)).abs() < 0.01);
        assert!((viewport.bottom - (clip.bottom() - margin)).abs() < 0.01);

        // a card ending inside the margin above the window is out of view
        let sections = vec![
            Section::new("b-tree", Extent::new(clip.top() - 400.0, viewport.top - 1.0)),
            Section::new("b-plus-tree", Extent::new(viewport.top - 1.0, viewport.bottom)),
        ];
        assert_eq!(
            compute_active(&sections, viewport, None).as_deref(),
            Some("b-plus-tree")
        );
    }

    #[test]
    fn test_scroll_request_taken_once() {
        let mut geometry = frame();
        assert!(geometry.scroll_to("b-plus-tree"));
        assert_eq!(geometry.pending_scroll(), Some("b-plus-tree"));
        assert!(!geometry.take_scroll_request("b-tree"));
        assert!(geometry.take_scroll_request("b-plus-tree"));
        assert!(!geometry.take_scroll_request("b-plus-tree"));
    }

    #[test]
    fn test_unknown_scroll_target_ignored() {
        let mut geometry = frame();
        assert!(!geometry.scroll_to("avl-tree"));
        assert_eq!(geometry.pending_scroll(), None);
    }
}
