// Geometry seen by the viewport tracker
//
// Sections and the viewport must be measured in the same coordinate frame.

/// Vertical extent of an element or of the visible window.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Extent {
    pub top: f32,
    pub bottom: f32,
}

impl Extent {
    pub fn new(top: f32, bottom: f32) -> Self {
        Self { top, bottom }
    }

    pub fn from_top_and_height(top: f32, height: f32) -> Self {
        Self {
            top,
            bottom: top + height,
        }
    }

    pub fn height(&self) -> f32 {
        self.bottom - self.top
    }

    /// Zero or negative height, as reported before layout settles.
    pub fn is_degenerate(&self) -> bool {
        self.height() <= 0.0
    }

    /// Strict overlap: touching edges do not count.
    pub fn overlaps(&self, viewport: &Extent) -> bool {
        self.bottom > viewport.top && self.top < viewport.bottom
    }
}

/// A tracked element tagged with its catalog route.
#[derive(Clone, Debug, PartialEq)]
pub struct Section {
    pub id: String,
    pub extent: Extent,
}

impl Section {
    pub fn new(id: impl Into<String>, extent: Extent) -> Self {
        Self {
            id: id.into(),
            extent,
        }
    }
}

/// Environment adapter between the tracker and whatever renders the sections.
pub trait SectionGeometry {
    /// Tracked sections in document order.
    fn sections(&self) -> Vec<Section>;

    /// Currently visible window.
    fn viewport(&self) -> Extent;

    /// Ask the environment to smoothly bring `id` to the top of the viewport.
    ///
    /// Returns false when no element carries `id`.
    fn scroll_to(&mut self, id: &str) -> bool;
}
