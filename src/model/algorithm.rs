/// One catalog item: a tree algorithm with its description, listing and video.
///
/// Entries are compiled into the binary and never change after startup, so
/// every field borrows `'static` data.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AlgorithmEntry {
    /// Display title
    pub name: &'static str,
    /// Markdown body
    pub description: &'static str,
    /// Illustrative source listing, shown but never executed
    pub code: &'static str,
    /// External video reference, checked by `video::TrustedVideoUrl` before use
    pub video_url: &'static str,
    /// Stable slug, unique across the catalog; doubles as the section id
    pub route: &'static str,
}

impl AlgorithmEntry {
    /// Syntax used to highlight the listing.
    pub fn code_extension(&self) -> &'static str {
        "py"
    }
}
