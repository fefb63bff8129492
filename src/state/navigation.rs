// Navigation state - active section and expanded code listings
use crate::locale::ToggleLabel;
use std::collections::HashSet;

/// Transient per-view state. Created with the view, dropped with it.
#[derive(Debug, Default)]
pub struct NavigationState {
    active_section: Option<String>,
    expanded: HashSet<String>,
}

impl NavigationState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn active_section(&self) -> Option<&str> {
        self.active_section.as_deref()
    }

    /// Publish the section judged visible by the latest scroll pass.
    pub fn set_active_section(&mut self, id: Option<String>) {
        self.active_section = id;
    }

    pub fn is_active(&self, id: &str) -> bool {
        self.active_section.as_deref() == Some(id)
    }

    pub fn is_expanded(&self, route: &str) -> bool {
        self.expanded.contains(route)
    }

    /// Flip the code listing of `route` and return the label for its toggle.
    pub fn toggle_code(&mut self, route: &str) -> ToggleLabel {
        if self.expanded.remove(route) {
            ToggleLabel::Show
        } else {
            self.expanded.insert(route.to_string());
            ToggleLabel::Hide
        }
    }

    /// Label for the toggle of `route` in its current state.
    pub fn toggle_label(&self, route: &str) -> ToggleLabel {
        if self.is_expanded(route) {
            ToggleLabel::Hide
        } else {
            ToggleLabel::Show
        }
    }
}
