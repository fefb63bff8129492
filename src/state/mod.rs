mod navigation;
mod ui;

pub use navigation::NavigationState;
pub use ui::UIState;
