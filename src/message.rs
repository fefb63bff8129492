// User intents, produced by the header, the cards and the keyboard

#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    /// Smoothly scroll the section with this route to the top
    ScrollTo(String),
    /// Move the active section by this many entries
    StepSection(isize),
    FirstSection,
    LastSection,
    /// Show or hide the code listing of this route
    ToggleCode(String),
    /// Open the video of this route in the system browser
    OpenVideo(String),
    ToggleTheme,
}
