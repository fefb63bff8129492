mod keyboard;
mod scroll;

pub use keyboard::handle_keys;
pub use scroll::{ScrollEvent, ScrollSignal};
