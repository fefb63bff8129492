use crate::message::Message;
use eframe::egui::{Key, Modifiers};

/// Map a key press to a navigation message.
pub fn handle_key(key: Key, modifiers: Modifiers) -> Option<Message> {
    if modifiers.ctrl || modifiers.alt || modifiers.command {
        return None;
    }
    match key {
        Key::J | Key::ArrowDown => Some(Message::StepSection(1)),
        Key::K | Key::ArrowUp => Some(Message::StepSection(-1)),
        Key::Home => Some(Message::FirstSection),
        Key::End => Some(Message::LastSection),
        Key::T => Some(Message::ToggleTheme),
        _ => None,
    }
}

/// Collect messages for every key pressed this frame.
pub fn handle_keys(ctx: &eframe::egui::Context) -> Vec<Message> {
    ctx.input(|i| {
        i.events
            .iter()
            .filter_map(|event| match event {
                eframe::egui::Event::Key {
                    key,
                    pressed: true,
                    modifiers,
                    ..
                } => handle_key(*key, *modifiers),
                _ => None,
            })
            .collect()
    })
}
