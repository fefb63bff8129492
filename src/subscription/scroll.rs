// Scroll signal source
//
// egui reports a scroll offset every frame; listeners only care when it moves.
use std::sync::mpsc::{channel, Receiver, Sender};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollEvent {
    pub offset: f32,
}

#[derive(Default)]
pub struct ScrollSignal {
    listeners: Vec<Sender<ScrollEvent>>,
    last_offset: Option<f32>,
}

impl ScrollSignal {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a listener. Dropping the receiver detaches it.
    pub fn subscribe(&mut self) -> Receiver<ScrollEvent> {
        let (tx, rx) = channel();
        self.listeners.push(tx);
        rx
    }

    /// Feed the offset observed this frame.
    ///
    /// Emits to every live listener when the offset moved since the last
    /// observation (the first observation always emits). Returns the number
    /// of listeners reached.
    pub fn observe(&mut self, offset: f32) -> usize {
        if self.last_offset == Some(offset) {
            return 0;
        }
        self.last_offset = Some(offset);
        self.emit(ScrollEvent { offset })
    }

    /// Force an event regardless of movement, e.g. after a resize.
    pub fn emit(&mut self, event: ScrollEvent) -> usize {
        self.listeners.retain(|tx| tx.send(event).is_ok());
        self.listeners.len()
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }
}
