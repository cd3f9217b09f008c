//! Lightbox state machine: `Closed` or `Open(index)` over the loaded gallery.
//!
//! Operations take the gallery length so the navigator never holds a stale
//! copy of the list. `next`/`prev` wrap around and do nothing on an empty
//! gallery or while closed.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ModalState {
    #[default]
    Closed,
    Open {
        index: usize,
    },
}

/// What a key press does to the modal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    Close,
    Next,
    Prev,
    Ignore,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ModalNavigator {
    state: ModalState,
}

impl ModalNavigator {
    pub fn state(&self) -> ModalState {
        self.state
    }

    pub fn is_open(&self) -> bool {
        matches!(self.state, ModalState::Open { .. })
    }

    pub fn current(&self) -> Option<usize> {
        match self.state {
            ModalState::Open { index } => Some(index),
            ModalState::Closed => None,
        }
    }

    /// Returns `false` (and stays put) when `index` is out of range.
    pub fn open(&mut self, index: usize, len: usize) -> bool {
        if index >= len {
            return false;
        }
        self.state = ModalState::Open { index };
        true
    }

    /// Returns `false` if the modal was already closed.
    pub fn close(&mut self) -> bool {
        let was_open = self.is_open();
        self.state = ModalState::Closed;
        was_open
    }

    pub fn next(&mut self, len: usize) {
        if len == 0 {
            return;
        }
        if let ModalState::Open { index } = self.state {
            self.state = ModalState::Open {
                index: (index + 1) % len,
            };
        }
    }

    pub fn prev(&mut self, len: usize) {
        if len == 0 {
            return;
        }
        if let ModalState::Open { index } = self.state {
            self.state = ModalState::Open {
                index: (index + len - 1) % len,
            };
        }
    }

    /// Keyboard shortcuts only apply while open.
    pub fn key_action(&self, key: &str) -> KeyAction {
        if !self.is_open() {
            return KeyAction::Ignore;
        }
        match key {
            "Escape" => KeyAction::Close,
            "ArrowRight" => KeyAction::Next,
            "ArrowLeft" => KeyAction::Prev,
            _ => KeyAction::Ignore,
        }
    }

    /// Apply a key press; returns the action taken.
    pub fn handle_key(&mut self, key: &str, len: usize) -> KeyAction {
        let action = self.key_action(key);
        match action {
            KeyAction::Close => {
                self.close();
            }
            KeyAction::Next => self.next(len),
            KeyAction::Prev => self.prev(len),
            KeyAction::Ignore => {}
        }
        action
    }
}
