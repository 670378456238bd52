//! Keyboard dispatcher: maps shortcut keys onto engine commands.
//!
//! The dispatcher is a plain function over `&mut Engine` — it reads live
//! store and selection state at the moment the key arrives, so there are no
//! captured references to go stale between state changes. The host calls it
//! from its key-event handler and processes the returned [`Action`].

#[cfg(test)]
#[path = "input_test.rs"]
mod input_test;

use crate::engine::{Action, Engine};

/// A keyboard key, named as reported by the host platform (e.g. `"Delete"`,
/// `"z"`, `"Escape"`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Key(pub String);

/// Keyboard modifier keys held during an event.
#[allow(clippy::struct_excessive_bools)]
#[derive(Debug, Clone, Copy, Default)]
pub struct Modifiers {
    /// Shift key is held.
    pub shift: bool,
    /// Ctrl key is held.
    pub ctrl: bool,
    /// Alt / Option key is held.
    pub alt: bool,
    /// Meta / Command key is held.
    pub meta: bool,
}

impl Modifiers {
    /// Whether the platform primary shortcut modifier is held (Ctrl, or
    /// Command on macOS).
    #[must_use]
    pub fn primary(self) -> bool {
        self.ctrl || self.meta
    }
}

/// Route a key press to the matching engine command.
///
/// Bindings: Delete/Backspace deletes the current selection (suppressed while
/// `editing_text`, so text fields keep their native editing keys),
/// primary+Z undoes, primary+Y redoes (no shift-Z alternate), and Escape
/// clears the selection. Anything else is [`Action::None`].
pub fn dispatch_key(
    engine: &mut Engine,
    key: &Key,
    modifiers: Modifiers,
    editing_text: bool,
) -> Action {
    match key.0.as_str() {
        "Delete" | "Backspace" if !editing_text => match engine.delete_element(None) {
            Ok(id) => Action::ElementDeleted { id },
            Err(err) => {
                tracing::debug!(%err, "delete shortcut ignored");
                Action::None
            }
        },
        "z" | "Z" if modifiers.primary() => engine.undo(),
        "y" | "Y" if modifiers.primary() => engine.redo(),
        "Escape" if engine.selected().is_some() => {
            engine.set_selected(None);
            Action::SelectionCleared
        }
        _ => Action::None,
    }
}
