use std::collections::HashMap;

use crate::element::find_element;
use crate::element::Element;
use crate::event::{Event, Key, Modifiers};

/// Text content and cursor of a single input. `cursor` counts characters.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextInputData {
    pub text: String,
    pub cursor: usize,
}

impl TextInputData {
    pub fn new(text: impl Into<String>) -> Self {
        let text = text.into();
        let cursor = text.chars().count();
        Self { text, cursor }
    }

    fn char_count(&self) -> usize {
        self.text.chars().count()
    }

    fn byte_index(&self, char_idx: usize) -> usize {
        self.text
            .char_indices()
            .nth(char_idx)
            .map(|(i, _)| i)
            .unwrap_or(self.text.len())
    }

    fn insert(&mut self, c: char) {
        let at = self.byte_index(self.cursor);
        self.text.insert(at, c);
        self.cursor += 1;
    }

    fn delete_back(&mut self) -> bool {
        if self.cursor == 0 {
            return false;
        }
        let at = self.byte_index(self.cursor - 1);
        self.text.remove(at);
        self.cursor -= 1;
        true
    }

    fn delete_forward(&mut self) -> bool {
        if self.cursor >= self.char_count() {
            return false;
        }
        let at = self.byte_index(self.cursor);
        self.text.remove(at);
        true
    }
}

/// Tracks text input state for multiple elements.
#[derive(Debug, Default)]
pub struct TextInputState {
    inputs: HashMap<String, TextInputData>,
}

impl TextInputState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the text value for an input.
    pub fn get(&self, id: &str) -> &str {
        self.inputs.get(id).map(|d| d.text.as_str()).unwrap_or("")
    }

    pub fn get_data(&self, id: &str) -> Option<&TextInputData> {
        self.inputs.get(id)
    }

    /// Set the text value for an input.
    ///
    /// When the text is unchanged the cursor stays where it is, so a controlled
    /// input that echoes its own edit back does not lose the caret position.
    pub fn set(&mut self, id: &str, text: impl Into<String>) {
        let text = text.into();
        match self.inputs.get_mut(id) {
            Some(data) if data.text == text => {}
            Some(data) => *data = TextInputData::new(text),
            None => {
                self.inputs.insert(id.to_string(), TextInputData::new(text));
            }
        }
    }

    /// Forget inputs whose element is no longer in the tree.
    pub fn retain(&mut self, root: &Element) {
        self.inputs.retain(|id, _| find_element(root, id).is_some());
    }

    /// Process events and handle text input.
    /// Returns events that were generated (Change, Submit) or passed through.
    pub fn process_events(&mut self, events: &[Event], root: &Element) -> Vec<Event> {
        let mut output = Vec::new();

        for event in events {
            if let Event::Key {
                target: Some(target),
                key,
                modifiers,
            } = event
            {
                let captures = find_element(root, target).is_some_and(|el| el.captures_input);
                if captures {
                    match self.handle_key(target, *key, *modifiers) {
                        TextEditResult::Changed => {
                            output.push(Event::Change {
                                target: target.clone(),
                                text: self.get(target).to_string(),
                            });
                            continue;
                        }
                        TextEditResult::Submitted => {
                            output.push(Event::Submit {
                                target: target.clone(),
                            });
                            continue;
                        }
                        TextEditResult::Handled => continue,
                        TextEditResult::Ignored => {}
                    }
                }
            }
            output.push(event.clone());
        }

        output
    }

    /// Handle a key press for text editing.
    pub fn handle_key(&mut self, id: &str, key: Key, modifiers: Modifiers) -> TextEditResult {
        let data = self.inputs.entry(id.to_string()).or_default();

        match key {
            Key::Char('u') if modifiers.ctrl => {
                if data.text.is_empty() {
                    TextEditResult::Handled
                } else {
                    *data = TextInputData::default();
                    TextEditResult::Changed
                }
            }

            Key::Char(c) if !modifiers.ctrl && !modifiers.alt => {
                data.insert(c);
                TextEditResult::Changed
            }

            Key::Backspace if modifiers.none() => {
                if data.delete_back() {
                    TextEditResult::Changed
                } else {
                    TextEditResult::Handled
                }
            }

            Key::Delete if modifiers.none() => {
                if data.delete_forward() {
                    TextEditResult::Changed
                } else {
                    TextEditResult::Handled
                }
            }

            Key::Left => {
                data.cursor = data.cursor.saturating_sub(1);
                TextEditResult::Handled
            }

            Key::Right => {
                data.cursor = (data.cursor + 1).min(data.char_count());
                TextEditResult::Handled
            }

            Key::Home => {
                data.cursor = 0;
                TextEditResult::Handled
            }

            Key::End => {
                data.cursor = data.char_count();
                TextEditResult::Handled
            }

            Key::Enter => TextEditResult::Submitted,

            _ => TextEditResult::Ignored,
        }
    }
}

/// Result of handling a text editing key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextEditResult {
    /// Text was modified.
    Changed,
    /// Enter was pressed.
    Submitted,
    /// Key was handled but text didn't change (e.g., cursor movement).
    Handled,
    /// Key was not handled, should be passed through.
    Ignored,
}
