use crossterm::event::{Event as CrosstermEvent, KeyEventKind, MouseEventKind};

use crate::element::{find_element, Content, Element};
use crate::event::{Event, Key, Modifiers, MouseButton};
use crate::hit::{hit_test, hit_test_focusable};
use crate::layout::LayoutResult;

/// Tracks which element is currently focused and processes events.
#[derive(Debug, Default)]
pub struct FocusState {
    focused: Option<String>,
}

impl FocusState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the currently focused element ID.
    pub fn focused(&self) -> Option<&str> {
        self.focused.as_deref()
    }

    pub fn is_focused(&self, id: &str) -> bool {
        self.focused.as_deref() == Some(id)
    }

    /// Programmatically focus an element by ID.
    /// Returns true if focus changed.
    pub fn focus(&mut self, id: &str) -> bool {
        if self.focused.as_deref() == Some(id) {
            return false;
        }
        self.focused = Some(id.to_string());
        true
    }

    /// Clear focus.
    /// Returns true if there was something focused.
    pub fn blur(&mut self) -> bool {
        self.focused.take().is_some()
    }

    /// Drop focus if the focused element is gone from `root` or can no longer take focus.
    /// Returns the ID that lost focus.
    pub fn retain(&mut self, root: &Element) -> Option<String> {
        let still_there = self
            .focused
            .as_deref()
            .and_then(|id| find_element(root, id))
            .is_some_and(|el| el.focusable);

        if still_there {
            None
        } else {
            self.focused.take()
        }
    }

    /// Focus the next focusable element (Tab navigation).
    /// Returns the newly focused element ID if focus changed.
    pub fn focus_next(&mut self, root: &Element) -> Option<String> {
        let focusable = collect_focusable(root);
        if focusable.is_empty() {
            return None;
        }

        let new_focus = match self
            .focused
            .as_ref()
            .and_then(|current| focusable.iter().position(|id| id == current))
        {
            Some(i) => focusable[(i + 1) % focusable.len()].clone(),
            None => focusable[0].clone(),
        };

        self.switch_to(new_focus)
    }

    /// Focus the previous focusable element (Shift+Tab navigation).
    /// Returns the newly focused element ID if focus changed.
    pub fn focus_prev(&mut self, root: &Element) -> Option<String> {
        let focusable = collect_focusable(root);
        if focusable.is_empty() {
            return None;
        }

        let last = focusable.len() - 1;
        let new_focus = match self
            .focused
            .as_ref()
            .and_then(|current| focusable.iter().position(|id| id == current))
        {
            Some(0) | None => focusable[last].clone(),
            Some(i) => focusable[i - 1].clone(),
        };

        self.switch_to(new_focus)
    }

    fn switch_to(&mut self, new_focus: String) -> Option<String> {
        if self.focused.as_ref() == Some(&new_focus) {
            return None;
        }
        self.focused = Some(new_focus.clone());
        Some(new_focus)
    }

    /// Move focus to `new`, recording Blur/Focus events when it actually moves.
    fn move_focus(&mut self, new: Option<String>, events: &mut Vec<Event>) {
        if self.focused == new {
            return;
        }
        if let Some(old) = self.focused.take() {
            events.push(Event::Blur {
                target: old,
                new_target: new.clone(),
            });
        }
        if let Some(new) = new {
            self.focused = Some(new.clone());
            events.push(Event::Focus { target: new });
        }
    }

    /// Process raw crossterm events and produce high-level events.
    pub fn process_events(
        &mut self,
        raw: &[CrosstermEvent],
        root: &Element,
        layout: &LayoutResult,
    ) -> Vec<Event> {
        let mut events = Vec::new();

        for raw_event in raw {
            match raw_event {
                CrosstermEvent::Key(key_event) => {
                    // Only process key press events (not release/repeat on some terminals)
                    if key_event.kind != KeyEventKind::Press {
                        continue;
                    }

                    let key: Key = key_event.code.into();
                    let modifiers: Modifiers = key_event.modifiers.into();
                    self.process_key(key, modifiers, root, layout, &mut events);
                }

                CrosstermEvent::Mouse(mouse_event) => {
                    let x = mouse_event.column;
                    let y = mouse_event.row;

                    if let MouseEventKind::Down(button) = mouse_event.kind {
                        let button: MouseButton = button.into();
                        if button == MouseButton::Left {
                            let target = hit_test_focusable(layout, root, x, y);
                            log::trace!("[focus] mouse down at ({x}, {y}) -> {target:?}");
                            if target.is_some() {
                                self.move_focus(target, &mut events);
                            }
                        }
                        events.push(Event::Click {
                            target: hit_test(layout, root, x, y),
                            x,
                            y,
                            button,
                        });
                    }
                }

                CrosstermEvent::Resize(width, height) => {
                    events.push(Event::Resize {
                        width: *width,
                        height: *height,
                    });
                }

                _ => {}
            }
        }

        events
    }

    fn process_key(
        &mut self,
        key: Key,
        modifiers: Modifiers,
        root: &Element,
        layout: &LayoutResult,
        events: &mut Vec<Event>,
    ) {
        match key {
            Key::Tab => {
                let old = self.focused.clone();
                if let Some(new) = self.focus_next(root) {
                    self.focused = old;
                    self.move_focus(Some(new), events);
                }
                return;
            }
            Key::BackTab => {
                let old = self.focused.clone();
                if let Some(new) = self.focus_prev(root) {
                    self.focused = old;
                    self.move_focus(Some(new), events);
                }
                return;
            }
            // Escape blurs focused element; only emits key event if nothing focused
            Key::Escape if self.focused.is_some() => {
                self.move_focus(None, events);
                return;
            }
            _ => {}
        }

        let focused = self
            .focused
            .as_deref()
            .and_then(|id| find_element(root, id));

        // Enter/Space activate a focused button the same way a click does.
        if let Some(element) = focused {
            let activates = matches!(key, Key::Enter | Key::Char(' '));
            if activates && modifiers.none() && element.clickable && !element.captures_input {
                let (x, y) = layout
                    .get(&element.id)
                    .map(|rect| (rect.x, rect.y))
                    .unwrap_or((0, 0));
                events.push(Event::Click {
                    target: Some(element.id.clone()),
                    x,
                    y,
                    button: MouseButton::Left,
                });
                return;
            }
        }

        events.push(Event::Key {
            target: self.focused.clone(),
            key,
            modifiers,
        });
    }
}

/// Collect all focusable element IDs in tree order.
pub fn collect_focusable(element: &Element) -> Vec<String> {
    let mut result = Vec::new();
    crate::element::walk(element, &mut |el| {
        if el.focusable {
            result.push(el.id.clone());
        }
    });
    result
}

/// Mark the focused element in the tree so rendering can show it.
/// Text inputs also get their `focused` content flag so the cursor is drawn.
pub fn apply_focus(element: &mut Element, focused: Option<&str>) {
    let is_focused = focused == Some(element.id.as_str());
    element.focused = is_focused;

    match &mut element.content {
        Content::TextInput { focused, .. } => *focused = is_focused,
        Content::Children(children) => {
            for child in children {
                apply_focus(child, focused);
            }
        }
        Content::None | Content::Text(_) => {}
    }
}
