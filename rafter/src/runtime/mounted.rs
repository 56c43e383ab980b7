//! Headless host: drives a component without a terminal.

use crossterm::event::{Event as CrosstermEvent, KeyCode, KeyEvent, KeyModifiers};
use tuidom::element::find_element_mut;
use tuidom::layout::layout;
use tuidom::render::render_to_buffer;
use tuidom::{
    Buffer, Content, Element, Event, FocusState, LayoutResult, MouseButton, Rect,
    TextInputState, apply_focus, find_element,
};

use crate::component::Component;
use crate::config::RuntimeConfig;
use crate::context::RenderContext;
use crate::effect::{EffectStore, PendingEffect};
use crate::error::RuntimeError;
use crate::node::Handlers;
use crate::node_ref::{Command, CommandQueue, NodeRef};
use crate::state::Scheduler;

/// A component together with everything needed to run it.
///
/// Every event goes through the same cycle: the handler runs, then the host
/// settles. Settling renders, commits the output (binds refs, syncs
/// controlled inputs, applies focus), then runs the effects that are due, and
/// repeats while state is dirty.
///
/// [`Runtime`](crate::Runtime) wraps this around a terminal; tests use it
/// directly.
pub struct Mounted<C: Component> {
    component: C,
    scheduler: Scheduler,
    config: RuntimeConfig,
    queue: CommandQueue,
    focus: FocusState,
    inputs: TextInputState,
    effects: EffectStore,
    handlers: Handlers,
    refs: Vec<NodeRef>,
    frame: Element,
    layout: LayoutResult,
    renders: usize,
}

impl<C: Component> Mounted<C> {
    /// Build and mount a component with the default config.
    pub fn mount(build: impl FnOnce(&Scheduler) -> C) -> Result<Self, RuntimeError> {
        Self::mount_with(RuntimeConfig::default(), build)
    }

    /// Build and mount a component, settling its first render.
    pub fn mount_with(
        config: RuntimeConfig,
        build: impl FnOnce(&Scheduler) -> C,
    ) -> Result<Self, RuntimeError> {
        let scheduler = Scheduler::new();
        let component = build(&scheduler);
        log::debug!("[{}] mounting", config.name);
        component.on_mount();

        let mut mounted = Self {
            component,
            scheduler,
            config,
            queue: CommandQueue::default(),
            focus: FocusState::new(),
            inputs: TextInputState::new(),
            effects: EffectStore::new(),
            handlers: Handlers::default(),
            refs: Vec::new(),
            frame: Element::col(),
            layout: LayoutResult::new(),
            renders: 0,
        };

        mounted.scheduler.request_render();
        mounted.settle()?;
        Ok(mounted)
    }

    /// Render until state stops changing. Returns the number of passes.
    pub fn settle(&mut self) -> Result<usize, RuntimeError> {
        let mut passes = 0;
        while self.scheduler.is_dirty() {
            if passes >= self.config.max_settle_passes {
                log::warn!(
                    "[{}] still dirty after {passes} passes, giving up",
                    self.config.name
                );
                return Err(RuntimeError::SettleLimit { passes });
            }
            passes += 1;

            self.scheduler.clear_dirty();
            let pending = self.render_and_commit();
            let ran = self.effects.run(pending);
            self.apply_commands();

            log::debug!(
                "[{}] render #{} committed, {ran} effects ran",
                self.config.name,
                self.renders
            );
        }
        Ok(passes)
    }

    fn render_and_commit(&mut self) -> Vec<PendingEffect> {
        let mut cx = RenderContext::new(&self.scheduler);
        let node = self.component.render(&mut cx);
        let pending = cx.into_effects();
        self.renders += 1;

        let mut handlers = Handlers::default();
        let mut bound = Vec::new();
        let mut frame = node.commit(&mut handlers, &mut bound);

        sync_inputs(&mut frame, &mut self.inputs);
        self.inputs.retain(&frame);
        if let Some(lost) = self.focus.retain(&frame) {
            log::debug!("[focus] {lost} no longer focusable");
        }
        apply_focus(&mut frame, self.focus.focused());

        for old in self.refs.drain(..) {
            old.unbind();
        }
        for (node_ref, id) in bound {
            node_ref.bind(id, self.queue.clone());
            self.refs.push(node_ref);
        }

        let (width, height) = self.config.viewport;
        self.layout = layout(&frame, Rect::from_size(width, height));
        self.frame = frame;
        self.handlers = handlers;

        pending
    }

    /// Apply focus requests queued by refs. Returns true if focus moved.
    fn apply_commands(&mut self) -> bool {
        let mut changed = false;
        for command in self.queue.drain() {
            match command {
                Command::Focus(id) => {
                    let focusable = find_element(&self.frame, &id).is_some_and(|el| el.focusable);
                    if focusable {
                        changed |= self.focus.focus(&id);
                    } else {
                        log::debug!("[focus] {id} cannot take focus");
                    }
                }
                Command::Blur(id) => {
                    if self.focus.is_focused(&id) {
                        changed |= self.focus.blur();
                    }
                }
            }
        }
        if changed {
            log::trace!("[focus] now {:?}", self.focus.focused());
            apply_focus(&mut self.frame, self.focus.focused());
        }
        changed
    }

    /// Deliver one element event, then settle.
    ///
    /// Returns false when nothing in the component handled the event; the
    /// terminal runtime uses that to decide on global shortcuts.
    pub fn dispatch(&mut self, event: &Event) -> Result<bool, RuntimeError> {
        log::trace!("[{}] dispatch {event:?}", self.config.name);

        let handled = match event {
            Event::Click {
                target: Some(id), ..
            } => match self.handlers.on_click.get(id).cloned() {
                Some(handler) => {
                    handler();
                    true
                }
                None => false,
            },
            Event::Change { target, text } => {
                self.show_edit(target, text);
                match self.handlers.on_change.get(target).cloned() {
                    Some(handler) => {
                        handler(text);
                        true
                    }
                    None => false,
                }
            }
            Event::Submit { target } => {
                let text = self.inputs.get(target).to_string();
                match self.handlers.on_submit.get(target).cloned() {
                    Some(handler) => {
                        handler(&text);
                        true
                    }
                    None => false,
                }
            }
            Event::Focus { .. } | Event::Blur { .. } => {
                apply_focus(&mut self.frame, self.focus.focused());
                true
            }
            Event::Resize { width, height } => {
                self.config.viewport = (*width, *height);
                self.layout = layout(&self.frame, Rect::from_size(*width, *height));
                true
            }
            Event::Click { target: None, .. } | Event::Key { .. } => false,
        };

        self.apply_commands();
        self.settle()?;
        Ok(handled)
    }

    /// Put an edit on screen before the component reacts to it.
    fn show_edit(&mut self, id: &str, text: &str) {
        let caret = self.inputs.get_data(id).map(|data| data.cursor);
        if let Some(el) = find_element_mut(&mut self.frame, id)
            && let Content::TextInput { value, cursor, .. } = &mut el.content
        {
            *value = text.to_string();
            *cursor = caret.unwrap_or_else(|| text.chars().count());
        }
    }

    /// Feed raw terminal events through focus and text input handling and
    /// dispatch what comes out. Returns the events nobody handled.
    pub fn handle_raw(&mut self, raw: &[CrosstermEvent]) -> Result<Vec<Event>, RuntimeError> {
        let events = self.focus.process_events(raw, &self.frame, &self.layout);
        let events = self.inputs.process_events(&events, &self.frame);

        let mut unhandled = Vec::new();
        for event in events {
            if !self.dispatch(&event)? {
                unhandled.push(event);
            }
        }
        // Caret moves change no state, so nothing re-rendered for them.
        sync_inputs(&mut self.frame, &mut self.inputs);
        Ok(unhandled)
    }

    /// Press a key as the terminal would report it.
    pub fn press(
        &mut self,
        code: KeyCode,
        modifiers: KeyModifiers,
    ) -> Result<Vec<Event>, RuntimeError> {
        self.handle_raw(&[CrosstermEvent::Key(KeyEvent::new(code, modifiers))])
    }

    /// Click an element as if with the mouse: focus moves to it when it is
    /// focusable, then its click handler runs.
    pub fn click(&mut self, id: &str) -> Result<bool, RuntimeError> {
        let Some(el) = find_element(&self.frame, id) else {
            log::debug!("[{}] click on missing element {id}", self.config.name);
            return Ok(false);
        };

        if el.focusable && self.focus.focus(id) {
            apply_focus(&mut self.frame, self.focus.focused());
        }
        let (x, y) = self
            .layout
            .get(id)
            .map(|rect| (rect.x, rect.y))
            .unwrap_or((0, 0));

        self.dispatch(&Event::Click {
            target: Some(id.to_string()),
            x,
            y,
            button: MouseButton::Left,
        })
    }

    /// Focus an input and type `text` into it one key at a time, settling
    /// after every keystroke. Returns false if the element cannot take input.
    pub fn type_text(&mut self, id: &str, text: &str) -> Result<bool, RuntimeError> {
        let accepts = find_element(&self.frame, id).is_some_and(|el| el.captures_input);
        if !accepts {
            log::debug!("[{}] {id} does not accept text", self.config.name);
            return Ok(false);
        }

        if self.focus.focus(id) {
            apply_focus(&mut self.frame, self.focus.focused());
        }
        for c in text.chars() {
            self.press(KeyCode::Char(c), KeyModifiers::NONE)?;
        }
        Ok(true)
    }

    /// The committed element tree.
    pub fn frame(&self) -> &Element {
        &self.frame
    }

    pub fn layout(&self) -> &LayoutResult {
        &self.layout
    }

    /// Text shown by an element: a label's text or an input's value.
    pub fn text_of(&self, id: &str) -> Option<&str> {
        find_element(&self.frame, id).and_then(|el| el.content.text())
    }

    pub fn focused(&self) -> Option<&str> {
        self.focus.focused()
    }

    /// How many times the component has rendered.
    pub fn renders(&self) -> usize {
        self.renders
    }

    pub fn component(&self) -> &C {
        &self.component
    }

    pub fn scheduler(&self) -> &Scheduler {
        &self.scheduler
    }

    /// Paint the committed frame into a fresh buffer the size of the viewport.
    pub fn snapshot(&self) -> Buffer {
        let (width, height) = self.config.viewport;
        let mut buf = Buffer::new(width, height);
        render_to_buffer(&self.frame, &self.layout, &mut buf);
        buf
    }

    /// Drop the component, unbinding its refs first.
    pub fn unmount(self) {
        drop(self);
    }
}

impl<C: Component> Drop for Mounted<C> {
    fn drop(&mut self) {
        for node_ref in self.refs.drain(..) {
            node_ref.unbind();
        }
        self.queue.drain();
        self.effects.clear();
        self.component.on_unmount();
        log::debug!("[{}] unmounted", self.config.name);
    }
}

/// Push each input's value into the edit state and pull the caret back out.
fn sync_inputs(element: &mut Element, inputs: &mut TextInputState) {
    match &mut element.content {
        Content::TextInput { value, cursor, .. } => {
            inputs.set(&element.id, value.as_str());
            if let Some(data) = inputs.get_data(&element.id) {
                *cursor = data.cursor;
            }
        }
        Content::Children(children) => {
            for child in children {
                sync_inputs(child, inputs);
            }
        }
        Content::None | Content::Text(_) => {}
    }
}
