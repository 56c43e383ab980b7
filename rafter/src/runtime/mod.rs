//! Rafter runtime - runs a component in the terminal.

mod mounted;

use crossterm::event::EventStream;
use futures::StreamExt;
use tuidom::{Event, Key, Terminal};

use crate::component::Component;
use crate::config::RuntimeConfig;
use crate::error::RuntimeError;
use crate::state::Scheduler;

pub use mounted::Mounted;

/// Rafter runtime - the main entry point for running a component.
///
/// Reads terminal events one at a time and fully settles the component
/// after each before painting and reading the next.
#[derive(Debug, Default)]
pub struct Runtime {
    config: RuntimeConfig,
}

impl Runtime {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: RuntimeConfig) -> Self {
        Self { config }
    }

    /// Run until Ctrl+C / Ctrl+Q, or Escape with nothing focused.
    ///
    /// Must be awaited on a current-thread executor; components are not
    /// `Send`.
    pub async fn run<C, F>(self, build: F) -> Result<(), RuntimeError>
    where
        C: Component,
        F: FnOnce(&Scheduler) -> C,
    {
        let mut terminal = Terminal::new()?;
        let (width, height) = terminal.size();
        let config = self.config.viewport(width, height);
        let quit_on_escape = config.quit_on_escape;
        log::info!("[{}] starting at {width}x{height}", config.name);

        let mut mounted = Mounted::mount_with(config, build)?;
        terminal.render(mounted.frame())?;

        let mut events = EventStream::new();
        while let Some(raw) = events.next().await {
            let raw = raw?;
            let unhandled = mounted.handle_raw(std::slice::from_ref(&raw))?;
            if unhandled.iter().any(|event| is_quit(event, quit_on_escape)) {
                log::info!("[runtime] quit requested");
                break;
            }
            terminal.render(mounted.frame())?;
        }

        mounted.unmount();
        Ok(())
    }
}

fn is_quit(event: &Event, quit_on_escape: bool) -> bool {
    match event {
        Event::Key {
            key: Key::Char('c' | 'q'),
            modifiers,
            ..
        } => modifiers.ctrl,
        Event::Key {
            target: None,
            key: Key::Escape,
            ..
        } => quit_on_escape,
        _ => false,
    }
}
