use std::io;

use thiserror::Error;

/// Errors surfaced by the runtime.
#[derive(Debug, Error)]
pub enum RuntimeError {
    /// Terminal setup, reading events or painting failed.
    #[error("terminal I/O failed: {0}")]
    Io(#[from] io::Error),

    /// State was still dirty after the last allowed render pass.
    #[error("component still dirty after {passes} render passes")]
    SettleLimit { passes: usize },
}
