//! Non-blocking keyboard poll.

use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event};

use crate::map::should_quit;

/// Drain every pending terminal event without waiting and report whether any
/// of them asked to exit.
pub fn poll_exit_request() -> Result<bool> {
    let mut quit = false;
    while event::poll(Duration::ZERO)? {
        if let Event::Key(key) = event::read()? {
            quit |= should_quit(key);
        }
    }
    Ok(quit)
}
