//! Terminal input module.
//!
//! The game takes no control input. The keyboard is only polled, once per
//! frame after presentation, for an exit request. Everything else is ignored.

pub mod map;
pub mod poll;

pub use map::should_quit;
pub use poll::poll_exit_request;
