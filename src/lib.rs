//! Pong Wars (workspace facade crate).
//!
//! Re-exports the member crates under one roof so binaries, integration tests
//! and benches can use `pong_wars::{core, input, term, types}`.

pub use pong_wars_core as core;
pub use pong_wars_input as input;
pub use pong_wars_term as term;
pub use pong_wars_types as types;
