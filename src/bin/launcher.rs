//! Companion launcher.
//!
//! Starts the main `pong-wars` binary that sits in the same directory as this
//! one, with no arguments and the inherited environment. Always exits 0.

use std::env;
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::process::Command;

const TARGET: &str = "pong-wars";

fn target_name() -> String {
    format!("{}{}", TARGET, env::consts::EXE_SUFFIX)
}

/// Swap the file name of our own invocation path for the target's. Without a
/// usable directory part the target is looked up in the current directory.
fn target_path(argv0: Option<OsString>) -> PathBuf {
    let own = argv0
        .filter(|a| !a.is_empty())
        .map(PathBuf::from)
        .or_else(|| env::current_exe().ok());

    match own {
        Some(own) if own.parent().is_some_and(|dir| !dir.as_os_str().is_empty()) => {
            own.with_file_name(target_name())
        }
        _ => Path::new(".").join(target_name()),
    }
}

fn main() {
    let path = target_path(env::args_os().next());
    // The target's exit status is not our concern.
    let _ = Command::new(&path).status();
}
