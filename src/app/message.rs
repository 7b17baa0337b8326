// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the demo application.

use crate::ui;
use iced::{Point, Size};
use std::path::PathBuf;
use std::time::Instant;

/// Top-level messages consumed by `App::update`.
#[derive(Debug, Clone)]
pub enum Message {
    /// Frame tick while something is animating or a timer is armed.
    Tick(Instant),
    Toast(ui::Message),
    Push(Preset),
    HideAll,
    ToggleAllowed,
    CursorMoved(Point),
    MouseReleased,
    WindowFocused(bool),
    WindowResized(Size),
    /// An action-button task finished. Failures were already logged.
    ActionFinished(bool),
}

/// Toasts the demo can push.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Preset {
    Success,
    Error,
    Warning,
    Info,
    /// Warning with an action button whose runner succeeds.
    Undo,
    /// Error with an action button whose runner fails.
    Retry,
}

impl Preset {
    pub const ALL: [Preset; 6] = [
        Preset::Success,
        Preset::Error,
        Preset::Warning,
        Preset::Info,
        Preset::Undo,
        Preset::Retry,
    ];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Preset::Success => "Success",
            Preset::Error => "Error",
            Preset::Warning => "Warning",
            Preset::Info => "Info",
            Preset::Undo => "With undo",
            Preset::Retry => "Failing retry",
        }
    }
}

/// Runtime flags passed from the command line.
#[derive(Debug, Default, Clone)]
pub struct Flags {
    /// Opens the presentation gate at startup regardless of the config.
    pub allowed: bool,
    /// Settings file to read instead of the default location.
    pub config_path: Option<PathBuf>,
}
