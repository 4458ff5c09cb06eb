//! Application Context
//!
//! Shared signals provided via Leptos Context API.

use leptos::prelude::*;

/// App-wide signals provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Bumped after every list change; the header input refocuses on it - read
    pub focus_epoch: ReadSignal<u32>,
    /// Bumped after every list change; the header input refocuses on it - write
    set_focus_epoch: WriteSignal<u32>,
}

impl AppContext {
    pub fn new(focus_epoch: (ReadSignal<u32>, WriteSignal<u32>)) -> Self {
        Self {
            focus_epoch: focus_epoch.0,
            set_focus_epoch: focus_epoch.1,
        }
    }

    /// Ask the header input to grab focus on the next tick
    pub fn request_focus(&self) {
        self.set_focus_epoch.update(|v| *v += 1);
    }
}
