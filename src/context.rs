//! Application Context
//!
//! Shared state provided via Leptos Context API.

use leptos::prelude::*;

use crate::config::ApiConfig;

/// Which list is on screen
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Mode {
    #[default]
    Local,
    Remote,
}

impl Mode {
    pub const ALL: [Mode; 2] = [Mode::Local, Mode::Remote];

    pub fn label(&self) -> &'static str {
        match self {
            Mode::Local => "Local",
            Mode::Remote => "Remote",
        }
    }
}

/// App-wide values provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Current mode - read
    pub mode: ReadSignal<Mode>,
    /// Current mode - write
    set_mode: WriteSignal<Mode>,
    /// List service settings for the remote view
    api_config: StoredValue<ApiConfig>,
}

impl AppContext {
    pub fn new(mode: (ReadSignal<Mode>, WriteSignal<Mode>), api_config: ApiConfig) -> Self {
        Self {
            mode: mode.0,
            set_mode: mode.1,
            api_config: StoredValue::new(api_config),
        }
    }

    pub fn switch_to(&self, mode: Mode) {
        self.set_mode.set(mode);
    }

    pub fn api_config(&self) -> ApiConfig {
        self.api_config.get_value()
    }
}

/// Get the app context
pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}
