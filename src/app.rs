//! Todos App
//!
//! Mode tab bar plus whichever todo list is selected.

use leptos::prelude::*;

use crate::components::{LocalTodoList, ModeTabBar, RemoteTodoList};
use crate::config::ApiConfig;
use crate::context::{AppContext, Mode};

#[component]
pub fn App() -> impl IntoView {
    let mode = signal(Mode::default());
    let config = ApiConfig::from_document();
    log::info!("list service {} as user {}", config.base_url, config.user);

    // Provide context to all children
    let ctx = AppContext::new(mode, config);
    provide_context(ctx);

    view! {
        <div class="wrapper">
            <ModeTabBar />
            {move || match ctx.mode.get() {
                Mode::Local => view! { <LocalTodoList /> }.into_any(),
                Mode::Remote => view! { <RemoteTodoList /> }.into_any(),
            }}
        </div>
    }
}
