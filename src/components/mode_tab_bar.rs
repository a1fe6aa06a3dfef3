//! Mode Tab Bar Component
//!
//! Tab bar for switching between the local and remote lists.

use leptos::prelude::*;

use crate::context::{use_app_context, Mode};

#[component]
pub fn ModeTabBar() -> impl IntoView {
    let ctx = use_app_context();

    view! {
        <nav class="mode-tab-bar">
            {Mode::ALL.into_iter().map(|mode| {
                let tab_class = move || {
                    if ctx.mode.get() == mode { "mode-tab active" } else { "mode-tab" }
                };
                view! {
                    <button class=tab_class on:click=move |_| ctx.switch_to(mode)>
                        {mode.label()}
                    </button>
                }
            }).collect_view()}
        </nav>
    }
}
