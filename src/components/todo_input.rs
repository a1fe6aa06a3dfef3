//! Todo Input Component
//!
//! Text field with an "Add" button. Enter submits the form, so both add.

use leptos::prelude::*;

#[component]
pub fn TodoInput(
    value: RwSignal<String>,
    #[prop(into)] on_add: Callback<()>,
    /// Extra buttons rendered after "Add"
    #[prop(optional)]
    children: Option<Children>,
) -> impl IntoView {
    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        on_add.run(());
    };

    view! {
        <form class="todo-input" on:submit=submit>
            <input
                class="input"
                type="text"
                placeholder="Add a task"
                prop:value=move || value.get()
                on:input=move |ev| value.set(event_target_value(&ev))
            />
            <button class="add-btn" type="submit">"Add"</button>
            {children.map(|c| c())}
        </form>
    }
}
