//! Remote Todo List Component
//!
//! Todo list synced with the list service. Every change goes to the
//! service first and the list is then reloaded from it.

use leptos::prelude::*;
use leptos::task::spawn_local;

use super::{ItemsLeftFooter, TodoInput};
use crate::api::HttpTodoApi;
use crate::context::use_app_context;
use crate::models::TodoId;
use crate::remote::RemoteTodos;
use crate::store::{self, StoreSink};

#[component]
pub fn RemoteTodoList() -> impl IntoView {
    let ctx = use_app_context();
    let remote = StoredValue::new_local(RemoteTodos::new(HttpTodoApi::new(ctx.api_config())));
    let store = store::new_remote_store();
    let input = RwSignal::new(String::new());
    let sink = StoreSink::new(store, input);

    // Initial load
    Effect::new(move |_| {
        let remote = remote.get_value();
        spawn_local(async move {
            remote.load(&sink).await;
        });
    });

    let add_todo = move |_: ()| {
        let remote = remote.get_value();
        let text = input.get_untracked();
        spawn_local(async move {
            remote.add(&sink, &text).await;
        });
    };

    let delete_todo = move |id: TodoId| {
        let remote = remote.get_value();
        spawn_local(async move {
            remote.delete(&sink, id).await;
        });
    };

    let clear_all = move |_| {
        let remote = remote.get_value();
        spawn_local(async move {
            remote.clear_all(&sink).await;
        });
    };

    let count = Signal::derive(move || store::todo_count(store));

    view! {
        <Show
            when=move || !store::is_loading(store)
            fallback=|| view! { <div class="todo-app"><div class="loading">"Loading..."</div></div> }
        >
            <div class="todo-app">
                <h1 class="header">"todos"</h1>
                {move || store::current_error(store).map(|error| view! {
                    <div class="error">{error.to_string()}</div>
                })}
                <div class="todo-card">
                    <TodoInput value=input on_add=add_todo>
                        <button
                            class="clear-all"
                            type="button"
                            disabled=move || count.get() == 0
                            on:click=clear_all
                        >
                            "Clear All"
                        </button>
                    </TodoInput>
                    <div class="list">
                        <Show
                            when=move || count.get() != 0
                            fallback=|| view! { <div class="empty">"No tasks, add a task"</div> }
                        >
                            <For
                                each=move || store::current_todos(store)
                                key=|todo| todo.id
                                children=move |todo| {
                                    let id = todo.id;
                                    view! {
                                        <div class="todo-row">
                                            <span class=if todo.is_done { "completed" } else { "" }>
                                                {todo.label}
                                            </span>
                                            <span class="delete" title="Delete" on:click=move |_| delete_todo(id)>
                                                "✕"
                                            </span>
                                        </div>
                                    }
                                }
                            />
                        </Show>
                    </div>
                    <ItemsLeftFooter count=count />
                </div>
            </div>
        </Show>
    }
}
