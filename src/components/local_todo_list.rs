//! Local Todo List Component
//!
//! Todo list kept only in view state.

use leptos::prelude::*;

use super::{ItemsLeftFooter, TodoInput};
use crate::local::LocalTodos;

#[component]
pub fn LocalTodoList() -> impl IntoView {
    let todos = RwSignal::new(LocalTodos::new());
    let input = RwSignal::new(String::new());

    let add_todo = move |_: ()| {
        let text = input.get_untracked();
        let mut added = None;
        todos.update(|list| added = list.add(&text));
        if let Some(id) = added {
            log::debug!("added local todo {}", id);
            input.set(String::new());
        }
    };

    let delete_todo = move |id: u32| {
        todos.update(|list| {
            list.remove(id);
        });
    };

    let count = Signal::derive(move || todos.with(|list| list.len()));

    view! {
        <div class="todo-app">
            <h1 class="header">"todos"</h1>
            <div class="todo-card">
                <TodoInput value=input on_add=add_todo />
                <div class="list">
                    <Show
                        when=move || !todos.with(LocalTodos::is_empty)
                        fallback=|| view! { <div class="empty">"No tasks, add a task"</div> }
                    >
                        <For
                            each=move || todos.with(|list| list.items().to_vec())
                            key=|todo| todo.id
                            children=move |todo| {
                                let id = todo.id;
                                view! {
                                    <div class="todo-row">
                                        <span>{todo.text}</span>
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
    }
}
