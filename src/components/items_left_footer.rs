//! Items Left Footer Component

use leptos::prelude::*;

use crate::models::items_left;

/// "N items left", empty when there is nothing left
#[component]
pub fn ItemsLeftFooter(#[prop(into)] count: Signal<usize>) -> impl IntoView {
    view! {
        <div class="footer">{move || items_left(count.get())}</div>
    }
}
