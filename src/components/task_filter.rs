//! Task Filter Component
//!
//! Tri-state filter bar over the task list.

use leptos::prelude::*;

use crate::models::Filter;
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn FilterBar() -> impl IntoView {
    let store = use_app_store();

    view! {
        <div class="filter-bar">
            {Filter::ALL.iter().map(|filter| {
                let filter = *filter;
                view! {
                    <button
                        class=move || if store.filter().get() == filter {
                            "filter-btn active"
                        } else {
                            "filter-btn"
                        }
                        on:click=move |_| store.filter().set(filter)
                    >
                        {filter.label()}
                    </button>
                }
            }).collect_view()}
        </div>
    }
}
