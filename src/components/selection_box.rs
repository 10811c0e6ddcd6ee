//! Multiple Selection Box
//!
//! Bulk-action bar shown while at least one agenda item is selected.

use agenda_core::AgendaBoard;
use leptos::prelude::*;

use crate::store::{store_with_board, use_app_store, AppStateStoreFields};

#[component]
pub fn MultipleSelectionBox() -> impl IntoView {
    let store = use_app_store();

    let selected_count = move || {
        store
            .board()
            .with(|board| board.as_ref().map_or(0, AgendaBoard::selected_count))
    };

    view! {
        <Show when=move || { selected_count() > 0 }>
            <div class="MultipleSelectionBox">
                <span class="selection-count">{move || format!("{} selected", selected_count())}</span>
                <button
                    type="button"
                    class="selection-cancel"
                    on:click=move |_| {
                        store_with_board(&store, AgendaBoard::cancel_selection);
                    }
                >
                    "Cancel"
                </button>
            </div>
        </Show>
    }
}
