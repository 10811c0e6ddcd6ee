//! Agenda Item Component
//!
//! A single draggable item row with its selection checkbox.

use agenda_core::{AgendaBoard, AgendaItem};
use leptos::prelude::*;

use crate::store::{store_with_board, use_app_store, AppStateStoreFields};

use leptos_dragdrop::*;

#[component]
pub fn AgendaItemRow(item: AgendaItem, dnd: DndSignals, reorderable: bool) -> impl IntoView {
    let store = use_app_store();

    let id = item.id;
    let completed = item.status.is_completed();
    let status_class = format!("status {}", item.status.as_str().to_lowercase());

    let is_selected = move || {
        store
            .board()
            .with(|board| board.as_ref().is_some_and(|b| b.is_selected(id)))
    };

    let on_mousedown = make_on_mousedown(dnd, id);
    let on_mouseenter = make_on_item_mouseenter(dnd, id);
    let on_mouseleave = make_on_mouseleave(dnd);

    let row_class = move || {
        let mut c = String::from("AgendaItem");
        if completed { c.push_str(" completed"); }
        if is_selected() { c.push_str(" selected"); }
        if dnd.dragging_id_read.get() == Some(id) { c.push_str(" dragging"); }
        if dnd.drop_target_read.get() == Some(DropTarget::Item(id)) { c.push_str(" drop-target"); }
        c
    };

    view! {
        <div
            class=row_class
            on:mousedown=move |ev| if reorderable { on_mousedown(ev) }
            on:mouseenter=on_mouseenter
            on:mouseleave=on_mouseleave
        >
            <input
                type="checkbox"
                prop:checked=is_selected
                on:change=move |ev| {
                    let checked = event_target_checked(&ev);
                    store_with_board(&store, |b: &mut AgendaBoard| b.select(id, checked));
                }
            />
            <span class="item-title">{item.title.clone()}</span>
            <span class=status_class>{item.status.as_str()}</span>
        </div>
    }
}
