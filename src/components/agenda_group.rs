//! Agenda Group Component
//!
//! One section: a header that can be dragged to reorder sections, and a
//! body holding the section's items. The body is a drop target of its own
//! so items can be dropped into an empty section.

use agenda_core::{AgendaBoard, AgendaGroup, SectionStatus};
use leptos::prelude::*;

use crate::components::AgendaItemRow;
use crate::store::{store_with_board, use_app_store, AppStateStoreFields};

use leptos_dragdrop::*;

/// Keeps an empty section tall enough to drop into
const MIN_CONTAINER_HEIGHT: &str = "60px";

#[component]
pub fn AgendaGroupView(group: AgendaGroup, dnd: DndSignals, reorderable: bool) -> impl IntoView {
    let store = use_app_store();

    let id = group.id();
    let container_id = group.drop_target.group_id();
    let title = group.item.title.clone();
    let active = SectionStatus::of(&group).is_active();

    let expanded = move || {
        store
            .board()
            .with(|board| board.as_ref().is_some_and(|b| b.is_expanded(id)))
    };

    let on_mousedown = make_on_mousedown(dnd, id);
    let on_mouseenter = make_on_item_mouseenter(dnd, id);
    let on_mouseleave = make_on_mouseleave(dnd);
    let on_container_enter = make_on_container_mouseenter(dnd, container_id);

    let is_dragging = move || dnd.dragging_id_read.get() == Some(id);
    let header_class = move || {
        let mut c = String::from("group-button");
        if active { c.push_str(" active"); }
        if is_dragging() { c.push_str(" dragging"); }
        if dnd.drop_target_read.get() == Some(DropTarget::Item(id)) { c.push_str(" drop-target"); }
        c
    };
    let body_class = move || {
        if dnd.drop_target_read.get() == Some(DropTarget::Container(container_id)) {
            "group-items drop-target"
        } else {
            "group-items"
        }
    };

    let children = group.children;

    view! {
        <div class="AgendaGroup">
            <div
                class=header_class
                on:mousedown=move |ev| if reorderable { on_mousedown(ev) }
                on:mouseenter=on_mouseenter
                on:mouseleave=on_mouseleave
                on:click=move |_| {
                    // A drag ending on the header is not a click
                    if dnd.drag_just_ended_read.get_untracked() { return; }
                    store_with_board(&store, |b: &mut AgendaBoard| b.toggle_expanded(id));
                }
            >
                <div class="group-title">
                    {title}
                    {active.then(|| view! { <span class="groupStatus">"In Progress"</span> })}
                </div>
                <div class={if active { "group-in-progress" } else { "group-not-in-progress" }}>
                    {move || if expanded() { "−" } else { "+" }}
                </div>
            </div>

            <Show when=expanded>
                <div
                    class=body_class
                    style=format!("min-height: {};", MIN_CONTAINER_HEIGHT)
                    on:mouseenter=on_container_enter
                    on:mouseleave=on_mouseleave
                >
                    {children
                        .clone()
                        .into_iter()
                        .map(|item| view! { <AgendaItemRow item=item dnd=dnd reorderable=reorderable /> })
                        .collect_view()}
                </div>
            </Show>
        </div>
    }
}
