//! Agenda View Component
//!
//! A meeting's agenda as collapsible sections with drag-and-drop
//! reordering, a "show closed" toggle and multi-selection.

use agenda_core::{AgendaBoard, AgendaGroup, DragOutcome, DropTargetId, ItemId, ItemStatus, OverTarget};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::commands;
use crate::components::{AgendaGroupView, MultipleSelectionBox};
use crate::context::AppContext;
use crate::store::{store_drag, store_with_board, use_app_store, AppStateStoreFields};

use leptos_dragdrop::*;

fn to_over_target(target: DropTarget) -> OverTarget {
    match target {
        DropTarget::Item(id) => OverTarget::Item(id),
        DropTarget::Container(section_id) => OverTarget::Container(DropTargetId(section_id)),
    }
}

/// Re-render a section whenever its status or its children change
fn group_key(group: &AgendaGroup) -> (ItemId, ItemStatus, Vec<(ItemId, ItemStatus)>) {
    (
        group.id(),
        group.item.status,
        group.children.iter().map(|c| (c.id, c.status)).collect(),
    )
}

#[component]
pub fn AgendaView() -> impl IntoView {
    let store = use_app_store();
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let on_event = Callback::new(move |event: DndEvent| {
        let outcome = match event {
            DndEvent::Start(id) => store_drag(&store, |b| b.drag_start(id)),
            DndEvent::Over(active, target) => {
                store_drag(&store, |b| b.drag_over(active, target.map(to_over_target)))
            }
            DndEvent::End(active, target) => {
                store_drag(&store, |b| b.drag_end(active, target.map(to_over_target)))
            }
            DndEvent::Cancel => store_drag(&store, AgendaBoard::drag_cancel),
        };

        if let DragOutcome::Committed(hierarchy) = outcome {
            let meeting_id = store.meeting_id().get_untracked();
            let positions = hierarchy.positions();
            web_sys::console::log_1(&format!("[DND] Committing {} positions for meeting {}", positions.len(), meeting_id).into());
            spawn_local(async move {
                if let Err(e) = commands::reorder_agenda(meeting_id, &positions).await {
                    web_sys::console::error_1(&format!("[DND] Reorder failed: {}", e).into());
                    // Fall back to whatever the backend has
                    ctx.reload();
                }
            });
        }
    });

    let dnd = create_dnd_signals(on_event);
    bind_global_handlers(dnd);

    let reorderable = move || store.config().get().reorderable;
    let show_completed = move || {
        store
            .board()
            .with(|board| board.as_ref().map_or(true, AgendaBoard::show_completed))
    };
    let groups = Memo::new(move |_| {
        store
            .board()
            .with(|board| board.as_ref().map(AgendaBoard::view).unwrap_or_default())
    });

    view! {
        <div class="AgendaView">
            <button
                type="button"
                class="complete-toggle"
                on:click=move |_| {
                    store_with_board(&store, AgendaBoard::toggle_show_completed);
                }
            >
                <span class="checkbox-icon">{move || if show_completed() { "☑" } else { "☐" }}</span>
                <p>"Show closed items"</p>
            </button>

            <div class="agenda">
                <For
                    each=move || groups.get().groups().to_vec()
                    key=group_key
                    children=move |group| {
                        view! {
                            <AgendaGroupView
                                group=group
                                dnd=dnd
                                reorderable=reorderable()
                            />
                        }
                    }
                />
            </div>

            <MultipleSelectionBox />
        </div>
    }
}
