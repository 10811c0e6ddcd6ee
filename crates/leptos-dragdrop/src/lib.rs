//! Leptos DragDrop Utilities
//!
//! Simple drag-and-drop for Leptos using mouse events.
//! Uses movement threshold to distinguish click from drag, and reports the
//! gesture as start / over / end / cancel events through one callback.

use leptos::prelude::*;
use wasm_bindgen::JsCast;

/// Drop target types
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DropTarget {
    /// Pointer over an item row or a section header
    Item(u32),
    /// Pointer over a section's item container (by section id)
    Container(u32),
}

/// Drag lifecycle event
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DndEvent {
    Start(u32),
    Over(u32, Option<DropTarget>),
    End(u32, Option<DropTarget>),
    Cancel,
}

/// DnD state signals
#[derive(Clone, Copy)]
pub struct DndSignals {
    pub dragging_id_read: ReadSignal<Option<u32>>,
    pub dragging_id_write: WriteSignal<Option<u32>>,
    pub drop_target_read: ReadSignal<Option<DropTarget>>,
    pub drop_target_write: WriteSignal<Option<DropTarget>>,
    pub drag_just_ended_read: ReadSignal<bool>,
    pub drag_just_ended_write: WriteSignal<bool>,
    /// Pending item id (mousedown but not yet dragging)
    pub pending_id_read: ReadSignal<Option<u32>>,
    pub pending_id_write: WriteSignal<Option<u32>>,
    /// Start position for movement detection
    pub start_x_read: ReadSignal<i32>,
    pub start_x_write: WriteSignal<i32>,
    pub start_y_read: ReadSignal<i32>,
    pub start_y_write: WriteSignal<i32>,
    /// Receives every lifecycle event
    pub on_event: Callback<DndEvent>,
}

/// Movement threshold in pixels to start dragging
const DRAG_THRESHOLD_PX: i32 = 5;

/// How long clicks are suppressed after a drag ends
const CLICK_SUPPRESS_MS: i32 = 100;

pub fn create_dnd_signals(on_event: Callback<DndEvent>) -> DndSignals {
    let (dragging_id_read, dragging_id_write) = signal(None::<u32>);
    let (drop_target_read, drop_target_write) = signal(None::<DropTarget>);
    let (drag_just_ended_read, drag_just_ended_write) = signal(false);
    let (pending_id_read, pending_id_write) = signal(None::<u32>);
    let (start_x_read, start_x_write) = signal(0i32);
    let (start_y_read, start_y_write) = signal(0i32);
    DndSignals {
        dragging_id_read,
        dragging_id_write,
        drop_target_read,
        drop_target_write,
        drag_just_ended_read,
        drag_just_ended_write,
        pending_id_read,
        pending_id_write,
        start_x_read,
        start_x_write,
        start_y_read,
        start_y_write,
        on_event,
    }
}

/// End drag operation
pub fn end_drag(dnd: &DndSignals) {
    dnd.dragging_id_write.set(None);
    dnd.drop_target_write.set(None);
    dnd.pending_id_write.set(None);
    dnd.drag_just_ended_write.set(true);

    if let Some(win) = web_sys::window() {
        let clear = dnd.drag_just_ended_write;
        let cb = wasm_bindgen::closure::Closure::<dyn FnMut()>::new(move || {
            clear.set(false);
        });
        let _ = win.set_timeout_with_callback_and_timeout_and_arguments_0(
            cb.as_ref().unchecked_ref(),
            CLICK_SUPPRESS_MS,
        );
        cb.forget();
    }
}

/// Create mousedown handler for draggable rows and headers
/// Records pending drag with start position
pub fn make_on_mousedown(dnd: DndSignals, id: u32) -> impl Fn(web_sys::MouseEvent) + Copy + 'static {
    move |ev: web_sys::MouseEvent| {
        if ev.button() == 0 {
            // Ignore if target is input or button
            if let Some(target) = ev.target() {
                if target.dyn_ref::<web_sys::HtmlInputElement>().is_some() { return; }
                if target.dyn_ref::<web_sys::HtmlButtonElement>().is_some() { return; }
            }
            // Nested draggables: the innermost one wins
            ev.stop_propagation();
            dnd.pending_id_write.set(Some(id));
            dnd.start_x_write.set(ev.client_x());
            dnd.start_y_write.set(ev.client_y());
        }
    }
}

/// Update the drop target and report it while dragging
fn set_target(dnd: DndSignals, target: Option<DropTarget>) {
    if let Some(dragging) = dnd.dragging_id_read.get_untracked() {
        if dnd.drop_target_read.get_untracked() != target {
            dnd.drop_target_write.set(target);
            dnd.on_event.run(DndEvent::Over(dragging, target));
        }
    }
}

/// Create mouseenter handler for item rows and section headers
pub fn make_on_item_mouseenter(dnd: DndSignals, id: u32) -> impl Fn(web_sys::MouseEvent) + Copy + 'static {
    move |_ev: web_sys::MouseEvent| set_target(dnd, Some(DropTarget::Item(id)))
}

/// Create mouseenter handler for a section's item container
pub fn make_on_container_mouseenter(dnd: DndSignals, section_id: u32) -> impl Fn(web_sys::MouseEvent) + Copy + 'static {
    move |_ev: web_sys::MouseEvent| set_target(dnd, Some(DropTarget::Container(section_id)))
}

/// Create mouseleave handler
pub fn make_on_mouseleave(dnd: DndSignals) -> impl Fn(web_sys::MouseEvent) + Copy + 'static {
    move |_ev: web_sys::MouseEvent| set_target(dnd, None)
}

fn add_document_listener<E>(event: &str, handler: impl FnMut(E) + 'static)
where
    E: wasm_bindgen::convert::FromWasmAbi + 'static,
{
    use wasm_bindgen::closure::Closure;

    let closure = Closure::<dyn FnMut(E)>::new(handler);
    if let Some(doc) = web_sys::window().and_then(|win| win.document()) {
        let _ = doc.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
    }
    closure.forget();
}

/// Document mousemove - starts drag if moved enough
fn bind_global_mousemove(dnd: DndSignals) {
    add_document_listener("mousemove", move |ev: web_sys::MouseEvent| {
        let pending = dnd.pending_id_read.get_untracked();

        // If we have a pending drag and haven't started dragging yet
        if let Some(id) = pending {
            if dnd.dragging_id_read.get_untracked().is_some() {
                return;
            }
            let dx = (ev.client_x() - dnd.start_x_read.get_untracked()).abs();
            let dy = (ev.client_y() - dnd.start_y_read.get_untracked()).abs();

            // Start dragging if moved beyond threshold
            if dx > DRAG_THRESHOLD_PX || dy > DRAG_THRESHOLD_PX {
                dnd.dragging_id_write.set(Some(id));
                dnd.on_event.run(DndEvent::Start(id));
            }
        }
    });
}

/// Document keydown - Escape cancels an active drag
fn bind_global_keydown(dnd: DndSignals) {
    add_document_listener("keydown", move |ev: web_sys::KeyboardEvent| {
        if ev.key() == "Escape" && dnd.dragging_id_read.get_untracked().is_some() {
            end_drag(&dnd);
            dnd.on_event.run(DndEvent::Cancel);
        }
    });
}

/// Bind the document listeners driving the gesture: mousemove (start),
/// mouseup (end) and Escape (cancel)
pub fn bind_global_handlers(dnd: DndSignals) {
    add_document_listener("mouseup", move |_ev: web_sys::MouseEvent| {
        let dragging_id = dnd.dragging_id_read.get_untracked();
        let drop_target = dnd.drop_target_read.get_untracked();

        // Clear pending state first
        dnd.pending_id_write.set(None);

        end_drag(&dnd);
        // If we were actually dragging (not just clicking)
        if let Some(dragged) = dragging_id {
            dnd.on_event.run(DndEvent::End(dragged, drop_target));
        }
        // Otherwise the click event fires naturally on the element
    });

    bind_global_mousemove(dnd);
    bind_global_keydown(dnd);
}
