//! Agenda Frontend App
//!
//! Loads the meeting and renders its agenda.

use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;

use crate::commands;
use crate::components::AgendaView;
use crate::context::AppContext;
use crate::store::{store_load_meeting, AppState, AppStateStoreFields};

/// Meeting shown when none is chosen
const DEFAULT_MEETING_ID: u32 = 1;

#[component]
pub fn App() -> impl IntoView {
    let store = Store::new(AppState::new(DEFAULT_MEETING_ID));
    provide_context(store);

    let (reload_trigger, set_reload_trigger) = signal(0u32);
    provide_context(AppContext::new((reload_trigger, set_reload_trigger)));

    // Board switches are read once, before the first meeting load
    let (config_ready, set_config_ready) = signal(false);
    spawn_local(async move {
        match commands::get_board_config().await {
            Ok(config) => *store.config().write() = config,
            Err(e) => web_sys::console::error_1(&format!("[APP] Bad agenda config, using defaults: {}", e).into()),
        }
        set_config_ready.set(true);
    });

    // Load the meeting when config is ready or a reload is requested
    Effect::new(move |_| {
        let trigger = reload_trigger.get();
        if !config_ready.get() { return; }
        let meeting_id = store.meeting_id().get_untracked();
        web_sys::console::log_1(&format!("[APP] Loading meeting {}, trigger={}", meeting_id, trigger).into());
        spawn_local(async move {
            match commands::get_meeting(meeting_id).await {
                Ok(meeting) => {
                    web_sys::console::log_1(&format!("[APP] Loaded {} agenda items", meeting.items.len()).into());
                    store_load_meeting(&store, &meeting);
                }
                Err(e) => *store.load_error().write() = Some(e),
            }
        });
    });

    view! {
        <div class="app-layout">
            <main class="main-content">
                <h1>"Agenda"</h1>
                {move || store.load_error().get().map(|e| view! { <p class="load-error">{e}</p> })}
                <AgendaView />
            </main>
        </div>
    }
}
