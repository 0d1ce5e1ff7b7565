use gloo::timers::callback::Timeout;
use leptos::html::Input;
use leptos::*;
use wasm_bindgen_futures::spawn_local;

pub mod api;
pub mod clipboard;
pub mod form;
pub mod item;
pub mod render;
pub mod search;
pub mod text;

use form::AddItemForm;
use search::SearchPanel;

const REFRESH_SPIN_MS: u32 = 500;

/// Fetches the full listing and rewrites the grid and count badge.
/// Overlapping calls are not coordinated; the last response to arrive
/// wins the grid.
pub(crate) fn load_items(set_count: WriteSignal<String>, set_grid: WriteSignal<String>) {
    set_grid.set(render::loader("Scanning system..."));
    spawn_local(async move {
        match api::list_items().await {
            Ok(items) => {
                set_count.set(text::count_label(items.len()));
                set_grid.set(render::grid(&items));
            }
            Err(err) => {
                gloo::console::error!(format!("listing fetch failed: {err}"));
                set_grid.set(render::notice("error", &format!("System Offline: {err}")));
            }
        }
    });
}

/// Entry point of the bundle: mounts [`App`] onto `<body>`.
#[cfg(target_arch = "wasm32")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    mount_to_body(|cx| {
        view! { cx, <App/> }
    });
}

#[component]
pub fn App(cx: Scope) -> impl IntoView {
    let (count, set_count) = create_signal(cx, "0 items".to_string());
    let (grid, set_grid) = create_signal(cx, String::new());
    let (spinning, set_spinning) = create_signal(cx, false);
    let search_input = create_node_ref::<Input>(cx);

    // initial load
    load_items(set_count, set_grid);

    let refresh = move |_| {
        set_spinning.set(true);
        Timeout::new(REFRESH_SPIN_MS, move || set_spinning.set(false)).forget();
        load_items(set_count, set_grid);
    };

    let grid_click = move |ev: web_sys::MouseEvent| {
        if let Some((id, tag)) = clipboard::copy_target(&ev) {
            clipboard::copy_id(id, tag, search_input);
        }
    };

    view! { cx,
        <header>
            <h1>"Item Inventory"</h1>
            <span class="count-badge">{move || count.get()}</span>
            <button
                class="refresh"
                title="Refresh"
                on:click=refresh
                style=move || if spinning.get() {
                    "transform: rotate(180deg);"
                } else {
                    "transform: rotate(0deg);"
                }
            >
                "\u{27f3}"
            </button>
        </header>
        <section class="panel">
            <h2>"Add Item"</h2>
            <AddItemForm set_count=set_count set_grid=set_grid/>
        </section>
        <section class="panel">
            <h2>"Search"</h2>
            <SearchPanel search_input=search_input/>
        </section>
        <div class="items-grid" on:click=grid_click inner_html=move || grid.get()></div>
    }
}
