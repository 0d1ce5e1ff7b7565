use leptos::html::Input;
use leptos::*;
use wasm_bindgen_futures::spawn_local;

use crate::{api, render};

/// Search-by-id panel. The input's node ref is created by `App` so
/// the copy affordance can reach the same element.
#[component]
pub fn SearchPanel(cx: Scope, search_input: NodeRef<Input>) -> impl IntoView {
    let (result, set_result) = create_signal(cx, String::new());

    let run_search = move |_| {
        let id = search_input
            .get()
            .map(|el| el.value())
            .unwrap_or_default()
            .trim()
            .to_string();
        if id.is_empty() {
            return;
        }
        set_result.set(render::loader("Scanning..."));
        spawn_local(async move {
            let markup = match api::fetch_item(&id).await {
                Ok(Some(item)) => render::search_card(&item),
                Ok(None) => render::notice("error", "Artifact Not Found (404)"),
                Err(err) => render::notice("error", &format!("Error: {err}")),
            };
            set_result.set(markup);
        });
    };

    view! { cx,
        <div class="search-bar">
            <input node_ref=search_input placeholder="Search by ID"/>
            <button on:click=run_search>"Locate"</button>
        </div>
        <div class="search-result" inner_html=move || result.get()></div>
    }
}
