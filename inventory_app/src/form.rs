use gloo::timers::callback::Timeout;
use leptos::html::Input;
use leptos::*;
use wasm_bindgen_futures::spawn_local;

use crate::api::{self, ApiError};
use crate::item::NewItem;
use crate::load_items;

const MESSAGE_MS: u32 = 5_000;

/// Add-item form: three inputs, a submit control with a busy state,
/// and a transient message area. On success the listing is re-fetched
/// through the write signals handed in by the caller.
#[component]
pub fn AddItemForm(
    cx: Scope,
    set_count: WriteSignal<String>,
    set_grid: WriteSignal<String>,
) -> impl IntoView {
    let name = create_node_ref::<Input>(cx);
    let price = create_node_ref::<Input>(cx);
    let description = create_node_ref::<Input>(cx);

    let (submitting, set_submitting) = create_signal(cx, false);
    let (message, set_message) = create_signal(cx, String::new());
    let (message_class, set_message_class) = create_signal(cx, "message".to_string());
    let (message_epoch, set_message_epoch) = create_signal(cx, 0u32);

    // Each notice bumps the epoch; a clear timer left over from an
    // older notice finds a newer epoch and leaves it alone.
    let show_message = move |text: String, kind: &'static str| {
        let epoch = message_epoch.get() + 1;
        set_message_epoch.set(epoch);
        set_message.set(text);
        set_message_class.set(format!("message {kind}"));
        Timeout::new(MESSAGE_MS, move || {
            if message_epoch.get() == epoch {
                set_message.set(String::new());
                set_message_class.set("message".to_string());
            }
        })
        .forget();
    };

    let submit = move |_| {
        let name_value = name.get().map(|el| el.value()).unwrap_or_default();
        let price_value = price.get().map(|el| el.value()).unwrap_or_default();
        let description_value = description.get().map(|el| el.value()).unwrap_or_default();
        set_submitting.set(true);
        spawn_local(async move {
            let new_item = NewItem {
                name: name_value,
                // A non-numeric price serializes as null and is left
                // to server validation.
                price: price_value.trim().parse().unwrap_or(f64::NAN),
                description: description_value,
            };
            let outcome = api::create_item(&new_item).await;
            // Busy state is restored on every branch.
            set_submitting.set(false);
            match outcome {
                Ok(_) => {
                    for field in [name, price, description] {
                        if let Some(el) = field.get() {
                            el.set_value("");
                        }
                    }
                    show_message("Item deployed successfully!".to_string(), "success");
                    load_items(set_count, set_grid);
                }
                Err(ApiError::Rejected(text)) => show_message(text, "error"),
                Err(ApiError::Connection(text)) => {
                    show_message(format!("Connection error: {text}"), "error");
                }
            }
        });
    };

    view! { cx,
        <div class="add-item-form">
            <input node_ref=name placeholder="Name"/>
            <input node_ref=price type="number" step="0.01" min="0" placeholder="Price"/>
            <input node_ref=description placeholder="Description"/>
            <button
                class="submit"
                on:click=submit
                disabled=move || submitting.get()
                style=move || if submitting.get() { "opacity: 0.7;" } else { "opacity: 1;" }
            >
                {move || if submitting.get() { "Initializing..." } else { "Initialize Item" }}
            </button>
            <div class=move || message_class.get()>{move || message.get()}</div>
        </div>
    }
}
