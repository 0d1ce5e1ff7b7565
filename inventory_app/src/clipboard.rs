//! Copy-to-clipboard affordance for the identifier tags rendered into
//! the grid. The grid container delegates clicks here because the
//! cards are injected as markup strings and carry no handlers of
//! their own.

use gloo::timers::callback::Timeout;
use leptos::html::Input;
use leptos::NodeRef;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys::{Element, MouseEvent};

const COPIED_MARKER_MS: u32 = 2_000;

/// Picks the identifier tag out of a delegated grid click, if the
/// click landed on one.
pub fn copy_target(ev: &MouseEvent) -> Option<(String, Element)> {
    let target = ev.target()?.dyn_into::<Element>().ok()?;
    let tag = target.closest(".item-id").ok().flatten()?;
    let id = tag.get_attribute("data-id")?;
    Some((id, tag))
}

/// Writes the identifier to the system clipboard. On completion the
/// tag gets a transient `copied` marker and the identifier lands in
/// the search input, focused but not submitted.
pub fn copy_id(id: String, tag: Element, search_input: NodeRef<Input>) {
    spawn_local(async move {
        let window = match web_sys::window() {
            Some(window) => window,
            None => return,
        };
        let clipboard = window.navigator().clipboard();
        if JsFuture::from(clipboard.write_text(&id)).await.is_err() {
            gloo::console::error!("clipboard write failed");
            return;
        }

        let _ = tag.class_list().add_1("copied");
        let marked = tag.clone();
        Timeout::new(COPIED_MARKER_MS, move || {
            let _ = marked.class_list().remove_1("copied");
        })
        .forget();

        if let Some(input) = search_input.get() {
            input.set_value(&id);
            let _ = input.focus();
        }
    });
}
