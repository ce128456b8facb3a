//! Typed message composer.
//!
//! Enter sends, Shift+Enter inserts a newline. The textarea grows with its
//! content up to a fixed maximum and the conversation pane shrinks to match.

use leptos::prelude::*;

use crate::net::api::Action;
use crate::state::activity::ActivityState;
use crate::state::composer::ComposerState;
use crate::util::actions::{ActionTargets, dispatch};

#[component]
pub fn MessageInput() -> impl IntoView {
    let activity = expect_context::<RwSignal<ActivityState>>();
    let composer = expect_context::<RwSignal<ComposerState>>();
    let targets = ActionTargets::from_context();

    let input_ref = NodeRef::<leptos::html::Textarea>::new();
    let ended = move || activity.with(|a| a.session_ended);

    let send = move || {
        if activity.with_untracked(|a| a.session_ended) {
            return;
        }
        if let Some(text) = composer.with_untracked(ComposerState::outgoing) {
            dispatch(Action::SendMessage(text), targets.clone());
        }
    };
    let send_on_enter = send.clone();

    let on_input = move |ev| {
        let value = event_target_value(&ev);
        composer.update(|c| c.draft = value);
        #[cfg(feature = "csr")]
        autosize(input_ref, composer);
    };

    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Enter" && !ev.shift_key() {
            ev.prevent_default();
            send_on_enter();
        }
    };

    view! {
        <div class="message-input">
            <textarea
                node_ref=input_ref
                id="message_text"
                class="message-textarea"
                placeholder="Type a message..."
                rows="1"
                disabled=ended
                style:height=move || composer.with(|c| format!("{}px", c.input_height_px))
                prop:value=move || composer.with(|c| c.draft.clone())
                on:input=on_input
                on:keydown=on_keydown
            ></textarea>
            <button class="icon-button btn-send" title="Send" disabled=ended on:click=move |_| send()>
                <i class="fa-solid fa-paper-plane"></i>
            </button>
        </div>
    }
}

/// Collapse the textarea, measure its content, and apply the clamped height.
#[cfg(feature = "csr")]
fn autosize(input_ref: NodeRef<leptos::html::Textarea>, composer: RwSignal<ComposerState>) {
    let Some(el) = input_ref.get_untracked() else {
        return;
    };
    // `ElementExt::style` from the leptos prelude shadows the web-sys getter.
    let style = web_sys::HtmlElement::style(&el);
    if let Err(e) = style.set_property("height", "auto") {
        leptos::logging::warn!("textarea resize failed: {e:?}");
        return;
    }
    let scroll_height = f64::from(el.scroll_height());
    composer.maybe_update(|c| c.set_input_height(scroll_height));
    let height = composer.with_untracked(|c| c.input_height_px);
    if let Err(e) = style.set_property("height", &format!("{height}px")) {
        leptos::logging::warn!("textarea resize failed: {e:?}");
    }
}
