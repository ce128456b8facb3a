//! Floating scroll-to-bottom affordance.
//!
//! Shown while the transcript is scrolled away from its newest message.
//! Position follows the transcript container and is refreshed on scroll,
//! render and window resize.

use leptos::prelude::*;

use crate::state::scroll::ScrollState;

#[cfg_attr(not(feature = "csr"), allow(unused_variables))]
#[component]
pub fn ScrollButton(container: NodeRef<leptos::html::Div>) -> impl IntoView {
    let scroll = expect_context::<RwSignal<ScrollState>>();

    #[cfg(feature = "csr")]
    {
        let handle = window_event_listener(leptos::ev::resize, move |_| {
            if let Some(anchor) = crate::util::dom::affordance_anchor(container) {
                scroll.maybe_update(|s| s.set_anchor(anchor));
            }
        });
        on_cleanup(move || handle.remove());
    }

    let on_click = move |_| {
        let command = scroll.try_update(ScrollState::on_affordance_click);
        #[cfg(feature = "csr")]
        if command == Some(crate::state::scroll::ScrollCommand::ScrollToBottom) {
            crate::util::dom::scroll_to_bottom(container);
        }
    };

    let display = move || if scroll.with(ScrollState::is_visible) { "flex" } else { "none" };
    let left = move || scroll.with(|s| s.anchor.map(|a| format!("{}px", a.left)));
    let bottom = move || scroll.with(|s| s.anchor.map(|a| format!("{}px", a.bottom)));

    view! {
        <button
            id="scroll-to-bottom"
            class="scroll-button"
            title="Scroll to latest"
            style:display=display
            style:left=left
            style:bottom=bottom
            on:click=on_click
        >
            <i class="fa-solid fa-arrow-down"></i>
        </button>
    }
}
