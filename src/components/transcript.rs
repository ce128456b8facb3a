//! Conversation transcript view.
//!
//! SYSTEM CONTEXT
//! ==============
//! Renders `TranscriptState::messages()` into the `#conversation` container.
//! The whole list is rebuilt whenever the merged transcript changes; the
//! state only notifies on real changes, so an unchanged poll leaves the DOM
//! alone. Scroll position is sampled right before each rebuild and the
//! follow-up (stick to bottom or reveal the affordance) runs on the next
//! animation frame, once the new nodes are laid out.

use leptos::prelude::*;

use crate::components::scroll_button::ScrollButton;
use crate::state::composer::ComposerState;
#[cfg(feature = "csr")]
use crate::state::scroll::ScrollState;
use crate::state::transcript::{
    ASSISTANT_LABEL, EMPTY_PLACEHOLDER, Message, Role, SYSTEM_LABEL, TranscriptState,
};
use crate::util::markdown::render_markdown_html;

#[component]
pub fn Transcript() -> impl IntoView {
    let transcript = expect_context::<RwSignal<TranscriptState>>();
    #[cfg(feature = "csr")]
    let scroll = expect_context::<RwSignal<ScrollState>>();
    let composer = expect_context::<RwSignal<ComposerState>>();

    let container_ref = NodeRef::<leptos::html::Div>::new();

    let on_scroll = move |_| {
        #[cfg(feature = "csr")]
        {
            let at_bottom = crate::util::dom::is_at_bottom(container_ref);
            let anchor = crate::util::dom::affordance_anchor(container_ref);
            scroll.update(|s| {
                s.on_scroll(at_bottom);
                if let Some(anchor) = anchor {
                    s.set_anchor(anchor);
                }
            });
        }
    };

    let render = move || {
        let state = transcript.get();

        #[cfg(feature = "csr")]
        {
            let was_at_bottom = crate::util::dom::is_at_bottom(container_ref);
            request_animation_frame(move || {
                let command = scroll.try_update(|s| s.after_render(was_at_bottom));
                if command == Some(crate::state::scroll::ScrollCommand::ScrollToBottom) {
                    crate::util::dom::scroll_to_bottom(container_ref);
                }
                if let Some(anchor) = crate::util::dom::affordance_anchor(container_ref) {
                    scroll.maybe_update(|s| s.set_anchor(anchor));
                }
            });
        }

        render_messages(&state)
    };

    view! {
        <div
            id="conversation"
            class="conversation"
            node_ref=container_ref
            style:height=move || composer.with(ComposerState::conversation_height_css)
            on:scroll=on_scroll
        >
            {render}
        </div>
        <ScrollButton container=container_ref/>
    }
}

fn render_messages(state: &TranscriptState) -> AnyView {
    let messages = state.messages();
    if messages.is_empty() {
        return view! { <p class="conversation__empty">{EMPTY_PLACEHOLDER}</p> }.into_any();
    }

    let user_label = state.user_label();
    messages
        .iter()
        .map(|msg| message_view(msg, user_label))
        .collect::<Vec<_>>()
        .into_any()
}

fn message_view(msg: &Message, user_label: &str) -> AnyView {
    let name = match msg.role {
        Role::User => user_label.to_owned(),
        Role::Assistant => ASSISTANT_LABEL.to_owned(),
        Role::System => SYSTEM_LABEL.to_owned(),
    };
    let content_class = msg.role.content_class();
    let body = if msg.role == Role::Assistant {
        let rendered = render_markdown_html(&msg.text);
        view! { <div class=content_class inner_html=rendered></div> }.into_any()
    } else {
        let text = msg.text.clone();
        view! { <div class=content_class>{text}</div> }.into_any()
    };
    let time = msg.time.clone();

    view! {
        <div class=msg.role.item_class()>
            <div class="message-name">{name}</div>
            {body}
            <div class="time">{time}</div>
        </div>
    }
    .into_any()
}
