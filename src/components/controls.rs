//! Session controls: listening and self-prompt toggles, clear, end chat and
//! the user-id form.
//!
//! Every control but "end chat" disables once the session has ended.

use leptos::prelude::*;

use crate::net::api::Action;
use crate::state::activity::{ActivityState, Indicator};
use crate::state::composer::ComposerState;
use crate::util::actions::{ActionTargets, dispatch, set_user_id_action};

#[component]
pub fn Controls() -> impl IntoView {
    let activity = expect_context::<RwSignal<ActivityState>>();
    let composer = expect_context::<RwSignal<ComposerState>>();
    let targets = ActionTargets::from_context();

    let ended = move || activity.with(|a| a.session_ended);

    let toggles = Indicator::ALL
        .into_iter()
        .map(|indicator| {
            let targets = targets.clone();
            let active = move || activity.with(|a| a.is_active(indicator));
            let on_click = move |_| {
                let action = indicator.toggle_action(active());
                dispatch(action, targets.clone());
            };
            view! {
                <button
                    class=move || indicator.button_class(active())
                    title=move || indicator.button_title(active())
                    disabled=ended
                    on:click=on_click
                >
                    <i class=move || indicator.icon_class(active())></i>
                </button>
            }
        })
        .collect_view();

    let on_clear = {
        let targets = targets.clone();
        move |_| dispatch(Action::Clear, targets.clone())
    };
    let on_end = {
        let targets = targets.clone();
        move |_| dispatch(Action::EndChat, targets.clone())
    };
    let on_set_user = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let action = composer.with(|c| set_user_id_action(&c.user_id_draft));
        dispatch(action, targets.clone());
    };

    view! {
        <div class="controls">
            {toggles}
            <button class="icon-button btn-clear" title="Clear conversation" disabled=ended on:click=on_clear>
                <i class="fa-solid fa-trash-can"></i>
            </button>
            <button class="icon-button btn-end" title="End chat" on:click=on_end>
                <i class="fa-solid fa-power-off"></i>
            </button>
            <form id="user-id-form" class="user-id-form" on:submit=on_set_user>
                <input
                    type="text"
                    id="user_id"
                    class="user-id-input"
                    placeholder="User ID"
                    disabled=ended
                    prop:value=move || composer.with(|c| c.user_id_draft.clone())
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        composer.update(|c| c.user_id_draft = value);
                    }
                />
                <button type="submit" class="btn-set-user" disabled=ended>
                    "Set"
                </button>
            </form>
        </div>
    }
}
