//! Microphone and self-prompt status indicators.

use leptos::prelude::*;

use crate::state::activity::{ActivityState, Indicator};

#[component]
pub fn StatusBar() -> impl IntoView {
    let activity = expect_context::<RwSignal<ActivityState>>();

    view! {
        <div class="status-bar">
            {Indicator::ALL
                .into_iter()
                .map(|indicator| {
                    let active = move || activity.with(|a| a.is_active(indicator));
                    view! {
                        <div class="status-item">
                            <span class="status-label">{indicator.label()}": "</span>
                            <span class=move || Indicator::status_class(active())>
                                {move || Indicator::status_text(active())}
                            </span>
                        </div>
                    }
                })
                .collect_view()}
        </div>
    }
}
