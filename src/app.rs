//! Root application component and context providers.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};

use crate::components::{
    controls::Controls, message_input::MessageInput, status_bar::StatusBar, transcript::Transcript,
};
use crate::config::SyncConfig;
use crate::net::poller::PollController;
use crate::state::{
    activity::ActivityState, composer::ComposerState, scroll::ScrollState, transcript::TranscriptState,
};

/// Root application component.
///
/// Provides shared state contexts, then starts the update poller and the
/// response stream consumer.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let config = SyncConfig::from_location();
    let transcript = RwSignal::new(TranscriptState::default());
    let scroll = RwSignal::new(ScrollState::default());
    let activity = RwSignal::new(ActivityState::default());
    let composer = RwSignal::new(ComposerState::default());
    let poller = PollController::new();

    provide_context(config.clone());
    provide_context(transcript);
    provide_context(scroll);
    provide_context(activity);
    provide_context(composer);
    provide_context(poller.clone());

    #[cfg(feature = "csr")]
    {
        poller.start(config.poll_interval_ms, transcript, activity);
        crate::net::stream::spawn_stream_consumer(config, transcript);
        on_cleanup(move || poller.stop());
    }

    view! {
        <Title text="Bunny Transcript"/>

        <main class="container">
            <header class="header">
                <h1>"Live Transcript"</h1>
                <StatusBar/>
            </header>
            <Controls/>
            <Transcript/>
            <MessageInput/>
        </main>
    }
}
