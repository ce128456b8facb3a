//! Snapshot poller for `GET /update`.
//!
//! `PollController` owns the polling lifecycle. Each `start()` opens a new
//! generation; a loop from an older generation notices on its next tick and
//! exits, so restarting never leaves two loops running. `stop()` is what the
//! page calls when the chat session ends.
//!
//! A failed poll is logged and skipped. There is no backoff; the next tick
//! simply tries again.

#[cfg(test)]
#[path = "poller_test.rs"]
mod poller_test;

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};

#[cfg(feature = "csr")]
use crate::state::activity::ActivityState;
#[cfg(feature = "csr")]
use crate::state::transcript::TranscriptState;

#[derive(Debug, Default)]
struct PollInner {
    running: AtomicBool,
    generation: AtomicU64,
}

/// Cloneable handle to the poll loop, shared through context.
#[derive(Clone, Debug, Default)]
pub struct PollController {
    inner: Arc<PollInner>,
}

impl PollController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_running(&self) -> bool {
        self.inner.running.load(Ordering::Relaxed)
    }

    pub fn stop(&self) {
        if self.inner.running.swap(false, Ordering::Relaxed) {
            leptos::logging::log!("update polling stopped");
        }
    }

    /// Open a new generation and mark polling as running.
    fn begin(&self) -> u64 {
        let generation = self.inner.generation.fetch_add(1, Ordering::Relaxed) + 1;
        self.inner.running.store(true, Ordering::Relaxed);
        generation
    }

    fn is_current(&self, generation: u64) -> bool {
        self.is_running() && self.inner.generation.load(Ordering::Relaxed) == generation
    }

    /// Start polling every `interval_ms`, replacing any earlier loop.
    #[cfg(feature = "csr")]
    pub fn start(
        &self,
        interval_ms: u32,
        transcript: leptos::prelude::RwSignal<TranscriptState>,
        activity: leptos::prelude::RwSignal<ActivityState>,
    ) {
        let generation = self.begin();
        let controller = self.clone();
        leptos::task::spawn_local(async move {
            controller.run(generation, interval_ms, transcript, activity).await;
        });
    }

    #[cfg(feature = "csr")]
    async fn run(
        self,
        generation: u64,
        interval_ms: u32,
        transcript: leptos::prelude::RwSignal<TranscriptState>,
        activity: leptos::prelude::RwSignal<ActivityState>,
    ) {
        use leptos::prelude::Update;

        while self.is_current(generation) {
            match crate::net::api::fetch_update().await {
                Ok(update) => {
                    transcript.maybe_update(|t| t.apply_update(&update));
                    activity.maybe_update(|a| a.apply_flags(update.is_active, update.timer_active));
                }
                Err(e) => {
                    leptos::logging::warn!("update poll failed: {e}");
                }
            }
            gloo_timers::future::sleep(std::time::Duration::from_millis(u64::from(interval_ms))).await;
        }
    }
}
