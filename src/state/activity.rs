//! Mic / self-prompt timer activity and session lifecycle.
//!
//! Each indicator is addressed by name (`Indicator::Mic`, `Indicator::Timer`)
//! and derives its button and status presentation from a single flag.

#[cfg(test)]
#[path = "activity_test.rs"]
mod activity_test;

use crate::net::api::Action;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Indicator {
    Mic,
    Timer,
}

impl Indicator {
    pub const ALL: [Indicator; 2] = [Indicator::Mic, Indicator::Timer];

    pub fn label(self) -> &'static str {
        match self {
            Indicator::Mic => "Microphone",
            Indicator::Timer => "Self-prompt",
        }
    }

    pub fn status_class(active: bool) -> &'static str {
        if active { "status-indicator status-active" } else { "status-indicator status-inactive" }
    }

    pub fn status_text(active: bool) -> &'static str {
        if active { "Active" } else { "Inactive" }
    }

    pub fn button_title(self, active: bool) -> &'static str {
        match (self, active) {
            (Indicator::Mic, true) => "Stop listening",
            (Indicator::Mic, false) => "Start listening",
            (Indicator::Timer, true) => "Stop self-prompting",
            (Indicator::Timer, false) => "Start self-prompting",
        }
    }

    pub fn button_class(self, active: bool) -> &'static str {
        match (self, active) {
            (Indicator::Mic, true) => "icon-button btn-mic-on",
            (Indicator::Mic, false) => "icon-button btn-mic-off",
            (Indicator::Timer, true) => "icon-button btn-timer-on",
            (Indicator::Timer, false) => "icon-button btn-timer-off",
        }
    }

    pub fn icon_class(self, active: bool) -> &'static str {
        match (self, active) {
            (Indicator::Mic, true) => "fa-solid fa-microphone",
            (Indicator::Mic, false) => "fa-solid fa-microphone-slash",
            (Indicator::Timer, true) => "fa-regular fa-hourglass-half",
            (Indicator::Timer, false) => "fa-regular fa-hourglass",
        }
    }

    /// Action that flips this indicator from its current state.
    pub fn toggle_action(self, active: bool) -> Action {
        match (self, active) {
            (Indicator::Mic, true) => Action::StopMic,
            (Indicator::Mic, false) => Action::StartMic,
            (Indicator::Timer, true) => Action::StopTimer,
            (Indicator::Timer, false) => Action::StartTimer,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ActivityState {
    pub mic_active: bool,
    pub timer_active: bool,
    /// Set once the chat is ended; every control but "end chat" disables.
    pub session_ended: bool,
}

impl ActivityState {
    pub fn is_active(&self, indicator: Indicator) -> bool {
        match indicator {
            Indicator::Mic => self.mic_active,
            Indicator::Timer => self.timer_active,
        }
    }

    pub fn set(&mut self, indicator: Indicator, active: bool) -> bool {
        let slot = match indicator {
            Indicator::Mic => &mut self.mic_active,
            Indicator::Timer => &mut self.timer_active,
        };
        if *slot == active {
            return false;
        }
        *slot = active;
        true
    }

    /// Apply both flags from a poll response.
    pub fn apply_flags(&mut self, mic_active: bool, timer_active: bool) -> bool {
        let mic = self.set(Indicator::Mic, mic_active);
        let timer = self.set(Indicator::Timer, timer_active);
        mic || timer
    }

    pub fn end_session(&mut self) -> bool {
        if self.session_ended {
            return false;
        }
        self.session_ended = true;
        true
    }
}
