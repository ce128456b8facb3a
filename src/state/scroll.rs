//! Scroll-to-bottom affordance state.
//!
//! DESIGN
//! ======
//! The affordance has two states, hidden and visible. Transitions:
//! - render while at bottom -> hidden, and the view follows the new bottom
//! - render while scrolled away -> visible, scroll position untouched
//! - user reaches the bottom (scrolling or clicking the affordance) -> hidden
//! - user scrolls away -> visible
//!
//! DOM reads and writes live in `util::dom`; this module only decides.

#[cfg(test)]
#[path = "scroll_test.rs"]
mod scroll_test;

use crate::config::{AFFORDANCE_OFFSET_PX, BOTTOM_TOLERANCE_PX};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Affordance {
    #[default]
    Hidden,
    Visible,
}

/// What the view should do with the container's scroll position.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScrollCommand {
    ScrollToBottom,
    Keep,
}

/// Scroll geometry of the transcript container.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollMetrics {
    pub scroll_height: f64,
    pub client_height: f64,
    pub scroll_top: f64,
}

impl ScrollMetrics {
    pub fn is_at_bottom(&self) -> bool {
        (self.scroll_height - self.client_height - self.scroll_top).abs() <= BOTTOM_TOLERANCE_PX
    }
}

/// Bounding box of the transcript container in viewport coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ContainerRect {
    pub left: f64,
    pub width: f64,
    pub bottom: f64,
}

/// Fixed-position placement of the affordance, in px.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Anchor {
    pub left: f64,
    pub bottom: f64,
}

/// Center horizontally on the container and float just above its bottom edge.
pub fn anchor_for(rect: ContainerRect, viewport_height: f64) -> Anchor {
    Anchor {
        left: rect.left + rect.width / 2.0,
        bottom: viewport_height - rect.bottom + AFFORDANCE_OFFSET_PX,
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ScrollState {
    pub affordance: Affordance,
    pub anchor: Option<Anchor>,
}

impl ScrollState {
    pub fn is_visible(&self) -> bool {
        self.affordance == Affordance::Visible
    }

    /// Decide what follows a transcript rebuild, given whether the viewport
    /// sat at the bottom before it.
    pub fn after_render(&mut self, was_at_bottom: bool) -> ScrollCommand {
        if was_at_bottom {
            self.affordance = Affordance::Hidden;
            ScrollCommand::ScrollToBottom
        } else {
            self.affordance = Affordance::Visible;
            ScrollCommand::Keep
        }
    }

    pub fn on_scroll(&mut self, at_bottom: bool) {
        self.affordance = if at_bottom { Affordance::Hidden } else { Affordance::Visible };
    }

    pub fn on_affordance_click(&mut self) -> ScrollCommand {
        self.affordance = Affordance::Hidden;
        ScrollCommand::ScrollToBottom
    }

    pub fn set_anchor(&mut self, anchor: Anchor) -> bool {
        if self.anchor == Some(anchor) {
            return false;
        }
        self.anchor = Some(anchor);
        true
    }
}
