//! Browser DOM reads and writes for the transcript container.
//!
//! Only compiled for the browser. Every helper tolerates a missing window
//! or an unmounted node and degrades to a no-op.

use leptos::html::Div;
use leptos::prelude::{GetUntracked, NodeRef};

use crate::state::scroll::{Anchor, ContainerRect, ScrollMetrics, anchor_for};

/// Read the container's scroll geometry.
pub fn scroll_metrics(container: NodeRef<Div>) -> Option<ScrollMetrics> {
    let el = container.get_untracked()?;
    Some(ScrollMetrics {
        scroll_height: f64::from(el.scroll_height()),
        client_height: f64::from(el.client_height()),
        scroll_top: f64::from(el.scroll_top()),
    })
}

/// Whether the container is scrolled to the bottom. An unmounted container
/// counts as at bottom so the first render lands there.
pub fn is_at_bottom(container: NodeRef<Div>) -> bool {
    scroll_metrics(container).is_none_or(|m| m.is_at_bottom())
}

pub fn scroll_to_bottom(container: NodeRef<Div>) {
    if let Some(el) = container.get_untracked() {
        el.set_scroll_top(el.scroll_height());
    }
}

/// Compute where the scroll affordance should float for the current layout.
pub fn affordance_anchor(container: NodeRef<Div>) -> Option<Anchor> {
    let el = container.get_untracked()?;
    let viewport_height = web_sys::window()?.inner_height().ok()?.as_f64()?;
    let rect = el.get_bounding_client_rect();
    Some(anchor_for(
        ContainerRect { left: rect.left(), width: rect.width(), bottom: rect.bottom() },
        viewport_height,
    ))
}

/// Show a blocking alert.
pub fn alert(message: &str) {
    if let Some(window) = web_sys::window() {
        if let Err(e) = window.alert_with_message(message) {
            leptos::logging::warn!("alert failed: {e:?}");
        }
    }
}
