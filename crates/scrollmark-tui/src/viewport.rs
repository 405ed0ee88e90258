//! Terminal-backed viewport source.
//!
//! [`TerminalViewport`] adapts a scrollable text buffer rendered in a
//! terminal to the `ViewportSource` capability: content size, inner view
//! size, and scroll offsets, all in cells. Handles are cheap clones sharing
//! one set of metrics, so the pager mutates through one handle while its
//! progress tracker reads through another. Single-threaded by design.

use std::cell::RefCell;
use std::collections::HashSet;
use std::rc::Rc;

use tracing::debug;

use scrollmark_core::{AxisPair, SubscriptionId, ViewportSource};

#[derive(Debug, Default)]
struct Metrics {
    scroll_x: u16,
    scroll_y: u16,
    content_width: u16,
    content_height: u16,
    view_width: u16,
    view_height: u16,
    subscribers: HashSet<u64>,
    next_id: u64,
}

/// Shared-handle viewport over a terminal text view.
#[derive(Debug, Clone, Default)]
pub struct TerminalViewport {
    inner: Rc<RefCell<Metrics>>,
}

impl TerminalViewport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the total content size in cells.
    pub fn set_content_size(&self, width: u16, height: u16) {
        let mut metrics = self.inner.borrow_mut();
        metrics.content_width = width;
        metrics.content_height = height;
    }

    /// Set the visible (inner) area size in cells.
    pub fn set_view_size(&self, width: u16, height: u16) {
        let mut metrics = self.inner.borrow_mut();
        metrics.view_width = width;
        metrics.view_height = height;
    }

    pub fn set_scroll(&self, x: u16, y: u16) {
        let mut metrics = self.inner.borrow_mut();
        metrics.scroll_x = x;
        metrics.scroll_y = y;
    }

    pub fn scroll(&self) -> (u16, u16) {
        let metrics = self.inner.borrow();
        (metrics.scroll_x, metrics.scroll_y)
    }

    pub fn view_size(&self) -> (u16, u16) {
        let metrics = self.inner.borrow();
        (metrics.view_width, metrics.view_height)
    }

    /// Largest reachable vertical offset (0 when the content fits).
    pub fn max_scroll_y(&self) -> u16 {
        let metrics = self.inner.borrow();
        metrics.content_height.saturating_sub(metrics.view_height)
    }

    /// Largest reachable horizontal offset (0 when no line overflows).
    pub fn max_scroll_x(&self) -> u16 {
        let metrics = self.inner.borrow();
        metrics.content_width.saturating_sub(metrics.view_width)
    }

    /// Number of live subscriptions on this viewport.
    pub fn subscriber_count(&self) -> usize {
        self.inner.borrow().subscribers.len()
    }
}

impl ViewportSource for TerminalViewport {
    fn scroll_offset(&self) -> AxisPair {
        let metrics = self.inner.borrow();
        AxisPair::new(f64::from(metrics.scroll_x), f64::from(metrics.scroll_y))
    }

    fn scrollable_extent(&self) -> AxisPair {
        // Computed as a signed difference: content that fits the view yields
        // a non-positive extent, which the tracker reads as zero progress.
        let metrics = self.inner.borrow();
        AxisPair::new(
            f64::from(metrics.content_width) - f64::from(metrics.view_width),
            f64::from(metrics.content_height) - f64::from(metrics.view_height),
        )
    }

    fn subscribe(&mut self) -> Option<SubscriptionId> {
        let mut metrics = self.inner.borrow_mut();
        metrics.next_id += 1;
        let id = metrics.next_id;
        metrics.subscribers.insert(id);
        debug!(id, "viewport subscription added");
        Some(SubscriptionId::new(id))
    }

    fn unsubscribe(&mut self, id: SubscriptionId) {
        let mut metrics = self.inner.borrow_mut();
        if metrics.subscribers.remove(&id.raw()) {
            debug!(id = id.raw(), "viewport subscription removed");
        }
    }
}
