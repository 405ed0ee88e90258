//! Scroll-progress tracking.
//!
//! A [`ScrollProgressTracker`] converts raw scroll/resize notifications from
//! a [`ViewportSource`] into normalized progress along both axes and hands
//! the values to a caller-supplied callback, synchronously, on every
//! notification. It subscribes on construction and unsubscribes on
//! `destroy` (or drop), so a host view can treat it as a scoped resource:
//! create on mount, release on unmount across all exit paths.

use tracing::{debug, trace};

use crate::viewport::{SubscriptionId, ViewportSignal, ViewportSource};

/// Normalized progress along both axes, each in `[0.0, 1.0]`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Progress {
    pub x: f64,
    pub y: f64,
}

/// Tracker lifecycle. `Disposed` is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TrackerState {
    Active,
    Disposed,
}

/// Callback invoked with `(x, y)` progress on each recomputation.
pub type ProgressFn = Box<dyn FnMut(f64, f64)>;

/// Observer reporting normalized scroll progress to a single callback.
///
/// The tracker owns its viewport subscription exclusively. It performs no
/// throttling of its own; notifications may arrive at per-cell frequency
/// and the callback must be cheap. Any throttling is the host's choice.
pub struct ScrollProgressTracker<V: ViewportSource> {
    viewport: V,
    callback: ProgressFn,
    subscription: Option<SubscriptionId>,
    state: TrackerState,
}

impl<V: ViewportSource> ScrollProgressTracker<V> {
    /// Create a tracker and immediately subscribe to the viewport's
    /// notification stream.
    ///
    /// Construction cannot fail: when the viewport refuses the subscription
    /// (no interactive environment), the tracker is inert and never invokes
    /// the callback, and [`destroy`](Self::destroy) remains safe to call.
    pub fn new(mut viewport: V, callback: impl FnMut(f64, f64) + 'static) -> Self {
        let subscription = viewport.subscribe();
        match subscription {
            Some(id) => debug!(id = id.raw(), "progress tracker subscribed"),
            None => debug!("no viewport available, progress tracker is inert"),
        }
        Self {
            viewport,
            callback: Box::new(callback),
            subscription,
            state: TrackerState::Active,
        }
    }

    /// Whether the tracker holds a live viewport subscription.
    pub fn is_attached(&self) -> bool {
        self.subscription.is_some()
    }

    /// Whether `destroy` has run.
    pub fn is_disposed(&self) -> bool {
        self.state == TrackerState::Disposed
    }

    /// Deliver one scroll or resize notification.
    ///
    /// Recomputes progress from the viewport and invokes the callback
    /// synchronously. Ignored once disposed or when the tracker never
    /// attached. Callback panics are not caught; they propagate to the
    /// host's notification-handling context.
    pub fn notify(&mut self, signal: ViewportSignal) {
        if self.state == TrackerState::Disposed || self.subscription.is_none() {
            return;
        }
        let progress = self.sample();
        trace!(?signal, x = progress.x, y = progress.y, "progress recomputed");
        (self.callback)(progress.x, progress.y);
    }

    /// Read the viewport and compute clamped progress without invoking the
    /// callback. Useful for an initial paint before any notification.
    pub fn sample(&self) -> Progress {
        let offset = self.viewport.scroll_offset();
        let extent = self.viewport.scrollable_extent();
        Progress {
            x: axis_progress(offset.x, extent.x),
            y: axis_progress(offset.y, extent.y),
        }
    }

    /// Unsubscribe from the viewport.
    ///
    /// Idempotent: repeated calls have no further effect. After this
    /// returns, no callback invocation can occur regardless of subsequent
    /// notifications. Also runs on drop.
    pub fn destroy(&mut self) {
        if let Some(id) = self.subscription.take() {
            self.viewport.unsubscribe(id);
            debug!(id = id.raw(), "progress tracker unsubscribed");
        }
        self.state = TrackerState::Disposed;
    }
}

impl<V: ViewportSource> Drop for ScrollProgressTracker<V> {
    fn drop(&mut self) {
        self.destroy();
    }
}

/// Progress along one axis: `offset / extent` clamped to `[0, 1]`.
///
/// A non-positive extent reads as 0 so content that fits its viewport never
/// divides by zero. Clamping covers sub-cell rounding and momentum
/// overshoot, where the host briefly reports an offset past the extent.
pub fn axis_progress(offset: f64, extent: f64) -> f64 {
    if extent <= 0.0 {
        return 0.0;
    }
    (offset / extent).clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;

    use super::*;
    use crate::viewport::{AxisPair, DetachedViewport};

    /// Scripted viewport whose metrics and subscription bookkeeping are
    /// shared with the test through `Rc` handles.
    #[derive(Clone, Default)]
    struct FakeViewport {
        offset: Rc<Cell<(f64, f64)>>,
        extent: Rc<Cell<(f64, f64)>>,
        live: Rc<Cell<u32>>,
        unsubscribe_calls: Rc<Cell<u32>>,
        next_id: Rc<Cell<u64>>,
    }

    impl FakeViewport {
        fn with_extent(x: f64, y: f64) -> Self {
            let viewport = Self::default();
            viewport.extent.set((x, y));
            viewport
        }

        fn set_offset(&self, x: f64, y: f64) {
            self.offset.set((x, y));
        }
    }

    impl ViewportSource for FakeViewport {
        fn scroll_offset(&self) -> AxisPair {
            let (x, y) = self.offset.get();
            AxisPair::new(x, y)
        }

        fn scrollable_extent(&self) -> AxisPair {
            let (x, y) = self.extent.get();
            AxisPair::new(x, y)
        }

        fn subscribe(&mut self) -> Option<SubscriptionId> {
            self.live.set(self.live.get() + 1);
            self.next_id.set(self.next_id.get() + 1);
            Some(SubscriptionId::new(self.next_id.get()))
        }

        fn unsubscribe(&mut self, _id: SubscriptionId) {
            self.unsubscribe_calls.set(self.unsubscribe_calls.get() + 1);
            self.live.set(self.live.get().saturating_sub(1));
        }
    }

    fn recording_tracker(
        viewport: FakeViewport,
    ) -> (ScrollProgressTracker<FakeViewport>, Rc<RefCell<Vec<(f64, f64)>>>) {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        let tracker =
            ScrollProgressTracker::new(viewport, move |x, y| sink.borrow_mut().push((x, y)));
        (tracker, seen)
    }

    #[test]
    fn test_axis_progress_ratio() {
        assert_eq!(axis_progress(0.0, 1000.0), 0.0);
        assert_eq!(axis_progress(500.0, 1000.0), 0.5);
        assert_eq!(axis_progress(1000.0, 1000.0), 1.0);
    }

    #[test]
    fn test_axis_progress_clamps_overshoot() {
        assert_eq!(axis_progress(1200.0, 1000.0), 1.0);
        assert_eq!(axis_progress(-3.0, 1000.0), 0.0);
    }

    #[test]
    fn test_axis_progress_zero_extent() {
        // Content fits the viewport: exactly 0, never NaN or negative
        for extent in [0.0, -40.0] {
            let progress = axis_progress(250.0, extent);
            assert_eq!(progress, 0.0);
            assert!(!progress.is_nan());
        }
    }

    #[test]
    fn test_notification_invokes_callback() {
        let viewport = FakeViewport::with_extent(0.0, 1000.0);
        viewport.set_offset(0.0, 250.0);
        let (mut tracker, seen) = recording_tracker(viewport);

        tracker.notify(ViewportSignal::Scroll);
        assert_eq!(seen.borrow().as_slice(), &[(0.0, 0.25)]);

        tracker.notify(ViewportSignal::Resize);
        assert_eq!(seen.borrow().len(), 2);
    }

    #[test]
    fn test_monotonic_offsets_report_monotonic_progress() {
        let viewport = FakeViewport::with_extent(0.0, 800.0);
        let handle = viewport.clone();
        let (mut tracker, seen) = recording_tracker(viewport);

        for offset in [0.0, 100.0, 350.0, 350.0, 799.0, 800.0, 900.0] {
            handle.set_offset(0.0, offset);
            tracker.notify(ViewportSignal::Scroll);
        }

        let reported = seen.borrow();
        assert!(reported.windows(2).all(|pair| pair[0].1 <= pair[1].1));
        assert_eq!(reported.last(), Some(&(0.0, 1.0)));
    }

    #[test]
    fn test_destroy_is_idempotent() {
        let viewport = FakeViewport::with_extent(0.0, 100.0);
        let handle = viewport.clone();
        let (mut tracker, _seen) = recording_tracker(viewport);

        tracker.destroy();
        tracker.destroy();
        assert!(tracker.is_disposed());
        assert_eq!(handle.unsubscribe_calls.get(), 1);
    }

    #[test]
    fn test_drop_releases_subscription() {
        let viewport = FakeViewport::with_extent(0.0, 100.0);
        let handle = viewport.clone();
        {
            let (_tracker, _seen) = recording_tracker(viewport);
            assert_eq!(handle.live.get(), 1);
        }
        assert_eq!(handle.live.get(), 0);
        assert_eq!(handle.unsubscribe_calls.get(), 1);
    }

    #[test]
    fn test_destroy_then_drop_unsubscribes_once() {
        let viewport = FakeViewport::with_extent(0.0, 100.0);
        let handle = viewport.clone();
        {
            let (mut tracker, _seen) = recording_tracker(viewport);
            tracker.destroy();
        }
        assert_eq!(handle.unsubscribe_calls.get(), 1);
    }

    #[test]
    fn test_repeated_mount_unmount_leaves_no_subscriptions() {
        let viewport = FakeViewport::with_extent(0.0, 100.0);
        let handle = viewport.clone();

        for _ in 0..100 {
            let (mut tracker, _seen) = recording_tracker(viewport.clone());
            tracker.notify(ViewportSignal::Scroll);
            tracker.destroy();
        }

        assert_eq!(handle.live.get(), 0);
        assert_eq!(handle.unsubscribe_calls.get(), 100);
    }

    #[test]
    fn test_detached_viewport_never_invokes_callback() {
        let calls = Rc::new(Cell::new(0u32));
        let sink = Rc::clone(&calls);
        let mut tracker =
            ScrollProgressTracker::new(DetachedViewport, move |_, _| sink.set(sink.get() + 1));

        assert!(!tracker.is_attached());
        tracker.notify(ViewportSignal::Scroll);
        tracker.notify(ViewportSignal::Resize);
        assert_eq!(calls.get(), 0);

        // Disposal of an inert tracker is still safe
        tracker.destroy();
        assert!(tracker.is_disposed());
    }

    #[test]
    fn test_reading_session_end_to_end() {
        // Content 2000 cells tall in a 1000-cell viewport: extent 1000
        let viewport = FakeViewport::with_extent(0.0, 1000.0);
        let handle = viewport.clone();
        let (mut tracker, seen) = recording_tracker(viewport);

        handle.set_offset(0.0, 0.0);
        tracker.notify(ViewportSignal::Scroll);
        handle.set_offset(0.0, 500.0);
        tracker.notify(ViewportSignal::Scroll);
        // Momentum overshoot past the end of the content
        handle.set_offset(0.0, 1200.0);
        tracker.notify(ViewportSignal::Scroll);

        tracker.destroy();
        handle.set_offset(0.0, 0.0);
        tracker.notify(ViewportSignal::Scroll);

        assert_eq!(seen.borrow().as_slice(), &[(0.0, 0.0), (0.0, 0.5), (0.0, 1.0)]);
    }

    #[test]
    fn test_sample_reads_both_axes() {
        let viewport = FakeViewport::with_extent(200.0, 1000.0);
        viewport.set_offset(50.0, 750.0);
        let (tracker, seen) = recording_tracker(viewport);

        let progress = tracker.sample();
        assert_eq!(progress, Progress { x: 0.25, y: 0.75 });
        // Sampling does not go through the callback
        assert!(seen.borrow().is_empty());
    }
}
