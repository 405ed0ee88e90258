use std::cell::Cell;
use std::rc::Rc;
use std::sync::Arc;

use scrollmark_core::{AppConfig, Progress, ScrollProgressTracker, ViewportSignal};

use crate::input::Action;
use crate::smooth::ScrollMotion;
use crate::viewport::TerminalViewport;

/// Mouse wheel notch in lines
const WHEEL_LINES: i32 = 3;
/// Horizontal cells moved per left/right step
const HORIZONTAL_STEP: u16 = 4;

/// The pager host view.
///
/// Owns the loaded text, the scroll state, and a progress tracker for the
/// span of its own lifetime: the tracker subscribes when the pager is
/// created and is disposed in [`close`](Self::close) or on drop, whichever
/// comes first.
pub struct Pager {
    /// Loaded lines, tabs expanded
    lines: Vec<String>,
    title: String,
    pub config: Arc<AppConfig>,
    viewport: TerminalViewport,
    tracker: ScrollProgressTracker<TerminalViewport>,
    /// Latest progress reported by the tracker, read by the render pass
    progress: Rc<Cell<Progress>>,
    motion: ScrollMotion,
    scroll_x: u16,
    /// Pending key for multi-key sequences (e.g., 'gg')
    pub pending_key: Option<char>,
    /// Whether the pager should quit
    pub should_quit: bool,
}

impl Pager {
    pub fn new(text: &str, title: impl Into<String>, config: Arc<AppConfig>) -> Self {
        let lines: Vec<String> = text.lines().map(|l| l.replace('\t', "    ")).collect();
        let content_width = lines
            .iter()
            .map(|l| l.chars().count())
            .max()
            .unwrap_or(0)
            .min(u16::MAX as usize) as u16;
        let content_height = lines.len().min(u16::MAX as usize) as u16;

        let viewport = TerminalViewport::new();
        viewport.set_content_size(content_width, content_height);

        let progress = Rc::new(Cell::new(Progress::default()));
        let sink = Rc::clone(&progress);
        let tracker =
            ScrollProgressTracker::new(viewport.clone(), move |x, y| sink.set(Progress { x, y }));

        let motion = ScrollMotion::new(config.scroll.clone());

        Self {
            lines,
            title: title.into(),
            config,
            viewport,
            tracker,
            progress,
            motion,
            scroll_x: 0,
            pending_key: None,
            should_quit: false,
        }
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    /// Latest progress delivered by the tracker
    pub fn progress(&self) -> Progress {
        self.progress.get()
    }

    /// Percent of the vertical extent read, for the status bar
    pub fn percent_read(&self) -> u16 {
        (self.progress().y * 100.0).round() as u16
    }

    pub fn scroll(&self) -> (u16, u16) {
        self.viewport.scroll()
    }

    pub fn total_lines(&self) -> usize {
        self.lines.len()
    }

    /// Whether the host loop should tick at animation rate
    pub fn needs_fast_tick(&self) -> bool {
        self.motion.is_moving()
    }

    /// Record the content area size chosen by the layout pass.
    ///
    /// Fires a resize notification when it changes, re-clamping offsets
    /// that the smaller extent can no longer reach.
    pub fn set_view_size(&mut self, width: u16, height: u16) {
        if self.viewport.view_size() == (width, height) {
            return;
        }
        self.viewport.set_view_size(width, height);
        self.scroll_x = self.scroll_x.min(self.viewport.max_scroll_x());
        let max_y = self.viewport.max_scroll_y();
        if self.motion.target() > max_y {
            self.motion.jump_to(self.motion.current(), max_y);
        }
        let (_, y) = self.viewport.scroll();
        self.viewport.set_scroll(self.scroll_x, y.min(max_y));
        self.tracker.notify(ViewportSignal::Resize);
    }

    /// Apply one input action to the scroll state
    pub fn apply(&mut self, action: Action) {
        if action != Action::PendingG {
            self.pending_key = None;
        }

        let max_y = self.viewport.max_scroll_y();
        let (_, view_height) = self.viewport.view_size();
        let half_page = i32::from((view_height / 2).max(1));

        match action {
            Action::Quit => self.should_quit = true,
            Action::ScrollDown => self.motion.scroll_by(self.motion.step_lines(), max_y),
            Action::ScrollUp => self.motion.scroll_by(-self.motion.step_lines(), max_y),
            Action::ScrollLeft => {
                self.scroll_x = self.scroll_x.saturating_sub(HORIZONTAL_STEP);
            }
            Action::ScrollRight => {
                self.scroll_x = self
                    .scroll_x
                    .saturating_add(HORIZONTAL_STEP)
                    .min(self.viewport.max_scroll_x());
            }
            Action::ScrollHalfPageDown => self.motion.scroll_by(half_page, max_y),
            Action::ScrollHalfPageUp => self.motion.scroll_by(-half_page, max_y),
            Action::ScrollPageDown => self.motion.scroll_by(i32::from(view_height), max_y),
            Action::ScrollPageUp => self.motion.scroll_by(-i32::from(view_height), max_y),
            Action::JumpToTop => self.motion.jump_to(0, max_y),
            Action::JumpToBottom => self.motion.jump_to(max_y, max_y),
            Action::PendingG => self.pending_key = Some('g'),
            Action::None => {}
        }

        self.sync_scroll();
    }

    /// Apply mouse wheel notches (positive = down)
    pub fn wheel(&mut self, notches: i32) {
        let max_y = self.viewport.max_scroll_y();
        self.motion.scroll_by(notches * WHEEL_LINES, max_y);
        self.sync_scroll();
    }

    /// Advance the scroll animation one frame
    pub fn tick(&mut self) {
        let max_y = self.viewport.max_scroll_y();
        self.motion.update(max_y);
        self.sync_scroll();
    }

    /// Push the animated offsets into the viewport and notify the tracker
    /// once per actual change, in order.
    fn sync_scroll(&mut self) {
        let y = self.motion.current();
        if self.viewport.scroll() != (self.scroll_x, y) {
            self.viewport.set_scroll(self.scroll_x, y);
            self.tracker.notify(ViewportSignal::Scroll);
        }
    }

    /// Dispose the progress tracker.
    ///
    /// Called on unmount; safe to call more than once, and drop covers any
    /// exit path that skips it.
    pub fn close(&mut self) {
        self.tracker.destroy();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use scrollmark_core::ScrollConfig;

    fn instant_config() -> Arc<AppConfig> {
        let mut config = AppConfig::default();
        config.scroll = ScrollConfig {
            smooth_enabled: false,
            ..Default::default()
        };
        Arc::new(config)
    }

    fn pager_with_lines(count: usize) -> Pager {
        let text = (0..count).map(|i| format!("line {i}")).collect::<Vec<_>>().join("\n");
        let mut pager = Pager::new(&text, "test", instant_config());
        pager.set_view_size(80, 10);
        pager
    }

    #[test]
    fn test_progress_follows_scroll() {
        let mut pager = pager_with_lines(30); // extent 20
        assert_eq!(pager.progress().y, 0.0);

        for _ in 0..10 {
            pager.apply(Action::ScrollDown);
        }
        assert_eq!(pager.scroll().1, 10);
        assert_eq!(pager.progress().y, 0.5);

        pager.apply(Action::JumpToBottom);
        assert_eq!(pager.progress().y, 1.0);
        assert_eq!(pager.percent_read(), 100);
    }

    #[test]
    fn test_short_content_reports_zero_progress() {
        let mut pager = pager_with_lines(5);
        pager.apply(Action::ScrollDown);
        pager.apply(Action::ScrollPageDown);
        assert_eq!(pager.scroll(), (0, 0));
        assert_eq!(pager.progress().y, 0.0);
    }

    #[test]
    fn test_resize_renotifies_progress() {
        let mut pager = pager_with_lines(40);
        pager.apply(Action::JumpToBottom);
        assert_eq!(pager.progress().y, 1.0);

        // Taller view shrinks the extent and re-clamps the offset
        pager.set_view_size(80, 20);
        assert_eq!(pager.scroll().1, 20);
        assert_eq!(pager.progress().y, 1.0);
    }

    #[test]
    fn test_close_stops_progress_updates() {
        let mut pager = pager_with_lines(30);
        pager.apply(Action::ScrollDown);
        let before = pager.progress();

        pager.close();
        pager.apply(Action::ScrollDown);
        pager.apply(Action::ScrollDown);
        assert_eq!(pager.progress(), before);

        // Unmounting twice is fine
        pager.close();
    }

    #[test]
    fn test_wheel_scrolls_by_notches() {
        let mut pager = pager_with_lines(100);
        pager.wheel(2);
        assert_eq!(pager.scroll().1, 6);
        pager.wheel(-1);
        assert_eq!(pager.scroll().1, 3);
    }

    #[test]
    fn test_horizontal_scroll_clamps() {
        let long = "x".repeat(100);
        let text = format!("{long}\nshort");
        let mut pager = Pager::new(&text, "test", instant_config());
        pager.set_view_size(80, 10);

        pager.apply(Action::ScrollRight);
        assert_eq!(pager.scroll().0, 4);
        for _ in 0..20 {
            pager.apply(Action::ScrollRight);
        }
        assert_eq!(pager.scroll().0, 20); // max = 100 - 80
        assert_eq!(pager.progress().x, 1.0);

        pager.apply(Action::ScrollLeft);
        assert_eq!(pager.scroll().0, 16);
    }

    #[test]
    fn test_gg_pending_key() {
        let mut pager = pager_with_lines(30);
        pager.apply(Action::JumpToBottom);
        pager.apply(Action::PendingG);
        assert_eq!(pager.pending_key, Some('g'));
        pager.apply(Action::JumpToTop);
        assert_eq!(pager.pending_key, None);
        assert_eq!(pager.scroll().1, 0);
    }
}
