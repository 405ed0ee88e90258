use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::theme::GruvboxMaterial;

pub struct ProgressBarWidget;

impl ProgressBarWidget {
    /// Render the reading-progress bar: a one-row strip whose filled width
    /// is the vertical progress fraction of the area width.
    pub fn render(frame: &mut Frame, area: Rect, progress: f64) {
        let filled = Self::filled_cells(area.width, progress);
        let rest = area.width - filled;

        let line = Line::from(vec![
            Span::styled(
                "█".repeat(filled as usize),
                Style::default().fg(GruvboxMaterial::ACCENT),
            ),
            Span::styled(
                " ".repeat(rest as usize),
                Style::default().bg(GruvboxMaterial::BG0),
            ),
        ]);

        frame.render_widget(Paragraph::new(line), area);
    }

    fn filled_cells(width: u16, progress: f64) -> u16 {
        let ratio = progress.clamp(0.0, 1.0);
        ((f64::from(width) * ratio).round() as u16).min(width)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filled_cells_scales_with_progress() {
        assert_eq!(ProgressBarWidget::filled_cells(80, 0.0), 0);
        assert_eq!(ProgressBarWidget::filled_cells(80, 0.5), 40);
        assert_eq!(ProgressBarWidget::filled_cells(80, 1.0), 80);
    }

    #[test]
    fn test_filled_cells_clamps_out_of_range() {
        assert_eq!(ProgressBarWidget::filled_cells(80, 1.7), 80);
        assert_eq!(ProgressBarWidget::filled_cells(80, -0.3), 0);
    }
}
