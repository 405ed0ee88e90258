use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::app::Pager;
use crate::theme::GruvboxMaterial;

pub struct StatusBarWidget;

impl StatusBarWidget {
    pub fn render(frame: &mut Frame, area: Rect, pager: &Pager) {
        let (_, scroll_y) = pager.scroll();
        let top_line = usize::from(scroll_y) + 1;

        let status_text = if pager.config.ui.show_percent {
            format!(
                " {} | L{}/{} | {}%",
                pager.title(),
                top_line,
                pager.total_lines(),
                pager.percent_read()
            )
        } else {
            format!(" {} | L{}/{}", pager.title(), top_line, pager.total_lines())
        };

        let help_hint = " q:quit j/k:scroll h/l:pan gg/G:top/bottom ";
        let padding_len = area
            .width
            .saturating_sub(status_text.chars().count() as u16 + help_hint.len() as u16)
            as usize;

        let line = Line::from(vec![
            Span::styled(
                status_text,
                Style::default()
                    .fg(GruvboxMaterial::FG0)
                    .bg(GruvboxMaterial::BG2),
            ),
            Span::styled(
                " ".repeat(padding_len),
                Style::default().bg(GruvboxMaterial::BG2),
            ),
            Span::styled(
                help_hint,
                Style::default()
                    .fg(GruvboxMaterial::GREY1)
                    .bg(GruvboxMaterial::BG2),
            ),
        ]);

        frame.render_widget(Paragraph::new(line), area);
    }
}
