use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::app::Pager;
use crate::theme::GruvboxMaterial;

pub struct ContentWidget;

impl ContentWidget {
    /// Render the scrolled text. Records the inner area as the view size so
    /// the pager can report resizes before the text is drawn against them.
    pub fn render(frame: &mut Frame, area: Rect, pager: &mut Pager) {
        let block = Block::default()
            .title(format!(" {} ", pager.title()))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(GruvboxMaterial::GREY0))
            .style(Style::default().bg(GruvboxMaterial::BG0));

        let inner_area = block.inner(area);
        frame.render_widget(block, area);

        pager.set_view_size(inner_area.width, inner_area.height);
        let (scroll_x, scroll_y) = pager.scroll();

        let lines: Vec<Line> = pager
            .lines()
            .iter()
            .map(|l| {
                Line::from(Span::styled(
                    l.clone(),
                    Style::default().fg(GruvboxMaterial::FG0),
                ))
            })
            .collect();

        let paragraph = Paragraph::new(lines).scroll((scroll_y, scroll_x));
        frame.render_widget(paragraph, inner_area);
    }
}
