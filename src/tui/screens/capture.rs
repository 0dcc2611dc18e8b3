//! Capture screen: one slider per emotion and auxiliary factor

use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, List, ListItem, Paragraph};

use crate::core::emotion::AUXILIARY_NAMES;
use crate::core::presentation::intensity_bar;
use crate::tui::app::{App, CaptureRow, CAPTURE_ROWS};
use crate::tui::theme::Theme;

const SLIDER_WIDTH: usize = 24;

/// Render this screen
pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(2)])
        .split(area);

    let items: Vec<ListItem> = (0..CAPTURE_ROWS)
        .filter_map(|i| CaptureRow::at(i).map(|row| (i, row)))
        .map(|(i, row)| {
            let item = ListItem::new(row_line(app, row));
            if i == app.capture_selection.selected {
                item.style(Theme::selected())
            } else {
                item
            }
        })
        .collect();

    let list = List::new(items).block(
        Block::default()
            .title(" Emotions ")
            .borders(Borders::ALL)
            .border_style(Theme::normal()),
    );
    frame.render_widget(list, chunks[0]);

    let hint = Paragraph::new(Line::from(vec![
        Span::styled("  h/l", Style::default().fg(Theme::PRIMARY)),
        Span::styled(" adjust  ", Theme::muted()),
        Span::styled("Enter", Style::default().fg(Theme::PRIMARY)),
        Span::styled(" capture  ", Theme::muted()),
        Span::styled("r", Style::default().fg(Theme::PRIMARY)),
        Span::styled(" clear", Theme::muted()),
    ]));
    frame.render_widget(hint, chunks[1]);
}

fn row_line(app: &App, row: CaptureRow) -> Line<'static> {
    match row {
        CaptureRow::Emotion(label) => {
            let entry = label.presentation();
            let value = app.scores.intensity(label);
            Line::from(vec![
                Span::styled(format!("  {} ", entry.glyph()), Theme::emotion(entry.color)),
                Span::raw(format!("{:<12}", label.display_name())),
                Span::styled(
                    intensity_bar(value, SLIDER_WIDTH),
                    Theme::emotion(entry.color),
                ),
                Span::raw(format!(" {:.2}", value)),
            ])
        }
        CaptureRow::Auxiliary(i) => {
            let value = app.scores.auxiliary().entries()[i].1;
            Line::from(vec![
                Span::raw("    "),
                Span::raw(format!("{:<12}", capitalize(AUXILIARY_NAMES[i]))),
                Span::styled(
                    intensity_bar(value / 100.0, SLIDER_WIDTH),
                    Style::default().fg(Theme::PRIMARY),
                ),
                Span::raw(format!(" {:>4.0}", value)),
            ])
        }
    }
}

fn capitalize(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
