//! Main UI renderer

use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

use crate::tui::app::{App, Screen};
use crate::tui::screens::{capture, result, settings};
use crate::tui::theme::Theme;

/// Render the UI
pub fn render(frame: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(0),    // Content
            Constraint::Length(3), // Status bar
        ])
        .split(frame.area());

    render_header(frame, chunks[0], app);
    render_content(frame, chunks[1], app);
    render_status_bar(frame, chunks[2], app);

    // Render help overlay on top if active
    if app.show_help {
        render_help_overlay(frame, app);
    }
}

/// Render the header
fn render_header(frame: &mut Frame, area: Rect, app: &App) {
    let title = format!(" EmotiGlass │ {} ", screen_name(app.current_screen));

    let header = Paragraph::new(title)
        .style(Theme::header())
        .block(Block::default().borders(Borders::BOTTOM));

    frame.render_widget(header, area);
}

fn screen_name(screen: Screen) -> &'static str {
    match screen {
        Screen::Capture => "How are you feeling?",
        Screen::Result => "Your Emotion",
        Screen::Settings => "Settings",
    }
}

/// Render the main content area based on current screen
fn render_content(frame: &mut Frame, area: Rect, app: &App) {
    match app.current_screen {
        Screen::Capture => capture::render(frame, area, app),
        Screen::Result => result::render(frame, area, app),
        Screen::Settings => settings::render(frame, area, app),
    }
}

/// Render the status bar
fn render_status_bar(frame: &mut Frame, area: Rect, app: &App) {
    let status_text = match &app.status_message {
        Some(msg) => msg.clone(),
        None => " ? for help │ q to quit ".to_string(),
    };

    let status = Paragraph::new(status_text)
        .style(Theme::status_bar())
        .block(Block::default().borders(Borders::TOP));

    frame.render_widget(status, area);
}

/// Render the help overlay
fn render_help_overlay(frame: &mut Frame, app: &App) {
    let area = frame.area();

    // Calculate centered popup area (60% width, 70% height)
    let popup_width = (u32::from(area.width) * 60 / 100).min(60) as u16;
    let popup_height = (u32::from(area.height) * 70 / 100).min(16) as u16;
    let popup_x = (area.width.saturating_sub(popup_width)) / 2;
    let popup_y = (area.height.saturating_sub(popup_height)) / 2;

    let popup_area = Rect::new(popup_x, popup_y, popup_width, popup_height);

    // Clear the area behind the popup
    frame.render_widget(Clear, popup_area);

    let (title, help_lines) = get_help_content(app.current_screen);

    let text: Vec<Line> = help_lines
        .into_iter()
        .map(|(key, desc)| {
            Line::from(vec![
                Span::styled(format!("  {:12}", key), Style::default().fg(Theme::PRIMARY)),
                Span::raw(desc),
            ])
        })
        .collect();

    let help = Paragraph::new(text)
        .block(
            Block::default()
                .title(format!(" {} ", title))
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Theme::SECONDARY)),
        )
        .style(Style::default().bg(Color::Black));

    frame.render_widget(help, popup_area);
}

/// Get help content for the current screen
fn get_help_content(screen: Screen) -> (&'static str, Vec<(&'static str, &'static str)>) {
    match screen {
        Screen::Capture => (
            "Help - Capture",
            vec![
                ("j / ↓", "Next emotion"),
                ("k / ↑", "Previous emotion"),
                ("l / →", "Increase"),
                ("h / ←", "Decrease"),
                ("0", "Zero this row"),
                ("r", "Clear all scores"),
                ("Enter", "Capture and analyze"),
                ("s", "Settings"),
                ("q", "Quit"),
            ],
        ),
        Screen::Result => (
            "Help - Result",
            vec![
                ("r", "Replay animation"),
                ("n / Enter", "New capture"),
                ("s", "Settings"),
                ("Esc", "Go back"),
            ],
        ),
        Screen::Settings => (
            "Help - Settings",
            vec![
                ("j / ↓", "Move down"),
                ("k / ↑", "Move up"),
                ("Enter", "Change setting"),
                ("Esc", "Go back"),
            ],
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    use crate::core::emotion::{EmotionLabel, EmotionScores};

    fn draw(app: &App) -> String {
        draw_sized(app, 80, 30)
    }

    fn draw_sized(app: &App, width: u16, height: u16) -> String {
        let backend = TestBackend::new(width, height);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|frame| render(frame, app)).unwrap();

        let buffer = terminal.backend().buffer();
        let mut out = String::new();
        for y in 0..buffer.area.height {
            for x in 0..buffer.area.width {
                out.push_str(buffer[(x, y)].symbol());
            }
            out.push('\n');
        }
        out
    }

    #[test]
    fn test_capture_screen_lists_emotions() {
        let screen = draw(&App::default());
        assert!(screen.contains("EmotiGlass"));
        for label in EmotionLabel::ALL {
            assert!(screen.contains(label.display_name()), "missing {}", label);
        }
        assert!(screen.contains("Energy"));
    }

    #[test]
    fn test_result_screen_shows_dominant() {
        use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

        let scores = EmotionScores::default().with(EmotionLabel::Joy, 0.8);
        let mut app = App::default().with_scores(scores);
        app.handle_key_event(KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE));

        let screen = draw(&app);
        assert!(screen.contains("Joy"));
        assert!(screen.contains("80%"));
        assert!(screen.contains("happiness"));
    }

    #[test]
    fn test_help_overlay() {
        let mut app = App::default();
        app.show_help = true;
        let screen = draw(&app);
        assert!(screen.contains("Help - Capture"));
    }

    #[test]
    fn test_help_overlay_on_wide_terminal() {
        let mut app = App::default();
        app.show_help = true;
        for (width, height) in [(1200, 40), (80, 1000)] {
            let screen = draw_sized(&app, width, height);
            assert!(screen.contains("Help - Capture"));
        }
    }

    #[test]
    fn test_every_screen_has_help() {
        for screen in [Screen::Capture, Screen::Result, Screen::Settings] {
            let (title, lines) = get_help_content(screen);
            assert!(title.starts_with("Help"));
            assert!(!lines.is_empty());
        }
    }
}
