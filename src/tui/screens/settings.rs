//! Settings screen

use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, List, ListItem};

use crate::core::config::Config;
use crate::tui::app::{App, SettingsRow};
use crate::tui::theme::Theme;

/// Render this screen
pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let items: Vec<ListItem> = SettingsRow::ALL
        .iter()
        .enumerate()
        .map(|(i, row)| {
            let (name, value) = describe(&app.config, *row);
            let line = Line::from(vec![
                Span::raw(format!("  {:<24}", name)),
                Span::styled(value, Style::default().fg(Theme::PRIMARY)),
            ]);
            let item = ListItem::new(line);
            if i == app.settings_selection.selected {
                item.style(Theme::selected())
            } else {
                item
            }
        })
        .collect();

    let list = List::new(items).block(
        Block::default()
            .title(" Settings (Enter to change) ")
            .borders(Borders::ALL),
    );
    frame.render_widget(list, area);
}

/// Label and current value of a settings row
fn describe(config: &Config, row: SettingsRow) -> (&'static str, String) {
    match row {
        SettingsRow::Animations => (
            "Animations",
            (if config.animations { "on" } else { "off" }).to_string(),
        ),
        SettingsRow::TickRate => ("Animation tick", format!("{} ms", config.tick_rate_ms)),
        SettingsRow::AdjustStep => ("Slider step", format!("{}", config.adjust_step)),
        SettingsRow::Format => ("CLI output format", config.default_format.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_describe_defaults() {
        let config = Config::default();
        assert_eq!(describe(&config, SettingsRow::Animations).1, "on");
        assert_eq!(describe(&config, SettingsRow::TickRate).1, "100 ms");
        assert_eq!(describe(&config, SettingsRow::AdjustStep).1, "0.05");
        assert_eq!(describe(&config, SettingsRow::Format).1, "text");
    }
}
