//! Result screen: dominant emotion with its pulse animation and breakdown

use chrono::Local;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Gauge, Paragraph, Wrap};

use crate::core::animation::Timeline;
use crate::core::capture::CaptureEvent;
use crate::core::presentation::intensity_bar;
use crate::tui::app::App;
use crate::tui::theme::Theme;

const BREAKDOWN_BAR_WIDTH: usize = 30;

/// Ticks for the breakdown bars to fill in
const REVEAL_TICKS: u32 = 8;

/// Render this screen
pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let Some(capture) = &app.capture else {
        let empty = Paragraph::new("\n  Nothing captured yet. Press Esc and then Enter to capture.")
            .block(Block::default().title(" Result ").borders(Borders::ALL));
        frame.render_widget(empty, area);
        return;
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(7),  // Hero
            Constraint::Min(10),    // Breakdown
            Constraint::Length(3),  // Auxiliary gauges
        ])
        .split(area);

    render_hero(frame, chunks[0], app, capture);
    render_breakdown(frame, chunks[1], app, capture);
    render_auxiliary(frame, chunks[2], capture);
}

/// Glyph with a pulsing halo, name, percentage and description
fn render_hero(frame: &mut Frame, area: Rect, app: &App, capture: &CaptureEvent) {
    let entry = capture.presentation_entry();
    let style = Theme::emotion(entry.color);
    let rings = halo_rings(app.timeline.as_ref(), app.tick_counter);

    let halo = "·".repeat(rings);
    let glyph_style = if rings >= 2 {
        style.add_modifier(Modifier::BOLD)
    } else {
        style
    };

    let captured_at = capture
        .captured_at
        .with_timezone(&Local)
        .format("%H:%M:%S")
        .to_string();

    let lines = vec![
        Line::from(vec![
            Span::styled(format!("{:>3}", halo), style),
            Span::styled(format!(" {} ", entry.glyph()), glyph_style),
            Span::styled(format!("{:<3}", halo), style),
        ])
        .alignment(Alignment::Center),
        Line::from(Span::styled(
            format!(
                "{} · {}%",
                capture.dominant.label.display_name(),
                capture.dominant.percent()
            ),
            style.add_modifier(Modifier::BOLD),
        ))
        .alignment(Alignment::Center),
        Line::from(""),
        Line::from(entry.description).alignment(Alignment::Center),
        Line::from(Span::styled(
            format!("captured {}", captured_at),
            Theme::muted(),
        ))
        .alignment(Alignment::Center),
    ];

    let hero = Paragraph::new(lines)
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(style),
        );
    frame.render_widget(hero, area);
}

/// Halo dots per unit of extra pulse scale
const RINGS_PER_SCALE: f32 = 10.0;

/// Number of halo dots on each side of the glyph, 0..=3
fn halo_rings(timeline: Option<&Timeline>, tick: u64) -> usize {
    timeline
        .map(|t| ((t.scale(tick) - 1.0) * RINGS_PER_SCALE).round().max(0.0) as usize)
        .unwrap_or(0)
        .min(3)
}

/// Ranked intensity bars filling in as the entrance animation plays
fn render_breakdown(frame: &mut Frame, area: Rect, app: &App, capture: &CaptureEvent) {
    let reveal = app
        .timeline
        .as_ref()
        .map(|t| f64::from(t.reveal(app.tick_counter, REVEAL_TICKS)))
        .unwrap_or(1.0);

    let lines: Vec<Line> = capture
        .ranked
        .iter()
        .map(|item| {
            let entry = item.label.presentation();
            let name_style = if item.label == capture.dominant.label && item.intensity > 0.0 {
                Theme::emotion(entry.color).add_modifier(Modifier::BOLD)
            } else {
                Theme::normal()
            };
            Line::from(vec![
                Span::styled(format!("  {} ", entry.glyph()), Theme::emotion(entry.color)),
                Span::styled(format!("{:<12}", item.label.display_name()), name_style),
                Span::styled(
                    intensity_bar(item.intensity * reveal, BREAKDOWN_BAR_WIDTH),
                    Theme::emotion(entry.color),
                ),
                Span::raw(format!(" {:.2}", item.intensity)),
            ])
        })
        .collect();

    let breakdown = Paragraph::new(lines).block(
        Block::default()
            .title(Span::styled(" Breakdown ", Theme::title()))
            .borders(Borders::ALL),
    );
    frame.render_widget(breakdown, area);
}

/// Energy, calmness and tension gauges side by side
fn render_auxiliary(frame: &mut Frame, area: Rect, capture: &CaptureEvent) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
        ])
        .split(area);

    for ((name, value), column) in capture.auxiliary.entries().into_iter().zip(columns.iter()) {
        let ratio = if value.is_finite() {
            (value / 100.0).clamp(0.0, 1.0)
        } else {
            0.0
        };
        let gauge = Gauge::default()
            .block(Block::default().title(format!(" {} ", name)).borders(Borders::ALL))
            .gauge_style(Style::default().fg(Theme::PRIMARY))
            .ratio(ratio)
            .label(format!("{:.0}", value));
        frame.render_widget(gauge, *column);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::animation::{AnimationProfile, Easing};

    #[test]
    fn test_halo_follows_pulse() {
        let profile = AnimationProfile {
            period_ticks: 10,
            easing: Easing::Linear,
            amplitude: 0.3,
        };
        let timeline = Timeline::new(profile, 0, true);
        assert_eq!(halo_rings(Some(&timeline), 0), 0);
        assert_eq!(halo_rings(Some(&timeline), 5), 3);
        assert_eq!(halo_rings(None, 5), 0);

        let frozen = Timeline::new(profile, 0, false);
        assert_eq!(halo_rings(Some(&frozen), 5), 0);
    }

    #[test]
    fn test_halo_width_follows_amplitude() {
        let profile = |amplitude| AnimationProfile {
            period_ticks: 10,
            easing: Easing::Linear,
            amplitude,
        };
        let calm = Timeline::new(profile(0.1), 0, true);
        let intense = Timeline::new(profile(0.3), 0, true);
        assert_eq!(halo_rings(Some(&calm), 5), 1);
        assert_eq!(halo_rings(Some(&intense), 5), 3);

        let wide = Timeline::new(profile(2.0), 0, true);
        assert_eq!(halo_rings(Some(&wide), 5), 3);
    }
}
