//! Main TUI application state and logic

use std::io::{self, Stdout};
use std::path::PathBuf;
use std::time::Duration;

use crossterm::event::{KeyCode, KeyEvent};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::prelude::*;
use ratatui::Terminal;

use crate::core::animation::{AnimationProfile, Timeline};
use crate::core::capture::CaptureEvent;
use crate::core::config::{Config, OutputFormat};
use crate::core::emotion::{EmotionLabel, EmotionScores, AUXILIARY_NAMES};
use crate::error::{EmotiglassError, Result};
use crate::tui::event::{is_back_key, is_quit_key, AppEvent, EventHandler};
use crate::tui::ui;

/// Number of rows on the capture screen: eight emotions then three factors
pub const CAPTURE_ROWS: usize = EmotionLabel::ALL.len() + AUXILIARY_NAMES.len();

/// Tick rates offered on the settings screen
const TICK_RATE_CHOICES: [u64; 4] = [50, 100, 200, 500];

/// Slider steps offered on the settings screen
const ADJUST_STEP_CHOICES: [f64; 4] = [0.01, 0.05, 0.1, 0.25];

/// Current screen in the TUI
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Capture,
    Result,
    Settings,
}

/// A row on the capture screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CaptureRow {
    Emotion(EmotionLabel),
    /// Index into `AUXILIARY_NAMES`
    Auxiliary(usize),
}

impl CaptureRow {
    /// Row at a screen position
    pub fn at(index: usize) -> Option<Self> {
        let emotions = EmotionLabel::ALL.len();
        if index < emotions {
            Some(CaptureRow::Emotion(EmotionLabel::ALL[index]))
        } else if index < CAPTURE_ROWS {
            Some(CaptureRow::Auxiliary(index - emotions))
        } else {
            None
        }
    }
}

/// A row on the settings screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingsRow {
    Animations,
    TickRate,
    AdjustStep,
    Format,
}

impl SettingsRow {
    pub const ALL: [SettingsRow; 4] = [
        SettingsRow::Animations,
        SettingsRow::TickRate,
        SettingsRow::AdjustStep,
        SettingsRow::Format,
    ];
}

/// List selection state
#[derive(Debug, Default)]
pub struct ListState {
    /// Currently selected index
    pub selected: usize,
    /// Total items in the list
    pub total: usize,
}

impl ListState {
    pub fn new(total: usize) -> Self {
        Self { selected: 0, total }
    }

    pub fn next(&mut self) {
        if self.total > 0 {
            self.selected = (self.selected + 1) % self.total;
        }
    }

    pub fn previous(&mut self) {
        if self.total > 0 {
            self.selected = self.selected.checked_sub(1).unwrap_or(self.total - 1);
        }
    }
}

/// Main application state
pub struct App {
    /// Is the application running
    pub running: bool,
    /// Current screen
    pub current_screen: Screen,
    /// Navigation history
    pub navigation_stack: Vec<Screen>,
    /// Status message to display
    pub status_message: Option<String>,
    /// Show help overlay
    pub show_help: bool,

    /// Active configuration
    pub config: Config,
    /// Where settings changes are saved
    config_path: Option<PathBuf>,

    // ─────────────────────────────────────────────────────────────────────────
    // Capture screen
    // ─────────────────────────────────────────────────────────────────────────
    /// Scores being edited
    pub scores: EmotionScores,
    pub capture_selection: ListState,

    // ─────────────────────────────────────────────────────────────────────────
    // Result screen
    // ─────────────────────────────────────────────────────────────────────────
    /// Last analyzed capture
    pub capture: Option<CaptureEvent>,
    /// Pulse animation for the last capture
    pub timeline: Option<Timeline>,
    /// Animation clock, advanced on every tick event
    pub tick_counter: u64,

    // ─────────────────────────────────────────────────────────────────────────
    // Settings screen
    // ─────────────────────────────────────────────────────────────────────────
    pub settings_selection: ListState,
}

impl App {
    /// Create a new app instance
    pub fn new(config: Config) -> Self {
        Self {
            running: true,
            current_screen: Screen::Capture,
            navigation_stack: Vec::new(),
            status_message: None,
            show_help: false,

            config,
            config_path: None,

            scores: EmotionScores::default(),
            capture_selection: ListState::new(CAPTURE_ROWS),

            capture: None,
            timeline: None,
            tick_counter: 0,

            settings_selection: ListState::new(SettingsRow::ALL.len()),
        }
    }

    /// Save settings changes to this file
    pub fn with_config_path(mut self, path: PathBuf) -> Self {
        self.config_path = Some(path);
        self
    }

    /// Start with pre-filled scores
    pub fn with_scores(mut self, scores: EmotionScores) -> Self {
        self.scores = scores;
        self
    }

    /// Setup terminal for TUI
    fn setup_terminal() -> Result<Terminal<CrosstermBackend<Stdout>>> {
        enable_raw_mode().map_err(|e| EmotiglassError::Terminal(e.to_string()))?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)
            .map_err(|e| EmotiglassError::Terminal(e.to_string()))?;
        let backend = CrosstermBackend::new(stdout);
        let terminal =
            Terminal::new(backend).map_err(|e| EmotiglassError::Terminal(e.to_string()))?;
        Ok(terminal)
    }

    /// Restore terminal to normal state
    fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> Result<()> {
        disable_raw_mode().map_err(|e| EmotiglassError::Terminal(e.to_string()))?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)
            .map_err(|e| EmotiglassError::Terminal(e.to_string()))?;
        terminal
            .show_cursor()
            .map_err(|e| EmotiglassError::Terminal(e.to_string()))?;
        Ok(())
    }

    /// Run the TUI application
    pub async fn run(&mut self) -> Result<()> {
        let mut terminal = Self::setup_terminal()?;
        let result = self.event_loop(&mut terminal).await;
        Self::restore_terminal(&mut terminal)?;
        result
    }

    /// Draw and dispatch events until the user quits
    async fn event_loop(&mut self, terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> Result<()> {
        let mut tick_rate = self.config.effective_tick_rate();
        let mut events = EventHandler::new(Duration::from_millis(tick_rate));

        while self.running {
            terminal
                .draw(|frame| ui::render(frame, self))
                .map_err(|e| EmotiglassError::Terminal(e.to_string()))?;

            match events.next().await {
                Some(AppEvent::Key(key)) => self.handle_key_event(key),
                Some(AppEvent::Resize(_, _)) => {
                    // Terminal resize is handled automatically by ratatui
                }
                Some(AppEvent::Tick) => self.tick_counter = self.tick_counter.wrapping_add(1),
                None => break,
            }

            // Settings may have changed the clock
            let wanted = self.config.effective_tick_rate();
            if wanted != tick_rate {
                tracing::debug!(from = tick_rate, to = wanted, "restarting event clock");
                tick_rate = wanted;
                events = EventHandler::new(Duration::from_millis(tick_rate));
            }
        }

        Ok(())
    }

    /// Handle a key press
    pub fn handle_key_event(&mut self, key: KeyEvent) {
        // If help is shown, any key dismisses it
        if self.show_help {
            self.show_help = false;
            return;
        }

        // Global key handlers
        if key.code == KeyCode::Char('?') {
            self.show_help = true;
            return;
        }

        if is_quit_key(&key) {
            if self.navigation_stack.is_empty() {
                self.quit();
            } else {
                self.go_back();
            }
            return;
        }

        if is_back_key(&key) {
            self.go_back();
            return;
        }

        // Screen-specific handlers
        match self.current_screen {
            Screen::Capture => self.handle_capture_key(key),
            Screen::Result => self.handle_result_key(key),
            Screen::Settings => self.handle_settings_key(key),
        }
    }

    fn handle_capture_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('j') | KeyCode::Down => self.capture_selection.next(),
            KeyCode::Char('k') | KeyCode::Up => self.capture_selection.previous(),
            KeyCode::Char('l') | KeyCode::Right => self.adjust_selected(1.0),
            KeyCode::Char('h') | KeyCode::Left => self.adjust_selected(-1.0),
            KeyCode::Char('0') => self.set_selected(0.0),
            KeyCode::Char('r') => {
                self.scores = EmotionScores::default();
                self.status_message = Some(" Scores cleared ".to_string());
            }
            KeyCode::Char('s') => self.navigate_to(Screen::Settings),
            KeyCode::Enter => self.capture_now(),
            _ => {}
        }
    }

    fn handle_result_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('r') => self.replay_animation(),
            KeyCode::Char('n') | KeyCode::Enter => self.go_back(),
            KeyCode::Char('s') => self.navigate_to(Screen::Settings),
            _ => {}
        }
    }

    fn handle_settings_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('j') | KeyCode::Down => self.settings_selection.next(),
            KeyCode::Char('k') | KeyCode::Up => self.settings_selection.previous(),
            KeyCode::Enter | KeyCode::Char(' ') | KeyCode::Char('l') | KeyCode::Right => {
                self.cycle_setting()
            }
            _ => {}
        }
    }

    /// Current value of the selected capture row
    pub fn selected_value(&self) -> f64 {
        match CaptureRow::at(self.capture_selection.selected) {
            Some(CaptureRow::Emotion(label)) => self.scores.intensity(label),
            Some(CaptureRow::Auxiliary(i)) => self.scores.auxiliary().entries()[i].1,
            None => 0.0,
        }
    }

    /// Move the selected slider by `direction` steps
    fn adjust_selected(&mut self, direction: f64) {
        let step = self.config.effective_adjust_step();
        match CaptureRow::at(self.capture_selection.selected) {
            Some(CaptureRow::Emotion(_)) => {
                self.set_selected(self.selected_value() + direction * step);
            }
            Some(CaptureRow::Auxiliary(_)) => {
                self.set_selected(self.selected_value() + direction * step * 100.0);
            }
            None => {}
        }
    }

    /// Set the selected slider, clamped to its range
    fn set_selected(&mut self, value: f64) {
        match CaptureRow::at(self.capture_selection.selected) {
            Some(CaptureRow::Emotion(label)) => {
                // Round away float drift from repeated steps
                let value = (value.clamp(0.0, 1.0) * 1000.0).round() / 1000.0;
                self.scores.set(label, value);
            }
            Some(CaptureRow::Auxiliary(i)) => {
                let value = (value.clamp(0.0, 100.0) * 10.0).round() / 10.0;
                self.scores.set_auxiliary(AUXILIARY_NAMES[i], value);
            }
            None => {}
        }
    }

    /// Analyze the current scores and show the result
    fn capture_now(&mut self) {
        let capture = CaptureEvent::new(self.scores);
        tracing::info!(
            dominant = %capture.dominant.label,
            intensity = capture.dominant.intensity,
            "captured emotions"
        );

        let profile = AnimationProfile::for_emotion(capture.dominant.label);
        self.timeline = Some(Timeline::new(
            profile,
            self.tick_counter,
            self.config.animations,
        ));
        self.capture = Some(capture);
        self.navigate_to(Screen::Result);
    }

    /// Restart the result animation from the current tick
    fn replay_animation(&mut self) {
        if let Some(timeline) = self.timeline.as_mut() {
            timeline.start_tick = self.tick_counter;
            timeline.enabled = self.config.animations;
        }
    }

    /// Advance the selected setting to its next value and save
    fn cycle_setting(&mut self) {
        let Some(row) = SettingsRow::ALL.get(self.settings_selection.selected).copied() else {
            return;
        };

        match row {
            SettingsRow::Animations => self.config.animations = !self.config.animations,
            SettingsRow::TickRate => {
                self.config.tick_rate_ms = next_choice(&TICK_RATE_CHOICES, self.config.tick_rate_ms)
            }
            SettingsRow::AdjustStep => {
                self.config.adjust_step =
                    next_choice(&ADJUST_STEP_CHOICES, self.config.adjust_step)
            }
            SettingsRow::Format => {
                self.config.default_format = match self.config.default_format {
                    OutputFormat::Text => OutputFormat::Json,
                    OutputFormat::Json => OutputFormat::Text,
                }
            }
        }

        // Keep a running animation in sync with the toggle
        if let Some(timeline) = self.timeline.as_mut() {
            timeline.enabled = self.config.animations;
        }

        self.save_config();
    }

    fn save_config(&mut self) {
        let result = match &self.config_path {
            Some(path) => self.config.save_to(path),
            None => self.config.save(),
        };

        self.status_message = Some(match result {
            Ok(()) => " Settings saved ".to_string(),
            Err(e) => {
                tracing::warn!(error = %e, "failed to save settings");
                format!(" Failed to save settings: {} ", e)
            }
        });
    }

    /// Navigate to a screen
    pub fn navigate_to(&mut self, screen: Screen) {
        if screen == self.current_screen {
            return;
        }
        tracing::debug!(from = ?self.current_screen, to = ?screen, "navigate");
        self.navigation_stack.push(self.current_screen);
        self.current_screen = screen;
        self.status_message = None;
    }

    /// Go back to the previous screen
    pub fn go_back(&mut self) {
        if let Some(screen) = self.navigation_stack.pop() {
            self.current_screen = screen;
            self.status_message = None; // Clear stale messages on screen change
        }
    }

    /// Quit the application
    pub fn quit(&mut self) {
        self.running = false;
    }
}

/// The choice after `current`, wrapping; the first choice if `current` isn't listed
fn next_choice<T: Copy + PartialEq>(choices: &[T], current: T) -> T {
    match choices.iter().position(|&c| c == current) {
        Some(i) => choices[(i + 1) % choices.len()],
        None => choices[0],
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new(Config::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key_event(KeyEvent::new(code, KeyModifiers::NONE));
    }

    fn test_app(dir: &tempfile::TempDir) -> App {
        App::new(Config::default()).with_config_path(dir.path().join("config.toml"))
    }

    #[test]
    fn test_capture_rows() {
        assert_eq!(CAPTURE_ROWS, 11);
        assert_eq!(CaptureRow::at(0), Some(CaptureRow::Emotion(EmotionLabel::Joy)));
        assert_eq!(CaptureRow::at(7), Some(CaptureRow::Emotion(EmotionLabel::Neutral)));
        assert_eq!(CaptureRow::at(8), Some(CaptureRow::Auxiliary(0)));
        assert_eq!(CaptureRow::at(11), None);
    }

    #[test]
    fn test_adjust_emotion_slider() {
        let mut app = App::default();
        for _ in 0..3 {
            press(&mut app, KeyCode::Char('l'));
        }
        assert_eq!(app.scores.joy, 0.15);

        press(&mut app, KeyCode::Char('h'));
        assert_eq!(app.scores.joy, 0.1);

        for _ in 0..10 {
            press(&mut app, KeyCode::Char('h'));
        }
        assert_eq!(app.scores.joy, 0.0);
    }

    #[test]
    fn test_slider_clamps_at_one() {
        let mut app = App::default().with_scores(EmotionScores::default().with(EmotionLabel::Joy, 0.98));
        press(&mut app, KeyCode::Right);
        assert_eq!(app.scores.joy, 1.0);
    }

    #[test]
    fn test_adjust_auxiliary_slider() {
        let mut app = App::default();
        app.capture_selection.selected = 8;
        press(&mut app, KeyCode::Char('l'));
        assert_eq!(app.scores.energy, 5.0);
        assert_eq!(app.selected_value(), 5.0);
        press(&mut app, KeyCode::Char('0'));
        assert_eq!(app.scores.energy, 0.0);
    }

    #[test]
    fn test_selection_wraps() {
        let mut app = App::default();
        press(&mut app, KeyCode::Up);
        assert_eq!(app.capture_selection.selected, CAPTURE_ROWS - 1);
        press(&mut app, KeyCode::Down);
        assert_eq!(app.capture_selection.selected, 0);
    }

    #[test]
    fn test_capture_navigates_to_result() {
        let scores = EmotionScores::default()
            .with(EmotionLabel::Anger, 0.5)
            .with(EmotionLabel::Fear, 0.5);
        let mut app = App::default().with_scores(scores);
        app.tick_counter = 42;

        press(&mut app, KeyCode::Enter);

        assert_eq!(app.current_screen, Screen::Result);
        let capture = app.capture.as_ref().unwrap();
        assert_eq!(capture.dominant.label, EmotionLabel::Anger);
        let timeline = app.timeline.unwrap();
        assert_eq!(timeline.start_tick, 42);
        assert_eq!(
            timeline.profile,
            AnimationProfile::for_emotion(EmotionLabel::Anger)
        );
    }

    #[test]
    fn test_result_back_keeps_scores() {
        let mut app = App::default().with_scores(EmotionScores::default().with(EmotionLabel::Joy, 0.4));
        press(&mut app, KeyCode::Enter);
        press(&mut app, KeyCode::Char('n'));
        assert_eq!(app.current_screen, Screen::Capture);
        assert_eq!(app.scores.joy, 0.4);
    }

    #[test]
    fn test_replay_restarts_timeline() {
        let mut app = App::default();
        press(&mut app, KeyCode::Enter);
        app.tick_counter = 99;
        press(&mut app, KeyCode::Char('r'));
        assert_eq!(app.timeline.unwrap().start_tick, 99);
    }

    #[test]
    fn test_quit_from_root_and_back_elsewhere() {
        let mut app = App::default();
        press(&mut app, KeyCode::Enter);
        press(&mut app, KeyCode::Char('q'));
        assert!(app.running);
        assert_eq!(app.current_screen, Screen::Capture);

        press(&mut app, KeyCode::Char('q'));
        assert!(!app.running);
    }

    #[test]
    fn test_help_overlay_swallows_next_key() {
        let mut app = App::default();
        press(&mut app, KeyCode::Char('?'));
        assert!(app.show_help);
        press(&mut app, KeyCode::Char('q'));
        assert!(!app.show_help);
        assert!(app.running);
    }

    #[test]
    fn test_settings_toggle_saves() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = test_app(&dir);

        press(&mut app, KeyCode::Char('s'));
        assert_eq!(app.current_screen, Screen::Settings);

        press(&mut app, KeyCode::Enter);
        assert!(!app.config.animations);

        let saved = Config::load_from(&dir.path().join("config.toml")).unwrap();
        assert!(!saved.animations);
        assert_eq!(app.status_message.as_deref(), Some(" Settings saved "));
    }

    #[test]
    fn test_settings_cycle_tick_rate() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = test_app(&dir);
        app.navigate_to(Screen::Settings);
        app.settings_selection.selected = 1;

        press(&mut app, KeyCode::Enter);
        assert_eq!(app.config.tick_rate_ms, 200);
        press(&mut app, KeyCode::Enter);
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.config.tick_rate_ms, 50);
    }

    #[test]
    fn test_next_choice() {
        assert_eq!(next_choice(&[1, 2, 3], 3), 1);
        assert_eq!(next_choice(&[1, 2, 3], 7), 1);
        assert_eq!(next_choice(&[0.01, 0.05], 0.01), 0.05);
    }
}
