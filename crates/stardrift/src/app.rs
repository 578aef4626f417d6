//! Terminal host for the starfield.

use std::path::PathBuf;
use std::time::{Duration, Instant};

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::{
    DefaultTerminal, Frame,
    layout::{Constraint, Layout},
    style::{Color, Stylize},
    text::Line,
};
use stardrift_background::{Starfield, StarfieldWidget};
use stardrift_config::{Config, ConfigError, ConfigWatcher};

use crate::control::StatusToggle;
use crate::scheduler::TickScheduler;

/// Longest the loop blocks on input while no frame is pending.
const IDLE_POLL: Duration = Duration::from_millis(250);

/// Accent color for key hints.
const ACCENT: Color = Color::Cyan;

/// The main application which holds the state and logic of the application.
#[derive(Debug)]
pub struct App {
    /// Is the application running?
    running: bool,
    /// Settings loaded at startup.
    config: Config,
    /// Starfield animation and motion state.
    starfield: Starfield<TickScheduler, StatusToggle>,
    /// Source of reduced-motion preference changes.
    watcher: Option<ConfigWatcher>,
    /// Origin for frame timestamps.
    started: Instant,
}

impl App {
    /// Construct a new instance of [`App`].
    pub fn new(config: Config, config_path: Option<PathBuf>) -> Self {
        let scheduler = TickScheduler::new(Duration::from_millis(config.frame_interval_ms));
        let control = config.show_toggle.then(StatusToggle::default);
        let starfield = Starfield::new(
            config.star_count,
            config.reduced_motion,
            scheduler,
            control,
        )
        .with_labels(config.labels.clone());

        Self {
            running: false,
            watcher: config_path.map(ConfigWatcher::new),
            config,
            starfield,
            started: Instant::now(),
        }
    }

    /// Run the application's main loop.
    pub fn run(mut self, mut terminal: DefaultTerminal) -> color_eyre::Result<()> {
        self.running = true;
        let size = terminal.size()?;
        let (width, height) = display_size(size.width, size.height);
        self.starfield.init(width, height, self.config.pixel_ratio);

        while self.running {
            terminal.draw(|frame| self.render(frame))?;
            self.handle_crossterm_events()?;
            self.deliver_due_frame();
            self.poll_preference();
        }
        Ok(())
    }

    /// Renders the user interface.
    fn render(&self, frame: &mut Frame) {
        let area = frame.area();
        frame.render_widget(
            StarfieldWidget::new(self.starfield.canvas()).backdrop(self.config.backdrop()),
            area,
        );

        let [_, help_area] = Layout::vertical([Constraint::Fill(1), Constraint::Length(1)]).areas(area);

        let mut spans = vec!["q".bold().fg(ACCENT), " quit".dark_gray()];
        if let Some(toggle) = self.starfield.control() {
            spans.push("  ".into());
            spans.extend(toggle.spans(ACCENT));
        }
        frame.render_widget(Line::from(spans).centered(), help_area);
    }

    /// Reads the crossterm events and updates the state of [`App`].
    /// Waits no longer than the next pending frame.
    fn handle_crossterm_events(&mut self) -> color_eyre::Result<()> {
        let timeout = self
            .starfield
            .scheduler()
            .time_until_due(Instant::now())
            .map_or(IDLE_POLL, |wait| wait.min(IDLE_POLL));

        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => self.on_key_event(key),
                Event::Resize(width, height) => self.resize(width, height),
                _ => {}
            }
        }
        Ok(())
    }

    /// Handles the key events and updates the state of [`App`].
    fn on_key_event(&mut self, key: KeyEvent) {
        match (key.modifiers, key.code) {
            (_, KeyCode::Esc | KeyCode::Char('q'))
            | (KeyModifiers::CONTROL, KeyCode::Char('c') | KeyCode::Char('C')) => self.quit(),
            (_, KeyCode::Char('m')) => self.starfield.on_toggle(),
            _ => {}
        }
    }

    fn resize(&mut self, cols: u16, rows: u16) {
        let (width, height) = display_size(cols, rows);
        self.starfield.on_resize(width, height, self.config.pixel_ratio);
    }

    /// Hand the starfield its frame once the scheduler says it is due.
    fn deliver_due_frame(&mut self) {
        let now = Instant::now();
        if let Some(handle) = self.starfield.scheduler_mut().take_due(now) {
            let t_ms = now.duration_since(self.started).as_secs_f64() * 1000.0;
            self.starfield.on_frame(handle, t_ms);
        }
    }

    /// Pick up reduced-motion changes from the config file.
    fn poll_preference(&mut self) {
        let Some(watcher) = self.watcher.as_mut() else {
            return;
        };
        let Some(reload) = watcher.poll(Instant::now()) else {
            return;
        };
        let current = self.starfield.motion().prefers_reduced();
        if let Some(reduced) = preference_update(current, reload) {
            tracing::info!(reduced_motion = reduced, "motion preference changed");
            self.config.reduced_motion = reduced;
            self.starfield.on_preference_change(reduced);
        }
    }

    /// Set running to false to quit the application.
    fn quit(&mut self) {
        self.running = false;
    }
}

/// Display pixels for a terminal of `cols` x `rows` cells. Each cell is two
/// display pixels tall.
fn display_size(cols: u16, rows: u16) -> (f32, f32) {
    (cols as f32, rows as f32 * 2.0)
}

/// New reduced-motion value to report after a config reload, if it changed.
///
/// A failed reload keeps the current preference.
fn preference_update(current: bool, reload: Result<Config, ConfigError>) -> Option<bool> {
    match reload {
        Ok(config) if config.reduced_motion != current => Some(config.reduced_motion),
        Ok(_) => None,
        Err(err) => {
            tracing::warn!(%err, "config reload failed, keeping current preference");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn reloaded(reduced_motion: bool) -> Result<Config, ConfigError> {
        Ok(Config {
            reduced_motion,
            ..Default::default()
        })
    }

    #[test]
    fn test_unchanged_preference_is_ignored() {
        assert_eq!(preference_update(false, reloaded(false)), None);
        assert_eq!(preference_update(true, reloaded(true)), None);
    }

    #[test]
    fn test_flipped_preference_is_reported() {
        assert_eq!(preference_update(false, reloaded(true)), Some(true));
        assert_eq!(preference_update(true, reloaded(false)), Some(false));
    }

    #[test]
    fn test_failed_reload_keeps_preference() {
        let source = Config::parse("reduced_motion = [").unwrap_err();
        let err = ConfigError::Parse {
            path: PathBuf::from("config.toml"),
            source,
        };
        assert_eq!(preference_update(true, Err(err)), None);
    }

    #[test]
    fn test_reduced_startup_draws_single_static_frame() {
        let config = Config {
            reduced_motion: true,
            show_toggle: false,
            star_count: 12,
            ..Default::default()
        };
        let mut app = App::new(config, None);
        let (width, height) = display_size(40, 12);
        app.starfield.init(width, height, app.config.pixel_ratio);

        assert!(!app.starfield.motion().enabled());
        assert_eq!(app.starfield.stars().len(), 12);
        assert_eq!(app.starfield.scheduler().time_until_due(Instant::now()), None);
    }
}
