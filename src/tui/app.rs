//! Application state and event loop

use std::sync::mpsc::{self, Receiver};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

use chrono::{Days, Local, NaiveDate};
use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use ratatui::{
    buffer::Buffer, layout::Rect, style::Style, widgets::Widget, DefaultTerminal, Frame,
};

use crate::calendar::{build_legend, CalendarMemo, Legend, WINDOW_DAYS};
use crate::services::{
    lookup_for, Config, DetailDispatcher, DetailResponse, SnapshotLoader, WorkoutLookup,
};
use crate::types::{DashboardSnapshot, Workout};

use super::theme::Theme;
use super::widgets::{
    calendar_page::CalendarPage,
    help::HelpPopup,
    spinner::{LoadingStage, Spinner},
    stats::StatsView,
    tabs::Tab,
    workout_detail::WorkoutDetailPopup,
};

/// Application state
pub enum AppState {
    /// Loading data with spinner animation
    Loading {
        spinner_frame: usize,
        stage: LoadingStage,
    },
    /// Ready with loaded data
    Ready { data: Box<AppData> },
    /// Error state
    Error { message: String },
}

/// Loaded application data
pub struct AppData {
    pub snapshot: DashboardSnapshot,
    pub legend: Legend,
    pub lookup: Arc<dyn WorkoutLookup>,
}

impl AppData {
    pub fn new(snapshot: DashboardSnapshot, lookup: Arc<dyn WorkoutLookup>) -> Self {
        let legend = build_legend(&snapshot.activity_breakdown);
        Self {
            snapshot,
            legend,
            lookup,
        }
    }
}

/// Progress messages from the loader thread
pub enum LoadEvent {
    Stage(LoadingStage),
    Finished(Result<Box<AppData>, String>),
}

/// Main application
pub struct App {
    state: AppState,
    should_quit: bool,
    current_tab: Tab,
    show_help: bool,
    theme: Theme,
    /// Pinned by `--today`; otherwise follows the local clock
    fixed_today: Option<NaiveDate>,
    today: NaiveDate,
    cursor: NaiveDate,
    memo: CalendarMemo,
    detail: Option<Workout>,
    dispatcher: Option<DetailDispatcher>,
    detail_rx: Option<Receiver<DetailResponse>>,
}

impl App {
    /// Create a new app in loading state
    pub fn new(theme: Theme, fixed_today: Option<NaiveDate>) -> Self {
        let today = fixed_today.unwrap_or_else(|| Local::now().date_naive());
        Self {
            state: AppState::Loading {
                spinner_frame: 0,
                stage: LoadingStage::Reading,
            },
            should_quit: false,
            current_tab: Tab::default(),
            show_help: false,
            theme,
            fixed_today,
            today,
            cursor: today,
            memo: CalendarMemo::new(),
            detail: None,
            dispatcher: None,
            detail_rx: None,
        }
    }

    /// Handle keyboard events
    pub fn handle_event(&mut self, event: Event) {
        let Event::Key(key) = event else {
            return;
        };
        if key.kind != KeyEventKind::Press {
            return;
        }

        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') => {
                self.should_quit = true;
            }
            KeyCode::Esc => {
                if self.detail.is_some() {
                    self.detail = None;
                } else if self.show_help {
                    self.show_help = false;
                } else {
                    self.should_quit = true;
                }
            }
            KeyCode::Char('?') => {
                self.show_help = !self.show_help;
            }
            KeyCode::Tab => {
                self.current_tab = self.current_tab.next();
            }
            KeyCode::BackTab => {
                self.current_tab = self.current_tab.prev();
            }
            KeyCode::Char(c @ '1'..='2') => {
                if let Some(tab) = Tab::from_number(c as u8 - b'0') {
                    self.current_tab = tab;
                }
            }
            KeyCode::Up | KeyCode::Char('k') => self.move_cursor(-1),
            KeyCode::Down | KeyCode::Char('j') => self.move_cursor(1),
            KeyCode::Left | KeyCode::Char('h') => self.move_cursor(-7),
            KeyCode::Right | KeyCode::Char('l') => self.move_cursor(7),
            KeyCode::Enter => self.click_cursor(),
            _ => {}
        }
    }

    /// First day of the visible window
    fn window_start(&self) -> NaiveDate {
        self.today
            .checked_sub_days(Days::new(WINDOW_DAYS as u64 - 1))
            .unwrap_or(self.today)
    }

    /// Move the day cursor by `days`, clamped to the 365-day window.
    /// Rows are weekdays, so a column step is 7 days.
    fn move_cursor(&mut self, days: i64) {
        if self.current_tab != Tab::Calendar || self.detail.is_some() {
            return;
        }
        let moved = if days >= 0 {
            self.cursor.checked_add_days(Days::new(days as u64))
        } else {
            self.cursor.checked_sub_days(Days::new(days.unsigned_abs()))
        };
        if let Some(date) = moved {
            self.cursor = date.clamp(self.window_start(), self.today);
        }
    }

    /// Click the cell under the cursor; only active days issue a lookup
    fn click_cursor(&mut self) {
        if self.current_tab != Tab::Calendar {
            return;
        }
        let AppState::Ready { data } = &self.state else {
            return;
        };
        let view = self
            .memo
            .view(&data.snapshot.contribution_calendar, self.today);
        let dispatcher = self.dispatcher.as_mut();
        let (Some(dispatcher), Some(cell)) = (dispatcher, view.grid.cell_for(self.cursor)) else {
            return;
        };
        if let Some(request_id) = dispatcher.click(cell) {
            tracing::debug!(request_id, cursor = %self.cursor, "clicked day");
        }
    }

    /// Apply loader progress
    pub fn apply_load_event(&mut self, event: LoadEvent) {
        match event {
            LoadEvent::Stage(stage) => {
                if let AppState::Loading { spinner_frame, .. } = self.state {
                    self.state = AppState::Loading {
                        spinner_frame,
                        stage,
                    };
                }
            }
            LoadEvent::Finished(result) => self.apply_data_result(result),
        }
    }

    /// Apply data loading result to app state
    fn apply_data_result(&mut self, result: Result<Box<AppData>, String>) {
        match result {
            Ok(data) => {
                let (dispatcher, rx) = DetailDispatcher::new(Arc::clone(&data.lookup));
                self.dispatcher = Some(dispatcher);
                self.detail_rx = Some(rx);
                self.memo.invalidate();
                self.state = AppState::Ready { data };
                self.refresh_view();
            }
            Err(message) => {
                tracing::error!(%message, "failed to load dashboard data");
                self.state = AppState::Error { message };
            }
        }
    }

    /// Apply every detail response that has arrived, in arrival order
    pub fn poll_details(&mut self) {
        let Some(rx) = &self.detail_rx else {
            return;
        };
        while let Ok(response) = rx.try_recv() {
            if let Some(workout) = response.into_workout() {
                self.detail = Some(workout);
            }
        }
    }

    /// Follow the clock across midnight unless `today` is pinned
    fn refresh_today(&mut self) {
        if self.fixed_today.is_some() {
            return;
        }
        let now = Local::now().date_naive();
        if now != self.today {
            if self.cursor == self.today {
                self.cursor = now;
            }
            self.today = now;
            self.cursor = self.cursor.clamp(self.window_start(), self.today);
        }
    }

    /// Rebuild the memoized calendar if its inputs changed
    fn refresh_view(&mut self) {
        if let AppState::Ready { data } = &self.state {
            self.memo
                .view(&data.snapshot.contribution_calendar, self.today);
        }
    }

    /// Update spinner animation and derived state
    pub fn tick(&mut self) {
        if let AppState::Loading {
            spinner_frame,
            stage,
        } = &self.state
        {
            self.state = AppState::Loading {
                spinner_frame: Spinner::next_frame(*spinner_frame),
                stage: *stage,
            };
        }
        self.refresh_today();
        self.refresh_view();
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Draw the application
    pub fn draw(&mut self, frame: &mut Frame) {
        self.refresh_view();
        frame.render_widget(&*self, frame.area());
    }
}

impl Widget for &App {
    fn render(self, area: Rect, buf: &mut Buffer) {
        match &self.state {
            AppState::Loading {
                spinner_frame,
                stage,
            } => {
                Spinner::new(*spinner_frame, *stage, self.theme).render(area, buf);
            }
            AppState::Ready { data } => {
                match self.current_tab {
                    Tab::Calendar => {
                        if let Some(view) = self.memo.current() {
                            CalendarPage::new(
                                view,
                                &data.legend,
                                data.snapshot.streak(),
                                self.cursor,
                                self.theme,
                            )
                            .with_tab(self.current_tab)
                            .render(area, buf);
                        }
                    }
                    Tab::Stats => {
                        StatsView::new(&data.snapshot, self.theme)
                            .with_tab(self.current_tab)
                            .render(area, buf);
                    }
                }

                if let Some(workout) = &self.detail {
                    let popup_area = WorkoutDetailPopup::centered_area(area);
                    WorkoutDetailPopup::new(workout, self.theme).render(popup_area, buf);
                }

                if self.show_help {
                    let popup_area = HelpPopup::centered_area(area);
                    HelpPopup::new(self.theme).render(popup_area, buf);
                }
            }
            AppState::Error { message } => {
                let y = area.y + area.height / 2;
                let text = format!("Error: {}", message);
                let x = area.x + (area.width.saturating_sub(text.len() as u16)) / 2;
                buf.set_string(x, y, &text, Style::default().fg(self.theme.error()));
            }
        }
    }
}

/// Run the TUI application
pub fn run(config: &Config, fixed_today: Option<NaiveDate>) -> anyhow::Result<()> {
    // Detection reads the terminal, so it must happen before raw mode
    let theme = Theme::from_preference(config.theme);
    let mut terminal = ratatui::init();
    let result = run_app(&mut terminal, config.clone(), theme, fixed_today);
    ratatui::restore();
    result
}

/// Load data synchronously (runs on a background thread)
fn load_data_sync(
    config: &Config,
    progress: &mpsc::Sender<LoadEvent>,
) -> Result<Box<AppData>, String> {
    let snapshot = SnapshotLoader::new(&config.data_file)
        .load()
        .map_err(|e| e.to_string())?;

    let _ = progress.send(LoadEvent::Stage(LoadingStage::Building));
    let lookup = lookup_for(config, &snapshot.workouts).map_err(|e| e.to_string())?;
    Ok(Box::new(AppData::new(snapshot, lookup)))
}

fn run_app(
    terminal: &mut DefaultTerminal,
    config: Config,
    theme: Theme,
    fixed_today: Option<NaiveDate>,
) -> anyhow::Result<()> {
    let mut app = App::new(theme, fixed_today);

    // Spawn background thread for data loading
    let (load_tx, load_rx) = mpsc::channel();
    thread::spawn(move || {
        let result = load_data_sync(&config, &load_tx);
        let _ = load_tx.send(LoadEvent::Finished(result));
    });

    loop {
        terminal.draw(|frame| app.draw(frame))?;

        if app.should_quit() {
            break;
        }

        // Check for loader progress (non-blocking)
        if matches!(app.state, AppState::Loading { .. }) {
            while let Ok(event) = load_rx.try_recv() {
                app.apply_load_event(event);
            }
        }

        app.poll_details();

        // Poll for events with 100ms timeout for spinner animation
        if event::poll(Duration::from_millis(100))? {
            app.handle_event(event::read()?);
        } else {
            app.tick();
        }
    }

    Ok(())
}
