//! App state definition and outcome application
//!
//! The `App` owns every screen's view state, the API client, the session
//! store, and the fetch-result channel. Key handlers mutate state and
//! spawn fetches; `drain_fetches` applies completed results between
//! draws, dropping anything whose generation token went stale.

pub mod forms;
mod navigation;
pub mod operations;
pub mod state;

pub use state::{
    AstroScreen, DisplayTab, FilterField, ListScreen, PatternScreen, SearchFocus,
    SorteoPatternScreen,
};

use std::sync::Arc;

use tokio::sync::mpsc::{UnboundedReceiver, UnboundedSender, unbounded_channel};

use crate::analytics::{
    AnalyticsData, AnalyticsLoader, AnalyticsOutcome, AnalyticsTab, Generation, LoadKey,
    PatternScope,
};
use crate::client::ApiClient;
use crate::config::AppConfig;
use crate::errors::{ChancesError, Result};
use crate::models::{Pattern, RedundancyAnalysis, Sorteo, Ticket};
use crate::session::SessionStore;

use forms::FormState;
use operations::{FetchOutcome, Refresh};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CurrentScreen {
    Login,
    Tickets,
    Sorteos,
    Patrones,
    SorteoPatrones,
    Astro,
}

/// What an open form submits to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormTarget {
    Login,
    Register,
    TicketAdd,
    TicketEdit(i64),
    SorteoAdd,
    SorteoEdit(i64),
    PatternAdd,
    PatternEdit(i64),
    Range(PatternScope),
    Fdg,
    TicketUpload,
    SorteoUpload,
}

/// What a delete confirmation deletes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteTarget {
    Ticket(i64),
    Sorteo(i64),
    Pattern(i64),
    SorteoPattern(i64),
}

/// Modal overlay above the current screen.
pub enum Dialog {
    Form {
        target: FormTarget,
        form: FormState,
    },
    DeleteConfirm(DeleteTarget),
    /// Pairwise pattern analysis; `None` while loading.
    Analysis(Option<RedundancyAnalysis>),
    FdgResults {
        patterns: Vec<Pattern>,
        selected: usize,
    },
    Help,
    Exiting,
}

pub struct App {
    pub api: Arc<ApiClient>,
    pub session: Arc<SessionStore>,
    pub loader: AnalyticsLoader,
    pub tx: UnboundedSender<FetchOutcome>,
    rx: UnboundedReceiver<FetchOutcome>,

    pub current_screen: CurrentScreen,
    pub dialog: Option<Dialog>,

    pub tickets: ListScreen<Ticket>,
    pub sorteos: ListScreen<Sorteo>,
    pub patterns: PatternScreen,
    pub sorteo_patterns: SorteoPatternScreen,
    pub astro: AstroScreen,

    pub status_message: String,
    pub error_message: String,

    pub pattern_generation: Generation,
    pub sorteo_pattern_generation: Generation,
    pub astro_generation: Generation,
}

impl App {
    pub fn new(config: &AppConfig) -> Result<App> {
        let session = SessionStore::new(config.session.file.clone());
        session.load();
        let api = ApiClient::new(config, session.clone())?;

        let (tx, rx) = unbounded_channel();
        let analytics_tx = tx.clone();
        let (loader_tx, mut loader_rx) = unbounded_channel::<AnalyticsOutcome>();
        // Forward loader outcomes into the app channel.
        tokio::spawn(async move {
            while let Some(outcome) = loader_rx.recv().await {
                if analytics_tx.send(FetchOutcome::Analytics(outcome)).is_err() {
                    break;
                }
            }
        });
        let loader = AnalyticsLoader::new(api.clone(), loader_tx);

        let current_screen = if session.is_logged_in() {
            CurrentScreen::Tickets
        } else {
            CurrentScreen::Login
        };

        let mut app = App {
            api,
            session,
            loader,
            tx,
            rx,
            current_screen,
            dialog: None,
            tickets: ListScreen::default(),
            sorteos: ListScreen::default(),
            patterns: PatternScreen::default(),
            sorteo_patterns: SorteoPatternScreen::default(),
            astro: AstroScreen::default(),
            status_message: String::new(),
            error_message: String::new(),
            pattern_generation: Generation::default(),
            sorteo_pattern_generation: Generation::default(),
            astro_generation: Generation::default(),
        };

        if app.current_screen == CurrentScreen::Tickets {
            app.reload_tickets();
        } else {
            app.dialog = Some(Dialog::Form {
                target: FormTarget::Login,
                form: App::masked(forms::login_form()),
            });
        }
        Ok(app)
    }

    fn masked(schema: forms::FormSchema) -> FormState {
        let mut form = FormState::new(schema);
        form.mask_input = true;
        form
    }

    pub fn is_admin(&self) -> bool {
        self.session.is_admin()
    }

    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = message.into();
        self.error_message.clear();
    }

    pub fn set_error(&mut self, message: impl Into<String>) {
        self.error_message = message.into();
        self.status_message.clear();
    }

    fn set_api_error(&mut self, err: &ChancesError) {
        self.set_error(err.format_simple());
    }

    /// Apply every completed fetch waiting on the channel.
    pub fn drain_fetches(&mut self) {
        while let Ok(outcome) = self.rx.try_recv() {
            self.apply_outcome(outcome);
        }
    }

    fn apply_outcome(&mut self, outcome: FetchOutcome) {
        match outcome {
            FetchOutcome::Tickets(Ok(tickets)) => {
                let count = tickets.len();
                self.tickets.set_items(tickets);
                self.set_status(format!("Loaded {} tickets", count));
            }
            FetchOutcome::Tickets(Err(e)) => {
                self.tickets.loading = false;
                self.set_api_error(&e);
            }

            FetchOutcome::Sorteos(Ok(sorteos)) => {
                let count = sorteos.len();
                self.sorteos.set_items(sorteos);
                self.set_status(format!("Loaded {} draws", count));
            }
            FetchOutcome::Sorteos(Err(e)) => {
                self.sorteos.loading = false;
                self.set_api_error(&e);
            }

            FetchOutcome::LoginDone { user_name, result } => match result {
                Ok(()) => {
                    self.dialog = None;
                    self.current_screen = CurrentScreen::Tickets;
                    self.set_status(format!("Logged in as {}", user_name));
                    self.reload_tickets();
                }
                Err(e) => self.set_api_error(&e),
            },

            FetchOutcome::RegisterDone(result) => match result {
                Ok(()) => {
                    self.dialog = None;
                    self.set_status("Operator registered");
                }
                Err(e) => self.set_api_error(&e),
            },

            FetchOutcome::PatternBundle { generation, result } => {
                if !self.pattern_generation.is_current(generation) {
                    return;
                }
                match result {
                    Ok(bundle) => {
                        self.patterns.loading = false;
                        self.patterns.pattern = Some(bundle.pattern);
                        self.patterns.redundancy = bundle.redundancy;
                        self.patterns.generators = bundle.generators;
                        self.patterns.generated = bundle.generated;
                        self.patterns.redundancy_selected = 0;
                        self.patterns.display_tab = Some(DisplayTab::Generators);
                        self.set_status("Pattern loaded");
                    }
                    Err(e) => {
                        self.patterns.clear();
                        self.set_api_error(&e);
                    }
                }
            }

            FetchOutcome::SorteoBundle { generation, result } => {
                if !self.sorteo_pattern_generation.is_current(generation) {
                    return;
                }
                match result {
                    Ok(bundle) => {
                        self.sorteo_patterns.loading = false;
                        let date = bundle.pattern.date;
                        let id = bundle.pattern.id;
                        self.sorteo_patterns.pattern = Some(bundle.pattern);
                        self.sorteo_patterns.redundancy = bundle.redundancy;
                        self.sorteo_patterns.redundancy_selected = 0;
                        self.set_status("Pattern loaded");
                        // Column totals and not-played load with the pattern.
                        let key = LoadKey {
                            scope: PatternScope::Sorteo,
                            date,
                            jornada: None,
                            id,
                        };
                        self.sorteo_patterns.analysis_loading = true;
                        self.loader.request(key.clone(), AnalyticsTab::ColumnTotals);
                        self.loader.request(key, AnalyticsTab::NotPlayed);
                    }
                    Err(e) => {
                        self.sorteo_patterns.clear();
                        self.set_api_error(&e);
                    }
                }
            }

            FetchOutcome::Analytics(outcome) => self.apply_analytics(outcome),

            FetchOutcome::AstroLoaded { generation, result } => {
                if !self.astro_generation.is_current(generation) {
                    return;
                }
                match result {
                    Ok((astro, tickets)) => {
                        self.astro.loading = false;
                        self.astro.astro = Some(astro);
                        self.astro.tickets = tickets;
                        self.set_status("Astro pattern loaded");
                    }
                    Err(e) => {
                        self.astro.clear();
                        self.set_api_error(&e);
                    }
                }
            }

            FetchOutcome::FdgResults(result) => match result {
                Ok(patterns) => {
                    self.dialog = Some(Dialog::FdgResults {
                        patterns,
                        selected: 0,
                    });
                }
                Err(e) => self.set_api_error(&e),
            },

            FetchOutcome::AnalysisDetail(result) => match result {
                Ok(analysis) => {
                    if matches!(self.dialog, Some(Dialog::Analysis(None))) {
                        self.dialog = Some(Dialog::Analysis(Some(analysis)));
                    }
                }
                Err(e) => {
                    if matches!(self.dialog, Some(Dialog::Analysis(_))) {
                        self.dialog = None;
                    }
                    self.set_api_error(&e);
                }
            },

            FetchOutcome::ActionDone { refresh, result } => match result {
                Ok(message) => {
                    self.set_status(message);
                    match refresh {
                        Refresh::Tickets => self.reload_tickets(),
                        Refresh::Sorteos => self.reload_sorteos(),
                        Refresh::PatternSearch => self.search_patterns(),
                        Refresh::SorteoPatternSearch => self.search_sorteo_patterns(),
                        Refresh::Astro => self.load_astro(),
                        Refresh::ClearPatterns => self.patterns.clear(),
                        Refresh::ClearSorteoPatterns => self.sorteo_patterns.clear(),
                        Refresh::None => {}
                    }
                }
                Err(e) => self.set_api_error(&e),
            },
        }
    }

    fn apply_analytics(&mut self, outcome: AnalyticsOutcome) {
        if !self
            .loader
            .is_current(outcome.scope, outcome.tab, outcome.generation)
        {
            return;
        }
        match outcome.scope {
            PatternScope::Chance => {
                self.patterns.analysis_loading = false;
                match outcome.result {
                    Ok(AnalyticsData::Patterns(patterns)) => match outcome.tab {
                        AnalyticsTab::VoidPatterns => self.patterns.void_patterns = patterns,
                        _ => self.patterns.redundancy_in_date = patterns,
                    },
                    Ok(AnalyticsData::NotPlayed(numbers)) => self.patterns.not_played = numbers,
                    Ok(AnalyticsData::ColumnTotals(totals)) => {
                        self.patterns.column_totals = totals
                    }
                    Ok(AnalyticsData::SorteoPatterns(_)) => {}
                    Err(e) => {
                        // Failed tab loads clear their view, never show stale data.
                        match outcome.tab {
                            AnalyticsTab::RedundancyInDate => {
                                self.patterns.redundancy_in_date.clear()
                            }
                            AnalyticsTab::NotPlayed => self.patterns.not_played.clear(),
                            AnalyticsTab::VoidPatterns => self.patterns.void_patterns.clear(),
                            AnalyticsTab::ColumnTotals => self.patterns.column_totals.clear(),
                        }
                        self.set_api_error(&e);
                    }
                }
            }
            PatternScope::Sorteo => {
                self.sorteo_patterns.analysis_loading = false;
                match outcome.result {
                    Ok(AnalyticsData::SorteoPatterns(patterns)) => match outcome.tab {
                        AnalyticsTab::VoidPatterns => {
                            self.sorteo_patterns.void_patterns = patterns
                        }
                        _ => self.sorteo_patterns.redundancy_in_date = patterns,
                    },
                    Ok(AnalyticsData::NotPlayed(numbers)) => {
                        self.sorteo_patterns.not_played = numbers
                    }
                    Ok(AnalyticsData::ColumnTotals(totals)) => {
                        self.sorteo_patterns.column_totals = totals
                    }
                    Ok(AnalyticsData::Patterns(_)) => {}
                    Err(e) => {
                        match outcome.tab {
                            AnalyticsTab::RedundancyInDate => {
                                self.sorteo_patterns.redundancy_in_date.clear()
                            }
                            AnalyticsTab::NotPlayed => self.sorteo_patterns.not_played.clear(),
                            AnalyticsTab::VoidPatterns => {
                                self.sorteo_patterns.void_patterns.clear()
                            }
                            AnalyticsTab::ColumnTotals => {
                                self.sorteo_patterns.column_totals.clear()
                            }
                        }
                        self.set_api_error(&e);
                    }
                }
            }
        }
    }

    // ---- Fetch triggers ----

    pub fn reload_tickets(&mut self) {
        self.tickets.loading = true;
        operations::spawn_load_tickets(self.api.clone(), self.tx.clone());
    }

    pub fn reload_sorteos(&mut self) {
        self.sorteos.loading = true;
        operations::spawn_load_sorteos(self.api.clone(), self.tx.clone());
    }

    /// Kick off a pattern search from the screen's search inputs.
    pub fn search_patterns(&mut self) {
        let date = match crate::utils::dates::parse_date(&self.patterns.search_date) {
            Ok(date) => date,
            Err(e) => {
                self.set_error(e.format_simple());
                return;
            }
        };
        let jornada =
            crate::models::JORNADAS[self.patterns.search_jornada % crate::models::JORNADAS.len()];
        self.patterns.loading = true;
        let generation = self.pattern_generation.issue();
        operations::spawn_pattern_search(
            self.api.clone(),
            self.tx.clone(),
            generation,
            date,
            jornada.to_string(),
        );
    }

    pub fn search_sorteo_patterns(&mut self) {
        let date = match crate::utils::dates::parse_date(&self.sorteo_patterns.search_date) {
            Ok(date) => date,
            Err(e) => {
                self.set_error(e.format_simple());
                return;
            }
        };
        self.sorteo_patterns.loading = true;
        let generation = self.sorteo_pattern_generation.issue();
        operations::spawn_sorteo_pattern_search(self.api.clone(), self.tx.clone(), generation, date);
    }

    pub fn load_astro(&mut self) {
        let date = match crate::utils::dates::parse_date(&self.astro.search_date) {
            Ok(date) => date,
            Err(e) => {
                self.set_error(e.format_simple());
                return;
            }
        };
        let jornada = crate::models::ASTRO_JORNADAS
            [self.astro.search_jornada % crate::models::ASTRO_JORNADAS.len()];
        self.astro.loading = true;
        let generation = self.astro_generation.issue();
        operations::spawn_astro_load(
            self.api.clone(),
            self.tx.clone(),
            generation,
            date,
            jornada.to_string(),
        );
    }

    /// Request the analysis tab's data through the unified loader.
    pub fn load_analysis_tab(&mut self, scope: PatternScope, tab: AnalyticsTab) {
        let key = match scope {
            PatternScope::Chance => {
                let Some(pattern) = &self.patterns.pattern else {
                    return;
                };
                self.patterns.analysis_loading = true;
                LoadKey {
                    scope,
                    date: pattern.date,
                    jornada: Some(pattern.jornada.clone()),
                    id: pattern.id,
                }
            }
            PatternScope::Sorteo => {
                let Some(pattern) = &self.sorteo_patterns.pattern else {
                    return;
                };
                self.sorteo_patterns.analysis_loading = true;
                LoadKey {
                    scope,
                    date: pattern.date,
                    jornada: None,
                    id: pattern.id,
                }
            }
        };
        self.loader.request(key, tab);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::SorteoPattern;
    use chrono::NaiveDate;
    use tempfile::tempdir;

    fn test_app(dir: &tempfile::TempDir) -> App {
        let mut config = AppConfig::default();
        config.session.file = dir.path().join("session.json");
        App::new(&config).unwrap()
    }

    fn pattern(date: &str) -> Pattern {
        Pattern {
            id: Some(7),
            date: NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap(),
            jornada: "dia".into(),
            patron_numbers: vec![3, 7, 1, 0, 5, 2, 9, 4, 6, 8],
            fdg: None,
        }
    }

    #[tokio::test]
    async fn test_failed_pattern_fetch_clears_view_and_reports() {
        let dir = tempdir().unwrap();
        let mut app = test_app(&dir);
        app.patterns.pattern = Some(pattern("2024-05-20"));
        app.patterns.redundancy_in_date = vec![pattern("2024-05-19")];
        app.set_status("Pattern loaded");

        let generation = app.pattern_generation.issue();
        app.apply_outcome(FetchOutcome::PatternBundle {
            generation,
            result: Err(ChancesError::api("500: boom")),
        });

        assert!(app.patterns.pattern.is_none());
        assert!(app.patterns.redundancy_in_date.is_empty());
        assert!(!app.patterns.loading);
        assert!(app.error_message.contains("boom"));
        assert!(app.status_message.is_empty());
    }

    #[tokio::test]
    async fn test_failed_sorteo_pattern_fetch_clears_view_and_reports() {
        let dir = tempdir().unwrap();
        let mut app = test_app(&dir);
        app.sorteo_patterns.pattern = Some(SorteoPattern {
            id: Some(3),
            date: NaiveDate::parse_from_str("2024-05-20", "%Y-%m-%d").unwrap(),
            patron_numbers: vec![1, 2, 3, 4, 5, 6, 7, 8, 9, 0],
        });
        app.sorteo_patterns.column_totals = vec![1; 10];

        let generation = app.sorteo_pattern_generation.issue();
        app.apply_outcome(FetchOutcome::SorteoBundle {
            generation,
            result: Err(ChancesError::api("503: down")),
        });

        assert!(app.sorteo_patterns.pattern.is_none());
        assert!(app.sorteo_patterns.column_totals.is_empty());
        assert!(app.error_message.contains("down"));
    }

    // A stale failure must not wipe the newer search's view.
    #[tokio::test]
    async fn test_stale_pattern_failure_leaves_view_alone() {
        let dir = tempdir().unwrap();
        let mut app = test_app(&dir);
        let old = app.pattern_generation.issue();
        let _current = app.pattern_generation.issue();
        app.patterns.pattern = Some(pattern("2024-05-20"));

        app.apply_outcome(FetchOutcome::PatternBundle {
            generation: old,
            result: Err(ChancesError::api("timed out")),
        });

        assert!(app.patterns.pattern.is_some());
        assert!(app.error_message.is_empty());
    }
}
