//! Unified analytics loading for the pattern screens
//!
//! The chance and sorteo pattern screens share one data-loading path:
//! a `LoadKey` names the entity, an `AnalyticsTab` names the view, and
//! every spawned fetch is tagged with a generation token. A result is
//! applied only while its token is still the latest issued for that tab,
//! so rapid repeated searches cannot interleave stale responses.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use chrono::NaiveDate;
use tokio::sync::mpsc::UnboundedSender;
use tracing::debug;

use crate::client::{ApiClient, PatronsClient, SorteoPatronsClient};
use crate::errors::{ChancesError, Result};
use crate::models::{Pattern, SorteoPattern};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PatternScope {
    Chance,
    Sorteo,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AnalyticsTab {
    #[default]
    RedundancyInDate,
    NotPlayed,
    VoidPatterns,
    ColumnTotals,
}

impl AnalyticsTab {
    fn index(self) -> usize {
        match self {
            AnalyticsTab::RedundancyInDate => 0,
            AnalyticsTab::NotPlayed => 1,
            AnalyticsTab::VoidPatterns => 2,
            AnalyticsTab::ColumnTotals => 3,
        }
    }
}

/// Identifies the entity a tab loads for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadKey {
    pub scope: PatternScope,
    pub date: NaiveDate,
    /// Only meaningful for chance patterns.
    pub jornada: Option<String>,
    /// Pattern id, required by the void-patterns tab.
    pub id: Option<i64>,
}

#[derive(Debug, Clone)]
pub enum AnalyticsData {
    Patterns(Vec<Pattern>),
    SorteoPatterns(Vec<SorteoPattern>),
    NotPlayed(Vec<String>),
    ColumnTotals(Vec<u32>),
}

/// One finished fetch, delivered over the loader's channel.
#[derive(Debug)]
pub struct AnalyticsOutcome {
    pub scope: PatternScope,
    pub tab: AnalyticsTab,
    pub generation: u64,
    pub result: Result<AnalyticsData>,
}

/// Monotonic token source. `issue` invalidates everything issued before.
#[derive(Debug, Default)]
pub struct Generation {
    counter: AtomicU64,
}

impl Generation {
    pub fn issue(&self) -> u64 {
        self.counter.fetch_add(1, Ordering::SeqCst) + 1
    }

    pub fn is_current(&self, token: u64) -> bool {
        self.counter.load(Ordering::SeqCst) == token
    }
}

pub struct AnalyticsLoader {
    api: Arc<ApiClient>,
    tx: UnboundedSender<AnalyticsOutcome>,
    // One token slot per (scope, tab) pair.
    generations: [[Generation; 4]; 2],
}

impl PatternScope {
    fn index(self) -> usize {
        match self {
            PatternScope::Chance => 0,
            PatternScope::Sorteo => 1,
        }
    }
}

impl AnalyticsLoader {
    pub fn new(api: Arc<ApiClient>, tx: UnboundedSender<AnalyticsOutcome>) -> Self {
        Self {
            api,
            tx,
            generations: Default::default(),
        }
    }

    /// Spawn the fetch for `tab` and return its generation token.
    /// Any in-flight fetch for the same (scope, tab) slot is invalidated.
    pub fn request(&self, key: LoadKey, tab: AnalyticsTab) -> u64 {
        let scope = key.scope;
        let generation = self.generations[scope.index()][tab.index()].issue();
        debug!(?scope, ?tab, generation, "analytics fetch");
        let api = self.api.clone();
        let tx = self.tx.clone();
        tokio::spawn(async move {
            let result = fetch(api, &key, tab).await;
            let _ = tx.send(AnalyticsOutcome {
                scope,
                tab,
                generation,
                result,
            });
        });
        generation
    }

    /// True while `generation` is still the latest issued for the slot.
    pub fn is_current(&self, scope: PatternScope, tab: AnalyticsTab, generation: u64) -> bool {
        self.generations[scope.index()][tab.index()].is_current(generation)
    }
}

async fn fetch(api: Arc<ApiClient>, key: &LoadKey, tab: AnalyticsTab) -> Result<AnalyticsData> {
    match key.scope {
        PatternScope::Chance => {
            let client = PatronsClient::new(api);
            let jornada = key
                .jornada
                .as_deref()
                .ok_or_else(|| ChancesError::validation("jornada is required"))?;
            match tab {
                AnalyticsTab::RedundancyInDate => Ok(AnalyticsData::Patterns(
                    client.redundancy_in_date(key.date).await?,
                )),
                AnalyticsTab::NotPlayed => Ok(AnalyticsData::NotPlayed(
                    client.numbers_not_played(key.date, jornada).await?,
                )),
                AnalyticsTab::VoidPatterns => {
                    let id = key
                        .id
                        .ok_or_else(|| ChancesError::validation("pattern has no id"))?;
                    Ok(AnalyticsData::Patterns(client.void_in_day(id).await?))
                }
                AnalyticsTab::ColumnTotals => Ok(AnalyticsData::ColumnTotals(
                    client.total_for_column(key.date, jornada).await?,
                )),
            }
        }
        PatternScope::Sorteo => {
            let client = SorteoPatronsClient::new(api);
            match tab {
                AnalyticsTab::RedundancyInDate => Ok(AnalyticsData::SorteoPatterns(
                    client.redundancy_in_date(key.date).await?,
                )),
                AnalyticsTab::NotPlayed => Ok(AnalyticsData::NotPlayed(
                    client.numbers_not_played(key.date).await?,
                )),
                AnalyticsTab::VoidPatterns => {
                    let id = key
                        .id
                        .ok_or_else(|| ChancesError::validation("pattern has no id"))?;
                    Ok(AnalyticsData::SorteoPatterns(client.void_in_day(id).await?))
                }
                AnalyticsTab::ColumnTotals => Ok(AnalyticsData::ColumnTotals(
                    client.total_for_column(key.date).await?,
                )),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;
    use crate::session::SessionStore;
    use tempfile::tempdir;

    #[test]
    fn test_generation_tokens_invalidate_older_issues() {
        let generation = Generation::default();
        let first = generation.issue();
        assert!(generation.is_current(first));

        let second = generation.issue();
        assert!(!generation.is_current(first), "stale token must be dropped");
        assert!(generation.is_current(second));
    }

    #[test]
    fn test_tabs_have_independent_generations() {
        let dir = tempdir().unwrap();
        let session = SessionStore::new(dir.path().join("session.json"));
        let api = ApiClient::new(&AppConfig::default(), session).unwrap();
        let (tx, _rx) = tokio::sync::mpsc::unbounded_channel();
        let loader = AnalyticsLoader::new(api, tx);

        // Tokens are tracked per tab, so issuing for one tab does not
        // invalidate another tab's in-flight fetch.
        let rt = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .unwrap();
        let _guard = rt.enter();

        let key = LoadKey {
            scope: PatternScope::Chance,
            date: chrono::NaiveDate::from_ymd_opt(2024, 5, 20).unwrap(),
            jornada: Some("dia".into()),
            id: Some(1),
        };
        let scope = PatternScope::Chance;
        let g_red = loader.request(key.clone(), AnalyticsTab::RedundancyInDate);
        let g_np = loader.request(key.clone(), AnalyticsTab::NotPlayed);
        assert!(loader.is_current(scope, AnalyticsTab::RedundancyInDate, g_red));
        assert!(loader.is_current(scope, AnalyticsTab::NotPlayed, g_np));

        let g_red2 = loader.request(key, AnalyticsTab::RedundancyInDate);
        assert!(!loader.is_current(scope, AnalyticsTab::RedundancyInDate, g_red));
        assert!(loader.is_current(scope, AnalyticsTab::RedundancyInDate, g_red2));
        assert!(loader.is_current(scope, AnalyticsTab::NotPlayed, g_np));

        // The sorteo slot for the same tab is untouched.
        assert!(!loader.is_current(PatternScope::Sorteo, AnalyticsTab::RedundancyInDate, g_red2));
    }

    #[test]
    fn test_load_key_for_sorteo_has_no_jornada() {
        let key = LoadKey {
            scope: PatternScope::Sorteo,
            date: chrono::NaiveDate::from_ymd_opt(2024, 5, 20).unwrap(),
            jornada: None,
            id: None,
        };
        assert_eq!(key.scope, PatternScope::Sorteo);
        assert!(key.jornada.is_none());
    }
}
