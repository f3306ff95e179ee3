//! Spawned fetch operations
//!
//! Every server call the TUI makes runs as a detached task that reports
//! back over the app's unbounded channel, so the draw loop never blocks
//! on the network. Pattern and astro fetches carry generation tokens;
//! stale completions are dropped when applied.

use std::path::PathBuf;
use std::sync::Arc;

use chrono::NaiveDate;
use tokio::sync::mpsc::UnboundedSender;

use crate::analytics::AnalyticsOutcome;
use crate::client::{
    ApiClient, AstroClient, PatronsClient, SorteoPatronsClient, SorteosClient, TicketsClient,
    UsersClient,
};
use crate::errors::Result;
use crate::models::{
    AstroPatron, Pattern, PatronRedundancy, RedundancyAnalysis, Sorteo, SorteoPatronRedundancy,
    SorteoPattern, Ticket, generated_window,
};

/// Everything a pattern search needs in one shot: the pattern, its
/// concurrencia, and the generator/generated ticket windows.
#[derive(Debug)]
pub struct PatternBundle {
    pub pattern: Pattern,
    pub redundancy: Vec<PatronRedundancy>,
    pub generators: Vec<Ticket>,
    pub generated: Vec<Ticket>,
}

#[derive(Debug)]
pub struct SorteoBundle {
    pub pattern: SorteoPattern,
    pub redundancy: Vec<SorteoPatronRedundancy>,
}

/// Which view to refresh after a mutation succeeds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Refresh {
    Tickets,
    Sorteos,
    PatternSearch,
    SorteoPatternSearch,
    Astro,
    /// Deleted the shown pattern; empty the display instead of refetching.
    ClearPatterns,
    ClearSorteoPatterns,
    None,
}

/// One finished background fetch.
pub enum FetchOutcome {
    Tickets(Result<Vec<Ticket>>),
    Sorteos(Result<Vec<Sorteo>>),
    LoginDone {
        user_name: String,
        result: Result<()>,
    },
    RegisterDone(Result<()>),
    PatternBundle {
        generation: u64,
        result: Result<PatternBundle>,
    },
    SorteoBundle {
        generation: u64,
        result: Result<SorteoBundle>,
    },
    Analytics(AnalyticsOutcome),
    AstroLoaded {
        generation: u64,
        result: Result<(AstroPatron, Vec<Ticket>)>,
    },
    FdgResults(Result<Vec<Pattern>>),
    AnalysisDetail(Result<RedundancyAnalysis>),
    /// CRUD/calculate/upload completion; the message is the toast text.
    ActionDone {
        refresh: Refresh,
        result: Result<String>,
    },
}

pub fn spawn_load_tickets(api: Arc<ApiClient>, tx: UnboundedSender<FetchOutcome>) {
    tokio::spawn(async move {
        let result = TicketsClient::new(api).list().await;
        let _ = tx.send(FetchOutcome::Tickets(result));
    });
}

pub fn spawn_search_tickets(
    api: Arc<ApiClient>,
    tx: UnboundedSender<FetchOutcome>,
    number: String,
) {
    tokio::spawn(async move {
        let result = TicketsClient::new(api).get_by_number(&number).await;
        let _ = tx.send(FetchOutcome::Tickets(result));
    });
}

pub fn spawn_load_sorteos(api: Arc<ApiClient>, tx: UnboundedSender<FetchOutcome>) {
    tokio::spawn(async move {
        let result = SorteosClient::new(api).list().await;
        let _ = tx.send(FetchOutcome::Sorteos(result));
    });
}

pub fn spawn_search_sorteos(
    api: Arc<ApiClient>,
    tx: UnboundedSender<FetchOutcome>,
    number: Option<String>,
    serie: Option<String>,
) {
    tokio::spawn(async move {
        let result = SorteosClient::new(api)
            .search(number.as_deref(), serie.as_deref())
            .await;
        let _ = tx.send(FetchOutcome::Sorteos(result));
    });
}

pub fn spawn_login(
    api: Arc<ApiClient>,
    tx: UnboundedSender<FetchOutcome>,
    user_name: String,
    password: String,
) {
    tokio::spawn(async move {
        let result = UsersClient::new(api)
            .login(&user_name, &password)
            .await
            .map(|_| ());
        let _ = tx.send(FetchOutcome::LoginDone { user_name, result });
    });
}

pub fn spawn_register(
    api: Arc<ApiClient>,
    tx: UnboundedSender<FetchOutcome>,
    user_name: String,
    password: String,
) {
    tokio::spawn(async move {
        let result = UsersClient::new(api).register(&user_name, &password).await;
        let _ = tx.send(FetchOutcome::RegisterDone(result));
    });
}

/// Pattern search: the pattern itself, then concurrencia and the two
/// ticket windows concurrently. Any failure fails the whole bundle so
/// the screen clears rather than showing a partial view.
pub fn spawn_pattern_search(
    api: Arc<ApiClient>,
    tx: UnboundedSender<FetchOutcome>,
    generation: u64,
    date: NaiveDate,
    jornada: String,
) {
    tokio::spawn(async move {
        let result = fetch_pattern_bundle(api, date, &jornada).await;
        let _ = tx.send(FetchOutcome::PatternBundle { generation, result });
    });
}

async fn fetch_pattern_bundle(
    api: Arc<ApiClient>,
    date: NaiveDate,
    jornada: &str,
) -> Result<PatternBundle> {
    let patrons = PatronsClient::new(api.clone());
    let tickets = TicketsClient::new(api);

    let pattern = patrons.search(date, jornada).await?;
    let (gen_date, gen_jornada) = generated_window(date, jornada);

    let (redundancy, generators, generated) = tokio::try_join!(
        patrons.calculate_redundancy(&pattern),
        tickets.get_by_date(date, jornada),
        tickets.get_by_date(gen_date, gen_jornada),
    )?;

    Ok(PatternBundle {
        pattern,
        redundancy,
        generators,
        generated,
    })
}

pub fn spawn_sorteo_pattern_search(
    api: Arc<ApiClient>,
    tx: UnboundedSender<FetchOutcome>,
    generation: u64,
    date: NaiveDate,
) {
    tokio::spawn(async move {
        let client = SorteoPatronsClient::new(api);
        let result: Result<SorteoBundle> = async {
            let pattern = client.search(date).await?;
            let redundancy = client.calculate_redundancy(&pattern).await?;
            Ok(SorteoBundle {
                pattern,
                redundancy,
            })
        }
        .await;
        let _ = tx.send(FetchOutcome::SorteoBundle { generation, result });
    });
}

pub fn spawn_astro_load(
    api: Arc<ApiClient>,
    tx: UnboundedSender<FetchOutcome>,
    generation: u64,
    date: NaiveDate,
    jornada: String,
) {
    tokio::spawn(async move {
        let astro = AstroClient::new(api.clone());
        let tickets = TicketsClient::new(api);
        let result = tokio::try_join!(
            astro.get_by_date(date, &jornada),
            tickets.get_astro_by_date(date, &jornada),
        );
        let _ = tx.send(FetchOutcome::AstroLoaded { generation, result });
    });
}

pub fn spawn_fdg_search(
    api: Arc<ApiClient>,
    tx: UnboundedSender<FetchOutcome>,
    fdg: String,
    jornada: String,
) {
    tokio::spawn(async move {
        let result = PatronsClient::new(api).search_by_fdg(&fdg, &jornada).await;
        let _ = tx.send(FetchOutcome::FdgResults(result));
    });
}

pub fn spawn_analysis(
    api: Arc<ApiClient>,
    tx: UnboundedSender<FetchOutcome>,
    patron1_id: i64,
    patron2_id: i64,
) {
    tokio::spawn(async move {
        let result = PatronsClient::new(api)
            .analyze_redundancy(patron1_id, patron2_id)
            .await;
        let _ = tx.send(FetchOutcome::AnalysisDetail(result));
    });
}

/// Fire a mutation and report a toast message plus which view to reload.
pub fn spawn_action<F>(tx: UnboundedSender<FetchOutcome>, refresh: Refresh, message: &str, fut: F)
where
    F: std::future::Future<Output = Result<()>> + Send + 'static,
{
    let message = message.to_string();
    tokio::spawn(async move {
        let result = fut.await.map(|()| message);
        let _ = tx.send(FetchOutcome::ActionDone { refresh, result });
    });
}

pub fn spawn_upload(
    api: Arc<ApiClient>,
    tx: UnboundedSender<FetchOutcome>,
    refresh: Refresh,
    file: PathBuf,
) {
    tokio::spawn(async move {
        let result = match refresh {
            Refresh::Sorteos => SorteosClient::new(api).upload(&file).await,
            _ => TicketsClient::new(api).upload(&file).await,
        }
        .map(|()| format!("Uploaded {}", file.display()));
        let _ = tx.send(FetchOutcome::ActionDone { refresh, result });
    });
}
