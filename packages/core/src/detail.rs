//! Detail page data pipeline: fetch one job by id and publish it.

use crate::{BoardError, BoardStore, Job, Notifier};

/// Remote source of individual job postings.
#[allow(async_fn_in_trait)]
pub trait JobSource {
    /// Fetch a single job by its route id. Fails with `NotFound` or `Network`.
    ///
    /// Ids that do not name a posting, malformed ones included, are `NotFound`.
    async fn fetch_job(&self, id: &str) -> Result<Job, BoardError>;
}

/// Disposition of the detail page's fetch.
///
/// Moves only from `Loading` to `Error` or `Ready`; a new id starts over at `Loading`.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum DetailPhase {
    #[default]
    Loading,
    Error(BoardError),
    Ready(Job),
}

impl DetailPhase {
    pub fn job(&self) -> Option<&Job> {
        match self {
            DetailPhase::Ready(job) => Some(job),
            _ => None,
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, DetailPhase::Loading)
    }
}

/// Handle for one fetch. Only the most recently issued ticket may settle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadTicket {
    generation: u64,
    raw_id: String,
}

impl LoadTicket {
    /// The requested identifier, as it appeared in the route.
    pub fn raw_id(&self) -> &str {
        &self.raw_id
    }
}

/// What happened when a fetch result was handed back to the controller.
#[derive(Debug, Clone, PartialEq)]
pub enum Settled {
    Ready(Job),
    Failed(BoardError),
    /// A newer request was issued while this one was in flight.
    Stale,
}

/// Owns the detail page's phase for the lifetime of one visit.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DetailController {
    generation: u64,
    requested: Option<String>,
    phase: DetailPhase,
}

impl DetailController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> &DetailPhase {
        &self.phase
    }

    /// The id of the most recent request, if it had one.
    pub fn requested_id(&self) -> Option<&str> {
        self.requested.as_deref()
    }

    pub fn is_current(&self, ticket: &LoadTicket) -> bool {
        ticket.generation == self.generation
    }

    /// Start a visit for `raw_id`, invalidating any fetch still in flight.
    ///
    /// An empty id leaves the page loading and returns `MissingIdentifier`.
    pub fn begin(&mut self, raw_id: &str) -> Result<LoadTicket, BoardError> {
        self.generation += 1;
        self.phase = DetailPhase::Loading;

        let raw_id = raw_id.trim();
        if raw_id.is_empty() {
            self.requested = None;
            return Err(BoardError::MissingIdentifier);
        }

        self.requested = Some(raw_id.to_string());
        Ok(LoadTicket {
            generation: self.generation,
            raw_id: raw_id.to_string(),
        })
    }

    /// Apply a fetch result if `ticket` is still the latest request.
    ///
    /// On success the job is published to `store`. On failure the previous
    /// visit's job is cleared from `store` and one error toast is raised.
    /// Stale results change nothing.
    pub fn settle<N: Notifier + ?Sized>(
        &mut self,
        ticket: &LoadTicket,
        result: Result<Job, BoardError>,
        store: &mut BoardStore,
        notifier: &N,
    ) -> Settled {
        if !self.is_current(ticket) {
            tracing::debug!(
                "Dropping stale result for job {} (superseded by {:?})",
                ticket.raw_id,
                self.requested
            );
            return Settled::Stale;
        }

        match result {
            Ok(job) => {
                store.publish_current_job(job.clone());
                self.phase = DetailPhase::Ready(job.clone());
                Settled::Ready(job)
            }
            Err(e) => {
                tracing::warn!("Failed to load job {}: {}", ticket.raw_id, e);
                store.clear_current_job();
                notifier.error(&e.to_string());
                self.phase = DetailPhase::Error(e.clone());
                Settled::Failed(e)
            }
        }
    }
}

/// Issue the single fetch for `ticket`.
pub async fn fetch_detail<S: JobSource + ?Sized>(
    source: &S,
    ticket: &LoadTicket,
) -> Result<Job, BoardError> {
    source.fetch_job(&ticket.raw_id).await
}
