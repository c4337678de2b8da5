//! Catalog query orchestration.
//!
//! Switches between browsing the local catalog and searching the external
//! metadata service, and owns the currently visible result list.
//!
//! Requests are identified by a [`Ticket`]. Every new request supersedes all
//! earlier ones, whatever their mode, so a response is applied only if its
//! ticket is still the latest when it resolves. Responses that resolve out of
//! order are dropped instead of overwriting newer results.

use super::classifier::tag_all;
use crate::models::record::{RawRecord, TaggedRecord};
use crate::services::backend::CatalogSource;
use crate::Result;
use std::sync::{Arc, Mutex, MutexGuard};

/// Which collaborator a request is addressed to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueryMode {
    /// Local catalog listing.
    Local,
    /// External metadata search.
    Search,
}

/// Why the orchestrator ended up in the failed state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryFailure {
    /// The search succeeded but matched nothing.
    NoMatches { query: String },
    /// A fetch failed. Retrying is left to the user.
    Fetch { message: String },
}

impl std::fmt::Display for QueryFailure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            QueryFailure::NoMatches { query } => write!(f, "No results found for \"{}\".", query),
            QueryFailure::Fetch { message } => write!(f, "{}", message),
        }
    }
}

/// Orchestrator state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryState {
    Loading,
    LocalListing,
    SearchResults,
    Failed(QueryFailure),
}

/// Identifies one issued request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket {
    generation: u64,
    mode: QueryMode,
}

impl Ticket {
    /// Mode the request was issued for.
    pub fn mode(&self) -> QueryMode {
        self.mode
    }
}

/// Point-in-time view of the orchestrator for rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    pub state: QueryState,
    pub items: Vec<TaggedRecord>,
    /// Query of the latest search, if the current mode is search.
    pub query: Option<String>,
}

#[derive(Debug)]
struct Inner {
    generation: u64,
    mode: QueryMode,
    query: Option<String>,
    state: QueryState,
    items: Vec<TaggedRecord>,
}

/// Stateful controller over the local listing and external search modes.
pub struct CatalogQueryOrchestrator {
    source: Arc<dyn CatalogSource>,
    inner: Mutex<Inner>,
}

impl CatalogQueryOrchestrator {
    /// Create an orchestrator. Nothing is fetched until [`mount`](Self::mount).
    pub fn new(source: Arc<dyn CatalogSource>) -> Self {
        Self {
            source,
            inner: Mutex::new(Inner {
                generation: 0,
                mode: QueryMode::Local,
                query: None,
                state: QueryState::Loading,
                items: Vec::new(),
            }),
        }
    }

    /// Load the local catalog listing.
    pub async fn mount(&self) -> Result<()> {
        self.load_local().await
    }

    /// Search the external service, replacing the visible list.
    ///
    /// A blank query is ignored. Zero matches is not an error: the state
    /// becomes `Failed(NoMatches)` and `Ok(())` is returned.
    pub async fn submit_search(&self, query: &str) -> Result<()> {
        let query = query.trim();
        if query.is_empty() {
            tracing::debug!("Ignoring blank search query");
            return Ok(());
        }

        let ticket = self.begin(QueryMode::Search, Some(query.to_string()));
        let result = self.source.fetch_external_search(query).await;
        self.complete(ticket, result).map(|_| ())
    }

    /// Leave search mode and reload the local listing.
    pub async fn clear_search(&self) -> Result<()> {
        self.load_local().await
    }

    async fn load_local(&self) -> Result<()> {
        let ticket = self.begin(QueryMode::Local, None);
        let result = self.source.fetch_local_catalog().await;
        self.complete(ticket, result).map(|_| ())
    }

    /// Issue a request: supersede every earlier ticket and enter `Loading`.
    ///
    /// The visible items are kept until the response is applied.
    pub fn begin(&self, mode: QueryMode, query: Option<String>) -> Ticket {
        let mut inner = self.lock();
        inner.generation += 1;
        inner.mode = mode;
        inner.query = query;
        inner.state = QueryState::Loading;

        tracing::debug!("Query #{} issued ({:?})", inner.generation, mode);

        Ticket {
            generation: inner.generation,
            mode,
        }
    }

    /// Apply the response to a request.
    ///
    /// Returns `Ok(false)` when the ticket was superseded and the response
    /// discarded, failures included. A failure on the current ticket clears
    /// the list, enters `Failed(Fetch)` and is returned to the caller.
    pub fn complete(&self, ticket: Ticket, result: Result<Vec<RawRecord>>) -> Result<bool> {
        let mut inner = self.lock();

        if ticket.generation != inner.generation {
            tracing::debug!(
                "Discarding stale response #{} ({:?}), current is #{}",
                ticket.generation,
                ticket.mode,
                inner.generation
            );
            return Ok(false);
        }

        match result {
            Ok(raws) => {
                inner.items = tag_all(&raws);
                inner.state = match ticket.mode {
                    QueryMode::Local => QueryState::LocalListing,
                    QueryMode::Search if inner.items.is_empty() => {
                        QueryState::Failed(QueryFailure::NoMatches {
                            query: inner.query.clone().unwrap_or_default(),
                        })
                    }
                    QueryMode::Search => QueryState::SearchResults,
                };
                tracing::debug!(
                    "Query #{} applied: {} items",
                    ticket.generation,
                    inner.items.len()
                );
                Ok(true)
            }
            Err(e) => {
                inner.items.clear();
                inner.state = QueryState::Failed(QueryFailure::Fetch {
                    message: e.to_string(),
                });
                Err(e)
            }
        }
    }

    /// Current state.
    pub fn state(&self) -> QueryState {
        self.lock().state.clone()
    }

    /// Current mode (of the latest issued request).
    pub fn mode(&self) -> QueryMode {
        self.lock().mode
    }

    /// Currently visible items.
    pub fn items(&self) -> Vec<TaggedRecord> {
        self.lock().items.clone()
    }

    /// Current `(state, items)` pair for rendering.
    pub fn snapshot(&self) -> Snapshot {
        let inner = self.lock();
        Snapshot {
            state: inner.state.clone(),
            items: inner.items.clone(),
            query: match inner.mode {
                QueryMode::Search => inner.query.clone(),
                QueryMode::Local => None,
            },
        }
    }

    fn lock(&self) -> MutexGuard<'_, Inner> {
        // Inner is always left consistent, so a poisoned lock is still usable.
        self.inner.lock().unwrap_or_else(|e| e.into_inner())
    }
}
