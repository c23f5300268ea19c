//! State machine for one table-viewing session.

use niftyboard_market_data::StockRow;
use tracing::debug;

use crate::fetch::FetchError;
use crate::pagination::{self, PageControl};

/// Lifecycle of one page visit.
///
/// `Loading` issues exactly one fetch; `Ready` is re-entered on every
/// page change without a re-fetch; `Failed` is terminal until the
/// session is reset.
#[derive(Debug)]
pub enum TableState {
    Loading,
    Ready {
        rows: Vec<StockRow>,
        current_page: usize,
    },
    Failed {
        message: String,
    },
}

/// Stamp identifying which fetch a response belongs to.
///
/// A ticket issued before a [`TableSession::reset`] no longer matches
/// the session's generation, so a response that arrives after teardown
/// is discarded instead of applied.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FetchTicket {
    generation: u64,
}

/// A windowed view over the owned row list, ready for rendering.
pub struct ResultPage<'a> {
    pub rows: &'a [StockRow],
    pub number: usize,
    pub total_pages: usize,
    /// 0-based index of the first row, for the running serial column.
    pub offset: usize,
}

/// Owns the request lifecycle and pagination state for one visit.
pub struct TableSession {
    state: TableState,
    generation: u64,
}

impl TableSession {
    /// Start a session in `Loading` and hand out the ticket for the
    /// single fetch it expects.
    pub fn new() -> (Self, FetchTicket) {
        (
            Self {
                state: TableState::Loading,
                generation: 0,
            },
            FetchTicket { generation: 0 },
        )
    }

    pub fn state(&self) -> &TableState {
        &self.state
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.state, TableState::Loading)
    }

    /// Apply the outcome of the fetch issued for `ticket`.
    ///
    /// Transitions at most once per generation; a stale ticket or a
    /// session no longer in `Loading` leaves the state untouched.
    pub fn apply(&mut self, ticket: FetchTicket, outcome: Result<Vec<StockRow>, FetchError>) {
        if ticket.generation != self.generation {
            debug!(
                "Discarding stale fetch result (ticket generation {}, session generation {})",
                ticket.generation, self.generation
            );
            return;
        }
        if !self.is_loading() {
            return;
        }
        self.state = match outcome {
            Ok(rows) => TableState::Ready {
                rows,
                current_page: 1,
            },
            Err(err) => TableState::Failed {
                message: err.message(),
            },
        };
    }

    /// Discard everything and re-enter `Loading` with a fresh ticket.
    pub fn reset(&mut self) -> FetchTicket {
        self.generation += 1;
        self.state = TableState::Loading;
        FetchTicket {
            generation: self.generation,
        }
    }

    /// Navigate to `page`. Out-of-range requests are silently ignored;
    /// that is a design choice, not an omission.
    pub fn go_to_page(&mut self, page: usize) {
        if let TableState::Ready { rows, current_page } = &mut self.state {
            if page >= 1 && page <= pagination::total_pages(rows.len()) {
                *current_page = page;
            }
        }
    }

    pub fn current_page(&self) -> Option<usize> {
        match &self.state {
            TableState::Ready { current_page, .. } => Some(*current_page),
            _ => None,
        }
    }

    pub fn total_pages(&self) -> Option<usize> {
        match &self.state {
            TableState::Ready { rows, .. } => Some(pagination::total_pages(rows.len())),
            _ => None,
        }
    }

    /// The derived Result Page, when the session is `Ready`.
    pub fn page(&self) -> Option<ResultPage<'_>> {
        match &self.state {
            TableState::Ready { rows, current_page } => {
                let bounds = pagination::page_bounds(*current_page, rows.len());
                Some(ResultPage {
                    offset: bounds.start,
                    rows: &rows[bounds],
                    number: *current_page,
                    total_pages: pagination::total_pages(rows.len()),
                })
            }
            _ => None,
        }
    }

    /// Control strip for the current page; empty unless `Ready` with
    /// more than one page.
    pub fn controls(&self) -> Vec<PageControl> {
        match &self.state {
            TableState::Ready { rows, current_page } => {
                pagination::controls(*current_page, pagination::total_pages(rows.len()))
            }
            _ => Vec::new(),
        }
    }
}
