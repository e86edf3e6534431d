//! Analysis Session State
//!
//! Consumer-side lifecycle around the analysis client:
//! - a busy flag allowing one in-flight analysis at a time
//! - the previous result is cleared when a new analysis begins
//! - a generation counter so a response arriving after `clear` or a newer
//!   `begin` is dropped instead of shown

use chrono::{DateTime, Utc};
use tracing::debug;

use crate::render::generate_html;
use crate::types::{AnalysisError, AnalysisResult, FailureKind};

/// Last successful analysis with its derived markup
#[derive(Debug, Clone, PartialEq)]
pub struct GeneratedResult {
    pub data: AnalysisResult,
    pub html: String,
    pub timestamp: DateTime<Utc>,
}

impl GeneratedResult {
    pub fn new(data: AnalysisResult) -> Self {
        let html = generate_html(&data);
        Self {
            data,
            html,
            timestamp: Utc::now(),
        }
    }
}

/// Handle for one in-flight analysis
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnalysisTicket {
    generation: u64,
}

/// Outcome of handing a completed analysis back to the session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Completion {
    /// Result or failure recorded
    Applied,
    /// Ticket no longer current; nothing changed
    Stale,
}

#[derive(Debug, Default)]
pub struct AnalysisSession {
    generation: u64,
    busy: bool,
    current: Option<GeneratedResult>,
    last_failure: Option<FailureKind>,
}

impl AnalysisSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_busy(&self) -> bool {
        self.busy
    }

    pub fn current(&self) -> Option<&GeneratedResult> {
        self.current.as_ref()
    }

    pub fn last_failure(&self) -> Option<FailureKind> {
        self.last_failure
    }

    /// Fresh session with its first analysis already in flight
    pub fn started() -> (Self, AnalysisTicket) {
        let session = Self {
            generation: 1,
            busy: true,
            ..Self::default()
        };
        (session, AnalysisTicket { generation: 1 })
    }

    /// Start an analysis. Returns `None` while another one is in flight.
    pub fn begin(&mut self) -> Option<AnalysisTicket> {
        if self.busy {
            debug!("Analysis already in flight; ignoring new request");
            return None;
        }

        self.generation += 1;
        self.busy = true;
        self.current = None;
        self.last_failure = None;
        Some(AnalysisTicket {
            generation: self.generation,
        })
    }

    /// Record the outcome of the analysis started with `ticket`.
    pub fn complete(
        &mut self,
        ticket: AnalysisTicket,
        outcome: &Result<AnalysisResult, AnalysisError>,
    ) -> Completion {
        if ticket.generation != self.generation {
            debug!(
                "Dropping stale analysis response (generation {} < {})",
                ticket.generation, self.generation
            );
            return Completion::Stale;
        }

        self.busy = false;
        match outcome {
            Ok(result) => self.current = Some(GeneratedResult::new(result.clone())),
            Err(err) => self.last_failure = Some(err.kind()),
        }
        Completion::Applied
    }

    /// Discard the result and any pending analysis.
    pub fn clear(&mut self) {
        self.generation += 1;
        self.busy = false;
        self.current = None;
        self.last_failure = None;
    }
}
