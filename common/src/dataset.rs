//! Baseline and current views of the lead list.
//!
//! `DatasetView` is replaced wholesale by pure update functions; nothing ever
//! patches individual records. `DatasetStore` wraps it with the request token
//! discipline that keeps out-of-order responses from overwriting newer ones.

use crate::model::lead::LeadRecord;

/// Issued per list request. Tokens grow monotonically within a store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RequestToken(u64);

/// What a list response replaces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadKind {
    /// Unfiltered load: replaces baseline and current.
    All,
    /// Filtered load: replaces current only.
    Filtered,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct DatasetView {
    baseline: Vec<LeadRecord>,
    current: Vec<LeadRecord>,
}

impl DatasetView {
    /// Last unfiltered load. Only used for "N of M" reporting.
    pub fn baseline(&self) -> &[LeadRecord] {
        &self.baseline
    }

    /// Last successful result; what statistics and the table read.
    pub fn current(&self) -> &[LeadRecord] {
        &self.current
    }

    /// Result of a full load: both sequences become `records`, order kept.
    pub fn with_all(self, records: Vec<LeadRecord>) -> Self {
        Self {
            current: records.clone(),
            baseline: records,
        }
    }

    /// Result of a filtered load: `current` becomes `records`, baseline kept.
    pub fn with_current(self, records: Vec<LeadRecord>) -> Self {
        Self {
            baseline: self.baseline,
            current: records,
        }
    }

    /// e.g. `"12 of 40 users"`.
    pub fn count_label(&self) -> String {
        format!("{} of {} users", self.current.len(), self.baseline.len())
    }
}

/// How a completed list response was handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Completion {
    Applied,
    /// A newer request was issued after this one; the response was dropped.
    Stale,
}

#[derive(Debug, Default)]
pub struct DatasetStore {
    view: DatasetView,
    issued: u64,
}

impl DatasetStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn view(&self) -> &DatasetView {
        &self.view
    }

    /// Issues the token for a new list request, superseding all earlier ones.
    pub fn begin(&mut self) -> RequestToken {
        self.issued += 1;
        RequestToken(self.issued)
    }

    pub fn is_latest(&self, token: RequestToken) -> bool {
        token.0 == self.issued
    }

    /// Applies a successful response if `token` is still the latest.
    pub fn complete(
        &mut self,
        token: RequestToken,
        kind: LoadKind,
        records: Vec<LeadRecord>,
    ) -> Completion {
        if !self.is_latest(token) {
            return Completion::Stale;
        }
        let view = std::mem::take(&mut self.view);
        self.view = match kind {
            LoadKind::All => view.with_all(records),
            LoadKind::Filtered => view.with_current(records),
        };
        Completion::Applied
    }
}
