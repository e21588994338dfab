//! Filter, paginate and summarise the student snapshot.
//!
//! `StudentTable` is the view-state of the students panel: the shared record
//! snapshot, the indices that pass the current filter and the page being shown.
//! It knows nothing about HTTP; handlers build one per request.

use std::fmt;
use std::sync::Arc;

use crate::domain::students::StudentRecord;

/// Wildcard value of the event filter.
pub const ALL_EVENTS: &str = "All Events";
/// Wildcard value of the status filter.
pub const ALL_STATUSES: &str = "All Statuses";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum EventFilter {
    #[default]
    All,
    Named(String),
}

impl EventFilter {
    pub fn parse(value: Option<&str>) -> Self {
        match value {
            None | Some("") | Some(ALL_EVENTS) => EventFilter::All,
            Some(name) => EventFilter::Named(name.to_string()),
        }
    }

    pub fn as_value(&self) -> &str {
        match self {
            EventFilter::All => ALL_EVENTS,
            EventFilter::Named(name) => name,
        }
    }

    fn matches(&self, record: &StudentRecord) -> bool {
        match self {
            EventFilter::All => true,
            EventFilter::Named(name) => record.registered_for == *name,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum StatusFilter {
    #[default]
    All,
    /// Exact match on the status text as stored.
    Label(String),
}

impl StatusFilter {
    pub fn parse(value: Option<&str>) -> Self {
        match value {
            None | Some("") | Some(ALL_STATUSES) => StatusFilter::All,
            Some(label) => StatusFilter::Label(label.to_string()),
        }
    }

    pub fn as_value(&self) -> &str {
        match self {
            StatusFilter::All => ALL_STATUSES,
            StatusFilter::Label(label) => label,
        }
    }

    fn matches(&self, record: &StudentRecord) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Label(label) => record.status_label.as_deref() == Some(label.as_str()),
        }
    }
}

/// Search text plus the two dropdown selections; all three must match.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StudentFilter {
    pub search: String,
    pub event: EventFilter,
    pub status: StatusFilter,
}

impl StudentFilter {
    pub fn from_inputs(
        search: Option<&str>,
        event: Option<&str>,
        status: Option<&str>,
    ) -> Self {
        Self {
            search: search.unwrap_or_default().to_string(),
            event: EventFilter::parse(event),
            status: StatusFilter::parse(status),
        }
    }

    pub fn matches(&self, record: &StudentRecord) -> bool {
        self.matches_search(record) && self.event.matches(record) && self.status.matches(record)
    }

    fn matches_search(&self, record: &StudentRecord) -> bool {
        if self.search.is_empty() {
            return true;
        }
        let needle = self.search.to_lowercase();
        let contains = |value: &str| value.to_lowercase().contains(&needle);

        contains(&record.name)
            || record.email.as_deref().is_some_and(contains)
            || contains(&record.registration_id)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageButton {
    pub number: usize,
    pub is_current: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaginationControls {
    pub previous_disabled: bool,
    pub pages: Vec<PageButton>,
    pub next_disabled: bool,
    pub previous_page: usize,
    pub next_page: usize,
}

/// 1-indexed bounds of the visible slice together with both totals.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CountSummary {
    pub start: usize,
    pub end: usize,
    pub filtered: usize,
    pub total: usize,
}

impl CountSummary {
    pub fn headline(&self) -> String {
        format!(
            "Showing {}-{} of {} students",
            self.start, self.end, self.filtered
        )
    }
}

impl fmt::Display for CountSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (Total: {})", self.headline(), self.total)
    }
}

#[derive(Debug, Clone)]
pub struct StudentTable {
    all: Arc<[StudentRecord]>,
    filtered: Vec<usize>,
    filter: StudentFilter,
    current_page: usize,
    page_size: usize,
}

impl StudentTable {
    pub fn new(all: Arc<[StudentRecord]>, page_size: usize) -> Self {
        let mut table = Self {
            all,
            filtered: Vec::new(),
            filter: StudentFilter::default(),
            current_page: 1,
            page_size: page_size.max(1),
        };
        table.apply_filter(StudentFilter::default());
        table
    }

    /// Recompute the filtered rows from the full snapshot and return to page 1.
    pub fn apply_filter(&mut self, filter: StudentFilter) {
        self.filtered = self
            .all
            .iter()
            .enumerate()
            .filter(|(_, record)| filter.matches(record))
            .map(|(index, _)| index)
            .collect();
        self.filter = filter;
        self.current_page = 1;
    }

    pub fn previous(&mut self) {
        self.go_to(self.current_page.saturating_sub(1));
    }

    pub fn next(&mut self) {
        self.go_to(self.current_page + 1);
    }

    /// Move to `page`, clamped to the pages that exist.
    pub fn go_to(&mut self, page: usize) {
        self.current_page = page.clamp(1, self.total_pages().max(1));
    }

    pub fn filter(&self) -> &StudentFilter {
        &self.filter
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn total_pages(&self) -> usize {
        self.filtered.len().div_ceil(self.page_size)
    }

    pub fn visible_rows(&self) -> impl Iterator<Item = &StudentRecord> + '_ {
        let start = (self.current_page - 1) * self.page_size;
        self.filtered
            .iter()
            .skip(start)
            .take(self.page_size)
            .map(|&index| &self.all[index])
    }

    /// `None` when everything fits on a single page.
    pub fn pagination(&self) -> Option<PaginationControls> {
        let total_pages = self.total_pages();
        if total_pages <= 1 {
            return None;
        }

        let pages = (1..=total_pages)
            .map(|number| PageButton {
                number,
                is_current: number == self.current_page,
            })
            .collect();

        Some(PaginationControls {
            previous_disabled: self.current_page == 1,
            pages,
            next_disabled: self.current_page == total_pages,
            previous_page: self.current_page.saturating_sub(1).max(1),
            next_page: (self.current_page + 1).min(total_pages),
        })
    }

    pub fn count_summary(&self) -> CountSummary {
        let filtered = self.filtered.len();
        let (start, end) = if filtered == 0 {
            (0, 0)
        } else {
            let start = (self.current_page - 1) * self.page_size + 1;
            let end = (self.current_page * self.page_size).min(filtered);
            (start, end)
        };

        CountSummary {
            start,
            end,
            filtered,
            total: self.all.len(),
        }
    }
}
