//! Paginated, sortable lead table.
//!
//! A `DataTable` is one widget instance: the rows it was built with plus its
//! own paging and ordering state. Instances are only ever created and torn
//! down by `DataTableFactory`, driven by `common::table::TableLifecycle`; the
//! dashboard never swaps the rows of a live instance.

mod view;

use common::table::{TableConfig, TableFactory};
use common::view_model::{LeadRow, SortColumn};
use log::debug;

pub use view::{avatar, DataTableView};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Ascending,
    Descending,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DataTable {
    pub id: u32,
    pub config: TableConfig,
    rows: Vec<LeadRow>,
    order: Option<(SortColumn, SortDirection)>,
    page: usize,
}

impl DataTable {
    pub fn new(id: u32, config: TableConfig, rows: Vec<LeadRow>) -> Self {
        Self {
            id,
            config,
            rows,
            order: None,
            page: 0,
        }
    }

    pub fn order(&self) -> Option<(SortColumn, SortDirection)> {
        self.order
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Orders by `column`; clicking the active column again flips direction.
    /// Sorting always returns to the first page.
    pub fn sort_by(&mut self, column: SortColumn) {
        if !self.config.ordering {
            return;
        }
        let direction = match self.order {
            Some((active, SortDirection::Ascending)) if active == column => SortDirection::Descending,
            _ => SortDirection::Ascending,
        };
        self.rows.sort_by(|a, b| {
            let ordering = a
                .sort_key(column)
                .to_lowercase()
                .cmp(&b.sort_key(column).to_lowercase());
            match direction {
                SortDirection::Ascending => ordering,
                SortDirection::Descending => ordering.reverse(),
            }
        });
        self.order = Some((column, direction));
        self.page = 0;
    }

    pub fn page_count(&self) -> usize {
        if !self.config.paging || self.config.page_length == 0 || self.rows.is_empty() {
            1
        } else {
            self.rows.len().div_ceil(self.config.page_length)
        }
    }

    pub fn go_to(&mut self, page: usize) {
        self.page = page.min(self.page_count() - 1);
    }

    fn bounds(&self) -> (usize, usize) {
        if !self.config.paging || self.config.page_length == 0 {
            return (0, self.rows.len());
        }
        let start = (self.page * self.config.page_length).min(self.rows.len());
        let end = (start + self.config.page_length).min(self.rows.len());
        (start, end)
    }

    pub fn visible_rows(&self) -> &[LeadRow] {
        let (start, end) = self.bounds();
        &self.rows[start..end]
    }

    /// `"Showing 26 to 50 of 60 entries"`, when the info line is enabled.
    pub fn info(&self) -> Option<String> {
        if !self.config.info {
            return None;
        }
        let (start, end) = self.bounds();
        let first = if end == 0 { 0 } else { start + 1 };
        Some(format!(
            "Showing {} to {} of {} entries",
            first,
            end,
            self.rows.len()
        ))
    }
}

#[derive(Debug, Default)]
pub struct DataTableFactory {
    built: u32,
}

impl TableFactory for DataTableFactory {
    type Widget = DataTable;

    fn construct(&mut self, config: TableConfig, rows: Vec<LeadRow>) -> DataTable {
        self.built += 1;
        debug!("data table #{}: built with {} rows", self.built, rows.len());
        DataTable::new(self.built, config, rows)
    }

    fn destroy(&mut self, widget: DataTable) {
        debug!("data table #{}: destroyed", widget.id);
    }
}
