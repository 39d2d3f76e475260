//! Lifecycle of the paginated table widget bound to the current view.
//!
//! The widget is never updated in place. Every refresh is a transition into
//! `Empty` or `Populated` that destroys the live instance before constructing
//! the next one, so at most one instance exists at any time and the widget's
//! paging/sort state always belongs to the rows it shows. The price is that
//! pagination goes back to page 1 on every data change.

use log::debug;

use crate::model::lead::LeadRecord;
use crate::view_model::LeadRow;

/// Construction options handed to the widget.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableConfig {
    pub paging: bool,
    pub page_length: usize,
    pub ordering: bool,
    /// The widget's own text search. Always off: search goes through the API.
    pub searching: bool,
    pub info: bool,
    pub empty_message: &'static str,
    /// Placeholder row shown in the empty state.
    pub placeholder: Option<Placeholder>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placeholder {
    pub heading: &'static str,
    pub hint: &'static str,
}

pub const EMPTY_TABLE_MESSAGE: &str = "No users found matching the current filters";

impl TableConfig {
    pub fn populated(page_length: usize) -> Self {
        Self {
            paging: true,
            page_length,
            ordering: true,
            searching: false,
            info: true,
            empty_message: EMPTY_TABLE_MESSAGE,
            placeholder: None,
        }
    }

    pub fn empty() -> Self {
        Self {
            paging: false,
            page_length: 0,
            ordering: false,
            searching: false,
            info: false,
            empty_message: EMPTY_TABLE_MESSAGE,
            placeholder: Some(Placeholder {
                heading: "No users found",
                hint: "Try adjusting your filters or search criteria",
            }),
        }
    }
}

/// Builds and tears down widget instances.
pub trait TableFactory {
    type Widget;

    fn construct(&mut self, config: TableConfig, rows: Vec<LeadRow>) -> Self::Widget;

    fn destroy(&mut self, widget: Self::Widget);
}

/// The two states a bound table can be in, plus "nothing built yet".
#[derive(Debug)]
pub enum TableState<W> {
    Uninitialised,
    Empty(W),
    Populated(W),
}

impl<W> TableState<W> {
    pub fn widget(&self) -> Option<&W> {
        match self {
            TableState::Uninitialised => None,
            TableState::Empty(widget) | TableState::Populated(widget) => Some(widget),
        }
    }

    pub fn widget_mut(&mut self) -> Option<&mut W> {
        match self {
            TableState::Uninitialised => None,
            TableState::Empty(widget) | TableState::Populated(widget) => Some(widget),
        }
    }

    pub fn is_empty_state(&self) -> bool {
        matches!(self, TableState::Empty(_))
    }

    pub fn is_populated(&self) -> bool {
        matches!(self, TableState::Populated(_))
    }
}

pub struct TableLifecycle<F: TableFactory> {
    factory: F,
    state: TableState<F::Widget>,
    page_length: usize,
}

impl<F: TableFactory> TableLifecycle<F> {
    pub fn new(factory: F, page_length: usize) -> Self {
        Self {
            factory,
            state: TableState::Uninitialised,
            page_length,
        }
    }

    pub fn state(&self) -> &TableState<F::Widget> {
        &self.state
    }

    pub fn widget(&self) -> Option<&F::Widget> {
        self.state.widget()
    }

    /// Paging and sorting happen inside the live widget.
    pub fn widget_mut(&mut self) -> Option<&mut F::Widget> {
        self.state.widget_mut()
    }

    pub fn factory(&self) -> &F {
        &self.factory
    }

    /// Rebuilds the widget for `records`: destroy first, then construct.
    pub fn render(&mut self, records: &[LeadRecord]) {
        let previous = std::mem::replace(&mut self.state, TableState::Uninitialised);
        if let TableState::Empty(widget) | TableState::Populated(widget) = previous {
            self.factory.destroy(widget);
        }

        if records.is_empty() {
            debug!("table: rebuilding in empty state");
            let widget = self.factory.construct(TableConfig::empty(), Vec::new());
            self.state = TableState::Empty(widget);
        } else {
            debug!("table: rebuilding with {} rows", records.len());
            let rows = records.iter().map(LeadRow::from_record).collect();
            let widget = self
                .factory
                .construct(TableConfig::populated(self.page_length), rows);
            self.state = TableState::Populated(widget);
        }
    }
}
