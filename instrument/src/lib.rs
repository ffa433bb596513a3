//! Event ledger for economy runs.
//!
//! A `tracing` subscriber that turns info-level events into column tables,
//! one table per event target. Columns appear as fields are first seen, so the
//! schema follows whatever the model logs.
//!
//! ```ignore
//! // In model code:
//! tracing::info!(target: "price", tick, resource = "IRON_ORE", price);
//!
//! // In a test:
//! let (_, ledger) = instrument::capture(|| run_ticks(&mut settlement, 10));
//! let prices = ledger.table("price").unwrap().f64s("price").unwrap();
//! ```

use std::cell::RefCell;
use std::collections::{BTreeMap, HashMap};

use tracing::field::{Field, Visit};
use tracing::span::{Attributes, Record};
use tracing::{Event, Id, Metadata, Subscriber};

/// One typed column.
#[derive(Debug, Clone, PartialEq)]
pub enum Column {
    U64(Vec<u64>),
    I64(Vec<i64>),
    F64(Vec<f64>),
    Bool(Vec<bool>),
    Str(Vec<String>),
}

impl Column {
    pub fn len(&self) -> usize {
        match self {
            Column::U64(v) => v.len(),
            Column::I64(v) => v.len(),
            Column::F64(v) => v.len(),
            Column::Bool(v) => v.len(),
            Column::Str(v) => v.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Fill with the type's zero value up to `rows`.
    fn pad_to(&mut self, rows: usize) {
        let missing = rows.saturating_sub(self.len());
        if missing == 0 {
            return;
        }
        match self {
            Column::U64(v) => v.resize(rows, 0),
            Column::I64(v) => v.resize(rows, 0),
            Column::F64(v) => v.resize(rows, 0.0),
            Column::Bool(v) => v.resize(rows, false),
            Column::Str(v) => v.resize(rows, String::new()),
        }
    }
}

/// Rows logged under one target. All columns have `rows` entries.
#[derive(Debug, Clone, Default)]
pub struct Table {
    pub columns: BTreeMap<String, Column>,
    pub rows: usize,
}

impl Table {
    fn align(&mut self) {
        for column in self.columns.values_mut() {
            column.pad_to(self.rows);
        }
    }

    pub fn u64s(&self, name: &str) -> Option<&[u64]> {
        match self.columns.get(name)? {
            Column::U64(v) => Some(v),
            _ => None,
        }
    }

    pub fn f64s(&self, name: &str) -> Option<&[f64]> {
        match self.columns.get(name)? {
            Column::F64(v) => Some(v),
            _ => None,
        }
    }

    pub fn strs(&self, name: &str) -> Option<&[String]> {
        match self.columns.get(name)? {
            Column::Str(v) => Some(v),
            _ => None,
        }
    }
}

/// All tables recorded on this thread, keyed by event target.
#[derive(Debug, Clone, Default)]
pub struct Ledger {
    pub tables: HashMap<String, Table>,
}

impl Ledger {
    pub fn table(&self, target: &str) -> Option<&Table> {
        self.tables.get(target)
    }
}

thread_local! {
    static LEDGER: RefCell<Ledger> = RefCell::default();
}

/// Writes one event's fields into the current row of a table.
struct RowVisitor<'a> {
    table: &'a mut Table,
}

impl RowVisitor<'_> {
    fn column(&mut self, field: &Field, empty: impl FnOnce() -> Column) -> &mut Column {
        let rows = self.table.rows;
        self.table
            .columns
            .entry(field.name().to_string())
            .or_insert_with(|| {
                let mut column = empty();
                column.pad_to(rows);
                column
            })
    }
}

impl Visit for RowVisitor<'_> {
    fn record_u64(&mut self, field: &Field, value: u64) {
        if let Column::U64(v) = self.column(field, || Column::U64(Vec::new())) {
            v.push(value);
        }
    }

    fn record_i64(&mut self, field: &Field, value: i64) {
        if let Column::I64(v) = self.column(field, || Column::I64(Vec::new())) {
            v.push(value);
        }
    }

    fn record_f64(&mut self, field: &Field, value: f64) {
        if let Column::F64(v) = self.column(field, || Column::F64(Vec::new())) {
            v.push(value);
        }
    }

    fn record_bool(&mut self, field: &Field, value: bool) {
        if let Column::Bool(v) = self.column(field, || Column::Bool(Vec::new())) {
            v.push(value);
        }
    }

    fn record_str(&mut self, field: &Field, value: &str) {
        if let Column::Str(v) = self.column(field, || Column::Str(Vec::new())) {
            v.push(value.to_string());
        }
    }

    fn record_debug(&mut self, field: &Field, value: &dyn std::fmt::Debug) {
        self.record_str(field, &format!("{value:?}"));
    }
}

/// Subscriber collecting info-level events into the thread-local ledger.
/// Spans are ignored.
pub struct LedgerSubscriber;

impl Subscriber for LedgerSubscriber {
    fn enabled(&self, metadata: &Metadata<'_>) -> bool {
        metadata.is_event() && *metadata.level() <= tracing::Level::INFO
    }

    fn new_span(&self, _span: &Attributes<'_>) -> Id {
        Id::from_u64(1)
    }

    fn record(&self, _span: &Id, _values: &Record<'_>) {}

    fn record_follows_from(&self, _span: &Id, _follows: &Id) {}

    fn event(&self, event: &Event<'_>) {
        let target = event.metadata().target().to_string();
        LEDGER.with(|ledger| {
            let mut ledger = ledger.borrow_mut();
            let table = ledger.tables.entry(target).or_default();
            event.record(&mut RowVisitor { table: &mut *table });
            table.rows += 1;
            // Columns this event did not mention get a zero value
            table.align();
        });
    }

    fn enter(&self, _span: &Id) {}

    fn exit(&self, _span: &Id) {}
}

/// Take everything recorded on this thread, leaving the ledger empty.
pub fn drain() -> Ledger {
    LEDGER.with(|ledger| std::mem::take(&mut *ledger.borrow_mut()))
}

pub fn clear() {
    LEDGER.with(|ledger| *ledger.borrow_mut() = Ledger::default());
}

/// Run `f` with [`LedgerSubscriber`] as the thread's default subscriber and
/// return its result together with the events it logged.
pub fn capture<R>(f: impl FnOnce() -> R) -> (R, Ledger) {
    clear();
    let out = tracing::subscriber::with_default(LedgerSubscriber, f);
    (out, drain())
}

// === Polars Integration ===

use polars::prelude::*;

impl Table {
    pub fn to_dataframe(&self) -> PolarsResult<DataFrame> {
        let columns = self
            .columns
            .iter()
            .map(|(name, column)| match column {
                Column::U64(v) => polars::prelude::Column::new(name.into(), v),
                Column::I64(v) => polars::prelude::Column::new(name.into(), v),
                Column::F64(v) => polars::prelude::Column::new(name.into(), v),
                Column::Bool(v) => polars::prelude::Column::new(name.into(), v),
                Column::Str(v) => polars::prelude::Column::new(name.into(), v),
            })
            .collect();
        DataFrame::new(columns)
    }
}

impl Ledger {
    /// One DataFrame per target; tables polars rejects are skipped.
    pub fn to_dataframes(&self) -> HashMap<String, DataFrame> {
        self.tables
            .iter()
            .filter_map(|(target, table)| Some((target.clone(), table.to_dataframe().ok()?)))
            .collect()
    }
}
