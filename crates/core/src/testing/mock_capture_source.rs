//! In-memory capture source for testing.

use std::sync::atomic::{AtomicUsize, Ordering};

use crate::capture::{
    CaptureError, CaptureRecord, CaptureSource, CaptureTable, Column, Schema,
};

/// Mock implementation of the CaptureSource trait.
///
/// Serves a fixed set of records, counts loads, and can be told to fail
/// as if a required column were absent.
pub struct MockCaptureSource {
    schema: Schema,
    records: Vec<CaptureRecord>,
    fail_missing: Option<Column>,
    loads: AtomicUsize,
}

impl MockCaptureSource {
    /// Source with every column present.
    pub fn new(records: Vec<CaptureRecord>) -> Self {
        Self::with_schema(Schema::full(), records)
    }

    pub fn with_schema(schema: Schema, records: Vec<CaptureRecord>) -> Self {
        Self {
            schema,
            records,
            fail_missing: None,
            loads: AtomicUsize::new(0),
        }
    }

    /// Makes every load fail with `MissingColumn(column)`.
    pub fn failing(mut self, column: Column) -> Self {
        self.fail_missing = Some(column);
        self
    }

    pub fn load_count(&self) -> usize {
        self.loads.load(Ordering::SeqCst)
    }
}

impl CaptureSource for MockCaptureSource {
    fn name(&self) -> &str {
        "mock"
    }

    fn load(&self) -> Result<CaptureTable, CaptureError> {
        self.loads.fetch_add(1, Ordering::SeqCst);
        if let Some(column) = self.fail_missing {
            return Err(CaptureError::MissingColumn(column));
        }
        Ok(CaptureTable::new(self.schema.clone(), self.records.clone()))
    }
}
