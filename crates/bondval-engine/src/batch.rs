//! Batch driver.
//!
//! Maps and values an ordered sequence of raw rows. Each row is handled in
//! isolation: a mapping failure is recorded and the batch moves on. Results
//! keep the input order, also when rows are evaluated in parallel.

use std::sync::Arc;

use rayon::prelude::*;
use serde::Serialize;
use tracing::{debug, info, info_span, warn};
use uuid::Uuid;

use bondval_core::{map_row_with, MappingOptions, RawRow, RowFailure, ValuationResult};

use crate::valuation::{StandardValuationEngine, ValuationEngine};

/// Outcome of one batch run.
#[derive(Debug, Clone, Serialize)]
pub struct BatchReport {
    /// Identifier of the run, also recorded on the tracing span.
    pub run_id: Uuid,
    /// Number of input rows.
    pub rows: usize,
    /// One result per successfully mapped row, in input order.
    pub results: Vec<ValuationResult>,
    /// Rows that failed to map, in input order.
    pub failures: Vec<RowFailure>,
}

/// Counts for a batch run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BatchSummary {
    /// Number of input rows.
    pub rows: usize,
    /// Number of valued rows.
    pub valued: usize,
    /// Number of failed rows.
    pub failed: usize,
}

impl BatchReport {
    /// Returns the row counts.
    pub fn summary(&self) -> BatchSummary {
        BatchSummary {
            rows: self.rows,
            valued: self.results.len(),
            failed: self.failures.len(),
        }
    }

    /// Returns true if every row was valued.
    pub fn is_clean(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Runs the mapper and the valuation engine over a batch of rows.
///
/// # Example
///
/// ```rust
/// use bondval_core::RawRow;
/// use bondval_engine::BatchValuator;
///
/// let good: RawRow = [
///     ("BondID", "B1"), ("Rate", "4%"), ("FaceValue", "1000"),
///     ("PaymentFrequency", "Annual"), ("Rating", "A"), ("Type", "Bond"),
///     ("YearsToMaturity", "2"), ("DiscountFactor", "1"),
/// ].into_iter().collect();
/// let mut bad = good.clone();
/// bad.insert("Rating", "XYZ");
///
/// let report = BatchValuator::new().run(&[good, bad]);
/// assert_eq!(report.results.len(), 1);
/// assert_eq!(report.failures[0].row, 2);
/// ```
#[derive(Clone)]
pub struct BatchValuator {
    engine: Arc<dyn ValuationEngine>,
    options: MappingOptions,
    parallel: bool,
}

impl Default for BatchValuator {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for BatchValuator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BatchValuator")
            .field("options", &self.options)
            .field("parallel", &self.parallel)
            .finish_non_exhaustive()
    }
}

impl BatchValuator {
    /// Creates a sequential driver with the standard engine and default
    /// mapping options.
    pub fn new() -> Self {
        Self {
            engine: Arc::new(StandardValuationEngine::new()),
            options: MappingOptions::default(),
            parallel: false,
        }
    }

    /// Uses a different valuation engine.
    #[must_use]
    pub fn with_engine(mut self, engine: Arc<dyn ValuationEngine>) -> Self {
        self.engine = engine;
        self
    }

    /// Sets the mapping options.
    #[must_use]
    pub fn with_options(mut self, options: MappingOptions) -> Self {
        self.options = options;
        self
    }

    /// Evaluates rows on the rayon thread pool.
    #[must_use]
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Maps and values every row.
    pub fn run(&self, rows: &[RawRow]) -> BatchReport {
        let run_id = Uuid::new_v4();
        let span = info_span!("valuation_batch", %run_id, rows = rows.len());
        let _guard = span.enter();

        debug!(parallel = self.parallel, "Starting batch valuation");

        let outcomes: Vec<Result<ValuationResult, RowFailure>> = if self.parallel {
            // Worker threads do not inherit the entered span
            rows.par_iter()
                .enumerate()
                .map(|(idx, row)| span.in_scope(|| self.value_row(idx + 1, row)))
                .collect()
        } else {
            rows.iter()
                .enumerate()
                .map(|(idx, row)| self.value_row(idx + 1, row))
                .collect()
        };

        let mut results = Vec::with_capacity(outcomes.len());
        let mut failures = Vec::new();
        for outcome in outcomes {
            match outcome {
                Ok(result) => results.push(result),
                Err(failure) => {
                    warn!(
                        row = failure.row,
                        bond_id = failure.bond_id.as_deref().unwrap_or(""),
                        field = failure.field,
                        value = %failure.value,
                        "Row skipped: {}",
                        failure.message
                    );
                    failures.push(failure);
                }
            }
        }

        info!(
            valued = results.len(),
            failed = failures.len(),
            "Batch valuation complete"
        );

        BatchReport {
            run_id,
            rows: rows.len(),
            results,
            failures,
        }
    }

    fn value_row(&self, row_number: usize, row: &RawRow) -> Result<ValuationResult, RowFailure> {
        map_row_with(row, &self.options)
            .map(|record| self.engine.value(&record))
            .map_err(|err| RowFailure::new(row_number, row, err))
    }
}
