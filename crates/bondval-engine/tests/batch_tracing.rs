//! Log context of batch runs.
//!
//! Installs a global subscriber, so this file holds a single test.

use std::sync::{Arc, Mutex};

use bondval_core::RawRow;
use bondval_engine::BatchValuator;
use tracing::{Event, Subscriber};
use tracing_subscriber::layer::{Context, SubscriberExt};
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::Layer;

/// Records, for each engine event, whether it was emitted inside the batch span.
#[derive(Clone, Default)]
struct EngineEvents {
    in_batch: Arc<Mutex<Vec<bool>>>,
}

impl<S> Layer<S> for EngineEvents
where
    S: Subscriber + for<'a> LookupSpan<'a>,
{
    fn on_event(&self, event: &Event<'_>, ctx: Context<'_, S>) {
        if event.metadata().target() != "bondval_engine::valuation" {
            return;
        }
        let in_batch = ctx
            .event_scope(event)
            .is_some_and(|mut scope| scope.any(|span| span.name() == "valuation_batch"));
        self.in_batch.lock().unwrap().push(in_batch);
    }
}

fn overflowing_row(id: usize) -> RawRow {
    [
        ("BondID", format!("OVF{id:03}")),
        ("Rate", "100%".to_string()),
        ("FaceValue", "10000000000000000000000000000".to_string()),
        ("PaymentFrequency", "Annual".to_string()),
        ("Rating", "A".to_string()),
        ("Type", "Bond".to_string()),
        ("YearsToMaturity", "100".to_string()),
        ("DiscountFactor", "1".to_string()),
    ]
    .into_iter()
    .collect()
}

#[test]
fn test_parallel_engine_warnings_carry_batch_span() {
    let events = EngineEvents::default();
    tracing::subscriber::set_global_default(tracing_subscriber::registry().with(events.clone()))
        .unwrap();

    let rows: Vec<RawRow> = (0..64).map(overflowing_row).collect();
    let report = BatchValuator::new().with_parallel(true).run(&rows);

    assert_eq!(report.results.len(), 64);
    assert!(report.results.iter().all(|r| r.present_value.is_zero()));

    let in_batch = events.in_batch.lock().unwrap();
    assert_eq!(in_batch.len(), 64);
    assert!(in_batch.iter().all(|&inside| inside));
}
