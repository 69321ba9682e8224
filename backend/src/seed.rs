use tracing::{error, info};

use crate::content::SeedPlan;
use crate::store::{ContentStore, SeedError};

#[derive(Debug, Default, PartialEq)]
pub struct SeedReport {
    pub tables: Vec<&'static str>,
    pub rows: usize,
}

/// Upserts each table in plan order. Stops at the first failure; tables written
/// before it stay written, the rest are left alone.
pub async fn run<S: ContentStore>(store: &S, plan: &SeedPlan) -> Result<SeedReport, SeedError> {
    let mut report = SeedReport::default();
    for seed in &plan.tables {
        let count = seed.rows.as_array().map_or(0, Vec::len);
        info!(table = seed.table, rows = count, "Upserting");
        if let Err(e) = store.upsert(seed.table, seed.on_conflict, &seed.rows).await {
            error!(table = seed.table, "Upsert failed: {}", e);
            return Err(e);
        }
        report.tables.push(seed.table);
        report.rows += count;
    }
    info!(tables = report.tables.len(), rows = report.rows, "Seeding finished");
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;
    use std::sync::Mutex;

    #[derive(Default)]
    struct RecordingStore {
        written: Mutex<Vec<String>>,
        fail_on: Option<&'static str>,
    }

    impl ContentStore for RecordingStore {
        async fn upsert(&self, table: &str, _on_conflict: &str, _rows: &Value) -> Result<(), SeedError> {
            if self.fail_on == Some(table) {
                return Err(SeedError::Upsert {
                    table: table.to_string(),
                    status: 401,
                    body: "invalid service role key".to_string(),
                });
            }
            self.written.lock().unwrap().push(table.to_string());
            Ok(())
        }
    }

    #[tokio::test]
    async fn writes_every_table_in_order() {
        let store = RecordingStore::default();
        let plan = SeedPlan::standard().unwrap();

        let report = run(&store, &plan).await.unwrap();

        let written = store.written.lock().unwrap().clone();
        assert_eq!(
            written,
            vec!["services", "pricing_tiers", "faqs", "site_settings", "pricing_pages"]
        );
        assert_eq!(report.tables.len(), 5);
        assert!(report.rows > 0);
    }

    #[tokio::test]
    async fn failure_keeps_earlier_tables_and_skips_later_ones() {
        let store = RecordingStore {
            fail_on: Some("faqs"),
            ..Default::default()
        };
        let plan = SeedPlan::standard().unwrap();

        let err = run(&store, &plan).await.unwrap_err();

        assert!(matches!(err, SeedError::Upsert { ref table, status: 401, .. } if table == "faqs"));
        let written = store.written.lock().unwrap().clone();
        assert_eq!(written, vec!["services", "pricing_tiers"]);
    }

    #[tokio::test]
    async fn empty_plan_is_a_no_op() {
        let store = RecordingStore::default();
        let report = run(&store, &SeedPlan { tables: vec![] }).await.unwrap();
        assert_eq!(report, SeedReport::default());
        assert!(store.written.lock().unwrap().is_empty());
    }
}
