use std::future::Future;

use reqwest::Client;
use serde_json::Value;
use thiserror::Error;
use url::Url;

use crate::config::SeedConfig;

#[derive(Debug, Error)]
pub enum SeedError {
    #[error("upsert into {table} failed with {status}: {body}")]
    Upsert {
        table: String,
        status: u16,
        body: String,
    },
    #[error("request to {table} failed: {source}")]
    Request {
        table: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("could not build endpoint for {table}: {source}")]
    Endpoint {
        table: String,
        #[source]
        source: url::ParseError,
    },
}

/// Somewhere rows can be upserted, one table per call.
pub trait ContentStore {
    fn upsert(
        &self,
        table: &str,
        on_conflict: &str,
        rows: &Value,
    ) -> impl Future<Output = Result<(), SeedError>> + Send;
}

/// PostgREST endpoint of the managed database.
pub struct RestStore {
    client: Client,
    base_url: Url,
    service_role_key: String,
}

impl RestStore {
    pub fn new(config: &SeedConfig) -> Self {
        Self {
            client: Client::new(),
            base_url: config.database_url.clone(),
            service_role_key: config.service_role_key.clone(),
        }
    }

    pub fn endpoint(&self, table: &str, on_conflict: &str) -> Result<Url, SeedError> {
        let mut url = self
            .base_url
            .join(&format!("rest/v1/{}", table))
            .map_err(|source| SeedError::Endpoint {
                table: table.to_string(),
                source,
            })?;
        url.query_pairs_mut().append_pair("on_conflict", on_conflict);
        Ok(url)
    }
}

impl ContentStore for RestStore {
    async fn upsert(&self, table: &str, on_conflict: &str, rows: &Value) -> Result<(), SeedError> {
        let url = self.endpoint(table, on_conflict)?;
        let response = self
            .client
            .post(url)
            .header("apikey", &self.service_role_key)
            .bearer_auth(&self.service_role_key)
            .header("Prefer", "resolution=merge-duplicates,return=minimal")
            .json(rows)
            .send()
            .await
            .map_err(|source| SeedError::Request {
                table: table.to_string(),
                source,
            })?;

        let status = response.status();
        if status.is_success() {
            Ok(())
        } else {
            let body = response.text().await.unwrap_or_default();
            Err(SeedError::Upsert {
                table: table.to_string(),
                status: status.as_u16(),
                body,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store(url: &str) -> RestStore {
        let config = SeedConfig::from_pairs([
            ("SUPABASE_URL", url),
            ("SUPABASE_SERVICE_ROLE_KEY", "secret"),
        ])
        .unwrap();
        RestStore::new(&config)
    }

    #[test]
    fn endpoint_targets_rest_table_with_conflict_column() {
        let url = store("https://abc.supabase.co").endpoint("pricing_tiers", "slug").unwrap();
        assert_eq!(
            url.as_str(),
            "https://abc.supabase.co/rest/v1/pricing_tiers?on_conflict=slug"
        );
    }

    #[test]
    fn endpoint_keeps_trailing_slash_base() {
        let url = store("https://abc.supabase.co/").endpoint("faqs", "slug").unwrap();
        assert_eq!(url.path(), "/rest/v1/faqs");
    }

    #[test]
    fn endpoint_keeps_base_path() {
        let url = store("https://db.example.com/supabase").endpoint("faqs", "slug").unwrap();
        assert_eq!(
            url.as_str(),
            "https://db.example.com/supabase/rest/v1/faqs?on_conflict=slug"
        );
    }
}
