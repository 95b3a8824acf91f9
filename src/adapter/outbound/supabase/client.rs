//! Supabase (PostgREST) settings row.
//!
//! The whole [`AppSettings`] record lives in the `config` JSON column of one
//! row, selected by `id`.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, RequestBuilder};
use serde::{Deserialize, Serialize};
use tracing::debug;
use url::Url;

use crate::domain::settings::AppSettings;
use crate::error::{Error, Result};
use crate::port::outbound::settings::RemoteSettings;

/// Environment variable holding the project URL.
pub const URL_VAR: &str = "SUPABASE_URL";
/// Environment variable holding the anon/service key.
pub const KEY_VAR: &str = "SUPABASE_KEY";

pub const DEFAULT_TABLE: &str = "app_settings";
pub const DEFAULT_ROW_ID: i64 = 1;

/// PostgREST client for the settings row.
#[derive(Debug)]
pub struct Supabase {
    client: Client,
    endpoint: Url,
    key: String,
}

#[derive(Deserialize)]
struct Row {
    config: Option<AppSettings>,
}

#[derive(Serialize)]
struct Patch<'a> {
    config: &'a AppSettings,
}

impl Supabase {
    /// Build a client for `{base}/rest/v1/{table}?id=eq.{row_id}`.
    ///
    /// # Errors
    ///
    /// Returns an error if `base` is not a valid URL.
    pub fn new(
        base: &str,
        key: impl Into<String>,
        table: &str,
        row_id: i64,
        timeout: Duration,
    ) -> Result<Self> {
        let mut base = Url::parse(base)?;
        if !base.path().ends_with('/') {
            let prefix = format!("{}/", base.path());
            base.set_path(&prefix);
        }
        let mut endpoint = base.join(&format!("rest/v1/{table}"))?;
        endpoint
            .query_pairs_mut()
            .append_pair("id", &format!("eq.{row_id}"));

        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| Error::Connection(e.to_string()))?;

        Ok(Self {
            client,
            endpoint,
            key: key.into(),
        })
    }

    /// Build a client from `SUPABASE_URL` and `SUPABASE_KEY`.
    ///
    /// Returns `Ok(None)` when either variable is unset or blank, which
    /// disables the remote copy.
    ///
    /// # Errors
    ///
    /// Returns an error if `SUPABASE_URL` is set but not a valid URL.
    pub fn from_env(table: &str, row_id: i64, timeout: Duration) -> Result<Option<Self>> {
        let var = |name: &str| std::env::var(name).ok().filter(|v| !v.trim().is_empty());
        match (var(URL_VAR), var(KEY_VAR)) {
            (Some(base), Some(key)) => Self::new(&base, key, table, row_id, timeout).map(Some),
            _ => Ok(None),
        }
    }

    #[must_use]
    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    fn authorize(&self, request: RequestBuilder) -> RequestBuilder {
        request
            .header("apikey", &self.key)
            .header("Authorization", format!("Bearer {}", self.key))
    }
}

#[async_trait]
impl RemoteSettings for Supabase {
    fn name(&self) -> &'static str {
        "supabase"
    }

    async fn fetch(&self) -> Result<Option<AppSettings>> {
        let url = self.endpoint.clone();
        debug!(%url, "Fetching settings row");

        let rows = self
            .authorize(self.client.get(url).query(&[("select", "config")]))
            .send()
            .await?
            .error_for_status()
            .map_err(|e| Error::Connection(e.to_string()))?
            .json::<Vec<Row>>()
            .await?;

        Ok(rows.into_iter().next().and_then(|row| row.config))
    }

    async fn push(&self, settings: &AppSettings) -> Result<()> {
        self.authorize(self.client.patch(self.endpoint.clone()))
            .header("Prefer", "return=minimal")
            .json(&Patch { config: settings })
            .send()
            .await?
            .error_for_status()
            .map_err(|e| Error::Connection(e.to_string()))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client(base: &str) -> Supabase {
        Supabase::new(base, "anon", DEFAULT_TABLE, DEFAULT_ROW_ID, Duration::from_secs(5)).unwrap()
    }

    #[test]
    fn endpoint_selects_row_by_id() {
        let supabase = client("https://abc.supabase.co");
        assert_eq!(
            supabase.endpoint().as_str(),
            "https://abc.supabase.co/rest/v1/app_settings?id=eq.1"
        );
    }

    #[test]
    fn endpoint_honours_table_and_row() {
        let supabase = Supabase::new(
            "https://abc.supabase.co/",
            "anon",
            "desk_settings",
            7,
            Duration::from_secs(5),
        )
        .unwrap();
        assert_eq!(supabase.endpoint().path(), "/rest/v1/desk_settings");
        assert_eq!(supabase.endpoint().query(), Some("id=eq.7"));
    }

    #[test]
    fn endpoint_keeps_base_path_prefix() {
        assert_eq!(
            client("https://host.example/proxy").endpoint().as_str(),
            "https://host.example/proxy/rest/v1/app_settings?id=eq.1"
        );
        assert_eq!(
            client("https://host.example/proxy/").endpoint().as_str(),
            "https://host.example/proxy/rest/v1/app_settings?id=eq.1"
        );
    }

    #[test]
    fn invalid_base_url_is_rejected() {
        let result = Supabase::new("not a url", "k", DEFAULT_TABLE, 1, Duration::from_secs(1));
        assert!(matches!(result, Err(Error::Url(_))));
    }

    #[test]
    fn row_deserializes_config_column() {
        let json = r#"[{"config": {
            "profitMargin": 2.5,
            "adminCode": "ADMIN2024",
            "brazilBankDetails": "PIX: x",
            "isManualMode": false,
            "manualRates": {"bybitVes": 545, "bybitBrl": 5.8, "binanceVes": 544, "binanceBrl": 5.82}
        }}]"#;
        let rows: Vec<Row> = serde_json::from_str(json).unwrap();
        let settings = rows.into_iter().next().and_then(|r| r.config).unwrap();
        assert_eq!(settings.brazil_bank_details, "PIX: x");
    }

    #[test]
    fn null_config_reads_as_missing() {
        let rows: Vec<Row> = serde_json::from_str(r#"[{"config": null}]"#).unwrap();
        assert!(rows.into_iter().next().and_then(|r| r.config).is_none());
    }

    #[test]
    fn patch_body_wraps_config() {
        let settings = AppSettings::default();
        let json = serde_json::to_value(Patch { config: &settings }).unwrap();
        assert_eq!(json["config"]["adminCode"], "ADMIN2024");
    }
}
