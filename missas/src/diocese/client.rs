use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;

use super::parser::parse_results_table;
use crate::config::DioceseConfig;
use crate::error::{MissasError, Result};
use crate::models::{DayToken, MassOccurrence, TimePoint};
use crate::schedule::{normalize_occurrence, MassLookup};

/// HTTP client for the diocese mass search form.
///
/// Each lookup is one form POST with `dia[]` and, optionally,
/// `HorarioInicio`; the site answers with an HTML results table.
#[derive(Clone, Debug)]
pub struct DioceseClient {
    client: Client,
    endpoint: String,
}

impl DioceseClient {
    pub fn new(config: &DioceseConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(config.user_agent.clone())
            .build()
            .map_err(|e| MissasError::Internal(format!("Failed to create HTTP client: {e}")))?;

        Ok(Self {
            client,
            endpoint: config.endpoint.clone(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    fn form_params(day: DayToken, time: Option<TimePoint>) -> Vec<(&'static str, String)> {
        let mut params = vec![("dia[]", day.as_str().to_string())];
        if let Some(time) = time {
            params.push(("HorarioInicio", time.to_string()));
        }
        params
    }
}

#[async_trait]
impl MassLookup for DioceseClient {
    async fn fetch(&self, day: DayToken, time: Option<TimePoint>) -> Result<Vec<MassOccurrence>> {
        let response = self
            .client
            .post(&self.endpoint)
            .form(&Self::form_params(day, time))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::warn!(%day, ?time, status = status.as_u16(), "Diocese search failed");
            return Err(MissasError::Remote {
                status: status.as_u16(),
                message: body.chars().take(200).collect(),
            });
        }

        let html = response.text().await?;
        let items: Vec<MassOccurrence> = parse_results_table(&html)?
            .into_iter()
            .map(normalize_occurrence)
            .collect();

        tracing::debug!(%day, ?time, count = items.len(), "Diocese search returned rows");
        Ok(items)
    }
}
