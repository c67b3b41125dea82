//! Mass search request/response DTOs for the v1 API.
//!
//! Field names keep the Portuguese wire names of the schedule page
//! (`dia`, `horarioInicio`, `resultados`, …).

use serde::{Deserialize, Serialize};

use crate::models::{MassOccurrence, SearchSource, WindowSearch};

/// Request body for `POST /v1/masses:window`.
///
/// Both fields are optional at the JSON level so that a missing value
/// produces a specific validation message instead of a generic decode error.
#[derive(Debug, Clone, Default, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct WindowSearchRequest {
    /// Day of the week: `Domingo`, `Segunda`, `Terca`, `Quarta`, `Quinta`,
    /// `Sexta` or `Sabado` (accented forms are accepted).
    #[schema(example = "Quarta")]
    pub dia: Option<String>,
    /// Start of the one-hour window, `HH:MM`.
    #[schema(example = "08:00")]
    pub horario_inicio: Option<String>,
}

/// Which branch of the search produced `resultados`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, utoipa::ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum ResultSource {
    /// Found within one hour of `horarioBase`.
    Window,
    /// Window was empty; these are the masses of the next slot that has any.
    Fallback,
    /// Nothing found.
    Empty,
}

impl From<SearchSource> for ResultSource {
    fn from(source: SearchSource) -> Self {
        match source {
            SearchSource::Window => ResultSource::Window,
            SearchSource::Fallback => ResultSource::Fallback,
            SearchSource::Empty => ResultSource::Empty,
        }
    }
}

/// One mass in the results list.
#[derive(Debug, Clone, Serialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MassResponse {
    /// Church or chapel name.
    pub nome: String,
    pub bairro: String,
    pub cidade: String,
    /// Start time, `HH:MM`.
    pub inicio: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    /// Google Maps search link for `address`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub maps_url: Option<String>,
}

impl From<MassOccurrence> for MassResponse {
    fn from(item: MassOccurrence) -> Self {
        Self {
            nome: item.name,
            bairro: item.neighborhood,
            cidade: item.city,
            inicio: item.start_time_label,
            address: item.address,
            maps_url: item.maps_url,
        }
    }
}

/// Response for both the window and the upcoming search.
#[derive(Debug, Clone, Serialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct WindowSearchResponse {
    /// Day token the search ran for.
    #[schema(example = "Quarta")]
    pub dia: String,
    /// Requested start time, `HH:MM`.
    #[schema(example = "08:00")]
    pub horario_base: String,
    pub resultados: Vec<MassResponse>,
    pub source: ResultSource,
}

impl From<WindowSearch> for WindowSearchResponse {
    fn from(search: WindowSearch) -> Self {
        Self {
            dia: search.day.to_string(),
            horario_base: search.base_time.to_string(),
            resultados: search.results.into_iter().map(MassResponse::from).collect(),
            source: search.source.into(),
        }
    }
}
