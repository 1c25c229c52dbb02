//! Wire types
//!
//! Serde mappings for the backend's JSON shapes. Field names on the wire
//! are Spanish; the structs carry the English names used across the app.

use chrono::{DateTime, NaiveDate, Utc};
use serde::Deserialize;

/// Aggregation strategy for the summary endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Strategy {
    #[default]
    Mean,
    Median,
}

impl Strategy {
    /// Value of the `estrategia` query parameter.
    pub fn as_query(self) -> &'static str {
        match self {
            Strategy::Mean => "media",
            Strategy::Median => "mediana",
        }
    }

    /// Parse a `<select>` value back into a strategy. Unknown values fall
    /// back to the default.
    pub fn from_query(value: &str) -> Self {
        match value {
            "mediana" => Strategy::Median,
            _ => Strategy::Mean,
        }
    }
}

/// Bearer token envelope returned by both auth endpoints.
#[derive(Debug, Clone, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
}

/// Outcome of one calculation.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct BmiResult {
    #[serde(rename = "imc")]
    pub bmi: f64,
    #[serde(rename = "categoria")]
    pub category: String,
}

/// One stored measurement, as served by `GET /historial`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct HistoryEntry {
    pub id: u32,
    #[serde(rename = "fecha")]
    pub recorded_at: DateTime<Utc>,
    #[serde(rename = "peso")]
    pub weight_kg: f64,
    #[serde(rename = "altura")]
    pub height_m: f64,
    #[serde(rename = "imc")]
    pub bmi: f64,
    #[serde(rename = "resultado")]
    pub category: String,
}

impl HistoryEntry {
    /// Calendar day of the measurement, for range filtering.
    pub fn day(&self) -> NaiveDate {
        self.recorded_at.date_naive()
    }

    /// Date label for chart axes, e.g. `28/09/2025`.
    pub fn date_label(&self) -> String {
        self.recorded_at.format("%d/%m/%Y").to_string()
    }

    /// Full timestamp label for the history table, e.g. `28/09/2025 14:30`.
    pub fn datetime_label(&self) -> String {
        self.recorded_at.format("%d/%m/%Y %H:%M").to_string()
    }
}

/// Count of measurements in one category.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CategoryCount {
    #[serde(rename = "categoria")]
    pub category: String,
    pub count: u32,
}

/// Aggregates served by `GET /estadisticas/summary`. Both statistics are
/// null while the history is empty.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct StatsSummary {
    #[serde(rename = "promedioImc")]
    pub bmi_average: Option<f64>,
    #[serde(rename = "variacionPeso")]
    pub weight_variation: Option<f64>,
    #[serde(rename = "conteoCategorias", default)]
    pub category_counts: Vec<CategoryCount>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strategy_round_trips_through_the_query_value() {
        assert_eq!(Strategy::Mean.as_query(), "media");
        assert_eq!(Strategy::Median.as_query(), "mediana");
        assert_eq!(Strategy::from_query("media"), Strategy::Mean);
        assert_eq!(Strategy::from_query("mediana"), Strategy::Median);
        assert_eq!(Strategy::from_query("bogus"), Strategy::Mean);
        assert_eq!(Strategy::default(), Strategy::Mean);
    }

    #[test]
    fn test_history_entry_decodes_the_spanish_field_names() {
        let json = r#"{
            "id": 7,
            "fecha": "2025-09-28T12:30:00.000Z",
            "peso": 70.5,
            "altura": 1.75,
            "imc": 23.02,
            "resultado": "Normal"
        }"#;

        let entry: HistoryEntry = serde_json::from_str(json).unwrap();
        assert_eq!(entry.id, 7);
        assert_eq!(entry.weight_kg, 70.5);
        assert_eq!(entry.height_m, 1.75);
        assert_eq!(entry.bmi, 23.02);
        assert_eq!(entry.category, "Normal");
        assert_eq!(entry.day(), NaiveDate::from_ymd_opt(2025, 9, 28).unwrap());
        assert_eq!(entry.date_label(), "28/09/2025");
        assert_eq!(entry.datetime_label(), "28/09/2025 12:30");
    }

    #[test]
    fn test_summary_decodes_populated_aggregates() {
        let json = r#"{
            "promedioImc": 23.45,
            "variacionPeso": -1.2,
            "conteoCategorias": [
                { "categoria": "Normal", "count": 4 },
                { "categoria": "Sobrepeso", "count": 2 }
            ]
        }"#;

        let summary: StatsSummary = serde_json::from_str(json).unwrap();
        assert_eq!(summary.bmi_average, Some(23.45));
        assert_eq!(summary.weight_variation, Some(-1.2));
        assert_eq!(summary.category_counts.len(), 2);
        assert_eq!(summary.category_counts[0].category, "Normal");
        assert_eq!(summary.category_counts[0].count, 4);
    }

    #[test]
    fn test_summary_tolerates_nulls_and_missing_counts() {
        let json = r#"{ "promedioImc": null, "variacionPeso": null }"#;

        let summary: StatsSummary = serde_json::from_str(json).unwrap();
        assert_eq!(summary.bmi_average, None);
        assert_eq!(summary.weight_variation, None);
        assert!(summary.category_counts.is_empty());
    }

    #[test]
    fn test_token_envelope_decodes() {
        let token: TokenResponse =
            serde_json::from_str(r#"{ "access_token": "abc.def.ghi" }"#).unwrap();
        assert_eq!(token.access_token, "abc.def.ghi");
    }

    #[test]
    fn test_bmi_result_decodes() {
        let result: BmiResult =
            serde_json::from_str(r#"{ "imc": 22.5, "categoria": "Normal" }"#).unwrap();
        assert_eq!(result.bmi, 22.5);
        assert_eq!(result.category, "Normal");
    }
}
