//! # Tracker Parameters
//!
//! The parameter set that drives a vocabulary tracking run: how many terms
//! to follow, the year range, similarity thresholds, and how yearly results
//! are aggregated. This module owns the schema and its JSON text form; the
//! panel and the form UI only ever see it through [`TrackerParams`].

use std::fmt::{self, Display};

use serde::{Deserialize, Serialize};

mod form;

pub use form::ParamsForm;

/// Term selection algorithm used while tracking a concept through time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Algorithm {
    #[serde(rename = "adaptive")]
    Adaptive,
    #[serde(rename = "non-adaptive")]
    NonAdaptive,
}

impl Algorithm {
    pub const ALL: [Algorithm; 2] = [Algorithm::Adaptive, Algorithm::NonAdaptive];
}

impl Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Algorithm::Adaptive => "Adaptive",
            Algorithm::NonAdaptive => "Non-adaptive",
        };
        write!(f, "{label}")
    }
}

/// How related-term similarities are combined into a term score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BoostMethod {
    #[serde(rename = "sum")]
    Sum,
    #[serde(rename = "max")]
    Max,
}

impl BoostMethod {
    pub const ALL: [BoostMethod; 2] = [BoostMethod::Sum, BoostMethod::Max];
}

impl Display for BoostMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            BoostMethod::Sum => "Sum similarity",
            BoostMethod::Max => "Max similarity",
        };
        write!(f, "{label}")
    }
}

/// Weighing function applied when aggregating yearly vocabularies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WeighFunction {
    Gaussian,
    Linear,
    #[serde(rename = "JSD")]
    Jsd,
}

impl WeighFunction {
    pub const ALL: [WeighFunction; 3] = [
        WeighFunction::Gaussian,
        WeighFunction::Linear,
        WeighFunction::Jsd,
    ];
}

impl Display for WeighFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            WeighFunction::Gaussian => "Gaussian",
            WeighFunction::Linear => "Linear",
            WeighFunction::Jsd => "JSD",
        };
        write!(f, "{label}")
    }
}

/// The full tracker parameter set.
///
/// Serialized as camelCase JSON, which is also the text form the parameter
/// I/O panel shows and accepts. Missing fields fall back to their defaults
/// on import so a partial document is a valid parameter patch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TrackerParams {
    pub max_terms: u32,
    pub max_related_terms: u32,
    pub start_key: String,
    pub end_key: String,
    pub min_sim: f32,
    pub word_boost: f32,
    pub forwards: bool,
    pub boost_method: BoostMethod,
    pub algorithm: Algorithm,
    pub agg_weigh_function: WeighFunction,
    #[serde(rename = "aggWFParam")]
    pub agg_wf_param: f32,
    pub agg_years_in_interval: u32,
    pub agg_words_per_year: u32,
    pub do_cleaning: bool,
}

impl Default for TrackerParams {
    fn default() -> Self {
        Self {
            max_terms: 10,
            max_related_terms: 10,
            start_key: String::new(),
            end_key: String::new(),
            min_sim: 0.4,
            word_boost: 1.0,
            forwards: true,
            boost_method: BoostMethod::Sum,
            algorithm: Algorithm::Adaptive,
            agg_weigh_function: WeighFunction::Gaussian,
            agg_wf_param: 1.0,
            agg_years_in_interval: 5,
            agg_words_per_year: 10,
            do_cleaning: false,
        }
    }
}

impl TrackerParams {
    /// Render the parameter set as pretty-printed JSON.
    pub fn to_json(&self) -> Result<String, String> {
        serde_json::to_string_pretty(self).map_err(|e| format!("Failed to serialize parameters: {e}"))
    }

    /// Decode a parameter set from JSON text.
    pub fn from_json(text: &str) -> Result<Self, String> {
        serde_json::from_str(text).map_err(|e| format!("Failed to parse parameters: {e}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn json_uses_camel_case_keys() {
        let json = TrackerParams::default().to_json().unwrap();
        assert!(json.contains("\"maxTerms\""));
        assert!(json.contains("\"aggWeighFunction\""));
        assert!(!json.contains("max_terms"));
    }

    // The tracker wire format upper-cases the WF abbreviation, which
    // rename_all = "camelCase" alone would emit as `aggWfParam`.
    #[test]
    fn wf_param_keeps_its_wire_spelling() {
        let json = TrackerParams::default().to_json().unwrap();
        assert!(json.contains("\"aggWFParam\""));
        assert!(!json.contains("\"aggWfParam\""));

        let params = TrackerParams::from_json(r#"{"aggWFParam": 3.5}"#).unwrap();
        assert_eq!(params.agg_wf_param, 3.5);
    }

    #[test]
    fn enum_spellings_match_tracker_wire_format() {
        let json = TrackerParams {
            algorithm: Algorithm::NonAdaptive,
            agg_weigh_function: WeighFunction::Jsd,
            ..TrackerParams::default()
        }
        .to_json()
        .unwrap();
        assert!(json.contains("\"non-adaptive\""));
        assert!(json.contains("\"JSD\""));
        assert!(json.contains("\"sum\""));
    }

    #[test]
    fn partial_document_fills_defaults() {
        let params = TrackerParams::from_json(r#"{"maxTerms": 25}"#).unwrap();
        assert_eq!(params.max_terms, 25);
        assert_eq!(params.max_related_terms, 10);
        assert_eq!(params.algorithm, Algorithm::Adaptive);
    }

    #[test]
    fn exported_text_decodes_back() {
        let params = TrackerParams {
            max_terms: 7,
            start_key: "1950_1959".to_string(),
            min_sim: 0.55,
            forwards: false,
            ..TrackerParams::default()
        };
        let decoded = TrackerParams::from_json(&params.to_json().unwrap()).unwrap();
        assert_eq!(decoded, params);
    }

    #[test]
    fn malformed_text_is_rejected() {
        let err = TrackerParams::from_json("{a:}").unwrap_err();
        assert!(err.starts_with("Failed to parse parameters"));
    }
}
