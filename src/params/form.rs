use std::fmt::Display;
use std::str::FromStr;

use super::{Algorithm, BoostMethod, TrackerParams, WeighFunction};

/// Raw edit buffers backing the parameters form.
///
/// Numeric fields stay as the user typed them until Apply parses the whole
/// form into a [`TrackerParams`].
#[derive(Debug, Clone)]
pub struct ParamsForm {
    pub max_terms: String,
    pub max_related_terms: String,
    pub start_key: String,
    pub end_key: String,
    pub min_sim: String,
    pub word_boost: String,
    pub forwards: bool,
    pub boost_method: BoostMethod,
    pub algorithm: Algorithm,
    pub agg_weigh_function: WeighFunction,
    pub agg_wf_param: String,
    pub agg_years_in_interval: String,
    pub agg_words_per_year: String,
    pub do_cleaning: bool,
}

impl ParamsForm {
    pub fn from_params(params: &TrackerParams) -> Self {
        Self {
            max_terms: params.max_terms.to_string(),
            max_related_terms: params.max_related_terms.to_string(),
            start_key: params.start_key.clone(),
            end_key: params.end_key.clone(),
            min_sim: params.min_sim.to_string(),
            word_boost: params.word_boost.to_string(),
            forwards: params.forwards,
            boost_method: params.boost_method,
            algorithm: params.algorithm,
            agg_weigh_function: params.agg_weigh_function,
            agg_wf_param: params.agg_wf_param.to_string(),
            agg_years_in_interval: params.agg_years_in_interval.to_string(),
            agg_words_per_year: params.agg_words_per_year.to_string(),
            do_cleaning: params.do_cleaning,
        }
    }

    /// Parse all buffers into a parameter set, reporting the first invalid
    /// field by name.
    pub fn to_params(&self) -> Result<TrackerParams, String> {
        Ok(TrackerParams {
            max_terms: parse_field(&self.max_terms, "Max terms")?,
            max_related_terms: parse_field(&self.max_related_terms, "Max related terms")?,
            start_key: self.start_key.trim().to_string(),
            end_key: self.end_key.trim().to_string(),
            min_sim: parse_field(&self.min_sim, "Min similarity")?,
            word_boost: parse_field(&self.word_boost, "Word boost")?,
            forwards: self.forwards,
            boost_method: self.boost_method,
            algorithm: self.algorithm,
            agg_weigh_function: self.agg_weigh_function,
            agg_wf_param: parse_field(&self.agg_wf_param, "Weigh function parameter")?,
            agg_years_in_interval: parse_field(&self.agg_years_in_interval, "Years per interval")?,
            agg_words_per_year: parse_field(&self.agg_words_per_year, "Words per year")?,
            do_cleaning: self.do_cleaning,
        })
    }
}

impl Default for ParamsForm {
    fn default() -> Self {
        Self::from_params(&TrackerParams::default())
    }
}

fn parse_field<T>(raw: &str, field: &str) -> Result<T, String>
where
    T: FromStr,
    T::Err: Display,
{
    raw.trim()
        .parse()
        .map_err(|e| format!("Invalid value for {field} (`{}`): {e}", raw.trim()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trips_defaults() {
        let form = ParamsForm::default();
        assert_eq!(form.to_params().unwrap(), TrackerParams::default());
    }

    #[test]
    fn parses_edited_fields() {
        let mut form = ParamsForm::default();
        form.max_terms = " 25 ".to_string();
        form.min_sim = "0.75".to_string();
        form.start_key = "1950_1959".to_string();
        form.forwards = false;

        let params = form.to_params().unwrap();
        assert_eq!(params.max_terms, 25);
        assert_eq!(params.min_sim, 0.75);
        assert_eq!(params.start_key, "1950_1959");
        assert!(!params.forwards);
    }

    #[test]
    fn names_the_invalid_field() {
        let mut form = ParamsForm::default();
        form.max_related_terms = "lots".to_string();

        let err = form.to_params().unwrap_err();
        assert!(err.contains("Max related terms"));
        assert!(err.contains("`lots`"));
    }
}
