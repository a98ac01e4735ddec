//! JSON output of a result page: one `ResultView` per estimate, field names
//! as declared on the view so chart code can pick up `comparison.bars`.

use super::view::ResultView;
use crate::estimator::EstimationResult;
use crate::locale::Locale;

pub struct JsonFormatter;

impl JsonFormatter {
    /// Indented `ResultView`, for files and logs
    pub fn format(view: &ResultView) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(view)
    }

    /// Single-line `ResultView`, for line-delimited output
    pub fn format_compact(view: &ResultView) -> Result<String, serde_json::Error> {
        serde_json::to_string(view)
    }

    /// Localize `result` and render it indented
    pub fn format_result(
        result: &EstimationResult,
        locale: Locale,
    ) -> Result<String, serde_json::Error> {
        Self::format(&ResultView::build(result, locale))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::estimator::estimate;
    use crate::locale::Locale;

    #[test]
    fn test_format_json() {
        let result = estimate("Daging", "Nano-Ag", 20.0, 3, 70.0).unwrap();
        let view = ResultView::build(&result, Locale::En);
        let json = JsonFormatter::format(&view).unwrap();

        assert!(json.contains("\"status\": \"fresh\""));
        assert!(json.contains("\"adjusted_shelf_life_days\": 5.0"));
        assert!(json.contains("\"locale\": \"en\""));
        assert!(json.contains("\"label\": \"With Nano\""));
    }

    #[test]
    fn test_format_compact() {
        let result = estimate("Buah", "Nano-clay", 4.0, 2, 85.0).unwrap();
        let view = ResultView::build(&result, Locale::Id);
        let json = JsonFormatter::format_compact(&view).unwrap();

        assert!(!json.contains('\n'));
        let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed["food"], "Buah");
        assert_eq!(parsed["status_label"], "Segar");
        assert_eq!(parsed["recommendations"].as_array().unwrap().len(), 1);
    }

    #[test]
    fn test_format_result_localizes_chart() {
        let result = estimate("Ikan", "Nano-kitosan", 4.0, 2, 90.0).unwrap();
        let json = JsonFormatter::format_result(&result, Locale::Id).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();

        let bars = parsed["comparison"]["bars"].as_array().unwrap();
        assert_eq!(bars.len(), 2);
        assert_eq!(bars[0]["label"], "Tanpa Nano");
        assert_eq!(bars[0]["value"], 3.0);
        assert_eq!(bars[1]["label"], "Dengan Nano");
    }
}
