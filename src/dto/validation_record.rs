use crate::common::*;

#[doc = r#"
    One validation run of a single expectation, as stored in the validation
    index.

    `result` carries one of two payload shapes depending on the expectation's
    result type: per-row expectations report `unexpected_percent`, aggregate
    expectations report `observed_value`. Both are kept optional here and the
    series builder decides which one a given result type requires.
"#]
#[derive(Debug, Clone, Serialize, Deserialize, Getters, new)]
#[getset(get = "pub")]
pub struct ValidationRecord {
    pub run_date: String,
    pub success: bool,
    #[serde(default)]
    pub result: ValidationResult,
    #[serde(default)]
    pub expectation_config: ExpectationConfig,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, Getters, new)]
#[getset(get = "pub")]
pub struct ValidationResult {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unexpected_percent: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub observed_value: Option<f64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, Getters, new)]
#[getset(get = "pub")]
pub struct ExpectationConfig {
    #[serde(default)]
    pub kwargs: ExpectationKwargs,
}

#[doc = "Configured keyword arguments of the expectation; `mostly` is the SLA fraction in [0,1]"]
#[derive(Debug, Clone, Default, Serialize, Deserialize, Getters, new)]
#[getset(get = "pub")]
pub struct ExpectationKwargs {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mostly: Option<f64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_map_expectation_source() {
        let source: Value = json!({
            "run_date": "2025-03-04T01:00:00Z",
            "success": true,
            "result": { "unexpected_percent": 3.5 },
            "expectation_config": { "kwargs": { "mostly": 0.95 } }
        });

        let record: ValidationRecord = serde_json::from_value(source).unwrap();
        assert_eq!(record.run_date, "2025-03-04T01:00:00Z");
        assert!(record.success);
        assert_eq!(record.result.unexpected_percent, Some(3.5));
        assert_eq!(record.expectation_config.kwargs.mostly, Some(0.95));
    }

    #[test]
    fn missing_optional_sections_default() {
        let source: Value = json!({
            "run_date": "2025-03-04T01:00:00Z",
            "success": false
        });

        let record: ValidationRecord = serde_json::from_value(source).unwrap();
        assert_eq!(record.result.observed_value, None);
        assert_eq!(record.expectation_config.kwargs.mostly, None);
    }
}
