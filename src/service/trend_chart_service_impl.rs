use crate::common::*;

use crate::traits::service_traits::trend_chart_service::*;

use crate::dto::validation_record::*;

use crate::enums::result_type::*;

use crate::errors::trend_error::*;

use crate::model::chart::{axis_config::*, chart_config::*, series_config::*, trend_point::*};

use crate::utils_modules::time_utils::*;

/* rolling X-axis window, recomputed from the render time on every call */
pub const TREND_WINDOW_DAYS: i64 = 7;

const ROUNDING_FACTOR: f64 = 100_000.0;

#[derive(Debug, Clone, new)]
pub struct TrendChartServiceImpl;

impl TrendChartServiceImpl {
    #[doc = "Rounds a chart value to 5 decimal places"]
    fn round_value(value: f64) -> f64 {
        (value * ROUNDING_FACTOR).round() / ROUNDING_FACTOR
    }

    #[doc = r#"
        Pass-rate value of one validation run.

        - `column_map_expectation`: `100 - unexpected_percent`
        - aggregate/plain expectations: the raw `observed_value`

        A record missing the numeric field its result type requires fails with
        `MalformedRecord` instead of letting NaN reach the chart.
    "#]
    fn pass_rate_value(
        record: &ValidationRecord,
        result_type: ResultType,
    ) -> Result<f64, TrendChartError> {
        match result_type {
            ResultType::ColumnMapExpectation => {
                let unexpected_percent: f64 =
                    record.result.unexpected_percent.ok_or_else(|| {
                        TrendChartError::MalformedRecord {
                            run_date: record.run_date.clone(),
                            field: "unexpected_percent",
                        }
                    })?;

                Ok(Self::round_value(100.0 - unexpected_percent))
            }
            ResultType::ColumnAggregateExpectation | ResultType::Expectation => {
                let observed_value: f64 = record.result.observed_value.ok_or_else(|| {
                    TrendChartError::MalformedRecord {
                        run_date: record.run_date.clone(),
                        field: "observed_value",
                    }
                })?;

                Ok(Self::round_value(observed_value))
            }
        }
    }

    #[doc = r#"
        SLA value of one validation run, as a percentage.

        A `mostly` of exactly 0 is indistinguishable from "not set" and reads
        as "no SLA defined" - a known quirk, kept on purpose.
    "#]
    fn sla_value(record: &ValidationRecord) -> Option<f64> {
        record
            .expectation_config
            .kwargs
            .mostly
            .filter(|mostly| *mostly != 0.0)
            .map(|mostly| Self::round_value(mostly * 100.0))
    }

    #[doc = "Trimmed percentage label: `95%` rather than `95.0%` for integral values"]
    fn format_percent(value: f64) -> String {
        if value.fract() == 0.0 {
            format!("{}%", value as i64)
        } else {
            format!("{}%", value)
        }
    }

    #[doc = r#"
        Promotes the most recent SLA value to a horizontal reference line.

        Only the latest SLA setting is meaningful as a forward-looking
        threshold; older values stay visible in the dashed history series but
        are never promoted. An empty series or a trailing gap yields no marker.
    "#]
    fn sla_mark_line(sla_values: &[SlaPoint]) -> Option<MarkLineConfig> {
        let latest_sla: f64 = sla_values.last()?.y?;

        Some(MarkLineConfig {
            silent: true,
            symbol: "none".to_string(),
            line_style: LineStyleConfig {
                color: "transparent".to_string(),
                width: 0.0,
                line_type: "solid".to_string(),
            },
            label: MarkLineLabelConfig {
                position: "start".to_string(),
                formatter: Self::format_percent(latest_sla),
            },
            data: vec![MarkLineEntry {
                name: "SLA".to_string(),
                y_axis: latest_sla,
            }],
        })
    }

    #[doc = "Y-axis policy for the result category"]
    fn y_axis_for(result_type: ResultType) -> YAxisConfig {
        if result_type.is_percentage_based() {
            YAxisConfig::percentage_bounded()
        } else {
            YAxisConfig::unbounded_numeric()
        }
    }
}

impl TrendChartService for TrendChartServiceImpl {
    fn build_trend_series(
        &self,
        validations: &[ValidationRecord],
        result_type: ResultType,
    ) -> Result<TrendSeries, TrendChartError> {
        let mut percentage_values: Vec<TrendPoint> = Vec::with_capacity(validations.len());
        let mut sla_values: Vec<SlaPoint> = Vec::with_capacity(validations.len());

        for record in validations {
            let pass_rate: f64 = Self::pass_rate_value(record, result_type)?;

            percentage_values.push(TrendPoint::new(
                record.run_date.clone(),
                pass_rate,
                PointColor::from_success(record.success),
            ));

            sla_values.push(SlaPoint::new(record.run_date.clone(), Self::sla_value(record)));
        }

        Ok(TrendSeries::new(percentage_values, sla_values))
    }

    fn build_chart_config(
        &self,
        validations: &[ValidationRecord],
        result_type: ResultType,
        now: DateTime<Utc>,
    ) -> Result<ChartConfig, TrendChartError> {
        let trend_series: TrendSeries = self.build_trend_series(validations, result_type)?;

        let sla_data: Vec<SeriesDataEntry> = trend_series
            .sla_values
            .iter()
            .map(|point| SeriesDataEntry {
                value: (point.x.clone(), point.y),
                item_style: None,
            })
            .collect();

        let pass_rate_data: Vec<SeriesDataEntry> = trend_series
            .percentage_values
            .iter()
            .map(|point| SeriesDataEntry {
                value: (point.x.clone(), Some(point.y)),
                item_style: Some(ItemStyleConfig {
                    color: point.color.as_color_token().to_string(),
                }),
            })
            .collect();

        let mark_line: Option<MarkLineConfig> = Self::sla_mark_line(&trend_series.sla_values);

        let window_lower: DateTime<Utc> = minus_d(now, TREND_WINDOW_DAYS);

        Ok(ChartConfig {
            grid: GridConfig::sparkline(),
            x_axis: XAxisConfig::rolling_time_window(
                convert_date_to_str(window_lower, Utc),
                convert_date_to_str(now, Utc),
            ),
            y_axis: Self::y_axis_for(result_type),
            tooltip: TooltipConfig::axis_triggered(),
            series: vec![
                SeriesConfig::sla_line(sla_data),
                SeriesConfig::pass_rate_line(pass_rate_data, mark_line),
            ],
            animation: false,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn record(
        run_date: &str,
        success: bool,
        unexpected_percent: Option<f64>,
        observed_value: Option<f64>,
        mostly: Option<f64>,
    ) -> ValidationRecord {
        ValidationRecord::new(
            run_date.to_string(),
            success,
            ValidationResult::new(unexpected_percent, observed_value),
            ExpectationConfig::new(ExpectationKwargs::new(mostly)),
        )
    }

    fn service() -> TrendChartServiceImpl {
        TrendChartServiceImpl::new()
    }

    #[test]
    fn series_are_equal_length_and_timestamp_aligned() {
        let validations: Vec<ValidationRecord> = vec![
            record("2025-03-01T00:00:00Z", true, Some(1.0), None, Some(0.9)),
            record("2025-03-02T00:00:00Z", false, Some(20.0), None, None),
            record("2025-03-03T00:00:00Z", true, Some(0.0), None, Some(0.95)),
        ];

        let series: TrendSeries = service()
            .build_trend_series(&validations, ResultType::ColumnMapExpectation)
            .unwrap();

        assert_eq!(series.percentage_values.len(), validations.len());
        assert_eq!(series.sla_values.len(), validations.len());

        for (i, validation) in validations.iter().enumerate() {
            assert_eq!(series.percentage_values[i].x, validation.run_date);
            assert_eq!(series.sla_values[i].x, validation.run_date);
        }
    }

    #[test]
    fn map_expectation_inverts_unexpected_percent() {
        let validations: Vec<ValidationRecord> =
            vec![record("2025-03-01T00:00:00Z", true, Some(3.5), None, None)];

        let series: TrendSeries = service()
            .build_trend_series(&validations, ResultType::ColumnMapExpectation)
            .unwrap();

        assert_eq!(series.percentage_values[0].y, 96.5);
        assert_eq!(series.percentage_values[0].color, PointColor::Pass);
    }

    #[test]
    fn plain_expectation_rounds_observed_value_to_5_decimals() {
        let validations: Vec<ValidationRecord> = vec![record(
            "2025-03-01T00:00:00Z",
            false,
            None,
            Some(42.123456),
            None,
        )];

        let series: TrendSeries = service()
            .build_trend_series(&validations, ResultType::Expectation)
            .unwrap();

        assert_eq!(series.percentage_values[0].y, 42.12346);
        assert_eq!(series.percentage_values[0].color, PointColor::Fail);
    }

    #[test]
    fn missing_mostly_leaves_a_gap_in_the_sla_series() {
        let validations: Vec<ValidationRecord> =
            vec![record("2025-03-01T00:00:00Z", true, Some(0.0), None, None)];

        let series: TrendSeries = service()
            .build_trend_series(&validations, ResultType::ColumnMapExpectation)
            .unwrap();

        assert_eq!(series.sla_values[0].y, None);
    }

    #[test]
    fn mostly_is_scaled_to_a_percentage() {
        let validations: Vec<ValidationRecord> =
            vec![record("2025-03-01T00:00:00Z", true, Some(0.0), None, Some(0.95))];

        let series: TrendSeries = service()
            .build_trend_series(&validations, ResultType::ColumnMapExpectation)
            .unwrap();

        assert_eq!(series.sla_values[0].y, Some(95.0));
    }

    /* mostly of exactly 0 reads as "not set" - pinned quirk */
    #[test]
    fn zero_mostly_is_treated_as_unset() {
        let validations: Vec<ValidationRecord> =
            vec![record("2025-03-01T00:00:00Z", true, Some(0.0), None, Some(0.0))];

        let series: TrendSeries = service()
            .build_trend_series(&validations, ResultType::ColumnMapExpectation)
            .unwrap();

        assert_eq!(series.sla_values[0].y, None);
    }

    #[test]
    fn marker_is_emitted_for_a_current_sla() {
        let sla_values: Vec<SlaPoint> = vec![
            SlaPoint::new("2025-03-01T00:00:00Z".to_string(), None),
            SlaPoint::new("2025-03-02T00:00:00Z".to_string(), Some(90.0)),
        ];

        let mark_line: MarkLineConfig =
            TrendChartServiceImpl::sla_mark_line(&sla_values).unwrap();

        assert_eq!(mark_line.data.len(), 1);
        assert_eq!(mark_line.data[0].y_axis, 90.0);
        assert_eq!(mark_line.data[0].name, "SLA");
        assert_eq!(mark_line.label.formatter, "90%");
        assert_eq!(mark_line.label.position, "start");
    }

    #[test]
    fn no_marker_without_a_current_sla() {
        let trailing_gap: Vec<SlaPoint> = vec![
            SlaPoint::new("2025-03-01T00:00:00Z".to_string(), Some(90.0)),
            SlaPoint::new("2025-03-02T00:00:00Z".to_string(), None),
        ];

        assert!(TrendChartServiceImpl::sla_mark_line(&trailing_gap).is_none());
        assert!(TrendChartServiceImpl::sla_mark_line(&[]).is_none());
    }

    #[test]
    fn fractional_sla_label_keeps_its_decimals() {
        let sla_values: Vec<SlaPoint> =
            vec![SlaPoint::new("2025-03-01T00:00:00Z".to_string(), Some(97.5))];

        let mark_line: MarkLineConfig =
            TrendChartServiceImpl::sla_mark_line(&sla_values).unwrap();

        assert_eq!(mark_line.label.formatter, "97.5%");
    }

    #[test]
    fn empty_validations_produce_empty_series_and_no_marker() {
        let now: DateTime<Utc> = Utc.with_ymd_and_hms(2025, 3, 10, 12, 0, 0).unwrap();

        let config: ChartConfig = service()
            .build_chart_config(&[], ResultType::ColumnMapExpectation, now)
            .unwrap();

        assert_eq!(config.series.len(), 2);
        assert!(config.series[0].data.is_empty());
        assert!(config.series[1].data.is_empty());
        assert!(config.series[1].mark_line.is_none());
    }

    #[test]
    fn percentage_axis_is_bounded_0_to_100() {
        let y_axis: YAxisConfig =
            TrendChartServiceImpl::y_axis_for(ResultType::ColumnMapExpectation);

        assert_eq!(y_axis.min, Some(0.0));
        assert_eq!(y_axis.max, Some(100.0));
        assert_eq!(y_axis.interval, Some(100.0));
        assert_eq!(y_axis.axis_label.formatter, "{value}%");
    }

    #[test]
    fn aggregate_axis_is_unbounded() {
        for result_type in [ResultType::ColumnAggregateExpectation, ResultType::Expectation] {
            let y_axis: YAxisConfig = TrendChartServiceImpl::y_axis_for(result_type);

            assert_eq!(y_axis.min, None);
            assert_eq!(y_axis.max, None);
            assert_eq!(y_axis.split_number, Some(2));
        }
    }

    #[test]
    fn malformed_record_fails_instead_of_plotting_nan() {
        let validations: Vec<ValidationRecord> =
            vec![record("2025-03-01T00:00:00Z", true, None, None, None)];

        let err = service()
            .build_trend_series(&validations, ResultType::ColumnMapExpectation)
            .unwrap_err();

        assert_eq!(
            err,
            TrendChartError::MalformedRecord {
                run_date: "2025-03-01T00:00:00Z".to_string(),
                field: "unexpected_percent",
            }
        );
    }

    #[test]
    fn chart_window_is_7_days_ending_at_render_time() {
        let now: DateTime<Utc> = Utc.with_ymd_and_hms(2025, 3, 10, 12, 0, 0).unwrap();

        let validations: Vec<ValidationRecord> = vec![record(
            "2025-03-09T00:00:00Z",
            true,
            Some(1.5),
            None,
            Some(0.9),
        )];

        let config: ChartConfig = service()
            .build_chart_config(&validations, ResultType::ColumnMapExpectation, now)
            .unwrap();

        assert_eq!(config.x_axis.min, "2025-03-03T12:00:00Z");
        assert_eq!(config.x_axis.max, "2025-03-10T12:00:00Z");
        assert!(!config.animation);

        /* series order and roles */
        assert_eq!(config.series[0].name, "SLA");
        assert!(config.series[0].silent);
        assert_eq!(config.series[0].line_style.line_type, "dashed");
        assert_eq!(config.series[1].name, "Pass Rate");
        assert_eq!(config.series[1].line_style.line_type, "solid");

        let mark_line: &MarkLineConfig = config.series[1].mark_line.as_ref().unwrap();
        assert_eq!(mark_line.data[0].y_axis, 90.0);
        assert_eq!(mark_line.line_style.color, "transparent");
    }

    #[test]
    fn pass_rate_points_carry_their_color_token() {
        let validations: Vec<ValidationRecord> = vec![
            record("2025-03-01T00:00:00Z", true, Some(0.0), None, None),
            record("2025-03-02T00:00:00Z", false, Some(40.0), None, None),
        ];

        let now: DateTime<Utc> = Utc.with_ymd_and_hms(2025, 3, 10, 12, 0, 0).unwrap();

        let config: ChartConfig = service()
            .build_chart_config(&validations, ResultType::ColumnMapExpectation, now)
            .unwrap();

        let pass_rate_data: &Vec<SeriesDataEntry> = &config.series[1].data;
        assert_eq!(
            pass_rate_data[0].item_style.as_ref().unwrap().color,
            SUCCESS_COLOR
        );
        assert_eq!(
            pass_rate_data[1].item_style.as_ref().unwrap().color,
            FAILURE_COLOR
        );
    }
}
