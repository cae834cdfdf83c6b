use crate::common::*;

use crate::utils_modules::{io_utils::*, time_utils::*};

use crate::model::{configs::total_config::*, expectation::expectation_list_config::*};

use crate::enums::result_type::*;

use crate::env_configuration::env_config::*;

use crate::service::trend_chart_service_impl::TREND_WINDOW_DAYS;

use crate::traits::service_traits::{query_service::*, trend_chart_service::*};

#[derive(Debug, new)]
pub struct MainController<Q: QueryService, T: TrendChartService> {
    query_service: Q,
    trend_chart_service: T,
}

impl<Q: QueryService, T: TrendChartService> MainController<Q, T> {
    #[doc = r#"
        Main loop: periodically rebuilds the trend chart configuration of
        every watched expectation.

        1. Read the expectation watch list (`EXPECTATION_LIST_PATH`)
        2. Every tick, for each watched expectation:
           - fetch the last 7 days of validation runs
           - shape them into the declarative chart configuration
           - write the configuration as JSON for the external renderer
        3. Per-expectation errors are logged and the cycle moves on

        # Returns
        * `anyhow::Result<()>` - Ok on normal termination, Err on a fatal error
    "#]
    pub async fn main_task(&self) -> anyhow::Result<()> {
        let expectation_list: ExpectationListConfig =
            read_toml_from_file::<ExpectationListConfig>(&EXPECTATION_LIST_PATH)?;

        let mut ticker: Interval =
            interval(Duration::from_secs(*get_system_config_info().ticker_sec()));

        loop {
            ticker.tick().await;

            self.publish_trend_charts(&expectation_list).await;
        }
    }

    #[doc = "Fetch → shape → publish, once per watched expectation"]
    async fn publish_trend_charts(&self, expectation_list: &ExpectationListConfig) {
        let validation_index_name: &str = get_system_config_info().validation_index_name();
        let chart_output_dir: &str = get_system_config_info().chart_output_dir();

        for watched in expectation_list.expectation() {
            let expectation_id: &str = watched.expectation_id();

            /* invalid result type is a configuration bug - skip the entry, keep the cycle */
            let result_type: ResultType = match watched.result_type().parse::<ResultType>() {
                Ok(result_type) => result_type,
                Err(e) => {
                    error!(
                        "[MainController->publish_trend_charts] '{}' has an invalid result type: {:?}",
                        expectation_id, e
                    );
                    continue;
                }
            };

            let now: DateTime<Utc> = Utc::now();

            let validations = match self
                .query_service
                .get_validations_by_expectation(
                    validation_index_name,
                    expectation_id,
                    minus_d(now, TREND_WINDOW_DAYS),
                    now,
                )
                .await
            {
                Ok(validations) => validations,
                Err(e) => {
                    error!(
                        "[MainController->publish_trend_charts] Failed to fetch validations of '{}': {:?}",
                        expectation_id, e
                    );
                    continue;
                }
            };

            let chart_config = match self
                .trend_chart_service
                .build_chart_config(&validations, result_type, now)
            {
                Ok(chart_config) => chart_config,
                Err(e) => {
                    error!(
                        "[MainController->publish_trend_charts] Failed to build chart config of '{}': {:?}",
                        expectation_id, e
                    );
                    continue;
                }
            };

            let output_path: PathBuf =
                Path::new(chart_output_dir).join(format!("{}.json", expectation_id));

            if let Err(e) = write_json_to_file(&chart_config, &output_path) {
                error!(
                    "[MainController->publish_trend_charts] Failed to write chart config of '{}': {:?}",
                    expectation_id, e
                );
                continue;
            }

            info!(
                "Trend chart config published: '{}' ({} validation runs)",
                expectation_id,
                validations.len()
            );
        }
    }
}
