use crate::error::Result;
use hboard_charts::hydrate::DEFAULT_ECHARTS_SRC;
use serde::{Deserialize, Serialize};

/// Presentation settings for a rendered panel. Every field has a default, so a config file only needs the fields it changes.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct PanelConfig {
	/// Title of the html document.
	pub title: String,
	/// Where the page loads ECharts from.
	pub echarts_src: String,
	/// Height of the column holding the target table.
	pub target_column_height: String,
	/// Width of the chart and dataset shape blocks.
	pub right_block_width: String,
	pub chart_height: String,
}

impl Default for PanelConfig {
	fn default() -> PanelConfig {
		PanelConfig {
			title: "Dataset".to_owned(),
			echarts_src: DEFAULT_ECHARTS_SRC.to_owned(),
			target_column_height: "800px".to_owned(),
			right_block_width: "90%".to_owned(),
			chart_height: "400px".to_owned(),
		}
	}
}

impl PanelConfig {
	pub fn from_json(json: &str) -> Result<PanelConfig> {
		Ok(serde_json::from_str(json)?)
	}
}

#[test]
fn test_partial_config() {
	let config = PanelConfig::from_json(r#"{ "title": "Census" }"#).unwrap();
	assert_eq!(config.title, "Census");
	assert_eq!(config.target_column_height, "800px");
	assert_eq!(config.echarts_src, DEFAULT_ECHARTS_SRC);
}

#[test]
fn test_unknown_config_field_is_ignored() {
	let config = PanelConfig::from_json(r#"{ "theme": "dark" }"#).unwrap();
	assert_eq!(config, PanelConfig::default());
}
