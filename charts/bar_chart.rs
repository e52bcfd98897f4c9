use crate::common::{Axis, SeriesType};

#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BarChartOptions {
	pub x_axis: Axis,
	pub y_axis: Axis,
	pub series: Vec<BarSeries>,
}

#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct BarSeries {
	pub data: Vec<serde_json::Number>,
	#[serde(rename = "type")]
	pub series_type: SeriesType,
}

impl BarChartOptions {
	/// The x axis category labels, empty for a value axis.
	pub fn categories(&self) -> &[String] {
		self.x_axis.data.as_deref().unwrap_or(&[])
	}
}
