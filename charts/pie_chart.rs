use crate::common::{Emphasis, Legend, SeriesType, Tooltip};

#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct PieChartOptions {
	pub tooltip: Tooltip,
	pub legend: Legend,
	pub series: Vec<PieSeries>,
}

#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct PieSeries {
	pub name: String,
	#[serde(rename = "type")]
	pub series_type: SeriesType,
	pub radius: String,
	/// Horizontal and vertical position of the pie's center.
	pub center: (String, String),
	pub data: Vec<PieSlice>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub emphasis: Option<Emphasis>,
}

#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct PieSlice {
	pub name: String,
	/// Counts are written as they were read, so integers stay integers.
	pub value: serde_json::Number,
}

impl PieChartOptions {
	pub fn legend_data(&self) -> &[String] {
		&self.legend.data
	}

	pub fn slices(&self) -> impl Iterator<Item = &PieSlice> {
		self.series.iter().flat_map(|series| series.data.iter())
	}
}
