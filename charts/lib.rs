/*!
Declarative chart options for the board's charts. Options serialize to the JSON accepted by ECharts' `setOption`, and the [`Chart`](components::Chart) component embeds them in a container that the [hydration script](hydrate::HYDRATE_SCRIPT) turns into a live chart in the browser.
*/

pub mod bar_chart;
pub mod common;
pub mod components;
pub mod hydrate;
pub mod pie_chart;

pub use self::bar_chart::{BarChartOptions, BarSeries};
pub use self::common::*;
pub use self::components::Chart;
pub use self::pie_chart::{PieChartOptions, PieSeries, PieSlice};

#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(untagged)]
pub enum ChartOptions {
	Pie(PieChartOptions),
	Bar(BarChartOptions),
}

impl ChartOptions {
	/// The value written to a chart container's `data-chart-type` attribute.
	pub fn chart_type(&self) -> &'static str {
		match self {
			ChartOptions::Pie(_) => "pie",
			ChartOptions::Bar(_) => "bar",
		}
	}
}
