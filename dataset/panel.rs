use crate::{
	config::PanelConfig,
	error::Result,
	feature_distribution::{compute_feature_bar, FeatureBar, FeatureDistributionBar},
	statistics::DatasetStatistics,
	summary::{shape_rows, target_rows, SummaryRow, SummaryTable},
	target_distribution::target_distribution_options,
};
use hboard_charts::{hydrate::HYDRATE_SCRIPT, Chart, ChartOptions};
use hboard_html::{component, html, Node};
use hboard_ui::{Block, Card, Col, Direction, Document, PageInfo, Row, GRID_COLUMNS};
use serde::Serialize;

/// Everything the panel displays, derived from the statistics. It is rebuilt on every render.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DatasetView {
	pub target_rows: Vec<SummaryRow>,
	pub shape_rows: Vec<SummaryRow>,
	/// `None` when the dataset has no feature columns.
	pub feature_bar: Option<FeatureBar>,
	pub target_distribution: ChartOptions,
}

impl DatasetView {
	pub fn build(statistics: &DatasetStatistics) -> Result<DatasetView> {
		let task_type = statistics.target.task_type()?;
		let target_distribution =
			target_distribution_options(&statistics.target_distribution, task_type)?;
		let feature_bar = compute_feature_bar(&statistics.feature_distribution);
		if feature_bar.is_none() {
			tracing::warn!("the feature distribution is empty");
		}
		let view = DatasetView {
			target_rows: target_rows(&statistics.target),
			shape_rows: shape_rows(&statistics.dataset_shape),
			feature_bar,
			target_distribution,
		};
		tracing::debug!(
			%task_type,
			chart_type = view.target_distribution.chart_type(),
			shape_rows = view.shape_rows.len(),
			"built dataset view"
		);
		Ok(view)
	}
}

/**
The dataset panel. The feature types card spans the full width. Below it, the target table takes the left half and the target distribution chart sits above the dataset shape table on the right.

`options` is the serialized target distribution chart options.
*/
#[component]
pub fn DatasetPanel(view: DatasetView, options: String, config: PanelConfig) {
	let DatasetView {
		target_rows,
		shape_rows,
		feature_bar,
		target_distribution,
	} = view;
	let PanelConfig {
		target_column_height,
		right_block_width,
		chart_height,
		..
	} = config;
	html! {
		<>
			<Row gutter={(4, 4)}>
				<Col span={GRID_COLUMNS}>
					<Card title="Feature types distribution" width={Some("100%".to_owned())}>
						<FeatureDistributionBar bar={feature_bar} />
					</Card>
				</Col>
			</Row>
			<Block
				direction={Some(Direction::Horizontal)}
				flex={true}
				width={None}
				height={None}
				border_width={None}
			>
				<Block
					direction={Some(Direction::Vertical)}
					flex={false}
					width={Some("50%".to_owned())}
					height={Some(target_column_height)}
					border_width={None}
				>
					<Block direction={None} flex={true} width={None} height={None} border_width={None}>
						<Card title="Target" width={Some("100%".to_owned())}>
							<SummaryTable rows={target_rows} />
						</Card>
					</Block>
				</Block>
				<Block
					direction={Some(Direction::Vertical)}
					flex={true}
					width={None}
					height={None}
					border_width={None}
				>
					<Block
						direction={None}
						flex={true}
						width={Some(right_block_width.clone())}
						height={None}
						border_width={Some(5)}
					>
						<Card title="Distribution of y" width={None}>
							<Chart
								chart_type={target_distribution.chart_type()}
								options={options}
								id={Some("target_distribution".to_owned())}
								height={Some(chart_height)}
							/>
						</Card>
					</Block>
					<Block
						direction={None}
						flex={true}
						width={Some(right_block_width)}
						height={None}
						border_width={Some(5)}
					>
						<Card title="Dataset shape" width={Some("100%".to_owned())}>
							<SummaryTable rows={shape_rows} />
						</Card>
					</Block>
				</Block>
			</Block>
		</>
	}
}

fn panel(statistics: &DatasetStatistics, config: &PanelConfig) -> Result<Node> {
	let view = DatasetView::build(statistics)?;
	let options = serde_json::to_string(&view.target_distribution)?;
	Ok(html! {
		<DatasetPanel view={view} options={options} config={config.clone()} />
	})
}

/// Render the panel as an html fragment, without the surrounding document.
pub fn render_panel(statistics: &DatasetStatistics, config: &PanelConfig) -> Result<String> {
	Ok(panel(statistics, config)?.render_to_string())
}

/// Render a complete html page that loads ECharts and draws the target distribution chart.
pub fn render_page(statistics: &DatasetStatistics, config: &PanelConfig) -> Result<String> {
	let panel = panel(statistics, config)?;
	let page_info = PageInfo {
		title: config.title.clone(),
		script_srcs: vec![config.echarts_src.clone()],
		inline_scripts: vec![HYDRATE_SCRIPT.to_owned()],
	};
	let document = html! {
		<Document page_info={page_info}>
			{panel}
		</Document>
	};
	Ok(document.render_to_string())
}
