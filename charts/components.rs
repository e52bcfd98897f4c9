use hboard_html::{component, html, style};

/// A chart container. `options` is the serialized [`ChartOptions`](crate::ChartOptions), written to the `data-options` attribute and drawn by the hydration script once the page loads.
#[component]
pub fn Chart(
	chart_type: &'static str,
	options: String,
	id: Option<String>,
	height: Option<String>,
) {
	let container_style = style! {
		"width" => "100%",
		"height" => height.unwrap_or_else(|| "400px".to_owned()),
	};
	html! {
		<div class="chart-wrapper">
			<div
				data-chart-type={chart_type}
				data-options={options}
				id={id}
				style={container_style}
			>
				<noscript>
					<div class="chart-noscript">
						{"Please enable JavaScript to view charts."}
					</div>
				</noscript>
			</div>
		</div>
	}
}
