/// ECharts build loaded by default when a page embeds charts.
pub const DEFAULT_ECHARTS_SRC: &str = "https://cdn.jsdelivr.net/npm/echarts@5/dist/echarts.min.js";

/// Draws every chart container on the page. It must run after the ECharts script has loaded.
pub const HYDRATE_SCRIPT: &str = r#"
document.querySelectorAll("[data-chart-type]").forEach(function (container) {
	var chart = echarts.init(container);
	chart.setOption(JSON.parse(container.dataset.options));
	window.addEventListener("resize", function () {
		chart.resize();
	});
});
"#;
