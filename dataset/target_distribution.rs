use crate::{
	error::{Error, Result},
	statistics::{Histogram, TargetDistribution, TaskKind, TaskType},
	summary::format_number,
};
use hboard_charts::{
	Axis, AxisType, BarChartOptions, BarSeries, ChartOptions, Emphasis, ItemStyle, Legend,
	LegendType, Orient, PieChartOptions, PieSeries, PieSlice, SeriesType, Tooltip, TooltipTrigger,
};
use indexmap::IndexMap;
use serde_json::Number;

/**
Build the chart options for the target distribution. Classification targets are drawn as a pie with one slice per class, regression targets as a histogram with one bar per bin.

A distribution whose shape does not fit the task type is an error rather than being drawn with the wrong chart.
*/
pub fn target_distribution_options(
	distribution: &TargetDistribution,
	task_type: TaskType,
) -> Result<ChartOptions> {
	match (task_type.kind(), distribution) {
		(TaskKind::Classification, TargetDistribution::Classes(classes)) => {
			Ok(ChartOptions::Pie(pie_options(classes)))
		}
		(TaskKind::Regression, TargetDistribution::Histogram(histogram)) => {
			Ok(ChartOptions::Bar(histogram_options(histogram)?))
		}
		(TaskKind::Classification, TargetDistribution::Histogram(_)) => {
			Err(Error::DistributionMismatch {
				task_type,
				expected: "a map from class label to count",
			})
		}
		(TaskKind::Regression, TargetDistribution::Classes(_)) => Err(Error::DistributionMismatch {
			task_type,
			expected: "count and region arrays",
		}),
	}
}

fn pie_options(classes: &IndexMap<String, Number>) -> PieChartOptions {
	let legend_data = classes.keys().cloned().collect();
	let data = classes
		.iter()
		.map(|(name, value)| PieSlice {
			name: name.clone(),
			value: value.clone(),
		})
		.collect();
	PieChartOptions {
		tooltip: Tooltip {
			trigger: TooltipTrigger::Item,
			formatter: Some("{a} <br/>{b} : {c} ({d}%)".to_owned()),
		},
		legend: Legend {
			legend_type: LegendType::Scroll,
			orient: Orient::Vertical,
			right: Some(10),
			top: Some(250),
			bottom: Some(20),
			data: legend_data,
		},
		series: vec![PieSeries {
			name: "Label".to_owned(),
			series_type: SeriesType::Pie,
			radius: "55%".to_owned(),
			center: ("40%".to_owned(), "50%".to_owned()),
			data,
			emphasis: Some(Emphasis {
				item_style: ItemStyle {
					shadow_blur: 10,
					shadow_offset_x: 0,
					shadow_color: "rgba(0, 0, 0, 0.5)".to_owned(),
				},
			}),
		}],
	}
}

fn histogram_options(histogram: &Histogram) -> Result<BarChartOptions> {
	if histogram.count.len() != histogram.region.len() {
		return Err(Error::BinCountMismatch {
			counts: histogram.count.len(),
			regions: histogram.region.len(),
		});
	}
	let categories = histogram
		.region
		.iter()
		.map(|(lower, upper)| format_bin(*lower, *upper))
		.collect();
	Ok(BarChartOptions {
		x_axis: Axis {
			axis_type: AxisType::Category,
			data: Some(categories),
		},
		y_axis: Axis {
			axis_type: AxisType::Value,
			data: None,
		},
		series: vec![BarSeries {
			data: histogram.count.clone(),
			series_type: SeriesType::Bar,
		}],
	})
}

/// Label for the half open bin `[lower, upper)`.
pub fn format_bin(lower: f64, upper: f64) -> String {
	format!("[{}, {})", format_number(lower), format_number(upper))
}

#[cfg(test)]
mod test {
	use super::*;
	use serde_json::json;

	#[test]
	fn test_classification_pie() {
		let classes: IndexMap<String, Number> = vec![
			("yes".to_owned(), Number::from(100)),
			("no".to_owned(), Number::from(20)),
		]
		.into_iter()
		.collect();
		let options =
			target_distribution_options(&TargetDistribution::Classes(classes), TaskType::Binary)
				.unwrap();
		let options = match options {
			ChartOptions::Pie(options) => options,
			ChartOptions::Bar(_) => panic!("expected a pie chart"),
		};
		assert_eq!(options.legend_data(), ["yes", "no"]);
		let values: Vec<Option<u64>> = options.slices().map(|slice| slice.value.as_u64()).collect();
		assert_eq!(values, vec![Some(100), Some(20)]);
		assert_eq!(
			serde_json::to_value(&options).unwrap(),
			json!({
				"tooltip": { "trigger": "item", "formatter": "{a} <br/>{b} : {c} ({d}%)" },
				"legend": {
					"type": "scroll",
					"orient": "vertical",
					"right": 10,
					"top": 250,
					"bottom": 20,
					"data": ["yes", "no"],
				},
				"series": [{
					"name": "Label",
					"type": "pie",
					"radius": "55%",
					"center": ["40%", "50%"],
					"data": [
						{ "name": "yes", "value": 100 },
						{ "name": "no", "value": 20 },
					],
					"emphasis": {
						"itemStyle": {
							"shadowBlur": 10,
							"shadowOffsetX": 0,
							"shadowColor": "rgba(0, 0, 0, 0.5)",
						},
					},
				}],
			})
		);
	}

	#[test]
	fn test_regression_histogram() {
		let count: Vec<Number> = vec![1, 1, 1, 1, 1, 1, 1, 1, 19, 10]
			.into_iter()
			.map(Number::from)
			.collect();
		let region = (0..10u32).map(|i| (f64::from(i), f64::from(i + 1))).collect();
		let histogram = Histogram {
			count: count.clone(),
			region,
		};
		let options = target_distribution_options(
			&TargetDistribution::Histogram(histogram),
			TaskType::Regression,
		)
		.unwrap();
		let options = match options {
			ChartOptions::Bar(options) => options,
			ChartOptions::Pie(_) => panic!("expected a bar chart"),
		};
		let expected_categories: Vec<String> =
			(0..10).map(|i| format!("[{}, {})", i, i + 1)).collect();
		assert_eq!(options.categories(), expected_categories.as_slice());
		assert_eq!(options.categories()[0], "[0, 1)");
		assert_eq!(options.categories()[9], "[9, 10)");
		assert_eq!(options.series.len(), 1);
		assert_eq!(options.series[0].data, count);
		assert_eq!(
			serde_json::to_value(&options.series[0].data).unwrap(),
			json!([1, 1, 1, 1, 1, 1, 1, 1, 19, 10])
		);
		assert_eq!(options.y_axis.axis_type, AxisType::Value);
	}

	#[test]
	fn test_fractional_bin_labels() {
		assert_eq!(format_bin(0.5, 1.25), "[0.5, 1.25)");
		assert_eq!(format_bin(-2.0, 0.0), "[-2, 0)");
	}

	#[test]
	fn test_mismatched_bins() {
		let histogram = Histogram {
			count: vec![1.into(), 2.into()],
			region: vec![(0.0, 1.0)],
		};
		let result = target_distribution_options(
			&TargetDistribution::Histogram(histogram),
			TaskType::Regression,
		);
		assert!(matches!(
			result,
			Err(Error::BinCountMismatch {
				counts: 2,
				regions: 1
			})
		));
	}

	#[test]
	fn test_distribution_must_fit_task_type() {
		let mut classes = IndexMap::new();
		classes.insert("a".to_owned(), Number::from(1));
		let result =
			target_distribution_options(&TargetDistribution::Classes(classes), TaskType::Regression);
		assert!(matches!(
			result,
			Err(Error::DistributionMismatch {
				task_type: TaskType::Regression,
				..
			})
		));
		let histogram = Histogram {
			count: vec![],
			region: vec![],
		};
		let result = target_distribution_options(
			&TargetDistribution::Histogram(histogram),
			TaskType::Multiclass,
		);
		assert!(matches!(result, Err(Error::DistributionMismatch { .. })));
	}
}
