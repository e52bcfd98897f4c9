use crate::statistics::FeatureDistribution;
use hboard_html::{component, html, style};
use hboard_ui::Alert;
use num_traits::ToPrimitive;
use serde::Serialize;

/// Shown in place of the bar when the distribution has no columns.
pub const EMPTY_FEATURES_MESSAGE: &str = "Error, features is empty.";

const BORDER_RADIUS: &str = "20px";

/// Semantic type of a dataset column, in the order the bar draws them.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FeatureType {
	Continuous,
	Categorical,
	Datetime,
	Location,
	Text,
	Other,
}

impl FeatureType {
	pub const ALL: [FeatureType; 6] = [
		FeatureType::Continuous,
		FeatureType::Categorical,
		FeatureType::Datetime,
		FeatureType::Location,
		FeatureType::Text,
		FeatureType::Other,
	];

	pub fn display_name(self) -> &'static str {
		match self {
			FeatureType::Continuous => "Continuous",
			FeatureType::Categorical => "Categorical",
			FeatureType::Datetime => "Datetime",
			FeatureType::Location => "Location",
			FeatureType::Text => "Text",
			FeatureType::Other => "Other",
		}
	}

	pub fn color(self) -> &'static str {
		match self {
			FeatureType::Continuous => "rgb(0, 183, 182)",
			FeatureType::Categorical => "rgb(0, 156, 234)",
			FeatureType::Datetime => "rgb(244, 148, 49)",
			FeatureType::Location => "rgb(88, 125, 49)",
			FeatureType::Text => "rgb(125, 0, 249)",
			FeatureType::Other => "rgb(105, 125, 149)",
		}
	}
}

impl FeatureDistribution {
	pub fn count(&self, feature_type: FeatureType) -> u64 {
		match feature_type {
			FeatureType::Continuous => self.n_continuous,
			FeatureType::Categorical => self.n_categorical_cols,
			FeatureType::Datetime => self.n_datetime_cols,
			FeatureType::Location => self.n_location,
			FeatureType::Text => self.n_text_cols,
			FeatureType::Other => self.n_others,
		}
	}

	/// Total number of columns, or `None` if the counts do not fit in a `u64`.
	pub fn total(&self) -> Option<u64> {
		FeatureType::ALL
			.iter()
			.try_fold(0u64, |total, feature_type| {
				total.checked_add(self.count(*feature_type))
			})
	}
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FeatureBar {
	pub total: u64,
	/// One segment per feature type, zero counts included.
	pub segments: Vec<FeatureSegment>,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FeatureSegment {
	pub feature_type: FeatureType,
	pub count: u64,
	/// Share of `total`, rounded to a whole percent. Segments are rounded independently so their sum can be off from 100 by a few points.
	pub percent: u64,
	/// The first segment with a nonzero count. Its left corners are rounded.
	pub first: bool,
	/// The last segment with a nonzero count. Its right corners are rounded.
	pub last: bool,
}

impl FeatureSegment {
	pub fn border_radius(&self) -> Option<String> {
		let r = BORDER_RADIUS;
		match (self.first, self.last) {
			(true, true) => Some(format!("{} {} {} {}", r, r, r, r)),
			(true, false) => Some(format!("{} 0 0 {}", r, r)),
			(false, true) => Some(format!("0 {} {} 0", r, r)),
			(false, false) => None,
		}
	}
}

/// Compute the bar segments. Returns `None` when there are no columns at all, or when the total overflows, since no percentage can be computed.
pub fn compute_feature_bar(distribution: &FeatureDistribution) -> Option<FeatureBar> {
	let counts: Vec<u64> = FeatureType::ALL
		.iter()
		.map(|feature_type| distribution.count(*feature_type))
		.collect();
	let total = distribution.total()?;
	let first = counts.iter().position(|count| *count > 0)?;
	let last = counts.iter().rposition(|count| *count > 0)?;
	let segments = FeatureType::ALL
		.iter()
		.zip(counts.iter())
		.enumerate()
		.map(|(index, (feature_type, count))| {
			Some(FeatureSegment {
				feature_type: *feature_type,
				count: *count,
				percent: percent(*count, total)?,
				first: index == first,
				last: index == last,
			})
		})
		.collect::<Option<Vec<_>>>()?;
	Some(FeatureBar { total, segments })
}

fn percent(count: u64, total: u64) -> Option<u64> {
	let share = count.to_f64()? / total.to_f64()?;
	(share * 100.0).round().to_u64()
}

/// The segmented bar and its legend, or an error message if the distribution is empty.
#[component]
pub fn FeatureDistributionBar(bar: Option<FeatureBar>) {
	let bar = match bar {
		Some(bar) => bar,
		None => {
			return html! {
				<Alert>{EMPTY_FEATURES_MESSAGE}</Alert>
			}
		}
	};
	let segments = bar
		.segments
		.iter()
		.map(|segment| {
			let style = style! {
				"width" => format!("{}%", segment.percent),
				"background-color" => segment.feature_type.color(),
				"border-radius" => segment.border_radius(),
			};
			html! {
				<div style={style}>
					{format!("{} columns({}%)", segment.count, segment.percent)}
				</div>
			}
		})
		.collect::<Vec<_>>();
	let legend_items = bar
		.segments
		.iter()
		.map(|segment| {
			let swatch_style = style! {
				"background-color" => segment.feature_type.color(),
			};
			html! {
				<div class="legendItem">
					<span class="legendPoint" style={swatch_style}></span>
					<span class="symbol">
						{format!(" {} ", segment.feature_type.display_name())}
					</span>
					<span class="comment">
						{format!(" {} columns, {}% ", segment.count, segment.percent)}
					</span>
				</div>
			}
		})
		.collect::<Vec<_>>();
	html! {
		<>
			<div class="bar">{segments}</div>
			<div class="legend">{legend_items}</div>
		</>
	}
}

#[cfg(test)]
mod test {
	use super::*;
	use proptest::prelude::*;

	fn distribution(counts: [u64; 6]) -> FeatureDistribution {
		FeatureDistribution {
			n_continuous: counts[0],
			n_categorical_cols: counts[1],
			n_datetime_cols: counts[2],
			n_location: counts[3],
			n_text_cols: counts[4],
			n_others: counts[5],
		}
	}

	fn percents(bar: &FeatureBar) -> Vec<u64> {
		bar.segments.iter().map(|segment| segment.percent).collect()
	}

	#[test]
	fn test_percentages_are_rounded_independently() {
		let bar = compute_feature_bar(&distribution([1, 1, 1, 0, 0, 0])).unwrap();
		assert_eq!(bar.total, 3);
		assert_eq!(percents(&bar), vec![33, 33, 33, 0, 0, 0]);
		let bar = compute_feature_bar(&distribution([1, 0, 0, 0, 0, 7])).unwrap();
		assert_eq!(percents(&bar), vec![13, 0, 0, 0, 0, 88]);
	}

	#[test]
	fn test_rounded_corners_skip_zero_segments() {
		let bar = compute_feature_bar(&distribution([0, 4, 0, 2, 0, 0])).unwrap();
		let corners: Vec<(bool, bool)> = bar
			.segments
			.iter()
			.map(|segment| (segment.first, segment.last))
			.collect();
		assert_eq!(
			corners,
			vec![
				(false, false),
				(true, false),
				(false, false),
				(false, true),
				(false, false),
				(false, false),
			]
		);
		assert_eq!(bar.segments[1].border_radius().unwrap(), "20px 0 0 20px");
		assert_eq!(bar.segments[3].border_radius().unwrap(), "0 20px 20px 0");
		assert_eq!(bar.segments[0].border_radius(), None);
	}

	#[test]
	fn test_single_segment_is_fully_rounded() {
		let bar = compute_feature_bar(&distribution([0, 0, 5, 0, 0, 0])).unwrap();
		let segment = &bar.segments[2];
		assert!(segment.first && segment.last);
		assert_eq!(segment.percent, 100);
		assert_eq!(segment.border_radius().unwrap(), "20px 20px 20px 20px");
	}

	#[test]
	fn test_empty_distribution() {
		assert_eq!(compute_feature_bar(&FeatureDistribution::default()), None);
		let html = html! { <FeatureDistributionBar bar={None} /> }.render_to_string();
		insta::assert_snapshot!(
			html,
			@r#"<span class="alert">Error, features is empty.</span>"#
		);
	}

	#[test]
	fn test_overflowing_total_is_empty() {
		let distribution = distribution([u64::MAX, 1, 0, 0, 0, 0]);
		assert_eq!(distribution.total(), None);
		let bar = compute_feature_bar(&distribution);
		assert_eq!(bar, None);
		let html = html! { <FeatureDistributionBar bar={bar} /> }.render_to_string();
		assert_eq!(html, r#"<span class="alert">Error, features is empty.</span>"#);
	}

	#[test]
	fn test_render_bar_and_legend() {
		let bar = compute_feature_bar(&distribution([3, 1, 0, 0, 0, 0]));
		let html = html! { <FeatureDistributionBar bar={bar} /> }.render_to_string();
		assert!(html.starts_with(r#"<div class="bar"><div style="width: 75%; background-color: rgb(0, 183, 182); border-radius: 20px 0 0 20px">3 columns(75%)</div>"#));
		assert!(html.contains(r#"<div style="width: 0%; background-color: rgb(244, 148, 49)">0 columns(0%)</div>"#));
		assert_eq!(html.matches(r#"class="legendItem""#).count(), 6);
		assert!(html.contains(r#"<span class="symbol"> Other </span><span class="comment"> 0 columns, 0% </span>"#));
	}

	proptest! {
		#[test]
		fn test_percentages_sum_to_about_100(counts in prop::array::uniform6(0u64..1000)) {
			let distribution = distribution(counts);
			match compute_feature_bar(&distribution) {
				None => prop_assert!(counts.iter().all(|count| *count == 0)),
				Some(bar) => {
					let sum: i64 = bar.segments.iter().map(|segment| segment.percent as i64).sum();
					let nonzero = counts.iter().filter(|count| **count > 0).count() as i64;
					prop_assert!((sum - 100).abs() <= nonzero);
					prop_assert_eq!(bar.segments.iter().filter(|segment| segment.first).count(), 1);
					prop_assert_eq!(bar.segments.iter().filter(|segment| segment.last).count(), 1);
					prop_assert_eq!(compute_feature_bar(&distribution), Some(bar));
				}
			}
		}
	}
}
