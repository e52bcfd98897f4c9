//! The statistics object the board is rendered from. It is produced elsewhere and read here without validation beyond what the types require.

use crate::error::{Error, Result};
use indexmap::IndexMap;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Number, Value};
use std::{fmt, str::FromStr};

#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DatasetStatistics {
	pub target: Target,
	#[serde(default)]
	pub dataset_shape: DatasetShape,
	#[serde(default)]
	pub feature_distribution: FeatureDistribution,
	pub target_distribution: TargetDistribution,
}

impl DatasetStatistics {
	pub fn from_json(json: &str) -> Result<DatasetStatistics> {
		Ok(serde_json::from_str(json)?)
	}

	pub fn from_slice(bytes: &[u8]) -> Result<DatasetStatistics> {
		Ok(serde_json::from_slice(bytes)?)
	}
}

/// Summary attributes of the target column, keyed by attribute name and kept in document order. Any attribute may be missing or null.
#[derive(Clone, Debug, PartialEq, Default, Deserialize, Serialize)]
#[serde(transparent)]
pub struct Target(pub Map<String, Value>);

impl Target {
	pub fn get(&self, key: &str) -> Option<&Value> {
		self.0.get(key)
	}

	pub fn task_type(&self) -> Result<TaskType> {
		match self.get("taskType") {
			None | Some(Value::Null) => Err(Error::MissingTaskType),
			Some(Value::String(task_type)) => task_type.parse(),
			Some(value) => Err(Error::UnknownTaskType(value.to_string())),
		}
	}
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TaskType {
	Binary,
	Multiclass,
	Multilabel,
	Regression,
}

/// Selects the shape of the target distribution chart.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TaskKind {
	Classification,
	Regression,
}

impl TaskType {
	pub fn kind(self) -> TaskKind {
		match self {
			TaskType::Binary | TaskType::Multiclass | TaskType::Multilabel => {
				TaskKind::Classification
			}
			TaskType::Regression => TaskKind::Regression,
		}
	}

	pub fn as_str(self) -> &'static str {
		match self {
			TaskType::Binary => "binary",
			TaskType::Multiclass => "multiclass",
			TaskType::Multilabel => "multilabel",
			TaskType::Regression => "regression",
		}
	}
}

impl FromStr for TaskType {
	type Err = Error;
	fn from_str(s: &str) -> Result<TaskType> {
		match s {
			"binary" => Ok(TaskType::Binary),
			"multiclass" => Ok(TaskType::Multiclass),
			"multilabel" => Ok(TaskType::Multilabel),
			"regression" => Ok(TaskType::Regression),
			_ => Err(Error::UnknownTaskType(s.to_owned())),
		}
	}
}

impl fmt::Display for TaskType {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

/// Number of rows and columns in one split of the dataset.
pub type Shape = (u64, u64);

/**
Shapes keyed by split label, such as "train" or "test", in document order. A null shape is kept as `None`.

When a label appears more than once, the last value wins and keeps the position of the first occurrence.
*/
pub type DatasetShape = IndexMap<String, Option<Shape>>;

/// Number of columns of each semantic feature type. Missing and null counts are zero.
#[derive(Clone, Debug, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FeatureDistribution {
	#[serde(deserialize_with = "null_as_zero")]
	pub n_continuous: u64,
	#[serde(deserialize_with = "null_as_zero")]
	pub n_categorical_cols: u64,
	#[serde(deserialize_with = "null_as_zero")]
	pub n_datetime_cols: u64,
	#[serde(deserialize_with = "null_as_zero")]
	pub n_text_cols: u64,
	#[serde(deserialize_with = "null_as_zero")]
	pub n_location: u64,
	#[serde(deserialize_with = "null_as_zero")]
	pub n_others: u64,
}

fn null_as_zero<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
	D: Deserializer<'de>,
{
	Option::<u64>::deserialize(deserializer).map(Option::unwrap_or_default)
}

#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
#[serde(untagged)]
pub enum TargetDistribution {
	/// Binned counts of a continuous target.
	Histogram(Histogram),
	/// Count per class label of a categorical target, in document order. Counts are kept as written so integers stay integers in the chart options.
	Classes(IndexMap<String, Number>),
}

#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct Histogram {
	pub count: Vec<Number>,
	/// Half open `[lower, upper)` bounds of each bin.
	pub region: Vec<(f64, f64)>,
}

#[cfg(test)]
mod test {
	use super::*;
	use serde_json::json;

	#[test]
	fn test_parse_classification_statistics() {
		let statistics = DatasetStatistics::from_json(
			r#"{
				"target": { "name": "y", "taskType": "binary", "freq": 100, "mean": null },
				"datasetShape": { "train": [1000, 20], "test": null },
				"featureDistribution": { "nContinuous": 3, "nCategoricalCols": 2 },
				"targetDistribution": { "yes": 100, "no": 20 }
			}"#,
		)
		.unwrap();
		assert_eq!(statistics.target.task_type().unwrap(), TaskType::Binary);
		assert_eq!(statistics.target.get("mean"), Some(&Value::Null));
		assert_eq!(statistics.target.get("stdev"), None);
		assert_eq!(
			statistics.dataset_shape.iter().collect::<Vec<_>>(),
			vec![
				(&"train".to_owned(), &Some((1000, 20))),
				(&"test".to_owned(), &None)
			]
		);
		assert_eq!(statistics.feature_distribution.n_continuous, 3);
		assert_eq!(statistics.feature_distribution.n_others, 0);
		match statistics.target_distribution {
			TargetDistribution::Classes(classes) => {
				assert_eq!(classes.keys().collect::<Vec<_>>(), vec!["yes", "no"]);
				assert_eq!(classes.get("no"), Some(&Number::from(20)));
			}
			TargetDistribution::Histogram(_) => panic!("expected class counts"),
		}
	}

	#[test]
	fn test_document_order_survives_json_values() {
		let statistics: DatasetStatistics = serde_json::from_value(json!({
			"target": { "taskType": "binary", "name": "y" },
			"datasetShape": { "train": [10, 2], "test": [5, 2], "all": [15, 2] },
			"targetDistribution": { "yes": 100, "no": 20 },
		}))
		.unwrap();
		assert_eq!(
			statistics.target.0.keys().collect::<Vec<_>>(),
			vec!["taskType", "name"]
		);
		assert_eq!(
			statistics.dataset_shape.keys().collect::<Vec<_>>(),
			vec!["train", "test", "all"]
		);
		match statistics.target_distribution {
			TargetDistribution::Classes(classes) => {
				assert_eq!(classes.keys().collect::<Vec<_>>(), vec!["yes", "no"]);
			}
			TargetDistribution::Histogram(_) => panic!("expected class counts"),
		}
	}

	#[test]
	fn test_parse_regression_distribution() {
		let distribution: TargetDistribution = serde_json::from_value(json!({
			"count": [1, 19],
			"region": [[0, 1], [1, 2.5]],
		}))
		.unwrap();
		assert_eq!(
			distribution,
			TargetDistribution::Histogram(Histogram {
				count: vec![1.into(), 19.into()],
				region: vec![(0.0, 1.0), (1.0, 2.5)],
			})
		);
	}

	#[test]
	fn test_class_order_is_document_order() {
		let distribution: TargetDistribution =
			serde_json::from_str(r#"{ "zebra": 1, "apple": 2.5, "mango": 3 }"#).unwrap();
		assert_eq!(
			serde_json::to_string(&distribution).unwrap(),
			r#"{"zebra":1,"apple":2.5,"mango":3}"#
		);
	}

	#[test]
	fn test_duplicate_key_keeps_first_position() {
		let distribution: TargetDistribution =
			serde_json::from_str(r#"{ "a": 1, "b": 2, "a": 3 }"#).unwrap();
		match distribution {
			TargetDistribution::Classes(classes) => assert_eq!(
				classes.into_iter().collect::<Vec<_>>(),
				vec![
					("a".to_owned(), Number::from(3)),
					("b".to_owned(), Number::from(2))
				]
			),
			TargetDistribution::Histogram(_) => panic!("expected class counts"),
		}
	}

	#[test]
	fn test_null_feature_counts_are_zero() {
		let statistics = DatasetStatistics::from_json(
			r#"{
				"target": { "taskType": "binary" },
				"featureDistribution": { "nContinuous": 3, "nTextCols": null },
				"targetDistribution": { "yes": 1 }
			}"#,
		)
		.unwrap();
		assert_eq!(
			statistics.feature_distribution,
			FeatureDistribution {
				n_continuous: 3,
				..Default::default()
			}
		);
	}

	#[test]
	fn test_task_type() {
		let target: Target = serde_json::from_value(json!({ "taskType": "regression" })).unwrap();
		assert_eq!(target.task_type().unwrap().kind(), TaskKind::Regression);
		let target: Target = serde_json::from_value(json!({ "taskType": "multiclass" })).unwrap();
		assert_eq!(target.task_type().unwrap().kind(), TaskKind::Classification);
		let target: Target = serde_json::from_value(json!({ "taskType": "clustering" })).unwrap();
		assert!(matches!(target.task_type(), Err(Error::UnknownTaskType(t)) if t == "clustering"));
		let target: Target = serde_json::from_value(json!({ "taskType": null })).unwrap();
		assert!(matches!(target.task_type(), Err(Error::MissingTaskType)));
		let target: Target = serde_json::from_value(json!({ "taskType": 1 })).unwrap();
		assert!(matches!(target.task_type(), Err(Error::UnknownTaskType(t)) if t == "1"));
	}

	#[test]
	fn test_malformed_shape_is_rejected() {
		let result = DatasetStatistics::from_json(
			r#"{
				"target": {},
				"datasetShape": { "train": [1000] },
				"targetDistribution": {}
			}"#,
		);
		assert!(matches!(result, Err(Error::Json(_))));
	}
}
