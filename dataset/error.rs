use crate::statistics::TaskType;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
	#[error("the target has no task type")]
	MissingTaskType,
	#[error("unknown task type {0}, expected one of binary, multiclass, multilabel or regression")]
	UnknownTaskType(String),
	#[error("the target distribution does not fit task type {task_type}, expected {expected}")]
	DistributionMismatch {
		task_type: TaskType,
		expected: &'static str,
	},
	#[error("the target distribution has {counts} bin counts but {regions} bin regions")]
	BinCountMismatch { counts: usize, regions: usize },
	#[error(transparent)]
	Json(#[from] serde_json::Error),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
