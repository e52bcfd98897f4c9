use crate::statistics::{DatasetShape, Target};
use hboard_html::{component, html};
use hboard_ui::{DataTable, DataTableColumn, DataTableRow};
use serde::Serialize;
use serde_json::Value;

/// Displayed for values that are missing or null.
pub const PLACEHOLDER: &str = "-";

/// The target attributes shown in the summary table, in display order.
pub const TARGET_ATTRIBUTES: [(&str, &str); 10] = [
	("name", "Name"),
	("taskType", "Task type"),
	("freq", "Freq"),
	("unique", "Unique"),
	("missing", "Missing"),
	("mean", "Mean"),
	("min", "Min"),
	("max", "Max"),
	("stdev", "Stdev"),
	("dataType", "Data type"),
];

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SummaryRow {
	pub key: String,
	pub name: String,
	pub value: String,
}

pub fn target_rows(target: &Target) -> Vec<SummaryRow> {
	for key in target.0.keys() {
		if !TARGET_ATTRIBUTES.iter().any(|(known, _)| *known == key.as_str()) {
			tracing::debug!(key = %key, "ignoring unrecognized target attribute");
		}
	}
	TARGET_ATTRIBUTES
		.iter()
		.map(|(key, name)| SummaryRow {
			key: (*key).to_owned(),
			name: (*name).to_owned(),
			value: target
				.get(key)
				.map(format_value)
				.unwrap_or_else(|| PLACEHOLDER.to_owned()),
		})
		.collect()
}

pub fn shape_rows(dataset_shape: &DatasetShape) -> Vec<SummaryRow> {
	dataset_shape
		.iter()
		.map(|(label, shape)| SummaryRow {
			key: label.clone(),
			name: label.clone(),
			value: match shape {
				Some((rows, columns)) => format!("({}, {})", rows, columns),
				None => PLACEHOLDER.to_owned(),
			},
		})
		.collect()
}

/// A two column name/value table with no header and no pagination.
pub fn summary_table(rows: &[SummaryRow]) -> DataTable {
	DataTable {
		columns: vec![
			DataTableColumn {
				title: "Name".to_owned(),
			},
			DataTableColumn {
				title: "Value".to_owned(),
			},
		],
		rows: rows
			.iter()
			.map(|row| DataTableRow {
				key: row.key.clone(),
				cells: vec![row.name.clone(), row.value.clone()],
			})
			.collect(),
		pagination: false,
		show_header: false,
		width: Some("100%".to_owned()),
	}
}

#[component]
pub fn SummaryTable(rows: Vec<SummaryRow>) {
	let DataTable {
		columns,
		rows,
		pagination,
		show_header,
		width,
	} = summary_table(&rows);
	html! {
		<DataTable
			columns={columns}
			rows={rows}
			pagination={pagination}
			show_header={show_header}
			width={width}
		/>
	}
}

pub fn format_value(value: &Value) -> String {
	match value {
		Value::Null => PLACEHOLDER.to_owned(),
		Value::String(value) => value.clone(),
		Value::Number(number) => {
			if let Some(number) = number.as_u64() {
				number.to_string()
			} else if let Some(number) = number.as_i64() {
				number.to_string()
			} else {
				number
					.as_f64()
					.map(format_number)
					.unwrap_or_else(|| number.to_string())
			}
		}
		Value::Bool(value) => value.to_string(),
		value => value.to_string(),
	}
}

/// Whole numbers are written without a fractional part, so `3.0` is written as `3`.
pub fn format_number(value: f64) -> String {
	value.to_string()
}
