#[derive(Clone, Copy, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SeriesType {
	Pie,
	Bar,
}

#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct Tooltip {
	pub trigger: TooltipTrigger,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub formatter: Option<String>,
}

#[derive(Clone, Copy, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TooltipTrigger {
	Item,
	Axis,
}

#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct Legend {
	#[serde(rename = "type")]
	pub legend_type: LegendType,
	pub orient: Orient,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub right: Option<u32>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub top: Option<u32>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub bottom: Option<u32>,
	pub data: Vec<String>,
}

#[derive(Clone, Copy, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LegendType {
	Plain,
	Scroll,
}

#[derive(Clone, Copy, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Orient {
	Horizontal,
	Vertical,
}

#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct Axis {
	#[serde(rename = "type")]
	pub axis_type: AxisType,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub data: Option<Vec<String>>,
}

#[derive(Clone, Copy, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AxisType {
	Category,
	Value,
}

/// Style applied to a series item while it is hovered.
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Emphasis {
	pub item_style: ItemStyle,
}

#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemStyle {
	pub shadow_blur: u32,
	pub shadow_offset_x: i32,
	pub shadow_color: String,
}
