pub const STYLES: &str = r#"
body {
	margin: 0;
	padding: 16px;
	background-color: #f0f2f5;
	font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, sans-serif;
	font-size: 14px;
	color: rgba(0, 0, 0, 0.85);
}
.grid-row {
	display: flex;
	flex-wrap: wrap;
	box-sizing: border-box;
}
.grid-col {
	box-sizing: border-box;
}
.block {
	box-sizing: border-box;
	border-style: none;
}
.card {
	box-sizing: border-box;
	background-color: #fff;
	border-radius: 2px;
}
.card-title {
	padding: 16px 24px;
	border-bottom: 1px solid #f0f0f0;
	font-size: 16px;
	font-weight: 500;
}
.card-body {
	padding: 24px;
}
.table-wrapper {
	overflow-x: auto;
}
.table {
	border-collapse: collapse;
}
.table-header-cell {
	padding: 16px;
	background-color: #fafafa;
	font-weight: 500;
	text-align: left;
}
.table-cell {
	padding: 16px;
	border-bottom: 1px solid #f0f0f0;
}
.table-pagination {
	padding: 16px 0;
	text-align: right;
}
.alert {
	display: inline-block;
	padding: 8px 16px;
	border-radius: 2px;
	background-color: #fff2f0;
}
.bar {
	display: flex;
	height: 40px;
	line-height: 40px;
	color: #fff;
	white-space: nowrap;
	overflow: hidden;
}
.bar > div {
	overflow: hidden;
	text-align: center;
}
.legend {
	display: flex;
	flex-wrap: wrap;
	margin-top: 16px;
}
.legendItem {
	margin-right: 24px;
}
.legendPoint {
	display: inline-block;
	width: 10px;
	height: 10px;
	border-radius: 50%;
}
.symbol {
	font-weight: 500;
}
.comment {
	color: rgba(0, 0, 0, 0.45);
}
.chart-noscript {
	padding: 16px;
	text-align: center;
}
"#;
