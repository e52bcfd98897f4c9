use hboard_html::{component, html, style};

/// Rows shown per page when a `DataTable` is paginated.
pub const PAGE_SIZE: usize = 10;

#[component]
pub fn Table(width: Option<String>) {
	let style = style! {
		"width" => width.unwrap_or_else(|| "auto".to_owned()),
	};
	html! {
		<div class="table-wrapper">
			<table class="table" style={style}>
				{children}
			</table>
		</div>
	}
}

#[component]
pub fn TableHeader() {
	html! {
		<thead class="table-header">{children}</thead>
	}
}

#[component]
pub fn TableBody() {
	html! {
		<tbody>{children}</tbody>
	}
}

#[component]
pub fn TableRow(key: Option<String>) {
	html! {
		<tr data-key={key}>{children}</tr>
	}
}

#[component]
pub fn TableHeaderCell() {
	html! {
		<th class="table-header-cell">{children}</th>
	}
}

#[component]
pub fn TableCell() {
	html! {
		<td class="table-cell">{children}</td>
	}
}

#[derive(Clone, Debug, PartialEq)]
pub struct DataTableColumn {
	pub title: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct DataTableRow {
	pub key: String,
	pub cells: Vec<String>,
}

/// A table driven by plain column and row data. Cells are matched to columns by position.
#[component]
pub fn DataTable(
	columns: Vec<DataTableColumn>,
	rows: Vec<DataTableRow>,
	pagination: bool,
	show_header: bool,
	width: Option<String>,
) {
	let page_count = page_count(rows.len(), pagination);
	let visible_row_count = if pagination { PAGE_SIZE } else { rows.len() };
	let header = if show_header {
		let cells = columns
			.iter()
			.map(|column| {
				html! {
					<TableHeaderCell>{column.title.clone()}</TableHeaderCell>
				}
			})
			.collect::<Vec<_>>();
		Some(html! {
			<TableHeader>
				<TableRow key={None}>{cells}</TableRow>
			</TableHeader>
		})
	} else {
		None
	};
	let n_columns = columns.len();
	let rows = rows
		.into_iter()
		.take(visible_row_count)
		.map(|row| {
			let cells = row
				.cells
				.into_iter()
				.take(n_columns)
				.map(|cell| html! { <TableCell>{cell}</TableCell> })
				.collect::<Vec<_>>();
			html! {
				<TableRow key={Some(row.key)}>{cells}</TableRow>
			}
		})
		.collect::<Vec<_>>();
	let footer = if pagination {
		Some(html! {
			<div class="table-pagination">{format!("Page 1 of {}", page_count)}</div>
		})
	} else {
		None
	};
	html! {
		<>
			<Table width={width}>
				{header}
				<TableBody>{rows}</TableBody>
			</Table>
			{footer}
		</>
	}
}

/// Number of pages needed to show `n_rows`. An unpaginated table is a single page.
pub fn page_count(n_rows: usize, pagination: bool) -> usize {
	if pagination {
		((n_rows + PAGE_SIZE - 1) / PAGE_SIZE).max(1)
	} else {
		1
	}
}
