use hboard_html::{classes, component, html, style};

/// Number of columns spanned by a full width `Col`.
pub const GRID_COLUMNS: u8 = 24;

/// A row of the 24 column grid. `gutter` is the horizontal and vertical gap between columns, in pixels.
#[component]
pub fn Row(gutter: (u32, u32)) {
	let (horizontal, vertical) = gutter;
	let style = style! {
		"gap" => format!("{}px {}px", vertical, horizontal),
	};
	html! {
		<div class="grid-row" style={style}>{children}</div>
	}
}

#[component]
pub fn Col(span: u8) {
	let span = span.min(GRID_COLUMNS);
	let class = classes!("grid-col", format!("grid-col-{}", span));
	let style = style! {
		"width" => format_span(span),
	};
	html! {
		<div class={class} style={style}>{children}</div>
	}
}

fn format_span(span: u8) -> String {
	if span == GRID_COLUMNS {
		"100%".to_owned()
	} else {
		let percent = f64::from(span) / f64::from(GRID_COLUMNS) * 100.0;
		format!("{:.4}%", percent)
	}
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Direction {
	Horizontal,
	Vertical,
}

/// A flex container. `flex` makes the block grow to fill the space left by its siblings.
#[component]
pub fn Block(
	direction: Option<Direction>,
	flex: bool,
	width: Option<String>,
	height: Option<String>,
	border_width: Option<u32>,
) {
	let (display, flex_direction) = match direction {
		Some(Direction::Horizontal) => (Some("flex"), Some("row")),
		Some(Direction::Vertical) => (Some("flex"), Some("column")),
		None => (None, None),
	};
	let style = style! {
		"display" => display,
		"flex-direction" => flex_direction,
		"flex" => if flex { Some("1") } else { None },
		"width" => width,
		"height" => height,
		"border-width" => border_width.map(|width| format!("{}px", width)),
	};
	html! {
		<div class="block" style={style}>{children}</div>
	}
}
