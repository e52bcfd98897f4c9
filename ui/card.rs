use hboard_html::{component, html, style};

/// A titled panel. The body holds the children.
#[component]
pub fn Card(title: String, width: Option<String>) {
	let style = style! {
		"width" => width,
	};
	html! {
		<div class="card" style={style}>
			<div class="card-title">{title}</div>
			<div class="card-body">{children}</div>
		</div>
	}
}

#[test]
fn test_card() {
	let html = html! {
		<Card title="Target" width={Some("100%".to_owned())}>
			{"body"}
		</Card>
	}
	.render_to_string();
	insta::assert_snapshot!(
		html,
		@r#"<div class="card" style="width: 100%"><div class="card-title">Target</div><div class="card-body">body</div></div>"#
	);
}

#[test]
fn test_card_without_width() {
	let html = html! {
		<Card title="Dataset shape" width={None}></Card>
	}
	.render_to_string();
	assert!(html.starts_with(r#"<div class="card"><div class="card-title">"#));
}
