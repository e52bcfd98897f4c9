use crate::STYLES;
use hboard_html::{component, html, raw};

#[derive(Clone, Debug, PartialEq)]
pub struct PageInfo {
	pub title: String,
	/// External scripts loaded in the head, in order.
	pub script_srcs: Vec<String>,
	/// Inline scripts run at the end of the body, in order.
	pub inline_scripts: Vec<String>,
}

#[component]
pub fn Document(page_info: PageInfo) {
	let PageInfo {
		title,
		script_srcs,
		inline_scripts,
	} = page_info;
	let script_srcs = script_srcs
		.into_iter()
		.map(|src| html! { <script src={src}></script> })
		.collect::<Vec<_>>();
	let inline_scripts = inline_scripts
		.into_iter()
		.map(|script| html! { <script>{raw!(script)}</script> })
		.collect::<Vec<_>>();
	html! {
		<>
			{raw!("<!doctype html>")}
			<html lang="en">
				<head>
					<meta charset="utf-8" />
					<meta content="width=device-width, initial-scale=1" name="viewport" />
					<title>{title}</title>
					<style>{raw!(STYLES)}</style>
					{script_srcs}
				</head>
				<body>
					{children}
					{inline_scripts}
				</body>
			</html>
		</>
	}
}

#[test]
fn test_document() {
	let page_info = PageInfo {
		title: "Dataset".to_owned(),
		script_srcs: vec!["/echarts.js".to_owned()],
		inline_scripts: vec!["init()".to_owned()],
	};
	let html = html! {
		<Document page_info={page_info}>
			{"content"}
		</Document>
	}
	.render_to_string();
	assert!(html.starts_with("<!doctype html><html lang=\"en\"><head><meta charset=\"utf-8\" />"));
	assert!(html.contains("<title>Dataset</title>"));
	assert!(html.contains(r#"<script src="/echarts.js"></script></head>"#));
	assert!(html.ends_with("<body>content<script>init()</script></body></html>"));
}
