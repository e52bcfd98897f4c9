use hboard_html::{component, html};

/// An inline error message.
#[component]
pub fn Alert() {
	html! {
		<span class="alert">{children}</span>
	}
}

#[test]
fn test_alert() {
	let html = html! {
		<Alert>{"Something went wrong."}</Alert>
	}
	.render_to_string();
	assert_eq!(html, r#"<span class="alert">Something went wrong.</span>"#);
}
