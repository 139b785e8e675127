pub mod event;
pub mod faq;
pub mod registration;
pub mod scroll;
mod md_to_html;

pub use md_to_html::md_inline;

// Colors are the felt-and-ivory palette from the flyer. Everything that isn't in here is
// page-specific and lives with the page.
pub const BASE_STYLE: &str = r#"
* {
	--body-background: #0b0f0e;
	--main-background: #141a19;
	--card-background: #18201e;
	--main-text: #f2efe6;
	--muted-text: #a4aaa5;
	--border-color: #2a3431;
	--primary: #d11111;
	--good: #2fb36a;
	--warn: #e0a526;
	--cyan: #22b8cf;
	box-sizing: border-box;
	font-family: "Inter", system-ui, sans-serif;
	color: var(--main-text);
}
body {
	background-color: var(--body-background);
	margin: 0;
}
a {
	color: var(--primary);
	text-decoration: none;
}
a:hover {
	text-decoration: underline;
}
button {
	cursor: pointer;
	font: inherit;
	border-radius: 8px;
	padding: 8px 14px;
	border: 1px solid transparent;
	background-color: var(--primary);
}
button:disabled {
	cursor: progress;
	opacity: 0.6;
}
input, textarea {
	width: 100%;
	font: inherit;
	padding: 8px 10px;
	background-color: var(--main-background);
	border: 1px solid var(--border-color);
	border-radius: 6px;
}
.card {
	background-color: var(--card-background);
	border: 1px solid var(--border-color);
	border-radius: 14px;
	padding: 18px 20px;
}
.card > h2 {
	margin-top: 0;
	font-size: 20px;
}
.muted {
	color: var(--muted-text);
}
.badge {
	display: inline-block;
	padding: 3px 10px;
	margin: 0 6px 6px 0;
	border-radius: 999px;
	border: 1px solid var(--border-color);
	font-size: 13px;
}
.fact-row {
	display: flex;
	justify-content: space-between;
	gap: 16px;
	padding: 9px 12px;
	margin-bottom: 8px;
	border-radius: 8px;
	border: 1px solid var(--border-color);
	font-size: 14px;
}
.fact-row > :last-child {
	font-weight: bold;
}
"#;
