use yew::prelude::*;

#[function_component(SharedStyle)]
pub fn shared_style() -> Html {
	html! { <style>{ shared_data::BASE_STYLE }</style> }
}

/// A line of trusted markdown, rendered inline
pub fn md(text: &str) -> Html {
	// wrapped so the raw html always has exactly one root
	Html::from_html_unchecked(format!("<span>{}</span>", shared_data::md_inline(text)).into())
}
