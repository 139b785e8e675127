use pulldown_cmark::{Event, Options, Parser, Tag, TagEnd};

/// Renders a single line of markdown to HTML without wrapping it in a `<p>`, so it can be dropped
/// into a `<span>` or `<li>`. Only trusted, compiled-in copy goes through here, so the output isn't
/// sanitized.
#[must_use]
pub fn md_inline(input: &str) -> String {
	let events = Parser::new_ext(input, Options::empty())
		.filter(|ev| !matches!(ev, Event::Start(Tag::Paragraph) | Event::End(TagEnd::Paragraph)));

	let mut html = String::with_capacity(input.len() + 16);
	pulldown_cmark::html::push_html(&mut html, events);

	// push_html leaves a trailing newline after a closed paragraph, and we don't want that inside
	// inline elements
	let trimmed_len = html.trim_end().len();
	html.truncate(trimmed_len);
	html
}

#[cfg(test)]
mod tests {
	use super::md_inline;

	#[test]
	fn bold_lead_in() {
		assert_eq!(
			md_inline("**Winner:** lowest total score"),
			"<strong>Winner:</strong> lowest total score"
		);
	}

	#[test]
	fn escapes_plain_text() {
		assert_eq!(md_inline("3 < 4 & 5"), "3 &lt; 4 &amp; 5");
	}
}
