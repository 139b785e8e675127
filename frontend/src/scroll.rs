use gloo_console::log;
use shared_data::{event::Section, scroll::{SectionDocument, scroll_to_section}};
use web_sys::{Document, Element, ScrollBehavior, ScrollIntoViewOptions};
use yew::prelude::*;

pub struct Page(Document);

impl Page {
	pub fn current() -> Option<Self> {
		web_sys::window()
			.and_then(|w| w.document())
			.map(Self)
	}
}

impl SectionDocument for Page {
	type Element = Element;

	fn element_by_id(&self, id: &str) -> Option<Element> {
		self.0.get_element_by_id(id)
	}

	fn scroll_smoothly(&self, element: &Element) {
		let opts = ScrollIntoViewOptions::new();
		opts.set_behavior(ScrollBehavior::Smooth);
		element.scroll_into_view_with_scroll_into_view_options(&opts);
	}
}

pub fn scroll_to(section: Section) {
	let Some(page) = Page::current() else {
		log!("No document to scroll in");
		return;
	};

	if !scroll_to_section(&page, section) {
		log!(format!("Section #{} isn't on the page", section.id()));
	}
}

/// An onclick that scrolls to `section` and keeps anchors from jumping there on their own
pub fn scroll_callback(section: Section) -> Callback<MouseEvent> {
	Callback::from(move |e: MouseEvent| {
		e.prevent_default();
		scroll_to(section);
	})
}
