use crate::event::Section;

/// Just enough of a document to find a section and glide to it
pub trait SectionDocument {
	type Element;

	fn element_by_id(&self, id: &str) -> Option<Self::Element>;
	fn scroll_smoothly(&self, element: &Self::Element);
}

/// Scrolls to the element with the given id if there is one. Returns whether anything happened;
/// a missing id is not an error, it's just a button that does nothing.
pub fn scroll_to_id<D: SectionDocument>(doc: &D, id: &str) -> bool {
	doc.element_by_id(id)
		.map(|el| doc.scroll_smoothly(&el))
		.is_some()
}

pub fn scroll_to_section<D: SectionDocument>(doc: &D, section: Section) -> bool {
	scroll_to_id(doc, section.id())
}

#[cfg(test)]
mod tests {
	use std::cell::RefCell;

	use super::*;

	struct FakeDocument {
		ids: &'static [&'static str],
		scrolled: RefCell<Vec<&'static str>>,
	}

	impl SectionDocument for FakeDocument {
		type Element = &'static str;

		fn element_by_id(&self, id: &str) -> Option<Self::Element> {
			self.ids.iter().copied().find(|el| *el == id)
		}

		fn scroll_smoothly(&self, element: &Self::Element) {
			self.scrolled.borrow_mut().push(element);
		}
	}

	#[test]
	fn scrolls_to_existing_sections() {
		let doc = FakeDocument { ids: &["top", "format", "faq"], scrolled: RefCell::default() };

		assert!(scroll_to_section(&doc, Section::Format));
		assert!(scroll_to_section(&doc, Section::Faq));
		assert_eq!(*doc.scrolled.borrow(), ["format", "faq"]);
	}

	#[test]
	fn unknown_id_is_a_no_op() {
		let doc = FakeDocument { ids: &["top"], scrolled: RefCell::default() };

		assert!(!scroll_to_id(&doc, "nowhere"));
		assert!(!scroll_to_section(&doc, Section::Register));
		assert!(doc.scrolled.borrow().is_empty());
	}
}
