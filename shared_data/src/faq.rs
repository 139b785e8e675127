#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct FaqItem {
	pub question: &'static str,
	pub answer: &'static str,
}

pub const FAQ_ITEMS: [FaqItem; 4] = [
	FaqItem {
		question: "How is my registration confirmed?",
		answer: "Your spot is officially locked in once Stripe confirms your payment. Tip: Save your \
			Stripe receipt email as proof of entry.",
	},
	FaqItem {
		question: "What is \"Par for the Course – Tournament\"?",
		answer: "It's a course-style competition inspired by golf, played on the pool table. Players \
			score 18 holes on a single scorecard. Lowest total score wins.",
	},
	FaqItem {
		question: "How many tables will be used / how many holes per table?",
		answer: "Final table assignments and hole distribution will be determined once turnout is \
			confirmed and table availability is locked. We'll optimize the layout to keep play moving \
			and competitive.",
	},
	FaqItem {
		question: "What about check-in and start time?",
		answer: "Check-in and start times are TBD for now and will be clearly communicated by the \
			organizer ahead of the event. Expect plenty of notice so you can show up ready to play.",
	},
];

/// Whether a single FAQ answer is showing. Every item on the page owns one of these, and they
/// never look at each other, so opening one question doesn't close another.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Disclosure {
	open: bool,
}

impl Disclosure {
	#[must_use]
	pub const fn is_open(self) -> bool {
		self.open
	}

	#[must_use]
	pub const fn toggled(self) -> Self {
		Self { open: !self.open }
	}

	#[must_use]
	pub const fn indicator(self) -> &'static str {
		if self.open { "▴" } else { "▾" }
	}
}
