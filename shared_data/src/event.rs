//! Everything about the event itself that shows up on the page. None of this is computed; it's the
//! same copy the organizer hands out on flyers, kept in one place so the client page and the
//! server-rendered confirmation page can't drift apart.

pub const EVENT_NAME: &str = "Par for the Course";
pub const FORMAT_NAME: &str = "Par for the Course – Tournament";
pub const ORGANIZER: &str = "Promethean Games";

pub const VENUE: &str = "Betsy's Billiards";
pub const CITY: &str = "Austin, TX";
pub const ADDRESS: &str = "1901 W. William Cannon Dr. Ste. 147, Austin, TX 78745";
pub const MAP_URL: &str = "https://maps.app.goo.gl/VaVJEA8ceJGWoAQk6";

pub const ENTRY_FEE: &str = "$10";
pub const TABLES: &str = "8-foot Diamond";
pub const HOLES: u8 = 18;
pub const DATE: &str = "Sunday, January 18th, 2026";
pub const TBD: &str = "TBD";

/// The anchors on the page that the header and hero buttons can scroll to
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Section {
	Top,
	Format,
	Schedule,
	Register,
	Faq,
}

impl Section {
	/// The ones that get a button in the header, in the order they're shown. Register is left out
	/// 'cause it gets its own, louder button.
	pub const NAV: [Self; 3] = [Self::Format, Self::Schedule, Self::Faq];

	#[must_use]
	pub const fn id(self) -> &'static str {
		match self {
			Self::Top => "top",
			Self::Format => "format",
			Self::Schedule => "schedule",
			Self::Register => "register",
			Self::Faq => "faq",
		}
	}

	#[must_use]
	pub const fn nav_label(self) -> &'static str {
		match self {
			Self::Top => EVENT_NAME,
			Self::Format => "Format",
			Self::Schedule => "Schedule",
			Self::Register => "Pay & Register",
			Self::Faq => "FAQ",
		}
	}
}

/// A label/value pair in the quick facts card or the schedule grid. `id` is only used to build
/// stable `data-testid`s.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Fact {
	pub label: &'static str,
	pub value: &'static str,
	pub id: &'static str,
}

const fn fact(label: &'static str, value: &'static str, id: &'static str) -> Fact {
	Fact { label, value, id }
}

pub const QUICK_FACTS: [Fact; 7] = [
	fact("Entry", ENTRY_FEE, "entry"),
	fact("Location", "Betsy's Billiards (Austin, TX)", "location"),
	fact("Tables", TABLES, "tables"),
	fact("Format", "18 holes - rotation", "format"),
	fact("Date", DATE, "date"),
	fact("Check-in", TBD, "checkin"),
	fact("Start", TBD, "start"),
];

pub const SCHEDULE: [Fact; 5] = [
	fact("Doors", TBD, "doors"),
	fact("Check-in", TBD, "checkin"),
	fact("Player meeting", TBD, "meeting"),
	fact("Start", TBD, "start"),
	fact("Awards", TBD, "awards"),
];

pub const CONFIRMATION_NOTE: &str = "Registration is confirmed when Stripe reports your payment completed.";

pub const HERO_LEDE: &str = "A course-style pool tournament in the **Par for the Course – Tournament** \
	format: **18 holes** designed to reward smart patterns, cue-ball control, and clean execution.";

pub const TBD_NOTICE: &str = "Some event details (table count, pacing, payouts) are **TBD** based on \
	turnout and table availability.";

pub const HIGHLIGHTS: [&str; 4] = [
	"18 holes",
	FORMAT_NAME,
	"8' Diamond tables",
	"Start time: TBD",
];

pub const WALKING_INTO: &str = "Competitive without getting messy. The scoring rewards fundamentals: \
	position, shot selection, and staying out of trouble.";

// These are markdown so the bold lead-ins don't have to be split out into separate fields
pub const WALKING_INTO_POINTS: [&str; 3] = [
	"**Skill-forward scoring:** your decisions show up on the card.",
	"**Efficient flow:** groups rotate across tables to complete all 18 holes.",
	"**Clean entry control:** Stripe-confirmed payment = confirmed registration.",
];

pub const FORMAT_POINTS: [&str; 4] = [
	"**Total:** 18 holes",
	"**Tables:** 8-foot Diamond",
	"**Flow:** players split into groups and rotate until all 18 holes are complete",
	"**Winner:** lowest total score",
];

pub const FORMAT_TAGS: [&str; 2] = ["18-hole scorecard", "Rotation-based pace"];

pub const REGISTER_BLURB: &str = "Enter your info, then complete Stripe Checkout. Once payment \
	completes, your entry is confirmed.";

pub const REDIRECT_NOTE: &str = "After payment you'll be redirected to a confirmation page.";

#[must_use]
pub fn copyright_line(year: i32) -> String {
	format!("© {year} {ORGANIZER} - {EVENT_NAME}")
}

#[must_use]
pub fn summary_line() -> String {
	format!("{VENUE} - {CITY} - {ENTRY_FEE} entry - {HOLES} holes - 8' Diamond")
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn section_ids_are_unique() {
		let all = [Section::Top, Section::Format, Section::Schedule, Section::Register, Section::Faq];
		for (i, a) in all.iter().enumerate() {
			for b in &all[i + 1..] {
				assert_ne!(a.id(), b.id());
			}
		}
	}

	#[test]
	fn footer_lines() {
		assert_eq!(copyright_line(2026), "© 2026 Promethean Games - Par for the Course");
		assert_eq!(summary_line(), "Betsy's Billiards - Austin, TX - $10 entry - 18 holes - 8' Diamond");
	}
}
