//! The one piece of this site that does anything: take the three form fields, ask the checkout
//! function for a Stripe session, and hand back the url we should send the browser to.
//!
//! Nothing in here touches the network or the DOM. The frontend supplies a [`CheckoutClient`]
//! that actually does the fetch and does the navigating itself once [`submit`] hands it a url.

use std::future::Future;

use serde::{Deserialize, Serialize};

/// Where the serverless function that creates checkout sessions lives, relative to the page
pub const CHECKOUT_ENDPOINT: &str = "/.netlify/functions/create-checkout-session";

pub const NAME_REQUIRED: &str = "Please enter your name";
pub const ERROR_PREFIX: &str = "Error: ";
/// Shown when a failure doesn't come with anything more specific to say
pub const FALLBACK_FAILURE: &str = "Unable to start payment.";
/// Shown when the function responded with a failure status but no `error` field
pub const CHECKOUT_FAILED: &str = "Checkout creation failed.";

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Field {
	Name,
	Phone,
	Notes,
}

impl Field {
	#[must_use]
	pub const fn id(self) -> &'static str {
		match self {
			Self::Name => "name",
			Self::Phone => "phone",
			Self::Notes => "notes",
		}
	}
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RegistrationForm {
	pub name: String,
	pub phone: String,
	pub notes: String,
}

impl RegistrationForm {
	pub fn set(&mut self, field: Field, value: String) {
		*self.field_mut(field) = value;
	}

	#[must_use]
	pub fn get(&self, field: Field) -> &str {
		match field {
			Field::Name => &self.name,
			Field::Phone => &self.phone,
			Field::Notes => &self.notes,
		}
	}

	fn field_mut(&mut self, field: Field) -> &mut String {
		match field {
			Field::Name => &mut self.name,
			Field::Phone => &mut self.phone,
			Field::Notes => &mut self.notes,
		}
	}

	/// The body we'd send for this form, or `None` if there's no name to register under. Fields
	/// are sent as typed; only the emptiness check trims.
	#[must_use]
	pub fn to_request(&self) -> Option<CheckoutRequest> {
		(!self.name.trim().is_empty()).then(|| CheckoutRequest {
			name: self.name.clone(),
			phone: self.phone.clone(),
			note: self.notes.clone(),
		})
	}
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct CheckoutRequest {
	pub name: String,
	pub phone: String,
	// the function expects the singular
	pub note: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct CheckoutSession {
	pub url: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct CheckoutErrorBody {
	#[serde(default)]
	pub error: Option<String>,
}

#[derive(thiserror::Error, Clone, Debug, PartialEq, Eq)]
pub enum CheckoutError {
	/// The function answered, but with a non-2xx status
	#[error("checkout function returned {status}: {message}")]
	Rejected { status: u16, message: String },
	/// The function answered with something we couldn't make sense of
	#[error("couldn't decode checkout response: {0}")]
	Malformed(String),
	/// We never got an answer at all
	#[error("couldn't reach checkout function: {}", .0.as_deref().unwrap_or("no details"))]
	Transport(Option<String>),
}

impl CheckoutError {
	fn detail(&self) -> Option<&str> {
		let detail = match self {
			Self::Rejected { message, .. } | Self::Malformed(message) => Some(message.as_str()),
			Self::Transport(message) => message.as_deref(),
		};

		detail.filter(|m| !m.is_empty())
	}

	/// What gets shown under the form
	#[must_use]
	pub fn status_message(&self) -> String {
		format!("{ERROR_PREFIX}{}", self.detail().unwrap_or(FALLBACK_FAILURE))
	}
}

/// Turns whatever the checkout function sent back into either a session to redirect to or an
/// error. The body is decoded before the status is looked at, so a garbage body is reported as
/// such even when the status was also bad.
pub fn interpret_response(status: u16, body: &str) -> Result<CheckoutSession, CheckoutError> {
	let value: serde_json::Value = serde_json::from_str(body)
		.map_err(|e| CheckoutError::Malformed(e.to_string()))?;

	if !(200..300).contains(&status) {
		let CheckoutErrorBody { error } = serde_json::from_value(value).unwrap_or_default();
		return Err(CheckoutError::Rejected {
			status,
			message: error
				.filter(|e| !e.is_empty())
				.unwrap_or_else(|| CHECKOUT_FAILED.into())
		});
	}

	serde_json::from_value(value)
		.map_err(|e| CheckoutError::Malformed(e.to_string()))
}

/// Something that can ask for a checkout session. The real one is a `fetch` in the browser.
pub trait CheckoutClient {
	fn create_session(&self, request: &CheckoutRequest) -> impl Future<Output = Result<CheckoutSession, CheckoutError>>;
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SubmissionStatus {
	pub is_submitting: bool,
	pub message: Option<String>,
}

impl SubmissionStatus {
	/// Starts a submission if we're allowed to, returning what should be sent. Refuses (and leaves
	/// everything alone) while another one is still out. A blank name only sets the message; it
	/// doesn't flip us into the loading state.
	pub fn begin(&mut self, form: &RegistrationForm) -> Option<CheckoutRequest> {
		if self.is_submitting {
			return None;
		}

		let Some(request) = form.to_request() else {
			self.message = Some(NAME_REQUIRED.into());
			return None;
		};

		self.is_submitting = true;
		self.message = None;
		Some(request)
	}

	/// Wraps up a submission. On success this returns the url to navigate to and stays in the
	/// submitting state, since the page is about to go away anyways.
	pub fn finish(&mut self, result: Result<CheckoutSession, CheckoutError>) -> Option<String> {
		match result {
			Ok(CheckoutSession { url }) => Some(url),
			Err(e) => {
				self.is_submitting = false;
				self.message = Some(e.status_message());
				None
			}
		}
	}

	#[must_use]
	pub const fn button_label(&self) -> &'static str {
		if self.is_submitting {
			"Creating Stripe Checkout..."
		} else {
			"Pay $10 & Register (Stripe)"
		}
	}
}

/// Runs one submission from start to finish. `publish` is called with every state the user should
/// see (the loading state, then the failure if there is one) so the caller can re-render as we
/// go. Returns the url to navigate to if checkout was created.
pub async fn submit<C, P>(
	client: &C,
	status: &mut SubmissionStatus,
	form: &RegistrationForm,
	mut publish: P
) -> Option<String>
where
	C: CheckoutClient,
	P: FnMut(&SubmissionStatus)
{
	let before = status.clone();
	let request = status.begin(form);

	if *status != before {
		publish(status);
	}

	let result = client.create_session(&request?).await;
	let redirect = status.finish(result);

	if redirect.is_none() {
		publish(status);
	}

	redirect
}

#[cfg(test)]
mod tests {
	use std::{cell::RefCell, rc::Rc};

	use super::*;

	struct MockCheckout {
		sent: RefCell<Vec<CheckoutRequest>>,
		reply: Result<CheckoutSession, CheckoutError>,
	}

	impl MockCheckout {
		fn replying(reply: Result<CheckoutSession, CheckoutError>) -> Self {
			Self { sent: RefCell::default(), reply }
		}
	}

	impl CheckoutClient for MockCheckout {
		async fn create_session(&self, request: &CheckoutRequest) -> Result<CheckoutSession, CheckoutError> {
			self.sent.borrow_mut().push(request.clone());
			self.reply.clone()
		}
	}

	fn form(name: &str, phone: &str, notes: &str) -> RegistrationForm {
		RegistrationForm { name: name.into(), phone: phone.into(), notes: notes.into() }
	}

	fn success() -> Result<CheckoutSession, CheckoutError> {
		Ok(CheckoutSession { url: "https://example.com/success".into() })
	}

	#[tokio::test]
	async fn blank_names_never_hit_the_network() {
		for name in ["", " ", "\t\n  "] {
			let client = MockCheckout::replying(success());
			let mut status = SubmissionStatus::default();
			let mut published = Vec::new();

			let redirect = submit(&client, &mut status, &form(name, "555", "hi"), |s| published.push(s.clone())).await;

			assert_eq!(redirect, None);
			assert!(client.sent.borrow().is_empty());
			assert!(!status.is_submitting);
			assert_eq!(status.message.as_deref(), Some(NAME_REQUIRED));
			assert_eq!(published.len(), 1);
		}
	}

	#[tokio::test]
	async fn sends_exactly_one_request_with_note_key() {
		let client = MockCheckout::replying(success());
		let mut status = SubmissionStatus::default();

		let redirect = submit(&client, &mut status, &form("Minnesota Fats", "(512) 555-0199", "bringing my own cue"), |_| ()).await;

		assert_eq!(redirect.as_deref(), Some("https://example.com/success"));
		let sent = client.sent.borrow();
		assert_eq!(sent.len(), 1);
		assert_eq!(
			serde_json::to_value(&sent[0]).unwrap(),
			serde_json::json!({
				"name": "Minnesota Fats",
				"phone": "(512) 555-0199",
				"note": "bringing my own cue"
			})
		);
	}

	#[tokio::test]
	async fn loading_state_is_published_before_the_request_resolves() {
		let client = MockCheckout::replying(success());
		let mut status = SubmissionStatus::default();
		let mut published = Vec::new();

		submit(&client, &mut status, &form("Earl", "", ""), |s| published.push(s.clone())).await;

		assert_eq!(published, [SubmissionStatus { is_submitting: true, message: None }]);
		// we're navigating away, so there's no reason to come back out of loading
		assert!(status.is_submitting);
	}

	#[tokio::test]
	async fn rejection_shows_server_error_and_reenables() {
		let client = MockCheckout::replying(interpret_response(402, r#"{"error":"card_declined"}"#));
		let mut status = SubmissionStatus::default();

		let redirect = submit(&client, &mut status, &form("Earl", "", ""), |_| ()).await;

		assert_eq!(redirect, None);
		assert!(!status.is_submitting);
		assert_eq!(status.message.as_deref(), Some("Error: card_declined"));
	}

	#[tokio::test]
	async fn transport_failure_without_details_uses_fallback() {
		let client = MockCheckout::replying(Err(CheckoutError::Transport(None)));
		let mut status = SubmissionStatus::default();

		submit(&client, &mut status, &form("Earl", "", ""), |_| ()).await;

		assert!(!status.is_submitting);
		assert_eq!(status.message.as_deref(), Some("Error: Unable to start payment."));
	}

	#[tokio::test]
	async fn in_flight_submission_blocks_another() {
		let client = MockCheckout::replying(success());
		let mut status = SubmissionStatus { is_submitting: true, message: None };
		let mut published = 0;

		let redirect = submit(&client, &mut status, &form("Earl", "", ""), |_| published += 1).await;

		assert_eq!(redirect, None);
		assert_eq!(published, 0);
		assert!(client.sent.borrow().is_empty());
	}

	/// Stands in for a second click that lands while the first request is still out. It starts
	/// from whatever status the page last stored, the way the submit callback does.
	struct DoubleClick {
		live: Rc<RefCell<SubmissionStatus>>,
		second_attempt: RefCell<Option<Option<CheckoutRequest>>>,
	}

	impl CheckoutClient for DoubleClick {
		async fn create_session(&self, _: &CheckoutRequest) -> Result<CheckoutSession, CheckoutError> {
			let mut current = self.live.borrow().clone();
			*self.second_attempt.borrow_mut() = Some(current.begin(&form("Earl", "", "")));
			success()
		}
	}

	#[tokio::test]
	async fn click_before_rerender_sees_live_status() {
		let live = Rc::new(RefCell::new(SubmissionStatus::default()));
		let client = DoubleClick { live: Rc::clone(&live), second_attempt: RefCell::default() };
		let mut current = live.borrow().clone();

		let redirect = submit(&client, &mut current, &form("Earl", "", ""), |s| {
			*live.borrow_mut() = s.clone();
		}).await;

		assert!(redirect.is_some());
		assert_eq!(client.second_attempt.into_inner(), Some(None));
	}

	#[test]
	fn retry_clears_previous_message() {
		let mut status = SubmissionStatus::default();
		assert_eq!(status.begin(&form("", "", "")), None);
		assert!(status.message.is_some());

		assert!(status.begin(&form("Earl", "", "")).is_some());
		assert_eq!(status.message, None);
	}

	#[test]
	fn name_is_sent_untrimmed() {
		let request = form("  Earl ", "", "").to_request().unwrap();
		assert_eq!(request.name, "  Earl ");
	}

	#[test]
	fn interprets_responses() {
		assert_eq!(
			interpret_response(200, r#"{"url":"https://checkout.stripe.com/c/pay/cs_test"}"#),
			Ok(CheckoutSession { url: "https://checkout.stripe.com/c/pay/cs_test".into() })
		);

		assert_eq!(
			interpret_response(500, "{}").map_err(|e| e.status_message()),
			Err("Error: Checkout creation failed.".into())
		);

		assert_eq!(
			interpret_response(400, r#"{"error":""}"#).map_err(|e| e.status_message()),
			Err("Error: Checkout creation failed.".into())
		);

		assert!(matches!(interpret_response(502, "<html>bad gateway</html>"), Err(CheckoutError::Malformed(_))));
		// a 200 that doesn't tell us where to go is no better than a failure
		assert!(matches!(interpret_response(200, r#"{"id":"cs_test"}"#), Err(CheckoutError::Malformed(_))));
	}

	#[test]
	fn transport_message_is_passed_through() {
		let err = CheckoutError::Transport(Some("Failed to fetch".into()));
		assert_eq!(err.status_message(), "Error: Failed to fetch");
	}

	#[test]
	fn form_fields_are_independent() {
		let mut f = RegistrationForm::default();
		f.set(Field::Phone, "555".into());
		f.set(Field::Notes, "lefty".into());
		assert_eq!(f.get(Field::Name), "");
		assert_eq!(f.get(Field::Phone), "555");
		assert_eq!(f.get(Field::Notes), "lefty");
	}

	#[test]
	fn button_label_follows_state() {
		let mut status = SubmissionStatus::default();
		assert_eq!(status.button_label(), "Pay $10 & Register (Stripe)");
		status.is_submitting = true;
		assert_eq!(status.button_label(), "Creating Stripe Checkout...");
	}
}
