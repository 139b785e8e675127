use gloo_console::error;
use gloo_net::http::Request;
use shared_data::registration::{
	CHECKOUT_ENDPOINT,
	CheckoutClient,
	CheckoutError,
	CheckoutRequest,
	CheckoutSession,
	interpret_response
};

/// Talks to the checkout function with a plain `fetch`. One attempt, no timeout; if the function
/// never answers, neither do we.
pub struct FetchCheckout;

impl CheckoutClient for FetchCheckout {
	async fn create_session(&self, request: &CheckoutRequest) -> Result<CheckoutSession, CheckoutError> {
		let res = Request::post(CHECKOUT_ENDPOINT)
			.json(request)
			.map_err(transport_error)?
			.send()
			.await
			.map_err(transport_error)?;

		let body = res.text().await.map_err(transport_error)?;
		interpret_response(res.status(), &body)
	}
}

/// A failed `fetch` comes back as a JS `TypeError`, whose `Display` is `"TypeError: Failed to
/// fetch"`. Only the message part is meant for people.
pub fn transport_error(e: gloo_net::Error) -> CheckoutError {
	match e {
		gloo_net::Error::JsError(js) => CheckoutError::Transport(Some(js.message)),
		other => CheckoutError::Transport(Some(other.to_string()))
	}
}

/// Sends the whole tab off to `url`
pub fn navigate(url: &str) {
	let Some(window) = web_sys::window() else {
		error!("No window to navigate with");
		return;
	};

	if let Err(e) = window.location().set_href(url) {
		error!(format!("Couldn't navigate to {url}: {e:?}"));
	}
}
