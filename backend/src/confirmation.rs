use axum::{http::StatusCode, response::Html};
use chrono::Datelike;
use const_format::concatcp;
use horrorshow::{helper::doctype, html, Raw, RenderOnce, Template, TemplateBuffer};
use shared_data::event::{
	copyright_line,
	summary_line,
	CONFIRMATION_NOTE,
	EVENT_NAME,
	QUICK_FACTS
};

const STYLE: &str = concatcp!(shared_data::BASE_STYLE, r"
#confirmation {
	max-width: 560px;
	margin: 60px auto 0 auto;
}
#confirmation h1 {
	margin-top: 0;
}
footer {
	max-width: 560px;
	margin: 24px auto;
	font-size: 12px;
	color: var(--muted-text);
	text-align: center;
}
");

/// The thank-you page people land on after checkout. It doesn't know or check whether they
/// actually paid; Stripe's receipt is the real proof.
pub struct ConfirmationPage {
	pub year: i32
}

impl RenderOnce for ConfirmationPage {
	fn render_once(self, tmpl: &mut TemplateBuffer) {
		tmpl << html! {
			: doctype::HTML;
			html(lang = "en") {
				head {
					meta(charset = "utf-8");
					meta(name = "viewport", content = "width=device-width, initial-scale=1");
					title : format!("Registered - {EVENT_NAME}");
					style : Raw(STYLE);
				}
				body {
					div(id = "confirmation", class = "card") {
						h1 : "See you at the table!";
						p(class = "muted") {
							: "Thanks for registering for the ";
							: EVENT_NAME;
							: " Tournament. Keep your Stripe receipt email handy as proof of entry.";
						}
						@ for fact in &QUICK_FACTS {
							div(class = "fact-row") {
								span(class = "muted") : fact.label;
								span : fact.value;
							}
						}
						p(class = "muted") : CONFIRMATION_NOTE;
						a(href = "/") : "Back to the event page";
					}
					footer {
						: copyright_line(self.year);
						br;
						: summary_line();
					}
				}
			}
		};
	}
}

pub async fn registered_page() -> Result<Html<String>, (StatusCode, String)> {
	tracing::info!("Serving confirmation page");

	ConfirmationPage { year: chrono::Utc::now().year() }
		.into_string()
		.map(Html)
		.map_err(|e| {
			tracing::error!("Couldn't render confirmation page: {e}");
			(StatusCode::INTERNAL_SERVER_ERROR, format!("Couldn't render confirmation page: {e}"))
		})
}
