use gloo_console::log;
use shared_data::{
	event::{REDIRECT_NOTE, REGISTER_BLURB},
	registration::{submit, Field, RegistrationForm, SubmissionStatus}
};
use wasm_bindgen::JsCast;
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::checkout::{navigate, FetchCheckout};

fn input_value(e: &InputEvent) -> Option<String> {
	e.target()?
		.dyn_into::<HtmlInputElement>()
		.map(|input| input.value())
		.or_else(|target| target.dyn_into::<HtmlTextAreaElement>().map(|area| area.value()))
		.ok()
}

#[function_component(RegisterForm)]
pub fn register_form() -> Html {
	let form = use_state(RegistrationForm::default);
	let status = use_state(SubmissionStatus::default);
	// What the last publish stored, which a click can see before the re-render lands
	let live = use_mut_ref(SubmissionStatus::default);

	let on_input = |field: Field| {
		let form = form.clone();
		Callback::from(move |e: InputEvent| {
			if let Some(value) = input_value(&e) {
				let mut updated = (*form).clone();
				updated.set(field, value);
				form.set(updated);
			}
		})
	};

	let on_submit = {
		let form = form.clone();
		let status = status.clone();
		let live = live.clone();
		Callback::from(move |e: SubmitEvent| {
			e.prevent_default();

			let form = (*form).clone();
			let mut current = live.borrow().clone();
			let status = status.clone();
			let live = live.clone();

			wasm_bindgen_futures::spawn_local(async move {
				let publish = |s: &SubmissionStatus| {
					*live.borrow_mut() = s.clone();
					status.set(s.clone());
				};
				let redirect = submit(&FetchCheckout, &mut current, &form, publish).await;

				match redirect {
					Some(url) => navigate(&url),
					None => if let Some(msg) = current.message {
						log!(format!("Registration didn't go through: {msg}"));
					}
				}
			});
		})
	};

	html! {
		<>
			<style>
			{
				"
				#register-form label {
					display: block;
					font-size: 14px;
					margin-bottom: 6px;
				}
				#register-form > div {
					margin-bottom: 16px;
				}
				#form-name-phone {
					display: grid;
					grid-template-columns: 1fr 1fr;
					gap: 16px;
				}
				#register-form textarea {
					min-height: 80px;
					resize: vertical;
				}
				#submit-register {
					width: 100%;
					box-shadow: 0 8px 20px rgba(209, 17, 17, 0.2);
				}
				#status-box {
					padding: 12px;
					border-radius: 8px;
					border: 1px solid rgba(224, 165, 38, 0.4);
					background-color: rgba(224, 165, 38, 0.15);
					font-size: 14px;
				}
				@media (max-width: 640px) {
					#form-name-phone {
						grid-template-columns: 1fr;
					}
				}
				"
			}
			</style>
			<p class="muted">{ REGISTER_BLURB }</p>
			<form id="register-form" onsubmit={ on_submit }>
				<div id="form-name-phone">
					<div>
						<label for={ Field::Name.id() }>{ "Player name" }</label>
						<input
							id={ Field::Name.id() }
							placeholder="Your name"
							value={ form.get(Field::Name).to_owned() }
							oninput={ on_input(Field::Name) }
							required={ true }
							data-testid="input-name"
						/>
					</div>
					<div>
						<label for={ Field::Phone.id() }>{ "Mobile (optional)" }</label>
						<input
							id={ Field::Phone.id() }
							placeholder="(###) ###-####"
							inputmode="tel"
							value={ form.get(Field::Phone).to_owned() }
							oninput={ on_input(Field::Phone) }
							data-testid="input-phone"
						/>
					</div>
				</div>
				<div>
					<label for={ Field::Notes.id() }>{ "Notes (optional)" }</label>
					<textarea
						id={ Field::Notes.id() }
						placeholder="Skill level, questions, or anything helpful."
						value={ form.get(Field::Notes).to_owned() }
						oninput={ on_input(Field::Notes) }
						data-testid="input-notes"
					/>
				</div>
				<div>
					<button
						type="submit"
						id="submit-register"
						disabled={ status.is_submitting }
						data-testid="button-submit-register"
					>
						{ status.button_label() }
					</button>
				</div>
				if let Some(message) = &status.message {
					<div id="status-box" role="status" data-testid="text-toast">{ message.clone() }</div>
				}
				<p class="muted" style="font-size: 12px;">{ REDIRECT_NOTE }</p>
			</form>
		</>
	}
}
