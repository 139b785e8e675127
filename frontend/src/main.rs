use yew::prelude::*;
use tournament::Tournament;

mod checkout;
mod faq;
mod register;
mod scroll;
mod style;
mod tournament;

#[function_component(Frontend)]
pub fn frontend() -> Html {
	html! { <Tournament /> }
}

fn main() {
	yew::Renderer::<Frontend>::new().render();
}
