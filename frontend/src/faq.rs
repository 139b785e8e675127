use shared_data::faq::{Disclosure, FaqItem, FAQ_ITEMS};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct FaqAccordionProps {
	pub item: FaqItem,
	pub index: usize
}

#[function_component(FaqAccordion)]
pub fn faq_accordion(props: &FaqAccordionProps) -> Html {
	// each item gets its own, so any number of them can be open at once
	let disclosure = use_state(Disclosure::default);

	let toggle = {
		let disclosure = disclosure.clone();
		Callback::from(move |_: MouseEvent| disclosure.set(disclosure.toggled()))
	};

	let index = props.index;
	let open = disclosure.is_open();

	html! {
		<div class="faq-item" data-testid={ format!("faq-item-{index}") }>
			<button
				class="faq-toggle"
				onclick={ toggle }
				aria-expanded={ open.to_string() }
				data-testid={ format!("button-faq-toggle-{index}") }
			>
				<span>{ props.item.question }</span>
				<span class="muted">{ disclosure.indicator() }</span>
			</button>
			if open {
				<div class="faq-answer">
					<p class="muted">{ props.item.answer }</p>
				</div>
			}
		</div>
	}
}

#[function_component(FaqList)]
pub fn faq_list() -> Html {
	html! {
		<>
			<style>
			{
				"
				.faq-item {
					border: 1px solid var(--border-color);
					border-radius: 8px;
					margin-bottom: 12px;
					overflow: hidden;
				}
				.faq-toggle {
					width: 100%;
					display: flex;
					justify-content: space-between;
					gap: 16px;
					padding: 16px;
					text-align: left;
					font-weight: 600;
					background-color: transparent;
					border-radius: 0;
				}
				.faq-answer {
					padding: 0 16px 16px 16px;
				}
				.faq-answer > p {
					margin: 0;
					line-height: 1.6;
				}
				"
			}
			</style>
			{
				FAQ_ITEMS.iter().enumerate().map(|(index, item)| html! {
					<FaqAccordion key={ index } item={ *item } index={ index } />
				}).collect::<Html>()
			}
		</>
	}
}
