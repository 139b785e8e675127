use shared_data::event::{
	self,
	Fact,
	Section,
	CONFIRMATION_NOTE,
	FORMAT_POINTS,
	FORMAT_TAGS,
	HERO_LEDE,
	HIGHLIGHTS,
	QUICK_FACTS,
	SCHEDULE,
	TBD_NOTICE,
	WALKING_INTO,
	WALKING_INTO_POINTS
};
use yew::prelude::*;

use crate::{
	faq::FaqList,
	register::RegisterForm,
	scroll::scroll_callback,
	style::{md, SharedStyle}
};

const STYLE: &str = r#"
#page {
	max-width: 1152px;
	margin: 0 auto;
	padding: 24px;
}
#glow {
	position: fixed;
	inset: 0;
	pointer-events: none;
	background:
		radial-gradient(ellipse 900px 500px at 30% 0%, rgba(209, 17, 17, 0.15), transparent),
		radial-gradient(ellipse 700px 400px at 80% 0%, rgba(34, 184, 207, 0.08), transparent);
}
header {
	display: flex;
	flex-wrap: wrap;
	justify-content: space-between;
	align-items: center;
	gap: 16px;
	padding: 12px 0;
}
#brand {
	display: flex;
	align-items: center;
	gap: 12px;
	color: var(--main-text);
}
#brand:hover {
	text-decoration: none;
}
#brand-mark {
	width: 40px;
	height: 40px;
	border-radius: 8px;
	border: 1px solid var(--border-color);
	display: flex;
	align-items: center;
	justify-content: center;
	font-weight: 900;
	font-size: 18px;
	background: radial-gradient(circle at 30% 30%, rgba(209, 17, 17, 0.55), transparent 55%);
}
#brand small {
	display: block;
	font-size: 12px;
	text-transform: uppercase;
	letter-spacing: 0.05em;
	color: var(--muted-text);
}
nav {
	display: flex;
	flex-wrap: wrap;
	gap: 8px;
}
.nav-link {
	background-color: transparent;
	border-radius: 999px;
	color: var(--muted-text);
	font-size: 14px;
}
.nav-link:hover {
	color: var(--main-text);
	border-color: var(--border-color);
}
#hero {
	position: relative;
	margin-top: 16px;
	border-radius: 18px;
	border: 1px solid var(--border-color);
	overflow: hidden;
	padding: 40px;
	background:
		linear-gradient(to top, rgba(0, 0, 0, 0.7), transparent 60%),
		radial-gradient(ellipse at 70% 40%, #1f5a3c, #0f2a1d 70%);
}
#hero-grid {
	display: grid;
	grid-template-columns: 1.3fr 0.7fr;
	gap: 32px;
}
#hero h1 {
	font-size: 48px;
	font-weight: 900;
	line-height: 1.05;
	margin: 16px 0;
}
#chips {
	display: inline-flex;
	flex-wrap: wrap;
	gap: 10px;
	padding: 10px 16px;
	border-radius: 999px;
	border: 1px solid rgba(255, 255, 255, 0.15);
	background-color: rgba(0, 0, 0, 0.4);
	font-size: 14px;
}
#hero-actions {
	display: flex;
	flex-wrap: wrap;
	gap: 12px;
	margin: 20px 0;
}
#hero-actions > .outline {
	background-color: rgba(0, 0, 0, 0.3);
	border-color: rgba(255, 255, 255, 0.2);
}
#tbd-banner {
	display: flex;
	gap: 12px;
	padding: 14px;
	border-radius: 12px;
	border: 1px solid rgba(255, 255, 255, 0.1);
	background-color: rgba(0, 0, 0, 0.4);
	font-size: 14px;
}
#tbd-dot {
	width: 10px;
	height: 10px;
	margin-top: 4px;
	flex-shrink: 0;
	border-radius: 50%;
	background-color: var(--warn);
	box-shadow: 0 0 0 4px rgba(224, 165, 38, 0.2);
}
#details {
	display: grid;
	grid-template-columns: repeat(12, 1fr);
	gap: 16px;
	margin-top: 24px;
}
.span-5 { grid-column: span 5; }
.span-7 { grid-column: span 7; }
.span-12 { grid-column: span 12; }
.points {
	padding-left: 20px;
	line-height: 1.6;
}
#schedule-grid {
	display: grid;
	grid-template-columns: repeat(5, 1fr);
	gap: 16px;
}
.schedule-slot {
	text-align: center;
	padding: 16px;
	border-radius: 8px;
	border: 1px solid var(--border-color);
}
.schedule-slot > p {
	margin: 4px 0;
}
footer {
	margin-top: 32px;
	padding-top: 20px;
	border-top: 1px solid var(--border-color);
	display: flex;
	flex-wrap: wrap;
	justify-content: space-between;
	gap: 16px;
	font-size: 12px;
	color: var(--muted-text);
}
@media (max-width: 1024px) {
	#hero-grid {
		grid-template-columns: 1fr;
	}
	.span-5, .span-7 {
		grid-column: span 12;
	}
	#schedule-grid {
		grid-template-columns: repeat(2, 1fr);
	}
}
"#;

fn current_year() -> i32 {
	i32::try_from(js_sys::Date::new_0().get_full_year()).unwrap_or_default()
}

fn fact_row(fact: &Fact) -> Html {
	html! {
		<div class="fact-row" data-testid={ format!("stat-row-{}", fact.id) }>
			<span class="muted">{ fact.label }</span>
			<span>{ fact.value }</span>
		</div>
	}
}

fn points(items: &[&str]) -> Html {
	html! {
		<ul class="points muted">
			{ items.iter().map(|item| html! { <li>{ md(item) }</li> }).collect::<Html>() }
		</ul>
	}
}

#[function_component(Header)]
fn header() -> Html {
	html! {
		<header>
			<a href="#top" id="brand" onclick={ scroll_callback(Section::Top) } data-testid="link-brand">
				<div id="brand-mark">{ "P" }</div>
				<div>
					<strong>{ event::EVENT_NAME }</strong>
					<small>{ format!("Tournament - {}", event::VENUE) }</small>
				</div>
			</a>
			<nav aria-label="Page navigation">
				{
					Section::NAV.into_iter().map(|section| html! {
						<button
							class="nav-link"
							onclick={ scroll_callback(section) }
							data-testid={ format!("link-{}", section.id()) }
						>
							{ section.nav_label() }
						</button>
					}).collect::<Html>()
				}
				<button onclick={ scroll_callback(Section::Register) } data-testid="button-nav-register">
					{ Section::Register.nav_label() }
				</button>
			</nav>
		</header>
	}
}

#[function_component(Hero)]
fn hero() -> Html {
	html! {
		<section id="hero" aria-label="Event hero">
			<div id="hero-grid">
				<div>
					<div id="chips">
						<span><b>{ event::VENUE }</b>{ format!(" - {}", event::CITY) }</span>
						<span class="muted">{ "|" }</span>
						<span><b>{ event::TABLES }</b>{ " tables" }</span>
						<span class="muted">{ "|" }</span>
						<span><b>{ event::ENTRY_FEE }</b>{ " entry" }</span>
					</div>
					<h1 data-testid="text-tournament-title">{ event::EVENT_NAME }<br />{ "Tournament" }</h1>
					<p>{ md(HERO_LEDE) }</p>
					<div id="hero-actions">
						<button onclick={ scroll_callback(Section::Register) } data-testid="button-hero-register">
							{ Section::Register.nav_label() }
						</button>
						<button
							class="outline"
							onclick={ scroll_callback(Section::Format) }
							data-testid="button-hero-format"
						>
							{ "See Format" }
						</button>
					</div>
					<div data-testid="hero-highlights">
						{ HIGHLIGHTS.iter().map(|h| html! { <span class="badge">{ *h }</span> }).collect::<Html>() }
					</div>
					<div id="tbd-banner" data-testid="banner-tbd-notice">
						<div id="tbd-dot" />
						<span>{ md(TBD_NOTICE) }</span>
					</div>
				</div>
				<div class="card">
					<h2>{ "Quick Facts" }</h2>
					{ QUICK_FACTS.iter().map(fact_row).collect::<Html>() }
					<p class="muted" style="font-size: 12px;">{ CONFIRMATION_NOTE }</p>
				</div>
			</div>
		</section>
	}
}

#[function_component(Tournament)]
pub fn tournament() -> Html {
	html! {
		<>
			<SharedStyle />
			<style>{ STYLE }</style>
			<div id="glow" />
			<div id="page">
				<Header />
				<main id={ Section::Top.id() }>
					<Hero />
					<section id="details" aria-label="Event details">
						<div class="card span-7">
							<h2>{ "What you're walking into" }</h2>
							<p class="muted">{ WALKING_INTO }</p>
							{ points(&WALKING_INTO_POINTS) }
						</div>
						<div class="card span-5" id={ Section::Format.id() }>
							<h2>{ "Format" }</h2>
							{ points(&FORMAT_POINTS) }
							{ FORMAT_TAGS.iter().map(|t| html! { <span class="badge">{ *t }</span> }).collect::<Html>() }
						</div>
						<div class="card span-12" id={ Section::Schedule.id() }>
							<h2>{ "Schedule" }</h2>
							<div id="schedule-grid">
								{
									SCHEDULE.iter().map(|slot| html! {
										<div class="schedule-slot" key={ slot.id } data-testid={ format!("schedule-item-{}", slot.id) }>
											<p class="muted" style="font-size: 12px;">{ slot.label }</p>
											<p><b>{ slot.value }</b></p>
										</div>
									}).collect::<Html>()
								}
							</div>
						</div>
						<div class="card span-7">
							<h2>{ "Location" }</h2>
							<p><b>{ event::VENUE }</b></p>
							<a
								href={ event::MAP_URL }
								target="_blank"
								rel="noopener noreferrer"
								data-testid="link-location"
							>
								{ event::ADDRESS }
							</a>
						</div>
						<div class="card span-5" id={ Section::Register.id() }>
							<h2>{ Section::Register.nav_label() }</h2>
							<RegisterForm />
						</div>
						<div class="card span-12" id={ Section::Faq.id() }>
							<h2>{ "FAQ" }</h2>
							<FaqList />
						</div>
					</section>
					<footer>
						<span data-testid="text-copyright">{ event::copyright_line(current_year()) }</span>
						<span>{ event::summary_line() }</span>
					</footer>
				</main>
			</div>
		</>
	}
}
