use booking::{Service, hours::weekly_schedule};
use yew::prelude::*;
use crate::shop;

#[derive(Properties, PartialEq)]
pub struct HeroProps {
	pub on_book: Callback<MouseEvent>
}

#[function_component(Hero)]
pub fn hero(props: &HeroProps) -> Html {
	html! {
		<section id="hero">
			<img id="hero-background" src={ shop::HERO_IMAGE } alt="Barbershop interior" />
			<div id="hero-content">
				<h1 class="script-font">{ "Velvet Handlebear" }</h1>
				<h2 class="serif-font">{ "BARBERSHOP" }</h2>
				<p>
					{ "Where timeless grooming meets modern sophistication. Velvet Handlebear is a distinguished \
					men's barbershop dedicated to the art of traditional barbering with a contemporary twist. Our \
					master barbers blend classic techniques with modern style, creating an experience that's both \
					refined and relaxed. Step into our sanctuary of grooming excellence, where every cut, shave, and \
					trim is executed with precision and passion." }
				</p>
				<button class="outline-button" onclick={ props.on_book.clone() }>
					{ "BOOK AN APPOINTMENT" }
				</button>
			</div>
		</section>
	}
}

#[function_component(Story)]
pub fn story() -> Html {
	html! {
		<section id="story" class="section">
			<div id="story-badge">
				<svg viewBox="0 0 320 320">
					<defs>
						<path id="circle-text-path" d="M 160,160 m -140,0 a 140,140 0 1,1 280,0 a 140,140 0 1,1 -280,0" />
					</defs>
					<text font-size="26" font-family="Amarante, cursive" font-weight="600" letter-spacing="14">
						<textPath href="#circle-text-path" startOffset="0%">
							{ "VELVET HANDLEBEAR • BARBERSHOP •" }
						</textPath>
					</text>
				</svg>
				<img src="/assets/favicon.svg" alt="Favicon" />
			</div>
			<div>
				<p class="eyebrow">{ "STORY" }</p>
				<h2 class="serif-font">{ "Crafted with passion, refined by tradition..." }</h2>
				<p>
					{ "Velvet Handlebear was born from a simple philosophy: exceptional grooming should be an \
					experience, not just a service. Our founders envisioned a space where the timeless art of \
					barbering meets contemporary sophistication, a sanctuary where gentlemen can unwind, \
					rejuvenate, and emerge looking their absolute best." }
				</p>
				<p>
					{ "Every detail at Velvet Handlebear tells a story of craftsmanship. From our carefully curated \
					vintage décor to our master barbers' meticulous techniques, we honor the golden age of barbering \
					while embracing modern excellence. Step into our chair, and experience the difference that true \
					artistry makes." }
				</p>
			</div>
		</section>
	}
}

#[function_component(Gallery)]
pub fn gallery() -> Html {
	html! {
		<section id="gallery">
			{
				shop::GALLERY.chunks(3).map(|column| html! {
					<div class="gallery-column">
						{ for column.iter().map(|(src, alt)| html! {
							<div class="gallery-item"><img src={ *src } alt={ *alt } loading="lazy" /></div>
						}) }
					</div>
				}).collect::<Html>()
			}
		</section>
	}
}

#[function_component(Services)]
pub fn services() -> Html {
	html! {
		<section id="services" class="section">
			<p class="eyebrow">{ "SERVICES" }</p>
			<h2 class="serif-font">{ "We cut hair, not corners." }</h2>
			<p class="lede">
				{ "First-rate services in haircuts, hot towel shaves, hair treatments, and beard trims. Witty quips \
				and good conversations come standard. Appointment only, walk-ins by chance." }
			</p>
			<div id="service-cards">
				{ for Service::ALL.into_iter().enumerate().map(|(idx, service)| html! {
					<div class="service-card">
						<div class="service-number serif-font">{ format!("#{}", idx + 1) }</div>
						<h3>{ service.name().to_uppercase() }</h3>
						<p class="service-price">{ service.price_text() }</p>
						<p>{ service.description() }</p>
					</div>
				}) }
			</div>
		</section>
	}
}

#[function_component(Team)]
pub fn team() -> Html {
	html! {
		<section id="team" class="section">
			<p class="eyebrow">{ "TEAM" }</p>
			<h2 class="serif-font">{ "Meet the artisans." }</h2>
			<p class="lede">
				{ "Our master barbers bring years of expertise, passion, and dedication to every service. Each \
				member of the Velvet Handlebear team is committed to delivering exceptional results and creating a \
				memorable experience." }
			</p>
			<div id="team-grid">
				{ for shop::TEAM.iter().map(|(name, img)| html! {
					<div class="barber">
						<img src={ *img } alt={ *name } loading="lazy" />
						<h3 class="serif-font">{ *name }</h3>
					</div>
				}) }
			</div>
		</section>
	}
}

#[function_component(Contact)]
pub fn contact() -> Html {
	html! {
		<section id="contact" class="section">
			// the iframe can't be clicked through, so the whole thing is a link to the real map
			<a id="map" href={ shop::MAP_SEARCH } target="_blank" rel="noopener noreferrer">
				<iframe
					src={ shop::MAP_EMBED }
					loading="lazy"
					referrerpolicy="no-referrer-when-downgrade"
					title="Map to Velvet Handlebear Barbershop"
				/>
			</a>
			<div id="contact-info">
				<p class="eyebrow">{ "CONTACT" }</p>
				<h2 class="serif-font">{ "Downtown Kitchener" }</h2>
				<div id="hours">
					{ for weekly_schedule().into_iter().map(|day| html! {
						<div class={ classes!("hours-row", day.hours.is_none().then_some("closed")) }>
							<span class="hours-day">{ day.label }</span>
							<span>{ day.hours_text() }</span>
						</div>
					}) }
				</div>
				<div id="address">
					{ for shop::ADDRESS_LINES.iter().map(|line| html! { <p>{ *line }</p> }) }
					<p>{ shop::PHONE }</p>
					<p>{ shop::EMAIL }</p>
					<div id="socials">
						<a href={ shop::FACEBOOK } target="_blank" rel="noopener noreferrer">{ "FACEBOOK" }</a>
						<a href={ shop::INSTAGRAM } target="_blank" rel="noopener noreferrer">{ "INSTAGRAM" }</a>
					</div>
				</div>
			</div>
		</section>
	}
}

#[function_component(Footer)]
pub fn footer() -> Html {
	html! {
		<footer>
			<img src="/assets/favicon.svg" alt="Velvet Handlebear Logo" />
			<p>{ "Velvet Handlebear Barbershop. 2024 All Rights Reserved." }</p>
		</footer>
	}
}
