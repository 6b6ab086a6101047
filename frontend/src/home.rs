use const_format::concatcp;
use yew::prelude::*;
use crate::{
	booking_modal::{BookingModal, BookingMsg, BookingState},
	nav::NavBar,
	sections::{Contact, Footer, Gallery, Hero, Services, Story, Team},
	style::BASE_STYLE,
};

const STYLE: &str = concatcp!(BASE_STYLE, r#"
#hero {
	position: relative;
	min-height: 100vh;
	display: flex;
	align-items: center;
	justify-content: center;
	overflow: hidden;
}
#hero-background {
	position: absolute;
	inset: 0;
	width: 100%;
	height: 100%;
	object-fit: cover;
	opacity: 0.25;
}
#hero-content {
	position: relative;
	z-index: 10;
	text-align: center;
	max-width: 1024px;
	padding: 128px 24px;
}
#hero-content h1 {
	color: var(--sand);
	font-size: 80px;
	font-weight: 400;
	line-height: 1;
	margin: 64px 0 8px 0;
}
#hero-content h2 {
	color: var(--sage);
	font-size: 97px;
	letter-spacing: 0.08em;
	line-height: 1;
	margin: 16px 0 48px 0;
}
#hero-content p, .lede {
	font-size: 16px;
	line-height: 1.8;
	color: rgba(255, 255, 255, 0.8);
	max-width: 768px;
	margin: 0 auto 48px auto;
}
#story {
	display: grid;
	grid-template-columns: 1fr 2fr;
	gap: 48px;
	align-items: center;
	line-height: 1.8;
	color: rgba(255, 255, 255, 0.75);
}
#story-badge {
	position: relative;
	width: 320px;
	height: 320px;
	animation: roll 30s linear infinite;
}
#story-badge text {
	fill: var(--sage);
}
#story-badge img {
	position: absolute;
	inset: 80px;
	width: 160px;
	animation: roll 30s linear infinite reverse;
}
@keyframes roll {
	from { transform: rotate(0deg); }
	to { transform: rotate(360deg); }
}
#gallery {
	display: grid;
	grid-template-columns: repeat(4, 1fr);
	gap: 8px;
	padding: 0 24px;
}
.gallery-item img {
	width: 100%;
	aspect-ratio: 1;
	object-fit: cover;
	filter: grayscale(30%);
	transition: filter 0.5s;
}
.gallery-item img:hover {
	filter: none;
}
#services, #team {
	text-align: center;
}
#service-cards, #team-grid {
	display: grid;
	grid-template-columns: repeat(4, 1fr);
	gap: 32px;
	text-align: left;
}
.service-card {
	border: 1px solid rgba(181, 168, 154, 0.2);
	padding: 24px;
}
.service-number {
	color: var(--sand);
	font-size: 36px;
}
.service-card h3 {
	letter-spacing: 0.15em;
	color: var(--sage);
}
.service-price {
	color: var(--sand);
}
.barber img {
	width: 100%;
	aspect-ratio: 3 / 4;
	object-fit: cover;
}
.barber h3 {
	text-align: center;
	color: var(--sand);
	font-weight: 400;
}
#contact {
	display: grid;
	grid-template-columns: 1fr 1fr;
	gap: 48px;
}
#map {
	position: relative;
	display: block;
	min-height: 400px;
}
#map iframe {
	width: 100%;
	height: 100%;
	border: 0;
	pointer-events: none;
	filter: grayscale(100%);
}
.hours-row {
	display: flex;
	justify-content: space-between;
	max-width: 240px;
	letter-spacing: 0.1em;
}
.hours-row.closed {
	color: rgba(255, 255, 255, 0.4);
}
.hours-day {
	color: var(--sand);
}
#socials {
	display: flex;
	gap: 24px;
	letter-spacing: 0.25em;
	font-size: 12px;
	color: var(--sage);
}
footer {
	display: flex;
	align-items: center;
	justify-content: center;
	gap: 16px;
	padding: 32px;
	border-top: 1px solid rgba(255, 255, 255, 0.1);
	font-size: 12px;
	color: rgba(255, 255, 255, 0.5);
}
footer img {
	width: 40px;
}
@media (max-width: 768px) {
	#story, #contact {
		grid-template-columns: 1fr;
	}
	#gallery, #service-cards, #team-grid {
		grid-template-columns: repeat(2, 1fr);
	}
	#hero-content h1 {
		font-size: 40px;
	}
	#hero-content h2 {
		font-size: 54px;
	}
}
"#);

#[function_component(Home)]
pub fn home() -> Html {
	let booking = use_reducer_eq(BookingState::default);

	let open_booking = {
		let booking = booking.clone();
		Callback::from(move |_: MouseEvent| booking.dispatch(BookingMsg::Open))
	};

	html! {
		<>
			<style>{ STYLE }</style>
			<NavBar />
			<Hero on_book={ open_booking } />
			<Story />
			<Gallery />
			<Services />
			<Team />
			<Contact />
			<Footer />
			<BookingModal state={ booking } />
		</>
	}
}
