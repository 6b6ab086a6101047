use wasm_bindgen::{prelude::Closure, JsCast};
use yew::prelude::*;

// past this many pixels, the bar gets a background and shrinks the logo
const SCROLL_THRESHOLD: f64 = 50.0;

const SECTIONS: &[(&str, &str)] = &[
	("#story", "STORY"),
	("#services", "SERVICES"),
	("#team", "TEAM"),
	("#contact", "CONTACT"),
];

const STYLE: &str = r#"
nav {
	position: fixed;
	top: 0;
	left: 0;
	right: 0;
	z-index: 50;
	padding: 8px 0;
	transition: all 0.3s;
}
nav.scrolled {
	background-color: rgba(26, 26, 26, 0.95);
	backdrop-filter: blur(12px);
	padding: 0;
}
#nav-links {
	display: flex;
	align-items: center;
	justify-content: center;
	gap: 64px;
}
.nav-link {
	font-size: 13px;
	letter-spacing: 0.25em;
	color: rgba(255, 255, 255, 0.9);
	transition: color 0.3s;
}
.nav-link:hover {
	color: var(--sage);
}
#nav-logo {
	height: 137px;
	transition: transform 0.3s;
}
nav.scrolled #nav-logo {
	transform: scale(0.5);
}
#menu-toggle, #mobile-menu {
	display: none;
}
@media (max-width: 768px) {
	#nav-links .nav-link {
		display: none;
	}
	#nav-logo {
		height: 70px;
	}
	#menu-toggle {
		display: block;
		position: absolute;
		right: 16px;
		top: 16px;
		background: none;
		border: none;
		cursor: pointer;
	}
	#menu-toggle img {
		width: 48px;
		transition: transform 0.3s;
	}
	#menu-toggle.open img {
		transform: rotate(-90deg);
	}
	#mobile-menu {
		display: flex;
		flex-direction: column;
		padding: 16px;
		gap: 16px;
		background-color: rgba(26, 26, 26, 0.98);
		border-top: 1px solid rgba(255, 255, 255, 0.1);
	}
}
"#;

#[function_component(NavBar)]
pub fn nav_bar() -> Html {
	let scrolled = use_state(|| false);
	let menu_open = use_state(|| false);

	// Keep `scrolled` in sync with the window, and take the listener down with us
	{
		let scrolled = scrolled.clone();
		use_effect_with((), move |()| {
			let listener = web_sys::window().map(|window| {
				let callback = Closure::<dyn Fn()>::new(move || {
					if let Some(y) = web_sys::window().and_then(|w| w.scroll_y().ok()) {
						scrolled.set(y > SCROLL_THRESHOLD);
					}
				});

				if let Err(e) = window.add_event_listener_with_callback("scroll", callback.as_ref().unchecked_ref()) {
					gloo_console::log!(format!("Couldn't listen for scrolling: {e:?}"));
				}

				(window, callback)
			});

			move || if let Some((window, callback)) = listener {
				_ = window.remove_event_listener_with_callback("scroll", callback.as_ref().unchecked_ref());
			}
		});
	}

	let toggle_menu = {
		let menu_open = menu_open.clone();
		Callback::from(move |_: MouseEvent| menu_open.set(!*menu_open))
	};

	let link = |(href, label): (&'static str, &'static str)| {
		let menu_open = menu_open.clone();
		html! {
			<a
				class="nav-link"
				href={ href }
				onclick={ Callback::from(move |_: MouseEvent| menu_open.set(false)) }
			>{ label }</a>
		}
	};

	let (left, right) = SECTIONS.split_at(2);

	html! {
		<>
			<style>{ STYLE }</style>
			<nav class={ classes!((*scrolled).then_some("scrolled")) }>
				<div id="nav-links">
					{ for left.iter().copied().map(link) }
					<img id="nav-logo" src="/assets/favicon.svg" alt="Velvet Handlebear Logo" />
					{ for right.iter().copied().map(link) }
				</div>
				<button
					id="menu-toggle"
					class={ classes!((*menu_open).then_some("open")) }
					onclick={ toggle_menu }
					aria-label="Toggle menu"
				>
					<img src="/assets/menu.svg" alt="Menu" />
				</button>
				if *menu_open {
					<div id="mobile-menu">
						{ for SECTIONS.iter().copied().map(link) }
					</div>
				}
			</nav>
		</>
	}
}
