use booking::Dispatcher;
use gloo_console::log;

/// Opens the link in a new tab. If a popup blocker eats it, there's nothing we can do about it
/// besides make a note in the console.
pub struct NewTabDispatcher;

impl Dispatcher for NewTabDispatcher {
	fn dispatch(&self, link: &str) {
		let Some(window) = web_sys::window() else {
			log!("No window to open the WhatsApp link in");
			return;
		};

		match window.open_with_url_and_target(link, "_blank") {
			Ok(Some(_)) => log!("Opened WhatsApp with booking request"),
			Ok(None) => log!("Couldn't open WhatsApp; the new tab was probably blocked"),
			Err(e) => log!(format!("Opening WhatsApp failed: {e:?}")),
		}
	}
}
