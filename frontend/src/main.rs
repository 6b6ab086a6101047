use yew_router::prelude::*;
use yew::prelude::*;
use home::Home;

mod home;
mod nav;
mod sections;
mod booking_modal;
mod dispatch;
mod clock;
mod shop;
mod style;

// It's a one-page site, so anything that isn't the page just gets the page
#[derive(Clone, Routable, PartialEq)]
enum Route {
	#[not_found]
	#[at("/")]
	Home,
}

fn switch(route: Route) -> Html {
	match route {
		Route::Home => html! { <Home /> },
	}
}

#[function_component(Frontend)]
pub fn frontend() -> Html {
	html! {
		<BrowserRouter>
			<Switch<Route> render={switch} />
		</BrowserRouter>
	}
}

fn main() {
	console_error_panic_hook::set_once();
	yew::Renderer::<Frontend>::new().render();
}
