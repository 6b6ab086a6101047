use std::rc::Rc;
use booking::{hours::hours_summary, BookingForm, Field, Service, SubmitOutcome};
use gloo_console::log;
use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;
use crate::{clock, dispatch::NewTabDispatcher};

#[derive(Debug)]
pub enum BookingMsg {
	Open,
	Close,
	Edit(Field, String),
	Submit,
}

#[derive(Default, PartialEq)]
pub struct BookingState(pub BookingForm);

impl Reducible for BookingState {
	type Action = BookingMsg;

	fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
		let mut form = self.0.clone();

		match action {
			BookingMsg::Open => form.open(),
			BookingMsg::Close => form.close(),
			BookingMsg::Edit(field, value) => form.edit(field, value),
			// We hand off to WhatsApp right here, since after this the draft is gone
			BookingMsg::Submit => match form.submit(clock::now(), &NewTabDispatcher) {
				SubmitOutcome::Dispatched(link) => log!(format!("Dispatched booking request ({} chars)", link.len())),
				SubmitOutcome::Rejected => log!("Booking request still has invalid fields, not sending"),
				SubmitOutcome::NotOpen => return self,
			},
		}

		Self(form).into()
	}
}

const STYLE: &str = r#"
#booking-backdrop {
	position: fixed;
	inset: 0;
	z-index: 100;
	background-color: rgba(0, 0, 0, 0.8);
	backdrop-filter: blur(4px);
	display: flex;
	align-items: center;
	justify-content: center;
	padding: 16px;
}
#booking-dialog {
	background-color: var(--charcoal);
	border: 1px solid rgba(181, 168, 154, 0.3);
	border-radius: 8px;
	max-width: 672px;
	width: 100%;
	max-height: 90vh;
	overflow-y: auto;
	padding: 32px;
}
#booking-header {
	display: flex;
	justify-content: space-between;
	align-items: center;
	margin-bottom: 24px;
}
#booking-header h2 {
	color: var(--sage);
	font-weight: 400;
	margin: 0;
}
#close-dialog {
	background: none;
	border: none;
	color: var(--sand);
	font-size: 32px;
	cursor: pointer;
}
.form-row {
	display: grid;
	grid-template-columns: 1fr 1fr;
	gap: 16px;
	margin-bottom: 16px;
}
@media (max-width: 640px) {
	.form-row {
		grid-template-columns: 1fr;
	}
}
#booking-dialog label {
	display: block;
	color: var(--sand);
	font-size: 11px;
	letter-spacing: 0.2em;
	text-transform: uppercase;
	margin-bottom: 8px;
}
#booking-dialog input, #booking-dialog select, #booking-dialog textarea {
	width: 100%;
	min-height: 44px;
	background-color: var(--panel);
	border: 1px solid rgba(181, 168, 154, 0.3);
	border-radius: 4px;
	padding: 10px 14px;
	color: white;
	font-size: 15px;
}
#booking-dialog textarea {
	resize: vertical;
	min-height: 96px;
}
#booking-dialog .invalid {
	border-color: var(--error);
}
.field-hint {
	font-size: 12px;
	color: rgba(255, 255, 255, 0.5);
	margin: 6px 0 0 0;
}
.field-error {
	font-size: 12px;
	color: var(--error);
	margin: 6px 0 0 0;
}
#hours-box {
	background-color: var(--panel);
	border-radius: 4px;
	padding: 12px 14px;
	font-size: 14px;
	line-height: 1.6;
	color: rgba(255, 255, 255, 0.75);
}
#submit-booking {
	width: 100%;
}
"#;

#[derive(Properties, PartialEq)]
pub struct BookingModalProps {
	pub state: UseReducerHandle<BookingState>
}

#[function_component(BookingModal)]
pub fn booking_modal(props: &BookingModalProps) -> Html {
	let Some(draft) = props.state.0.draft() else {
		return html! {};
	};

	let close = {
		let state = props.state.clone();
		Callback::from(move |_: MouseEvent| state.dispatch(BookingMsg::Close))
	};

	// clicks inside the dialog shouldn't make it to the backdrop, which would close everything
	let swallow_click = Callback::from(|e: MouseEvent| e.stop_propagation());

	let on_submit = {
		let state = props.state.clone();
		Callback::from(move |e: SubmitEvent| {
			e.prevent_default();
			state.dispatch(BookingMsg::Submit);
		})
	};

	let input_edit = |field: Field| {
		let state = props.state.clone();
		Callback::from(move |e: InputEvent| {
			let value = e.target_unchecked_into::<HtmlInputElement>().value();
			state.dispatch(BookingMsg::Edit(field, value));
		})
	};

	let select_edit = {
		let state = props.state.clone();
		Callback::from(move |e: Event| {
			let value = e.target_unchecked_into::<HtmlSelectElement>().value();
			state.dispatch(BookingMsg::Edit(Field::Service, value));
		})
	};

	let notes_edit = {
		let state = props.state.clone();
		Callback::from(move |e: InputEvent| {
			let value = e.target_unchecked_into::<HtmlTextAreaElement>().value();
			state.dispatch(BookingMsg::Edit(Field::Notes, value));
		})
	};

	let error = |field: Field| draft.error(field).map(|e| e.to_string());
	let invalid = |field: Field| draft.error(field).is_some().then_some("invalid");

	html! {
		<>
			<style>{ STYLE }</style>
			<div id="booking-backdrop" onclick={ close.clone() }>
				<div id="booking-dialog" onclick={ swallow_click }>
					<div id="booking-header">
						<h2 class="serif-font">{ "Book Appointment" }</h2>
						<button id="close-dialog" onclick={ close } aria-label="Close modal">{ "×" }</button>
					</div>
					<form onsubmit={ on_submit }>
						<div class="form-row">
							<div>
								<label for="name">{ "Full Name *" }</label>
								<input
									type="text"
									id="name"
									name={ Field::Name.input_name() }
									value={ draft.name.clone() }
									oninput={ input_edit(Field::Name) }
									placeholder="John Doe"
									required=true
								/>
							</div>
							<div>
								<label for="phone">{ "Phone Number *" }</label>
								<input
									type="tel"
									id="phone"
									name={ Field::Phone.input_name() }
									value={ draft.phone.clone() }
									oninput={ input_edit(Field::Phone) }
									placeholder="+1 (555) 123-4567"
									required=true
								/>
							</div>
						</div>
						<div class="form-row">
							<div>
								<label for="service">{ "Service *" }</label>
								<select id="service" name={ Field::Service.input_name() } onchange={ select_edit } required=true>
									{ for Service::ALL.into_iter().map(|service| html! {
										<option value={ service.name() } selected={ service == draft.service }>
											{ service.option_label() }
										</option>
									}) }
								</select>
							</div>
							<div>
								<label for="date">{ "Preferred Date *" }</label>
								<input
									type="date"
									id="date"
									class={ classes!(invalid(Field::Date)) }
									name={ Field::Date.input_name() }
									value={ draft.date.clone() }
									oninput={ input_edit(Field::Date) }
									min={ clock::today_input_value() }
									required=true
								/>
								{ match error(Field::Date) {
									Some(err) => html! { <p class="field-error">{ err }</p> },
									None => html! { <p class="field-hint">{ "Only Tuesday - Friday available" }</p> },
								} }
							</div>
						</div>
						<div class="form-row">
							<div>
								<label for="time">{ "Preferred Time * (10:00 AM - 8:00 PM)" }</label>
								<input
									type="time"
									id="time"
									class={ classes!(invalid(Field::Time)) }
									name={ Field::Time.input_name() }
									value={ draft.time.clone() }
									oninput={ input_edit(Field::Time) }
									min="10:00"
									max="20:00"
									required=true
								/>
								if let Some(err) = error(Field::Time) {
									<p class="field-error">{ err }</p>
								}
							</div>
						</div>
						<div class="form-row">
							<div>
								<label for="notes">{ "Additional Notes" }</label>
								<textarea
									id="notes"
									name={ Field::Notes.input_name() }
									value={ draft.notes.clone() }
									oninput={ notes_edit }
									placeholder="Any special requests or preferences..."
								/>
							</div>
							<div>
								<label>{ "Business Hours" }</label>
								<div id="hours-box">
									{ for hours_summary().into_iter().map(|line| html! { <div>{ line }</div> }) }
								</div>
							</div>
						</div>
						<button
							type="submit"
							id="submit-booking"
							class="outline-button"
							disabled={ !draft.can_submit() }
						>{ "Send via WhatsApp" }</button>
					</form>
				</div>
			</div>
		</>
	}
}
