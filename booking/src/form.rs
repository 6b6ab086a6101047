use chrono::NaiveDateTime;
use crate::{Draft, Field, OpenStatus, message};

/// Whatever actually takes the visitor to the messaging app. We never hear back about whether
/// it worked, so there's nothing to return.
pub trait Dispatcher {
	fn dispatch(&self, link: &str);
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
	/// The link was handed off and the form is closed again
	Dispatched(String),
	/// Something's invalid; the errors are now on the draft and the form stays open
	Rejected,
	/// Nothing to submit
	NotOpen,
}

/// The booking dialog. It only ever holds a draft while it's open, so closing it is what throws
/// the draft away.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum BookingForm {
	#[default]
	Closed,
	Open(Draft),
}

impl BookingForm {
	/// Opening an already-open form keeps whatever has been typed so far
	pub fn open(&mut self) {
		if let Self::Closed = self {
			*self = Self::Open(Draft::default());
		}
	}

	pub fn close(&mut self) {
		*self = Self::Closed;
	}

	#[must_use]
	pub fn is_open(&self) -> bool {
		matches!(self, Self::Open(_))
	}

	#[must_use]
	pub fn draft(&self) -> Option<&Draft> {
		match self {
			Self::Open(draft) => Some(draft),
			Self::Closed => None,
		}
	}

	/// Edits while closed go nowhere
	pub fn edit(&mut self, field: Field, value: String) {
		if let Self::Open(draft) = self {
			draft.edit(field, value);
		}
	}

	#[must_use]
	pub fn can_submit(&self) -> bool {
		self.draft().is_some_and(Draft::can_submit)
	}

	/// `now` is only used for the open/closed line at the bottom of the message
	pub fn submit(&mut self, now: NaiveDateTime, dispatcher: &impl Dispatcher) -> SubmitOutcome {
		let Self::Open(draft) = self else {
			return SubmitOutcome::NotOpen;
		};

		match draft.validate() {
			Err(errors) => {
				draft.set_errors(errors);
				SubmitOutcome::Rejected
			},
			// an error left over from an edit still counts, even if the value looks fine now
			Ok(_) if !draft.errors().is_empty() => SubmitOutcome::Rejected,
			Ok(booking) => {
				let text = message::compose_message(&booking, OpenStatus::at(now));
				let link = message::whatsapp_link(&text);
				dispatcher.dispatch(&link);
				self.close();
				SubmitOutcome::Dispatched(link)
			}
		}
	}
}
