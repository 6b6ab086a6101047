use std::collections::BTreeMap;
use chrono::{NaiveDate, NaiveTime};
use crate::{hours, Service, ValidationError};

/// The inputs of the booking form. The names match the `name` attributes on the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
	Name,
	Phone,
	Service,
	Date,
	Time,
	Notes,
}

impl Field {
	#[must_use]
	pub fn input_name(self) -> &'static str {
		match self {
			Self::Name => "name",
			Self::Phone => "phone",
			Self::Service => "service",
			Self::Date => "date",
			Self::Time => "time",
			Self::Notes => "notes",
		}
	}
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors(BTreeMap<Field, ValidationError>);

impl FieldErrors {
	#[must_use]
	pub fn get(&self, field: Field) -> Option<ValidationError> {
		self.0.get(&field).copied()
	}

	pub fn set(&mut self, field: Field, err: ValidationError) {
		self.0.insert(field, err);
	}

	pub fn clear(&mut self, field: Field) {
		self.0.remove(&field);
	}

	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}
}

/// A booking request that the visitor is still filling out. Date and time are kept as the raw
/// strings the inputs give us, since they're only meaningful once they parse and validate.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Draft {
	pub name: String,
	pub phone: String,
	pub service: Service,
	pub date: String,
	pub time: String,
	pub notes: String,
	errors: FieldErrors,
}

/// Everything we need to write the message. Can only be made through [`Draft::validate`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidBooking {
	pub name: String,
	pub phone: String,
	pub service: Service,
	pub date: NaiveDate,
	pub time: NaiveTime,
	pub notes: Option<String>,
}

impl Draft {
	#[must_use]
	pub fn errors(&self) -> &FieldErrors {
		&self.errors
	}

	#[must_use]
	pub fn error(&self, field: Field) -> Option<ValidationError> {
		self.errors.get(field)
	}

	pub fn set_errors(&mut self, errors: FieldErrors) {
		self.errors = errors;
	}

	#[must_use]
	pub fn value(&self, field: Field) -> &str {
		match field {
			Field::Name => &self.name,
			Field::Phone => &self.phone,
			Field::Service => self.service.name(),
			Field::Date => &self.date,
			Field::Time => &self.time,
			Field::Notes => &self.notes,
		}
	}

	/// Apply a single input event. The old error for this field is always dropped first, and then
	/// only this field gets revalidated. Emptying a field never produces an error here; that's
	/// what the disabled submit button is for.
	pub fn edit(&mut self, field: Field, value: String) {
		self.errors.clear(field);

		match field {
			Field::Name => self.name = value,
			Field::Phone => self.phone = value,
			Field::Notes => self.notes = value,
			// the select only ever gives us names we rendered, so anything else is just ignored
			Field::Service => if let Ok(service) = value.parse() {
				self.service = service;
			},
			Field::Date => {
				if !value.is_empty() {
					if let Err(e) = hours::parse_date(&value) {
						self.errors.set(field, e);
					}
				}
				self.date = value;
			},
			Field::Time => {
				if !value.is_empty() {
					if let Err(e) = hours::parse_time(&value) {
						self.errors.set(field, e);
					}
				}
				self.time = value;
			},
		}
	}

	/// Whether the submit button should be clickable at all
	#[must_use]
	pub fn can_submit(&self) -> bool {
		self.errors.is_empty() && self.validate().is_ok()
	}

	/// Checks every field at once, which is what happens when the form is actually submitted.
	pub fn validate(&self) -> Result<ValidBooking, FieldErrors> {
		let mut errors = FieldErrors::default();

		let mut required = |field: Field| {
			let val = self.value(field).trim();
			if val.is_empty() {
				errors.set(field, ValidationError::Required);
			}
			val.to_string()
		};

		let name = required(Field::Name);
		let phone = required(Field::Phone);

		let date = if self.date.is_empty() {
			Err(ValidationError::Required)
		} else {
			hours::parse_date(&self.date)
		};
		let time = if self.time.is_empty() {
			Err(ValidationError::Required)
		} else {
			hours::parse_time(&self.time)
		};

		match (date, time) {
			(Ok(date), Ok(time)) if errors.is_empty() => Ok(ValidBooking {
				name,
				phone,
				service: self.service,
				date,
				time,
				notes: Some(self.notes.trim())
					.filter(|n| !n.is_empty())
					.map(str::to_string)
			}),
			(date, time) => {
				if let Err(e) = date {
					errors.set(Field::Date, e);
				}
				if let Err(e) = time {
					errors.set(Field::Time, e);
				}
				Err(errors)
			}
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn filled() -> Draft {
		let mut draft = Draft::default();
		draft.edit(Field::Name, "John Doe".into());
		draft.edit(Field::Phone, "555-1234".into());
		// a wednesday
		draft.edit(Field::Date, "2026-10-21".into());
		draft.edit(Field::Time, "14:30".into());
		draft
	}

	#[test]
	fn filled_draft_can_submit() {
		let draft = filled();
		assert!(draft.errors().is_empty());
		assert!(draft.can_submit());

		let booking = draft.validate().unwrap();
		assert_eq!(booking.name, "John Doe");
		assert_eq!(booking.service, Service::Haircut);
		assert_eq!(booking.date, NaiveDate::from_ymd_opt(2026, 10, 21).unwrap());
		assert_eq!(booking.notes, None);
	}

	#[test]
	fn every_required_field_gates_submission() {
		for field in [Field::Name, Field::Phone, Field::Date, Field::Time] {
			let mut draft = filled();
			draft.edit(field, String::new());
			assert!(!draft.can_submit(), "{field:?} was emptied but submit is still enabled");
			// emptying is not an error until submission
			assert_eq!(draft.error(field), None);
		}

		let mut whitespace = filled();
		whitespace.edit(Field::Name, "   ".into());
		assert!(!whitespace.can_submit());
	}

	#[test]
	fn bad_date_sets_error_and_blocks() {
		let mut draft = filled();
		// sunday
		draft.edit(Field::Date, "2026-10-25".into());
		assert_eq!(draft.error(Field::Date), Some(ValidationError::ClosedDay));
		assert_eq!(draft.date, "2026-10-25");
		assert!(!draft.can_submit());

		// fixing it clears the error
		draft.edit(Field::Date, "2026-10-23".into());
		assert_eq!(draft.error(Field::Date), None);
		assert!(draft.can_submit());
	}

	#[test]
	fn editing_one_field_leaves_other_errors_alone() {
		let mut draft = filled();
		draft.edit(Field::Time, "09:59".into());
		draft.edit(Field::Date, "2026-10-26".into());
		assert_eq!(draft.error(Field::Time), Some(ValidationError::OutsideHours));
		assert_eq!(draft.error(Field::Date), Some(ValidationError::ClosedDay));

		draft.edit(Field::Time, "19:59".into());
		assert_eq!(draft.error(Field::Time), None);
		assert_eq!(draft.error(Field::Date), Some(ValidationError::ClosedDay));
	}

	#[test]
	fn stale_error_alone_blocks_submission() {
		let mut draft = filled();
		let mut errors = FieldErrors::default();
		errors.set(Field::Time, ValidationError::OutsideHours);
		draft.set_errors(errors);
		assert!(draft.validate().is_ok());
		assert!(!draft.can_submit());
	}

	#[test]
	fn validate_reports_all_problems() {
		let mut draft = Draft::default();
		draft.edit(Field::Date, "2026-10-19".into());
		let errors = draft.validate().unwrap_err();

		assert_eq!(errors.get(Field::Name), Some(ValidationError::Required));
		assert_eq!(errors.get(Field::Phone), Some(ValidationError::Required));
		assert_eq!(errors.get(Field::Date), Some(ValidationError::ClosedDay));
		assert_eq!(errors.get(Field::Time), Some(ValidationError::Required));
		assert_eq!(errors.get(Field::Notes), None);
	}

	#[test]
	fn service_and_notes() {
		let mut draft = filled();
		draft.edit(Field::Service, "Hot Towel Shave".into());
		draft.edit(Field::Notes, "  first time here  ".into());
		draft.edit(Field::Service, "Mullet".into());

		let booking = draft.validate().unwrap();
		assert_eq!(booking.service, Service::HotTowelShave);
		assert_eq!(booking.notes.as_deref(), Some("first time here"));
	}
}
