use chrono::{NaiveDate, NaiveDateTime};

/// The visitor's local wall-clock time. js months are 0-indexed, everything else isn't.
pub fn now() -> NaiveDateTime {
	let date = js_sys::Date::new_0();

	NaiveDate::from_ymd_opt(date.get_full_year() as i32, date.get_month() + 1, date.get_date())
		.and_then(|d| d.and_hms_opt(date.get_hours(), date.get_minutes(), date.get_seconds()))
		// the browser is never going to hand us a date that doesn't exist, but just in case
		.unwrap_or_default()
}

/// What goes in the date input's `min` so people can't pick a day that's already gone
pub fn today_input_value() -> String {
	now().date().format("%Y-%m-%d").to_string()
}
