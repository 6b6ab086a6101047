use chrono::{NaiveDate, NaiveDateTime, NaiveTime, Timelike, Weekday, Datelike};
use crate::ValidationError;

/// First hour (24h clock) we take appointments at
pub const OPENING_HOUR: u32 = 10;
/// We stop taking appointments once the clock hits this hour
pub const CLOSING_HOUR: u32 = 20;

/// Tuesday through Friday. Everything else is a day off.
pub const BUSINESS_DAYS: [Weekday; 4] = [Weekday::Tue, Weekday::Wed, Weekday::Thu, Weekday::Fri];

#[must_use]
pub fn is_business_day(day: Weekday) -> bool {
	BUSINESS_DAYS.contains(&day)
}

#[must_use]
pub fn is_valid_business_day(date: NaiveDate) -> bool {
	is_business_day(date.weekday())
}

/// Only the hour matters here, so 19:59 is fine but 20:00 isn't
#[must_use]
pub fn is_within_business_hours(time: NaiveTime) -> bool {
	(OPENING_HOUR..CLOSING_HOUR).contains(&time.hour())
}

pub fn check_date(date: NaiveDate) -> Result<NaiveDate, ValidationError> {
	if is_valid_business_day(date) {
		Ok(date)
	} else {
		Err(ValidationError::ClosedDay)
	}
}

pub fn check_time(time: NaiveTime) -> Result<NaiveTime, ValidationError> {
	if is_within_business_hours(time) {
		Ok(time)
	} else {
		Err(ValidationError::OutsideHours)
	}
}

/// Parses what an `<input type="date">` hands us (always `YYYY-MM-DD`) and checks it
pub fn parse_date(raw: &str) -> Result<NaiveDate, ValidationError> {
	NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
		.map_err(|_| ValidationError::BadDate)
		.and_then(check_date)
}

/// `<input type="time">` gives us `HH:MM` normally, but browsers will tack on seconds if the
/// input has a `step` smaller than a minute, so accept both
pub fn parse_time(raw: &str) -> Result<NaiveTime, ValidationError> {
	let raw = raw.trim();
	NaiveTime::parse_from_str(raw, "%H:%M")
		.or_else(|_| NaiveTime::parse_from_str(raw, "%H:%M:%S"))
		.map_err(|_| ValidationError::BadTime)
		.and_then(check_time)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OpenStatus {
	Open,
	Closed,
}

impl OpenStatus {
	#[must_use]
	pub fn at(now: NaiveDateTime) -> Self {
		if is_valid_business_day(now.date()) && is_within_business_hours(now.time()) {
			Self::Open
		} else {
			Self::Closed
		}
	}

	/// The line that gets appended to every outgoing booking message
	#[must_use]
	pub fn status_line(self) -> &'static str {
		match self {
			Self::Open => "🟢 We're currently open!",
			Self::Closed => "🔴 We're currently closed. We'll respond during business hours (Tue-Fri, 10 AM - 8 PM).",
		}
	}
}

/// One row of the hours table on the contact section
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScheduleDay {
	pub day: Weekday,
	pub label: &'static str,
	pub hours: Option<(u32, u32)>,
}

impl ScheduleDay {
	#[must_use]
	pub fn hours_text(&self) -> String {
		self.hours.map_or_else(
			|| "CLOSED".into(),
			|(open, close)| format!("{} - {}", hour_label(open), hour_label(close))
		)
	}
}

/// Monday first, like the sign on the door
#[must_use]
pub fn weekly_schedule() -> [ScheduleDay; 7] {
	[
		(Weekday::Mon, "MON:"),
		(Weekday::Tue, "TUES:"),
		(Weekday::Wed, "WED:"),
		(Weekday::Thu, "THURS:"),
		(Weekday::Fri, "FRI:"),
		(Weekday::Sat, "SAT:"),
		(Weekday::Sun, "SUN:"),
	].map(|(day, label)| ScheduleDay {
		day,
		label,
		hours: is_business_day(day).then_some((OPENING_HOUR, CLOSING_HOUR))
	})
}

/// The short version for the booking dialog, e.g. `["Tuesday - Friday: 10 AM - 8 PM", "Monday, Saturday, Sunday: Closed"]`
#[must_use]
pub fn hours_summary() -> [String; 2] {
	let (open, closed): (Vec<_>, Vec<_>) = weekly_schedule()
		.into_iter()
		.partition(|d| d.hours.is_some());

	let open_line = match (open.first(), open.last()) {
		(Some(first), Some(last)) => format!("{} - {}: {}", day_name(first.day), day_name(last.day), first.hours_text()),
		_ => "Closed all week".into(),
	};
	let closed_days = closed.iter().map(|d| day_name(d.day)).collect::<Vec<_>>().join(", ");

	[open_line, format!("{closed_days}: Closed")]
}

fn day_name(day: Weekday) -> &'static str {
	match day {
		Weekday::Mon => "Monday",
		Weekday::Tue => "Tuesday",
		Weekday::Wed => "Wednesday",
		Weekday::Thu => "Thursday",
		Weekday::Fri => "Friday",
		Weekday::Sat => "Saturday",
		Weekday::Sun => "Sunday",
	}
}

// 10 -> "10 AM", 20 -> "8 PM"
fn hour_label(hour: u32) -> String {
	let suffix = if hour < 12 { "AM" } else { "PM" };
	let twelve = match hour % 12 {
		0 => 12,
		h => h
	};
	format!("{twelve} {suffix}")
}

#[cfg(test)]
mod tests {
	use super::*;

	fn date(y: i32, m: u32, d: u32) -> NaiveDate {
		NaiveDate::from_ymd_opt(y, m, d).unwrap()
	}

	fn time(h: u32, m: u32) -> NaiveTime {
		NaiveTime::from_hms_opt(h, m, 0).unwrap()
	}

	#[test]
	fn only_tuesday_through_friday_are_business_days() {
		// 2026-10-19 is a monday, so this walks mon..=sun
		let expected = [false, true, true, true, true, false, false];
		for (offset, open) in expected.into_iter().enumerate() {
			let day = date(2026, 10, 19 + offset as u32);
			assert_eq!(is_valid_business_day(day), open, "{day} ({})", day.weekday());
		}
	}

	#[test]
	fn hours_boundaries() {
		assert!(!is_within_business_hours(time(9, 59)));
		assert!(is_within_business_hours(time(10, 0)));
		assert!(is_within_business_hours(time(19, 59)));
		assert!(!is_within_business_hours(time(20, 0)));
		assert!(!is_within_business_hours(time(0, 0)));
	}

	#[test]
	fn parsing_input_values() {
		assert_eq!(parse_date("2026-10-21"), Ok(date(2026, 10, 21)));
		assert_eq!(parse_date("2026-10-25"), Err(ValidationError::ClosedDay));
		assert_eq!(parse_date("not a date"), Err(ValidationError::BadDate));
		assert_eq!(parse_date(""), Err(ValidationError::BadDate));

		assert_eq!(parse_time("14:30"), Ok(time(14, 30)));
		assert_eq!(parse_time("14:30:00"), Ok(time(14, 30)));
		assert_eq!(parse_time("09:59"), Err(ValidationError::OutsideHours));
		assert_eq!(parse_time("20:00"), Err(ValidationError::OutsideHours));
		assert_eq!(parse_time("25:00"), Err(ValidationError::BadTime));
	}

	#[test]
	fn open_status_needs_both_day_and_hour() {
		let wed = date(2026, 10, 21);
		let sat = date(2026, 10, 24);

		assert_eq!(OpenStatus::at(wed.and_time(time(14, 0))), OpenStatus::Open);
		assert_eq!(OpenStatus::at(wed.and_time(time(20, 0))), OpenStatus::Closed);
		assert_eq!(OpenStatus::at(wed.and_time(time(9, 30))), OpenStatus::Closed);
		assert_eq!(OpenStatus::at(sat.and_time(time(14, 0))), OpenStatus::Closed);
	}

	#[test]
	fn schedule_matches_business_days() {
		let schedule = weekly_schedule();
		assert_eq!(schedule[0].hours_text(), "CLOSED");
		assert_eq!(schedule[1].label, "TUES:");
		assert_eq!(schedule[1].hours_text(), "10 AM - 8 PM");
		assert!(schedule.iter().all(|d| d.hours.is_some() == is_business_day(d.day)));
	}

	#[test]
	fn summary_is_built_from_the_schedule() {
		assert_eq!(hours_summary(), [
			"Tuesday - Friday: 10 AM - 8 PM".to_string(),
			"Monday, Saturday, Sunday: Closed".to_string(),
		]);
	}
}
