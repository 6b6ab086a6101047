use std::fmt::Write;
use chrono::{NaiveDate, NaiveTime};
use crate::{OpenStatus, ValidBooking};

/// Country code + number, no `+` or spaces, as wa.me wants it
pub const WHATSAPP_NUMBER: &str = "15199549333";
pub const SHOP_NAME: &str = "Velvet Handlebear";

/// e.g. `Wednesday, October 21, 2026`
#[must_use]
pub fn long_date(date: NaiveDate) -> String {
	date.format("%A, %B %-d, %Y").to_string()
}

/// e.g. `2:30 PM`
#[must_use]
pub fn twelve_hour_time(time: NaiveTime) -> String {
	time.format("%-I:%M %p").to_string()
}

#[must_use]
pub fn compose_message(booking: &ValidBooking, status: OpenStatus) -> String {
	let mut msg = format!(
		"Hello {SHOP_NAME}! 👋\n\
		\n\
		I would like to book an appointment:\n\
		\n\
		📋 *Booking Details:*\n\
		• Name: {}\n\
		• Phone: {}\n\
		• Service: {}\n\
		• Preferred Date: {}\n\
		• Preferred Time: {}\n\
		\n",
		booking.name,
		booking.phone,
		booking.service,
		long_date(booking.date),
		twelve_hour_time(booking.time),
	);

	if let Some(notes) = &booking.notes {
		// writing to a String can't fail
		_ = write!(msg, "📝 Additional Notes:\n{notes}\n\n");
	}

	msg.push_str(status.status_line());
	msg.push_str("\n\nLooking forward to your confirmation!");
	msg
}

/// The deep link that opens a chat with the shop, with `message` already typed out
#[must_use]
pub fn whatsapp_link(message: &str) -> String {
	format!("https://wa.me/{WHATSAPP_NUMBER}?text={}", urlencoding::encode(message))
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::Service;

	fn booking() -> ValidBooking {
		ValidBooking {
			name: "John Doe".into(),
			phone: "555-1234".into(),
			service: Service::Haircut,
			date: NaiveDate::from_ymd_opt(2026, 10, 21).unwrap(),
			time: NaiveTime::from_hms_opt(14, 30, 0).unwrap(),
			notes: None,
		}
	}

	#[test]
	fn date_and_time_formats() {
		assert_eq!(long_date(NaiveDate::from_ymd_opt(2026, 10, 21).unwrap()), "Wednesday, October 21, 2026");
		assert_eq!(long_date(NaiveDate::from_ymd_opt(2026, 1, 6).unwrap()), "Tuesday, January 6, 2026");

		let time = |h, m| twelve_hour_time(NaiveTime::from_hms_opt(h, m, 0).unwrap());
		assert_eq!(time(14, 30), "2:30 PM");
		assert_eq!(time(10, 0), "10:00 AM");
		assert_eq!(time(12, 5), "12:05 PM");
		assert_eq!(time(19, 59), "7:59 PM");
	}

	#[test]
	fn message_has_every_detail() {
		let msg = compose_message(&booking(), OpenStatus::Open);

		for needle in ["John Doe", "555-1234", "• Service: Haircut", "Wednesday, October 21, 2026", "2:30 PM"] {
			assert!(msg.contains(needle), "missing {needle:?} in {msg}");
		}
		assert!(msg.starts_with("Hello Velvet Handlebear! 👋\n\nI would like to book an appointment:"));
		assert!(msg.contains("• Preferred Time: 2:30 PM\n\n🟢 We're currently open!\n\nLooking forward"));
		assert!(!msg.contains("Additional Notes"));
	}

	#[test]
	fn notes_and_closed_status() {
		let booking = ValidBooking { notes: Some("Skin fade please".into()), ..booking() };
		let msg = compose_message(&booking, OpenStatus::Closed);

		assert!(msg.contains("📝 Additional Notes:\nSkin fade please\n\n🔴 We're currently closed."));
		assert!(msg.ends_with("Looking forward to your confirmation!"));
	}

	#[test]
	fn link_is_percent_encoded() {
		let link = whatsapp_link("Haircut & Beard Trim\nat 2:30 PM?");
		assert_eq!(link, "https://wa.me/15199549333?text=Haircut%20%26%20Beard%20Trim%0Aat%202%3A30%20PM%3F");
	}
}
