/// Everything that can go wrong with a single field of the booking form. The `Display` text is
/// shown to the visitor verbatim, right under the offending input.
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
	#[error("This field is required.")]
	Required,
	#[error("Please select a date between Tuesday and Friday. We are closed on Monday, Saturday, and Sunday.")]
	ClosedDay,
	#[error("Please select a time between 10:00 AM and 8:00 PM.")]
	OutsideHours,
	#[error("Please select a valid date.")]
	BadDate,
	#[error("Please select a valid time.")]
	BadTime,
}
