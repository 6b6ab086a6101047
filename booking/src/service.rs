use std::{fmt, str::FromStr};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub enum Service {
	#[default]
	Haircut,
	BeardTrim,
	HaircutAndBeardTrim,
	HotTowelShave,
}

impl Service {
	/// In the order they're listed on the page and in the form's dropdown
	pub const ALL: [Self; 4] = [Self::Haircut, Self::BeardTrim, Self::HaircutAndBeardTrim, Self::HotTowelShave];

	/// This is also what ends up in the outgoing message and in the `<option value>`
	#[must_use]
	pub fn name(self) -> &'static str {
		match self {
			Self::Haircut => "Haircut",
			Self::BeardTrim => "Beard Trim",
			Self::HaircutAndBeardTrim => "Haircut & Beard Trim",
			Self::HotTowelShave => "Hot Towel Shave",
		}
	}

	/// `None` means the price depends on the person and we'd rather they call us
	#[must_use]
	pub fn price(self) -> Option<&'static str> {
		match self {
			Self::Haircut | Self::BeardTrim => Some("$20 - $50"),
			Self::HaircutAndBeardTrim | Self::HotTowelShave => None,
		}
	}

	#[must_use]
	pub fn price_text(self) -> &'static str {
		self.price().unwrap_or("Please call for details")
	}

	/// What's shown for this service in the booking form's dropdown
	#[must_use]
	pub fn option_label(self) -> String {
		match self.price() {
			Some(price) => format!("{} ({price})", self.name()),
			None => self.name().to_string(),
		}
	}

	#[must_use]
	pub fn description(self) -> &'static str {
		match self {
			Self::Haircut => "Consultation, cut, blow dry, and style with premium products. Includes a complimentary hot lather neck shave with straight razor.",
			Self::BeardTrim => "Consultation, trim, straight razor edging, and hot & cold towel combo. Finished with after-shave, lotion, and your choice of beard oil or balm.",
			Self::HaircutAndBeardTrim => "No bad hair days here. Everything you need to stay fresh and so clean. Take it up a notch with a premium, nourishing hair treatment add-on.",
			Self::HotTowelShave => "Pre-shave lotion massage and hot towel steam for a closer, more comfortable shave. Followed by a cold towel press to close pores and cleanse face, finished with a cooling after-shave tonic.",
		}
	}
}

impl fmt::Display for Service {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.name())
	}
}

#[derive(thiserror::Error, Debug, PartialEq, Eq)]
#[error("Unknown service '{0}'")]
pub struct UnknownService(pub String);

impl FromStr for Service {
	type Err = UnknownService;
	fn from_str(s: &str) -> Result<Self, Self::Err> {
		Self::ALL.into_iter()
			.find(|service| service.name() == s)
			.ok_or_else(|| UnknownService(s.to_string()))
	}
}
