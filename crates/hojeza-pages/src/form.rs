//! Contact form validation.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

// Something@something.tld with no whitespace.
static EMAIL_REGEX: Lazy<Regex> = Lazy::new(|| {
	Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("EMAIL_REGEX: invalid regex pattern")
});

// Optional leading plus, then 6 to 15 digits.
static PHONE_REGEX: Lazy<Regex> =
	Lazy::new(|| Regex::new(r"^\+?\d{6,15}$").expect("PHONE_REGEX: invalid regex pattern"));

/// Why a submission was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ContactFormError {
	#[error("neither an email address nor a phone number was given")]
	MissingContact,
	#[error("invalid email address")]
	InvalidEmail,
	#[error("invalid phone number")]
	InvalidPhone,
}

impl ContactFormError {
	/// Translation key of the message shown under the form.
	pub fn message_key(self) -> &'static str {
		match self {
			Self::MissingContact => "Please provide either an email address or a phone number.",
			Self::InvalidEmail => "Please enter a valid email address.",
			Self::InvalidPhone => "Please enter a valid phone number.",
		}
	}
}

/// Raw contact form fields.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactForm {
	pub company_name: String,
	pub email: String,
	pub phone: String,
	pub message: String,
}

/// A validated submission with trimmed fields. Empty optional fields are
/// `None`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactSubmission {
	pub company_name: Option<String>,
	pub email: Option<String>,
	pub phone: Option<String>,
	pub message: Option<String>,
}

impl ContactForm {
	/// Checks the form. The first failing rule wins: a contact channel must
	/// be present, then the email must be well formed, then the phone.
	pub fn validate(&self) -> Result<ContactSubmission, ContactFormError> {
		let email = non_empty(&self.email);
		let phone = non_empty(&self.phone);

		if email.is_none() && phone.is_none() {
			return Err(ContactFormError::MissingContact);
		}
		if email.is_some_and(|e| !EMAIL_REGEX.is_match(e)) {
			return Err(ContactFormError::InvalidEmail);
		}
		if phone.is_some_and(|p| !PHONE_REGEX.is_match(p)) {
			return Err(ContactFormError::InvalidPhone);
		}

		Ok(ContactSubmission {
			company_name: non_empty(&self.company_name).map(str::to_string),
			email: email.map(str::to_string),
			phone: phone.map(str::to_string),
			message: non_empty(&self.message).map(str::to_string),
		})
	}
}

fn non_empty(value: &str) -> Option<&str> {
	Some(value.trim()).filter(|v| !v.is_empty())
}
