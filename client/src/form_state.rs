// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use signup_shared::messages::user_signup::SignupRequest;
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

pub const PASSWORD_MISMATCH_MESSAGE: &str = "Does not match to password";

/// The fields of the signup form
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum FieldId {
	DisplayName,
	Username,
	Password,
	PasswordRepeat,
}

impl FieldId {
	pub const ALL: [FieldId; 4] = [Self::DisplayName, Self::Username, Self::Password, Self::PasswordRepeat];

	/// The name used for this field by the server in validation error responses
	pub fn wire_name(&self) -> &'static str {
		match self {
			Self::DisplayName => "displayName",
			Self::Username => "username",
			Self::Password => "password",
			Self::PasswordRepeat => "passwordRepeat",
		}
	}
}

impl fmt::Display for FieldId {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}", self.wire_name())
	}
}

#[derive(Debug, Eq, PartialEq)]
pub struct UnknownField(pub String);

impl fmt::Display for UnknownField {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "Unknown form field: {}", self.0)
	}
}

impl FromStr for FieldId {
	type Err = UnknownField;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		Self::ALL
			.into_iter()
			.find(|field| field.wire_name() == s)
			.ok_or_else(|| UnknownField(s.to_string()))
	}
}

/// Error messages currently shown on the form. A field with no entry shows no error.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct FieldErrors(HashMap<FieldId, String>);

impl FieldErrors {
	pub fn get(&self, field: FieldId) -> Option<&str> {
		self.0.get(&field).map(|message| message.as_str())
	}

	pub fn has_error(&self, field: FieldId) -> bool {
		self.0.contains_key(&field)
	}

	pub fn set(&mut self, field: FieldId, message: impl Into<String>) {
		self.0.insert(field, message.into());
	}

	pub fn clear(&mut self, field: FieldId) {
		self.0.remove(&field);
	}

	#[cfg(test)]
	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}

	#[cfg(test)]
	pub fn len(&self) -> usize {
		self.0.len()
	}

	/// Maps server validation errors onto the form's fields. Entries for names the form doesn't have are dropped.
	pub fn from_validation_errors(validation_errors: &HashMap<String, String>) -> Self {
		let mut errors = Self::default();
		for (name, message) in validation_errors.iter() {
			match name.parse::<FieldId>() {
				Ok(field) => errors.set(field, message.clone()),
				Err(error) => log::warn!("Dropping validation error \"{}\": {}", message, error),
			}
		}
		errors
	}
}

/// Everything that can happen to the form
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Action {
	EditField(FieldId, String),
	SubmitStart,
	SubmitSucceeded,
	/// The submit action failed. If the failure carried validation errors, they're included here.
	SubmitFailed(Option<FieldErrors>),
}

/// The complete state of the signup form
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct FormState {
	pub display_name: String,
	pub username: String,
	pub password: String,
	pub password_repeat: String,
	pub password_repeat_confirmed: bool,
	pub pending_api_call: bool,
	pub errors: FieldErrors,
}

impl Default for FormState {
	fn default() -> Self {
		Self {
			display_name: String::new(),
			username: String::new(),
			password: String::new(),
			password_repeat: String::new(),
			password_repeat_confirmed: true,
			pending_api_call: false,
			errors: FieldErrors::default(),
		}
	}
}

impl FormState {
	pub fn value(&self, field: FieldId) -> &str {
		match field {
			FieldId::DisplayName => &self.display_name,
			FieldId::Username => &self.username,
			FieldId::Password => &self.password,
			FieldId::PasswordRepeat => &self.password_repeat,
		}
	}

	pub fn submit_enabled(&self) -> bool {
		!self.pending_api_call && self.password_repeat_confirmed
	}

	/// Gets the request to send for the current form contents, or `None` if the form can't be submitted right now.
	pub fn submission(&self) -> Option<SignupRequest> {
		if !self.submit_enabled() {
			return None;
		}
		Some(SignupRequest {
			display_name: self.display_name.clone(),
			username: self.username.clone(),
			password: self.password.clone(),
		})
	}

	/// Applies an action to the form, producing the next state.
	pub fn reduce(mut self, action: Action) -> Self {
		match action {
			Action::EditField(field, value) => {
				match field {
					FieldId::DisplayName => {
						self.display_name = value;
						self.errors.clear(FieldId::DisplayName);
					}
					FieldId::Username => {
						self.username = value;
						self.errors.clear(FieldId::Username);
					}
					FieldId::Password => {
						self.password = value;
						self.errors.clear(FieldId::Password);
						self.confirm_password_repeat();
					}
					FieldId::PasswordRepeat => {
						// The mismatch message and any server error for this field share one slot, so recomputing
						// the match result replaces whatever was there.
						self.password_repeat = value;
						self.confirm_password_repeat();
					}
				}
			}
			Action::SubmitStart => {
				if self.submit_enabled() {
					self.pending_api_call = true;
				} else {
					log::debug!("Ignoring signup submission while the form can't be submitted");
				}
			}
			Action::SubmitSucceeded => self.pending_api_call = false,
			Action::SubmitFailed(validation_errors) => {
				self.pending_api_call = false;
				if let Some(errors) = validation_errors {
					self.errors = errors;
				}
			}
		}
		self
	}

	fn confirm_password_repeat(&mut self) {
		self.password_repeat_confirmed = self.password == self.password_repeat;
		if self.password_repeat_confirmed {
			self.errors.clear(FieldId::PasswordRepeat);
		} else {
			self.errors.set(FieldId::PasswordRepeat, PASSWORD_MISMATCH_MESSAGE);
		}
	}
}
