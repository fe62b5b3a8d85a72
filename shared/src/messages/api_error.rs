// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Error body sent by the server when a request is rejected.
///
/// Every field is optional so that partial error bodies still parse; the client only relies on
/// `validation_errors`, which maps a field name (as sent in the request) to a message for that field.
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiError {
	#[serde(default, with = "chrono::serde::ts_milliseconds_option")]
	pub timestamp: Option<DateTime<Utc>>,
	#[serde(default)]
	pub status: Option<u16>,
	#[serde(default)]
	pub message: Option<String>,
	#[serde(default)]
	pub url: Option<String>,
	#[serde(default)]
	pub validation_errors: Option<HashMap<String, String>>,
}

impl fmt::Display for ApiError {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match (&self.status, &self.message) {
			(Some(status), Some(message)) => write!(f, "{} ({})", message, status),
			(None, Some(message)) => write!(f, "{}", message),
			(Some(status), None) => write!(f, "The server rejected the request ({})", status),
			(None, None) => write!(f, "The server rejected the request"),
		}
	}
}
