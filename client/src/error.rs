// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use signup_shared::messages::api_error::ApiError;
use std::collections::HashMap;
use std::fmt;

/// A response the server sent back with a non-success status
#[derive(Debug)]
pub struct FailureResponse {
	pub status: u16,
	/// The error body, if the server sent one we could read
	pub data: Option<ApiError>,
}

/// Errors that can occur when submitting a signup
#[derive(Debug)]
pub enum SignupFailure {
	Transport(gloo_net::Error),
	Response(FailureResponse),
	MalformedResponse(serde_json::Error),
}

impl SignupFailure {
	/// Gets the per-field validation errors carried by this failure, if it carries any.
	pub fn validation_errors(&self) -> Option<&HashMap<String, String>> {
		match self {
			Self::Response(response) => response.data.as_ref()?.validation_errors.as_ref(),
			_ => None,
		}
	}
}

impl fmt::Display for SignupFailure {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Transport(error) => write!(f, "Failed to send signup request: {}", error),
			Self::Response(FailureResponse { data: Some(data), .. }) => write!(f, "Signup was rejected: {}", data),
			Self::Response(FailureResponse { status, data: None }) => {
				write!(f, "Signup was rejected with status {}", status)
			}
			Self::MalformedResponse(error) => write!(f, "An invalid signup response was received: {}", error),
		}
	}
}

impl From<gloo_net::Error> for SignupFailure {
	fn from(error: gloo_net::Error) -> Self {
		Self::Transport(error)
	}
}

impl From<serde_json::Error> for SignupFailure {
	fn from(error: serde_json::Error) -> Self {
		Self::MalformedResponse(error)
	}
}
