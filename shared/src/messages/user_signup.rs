// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use serde::{Deserialize, Serialize};

/// Data sent by the client when creating an account
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SignupRequest {
	pub display_name: String,
	pub username: String,
	pub password: String,
}

/// Response data from the server for a successful signup. The client doesn't act on anything in here; an empty
/// body is just as much a success.
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub struct SignupResponse {
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub message: Option<String>,
}
