// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use log::Level;

pub const DEFAULT_SIGNUP_ENDPOINT: &str = "/api/1.0/users";

/// Client settings, fixed when the client is built
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ClientConfig {
	/// Where signup requests are posted. Relative paths resolve against the page's address.
	pub signup_endpoint: String,
	pub log_level: Level,
}

impl ClientConfig {
	/// Reads the configuration from the `SIGNUP_API_ENDPOINT` and `SIGNUP_LOG_LEVEL` variables set at build time.
	pub fn from_build_env() -> Self {
		Self::from_values(option_env!("SIGNUP_API_ENDPOINT"), option_env!("SIGNUP_LOG_LEVEL"))
	}

	fn from_values(signup_endpoint: Option<&str>, log_level: Option<&str>) -> Self {
		let signup_endpoint = match signup_endpoint {
			Some(endpoint) if !endpoint.trim().is_empty() => endpoint.trim().to_string(),
			_ => String::from(DEFAULT_SIGNUP_ENDPOINT),
		};
		let log_level = log_level
			.and_then(|level| level.parse().ok())
			.unwrap_or_else(default_log_level);
		Self {
			signup_endpoint,
			log_level,
		}
	}
}

impl Default for ClientConfig {
	fn default() -> Self {
		Self::from_values(None, None)
	}
}

fn default_log_level() -> Level {
	if cfg!(debug_assertions) {
		Level::Debug
	} else {
		Level::Info
	}
}
