// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::error::{FailureResponse, SignupFailure};
use futures::future::{self, LocalBoxFuture};
use futures::FutureExt;
use gloo_net::http::Request;
use signup_shared::messages::api_error::ApiError;
use signup_shared::messages::user_signup::{SignupRequest, SignupResponse};

pub type SignupResult = Result<SignupResponse, SignupFailure>;

/// The operations the signup form performs against the outside world
pub trait SignupActions {
	/// Starts a signup. The returned future resolves once the server has answered (or failed to).
	fn post_signup(&self, request: SignupRequest) -> LocalBoxFuture<'static, SignupResult>;
}

/// Actions used when none are provided. Every signup succeeds immediately without going anywhere.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopSignupActions;

impl SignupActions for NoopSignupActions {
	fn post_signup(&self, _request: SignupRequest) -> LocalBoxFuture<'static, SignupResult> {
		future::ready(Ok(SignupResponse::default())).boxed_local()
	}
}

/// Actions that talk to the server over HTTP
#[derive(Clone, Debug)]
pub struct HttpSignupActions {
	signup_endpoint: String,
}

impl HttpSignupActions {
	pub fn new(signup_endpoint: impl Into<String>) -> Self {
		Self {
			signup_endpoint: signup_endpoint.into(),
		}
	}

	pub fn signup_endpoint(&self) -> &str {
		&self.signup_endpoint
	}
}

impl SignupActions for HttpSignupActions {
	fn post_signup(&self, request: SignupRequest) -> LocalBoxFuture<'static, SignupResult> {
		let signup_request = Request::post(&self.signup_endpoint).json(&request);
		async move {
			let response = signup_request?.send().await?;

			if !response.ok() {
				let status = response.status();
				// Not every rejection comes with an error body
				let data = match response.json::<ApiError>().await {
					Ok(data) => Some(data),
					Err(error) => {
						log::warn!("Failed to read signup error body (status {}): {}", status, error);
						None
					}
				};
				return Err(SignupFailure::Response(FailureResponse { status, data }));
			}

			let body = response.text().await?;
			if body.trim().is_empty() {
				return Ok(SignupResponse::default());
			}
			Ok(serde_json::from_str(&body)?)
		}
		.boxed_local()
	}
}
