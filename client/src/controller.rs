// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::actions::SignupActions;
use crate::form_state::{Action, FieldErrors, FieldId, FormState};
use futures::future::LocalBoxFuture;
use futures::FutureExt;
use std::rc::Rc;
use sycamore::reactive::Signal;

/// Drives the signup form's state through its actions and runs submissions against the signup actions.
pub struct SignupController<'a> {
	state: &'a Signal<FormState>,
	actions: Rc<dyn SignupActions>,
}

impl<'a> SignupController<'a> {
	pub fn new(state: &'a Signal<FormState>, actions: Rc<dyn SignupActions>) -> Self {
		Self { state, actions }
	}

	pub fn dispatch(&self, action: Action) {
		dispatch(self.state, action);
	}

	pub fn edit(&self, field: FieldId, value: String) {
		self.dispatch(Action::EditField(field, value));
	}

	/// Starts a submission of the current form contents.
	///
	/// Returns `None` without calling the signup action if the form can't be submitted right now, including while
	/// another submission is still pending. Otherwise the signup action is called once and the returned future
	/// applies its outcome to the form when it settles; dropping that future means the outcome is never applied.
	pub fn submit(&self) -> Option<LocalBoxFuture<'a, ()>> {
		let request = self.state.get().submission()?;
		log::debug!("Submitting signup for {}", request.username);
		self.dispatch(Action::SubmitStart);

		let response = self.actions.post_signup(request);
		let state = self.state;
		let settle = async move {
			let action = match response.await {
				Ok(_) => {
					log::info!("Signup succeeded");
					Action::SubmitSucceeded
				}
				Err(failure) => {
					log::info!("Signup failed: {}", failure);
					Action::SubmitFailed(failure.validation_errors().map(FieldErrors::from_validation_errors))
				}
			};
			dispatch(state, action);
		};
		Some(settle.boxed_local())
	}
}

fn dispatch(state: &Signal<FormState>, action: Action) {
	let next_state = (*state.get()).clone().reduce(action);
	state.set(next_state);
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::actions::{NoopSignupActions, SignupResult};
	use crate::error::{FailureResponse, SignupFailure};
	use crate::form_state::PASSWORD_MISMATCH_MESSAGE;
	use futures::channel::oneshot;
	use futures::executor::block_on;
	use futures::future;
	use signup_shared::messages::api_error::ApiError;
	use signup_shared::messages::user_signup::{SignupRequest, SignupResponse};
	use std::cell::RefCell;
	use std::collections::HashMap;
	use sycamore::reactive::{create_scope_immediate, create_signal};

	/// Signup actions that record every request and answer each one with the next prepared response
	#[derive(Default)]
	struct RecordingActions {
		requests: RefCell<Vec<SignupRequest>>,
		responses: RefCell<Vec<LocalBoxFuture<'static, SignupResult>>>,
	}

	impl RecordingActions {
		fn responding_with(response: LocalBoxFuture<'static, SignupResult>) -> Rc<Self> {
			let actions = Self::default();
			actions.responses.borrow_mut().push(response);
			Rc::new(actions)
		}

		fn call_count(&self) -> usize {
			self.requests.borrow().len()
		}
	}

	impl SignupActions for RecordingActions {
		fn post_signup(&self, request: SignupRequest) -> LocalBoxFuture<'static, SignupResult> {
			self.requests.borrow_mut().push(request);
			let mut responses = self.responses.borrow_mut();
			if responses.is_empty() {
				future::ready(Ok(SignupResponse::default())).boxed_local()
			} else {
				responses.remove(0)
			}
		}
	}

	fn rejection(validation_errors: Option<&[(&str, &str)]>) -> SignupFailure {
		let validation_errors = validation_errors.map(|entries| {
			entries
				.iter()
				.map(|(name, message)| (name.to_string(), message.to_string()))
				.collect::<HashMap<_, _>>()
		});
		SignupFailure::Response(FailureResponse {
			status: 400,
			data: Some(ApiError {
				validation_errors,
				..ApiError::default()
			}),
		})
	}

	fn fill_form(controller: &SignupController<'_>) {
		controller.edit(FieldId::DisplayName, String::from("display-name"));
		controller.edit(FieldId::Username, String::from("username"));
		controller.edit(FieldId::Password, String::from("P4ssword"));
		controller.edit(FieldId::PasswordRepeat, String::from("P4ssword"));
	}

	#[test]
	fn submit_calls_action_once_with_user_body() {
		create_scope_immediate(|ctx| {
			let state = create_signal(ctx, FormState::default());
			let actions = Rc::new(RecordingActions::default());
			let controller = SignupController::new(state, actions.clone());
			fill_form(&controller);

			let submission = controller.submit().expect("form should be submittable");
			assert_eq!(actions.call_count(), 1);
			assert_eq!(
				actions.requests.borrow()[0],
				SignupRequest {
					display_name: String::from("display-name"),
					username: String::from("username"),
					password: String::from("P4ssword"),
				}
			);

			block_on(submission);
			assert!(!state.get().pending_api_call);
		});
	}

	#[test]
	fn submit_works_with_default_actions() {
		create_scope_immediate(|ctx| {
			let state = create_signal(ctx, FormState::default());
			let controller = SignupController::new(state, Rc::new(NoopSignupActions));
			fill_form(&controller);

			let submission = controller.submit().expect("form should be submittable");
			block_on(submission);
			assert!(!state.get().pending_api_call);
			assert!(state.get().errors.is_empty());
		});
	}

	#[test]
	fn second_submit_while_pending_does_not_call_action() {
		create_scope_immediate(|ctx| {
			let state = create_signal(ctx, FormState::default());
			let (sender, receiver) = oneshot::channel::<SignupResult>();
			let delayed = async move { receiver.await.unwrap_or(Ok(SignupResponse::default())) }.boxed_local();
			let actions = RecordingActions::responding_with(delayed);
			let controller = SignupController::new(state, actions.clone());
			fill_form(&controller);

			let first = controller.submit();
			let second = controller.submit();
			assert!(first.is_some());
			assert!(second.is_none());
			assert_eq!(actions.call_count(), 1);

			sender.send(Ok(SignupResponse::default())).unwrap();
			block_on(first.unwrap());
			assert!(state.get().submit_enabled());
		});
	}

	#[test]
	fn pending_is_set_until_success_settles() {
		create_scope_immediate(|ctx| {
			let state = create_signal(ctx, FormState::default());
			let (sender, receiver) = oneshot::channel::<SignupResult>();
			let delayed = async move { receiver.await.unwrap_or(Ok(SignupResponse::default())) }.boxed_local();
			let controller = SignupController::new(state, RecordingActions::responding_with(delayed));
			fill_form(&controller);

			let submission = controller.submit().unwrap();
			assert!(state.get().pending_api_call);
			assert!(!state.get().submit_enabled());

			sender.send(Ok(SignupResponse::default())).unwrap();
			block_on(submission);
			assert!(!state.get().pending_api_call);
		});
	}

	#[test]
	fn pending_is_set_until_failure_settles() {
		create_scope_immediate(|ctx| {
			let state = create_signal(ctx, FormState::default());
			let (sender, receiver) = oneshot::channel::<SignupResult>();
			let delayed = async move { receiver.await.unwrap_or(Ok(SignupResponse::default())) }.boxed_local();
			let controller = SignupController::new(state, RecordingActions::responding_with(delayed));
			fill_form(&controller);

			let submission = controller.submit().unwrap();
			assert!(state.get().pending_api_call);

			sender.send(Err(rejection(None))).unwrap();
			block_on(submission);
			assert!(!state.get().pending_api_call);
			assert!(state.get().errors.is_empty());
			assert!(state.get().submit_enabled());
		});
	}

	#[test]
	fn validation_errors_are_shown_then_cleared_by_editing() {
		create_scope_immediate(|ctx| {
			let state = create_signal(ctx, FormState::default());
			let failure = rejection(Some(&[("displayName", "Display name cannot be null")]));
			let controller =
				SignupController::new(state, RecordingActions::responding_with(future::ready(Err(failure)).boxed_local()));
			fill_form(&controller);

			block_on(controller.submit().unwrap());
			assert_eq!(
				state.get().errors.get(FieldId::DisplayName),
				Some("Display name cannot be null")
			);

			controller.edit(FieldId::DisplayName, String::from("abcde"));
			assert!(!state.get().errors.has_error(FieldId::DisplayName));
		});
	}

	#[test]
	fn failure_without_error_body_keeps_existing_errors() {
		create_scope_immediate(|ctx| {
			let state = create_signal(ctx, FormState::default());
			let failure = SignupFailure::Response(FailureResponse { status: 502, data: None });
			let controller =
				SignupController::new(state, RecordingActions::responding_with(future::ready(Err(failure)).boxed_local()));
			fill_form(&controller);

			let mut seeded = (*state.get()).clone();
			seeded.errors.set(FieldId::Username, "Username is taken");
			state.set(seeded);

			block_on(controller.submit().unwrap());
			assert_eq!(state.get().errors.get(FieldId::Username), Some("Username is taken"));
			assert!(!state.get().pending_api_call);
		});
	}

	#[test]
	fn mismatched_passwords_block_submission() {
		create_scope_immediate(|ctx| {
			let state = create_signal(ctx, FormState::default());
			let actions = Rc::new(RecordingActions::default());
			let controller = SignupController::new(state, actions.clone());
			fill_form(&controller);
			controller.edit(FieldId::PasswordRepeat, String::from("abcde"));

			assert!(controller.submit().is_none());
			assert_eq!(actions.call_count(), 0);
			assert_eq!(
				state.get().errors.get(FieldId::PasswordRepeat),
				Some(PASSWORD_MISMATCH_MESSAGE)
			);
		});
	}
}
