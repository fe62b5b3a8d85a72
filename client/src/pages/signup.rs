// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::actions::{NoopSignupActions, SignupActions};
use crate::components::field_input::{ChangeHandler, FieldInput, InputType};
use crate::components::submit_button::SubmitButton;
use crate::controller::SignupController;
use crate::form_state::{FieldId, FormState};
use std::rc::Rc;
use sycamore::futures::spawn_local_scoped;
use sycamore::prelude::*;
use web_sys::Event as WebEvent;

/// The reactive values a single field input is built from
struct FieldSignals<'a> {
	value: &'a ReadSignal<String>,
	has_error: &'a ReadSignal<Option<bool>>,
	error: &'a ReadSignal<Option<String>>,
}

fn field_signals<'a>(ctx: Scope<'a>, state: &'a ReadSignal<FormState>, field: FieldId) -> FieldSignals<'a> {
	let value = create_memo(ctx, move || state.get().value(field).to_string());
	// The form only ever marks fields as in error; it never marks them as valid.
	let has_error = create_memo(ctx, move || state.get().errors.has_error(field).then_some(true));
	let error = create_memo(ctx, move || state.get().errors.get(field).map(String::from));
	FieldSignals { value, has_error, error }
}

fn change_handler<'a>(controller: &'a SignupController<'a>, field: FieldId) -> Option<ChangeHandler<'a>> {
	Some(Box::new(move |value: String| controller.edit(field, value)))
}

#[derive(Prop)]
pub struct SignupPageProps {
	/// Where signups go. Without these, signups succeed immediately without doing anything.
	#[builder(default)]
	actions: Option<Rc<dyn SignupActions>>,
}

#[component]
pub fn SignupPage<G: Html>(ctx: Scope<'_>, props: SignupPageProps) -> View<G> {
	let actions = props.actions.unwrap_or_else(|| Rc::new(NoopSignupActions));
	let state = create_signal(ctx, FormState::default());
	let controller = create_ref(ctx, SignupController::new(state, actions));

	let display_name = field_signals(ctx, state, FieldId::DisplayName);
	let username = field_signals(ctx, state, FieldId::Username);
	let password = field_signals(ctx, state, FieldId::Password);
	let password_repeat = field_signals(ctx, state, FieldId::PasswordRepeat);

	let pending_signal = create_memo(ctx, move || state.get().pending_api_call);
	let submit_disabled_signal = create_memo(ctx, move || !state.get().submit_enabled());

	let submit_handler = move |_event: WebEvent| {
		// The submission is tied to this page's scope, so it's dropped along with the page and a response arriving
		// afterward doesn't touch the disposed state.
		if let Some(submission) = controller.submit() {
			spawn_local_scoped(ctx, submission);
		}
	};

	view! {
		ctx,
		div(class="container") {
			h1(class="text-center") { "Sign Up" }
			div(class="col-12 mb-3") {
				FieldInput(
					label=Some("Display Name"),
					placeholder=Some("Your display name"),
					value=Some(display_name.value),
					on_change=change_handler(controller, FieldId::DisplayName),
					has_error=Some(display_name.has_error),
					error=Some(display_name.error)
				)
			}
			div(class="col-12 mb-3") {
				FieldInput(
					label=Some("Username"),
					placeholder=Some("Your username"),
					value=Some(username.value),
					on_change=change_handler(controller, FieldId::Username),
					has_error=Some(username.has_error),
					error=Some(username.error)
				)
			}
			div(class="col-12 mb-3") {
				FieldInput(
					label=Some("Password"),
					placeholder=Some("Your password"),
					input_type=InputType::Password,
					value=Some(password.value),
					on_change=change_handler(controller, FieldId::Password),
					has_error=Some(password.has_error),
					error=Some(password.error)
				)
			}
			div(class="col-12 mb-3") {
				FieldInput(
					label=Some("Repeat your password"),
					placeholder=Some("Repeat your password"),
					input_type=InputType::Password,
					value=Some(password_repeat.value),
					on_change=change_handler(controller, FieldId::PasswordRepeat),
					has_error=Some(password_repeat.has_error),
					error=Some(password_repeat.error)
				)
			}
			div(class="text-center") {
				SubmitButton(
					text="Sign up",
					disabled=submit_disabled_signal,
					pending=pending_signal,
					on_click=submit_handler
				)
			}
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use sycamore::reactive::create_scope_immediate;

	fn render_page() -> String {
		sycamore::render_to_string(|ctx| {
			view! {
				ctx,
				SignupPage(actions=None)
			}
		})
	}

	#[test]
	fn has_sign_up_header() {
		let html = render_page();
		assert!(html.contains("<h1"));
		assert!(html.contains("Sign Up"));
	}

	#[test]
	fn has_all_four_inputs() {
		let html = render_page();
		for placeholder in [
			"Your display name",
			"Your username",
			"Your password",
			"Repeat your password",
		] {
			assert!(
				html.contains(&format!(r#"placeholder="{}""#, placeholder)),
				"missing input for {}",
				placeholder
			);
		}
		assert_eq!(html.matches("<input").count(), 4);
	}

	#[test]
	fn password_inputs_hide_their_contents() {
		let html = render_page();
		assert_eq!(html.matches(r#"type="password""#).count(), 2);
		assert_eq!(html.matches(r#"type="text""#).count(), 2);
	}

	#[test]
	fn has_submit_button_without_spinner() {
		let html = render_page();
		assert!(html.contains("<button"));
		assert!(html.contains("Sign up"));
		assert!(!html.contains("Loading..."));
	}

	#[test]
	fn starts_without_errors() {
		let html = render_page();
		assert!(!html.contains("invalid-feedback"));
		assert!(!html.contains("is-invalid"));
	}

	#[test]
	fn field_signals_follow_form_errors() {
		create_scope_immediate(|ctx| {
			let state = create_signal(ctx, FormState::default());
			let signals = field_signals(ctx, state, FieldId::PasswordRepeat);
			assert_eq!(*signals.has_error.get(), None);
			assert_eq!(*signals.error.get(), None);

			let controller = SignupController::new(state, Rc::new(NoopSignupActions));
			controller.edit(FieldId::PasswordRepeat, String::from("abcde"));
			assert_eq!(*signals.value.get(), "abcde");
			assert_eq!(*signals.has_error.get(), Some(true));
			assert_eq!(
				signals.error.get().as_deref(),
				Some(crate::form_state::PASSWORD_MISMATCH_MESSAGE)
			);

			controller.edit(FieldId::PasswordRepeat, String::new());
			assert_eq!(*signals.has_error.get(), None);
		});
	}
}
