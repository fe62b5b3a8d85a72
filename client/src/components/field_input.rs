// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use sycamore::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Event as WebEvent, HtmlInputElement};

pub type ChangeHandler<'a> = Box<dyn Fn(String) + 'a>;

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum InputType {
	#[default]
	Text,
	Password,
}

impl InputType {
	pub fn as_str(&self) -> &'static str {
		match self {
			Self::Text => "text",
			Self::Password => "password",
		}
	}
}

/// How a field presents its validation result
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Validity {
	/// Not validated; no validation styling
	Neutral,
	Valid,
	Invalid,
}

impl Validity {
	pub fn from_has_error(has_error: Option<bool>) -> Self {
		match has_error {
			None => Self::Neutral,
			Some(false) => Self::Valid,
			Some(true) => Self::Invalid,
		}
	}

	pub fn input_class(&self) -> &'static str {
		match self {
			Self::Neutral => "form-control",
			Self::Valid => "form-control is-valid",
			Self::Invalid => "form-control is-invalid",
		}
	}
}

#[derive(Prop)]
pub struct FieldInputProps<'a> {
	#[builder(default)]
	label: Option<&'static str>,
	#[builder(default)]
	placeholder: Option<&'static str>,
	#[builder(default)]
	input_type: InputType,
	#[builder(default)]
	value: Option<&'a ReadSignal<String>>,
	#[builder(default)]
	on_change: Option<ChangeHandler<'a>>,
	#[builder(default)]
	has_error: Option<&'a ReadSignal<Option<bool>>>,
	#[builder(default)]
	error: Option<&'a ReadSignal<Option<String>>>,
}

/// Passes the edited contents of an input on to its owner, if the owner listens for changes
fn notify_change(on_change: Option<&ChangeHandler<'_>>, new_value: String) {
	if let Some(on_change) = on_change {
		on_change(new_value);
	}
}

/// A labeled input whose contents are entirely controlled by its owner
#[component]
pub fn FieldInput<'a, G: Html>(ctx: Scope<'a>, props: FieldInputProps<'a>) -> View<G> {
	let value = props.value;
	let has_error = props.has_error;
	let error = props.error;
	let on_change = props.on_change;

	let validity_signal = create_memo(ctx, move || {
		Validity::from_has_error(has_error.and_then(|has_error| *has_error.get()))
	});
	let class_signal = create_memo(ctx, move || validity_signal.get().input_class());
	let value_signal = create_memo(ctx, move || value.map(|value| (*value.get()).clone()).unwrap_or_default());
	// Error text is only shown for invalid fields, regardless of whether a message was given
	let feedback_signal = create_memo(ctx, move || {
		if *validity_signal.get() == Validity::Invalid {
			Some(error.and_then(|error| (*error.get()).clone()).unwrap_or_default())
		} else {
			None
		}
	});

	let input_handler = move |event: WebEvent| {
		let Some(target) = event.target() else {
			return;
		};
		let input: HtmlInputElement = target.unchecked_into();
		notify_change(on_change.as_ref(), input.value());
	};

	let label = props.label;
	let placeholder = props.placeholder.unwrap_or_default();
	let input_type = props.input_type.as_str();

	view! {
		ctx,
		div {
			(match label {
				Some(label_text) => view! { ctx, label { (label_text) } },
				None => view! { ctx, }
			})
			input(
				type=input_type,
				class=*class_signal.get(),
				placeholder=placeholder,
				// The attribute sets the initial contents. The property keeps the live input in sync after the user types.
				value=(*value_signal.get()).clone(),
				prop:value=(*value_signal.get()).clone(),
				on:input=input_handler
			)
			(match (*feedback_signal.get()).clone() {
				Some(message) => view! { ctx, div(class="invalid-feedback") { (message) } },
				None => view! { ctx, }
			})
		}
	}
}
