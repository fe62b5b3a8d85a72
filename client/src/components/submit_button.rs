// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use sycamore::prelude::*;
use web_sys::Event as WebEvent;

#[derive(Prop)]
pub struct SubmitButtonProps<'a, TClickHandler: FnMut(WebEvent) + 'a> {
	text: &'static str,
	disabled: &'a ReadSignal<bool>,
	pending: &'a ReadSignal<bool>,
	on_click: TClickHandler,
}

/// A submit button that shows a spinner while its request is pending
#[component]
pub fn SubmitButton<'a, G: Html, TClickHandler: FnMut(WebEvent) + 'a>(
	ctx: Scope<'a>,
	props: SubmitButtonProps<'a, TClickHandler>,
) -> View<G> {
	let disabled = props.disabled;
	let pending = props.pending;
	let text = props.text;

	view! {
		ctx,
		button(class="btn btn-primary", disabled=*disabled.get(), on:click=props.on_click) {
			(if *pending.get() {
				view! {
					ctx,
					div(class="spinner-border text-light spinner-border-sm mr-1") {
						span(class="sr-only") { "Loading..." }
					}
				}
			} else {
				view! { ctx, }
			})
			(text)
		}
	}
}
