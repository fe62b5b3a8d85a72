// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use std::rc::Rc;
use sycamore::prelude::*;

mod actions;
mod components;
mod config;
mod controller;
mod error;
mod form_state;
mod pages;
use actions::{HttpSignupActions, SignupActions};
use config::ClientConfig;
use pages::signup::SignupPage;

fn main() {
	console_error_panic_hook::set_once();

	let config = ClientConfig::from_build_env();
	wasm_logger::init(wasm_logger::Config::new(config.log_level));

	let http_actions = HttpSignupActions::new(config.signup_endpoint);
	log::debug!("Starting signup client; signups go to {}", http_actions.signup_endpoint());

	let actions: Rc<dyn SignupActions> = Rc::new(http_actions);
	sycamore::render(move |ctx| {
		let actions = Rc::clone(&actions);
		view! {
			ctx,
			SignupPage(actions=Some(actions))
		}
	});
}
