// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use sycamore::prelude::*;

#[derive(Prop)]
pub struct ErrorViewProps {
	message: &'static str,
	error: String,
}

#[component]
pub fn ErrorView<G: Html>(ctx: Scope<'_>, props: ErrorViewProps) -> View<G> {
	let message = props.message;
	let error = props.error;

	view! {
		ctx,
		div(id="app_error") {
			(message)
			br {}
			(error)
		}
	}
}
