// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::color_utils::{channel_from_slider, Channel};
use sycamore::prelude::*;

#[derive(Prop)]
pub struct ChannelSliderProps<'a> {
	channel: Channel,
	value: &'a Signal<String>,
}

#[component]
pub fn ChannelSlider<'a, G: Html>(ctx: Scope<'a>, props: ChannelSliderProps<'a>) -> View<G> {
	let value = props.value;
	let channel_value = create_memo(ctx, move || channel_from_slider(&value.get()));

	let input_id = props.channel.id();
	let channel_label = props.channel.label();
	view! {
		ctx,
		div(class="slider_row") {
			label(for=input_id) {
				(channel_label) ": " (channel_value.get().to_string())
			}
			input(id=input_id, class="slider", type="range", min="0", max="255", step="1", bind:value=value)
		}
	}
}
