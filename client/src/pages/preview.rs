// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::classifier::HttpClassifier;
use crate::color_utils::{channel_from_slider, Channel, TextColor};
use crate::components::channel_slider::ChannelSlider;
use crate::components::swatch::{SignalSwatch, SwatchView};
use crate::config::PageConfig;
use crate::controller::ColorPreviewController;
use rgb::RGB8;
use sycamore::futures::spawn_local_scoped;
use sycamore::prelude::*;

#[derive(Prop)]
pub struct ColorPreviewProps {
	config: PageConfig,
}

#[component]
pub fn ColorPreviewView<'a, G: Html>(ctx: Scope<'a>, props: ColorPreviewProps) -> View<G> {
	let config = props.config;
	let initial_color = config.initial_color;

	let red = create_signal(ctx, initial_color.r.to_string());
	let green = create_signal(ctx, initial_color.g.to_string());
	let blue = create_signal(ctx, initial_color.b.to_string());

	let background = create_signal(ctx, initial_color);
	let foreground: &Signal<Option<TextColor>> = create_signal(ctx, None);
	let classification_error: &Signal<Option<String>> = create_signal(ctx, None);

	let controller = create_ref(
		ctx,
		ColorPreviewController::new(
			SignalSwatch::new(background, foreground, classification_error),
			HttpClassifier::new(config.endpoint, config.timeout_ms),
		),
	);

	// Runs once immediately so the initial color gets a text color too.
	create_effect(ctx, move || {
		let color = RGB8::new(
			channel_from_slider(&red.get()),
			channel_from_slider(&green.get()),
			channel_from_slider(&blue.get()),
		);
		let classification = controller.on_slider_change(color);
		spawn_local_scoped(ctx, async move {
			classification.await;
		});
	});

	view! {
		ctx,
		div(id="color_preview") {
			h1 { "Dark or light text?" }
			div(class="sliders") {
				ChannelSlider(channel=Channel::Red, value=red)
				ChannelSlider(channel=Channel::Green, value=green)
				ChannelSlider(channel=Channel::Blue, value=blue)
			}
			SwatchView(background=background, foreground=foreground, classification_error=classification_error)
		}
	}
}
