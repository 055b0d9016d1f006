// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::color_utils::{css_rgb, rgb_str_from_color, TextColor};
use crate::controller::Swatch;
use rgb::RGB8;
use sycamore::prelude::*;

/// Drives the swatch view through its signals.
pub struct SignalSwatch<'a> {
	background: &'a Signal<RGB8>,
	foreground: &'a Signal<Option<TextColor>>,
	classification_error: &'a Signal<Option<String>>,
}

impl<'a> SignalSwatch<'a> {
	pub fn new(
		background: &'a Signal<RGB8>,
		foreground: &'a Signal<Option<TextColor>>,
		classification_error: &'a Signal<Option<String>>,
	) -> Self {
		Self {
			background,
			foreground,
			classification_error,
		}
	}
}

impl Swatch for SignalSwatch<'_> {
	fn set_background(&self, color: RGB8) {
		self.background.set(color);
	}

	fn set_foreground(&self, color: TextColor) {
		self.foreground.set(Some(color));
	}

	fn set_classification_error(&self, error: Option<String>) {
		self.classification_error.set(error);
	}
}

#[derive(Prop)]
pub struct SwatchViewProps<'a> {
	background: &'a ReadSignal<RGB8>,
	foreground: &'a ReadSignal<Option<TextColor>>,
	classification_error: &'a ReadSignal<Option<String>>,
}

#[component]
pub fn SwatchView<'a, G: Html>(ctx: Scope<'a>, props: SwatchViewProps<'a>) -> View<G> {
	let background = props.background;
	let foreground = props.foreground;
	let classification_error = props.classification_error;

	let style = create_memo(ctx, move || {
		let background_style = format!("background-color: {}", css_rgb(*background.get()));
		match *foreground.get() {
			Some(text_color) => format!("{}; color: {}", background_style, text_color.css_name()),
			None => background_style,
		}
	});
	let hex_color = create_memo(ctx, move || rgb_str_from_color(*background.get()));
	let contrast_ratio = create_memo(ctx, move || {
		(*foreground.get()).map(|text_color| format!("{:.4}", text_color.contrast_against(*background.get())))
	});

	view! {
		ctx,
		div(class="swatch") {
			div(class="color", style=(*style.get()).clone()) {
				p(class="color_sample") { "The quick brown fox jumps over the lazy dog" }
				div(class="color_details") {
					span(class="color_hex") { ((*hex_color.get()).clone()) }
					(match (*contrast_ratio.get()).clone() {
						Some(ratio) => view! { ctx, span(class="color_contrast") { " Contrast: " (ratio) } },
						None => view! { ctx, }
					})
				}
			}
			(match (*classification_error.get()).clone() {
				Some(error) => view! { ctx, div(class="classification_error") { "Unable to choose a text color: " (error) } },
				None => view! { ctx, }
			})
		}
	}
}
