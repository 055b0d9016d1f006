// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use config::PageConfig;
use pages::error::ErrorView;
use pages::preview::ColorPreviewView;
use sycamore::prelude::*;

mod classifier;
mod color_utils;
mod components;
mod config;
mod controller;
mod pages;

fn main() {
	console_error_panic_hook::set_once();

	let config = match PageConfig::from_location() {
		Ok(config) => config,
		Err(error) => {
			wasm_logger::init(wasm_logger::Config::default());
			log::error!("Failed to load page configuration: {}", error);
			sycamore::render(|ctx| {
				view! {
					ctx,
					ErrorView(message="Unable to load: The page address has invalid settings", error=error.to_string())
				}
			});
			return;
		}
	};

	wasm_logger::init(wasm_logger::Config::new(config.log_level));
	match config.timeout_ms {
		Some(timeout_ms) => log::info!("Classifying colors with {} ({}ms timeout)", config.endpoint, timeout_ms),
		None => log::info!("Classifying colors with {} (no timeout)", config.endpoint),
	}

	sycamore::render(|ctx| {
		view! {
			ctx,
			ColorPreviewView(config=config)
		}
	});
}
