use sycamore::prelude::*;

mod components;
mod http;
mod pages;

use pages::register::RegistrationView;

fn main() {
	console_error_panic_hook::set_once();
	wasm_logger::init(wasm_logger::Config::default());

	sycamore::render(|ctx| view! { ctx, RegistrationView });
}
