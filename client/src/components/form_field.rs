use signup_form_shared::validation::Field;
use sycamore::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Event as WebEvent, HtmlInputElement};

#[derive(Prop)]
pub struct FormFieldProps<'a> {
	field: Field,
	label: &'static str,
	placeholder: &'static str,
	input_type: &'static str,
	error_message: &'static str,
	value: &'a Signal<String>,
	error: &'a Signal<bool>,
}

/// A labeled form input that revalidates its own field on every input event.
/// Only this field's error flag is touched; other fields keep whatever state
/// they had.
#[component]
pub fn FormField<'a, G: Html>(ctx: Scope<'a>, props: FormFieldProps<'a>) -> View<G> {
	let FormFieldProps {
		field,
		label,
		placeholder,
		input_type,
		error_message,
		value,
		error,
	} = props;

	let error_class_signal = create_memo(ctx, move || if *error.get() { "error" } else { "" });

	let field_change_handler = move |change_event: WebEvent| {
		let event_target = change_event.target().unwrap();
		let input: &HtmlInputElement = event_target.dyn_ref().unwrap();
		error.set(!field.is_valid(&input.value()));
	};

	let input_id = format!("register_{}", field.name());
	let input_id_for = input_id.clone();
	view! {
		ctx,
		div(class="input_with_message") {
			label(for=input_id_for) {
				(label)
			}
			input(
				id=input_id,
				name=field.name(),
				type=input_type,
				placeholder=placeholder,
				class=*error_class_signal.get(),
				bind:value=value,
				on:input=field_change_handler
			)
			(
				if *error.get() {
					view! {
						ctx,
						span(class="input_error") {
							(error_message)
						}
					}
				} else {
					view! { ctx, }
				}
			)
		}
	}
}
