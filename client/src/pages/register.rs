use crate::components::form_field::FormField;
use crate::http::send_registration;
use signup_form_shared::messages::user_register::RegistrationRequest;
use signup_form_shared::validation::Field;
use sycamore::futures::spawn_local_scoped;
use sycamore::prelude::*;
use web_sys::Event as WebEvent;

const FIRST_NAME_ERROR: &str = "Adınızı en az 3 karakter giriniz.";
const LAST_NAME_ERROR: &str = "Soyadınızı en az 3 karakter giriniz.";
const EMAIL_ERROR: &str = "Geçerli bir eposta adresi giriniz.";
const PASSWORD_ERROR: &str =
	"En az 8 karakter, en az 1 büyük harf, en az 1 küçük harf ve en az 1 sembol içermelidir.";

#[component]
pub fn RegistrationView<G: Html>(ctx: Scope<'_>) -> View<G> {
	let first_name_signal = create_signal(ctx, String::new());
	let last_name_signal = create_signal(ctx, String::new());
	let email_signal = create_signal(ctx, String::new());
	let password_signal = create_signal(ctx, String::new());

	// Error flags start clear; each flag is updated only when its own field is
	// edited, so an untouched field never shows an error.
	let first_name_error_signal = create_signal(ctx, false);
	let last_name_error_signal = create_signal(ctx, false);
	let email_error_signal = create_signal(ctx, false);
	let password_error_signal = create_signal(ctx, false);

	let user_id_signal: &Signal<Option<String>> = create_signal(ctx, None);

	let has_errors_signal = create_memo(ctx, || {
		*first_name_error_signal.get()
			|| *last_name_error_signal.get()
			|| *email_error_signal.get()
			|| *password_error_signal.get()
	});

	let form_submission_handler = move |event: WebEvent| {
		event.prevent_default();

		if *has_errors_signal.get() {
			log::error!("Registration submission blocked; one or more fields failed validation");
			return;
		}

		let registration = RegistrationRequest {
			first_name: (*first_name_signal.get()).clone(),
			last_name: (*last_name_signal.get()).clone(),
			email: (*email_signal.get()).clone(),
			password: (*password_signal.get()).clone(),
		};

		spawn_local_scoped(ctx, async move {
			match send_registration(&registration).await {
				Ok(response) => {
					user_id_signal.set(Some(response.id));
					first_name_signal.set(String::new());
					last_name_signal.set(String::new());
					email_signal.set(String::new());
					password_signal.set(String::new());
				}
				Err(error) => log::error!("Error submitting registration: {}", error),
			}
		});
	};

	view! {
		ctx,
		div(class="card") {
			div(class="card_body") {
				h1 { "Kayıt Ol" }
				form(id="register_user", on:submit=form_submission_handler) {
					FormField(
						field=Field::FirstName,
						label="Ad",
						placeholder="Adınızı giriniz",
						input_type="text",
						error_message=FIRST_NAME_ERROR,
						value=first_name_signal,
						error=first_name_error_signal
					)
					FormField(
						field=Field::LastName,
						label="Soyad",
						placeholder="Soyadınızı giriniz",
						input_type="text",
						error_message=LAST_NAME_ERROR,
						value=last_name_signal,
						error=last_name_error_signal
					)
					FormField(
						field=Field::Email,
						label="Email",
						placeholder="Email adresinizi giriniz.",
						input_type="email",
						error_message=EMAIL_ERROR,
						value=email_signal,
						error=email_error_signal
					)
					FormField(
						field=Field::Password,
						label="Password",
						placeholder="Güçlü bir şifre seçiniz",
						input_type="password",
						error_message=PASSWORD_ERROR,
						value=password_signal,
						error=password_error_signal
					)
					button(type="submit", disabled=*has_errors_signal.get()) {
						"Kayıt Ol"
					}
				}
				(
					if let Some(user_id) = (*user_id_signal.get()).clone() {
						view! {
							ctx,
							p(id="register_user_id") {
								"Kullanıcı ID: " (user_id)
							}
						}
					} else {
						view! { ctx, }
					}
				)
			}
		}
	}
}
