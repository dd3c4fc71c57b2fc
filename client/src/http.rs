use gloo_net::http::Request;
use signup_form_shared::messages::user_register::{
	RegistrationRequest, RegistrationResponse, REGISTRATION_ENDPOINT,
};
use std::fmt::Display;

/// Errors that can occur when submitting a registration to the remote service
pub enum SubmissionError {
	Serialize(serde_json::Error),
	Http(gloo_net::Error),
}

impl Display for SubmissionError {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			Self::Serialize(err) => write!(f, "Failed to serialize registration data: {}", err),
			Self::Http(err) => write!(f, "Registration request failed: {}", err),
		}
	}
}

impl From<serde_json::Error> for SubmissionError {
	fn from(error: serde_json::Error) -> Self {
		Self::Serialize(error)
	}
}

impl From<gloo_net::Error> for SubmissionError {
	fn from(error: gloo_net::Error) -> Self {
		Self::Http(error)
	}
}

/// Posts a registration to the remote service and parses the created account
/// out of the response.
///
/// # Errors
///
/// Errors occur when the request data can't be serialized, when the request
/// itself fails, and when the response isn't the expected JSON. The caller
/// gets no finer distinction than that.
pub async fn send_registration(registration: &RegistrationRequest) -> Result<RegistrationResponse, SubmissionError> {
	let registration_json = serde_json::to_string(registration)?;
	let response = Request::post(REGISTRATION_ENDPOINT)
		.header("Content-Type", "application/json")
		.body(registration_json)?
		.send()
		.await?;
	Ok(response.json().await?)
}
