use serde::{Deserialize, Serialize};

/// Endpoint new registrations are posted to.
pub const REGISTRATION_ENDPOINT: &str = "https://reqres.in/api/users";

/// Data from the client when trying to register an account.
///
/// The wire keys are the field names the registration service expects.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct RegistrationRequest {
	#[serde(rename = "ad")]
	pub first_name: String,
	#[serde(rename = "soyad")]
	pub last_name: String,
	pub email: String,
	pub password: String,
}

/// Response data from the registration service for a new account. Anything
/// beyond the assigned ID is ignored.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct RegistrationResponse {
	pub id: String,
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn request_uses_service_field_names() {
		let request = RegistrationRequest {
			first_name: String::from("Ayşe"),
			last_name: String::from("Yılmaz"),
			email: String::from("ayse@example.com"),
			password: String::from("Aa1!aaaa"),
		};
		let json: serde_json::Value = serde_json::to_value(&request).unwrap();
		assert_eq!(json["ad"], "Ayşe");
		assert_eq!(json["soyad"], "Yılmaz");
		assert_eq!(json["email"], "ayse@example.com");
		assert_eq!(json["password"], "Aa1!aaaa");
	}

	#[test]
	fn response_id_is_extracted_and_extra_fields_ignored() {
		let response: RegistrationResponse =
			serde_json::from_str(r#"{"id": "974", "createdAt": "2024-05-17T09:21:44.163Z"}"#).unwrap();
		assert_eq!(response.id, "974");
	}

	#[test]
	fn response_without_id_fails_to_parse() {
		let result: Result<RegistrationResponse, _> = serde_json::from_str(r#"{"createdAt": "now"}"#);
		assert!(result.is_err());
	}
}
