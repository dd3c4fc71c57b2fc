pub mod messages;
pub mod validation;
