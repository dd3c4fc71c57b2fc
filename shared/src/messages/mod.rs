pub mod user_register;
