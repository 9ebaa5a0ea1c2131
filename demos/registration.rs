//! End-to-end walk of a registration form: schema declaration, submitted
//! parameter import, membership checks, model export, and rendering.
//!
//! Run with: `cargo run --example registration`

use anyhow::Result;
use formbind::{FormModel, FormSchema, FormStore};
use std::collections::HashMap;

struct RegistrationForm;

impl FormSchema for RegistrationForm {
	fn declare_inputs(store: &mut FormStore) {
		store.declare("username");
		store.declare("email");
		store.declare_with_initial("age", "0");
	}
}

#[derive(Default, Debug)]
struct Account {
	username: String,
	email: String,
	age: String,
}

impl FormModel for Account {
	fn field_names() -> Vec<String> {
		vec![
			"username".to_string(),
			"email".to_string(),
			"age".to_string(),
		]
	}

	fn get_field(&self, name: &str) -> Option<String> {
		match name {
			"username" => Some(self.username.clone()),
			"email" => Some(self.email.clone()),
			"age" => Some(self.age.clone()),
			_ => None,
		}
	}

	fn set_field(&mut self, name: &str, value: &str) -> Result<(), String> {
		match name {
			"username" => self.username = value.to_string(),
			"email" => self.email = value.to_string(),
			"age" => self.age = value.to_string(),
			_ => return Err(format!("Unknown field: {}", name)),
		}
		Ok(())
	}
}

fn main() -> Result<()> {
	// Parameters as a request handler would hand them over.
	let mut submitted = HashMap::new();
	submitted.insert("username".to_string(), "alice".to_string());
	submitted.insert("email".to_string(), "alice@example.com".to_string());
	submitted.insert("age".to_string(), "30".to_string());
	submitted.insert("csrf_token".to_string(), "…".to_string());

	let mut store = FormStore::from_schema::<RegistrationForm>();

	println!("entirely submitted: {}", store.is_entirely_in(&submitted));
	println!("partially submitted: {}", store.is_partially_in(&submitted));

	store.import_from_map(&submitted);
	println!("age as int: {}", store.get_int("age"));

	let account: Account = store.export_to_model("", "")?;
	println!("bound model: {:?}", account);

	// Re-render the form inputs for the response page.
	for name in ["username", "email"] {
		println!("<input type=\"text\" {} />", store.render_name_value(name));
	}
	println!(
		"<input type=\"number\" {} />",
		store.render_name_int_value("age")
	);

	Ok(())
}
