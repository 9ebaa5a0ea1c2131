use crate::store::FormStore;

/// A data model bindable to and from a [`FormStore`] by field name.
///
/// Replaces runtime property introspection with an explicit enumeration of
/// the model's bindable fields: the type lists its field names and provides
/// string get/set access to each. Values are strings on both sides because
/// the store is string-valued; `set_field` is where a typed model may
/// reject a value it cannot represent.
///
/// # Examples
///
/// ```
/// use formbind::FormModel;
///
/// #[derive(Default)]
/// struct Account {
///     username: String,
///     email: String,
/// }
///
/// impl FormModel for Account {
///     fn field_names() -> Vec<String> {
///         vec!["username".to_string(), "email".to_string()]
///     }
///
///     fn get_field(&self, name: &str) -> Option<String> {
///         match name {
///             "username" => Some(self.username.clone()),
///             "email" => Some(self.email.clone()),
///             _ => None,
///         }
///     }
///
///     fn set_field(&mut self, name: &str, value: &str) -> Result<(), String> {
///         match name {
///             "username" => self.username = value.to_string(),
///             "email" => self.email = value.to_string(),
///             _ => return Err(format!("Unknown field: {}", name)),
///         }
///         Ok(())
///     }
/// }
/// ```
pub trait FormModel {
	/// Names of the model's bindable fields.
	fn field_names() -> Vec<String>;

	/// Current value of a field, stringified, or `None` if the field has
	/// no representable value.
	fn get_field(&self, name: &str) -> Option<String>;

	/// Set a field from a string value. Returns a message when the model
	/// rejects the value.
	fn set_field(&mut self, name: &str, value: &str) -> Result<(), String>;
}

/// Errors raised while binding a store to a model.
#[derive(Debug, thiserror::Error)]
pub enum BindError {
	#[error("Field error in {field}: {message}")]
	Field { field: String, message: String },
}

pub type BindResult<T> = Result<T, BindError>;

impl FormStore {
	/// Build a new model instance from the store's current values.
	///
	/// For each model field `f`, the input name is `prefix + f + suffix`;
	/// if that name is declared, its value is assigned through
	/// [`FormModel::set_field`]. Model fields with no matching declared
	/// input keep their `Default` value. A value the model rejects
	/// surfaces as [`BindError::Field`].
	///
	/// # Examples
	///
	/// ```
	/// use formbind::{FormModel, FormStore};
	///
	/// #[derive(Default)]
	/// struct Account {
	///     username: String,
	/// }
	///
	/// impl FormModel for Account {
	///     fn field_names() -> Vec<String> {
	///         vec!["username".to_string()]
	///     }
	///     fn get_field(&self, name: &str) -> Option<String> {
	///         (name == "username").then(|| self.username.clone())
	///     }
	///     fn set_field(&mut self, name: &str, value: &str) -> Result<(), String> {
	///         if name == "username" {
	///             self.username = value.to_string();
	///             Ok(())
	///         } else {
	///             Err(format!("Unknown field: {}", name))
	///         }
	///     }
	/// }
	///
	/// let mut store = FormStore::new();
	/// store.declare_with_initial("user_username", "alice");
	///
	/// let account: Account = store.export_to_model("user_", "").unwrap();
	/// assert_eq!(account.username, "alice");
	/// ```
	pub fn export_to_model<M: FormModel + Default>(
		&self,
		prefix: &str,
		suffix: &str,
	) -> BindResult<M> {
		let mut model = M::default();
		for field in M::field_names() {
			let input_name = format!("{}{}{}", prefix, field, suffix);
			if let Some(value) = self.get(&input_name) {
				model.set_field(&field, value).map_err(|message| BindError::Field {
					field: field.clone(),
					message,
				})?;
			}
		}
		Ok(model)
	}

	/// Copy a model's field values into the store's declared inputs.
	///
	/// The inverse of [`export_to_model`](Self::export_to_model): for each
	/// model field `f`, the input `prefix + f + suffix` is set only if it
	/// is already declared. Model fields with no matching declared input
	/// are ignored; the store never auto-declares inputs from a model.
	pub fn import_from_model<M: FormModel>(&mut self, model: &M, prefix: &str, suffix: &str) {
		for field in M::field_names() {
			let input_name = format!("{}{}{}", prefix, field, suffix);
			if !self.contains(&input_name) {
				continue;
			}
			match model.get_field(&field) {
				Some(value) => self.set(input_name, value),
				None => {
					tracing::debug!(
						"Model field '{}' has no value; input '{}' left unchanged",
						field,
						input_name
					);
				}
			}
		}
	}
}
