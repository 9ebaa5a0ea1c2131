use crate::store::FormStore;

/// A form type that declares its own input schema.
///
/// Every concrete form implements this once, declaring each input it
/// recognizes; [`FormStore::from_schema`] runs the declarations exactly
/// once at construction time. The imperative path (`FormStore::new()` plus
/// explicit `declare` calls) remains available for forms built at runtime.
///
/// # Examples
///
/// ```
/// use formbind::{FormSchema, FormStore};
///
/// struct LoginForm;
///
/// impl FormSchema for LoginForm {
///     fn declare_inputs(store: &mut FormStore) {
///         store.declare("username");
///         store.declare("password");
///         store.declare_with_initial("remember_me", "0");
///     }
/// }
///
/// let store = FormStore::from_schema::<LoginForm>();
/// assert!(store.contains("remember_me"));
/// assert_eq!(store.get("remember_me"), Some("0"));
/// ```
pub trait FormSchema {
	/// Declare every input this form recognizes.
	fn declare_inputs(store: &mut FormStore);
}

impl FormStore {
	/// Construct a store populated by a schema type.
	pub fn from_schema<S: FormSchema>() -> Self {
		let mut store = Self::new();
		S::declare_inputs(&mut store);
		store
	}
}
