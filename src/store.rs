use std::collections::HashMap;
use std::ops::Index;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

// Leading-integer prefix: optional whitespace, optional sign, at least one
// digit. Everything after the digit run is ignored, so "42px" reads as 42.
static INT_PREFIX_REGEX: LazyLock<Regex> = LazyLock::new(|| {
	Regex::new(r"^\s*([+-]?[0-9]+)").expect("INT_PREFIX_REGEX: invalid regex pattern")
});

#[cfg_attr(doc, aquamarine::aquamarine)]
/// A fixed-schema store of named form inputs and their current values.
///
/// The declared-name set is exactly the key set of the store: declaring an
/// input registers its name and sets its current value in one step, and no
/// read path ever grows a new key. Values are plain strings; integer reads
/// go through the lenient prefix parse of [`get_int`](Self::get_int).
///
/// # Data Flow
///
/// ```mermaid
/// flowchart LR
///     params[Submitted parameters] -->|import_from_map| store[FormStore]
///     store -->|export_to_map| snapshot[Value snapshot]
///     store -->|export_to_model| model[Typed model]
///     model -->|import_from_model| store
/// ```
///
/// # Examples
///
/// ```
/// use formbind::FormStore;
///
/// let mut store = FormStore::new();
/// store.declare("username");
/// store.declare_with_initial("age", "0");
///
/// assert_eq!(store.get("username"), Some(""));
/// assert_eq!(store.get_int("age"), 0);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormStore {
	fields: HashMap<String, String>,
}

impl FormStore {
	/// Create a new store with no declared inputs.
	///
	/// # Examples
	///
	/// ```
	/// use formbind::FormStore;
	///
	/// let store = FormStore::new();
	/// assert!(store.is_empty());
	/// ```
	pub fn new() -> Self {
		Self {
			fields: HashMap::new(),
		}
	}

	/// Declare an input with an empty initial value.
	///
	/// Equivalent to [`declare_with_initial(name, "")`](Self::declare_with_initial).
	pub fn declare(&mut self, name: impl Into<String>) {
		self.declare_with_initial(name, "");
	}

	/// Declare an input and set its current value.
	///
	/// Declaring a name that already exists overwrites its value; there is
	/// no distinct redeclare error.
	///
	/// # Examples
	///
	/// ```
	/// use formbind::FormStore;
	///
	/// let mut store = FormStore::new();
	/// store.declare_with_initial("color", "green");
	/// assert_eq!(store.get("color"), Some("green"));
	///
	/// store.declare_with_initial("color", "blue");
	/// assert_eq!(store.get("color"), Some("blue"));
	/// ```
	pub fn declare_with_initial(&mut self, name: impl Into<String>, value: impl Into<String>) {
		self.fields.insert(name.into(), value.into());
	}

	/// Get the current value of an input, or `None` if the name was never
	/// declared.
	pub fn get(&self, name: &str) -> Option<&str> {
		self.fields.get(name).map(String::as_str)
	}

	/// Get the current value of an input, or `""` if the name was never
	/// declared.
	///
	/// This is the permissive lookup policy: reading an undeclared name
	/// logs a warning and degrades to the empty string instead of failing.
	/// Use [`get`](Self::get) when absence should be visible to the caller,
	/// or indexing (`store["name"]`) when absence is a caller bug.
	pub fn get_or_default(&self, name: &str) -> &str {
		match self.fields.get(name) {
			Some(value) => value,
			None => {
				tracing::warn!("Read of undeclared input '{}'", name);
				""
			}
		}
	}

	/// Get the current value of an input parsed as an integer.
	///
	/// Parsing is lenient: the longest leading integer prefix is honored
	/// and everything else yields `0`. Values outside the `i64` range
	/// saturate.
	///
	/// # Examples
	///
	/// ```
	/// use formbind::FormStore;
	///
	/// let mut store = FormStore::new();
	/// store.declare_with_initial("width", "42px");
	/// store.declare_with_initial("offset", "-3");
	/// store.declare_with_initial("label", "abc");
	///
	/// assert_eq!(store.get_int("width"), 42);
	/// assert_eq!(store.get_int("offset"), -3);
	/// assert_eq!(store.get_int("label"), 0);
	/// ```
	pub fn get_int(&self, name: &str) -> i64 {
		match INT_PREFIX_REGEX.captures(self.get_or_default(name)) {
			Some(caps) => {
				let digits = &caps[1];
				digits.parse::<i64>().unwrap_or_else(|_| {
					if digits.starts_with('-') {
						i64::MIN
					} else {
						i64::MAX
					}
				})
			}
			None => 0,
		}
	}

	/// Set the current value of an input, declaring it if necessary.
	///
	/// Identical to [`declare_with_initial`](Self::declare_with_initial);
	/// correct usage declares every input up front and uses `set` only for
	/// already-declared names.
	pub fn set(&mut self, name: impl Into<String>, value: impl Into<String>) {
		self.fields.insert(name.into(), value.into());
	}

	/// Iterate over the declared input names, in no particular order.
	pub fn names(&self) -> impl Iterator<Item = &str> {
		self.fields.keys().map(String::as_str)
	}

	/// Number of declared inputs.
	pub fn len(&self) -> usize {
		self.fields.len()
	}

	/// Whether no inputs have been declared.
	pub fn is_empty(&self) -> bool {
		self.fields.is_empty()
	}

	/// Whether `name` is a declared input, regardless of its value.
	pub fn contains(&self, name: &str) -> bool {
		self.fields.contains_key(name)
	}

	/// Whether every declared input name is present as a key in `params`.
	///
	/// Presence of the key is what is tested; its value may be empty. Used
	/// to decide "was this whole form submitted?". Vacuously true for a
	/// store with no declared inputs.
	///
	/// # Examples
	///
	/// ```
	/// use formbind::FormStore;
	/// use std::collections::HashMap;
	///
	/// let mut store = FormStore::new();
	/// store.declare("username");
	/// store.declare("age");
	///
	/// let mut params = HashMap::new();
	/// params.insert("username".to_string(), "alice".to_string());
	///
	/// assert!(!store.is_entirely_in(&params));
	/// params.insert("age".to_string(), String::new());
	/// assert!(store.is_entirely_in(&params));
	/// ```
	pub fn is_entirely_in<V>(&self, params: &HashMap<String, V>) -> bool {
		self.fields.keys().all(|name| params.contains_key(name))
	}

	/// Whether at least one declared input name is a key in `params`.
	///
	/// Distinguishes "no submission" from "submission of a different form"
	/// when multiple forms share a page. False for a store with no declared
	/// inputs.
	pub fn is_partially_in<V>(&self, params: &HashMap<String, V>) -> bool {
		self.fields.keys().any(|name| params.contains_key(name))
	}

	/// Set every declared input from `params`.
	///
	/// Declared names missing from `params` are set to `""` (absent keys
	/// are routine for HTML forms: unchecked checkboxes never submit).
	/// Keys in `params` that are not declared inputs are ignored.
	///
	/// # Examples
	///
	/// ```
	/// use formbind::FormStore;
	/// use std::collections::HashMap;
	///
	/// let mut store = FormStore::new();
	/// store.declare("username");
	///
	/// let mut params = HashMap::new();
	/// params.insert("username".to_string(), "alice".to_string());
	/// params.insert("extra".to_string(), "x".to_string());
	///
	/// store.import_from_map(&params);
	/// assert_eq!(store.get("username"), Some("alice"));
	/// assert!(!store.contains("extra"));
	/// ```
	pub fn import_from_map(&mut self, params: &HashMap<String, String>) {
		for (name, value) in self.fields.iter_mut() {
			*value = params.get(name).cloned().unwrap_or_default();
		}
	}

	/// Return a copy of the full name-to-value mapping.
	pub fn export_to_map(&self) -> HashMap<String, String> {
		self.fields.clone()
	}
}

impl Index<&str> for FormStore {
	type Output = str;

	fn index(&self, name: &str) -> &Self::Output {
		self.fields
			.get(name)
			.map(String::as_str)
			.unwrap_or_else(|| panic!("Input '{}' not declared", name))
	}
}
