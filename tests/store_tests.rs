//! Store-level integration tests
//!
//! Exercises the declared-input store end to end: schema declaration,
//! parameter-map import/export, membership predicates, and value snapshots.

use formbind::{FormSchema, FormStore};
use rstest::rstest;
use std::collections::HashMap;

struct RegistrationForm;

impl FormSchema for RegistrationForm {
	fn declare_inputs(store: &mut FormStore) {
		store.declare("username");
		store.declare_with_initial("age", "0");
	}
}

fn params(pairs: &[(&str, &str)]) -> HashMap<String, String> {
	pairs
		.iter()
		.map(|(k, v)| (k.to_string(), v.to_string()))
		.collect()
}

#[rstest]
fn test_submitted_form_scenario() {
	// Arrange
	let mut store = FormStore::from_schema::<RegistrationForm>();
	let submitted = params(&[("username", "alice"), ("age", "30"), ("extra", "x")]);

	// Act
	store.import_from_map(&submitted);

	// Assert
	assert_eq!(
		store.export_to_map(),
		params(&[("username", "alice"), ("age", "30")])
	);
	assert_eq!(store.get_int("age"), 30);
}

#[rstest]
fn test_partial_submission_is_detected() {
	let store = FormStore::from_schema::<RegistrationForm>();
	let submitted = params(&[("username", "alice")]);

	assert!(!store.is_entirely_in(&submitted));
	assert!(store.is_partially_in(&submitted));
}

#[rstest]
fn test_full_submission_is_detected() {
	let store = FormStore::from_schema::<RegistrationForm>();
	let submitted = params(&[("username", "alice"), ("age", "30")]);

	assert!(store.is_entirely_in(&submitted));
}

#[rstest]
fn test_foreign_form_submission_is_not_a_match() {
	// Two forms share a page; a submission of one must not register as a
	// partial submission of the other.
	let store = FormStore::from_schema::<RegistrationForm>();
	let submitted = params(&[("search_query", "rust forms")]);

	assert!(!store.is_partially_in(&submitted));
	assert!(!store.is_entirely_in(&submitted));
}

#[rstest]
fn test_empty_values_still_count_as_present() {
	let store = FormStore::from_schema::<RegistrationForm>();
	let submitted = params(&[("username", ""), ("age", "")]);

	assert!(store.is_entirely_in(&submitted));
	assert!(store.contains("username"));
}

#[rstest]
fn test_import_export_round_trip_preserves_values() {
	let mut store = FormStore::from_schema::<RegistrationForm>();
	store.set("username", "alice");
	store.set("age", "30");
	let before = store.export_to_map();

	store.import_from_map(&before);

	assert_eq!(store.export_to_map(), before);
}

#[rstest]
fn test_value_snapshot_serde_round_trip() {
	let mut store = FormStore::from_schema::<RegistrationForm>();
	store.set("username", "alice");

	let json = serde_json::to_string(&store).unwrap();
	let restored: FormStore = serde_json::from_str(&json).unwrap();

	assert_eq!(restored, store);
	assert_eq!(restored.get("username"), Some("alice"));
}

#[rstest]
fn test_stores_from_same_schema_do_not_share_state() {
	let mut first = FormStore::from_schema::<RegistrationForm>();
	let second = FormStore::from_schema::<RegistrationForm>();

	first.import_from_map(&params(&[("username", "alice"), ("age", "30")]));

	assert_eq!(second.get("username"), Some(""));
	assert_eq!(second.get("age"), Some("0"));
}
