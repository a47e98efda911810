//! Derives manageable resource names from an operation catalog.
//!
//! A resource is anything with a `Create<Noun>` operation whose noun is
//! singular. Batch creation operations and plural nouns are skipped because
//! they do not describe a single manageable entity. The singular check is a
//! dictionary-rule heuristic from `inflector` applied to the last word of the
//! noun; irregular or uncountable nouns may be misclassified.

use inflector::string::{pluralize::to_plural, singularize::to_singular};

use crate::utils::split_words;

/// Prefix marking a creation operation
pub const CREATE_PREFIX: &str = "Create";

/// Prefix marking a bulk creation operation
pub const BATCH_CREATE_PREFIX: &str = "CreateBatch";

/// Resource names from `operation_names`, in catalog order, without duplicates
pub fn derive_names<S: AsRef<str>>(operation_names: &[S]) -> Vec<String> {
    let mut names: Vec<String> = Vec::new();
    for op_name in operation_names.iter().map(AsRef::as_ref) {
        if op_name.starts_with(BATCH_CREATE_PREFIX) {
            continue;
        }
        let Some(candidate) = op_name.strip_prefix(CREATE_PREFIX) else {
            continue;
        };
        if !is_singular(candidate) {
            log::debug!("Skipping {}: '{}' is not a singular noun", op_name, candidate);
            continue;
        }
        if !names.iter().any(|n| n == candidate) {
            names.push(candidate.to_string());
        }
    }
    names
}

/// Whether `word` reads as a singular noun.
///
/// Only the last word of a compound counts (`EventBus` is judged by `Bus`).
/// Singularizing it must leave it unchanged and pluralizing it must change it.
/// Empty words are never singular.
pub fn is_singular(word: &str) -> bool {
    let Some(last) = split_words(word).pop() else {
        return false;
    };
    let lower = last.to_lowercase();
    to_singular(&lower) == lower && to_plural(&lower) != lower
}
