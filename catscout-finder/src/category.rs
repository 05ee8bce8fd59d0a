//! Category identifier helpers.
//!
//! Category names use underscores in the stored form and spaces in the
//! display form; the two are interchangeable. Names containing a colon are
//! namespace-qualified and are never expanded further during traversal.

/// Convert a user-supplied category name to its stored form.
pub fn normalize(name: &str) -> String {
    name.trim().replace(' ', "_")
}

/// Convert a stored category or label name to its display form.
pub fn display(name: &str) -> String {
    name.replace('_', " ")
}

/// Whether a category identifier is namespace-qualified.
pub fn is_namespaced(name: &str) -> bool {
    name.contains(':')
}
