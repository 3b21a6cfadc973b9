use std::collections::HashSet;

/// Trim, drop empties and deduplicate glob patterns provided by the user.
/// Declaration order is kept for the survivors.
pub(super) fn sanitize_globs(values: Vec<String>) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut cleaned = Vec::new();
    for value in values {
        let normalized = value.trim().to_string();
        if normalized.is_empty() {
            continue;
        }
        if seen.insert(normalized.clone()) {
            cleaned.push(normalized);
        }
    }
    cleaned
}

/// Trim whitespace from the provided names and drop empty entries, keeping
/// declaration order and duplicates for validation to inspect.
pub(super) fn sanitize_names(values: Vec<String>) -> Vec<String> {
    values
        .into_iter()
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
        .collect()
}
