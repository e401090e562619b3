//! The convenience item shape and the list transformations hosts apply
//! in response to widget messages. The widget never calls these itself.

/// A labelled checked flag, the common case item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub label: String,
    pub checked: bool,
}

impl Entry {
    pub fn new(label: impl Into<String>, checked: bool) -> Self {
        Self {
            label: label.into(),
            checked,
        }
    }
}

/// A copy of `entries` with the checked flag negated on every entry whose
/// label equals the target's label. Order and length are preserved; with
/// no match the input comes back unchanged. Entries sharing a label all
/// flip together, since matching is by label value rather than position.
pub fn toggle_entry(target: &Entry, entries: &[Entry]) -> Vec<Entry> {
    entries
        .iter()
        .map(|entry| {
            if entry.label == target.label {
                Entry {
                    label: entry.label.clone(),
                    checked: !entry.checked,
                }
            } else {
                entry.clone()
            }
        })
        .collect()
}

/// A copy of `entries` with every checked flag overwritten (not toggled)
/// with `checked`. Order and length are preserved.
pub fn set_all(checked: bool, entries: &[Entry]) -> Vec<Entry> {
    entries
        .iter()
        .map(|entry| Entry {
            label: entry.label.clone(),
            checked,
        })
        .collect()
}
