use droplist::{set_all, toggle_entry, Entry};

fn basket() -> Vec<Entry> {
    vec![Entry::new("Apple", false), Entry::new("Banana", false)]
}

#[test]
fn test_toggle_flips_the_matching_entry() {
    let toggled = toggle_entry(&Entry::new("Apple", false), &basket());

    assert_eq!(
        toggled,
        vec![Entry::new("Apple", true), Entry::new("Banana", false)]
    );
}

#[test]
fn test_toggle_without_match_returns_input_unchanged() {
    let entries = vec![Entry::new("Apple", false)];
    let toggled = toggle_entry(&Entry::new("Kiwi", false), &entries);

    assert_eq!(toggled, entries);
}

#[test]
fn test_toggle_matches_by_label_not_checked_flag() {
    let entries = vec![Entry::new("Apple", true)];
    let toggled = toggle_entry(&Entry::new("Apple", false), &entries);

    assert_eq!(toggled, vec![Entry::new("Apple", false)]);
}

#[test]
fn test_toggle_flips_all_entries_sharing_the_label() {
    let entries = vec![
        Entry::new("Apple", false),
        Entry::new("Banana", true),
        Entry::new("Apple", true),
    ];
    let toggled = toggle_entry(&Entry::new("Apple", false), &entries);

    assert_eq!(
        toggled,
        vec![
            Entry::new("Apple", true),
            Entry::new("Banana", true),
            Entry::new("Apple", false),
        ]
    );
}

#[test]
fn test_toggle_preserves_length_and_order() {
    let entries: Vec<Entry> = (0..50)
        .map(|i| Entry::new(format!("entry-{i}"), i % 3 == 0))
        .collect();
    let toggled = toggle_entry(&Entry::new("entry-7", false), &entries);

    assert_eq!(toggled.len(), entries.len());
    let labels: Vec<&str> = toggled.iter().map(|e| e.label.as_str()).collect();
    let expected: Vec<&str> = entries.iter().map(|e| e.label.as_str()).collect();
    assert_eq!(labels, expected);
}

#[test]
fn test_set_all_overwrites_every_flag() {
    let entries = vec![Entry::new("Apple", false), Entry::new("Banana", true)];

    assert_eq!(
        set_all(true, &entries),
        vec![Entry::new("Apple", true), Entry::new("Banana", true)]
    );
    assert_eq!(
        set_all(false, &entries),
        vec![Entry::new("Apple", false), Entry::new("Banana", false)]
    );
}

#[test]
fn test_set_all_is_an_overwrite_not_a_toggle() {
    let entries = vec![
        Entry::new("Apple", true),
        Entry::new("Banana", false),
        Entry::new("Cherry", true),
    ];

    let cleared = set_all(false, &entries);
    let checked = set_all(true, &cleared);

    assert!(checked.iter().all(|e| e.checked));

    // Applying set_all twice changes nothing further
    assert_eq!(set_all(true, &checked), checked);
}

#[test]
fn test_set_all_preserves_length_and_order() {
    let entries: Vec<Entry> = (0..50)
        .map(|i| Entry::new(format!("entry-{i}"), i % 2 == 0))
        .collect();
    let updated = set_all(true, &entries);

    assert_eq!(updated.len(), entries.len());
    let labels: Vec<&str> = updated.iter().map(|e| e.label.as_str()).collect();
    let expected: Vec<&str> = entries.iter().map(|e| e.label.as_str()).collect();
    assert_eq!(labels, expected);
}
