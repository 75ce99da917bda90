use wordcloud_vibes::sources::*;

#[test]
fn test_known_titles() {
    assert_eq!(titles(), vec!["Frankenstein", "Dracula"]);
    assert!(lookup("Frankenstein").starts_with("It is on a dreary night of November"));
    assert!(lookup("Dracula").contains("haunted castle"));
}

#[test]
fn test_unknown_title_falls_back() {
    assert_eq!(lookup("Carmilla"), FALLBACK_TEXT);
    assert_eq!(lookup(""), FALLBACK_TEXT);
    assert!(find("Carmilla").is_none());
}

#[test]
fn test_lookup_is_case_sensitive() {
    assert_eq!(lookup("dracula"), FALLBACK_TEXT);
}

#[test]
fn test_passages_keep_single_spacing() {
    for title in titles() {
        assert!(!lookup(title).contains("  "), "{} has a double space", title);
    }
}
