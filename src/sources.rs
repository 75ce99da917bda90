use indexmap::IndexMap;
use std::sync::OnceLock;

pub const FALLBACK_TEXT: &str = "No text found for this query. Try 'Frankenstein' or 'Dracula'.";

static TEXTS: OnceLock<IndexMap<&'static str, &'static str>> = OnceLock::new();

fn get_texts() -> &'static IndexMap<&'static str, &'static str> {
    TEXTS.get_or_init(|| {
        let mut texts = IndexMap::new();
        texts.insert(
            "Frankenstein",
            "It is on a dreary night of November that I beheld the accomplishment of my toils. \
             The rain pattered dismally against the panes, and in the gloom I detected a \
             shadow\u{2014}a ghostly figure wandering through the fog\u{2014}a haunting vision indeed.",
        );
        texts.insert(
            "Dracula",
            "From the evening shadows of Transylvania comes a tale so eerie, yet so compelling; \
             the cursed and haunted castle stands as a beacon to those who dare glimpse a \
             spirit from beyond.",
        );
        texts
    })
}

/// Exact-title lookup. Unknown titles get the fallback sentence, never an error.
pub fn lookup(title: &str) -> &'static str {
    find(title).unwrap_or(FALLBACK_TEXT)
}

pub fn find(title: &str) -> Option<&'static str> {
    get_texts().get(title).copied()
}

pub fn titles() -> Vec<&'static str> {
    get_texts().keys().copied().collect()
}
