//! Search term normalisation and the containment check shared by loose
//! class files and archive entries.

/// A search term in archive-internal form.
///
/// Dots become `/` so `com.acme.Foo` lines up with the entry
/// `com/acme/Foo.class`. In case-insensitive mode the term is lower-cased
/// once here and each candidate name is folded before comparison.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedTerm {
    value: String,
    case_sensitive: bool,
}

impl NormalizedTerm {
    pub fn new(search_term: &str, case_sensitive: bool) -> Self {
        let slashed = search_term.replace('.', "/");
        let value = if case_sensitive {
            slashed
        } else {
            slashed.to_lowercase()
        };
        Self {
            value,
            case_sensitive,
        }
    }

    pub fn as_str(&self) -> &str {
        &self.value
    }

    /// Plain substring containment, not path-segment aware: `og` matches
    /// `Logger.class`.
    pub fn matches(&self, name: &str) -> bool {
        if self.case_sensitive {
            name.contains(self.value.as_str())
        } else {
            name.to_lowercase().contains(self.value.as_str())
        }
    }
}
