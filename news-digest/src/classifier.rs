/// Case-insensitive substring match of any keyword against `text`.
///
/// No tokenization: `iran` also matches `Iranian` and `tyranny`.
/// An empty keyword list never matches.
pub fn matches<S: AsRef<str>>(text: &str, keywords: &[S]) -> bool {
    if keywords.is_empty() {
        return false;
    }

    let haystack = text.to_lowercase();
    keywords
        .iter()
        .map(|k| k.as_ref().to_lowercase())
        .any(|k| haystack.contains(&k))
}

/// Keywords folded once up front, for repeated checks against many entries.
#[derive(Debug, Clone)]
pub struct KeywordSet {
    folded: Vec<String>,
}

impl KeywordSet {
    pub fn new<S: AsRef<str>>(keywords: &[S]) -> Self {
        Self {
            folded: keywords.iter().map(|k| k.as_ref().to_lowercase()).collect(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.folded.is_empty()
    }

    pub fn is_relevant(&self, text: &str) -> bool {
        let haystack = text.to_lowercase();
        self.folded.iter().any(|k| haystack.contains(k.as_str()))
    }
}
