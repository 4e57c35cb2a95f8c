//! Emotion phrase to GIF search keyword mapping.
//!
//! Users type emotions in Turkish; the provider indexes English tags. The
//! table below translates a phrase into a space separated keyword string.

pub mod catalog;

pub use catalog::{EmotionEntry, PREDEFINED_EMOTIONS, find_emotion};

/// Ordered lookup table. The substring fallback scans it front to back, so
/// order decides which entry wins when several keys overlap.
pub const EMOTION_KEYWORDS: &[(&str, &str)] = &[
    ("mutlu", "happy excited joy celebration"),
    ("üzgün", "sad crying disappointed upset"),
    ("kızgın", "angry mad frustrated rage"),
    ("heyecanlı", "excited thrilled enthusiastic pumped"),
    ("sakin", "calm peaceful relaxed zen"),
    ("şaşkın", "surprised shocked amazed wow"),
    ("yorgun", "tired exhausted sleepy yawn"),
    ("gülmek", "laughing funny humor giggle"),
    ("dans", "dancing party celebration dance"),
    ("aşık", "love heart romantic kiss"),
    ("korkmuş", "scared afraid frightened horror"),
    ("şanslı", "lucky win success victory"),
    ("hayal kırıklığı", "disappointed fail sad upset"),
    ("gurur", "proud success achievement win"),
    ("utangaç", "shy embarrassed blush awkward"),
    ("meraklı", "curious wondering thinking question"),
    ("rahatsız", "annoyed irritated bothered upset"),
    ("memnun", "satisfied pleased content happy"),
    ("endişeli", "worried anxious nervous stress"),
    ("şakacı", "funny joke humor playful"),
];

/// Exact lookup of an already normalized key.
#[must_use]
pub fn lookup(key: &str) -> Option<&'static str> {
    EMOTION_KEYWORDS
        .iter()
        .find(|(k, _)| *k == key)
        .map(|(_, keywords)| *keywords)
}

/// Translates an emotion phrase into provider search keywords.
///
/// Tries an exact match on the lowercased, trimmed phrase first, then the
/// first table entry where either string contains the other. Unknown
/// phrases come back unchanged.
#[must_use]
pub fn map_emotion_to_keywords(emotion: &str) -> String {
    let normalized = emotion.trim().to_lowercase();

    if normalized.is_empty() {
        return emotion.to_string();
    }

    if let Some(keywords) = lookup(&normalized) {
        return keywords.to_string();
    }

    EMOTION_KEYWORDS
        .iter()
        .find(|(key, _)| normalized.contains(key) || key.contains(normalized.as_str()))
        .map_or_else(|| emotion.to_string(), |(_, keywords)| (*keywords).to_string())
}
