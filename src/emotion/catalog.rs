use serde::Serialize;

/// A quick-pick emotion shown by clients.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct EmotionEntry {
    pub id: &'static str,
    pub label: &'static str,
    pub emoji: &'static str,
    pub keywords: &'static str,
    /// Presentation hint for the client (a CSS gradient class list).
    pub gradient: &'static str,
}

pub const PREDEFINED_EMOTIONS: &[EmotionEntry] = &[
    EmotionEntry {
        id: "happy",
        label: "Mutlu",
        emoji: "😊",
        keywords: "happy excited joy celebration",
        gradient: "from-yellow-400 to-orange-500",
    },
    EmotionEntry {
        id: "sad",
        label: "Üzgün",
        emoji: "😢",
        keywords: "sad crying disappointed",
        gradient: "from-blue-400 to-indigo-600",
    },
    EmotionEntry {
        id: "excited",
        label: "Heyecanlı",
        emoji: "🤩",
        keywords: "excited thrilled enthusiastic",
        gradient: "from-pink-400 to-purple-600",
    },
    EmotionEntry {
        id: "angry",
        label: "Kızgın",
        emoji: "😠",
        keywords: "angry mad frustrated",
        gradient: "from-red-400 to-orange-600",
    },
    EmotionEntry {
        id: "calm",
        label: "Sakin",
        emoji: "😌",
        keywords: "calm peaceful relaxed",
        gradient: "from-green-400 to-teal-600",
    },
    EmotionEntry {
        id: "surprised",
        label: "Şaşkın",
        emoji: "😲",
        keywords: "surprised shocked amazed",
        gradient: "from-yellow-300 to-amber-500",
    },
];

#[must_use]
pub fn find_emotion(id: &str) -> Option<&'static EmotionEntry> {
    PREDEFINED_EMOTIONS
        .iter()
        .find(|e| e.id.eq_ignore_ascii_case(id.trim()))
}
