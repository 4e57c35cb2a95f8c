use crate::emotion::map_emotion_to_keywords;

pub fn cmd_map(phrase: &str) -> anyhow::Result<()> {
    let keywords = map_emotion_to_keywords(phrase);

    if keywords == phrase {
        println!("No mapping for '{phrase}', searching as typed.");
    } else {
        println!("{phrase} -> {keywords}");
    }

    Ok(())
}
