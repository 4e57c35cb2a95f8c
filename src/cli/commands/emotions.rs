use crate::emotion::PREDEFINED_EMOTIONS;

pub fn cmd_emotions() -> anyhow::Result<()> {
    println!("Quick emotions:");
    println!("{:-<60}", "");

    for emotion in PREDEFINED_EMOTIONS {
        println!(
            "{} {:<10} {:<10} {}",
            emotion.emoji, emotion.id, emotion.label, emotion.keywords
        );
    }

    println!();
    println!("Search one with: moodgif search --emotion <id>");

    Ok(())
}
