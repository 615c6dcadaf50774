//! Cluster a small review corpus and print the summaries as JSON.
//!
//! Run with `RUST_LOG=debug` to see the per-phase pipeline logs.

use insight_cluster::{analyze_clusters_default, persona_seeds};
use insight_core::constants::DEFAULT_TOP_KEYWORDS;
use insight_core::Review;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let reviews = vec![
        Review::new("r1", "App crashes every time I open the camera.", -0.9).with_rating(1.0),
        Review::new("r2", "Crashes on launch since the last update.", -0.8).with_rating(1.0),
        Review::new("r3", "Constant crashing, lost all my work twice.", -0.9).with_rating(2.0),
        Review::new("r4", "Love the new design, clean and fast.", 0.9).with_rating(5.0),
        Review::new("r5", "Beautiful interface, really enjoy the design.", 0.8).with_rating(5.0),
        Review::new("r6", "Great design refresh, feels modern.", 0.7).with_rating(4.0),
        Review::new("r7", "Battery drains twice as fast with this version.", -0.6).with_rating(2.0),
        Review::new("r8", "Phone gets hot and battery drain is awful.", -0.7).with_rating(2.0),
        Review::new("r9", "Battery usage went way up after updating.", -0.5).with_rating(3.0),
    ];

    let summaries = analyze_clusters_default(&reviews, 2, 5, DEFAULT_TOP_KEYWORDS)?;
    println!("{}", serde_json::to_string_pretty(&summaries)?);

    let seeds = persona_seeds(&summaries, reviews.len());
    println!("{}", serde_json::to_string_pretty(&seeds)?);

    Ok(())
}
