// SPDX-License-Identifier: MPL-2.0
//! Memories shipped with the application.

use super::{MemoryIcon, MemoryId, MemoryRecord};

fn record(
    id: u32,
    title: &str,
    note: &str,
    date: Option<&str>,
    video: &str,
    icon: MemoryIcon,
) -> MemoryRecord {
    let id = MemoryId::new(id).unwrap_or_else(|| unreachable!("built-in ids are positive"));
    MemoryRecord::new(id, title, note, date, video, icon)
}

pub(super) fn records() -> Vec<MemoryRecord> {
    vec![
        record(
            1,
            "Long Distance",
            "Even with miles between us, you feel closer than anyone ever has. Every sunset I \
             watch alone, I know you're seeing it too. Every conversation, every 'good morning' \
             text, every 'I miss you' whispered through the screen - they're not reminders of the \
             distance, but proof that love knows no boundaries. These pixels on my screen hold \
             the most beautiful heart I've ever known, and though I can't reach out and touch \
             you, I feel your presence in every moment of my day. The space between us is just \
             geography; in every way that matters, you're right here with me.",
            None,
            "video1.mp4",
            MemoryIcon::Plane,
        ),
        record(
            2,
            "We found each other",
            "In this crowded world, amidst the chaos of life, our eyes met and everything else \
             faded away. It was as if the universe conspired to bring us together in that perfect \
             moment.",
            Some("August 2, 2023"),
            "video2.mp4",
            MemoryIcon::Heart,
        ),
        record(
            3,
            "I love you",
            "Even on the messy days, thinking of you makes everything better. Your smile is my \
             favorite sight, your laughter my favorite sound. I love you more than words can \
             express.",
            None,
            "video3.mp4",
            MemoryIcon::Infinity,
        ),
        record(
            4,
            "First time we talked",
            "I remember the night we talked for the first time. That night after a very long \
             time I smiled with all my heart. Your words were like a melody that played on repeat \
             in my mind.",
            Some("March 16, 2025"),
            "video4.mp4",
            MemoryIcon::Comments,
        ),
        record(
            5,
            "You are my everything",
            "You are my sunshine on cloudy days, my anchor in the stormy seas. With you, I've \
             found a love that fills every corner of my heart and makes life worth living.",
            None,
            "video5.mp4",
            MemoryIcon::Sun,
        ),
        record(
            6,
            "Your eyes",
            "Your eyes are like a universe I could get lost in forever. They hold stories, \
             dreams, and a depth of emotion that captivates me every time I look into them.",
            None,
            "video6.mp4",
            MemoryIcon::Eye,
        ),
    ]
}
