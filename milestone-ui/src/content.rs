//! Nội dung tĩnh của trang (header, FAQ, footer).

pub const TITLE: &str = "How Long Since AI?";

pub const TAGLINE: [&str; 2] = [
    "It's easy to forget how fast this is moving.",
    "Look how little time it's been since...",
];

pub const FAQ_TITLE: &str = "Where do the OOMs come from?";

pub const FAQ_INTRO: &str = "An OOM (Order of Magnitude) = 10x improvement. From GPT-2 to GPT-4, \
we gained ~5 OOMs. According to Leopold Aschenbrenner's";

pub const FAQ_ESSAY: (&str, &str) = ("Situational Awareness", "https://situational-awareness.ai/");

pub const FAQ_OUTRO: &str = "essay, the next wave comes from three sources:";

pub struct FaqItem {
    pub title: &'static str,
    pub rate: &'static str,
    pub body: &'static str,
}

pub static FAQ_ITEMS: [FaqItem; 3] = [
    FaqItem {
        title: "Compute",
        rate: "~0.5 OOMs/year",
        body: "Bigger clusters, more GPUs, longer training runs. GPT-4 used 10,000x more compute than GPT-2.",
    },
    FaqItem {
        title: "Algorithms",
        rate: "~0.5 OOMs/year",
        body: "Better architectures and training methods. Hitting 50% on MATH got 1000x cheaper in just 2 years.",
    },
    FaqItem {
        title: "Unhobbling",
        rate: "Unlocks latent capability",
        body: "RLHF, chain-of-thought, tool use, and scaffolding let models use what they already know.",
    },
];

pub const FOOTER: [&str; 3] = [
    "What's the ceiling? Maybe we're already there. Maybe not.",
    "Either way, it's like we just invented electricity:",
    "foundational, transformative, and with so much left to build.",
];
