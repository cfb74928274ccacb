//! Display labels for enumerated interview answers.

/// Short code to display label. Unlisted codes pass through verbatim.
pub type ChoiceMap = [(&'static str, &'static str)];

pub fn label<'a>(code: &'a str, map: &'a ChoiceMap) -> &'a str {
    map.iter()
        .find(|(c, _)| *c == code)
        .map_or(code, |&(_, label)| label)
}

pub const TONE: &ChoiceMap = &[
    ("warm", "Warm & friendly"),
    ("direct", "Direct & clear"),
    ("funny", "Playful & funny"),
    ("formal", "Formal & respectful"),
    ("quiet", "Quiet & minimal words"),
];

pub const PRIORITY: &ChoiceMap = &[
    ("family", "Family"),
    ("freedom", "Freedom"),
    ("money", "Money / security"),
    ("status", "Status / respect"),
    ("peace", "Peace / stability"),
];

pub const DECISION_SPEED: &ChoiceMap = &[
    ("fast", "Fast"),
    ("balanced", "Balanced"),
    ("slow", "Slow"),
];

pub const DECISION_STYLE: &ChoiceMap = &[
    ("logic", "Logic & numbers"),
    ("gut", "Gut feeling"),
    ("advice", "Advice from trusted people"),
    ("experience", "Past experience"),
    ("research", "Research & comparison"),
];

pub const ANGER_STYLE: &ChoiceMap = &[
    ("silent", "Go quiet"),
    ("direct", "Say it directly"),
    ("explode", "Explode then regret"),
    ("cold", "Cold / distant"),
    ("joke", "Use humor to cover it"),
];

pub const LOVE_LANGUAGE: &ChoiceMap = &[
    ("actions", "Actions / helping"),
    ("words", "Words / reassurance"),
    ("time", "Quality time"),
    ("gifts", "Gifts"),
    ("touch", "Physical touch"),
];

pub const CONFLICT_STYLE: &ChoiceMap = &[
    ("solve", "Solve immediately"),
    ("cooldown", "Need time to cool down"),
    ("avoid", "Avoid conflict"),
    ("win", "Need to be right"),
    ("compromise", "Compromise quickly"),
];
