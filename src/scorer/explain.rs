use super::types::Subscores;

pub const FALLBACK_EXPLANATION: &str = "Outfit shows balanced style elements.";

/// A high/low band for one subscore. `high` fires at `value >= high_at`,
/// `low` fires at `value < low_below`; at most one of the two applies.
struct Band {
    high_at: f64,
    high: &'static str,
    low_below: f64,
    low: &'static str,
}

const COLOR: Band = Band {
    high_at: 0.8,
    high: "Color harmony is strong (close to 50/30/20).",
    low_below: 0.5,
    low: "Color ratios deviate from 50/30/20; consider reducing extra accent.",
};

const PATTERN: Band = Band {
    high_at: 1.0,
    high: "Single hero pattern detected; others kept calm.",
    low_below: 0.5,
    low: "Multiple strong patterns compete; consider simplifying.",
};

const TEXTURE: Band = Band {
    high_at: 0.8,
    high: "Good texture variety without clutter.",
    low_below: 0.5,
    low: "Texture mix could be improved; aim for 2-3 distinct materials.",
};

const HIGHLIGHT: Band = Band {
    high_at: 0.9,
    high: "Clear focal point following the Rule of One.",
    low_below: 0.6,
    low: "Outfit lacks a clear highlight; consider emphasizing one element.",
};

const PROPORTION: Band = Band {
    high_at: 0.8,
    high: "Proportions are well-balanced.",
    low_below: 0.6,
    low: "Outfit looks top/bottom heavy; aim near a 33/66 split.",
};

const REPETITION: Band = Band {
    high_at: 0.9,
    high: "Nice color echo between accent and accessories.",
    low_below: 0.5,
    low: "Consider adding color repetition between accent and accessories.",
};

impl Band {
    fn message(&self, value: f64) -> Option<&'static str> {
        if value >= self.high_at {
            Some(self.high)
        } else if value < self.low_below {
            Some(self.low)
        } else {
            None
        }
    }
}

/// Human-readable notes in C, P, T, H, B, R order. Never empty.
pub fn explain(s: &Subscores) -> Vec<String> {
    let bands = [COLOR, PATTERN, TEXTURE, HIGHLIGHT, PROPORTION, REPETITION];

    let mut msgs: Vec<String> = bands
        .iter()
        .zip(s.as_array())
        .filter_map(|(band, value)| band.message(value))
        .map(str::to_string)
        .collect();

    if msgs.is_empty() {
        msgs.push(FALLBACK_EXPLANATION.to_string());
    }
    msgs
}
