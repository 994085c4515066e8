//! Inspirational beauty quotes

use chrono::{DateTime, Utc};
use rand::seq::IndexedRandom;
use rand::Rng;
use serde::Serialize;

/// A quote from the built-in table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct QuoteEntry {
    pub quote: &'static str,
    pub author: &'static str,
    pub category: &'static str,
}

/// A quote handed out to a caller, stamped with the time it was picked.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Quote {
    #[serde(flatten)]
    pub entry: QuoteEntry,
    pub timestamp: DateTime<Utc>,
}

pub const QUOTES: &[QuoteEntry] = &[
    QuoteEntry {
        quote: "Beauty begins the moment you decide to be yourself",
        author: "Coco Chanel",
        category: "confidence",
    },
    QuoteEntry {
        quote: "Style is a way to say who you are without having to speak",
        author: "Rachel Zoe",
        category: "style",
    },
    QuoteEntry {
        quote: "Elegance is the only beauty that never fades",
        author: "Audrey Hepburn",
        category: "elegance",
    },
    QuoteEntry {
        quote: "Confidence is the best accessory you can wear",
        author: "Anonymous",
        category: "confidence",
    },
    QuoteEntry {
        quote: "Fashion fades, but style is eternal",
        author: "Yves Saint Laurent",
        category: "style",
    },
    QuoteEntry {
        quote: "Invest in your skin, it is where you will live forever",
        author: "Warren Buffett",
        category: "care",
    },
    QuoteEntry {
        quote: "Real beauty is in being authentic with yourself",
        author: "Lupita Nyong'o",
        category: "authenticity",
    },
    QuoteEntry {
        quote: "Makeup is not a mask that covers your beauty; it is an art that celebrates your uniqueness",
        author: "Kevyn Aucoin",
        category: "makeup",
    },
];

/// Returned when there is nothing to choose from.
pub const FALLBACK_QUOTE: QuoteEntry = QuoteEntry {
    quote: "Beauty is in the eye of the beholder",
    author: "Plato",
    category: "philosophy",
};

/// Spanish category names accepted alongside the English ones.
const CATEGORY_ALIASES: &[(&str, &str)] = &[
    ("confianza", "confidence"),
    ("estilo", "style"),
    ("elegancia", "elegance"),
    ("cuidado", "care"),
    ("autenticidad", "authenticity"),
    ("maquillaje", "makeup"),
    ("filosofia", "philosophy"),
    ("filosofía", "philosophy"),
];

/// Map a requested category onto the table's English name.
fn canonical_category(category: &str) -> &str {
    let category = category.trim();
    let lowered = category.to_lowercase();
    CATEGORY_ALIASES.iter().find(|(alias, _)| *alias == lowered).map_or(category, |&(_, name)| name)
}

/// Distinct categories, in first-seen order.
pub fn categories() -> Vec<&'static str> {
    let mut seen = Vec::new();
    for q in QUOTES {
        if !seen.contains(&q.category) {
            seen.push(q.category);
        }
    }
    seen
}

/// Pick a random quote from `pool`, optionally restricted to `category`.
///
/// The category match ignores case and accepts Spanish names. A category with no quotes falls back to
/// the whole pool, and an empty pool yields [`FALLBACK_QUOTE`].
pub fn pick_from<R: Rng + ?Sized>(
    pool: &[QuoteEntry],
    category: Option<&str>,
    rng: &mut R,
) -> QuoteEntry {
    let filtered: Vec<QuoteEntry> = match category {
        Some(cat) => {
            let cat = canonical_category(cat);
            pool.iter().filter(|q| q.category.eq_ignore_ascii_case(cat)).copied().collect()
        }
        None => Vec::new(),
    };
    let candidates = if filtered.is_empty() { pool } else { filtered.as_slice() };

    candidates.choose(rng).copied().unwrap_or(FALLBACK_QUOTE)
}

/// Pick a quote from the built-in table and stamp it with `now`.
pub fn pick_quote<R: Rng + ?Sized>(category: Option<&str>, rng: &mut R, now: DateTime<Utc>) -> Quote {
    Quote { entry: pick_from(QUOTES, category, rng), timestamp: now }
}
