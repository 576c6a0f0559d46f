//! Keyword-based intent extraction for the assistant front-end
//!
//! The tables are ordered slices: extraction is first-match-wins in table
//! order, so the result is deterministic by construction. A keyword hits
//! when it appears as a substring of the normalized input.

use super::normalize;
use crate::db::PriceLevel;
use crate::occasions::Occasion;

/// Category labels with their trigger keywords, most common first
static CATEGORY_PATTERNS: &[(&str, &[&str])] = &[
    (
        "كافيه",
        &["كافيه", "قهوة", "كوفي", "كابتشينو", "لاتيه", "اسبريسو", "مقهى"],
    ),
    (
        "مطعم",
        &[
            "مطعم", "اكل", "أكل", "غداء", "عشاء", "فطور", "برنش", "جوعان", "ابي اكل", "ابغى اكل",
        ],
    ),
    (
        "ترفيه",
        &["ترفيه", "مرح", "ألعاب", "العاب", "بولنق", "سينما", "كارتنق"],
    ),
    (
        "طبيعة",
        &["طبيعة", "حديقة", "حدائق", "نزهة", "تنزه", "هايكنق"],
    ),
    ("تسوق", &["تسوق", "شوبنق", "مول", "محلات"]),
    (
        "حلويات",
        &["حلويات", "حلى", "كيك", "دونات", "ايس كريم", "آيس كريم"],
    ),
    ("شاليه", &["شاليه", "استراحة", "مسبح"]),
    ("متاحف", &["متحف", "متاحف", "تاريخ", "ثقافة", "فن"]),
    ("رياضة", &["رياضة", "جيم", "يوغا", "تسلق", "كروسفت"]),
];

static OCCASION_PATTERNS: &[(Occasion, &[&str])] = &[
    (
        Occasion::Romantic,
        &[
            "رومانسي",
            "رومنسي",
            "زوجتي",
            "خطيبتي",
            "عشاء رومانسي",
            "مكان حلو مع",
        ],
    ),
    (
        Occasion::Family,
        &[
            "عائلة", "عائلتي", "عوائل", "اطفال", "أطفال", "اولادي", "أولادي",
        ],
    ),
    (Occasion::Business, &["اجتماع", "عمل", "بزنس", "ميتنق"]),
    (
        Occasion::Friends,
        &["ربعي", "اصدقاء", "أصدقاء", "الشباب", "سهرة", "طلعة"],
    ),
    (
        Occasion::Quiet,
        &[
            "هدوء", "هادي", "ساكت", "استرخاء", "ريلاكس", "مذاكرة", "دراسة",
        ],
    ),
];

static NEIGHBORHOOD_PATTERNS: &[(&str, &[&str])] = &[
    ("حي العليا", &["العليا", "عليا", "التحلية"]),
    ("حي الملقا", &["الملقا", "ملقا"]),
    ("حي النخيل", &["النخيل", "نخيل"]),
    ("حي الورود", &["الورود", "ورود"]),
    ("حي السليمانية", &["السليمانية", "سليمانية"]),
    ("الدرعية", &["درعية", "الدرعية", "البجيري"]),
    ("حي الياسمين", &["الياسمين", "ياسمين"]),
    ("حي الرحمانية", &["الرحمانية", "رحمانية"]),
    ("حي الصحافة", &["الصحافة", "صحافة"]),
    ("حي الربيع", &["الربيع", "ربيع"]),
];

static PRICE_PATTERNS: &[(PriceLevel, &[&str])] = &[
    (
        PriceLevel::Budget,
        &["رخيص", "اقتصادي", "رخيصة", "ببلاش", "مجاني"],
    ),
    (PriceLevel::Moderate, &["متوسط", "معقول", "مناسب"]),
    (
        PriceLevel::Upscale,
        &["فاخر", "غالي", "فخم", "راقي", "لاكشري"],
    ),
];

/// Only the first few words are checked, so a greeting buried mid-sentence
/// does not hijack a real query
static GREETINGS: &[&str] = &[
    "هلا", "السلام", "مرحبا", "هاي", "صباح", "مساء", "اهلا", "أهلا", "كيفك", "شخبارك",
];

const GREETING_WORD_WINDOW: usize = 3;

/// What the assistant front-end should do with a message
#[derive(Debug, Clone, PartialEq)]
pub enum Intent {
    /// Small talk; not a place query
    Greeting,
    /// A place query with whatever filters the text yielded
    Query(QueryIntent),
}

/// Request-scoped filters inferred from one input string
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct QueryIntent {
    pub category: Option<&'static str>,
    pub occasion: Option<Occasion>,
    pub neighborhood: Option<&'static str>,
    pub price: Option<PriceLevel>,
}

impl QueryIntent {
    pub fn is_empty(&self) -> bool {
        self.category.is_none()
            && self.occasion.is_none()
            && self.neighborhood.is_none()
            && self.price.is_none()
    }
}

// Keywords go through the same normalization as the input, so table entries
// written with taa marbuta or hamza variants still hit.
fn first_match<T: Copy>(text: &str, table: &[(T, &[&str])]) -> Option<T> {
    table
        .iter()
        .find(|(_, keywords)| {
            keywords
                .iter()
                .any(|kw| text.contains(normalize(kw).as_str()))
        })
        .map(|(label, _)| *label)
}

fn is_greeting(text: &str) -> bool {
    text.split_whitespace()
        .take(GREETING_WORD_WINDOW)
        .any(|word| GREETINGS.contains(&word))
}

/// Extract a [`QueryIntent`] from free text.
///
/// Greetings short-circuit; otherwise the four tables are scanned
/// independently, so one message can yield a category, an occasion, a
/// neighborhood and a price band at once. Total, no failure modes.
pub fn extract_intent(raw_text: &str) -> Intent {
    let text = normalize(raw_text);

    if is_greeting(&text) {
        return Intent::Greeting;
    }

    Intent::Query(QueryIntent {
        category: first_match(&text, CATEGORY_PATTERNS),
        occasion: first_match(&text, OCCASION_PATTERNS),
        neighborhood: first_match(&text, NEIGHBORHOOD_PATTERNS),
        price: first_match(&text, PRICE_PATTERNS),
    })
}
