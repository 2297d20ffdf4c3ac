use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Skincare concern surfaced by the priority ranker
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Concern {
    ExcessOil,
    Dryness,
    Sensitivity,
    Pigmentation,
    Aging,
    Dehydration,
}

impl Concern {
    /// Tag used in routine rules and catalog matching
    pub fn tag(&self) -> &'static str {
        match self {
            Concern::ExcessOil => "excess_oil",
            Concern::Dryness => "dryness",
            Concern::Sensitivity => "sensitivity",
            Concern::Pigmentation => "pigmentation",
            Concern::Aging => "aging",
            Concern::Dehydration => "dehydration",
        }
    }

    /// (English, Turkish) recommendation text
    pub fn recommendation(&self) -> (&'static str, &'static str) {
        match self {
            Concern::ExcessOil => (
                "Focus on oil control and pore cleansing",
                "Yağ kontrolü ve gözenek temizliği öncelikli",
            ),
            Concern::Dryness => (
                "Intense hydration and barrier repair",
                "Yoğun nemlendirme ve bariyer onarımı",
            ),
            Concern::Sensitivity => (
                "Use soothing, fragrance-free products",
                "Yatıştırıcı ve parfümsüz ürünler kullanın",
            ),
            Concern::Pigmentation => (
                "Sun protection and anti-spot actives",
                "Güneş koruması ve leke karşıtı aktifler",
            ),
            Concern::Aging => (
                "Anti-aging actives and antioxidants",
                "Anti-aging aktifler ve antioksidanlar",
            ),
            Concern::Dehydration => (
                "Air is very dry - extra hydration needed",
                "Hava çok kuru - ekstra nemlendirme gerekli",
            ),
        }
    }
}

impl Display for Concern {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.tag())
    }
}

/// Priority level, ordered `Low < Medium < High`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PriorityLevel {
    Low,
    Medium,
    High,
}

/// A ranked concern with bilingual rationale
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConcernPriority {
    pub concern: Concern,
    pub priority: PriorityLevel,
    pub recommendation_en: &'static str,
    pub recommendation_tr: &'static str,
}

impl ConcernPriority {
    pub fn new(concern: Concern, priority: PriorityLevel) -> Self {
        let (recommendation_en, recommendation_tr) = concern.recommendation();
        Self {
            concern,
            priority,
            recommendation_en,
            recommendation_tr,
        }
    }
}
