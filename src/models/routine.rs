use serde::{Deserialize, Serialize};
use std::fmt::Display;

use super::Product;

/// Routine stage; declaration order is the routine order
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum StepName {
    Cleanse,
    Tone,
    Treat,
    Moisturize,
    Protect,
}

impl StepName {
    /// Catalog category for products used in this step
    pub fn category(&self) -> &'static str {
        match self {
            StepName::Cleanse => "cleanse",
            StepName::Tone => "tone",
            StepName::Treat => "treat",
            StepName::Moisturize => "moisturize",
            StepName::Protect => "protect",
        }
    }

    pub fn from_category(category: &str) -> Option<Self> {
        match category.trim().to_lowercase().as_str() {
            "cleanse" => Some(StepName::Cleanse),
            "tone" => Some(StepName::Tone),
            "treat" => Some(StepName::Treat),
            "moisturize" => Some(StepName::Moisturize),
            "protect" => Some(StepName::Protect),
            _ => None,
        }
    }
}

impl Display for StepName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.category())
    }
}

/// One stage of the routine with product guidance
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RoutineStep {
    pub step: StepName,
    pub product: String,
    pub reason: String,
}

impl RoutineStep {
    pub fn new(step: StepName, product: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            step,
            product: product.into(),
            reason: reason.into(),
        }
    }
}

/// Routine step enriched with matching catalog products
#[derive(Debug, Clone, Serialize)]
pub struct RecommendedStep {
    #[serde(flatten)]
    pub step: RoutineStep,
    pub products: Vec<Product>,
}

/// Coarse skin type used by the routine rules
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SkinType {
    Oily,
    Dry,
    Normal,
    Combination,
}

impl SkinType {
    /// Unrecognized tags fall back to `Normal`
    pub fn from_tag(tag: &str) -> Self {
        match tag.trim().to_lowercase().as_str() {
            "oily" => SkinType::Oily,
            "dry" => SkinType::Dry,
            "combination" => SkinType::Combination,
            _ => SkinType::Normal,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SkinType::Oily => "oily",
            SkinType::Dry => "dry",
            SkinType::Normal => "normal",
            SkinType::Combination => "combination",
        }
    }

    pub fn is_oily(&self) -> bool {
        matches!(self, SkinType::Oily)
    }
}

/// Skin attributes the routine builder works from
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkinProfile {
    pub skin_type: SkinType,
    pub sensitive: bool,
    pub concerns: Vec<String>,
}

impl SkinProfile {
    /// Builds a profile from form-style tags. The sensitivity marker counts as
    /// sensitive when it contains "sensitive".
    pub fn from_tags(skin_type: &str, sensitivity: &str, concerns: Vec<String>) -> Self {
        Self {
            skin_type: SkinType::from_tag(skin_type),
            sensitive: sensitivity.contains("sensitive"),
            concerns: concerns
                .into_iter()
                .map(|c| c.trim().to_lowercase())
                .filter(|c| !c.is_empty())
                .collect(),
        }
    }

    pub fn has_concern(&self, tag: &str) -> bool {
        self.concerns.iter().any(|c| c == tag)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_step_order() {
        assert!(StepName::Cleanse < StepName::Tone);
        assert!(StepName::Tone < StepName::Treat);
        assert!(StepName::Treat < StepName::Moisturize);
        assert!(StepName::Moisturize < StepName::Protect);
    }

    #[test]
    fn test_step_category_round_trip() {
        assert_eq!(StepName::from_category("Moisturize"), Some(StepName::Moisturize));
        assert_eq!(StepName::from_category("exfoliate"), None);
    }

    #[test]
    fn test_skin_type_from_tag() {
        assert_eq!(SkinType::from_tag("OILY"), SkinType::Oily);
        assert_eq!(SkinType::from_tag("dry"), SkinType::Dry);
        assert_eq!(SkinType::from_tag("something"), SkinType::Normal);
        assert!(!SkinType::from_tag("combination").is_oily());
    }

    #[test]
    fn test_profile_sensitivity_marker_is_substring() {
        let profile = SkinProfile::from_tags("dry", "very sensitive skin", vec![]);
        assert!(profile.sensitive);

        let profile = SkinProfile::from_tags("dry", "none", vec![]);
        assert!(!profile.sensitive);
    }

    #[test]
    fn test_profile_normalizes_concerns() {
        let profile = SkinProfile::from_tags(
            "oily",
            "none",
            vec![" Acne ".to_string(), "".to_string(), "aging".to_string()],
        );
        assert_eq!(profile.concerns, vec!["acne".to_string(), "aging".to_string()]);
        assert!(profile.has_concern("acne"));
        assert!(!profile.has_concern("dryness"));
    }

    #[test]
    fn test_routine_step_serializes_step_name() {
        let step = RoutineStep::new(StepName::Protect, "Broad-spectrum SPF 30", "UV");
        let json = serde_json::to_value(&step).unwrap();
        assert_eq!(json["step"], "Protect");
        assert_eq!(json["product"], "Broad-spectrum SPF 30");
    }
}
