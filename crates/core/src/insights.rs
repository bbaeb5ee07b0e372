//! Fabric rules table and the product insights derived from it.
//!
//! The product page's "AI" widgets are fixed lookups keyed by fabric family.
//! They live here as one explicit table so a real model can replace
//! [`FabricRules`] without touching callers.

use rust_decimal::Decimal;
use serde::Serialize;

use crate::Price;
use crate::models::Product;

/// Stretchability below this is treated as low stretch.
pub const LOW_STRETCH_THRESHOLD: u8 = 50;

/// Estimated lifetime wears used for cost-per-wear.
pub const ESTIMATED_WEARS: u32 = 50;

/// Cost of a single wash cycle in cents (water, detergent, electricity).
pub const WASH_COST_PER_CYCLE_CENTS: i64 = 75;

/// Fabric families the rules table knows about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FabricFamily {
    Viscose,
    Cotton,
    Linen,
    Polyester,
    Silk,
}

impl FabricFamily {
    /// Lowercase keyword matched against fabric labels.
    #[must_use]
    pub const fn keyword(&self) -> &'static str {
        match self {
            Self::Viscose => "viscose",
            Self::Cotton => "cotton",
            Self::Linen => "linen",
            Self::Polyester => "polyester",
            Self::Silk => "silk",
        }
    }
}

/// Scores for one fabric family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FabricProfile {
    /// Stretchability rating, 0-100.
    pub stretchability: u8,
    /// Environmental impact score, 0-100 (higher is better).
    pub sustainability: u8,
    /// Expected wash cycles over the garment's life.
    pub wash_cycles: u32,
}

/// Mapping from fabric family to scores, with a fallback for unknown fabrics.
#[derive(Debug, Clone, Copy)]
pub struct FabricRules {
    rules: &'static [(FabricFamily, FabricProfile)],
    fallback: FabricProfile,
}

const fn profile(stretchability: u8, sustainability: u8, wash_cycles: u32) -> FabricProfile {
    FabricProfile {
        stretchability,
        sustainability,
        wash_cycles,
    }
}

/// The rules shipped with the storefront.
pub const DEFAULT_FABRIC_RULES: FabricRules = FabricRules {
    rules: &[
        (FabricFamily::Viscose, profile(85, 75, 30)),
        (FabricFamily::Cotton, profile(45, 60, 40)),
        (FabricFamily::Linen, profile(25, 90, 35)),
        (FabricFamily::Polyester, profile(70, 40, 60)),
        (FabricFamily::Silk, profile(40, 65, 25)),
    ],
    fallback: profile(60, 70, 40),
};

impl Default for FabricRules {
    fn default() -> Self {
        DEFAULT_FABRIC_RULES
    }
}

impl FabricRules {
    /// Build a custom rules table.
    #[must_use]
    pub const fn new(
        rules: &'static [(FabricFamily, FabricProfile)],
        fallback: FabricProfile,
    ) -> Self {
        Self { rules, fallback }
    }

    /// Classify a fabric label. A missing label is treated as cotton.
    ///
    /// A label matches the first family whose keyword it contains,
    /// ignoring case, so "100% Viscose" is viscose.
    #[must_use]
    pub fn classify(&self, fabric: Option<&str>) -> Option<FabricFamily> {
        let Some(label) = fabric else {
            return Some(FabricFamily::Cotton);
        };
        let label = label.to_lowercase();
        self.rules
            .iter()
            .map(|(family, _)| *family)
            .find(|family| label.contains(family.keyword()))
    }

    /// Scores for a fabric label, falling back for unknown fabrics.
    #[must_use]
    pub fn profile(&self, fabric: Option<&str>) -> FabricProfile {
        self.classify(fabric)
            .and_then(|family| {
                self.rules
                    .iter()
                    .find(|(candidate, _)| *candidate == family)
                    .map(|(_, profile)| *profile)
            })
            .unwrap_or(self.fallback)
    }
}

/// Derived fit, sustainability and cost-of-wearing figures for a product.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductInsights {
    pub fabric_family: Option<FabricFamily>,
    pub stretchability: u8,
    pub low_stretch: bool,
    pub fit: String,
    pub fit_advice: &'static str,
    pub sustainability_score: u8,
    pub impact_label: &'static str,
    pub material_composition: String,
    pub estimated_wears: u32,
    pub cost_per_wear: Price,
    pub wash_cycles: u32,
    pub wash_cost: Price,
    pub total_cost_of_ownership: Price,
}

impl ProductInsights {
    /// Derive insights for a product from a rules table.
    #[must_use]
    pub fn derive(product: &Product, rules: &FabricRules) -> Self {
        let fabric = product.fabric.as_deref();
        let profile = rules.profile(fabric);
        let low_stretch = profile.stretchability < LOW_STRETCH_THRESHOLD;

        let price = product.price();
        let cost_per_wear = Price::new(price.amount() / Decimal::from(ESTIMATED_WEARS));
        let wash_cost = Price::new(
            Decimal::new(WASH_COST_PER_CYCLE_CENTS, 2) * Decimal::from(profile.wash_cycles),
        );

        let material_composition = product.material_composition.clone().unwrap_or_else(|| {
            format!("100% {}", product.fabric.as_deref().unwrap_or("cotton"))
        });

        Self {
            fabric_family: rules.classify(fabric),
            stretchability: profile.stretchability,
            low_stretch,
            fit: product
                .fit
                .clone()
                .unwrap_or_else(|| "Regular fit".to_string()),
            fit_advice: if low_stretch {
                "Consider sizing up"
            } else {
                "True to size"
            },
            sustainability_score: profile.sustainability,
            impact_label: impact_label(profile.sustainability),
            material_composition,
            estimated_wears: ESTIMATED_WEARS,
            cost_per_wear,
            wash_cycles: profile.wash_cycles,
            wash_cost,
            total_cost_of_ownership: price + wash_cost,
        }
    }
}

const fn impact_label(score: u8) -> &'static str {
    if score > 80 {
        "Eco-Friendly"
    } else if score > 60 {
        "Moderate Impact"
    } else {
        "High Impact"
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use super::*;
    use crate::ProductId;

    fn product(fabric: Option<&str>, price: i32) -> Product {
        Product {
            id: ProductId::new(1),
            name: "Test".to_string(),
            description: String::new(),
            price,
            original_price: None,
            discount_percentage: None,
            category: "Bottoms".to_string(),
            collection: None,
            fabric: fabric.map(String::from),
            color: None,
            print: None,
            fit: None,
            features: None,
            length: None,
            sizes: vec!["M".to_string()],
            images: Vec::new(),
            thumbnails: Vec::new(),
            in_stock: true,
            inventory: BTreeMap::new(),
            care_instructions: None,
            material_composition: None,
            sustainability: None,
            model_info: None,
            cost_per_wear: None,
        }
    }

    #[test]
    fn test_classify_matches_keyword_in_label() {
        let rules = FabricRules::default();
        assert_eq!(
            rules.classify(Some("100% Viscose")),
            Some(FabricFamily::Viscose)
        );
        assert_eq!(
            rules.classify(Some("Organic Cotton Blend")),
            Some(FabricFamily::Cotton)
        );
        assert_eq!(rules.classify(Some("LINEN")), Some(FabricFamily::Linen));
        assert_eq!(rules.classify(Some("Denim")), None);
    }

    #[test]
    fn test_missing_fabric_is_cotton() {
        let rules = FabricRules::default();
        assert_eq!(rules.classify(None), Some(FabricFamily::Cotton));
        assert_eq!(rules.profile(None).stretchability, 45);
    }

    #[test]
    fn test_unknown_fabric_uses_fallback() {
        let profile = FabricRules::default().profile(Some("Wool"));
        assert_eq!(profile, profile_fallback());
    }

    fn profile_fallback() -> FabricProfile {
        FabricProfile {
            stretchability: 60,
            sustainability: 70,
            wash_cycles: 40,
        }
    }

    #[test]
    fn test_viscose_insights() {
        let insights = ProductInsights::derive(
            &product(Some("100% Viscose"), 2590),
            &FabricRules::default(),
        );
        assert_eq!(insights.stretchability, 85);
        assert!(!insights.low_stretch);
        assert_eq!(insights.fit_advice, "True to size");
        assert_eq!(insights.impact_label, "Moderate Impact");
        assert_eq!(insights.cost_per_wear.display(), "$0.52");
        assert_eq!(insights.wash_cost.display(), "$22.50");
        assert_eq!(insights.total_cost_of_ownership.display(), "$48.40");
        assert_eq!(insights.material_composition, "100% 100% Viscose");
    }

    #[test]
    fn test_linen_is_low_stretch_and_eco_friendly() {
        let insights =
            ProductInsights::derive(&product(Some("Linen"), 2205), &FabricRules::default());
        assert!(insights.low_stretch);
        assert_eq!(insights.fit_advice, "Consider sizing up");
        assert_eq!(insights.impact_label, "Eco-Friendly");
        assert_eq!(insights.fit, "Regular fit");
    }

    #[test]
    fn test_polyester_is_high_impact() {
        let insights =
            ProductInsights::derive(&product(Some("Polyester"), 1000), &FabricRules::default());
        assert_eq!(insights.impact_label, "High Impact");
    }

    #[test]
    fn test_custom_rules_replace_defaults() {
        static RULES: [(FabricFamily, FabricProfile); 1] = [(
            FabricFamily::Silk,
            FabricProfile {
                stretchability: 10,
                sustainability: 99,
                wash_cycles: 5,
            },
        )];
        let rules = FabricRules::new(&RULES, profile_fallback());
        assert_eq!(rules.profile(Some("Silk")).stretchability, 10);
        assert_eq!(rules.profile(Some("Cotton")), profile_fallback());
    }
}
