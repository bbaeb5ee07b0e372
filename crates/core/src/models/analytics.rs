//! Admin dashboard analytics.
//!
//! The dashboard is fed a fixed, hand-authored snapshot. It is not an
//! aggregate over purchase history. Tables keep the order they are written
//! in, which is the order the dashboard charts them.

use indexmap::IndexMap;
use serde::Serialize;

/// Data behind the admin analytics dashboard.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyticsSnapshot {
    /// Returns per fabric.
    pub fabric_returns: IndexMap<String, u32>,
    /// Exchanges per fabric.
    pub fabric_exchanges: IndexMap<String, u32>,
    /// Return reason histogram.
    pub return_reasons: IndexMap<String, u32>,
    /// Monthly size recommendation acceptance rate (percent), keyed `YYYY-MM`.
    pub size_recommendation_acceptance: IndexMap<String, u32>,
    /// Golden vs actual size distribution ratios.
    pub sizing_data: SizingData,
}

/// Golden vs actual size distribution.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SizingData {
    pub golden: IndexMap<String, f64>,
    pub actual: IndexMap<String, f64>,
}

fn table<V: Copy>(rows: &[(&str, V)]) -> IndexMap<String, V> {
    rows.iter()
        .map(|(key, value)| ((*key).to_string(), *value))
        .collect()
}

impl AnalyticsSnapshot {
    /// The dashboard's sample data.
    #[must_use]
    pub fn sample() -> Self {
        Self {
            fabric_returns: table(&[
                ("Cotton", 12),
                ("Viscose", 8),
                ("Linen", 5),
                ("Polyester", 15),
                ("Silk", 3),
            ]),
            fabric_exchanges: table(&[
                ("Cotton", 7),
                ("Viscose", 4),
                ("Linen", 2),
                ("Polyester", 9),
                ("Silk", 1),
            ]),
            return_reasons: table(&[
                ("Size too small", 35),
                ("Size too large", 28),
                ("Quality issues", 12),
                ("Color mismatch", 8),
                ("Fabric feel", 10),
                ("Style preference", 7),
            ]),
            size_recommendation_acceptance: table(&[
                ("2024-01", 78),
                ("2024-02", 82),
                ("2024-03", 85),
                ("2024-04", 88),
                ("2024-05", 91),
                ("2024-06", 89),
                ("2024-07", 93),
            ]),
            sizing_data: SizingData {
                golden: table(&[("S", 1.0), ("M", 2.0), ("L", 2.0), ("XL", 1.0)]),
                actual: table(&[("S", 0.8), ("M", 2.1), ("L", 1.9), ("XL", 1.2)]),
            },
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_serializes_dashboard_keys() {
        let json = serde_json::to_value(AnalyticsSnapshot::sample()).unwrap();
        assert_eq!(json["fabricReturns"]["Polyester"], 15);
        assert_eq!(json["fabricExchanges"]["Silk"], 1);
        assert_eq!(json["returnReasons"]["Size too small"], 35);
        assert_eq!(json["sizeRecommendationAcceptance"]["2024-07"], 93);
        assert_eq!(json["sizingData"]["actual"]["M"], 2.1);
    }

    fn key_order(json: &str, keys: &[&str]) -> bool {
        let positions: Vec<usize> = keys
            .iter()
            .map(|key| json.find(&format!("\"{key}\":")).unwrap())
            .collect();
        positions.windows(2).all(|pair| pair[0] < pair[1])
    }

    #[test]
    fn test_sample_keeps_chart_order() {
        let sample = AnalyticsSnapshot::sample();

        let golden = serde_json::to_string(&sample.sizing_data.golden).unwrap();
        assert!(key_order(&golden, &["S", "M", "L", "XL"]), "{golden}");

        let returns = serde_json::to_string(&sample.fabric_returns).unwrap();
        assert!(
            key_order(&returns, &["Cotton", "Viscose", "Linen", "Polyester", "Silk"]),
            "{returns}"
        );

        let reasons = serde_json::to_string(&sample.return_reasons).unwrap();
        assert!(reasons.starts_with(r#"{"Size too small":35"#), "{reasons}");
    }

    #[test]
    fn test_sample_is_stable() {
        assert_eq!(AnalyticsSnapshot::sample(), AnalyticsSnapshot::sample());
    }
}
