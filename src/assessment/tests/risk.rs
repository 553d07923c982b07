use crate::assessment::domain::RiskLevel;
use crate::assessment::risk::RiskThresholds;

#[test]
fn default_bands_match_production_constants() {
    let thresholds = RiskThresholds::default();
    assert_eq!(thresholds.moderate, 4);
    assert_eq!(thresholds.high, 8);
    assert!(thresholds.is_ordered());
}

#[test]
fn classifies_each_band() {
    let thresholds = RiskThresholds::default();
    assert_eq!(thresholds.classify(0), RiskLevel::Low);
    assert_eq!(thresholds.classify(3), RiskLevel::Low);
    assert_eq!(thresholds.classify(5), RiskLevel::Moderate);
    assert_eq!(thresholds.classify(7), RiskLevel::Moderate);
    assert_eq!(thresholds.classify(9), RiskLevel::High);
}

#[test]
fn band_boundaries_map_to_the_higher_tier() {
    let thresholds = RiskThresholds::default();
    assert_eq!(thresholds.classify(4), RiskLevel::Moderate);
    assert_eq!(thresholds.classify(8), RiskLevel::High);
}

#[test]
fn classification_is_monotonic_in_score() {
    let thresholds = RiskThresholds::default();
    let mut previous = RiskLevel::Low;
    for score in 0..=12 {
        let tier = thresholds.classify(score);
        assert!(tier >= previous, "tier dropped at score {score}");
        previous = tier;
    }
}

#[test]
fn inverted_bands_are_detectable() {
    let thresholds = RiskThresholds {
        moderate: 8,
        high: 4,
    };
    assert!(!thresholds.is_ordered());
}
