use serde::{Deserialize, Serialize};

use super::round_currency;

/// The property attributes the rent heuristic reads.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PropertyFeatures {
    pub location_state: String,
    pub property_type: String,
    pub bedrooms: u32,
    pub bathrooms: u32,
    pub size_sqm: f64,
    pub amenities: Vec<String>,
}

/// Heuristic fair-rent estimate with a ±10% band.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RentPrediction {
    pub predicted_rent: u64,
    pub confidence: f64,
    pub range: RentRange,
    pub factors: RentFactors,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RentRange {
    pub lower: u64,
    pub upper: u64,
}

/// Each multiplier reported as an integer percentage, for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RentFactors {
    pub location_impact: u32,
    pub property_type_impact: u32,
    pub amenities_impact: u32,
}

/// The estimate is a closed-form heuristic, not a model; the confidence is
/// a fixed policy figure.
const CONFIDENCE: f64 = 0.85;

/// Rent multipliers by property category. Keys are lowercase; lookups
/// lowercase their input.
const PROPERTY_TYPE_FACTORS: &[(&str, f64)] = &[
    ("apartment", 1.0),
    ("house", 1.3),
    ("duplex", 1.5),
    ("bungalow", 1.2),
    ("flat", 0.9),
    ("studio", 0.7),
];

/// Rent multipliers by state, Ibadan pricing as the 1.0 baseline.
const STATE_FACTORS: &[(&str, f64)] = &[
    ("Lagos", 1.5),
    ("Abuja", 1.4),
    ("Port Harcourt", 1.2),
    ("Ibadan", 1.0),
    ("Kano", 0.9),
    ("Enugu", 1.0),
    ("Kaduna", 0.9),
    ("Calabar", 1.0),
];

fn property_type_factor(property_type: &str) -> f64 {
    let key = property_type.to_ascii_lowercase();
    PROPERTY_TYPE_FACTORS
        .iter()
        .find(|(name, _)| *name == key)
        .map(|(_, factor)| *factor)
        .unwrap_or(1.0)
}

fn state_factor(state: &str) -> f64 {
    STATE_FACTORS
        .iter()
        .find(|(name, _)| *name == state)
        .map(|(_, factor)| *factor)
        .unwrap_or(1.0)
}

/// Estimate a fair annual rent for the property.
///
/// Base rent is a weighted sum of bedrooms, bathrooms, and floor area,
/// scaled by property-type, state, and amenity multipliers. Unlisted types
/// and states fall back to a neutral 1.0 rather than failing.
pub fn predict_rent(features: &PropertyFeatures) -> RentPrediction {
    let base = f64::from(features.bedrooms) * 50_000.0
        + f64::from(features.bathrooms) * 20_000.0
        + features.size_sqm * 100.0;

    let type_factor = property_type_factor(&features.property_type);
    let location_factor = state_factor(&features.location_state);
    let amenity_factor = 1.0 + features.amenities.len() as f64 * 0.05;

    let predicted = (base * type_factor * location_factor * amenity_factor).round();

    RentPrediction {
        predicted_rent: predicted as u64,
        confidence: CONFIDENCE,
        range: RentRange {
            lower: round_currency(predicted * 0.9),
            upper: round_currency(predicted * 1.1),
        },
        factors: RentFactors {
            location_impact: (location_factor * 100.0).round() as u32,
            property_type_impact: (type_factor * 100.0).round() as u32,
            amenities_impact: (amenity_factor * 100.0).round() as u32,
        },
    }
}
