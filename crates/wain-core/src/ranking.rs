//! Composite relevance ranking
//!
//! Pure functions over place records; no store access. The weights are a
//! fixed policy summing to 1.0 (keep them in sync if they ever change).

use crate::db::Place;
use std::cmp::Ordering;

const RATING_WEIGHT: f64 = 0.4;
const TRENDING_WEIGHT: f64 = 0.2;
const NEW_WEIGHT: f64 = 0.1;
const DISTANCE_WEIGHT: f64 = 0.3;

/// Distance at which the proximity term decays to zero
const DISTANCE_DECAY_KM: f64 = 20.0;

const EARTH_RADIUS_KM: f64 = 6371.0;

/// A WGS84 coordinate pair
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoPoint {
    pub lat: f64,
    pub lng: f64,
}

impl Place {
    /// Coordinates for ranking; requires both latitude and longitude
    pub fn location(&self) -> Option<GeoPoint> {
        match (self.lat, self.lng) {
            (Some(lat), Some(lng)) => Some(GeoPoint { lat, lng }),
            _ => None,
        }
    }
}

/// Great-circle distance in kilometers (haversine)
fn haversine_km(a: GeoPoint, b: GeoPoint) -> f64 {
    let dlat = (b.lat - a.lat).to_radians();
    let dlng = (b.lng - a.lng).to_radians();
    let h = (dlat / 2.0).sin().powi(2)
        + a.lat.to_radians().cos() * b.lat.to_radians().cos() * (dlng / 2.0).sin().powi(2);
    let c = 2.0 * h.sqrt().atan2((1.0 - h).sqrt());
    EARTH_RADIUS_KM * c
}

/// Composite score in [0, 1]: rating (0.4) + trending (0.2) + new (0.1)
/// + proximity (0.3).
///
/// When either side lacks coordinates the proximity term contributes its
/// full 0.3 — unknown distance never buries a place. With coordinates on
/// both sides the term decays linearly to zero at 20 km.
pub fn score_place(place: &Place, user_location: Option<GeoPoint>) -> f64 {
    let rating_score = (place.rating.unwrap_or(0.0) / 5.0) * RATING_WEIGHT;
    let trending_score = if place.trending { TRENDING_WEIGHT } else { 0.0 };
    let new_score = if place.is_new { NEW_WEIGHT } else { 0.0 };

    let distance_score = match (user_location, place.location()) {
        (Some(user), Some(loc)) => {
            let km = haversine_km(user, loc);
            (1.0 - km / DISTANCE_DECAY_KM).max(0.0) * DISTANCE_WEIGHT
        }
        _ => DISTANCE_WEIGHT,
    };

    rating_score + trending_score + new_score + distance_score
}

/// Stable sort by composite score, highest first
pub fn rank_places(places: Vec<Place>, user_location: Option<GeoPoint>) -> Vec<Place> {
    let mut scored: Vec<(f64, Place)> = places
        .into_iter()
        .map(|place| (score_place(&place, user_location), place))
        .collect();
    scored.sort_by(|a, b| b.0.partial_cmp(&a.0).unwrap_or(Ordering::Equal));
    scored.into_iter().map(|(_, place)| place).collect()
}
