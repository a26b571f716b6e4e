//! Relevance scoring for place candidates.
//!
//! A candidate's score is the sum of a text-match score, a proximity score
//! and per-type weights, plus a flat bonus when the provider reported a
//! distance for it.

use std::cmp::Ordering;

use crate::{
    entities::{Coordinates, PlaceCandidate},
    geo::haversine_km,
};

const DISTANCE_HINT_BONUS: f64 = 10.0;

const TYPE_WEIGHTS: [(&str, f64); 6] = [
    ("point_of_interest", 20.0),
    ("establishment", 18.0),
    ("route", 15.0),
    ("street_address", 15.0),
    ("sublocality", 12.0),
    ("neighborhood", 10.0),
];

pub fn text_match_score(query: &str, primary: &str, secondary: &str) -> f64 {
    let query = query.trim().to_lowercase();
    let primary = primary.to_lowercase();

    if primary == query {
        40.0
    } else if primary.starts_with(&query) {
        35.0
    } else if primary.contains(&query) {
        30.0
    } else if secondary.to_lowercase().contains(&query) {
        25.0
    } else {
        0.0
    }
}

/// Step function over distance from the user. Unknown distance scores nothing.
pub fn proximity_score(distance_km: Option<f64>) -> f64 {
    match distance_km {
        None => 0.0,
        Some(d) if d < 1.0 => 30.0,
        Some(d) if d < 2.0 => 25.0,
        Some(d) if d < 5.0 => 20.0,
        Some(d) if d < 10.0 => 15.0,
        Some(d) if d < 20.0 => 10.0,
        Some(_) => 5.0,
    }
}

/// Sum of weights for every recognised type tag.
pub fn type_score(types: &[String]) -> f64 {
    types
        .iter()
        .filter_map(|t| {
            TYPE_WEIGHTS
                .iter()
                .find(|(name, _)| *name == t.as_str())
                .map(|(_, weight)| weight)
        })
        .sum()
}

/// Fill in `distance_km` and `score` for one candidate.
pub fn score_candidate(query: &str, user: Option<Coordinates>, candidate: &mut PlaceCandidate) {
    candidate.distance_km = match (user, candidate.coordinates) {
        (Some(user), Some(place)) => Some(haversine_km(user, place)),
        _ => None,
    };

    let mut score = text_match_score(query, &candidate.primary_text, &candidate.secondary_text)
        + proximity_score(candidate.distance_km)
        + type_score(&candidate.types);

    if candidate.has_distance_hint {
        score += DISTANCE_HINT_BONUS;
    }

    candidate.score = score;
}

/// Score, order and truncate candidates.
///
/// Ordered by score (highest first), then distance (nearest first), then
/// primary text length (shortest first).
pub fn rank_candidates(
    query: &str,
    user: Option<Coordinates>,
    mut candidates: Vec<PlaceCandidate>,
    limit: usize,
) -> Vec<PlaceCandidate> {
    for candidate in candidates.iter_mut() {
        score_candidate(query, user, candidate);
    }

    candidates.sort_by(|a, b| {
        let score_cmp = b.score.total_cmp(&a.score);
        if score_cmp != Ordering::Equal {
            return score_cmp;
        }

        let distance_cmp = match (a.distance_km, b.distance_km) {
            (Some(a), Some(b)) => a.total_cmp(&b),
            _ => Ordering::Equal,
        };
        if distance_cmp != Ordering::Equal {
            return distance_cmp;
        }

        a.primary_text
            .chars()
            .count()
            .cmp(&b.primary_text.chars().count())
    });

    candidates.truncate(limit);
    candidates
}
