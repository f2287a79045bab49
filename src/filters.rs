use crate::data::{Candidate, Category};
use serde::{Deserialize, Serialize};

/// Sentinel for candidates without a distance; sorts them after everyone
/// with a real one.
const FAR_AWAY_MILES: f64 = f64::MAX;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterPrefs {
    pub include_competitive: bool,
    pub include_casual: bool,
    pub sort_by_proximity: bool,
    pub max_distance_miles: Option<f64>,
    pub min_age: Option<u32>,
    pub max_age: Option<u32>,
}

impl Default for FilterPrefs {
    fn default() -> Self {
        Self {
            include_competitive: true,
            include_casual: true,
            sort_by_proximity: false,
            max_distance_miles: None,
            min_age: None,
            max_age: None,
        }
    }
}

impl FilterPrefs {
    fn includes_category(&self, category: Category) -> bool {
        match category {
            Category::Competitive => self.include_competitive,
            Category::Casual => self.include_casual,
        }
    }
}

fn matches_prefs(candidate: &Candidate, prefs: &FilterPrefs) -> bool {
    if !prefs.includes_category(candidate.category) {
        return false;
    }

    if let Some(max_distance) = prefs.max_distance_miles {
        match candidate.distance_miles {
            Some(distance) if distance <= max_distance => {}
            // Hidden distance cannot prove it is in range.
            _ => return false,
        }
    }

    if let Some(min_age) = prefs.min_age {
        if candidate.age < min_age {
            return false;
        }
    }

    if let Some(max_age) = prefs.max_age {
        if candidate.age > max_age {
            return false;
        }
    }

    true
}

/// Produce the filtered (and optionally proximity-sorted) view as indices
/// into `candidates`. Original relative order is preserved unless proximity
/// sort is on; the sort is stable, so ties keep their original order too.
pub fn apply_filters(candidates: &[Candidate], prefs: &FilterPrefs) -> Vec<usize> {
    let mut view: Vec<usize> = candidates
        .iter()
        .enumerate()
        .filter(|(_, candidate)| matches_prefs(candidate, prefs))
        .map(|(index, _)| index)
        .collect();

    if prefs.sort_by_proximity {
        view.sort_by(|&a, &b| {
            let da = candidates[a].distance_miles.unwrap_or(FAR_AWAY_MILES);
            let db = candidates[b].distance_miles.unwrap_or(FAR_AWAY_MILES);
            da.partial_cmp(&db).unwrap_or(std::cmp::Ordering::Equal)
        });
    }

    view
}

#[cfg(test)]
mod tests {
    use super::*;

    fn candidate(id: &str, category: Category, distance: Option<f64>, age: u32) -> Candidate {
        Candidate {
            id: id.to_string(),
            name: format!("Athlete {}", id),
            age,
            distance_miles: distance,
            category,
            photos: vec![format!("{}.jpg", id)],
        }
    }

    fn roster() -> Vec<Candidate> {
        vec![
            candidate("a", Category::Competitive, Some(5.0), 24),
            candidate("b", Category::Casual, Some(1.0), 31),
            candidate("c", Category::Competitive, None, 28),
            candidate("d", Category::Casual, Some(12.0), 22),
        ]
    }

    #[test]
    fn both_toggles_off_yields_empty() {
        let prefs = FilterPrefs {
            include_competitive: false,
            include_casual: false,
            ..FilterPrefs::default()
        };
        assert!(apply_filters(&roster(), &prefs).is_empty());
    }

    #[test]
    fn single_toggle_restores_that_category_in_order() {
        let prefs = FilterPrefs {
            include_casual: false,
            ..FilterPrefs::default()
        };
        assert_eq!(apply_filters(&roster(), &prefs), vec![0, 2]);

        let prefs = FilterPrefs {
            include_competitive: false,
            ..FilterPrefs::default()
        };
        assert_eq!(apply_filters(&roster(), &prefs), vec![1, 3]);
    }

    #[test]
    fn proximity_sort_is_nondecreasing_with_missing_last() {
        let prefs = FilterPrefs {
            sort_by_proximity: true,
            ..FilterPrefs::default()
        };
        let candidates = roster();
        let view = apply_filters(&candidates, &prefs);
        assert_eq!(view, vec![1, 0, 3, 2]);

        for pair in view.windows(2) {
            let da = candidates[pair[0]].distance_miles.unwrap_or(FAR_AWAY_MILES);
            let db = candidates[pair[1]].distance_miles.unwrap_or(FAR_AWAY_MILES);
            assert!(da <= db);
        }
    }

    #[test]
    fn no_sort_preserves_original_order() {
        let view = apply_filters(&roster(), &FilterPrefs::default());
        assert_eq!(view, vec![0, 1, 2, 3]);
    }

    #[test]
    fn max_distance_excludes_far_and_hidden() {
        let prefs = FilterPrefs {
            max_distance_miles: Some(6.0),
            ..FilterPrefs::default()
        };
        assert_eq!(apply_filters(&roster(), &prefs), vec![0, 1]);
    }

    #[test]
    fn age_bounds_apply_when_set() {
        let prefs = FilterPrefs {
            min_age: Some(24),
            max_age: Some(29),
            ..FilterPrefs::default()
        };
        assert_eq!(apply_filters(&roster(), &prefs), vec![0, 2]);
    }

    #[test]
    fn two_candidate_scenario_sorts_by_distance() {
        let candidates = vec![
            candidate("1", Category::Competitive, Some(5.0), 25),
            candidate("2", Category::Casual, Some(1.0), 25),
        ];
        let prefs = FilterPrefs {
            sort_by_proximity: true,
            ..FilterPrefs::default()
        };
        let view = apply_filters(&candidates, &prefs);
        assert_eq!(view, vec![1, 0]);
        assert_eq!(candidates[view[0]].id, "2");
        assert_eq!(candidates[view[1]].id, "1");
    }
}
