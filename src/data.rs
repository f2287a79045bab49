use gloo_net::http::Request;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Training mode a candidate signed up for. Drives the category filter chips.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Competitive,
    Casual,
}

impl Category {
    pub fn label(self) -> &'static str {
        match self {
            Category::Competitive => "Competitive",
            Category::Casual => "Casual",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Candidate {
    pub id: String,
    pub name: String,
    pub age: u32,
    /// Miles from the viewer. Missing when the candidate hides location;
    /// sorts to the end under proximity sort.
    pub distance_miles: Option<f64>,
    pub category: Category,
    /// Never empty after validation.
    pub photos: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct RawCandidate {
    id: String,
    name: String,
    age: u32,
    #[serde(default)]
    distance_miles: Option<f64>,
    category: Category,
    #[serde(default)]
    photos: Vec<String>,
}

#[derive(Debug)]
pub enum DataError {
    NotFound(String),
    Network(String),
    Parse(String),
}

impl DataError {
    fn network<E: std::fmt::Display>(err: E) -> Self {
        Self::Network(err.to_string())
    }

    fn parse<E: std::fmt::Display>(err: E) -> Self {
        Self::Parse(err.to_string())
    }
}

impl std::fmt::Display for DataError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DataError::NotFound(what) => write!(f, "'{}' was not found", what),
            DataError::Network(msg) => write!(f, "network failure: {}", msg),
            DataError::Parse(msg) => write!(f, "invalid data: {}", msg),
        }
    }
}

const ATHLETES_URL: &str = "assets/athletes.json";

pub async fn fetch_candidates() -> Result<Vec<Candidate>, DataError> {
    let response = Request::get(ATHLETES_URL)
        .send()
        .await
        .map_err(DataError::network)?;

    if response.status() == 404 {
        return Err(DataError::NotFound(ATHLETES_URL.to_owned()));
    }

    if !response.ok() {
        return Err(DataError::Network(format!(
            "HTTP {} while fetching {}",
            response.status(),
            ATHLETES_URL
        )));
    }

    let text = response.text().await.map_err(DataError::network)?;
    let raw: Vec<RawCandidate> = serde_json::from_str(&text).map_err(DataError::parse)?;

    validate(raw)
}

fn validate(raw: Vec<RawCandidate>) -> Result<Vec<Candidate>, DataError> {
    if raw.is_empty() {
        return Err(DataError::Parse(
            "candidate file does not contain any athletes".to_owned(),
        ));
    }

    let mut seen = HashSet::new();
    let mut candidates = Vec::with_capacity(raw.len());

    for (index, entry) in raw.into_iter().enumerate() {
        let name = entry.name.trim().to_string();
        if name.is_empty() {
            return Err(DataError::Parse(format!(
                "athlete {} has an empty name",
                index
            )));
        }

        if entry.photos.is_empty() {
            return Err(DataError::Parse(format!(
                "athlete '{}' has no photos",
                entry.id
            )));
        }

        if !seen.insert(entry.id.clone()) {
            return Err(DataError::Parse(format!(
                "duplicate athlete id '{}'",
                entry.id
            )));
        }

        candidates.push(Candidate {
            id: entry.id,
            name,
            age: entry.age,
            distance_miles: entry.distance_miles,
            category: entry.category,
            photos: entry.photos,
        });
    }

    Ok(candidates)
}
