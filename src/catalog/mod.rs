use crate::catalog::models::{Difficulty, LatLng, Place, PointOfView};
use serde::Deserialize;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use thiserror::Error;

pub mod models;
#[cfg(test)]
pub mod tests;

#[derive(Debug, Error)]
pub enum CatalogLoadError {
    #[error("failed to read the places file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse the places file: {0}")]
    Malformed(#[from] serde_json::Error),
    #[error("the places file contains no usable places")]
    EmptyCatalog,
}

#[derive(Clone, Debug, Default)]
pub struct Catalog {
    places: Vec<Place>,
}

impl Catalog {
    pub fn new(places: Vec<Place>) -> Self {
        Catalog { places }
    }

    pub fn places(&self) -> &[Place] {
        &self.places
    }

    pub fn by_id(&self, place_id: &str) -> Option<&Place> {
        self.places.iter().find(|place| place.id == place_id)
    }

    pub fn len(&self) -> usize {
        self.places.len()
    }

    pub fn is_empty(&self) -> bool {
        self.places.is_empty()
    }
}

pub fn load(path: &Path) -> Result<Catalog, CatalogLoadError> {
    let places_file = File::open(path)?;
    let document = serde_json::from_reader(BufReader::new(places_file))?;
    from_value(document)
}

pub fn from_value(document: serde_json::Value) -> Result<Catalog, CatalogLoadError> {
    let records = match document {
        serde_json::Value::Array(records) => records,
        _ => return Err(CatalogLoadError::EmptyCatalog),
    };
    let mut places = Vec::with_capacity(records.len());
    for record in records {
        let raw: RawPlace = match serde_json::from_value(record) {
            Ok(raw) => raw,
            Err(err) => {
                tracing::warn!("Dropping an undecodable place record: {err}.");
                continue;
            }
        };
        let position = match (raw.lat, raw.lng) {
            (Some(lat), Some(lng)) => LatLng { lat, lng },
            _ => {
                tracing::warn!(
                    name = raw.name.as_deref().unwrap_or(""),
                    "Dropping a place record without coordinates.",
                );
                continue;
            }
        };
        if !position.is_finite() {
            tracing::warn!(
                name = raw.name.as_deref().unwrap_or(""),
                "Dropping a place record with non-finite coordinates.",
            );
            continue;
        }
        let name = raw.name.unwrap_or_default();
        let id = raw.id.unwrap_or_else(|| synthesize_id(&name, position));
        places.push(Place {
            id,
            name,
            city: raw.city.unwrap_or_default(),
            country: raw.country.unwrap_or_default(),
            position,
            difficulty: raw.difficulty,
            weight: raw.weight,
            point_of_view: raw.pov,
        });
    }
    if places.is_empty() {
        return Err(CatalogLoadError::EmptyCatalog);
    }
    Ok(Catalog::new(places))
}

#[derive(Debug, Deserialize)]
struct RawPlace {
    id: Option<String>,
    name: Option<String>,
    city: Option<String>,
    country: Option<String>,
    lat: Option<f64>,
    lng: Option<f64>,
    difficulty: Option<Difficulty>,
    weight: Option<f64>,
    pov: Option<PointOfView>,
}

/// Distinct places sharing both a name and coordinates collide here; catalogs
/// where that can happen must supply explicit ids.
fn synthesize_id(name: &str, position: LatLng) -> String {
    format!("{}@{:.5},{:.5}", name, position.lat, position.lng)
}
