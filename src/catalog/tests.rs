use crate::catalog::{self, CatalogLoadError};
use serde_json::json;

#[test]
fn loads_a_well_formed_catalog() {
    let catalog = catalog::from_value(json!([
        {
            "id": "eiffel-tower",
            "name": "Eiffel Tower",
            "city": "Paris",
            "country": "France",
            "lat": 48.85826,
            "lng": 2.29451,
            "difficulty": "easy",
            "pov": {"heading": 120.0, "pitch": 10.0},
        },
        {"name": "Tokyo Tower", "city": "Tokyo", "country": "Japan", "lat": 35.65858, "lng": 139.74543},
    ]))
    .expect("Failed to load a well-formed catalog.");

    assert_eq!(catalog.len(), 2);
    let place = catalog.by_id("eiffel-tower").unwrap();
    assert_eq!(place.name, "Eiffel Tower");
    assert_eq!(place.point_of_view.unwrap().heading, 120.0);
}

#[test]
fn drops_records_without_finite_coordinates() {
    let catalog = catalog::from_value(json!([
        {"name": "Eiffel Tower", "city": "Paris", "country": "France", "lat": 48.85826, "lng": 2.29451},
        {"name": "No Longitude", "lat": 10.0},
        {"name": "Bad Latitude", "lat": "forty-eight", "lng": 2.0},
    ]))
    .unwrap();

    assert_eq!(catalog.len(), 1);
    assert_eq!(catalog.places()[0].name, "Eiffel Tower");
}

#[test]
fn normalizes_missing_fields_to_empty_strings() {
    let catalog = catalog::from_value(json!([{"lat": 1.5, "lng": 2.5}])).unwrap();

    let place = &catalog.places()[0];
    assert_eq!(place.name, "");
    assert_eq!(place.city, "");
    assert_eq!(place.country, "");
    assert!(place.difficulty.is_none());
}

#[test]
fn synthesizes_ids_from_name_and_coordinates() {
    let catalog = catalog::from_value(json!([
        {"name": "Eiffel Tower", "lat": 48.85826, "lng": 2.29451},
    ]))
    .unwrap();

    assert_eq!(catalog.places()[0].id, "Eiffel Tower@48.85826,2.29451");
}

#[test]
fn keeps_explicit_ids() {
    let catalog = catalog::from_value(json!([
        {"id": "landmark-1", "name": "Eiffel Tower", "lat": 48.85826, "lng": 2.29451},
    ]))
    .unwrap();

    assert_eq!(catalog.places()[0].id, "landmark-1");
}

#[test]
fn rejects_an_empty_document() {
    let result = catalog::from_value(json!([]));

    assert!(matches!(result, Err(CatalogLoadError::EmptyCatalog)));
}

#[test]
fn rejects_a_non_sequence_document() {
    let result = catalog::from_value(json!({"places": []}));

    assert!(matches!(result, Err(CatalogLoadError::EmptyCatalog)));
}

#[test]
fn rejects_a_catalog_with_no_usable_records() {
    let result = catalog::from_value(json!([
        {"name": "No Coordinates At All"},
        {"name": "Half A Coordinate", "lat": 1.0},
    ]));

    assert!(matches!(result, Err(CatalogLoadError::EmptyCatalog)));
}
