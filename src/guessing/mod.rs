use crate::catalog::models::Place;
use serde::{Deserialize, Serialize};
use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;


#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum MatchMode {
    Country,
    Place,
    #[default]
    Combined,
}

/// Matching is containment, not equality: "paris, france" counts for the
/// city "Paris", and so does any longer phrase that happens to contain the
/// answer.
pub fn is_correct(raw_guess: &str, place: &Place, mode: MatchMode) -> bool {
    let guess = normalize(raw_guess);
    if guess.is_empty() {
        return false;
    }
    let fields = match mode {
        MatchMode::Country => vec![place.country.as_str()],
        MatchMode::Place => {
            if place.name.is_empty() {
                vec![place.city.as_str()]
            } else {
                vec![place.name.as_str()]
            }
        }
        MatchMode::Combined => vec![
            place.name.as_str(),
            place.city.as_str(),
            place.country.as_str(),
        ],
    };
    fields
        .into_iter()
        .map(normalize)
        .filter(|field| !field.is_empty())
        .any(|field| guess.contains(field.as_str()))
}

/// Trims, lowercases and strips diacritics so that "München" and "munchen"
/// compare equal.
pub fn normalize(text: &str) -> String {
    text.trim()
        .to_lowercase()
        .nfd()
        .filter(|character| !is_combining_mark(*character))
        .collect()
}
