use crate::catalog::models::LatLng;
use crate::coverage::lookup::ImageryLookup;
use std::sync::Arc;

pub mod lookup;

/// Non-decreasing search radii; the largest one decides when a place counts
/// as having no coverage at all.
pub const SEARCH_RADII_METERS: [u32; 4] = [50, 150, 300, 600];

#[derive(Clone)]
pub struct CoverageResolver {
    lookup: Arc<dyn ImageryLookup>,
    radii: Vec<u32>,
}

impl CoverageResolver {
    pub fn new(lookup: Arc<dyn ImageryLookup>) -> Self {
        Self {
            lookup,
            radii: SEARCH_RADII_METERS.to_vec(),
        }
    }

    /// Finds the nearest position with panoramic imagery, widening the
    /// search radius until the first hit. Lookup errors count as a miss at
    /// that radius.
    pub async fn resolve(&self, target: LatLng) -> Option<LatLng> {
        for radius in &self.radii {
            match self.lookup.find_panorama(target, *radius).await {
                Ok(Some(position)) => return Some(position),
                Ok(None) => {}
                Err(err) => {
                    tracing::warn!(
                        lat = target.lat,
                        lng = target.lng,
                        radius_meters = radius,
                        "Imagery lookup failed: {err}.",
                    );
                }
            }
        }
        None
    }
}
