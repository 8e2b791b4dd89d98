use crate::catalog::models::LatLng;
use async_trait::async_trait;
use serde::Deserialize;
use thiserror::Error;
use url::Url;

#[derive(Debug, Error)]
pub enum LookupError {
    #[error("imagery metadata request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("imagery metadata response with status {0:?} carried no location")]
    MissingLocation(String),
}

#[async_trait]
pub trait ImageryLookup: Send + Sync {
    /// Looks for a panorama within `radius_meters` of `near`. `Ok(None)`
    /// means there is no imagery at this radius.
    async fn find_panorama(
        &self,
        near: LatLng,
        radius_meters: u32,
    ) -> Result<Option<LatLng>, LookupError>;
}

pub struct HttpImageryLookup {
    client: reqwest::Client,
    endpoint: Url,
    api_key: Option<String>,
}

impl HttpImageryLookup {
    pub fn new(endpoint: Url, api_key: Option<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint,
            api_key,
        }
    }
}

#[derive(Debug, Deserialize)]
struct MetadataResponse {
    status: String,
    location: Option<LatLng>,
}

#[async_trait]
impl ImageryLookup for HttpImageryLookup {
    async fn find_panorama(
        &self,
        near: LatLng,
        radius_meters: u32,
    ) -> Result<Option<LatLng>, LookupError> {
        let mut url = self.endpoint.clone();
        url.query_pairs_mut()
            .append_pair("location", &format!("{},{}", near.lat, near.lng))
            .append_pair("radius", &radius_meters.to_string());
        if let Some(api_key) = &self.api_key {
            url.query_pairs_mut().append_pair("key", api_key);
        }
        let response = self.client.get(url).send().await?.error_for_status()?;
        let metadata: MetadataResponse = response.json().await?;
        match metadata.status.as_str() {
            "OK" => match metadata.location {
                Some(position) => Ok(Some(position)),
                None => Err(LookupError::MissingLocation(metadata.status)),
            },
            _ => Ok(None),
        }
    }
}
