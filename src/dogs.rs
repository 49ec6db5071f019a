//! Dog-breed lookup against thedogapi.com.

use anyhow::Result;
use serde::Deserialize;
use tracing::debug;

/// One breed record from the API. Unknown fields are ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct Breed {
    pub id: u32,
    pub name: String,
    pub life_span: String,
    #[serde(default)]
    pub description: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct BreedImage {
    pub url: String,
}

/// Case-insensitive exact match over the fetched breed list.
pub fn find_breed<'a>(breeds: &'a [Breed], name: &str) -> Option<&'a Breed> {
    breeds
        .iter()
        .find(|breed| breed.name.eq_ignore_ascii_case(name))
}

/// Caption for a breed photo reply.
pub fn breed_caption(breed: &Breed) -> String {
    format!(
        "🐶 Breed: {}\n📅 Life span: {}\n📖 Description: {}",
        breed.name,
        breed.life_span,
        breed
            .description
            .as_deref()
            .unwrap_or("No description available."),
    )
}

/// Client for the dog API. Both endpoints want the key in an
/// `x-api-key` header.
#[derive(Debug, Clone)]
pub struct DogApiClient {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl DogApiClient {
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into(),
            api_key: api_key.into(),
        }
    }

    /// Fetch the full breed list.
    pub async fn breeds(&self) -> Result<Vec<Breed>> {
        let url = format!("{}/breeds", self.base_url);
        let breeds: Vec<Breed> = self
            .http
            .get(&url)
            .header("x-api-key", &self.api_key)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        debug!(count = breeds.len(), "fetched breed list");
        Ok(breeds)
    }

    /// Fetch one image URL for a breed, if the API has any.
    pub async fn breed_image(&self, breed_id: u32) -> Result<Option<String>> {
        let url = format!("{}/images/search", self.base_url);
        let images: Vec<BreedImage> = self
            .http
            .get(&url)
            .query(&[("breed_id", breed_id)])
            .header("x-api-key", &self.api_key)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        Ok(images.into_iter().next().map(|image| image.url))
    }
}
