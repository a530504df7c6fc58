use crate::{
    client::{Client, Response},
    endpoint::Endpoint,
    error::Result,
    options::{validated, ListOpt},
    photo::Photo,
    user::User,
    utils::path_segment,
};

use chrono::{DateTime, Utc};

use serde::Deserialize;

#[derive(Debug, PartialEq, Eq, Deserialize, Clone)]
pub struct CollectionLinks {
    /// The collection in the API.
    #[serde(rename = "self")]
    pub api: String,
    pub html: String,
    pub photos: Option<String>,
}

/// Structure representing a collection of photos.
#[derive(Debug, PartialEq, Eq, Deserialize, Clone)]
#[non_exhaustive]
pub struct Collection {
    pub id: String,
    pub title: String,
    pub description: Option<String>,
    pub published_at: Option<DateTime<Utc>>,
    pub last_collected_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub featured: bool,
    #[serde(default)]
    pub total_photos: u64,
    #[serde(default)]
    pub private: bool,
    pub share_key: Option<String>,
    pub cover_photo: Option<Photo>,
    /// The curator.
    pub user: Option<User>,
    pub links: Option<CollectionLinks>,
}

/// Accessor for the `/collections` endpoints.
#[derive(Debug, Clone, Copy)]
pub struct Collections<'a> {
    client: &'a Client,
}

impl<'a> Collections<'a> {
    /// Returns the collection with the given ID.
    pub async fn collection(&self, id: &str) -> Result<Collection> {
        let id = path_segment(id, "Collection ID")?;

        let endpoint = format!("{}/{}", Endpoint::Collections, id);
        let (collection, _): (Collection, _) = self.client.get_json_endpoint(&endpoint).await?;

        Ok(collection)
    }

    /// Returns a page of all the collections.
    pub async fn all(&self, opt: Option<&ListOpt>) -> Result<(Vec<Collection>, Response)> {
        self.client
            .list_collections(Endpoint::Collections.as_str(), opt)
            .await
    }

    /// Returns a page of the photos in a collection.
    pub async fn photos(&self, id: &str, opt: Option<&ListOpt>) -> Result<(Vec<Photo>, Response)> {
        let id = path_segment(id, "Collection ID")?;

        let endpoint = format!("{}/{}/{}", Endpoint::Collections, id, Endpoint::Photos);
        self.client.list_photos(&endpoint, opt).await
    }
}

impl Client {
    /// Accessor for the collections of the API.
    pub fn collections(&self) -> Collections<'_> {
        Collections { client: self }
    }

    /// Lists collections at `endpoint`, paginated as `opt` says.
    pub(crate) async fn list_collections(
        &self,
        endpoint: &str,
        opt: Option<&ListOpt>,
    ) -> Result<(Vec<Collection>, Response)> {
        let opt = validated(opt)?;

        self.get_json_endpoint_query(endpoint, Some(&*opt)).await
    }
}
