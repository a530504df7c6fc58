use crate::{
    client::{Client, Response},
    collection::Collection,
    endpoint::Endpoint,
    error::Result,
    options::{validated, ListOpt, ProfileImageOpt, StatsOpt},
    photo::Photo,
    stats::UserStatistics,
    utils::path_segment,
};

use chrono::{DateTime, Utc};

use serde::Deserialize;

use std::{convert::TryFrom, fmt};

/// A URL given by the API, e.g. a user's portfolio.
///
/// The API sends it either as a plain string or as `{"raw": "<url>"}`. The value is parsed, so
/// it comes back normalised rather than byte for byte: `http://x` reads as `http://x/`.
#[derive(Debug, PartialEq, Eq, Deserialize, Clone)]
#[serde(try_from = "RawUrl")]
pub struct Url(url::Url);

#[derive(Deserialize)]
#[serde(untagged)]
enum RawUrl {
    Plain(String),
    Object { raw: String },
}

impl TryFrom<RawUrl> for Url {
    type Error = url::ParseError;

    fn try_from(raw: RawUrl) -> std::result::Result<Self, Self::Error> {
        let raw = match raw {
            RawUrl::Plain(raw) => raw,
            RawUrl::Object { raw } => raw,
        };

        url::Url::parse(&raw).map(Url)
    }
}

impl Url {
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl AsRef<url::Url> for Url {
    fn as_ref(&self) -> &url::Url {
        &self.0
    }
}

impl From<Url> for url::Url {
    fn from(url: Url) -> url::Url {
        url.0
    }
}

impl fmt::Display for Url {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

/// Links to a user's profile picture. `custom` is only present when a size was requested.
#[derive(Debug, PartialEq, Eq, Deserialize, Clone)]
pub struct ProfileImage {
    pub small: String,
    pub medium: String,
    pub large: String,
    pub custom: Option<String>,
}

#[derive(Debug, PartialEq, Eq, Deserialize, Clone)]
pub struct UserLinks {
    /// The user in the API.
    #[serde(rename = "self")]
    pub api: String,
    pub html: String,
    pub photos: Option<String>,
    pub likes: Option<String>,
    pub portfolio: Option<String>,
}

/// Structure representing a user.
#[derive(Debug, PartialEq, Eq, Deserialize, Clone)]
#[non_exhaustive]
pub struct User {
    pub id: String,
    pub updated_at: Option<DateTime<Utc>>,
    pub username: String,
    pub name: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub twitter_username: Option<String>,
    pub instagram_username: Option<String>,
    pub portfolio_url: Option<String>,
    pub bio: Option<String>,
    pub location: Option<String>,
    #[serde(default)]
    pub total_likes: u64,
    #[serde(default)]
    pub total_photos: u64,
    #[serde(default)]
    pub total_collections: u64,
    #[serde(default)]
    pub followed_by_user: bool,
    #[serde(default)]
    pub followers_count: u64,
    #[serde(default)]
    pub following_count: u64,
    #[serde(default)]
    pub downloads: u64,
    pub profile_image: Option<ProfileImage>,
    pub links: Option<UserLinks>,
}

/// Accessor for the `/users` endpoints.
///
/// ```no_run
/// # use unsplash::client::Client;
/// # #[tokio::main]
/// # async fn main() -> unsplash::error::Result<()> {
/// let client = Client::new("https://api.unsplash.com", "my-access-key")?;
/// let users = client.users();
///
/// let user = users.user("jimmyexample", None).await?;
/// let (photos, response) = users.photos(&user.username, None).await?;
///
/// println!("{} has {} photos", user.username, response.total.unwrap_or(0));
/// # Ok(()) }
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Users<'a> {
    client: &'a Client,
}

impl<'a> Users<'a> {
    /// Returns the user with the given username, with a profile image of the requested size.
    pub async fn user(&self, username: &str, image: Option<&ProfileImageOpt>) -> Result<User> {
        let username = path_segment(username, "Username")?;

        let endpoint = format!("{}/{}", Endpoint::Users, username);
        let (user, _): (User, _) = self
            .client
            .get_json_endpoint_query(&endpoint, image)
            .await?;

        Ok(user)
    }

    /// Returns the link to the user's portfolio.
    pub async fn portfolio(&self, username: &str) -> Result<Url> {
        #[derive(Deserialize)]
        struct UrlWrapper {
            url: Url,
        }

        let username = path_segment(username, "Username")?;

        let endpoint = format!("{}/{}/portfolio", Endpoint::Users, username);
        let (wrapper, _): (UrlWrapper, _) = self.client.get_json_endpoint(&endpoint).await?;

        Ok(wrapper.url)
    }

    /// Returns a page of the photos uploaded by the user.
    pub async fn photos(
        &self,
        username: &str,
        opt: Option<&ListOpt>,
    ) -> Result<(Vec<Photo>, Response)> {
        let username = path_segment(username, "Username")?;

        let endpoint = format!("{}/{}/{}", Endpoint::Users, username, Endpoint::Photos);
        self.client.list_photos(&endpoint, opt).await
    }

    /// Returns a page of the photos liked by the user.
    pub async fn liked_photos(
        &self,
        username: &str,
        opt: Option<&ListOpt>,
    ) -> Result<(Vec<Photo>, Response)> {
        let username = path_segment(username, "Username")?;

        let endpoint = format!("{}/{}/likes", Endpoint::Users, username);
        self.client.list_photos(&endpoint, opt).await
    }

    /// Returns a page of the collections created by the user.
    pub async fn collections(
        &self,
        username: &str,
        opt: Option<&ListOpt>,
    ) -> Result<(Vec<Collection>, Response)> {
        let username = path_segment(username, "Username")?;

        let endpoint = format!(
            "{}/{}/{}",
            Endpoint::Users,
            username,
            Endpoint::Collections
        );
        self.client.list_collections(&endpoint, opt).await
    }

    /// Returns the download, view and like statistics of the user's photos.
    pub async fn statistics(
        &self,
        username: &str,
        opt: Option<&StatsOpt>,
    ) -> Result<(UserStatistics, Response)> {
        let username = path_segment(username, "Username")?;
        let opt = validated(opt)?;

        let endpoint = format!("{}/{}/statistics", Endpoint::Users, username);
        self.client
            .get_json_endpoint_query(&endpoint, Some(&*opt))
            .await
    }
}

impl Client {
    /// Accessor for the users of the API.
    pub fn users(&self) -> Users<'_> {
        Users { client: self }
    }
}
