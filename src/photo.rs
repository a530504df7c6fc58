use crate::{
    client::{Client, Response},
    endpoint::Endpoint,
    error::Result,
    options::{validated, ListOpt, PhotoOpt, StatsOpt},
    stats::PhotoStatistics,
    user::User,
    utils::path_segment,
};

use chrono::{DateTime, Utc};

use serde::Deserialize;

/// Links to the photo's image files, at several sizes.
#[derive(Debug, PartialEq, Eq, Deserialize, Clone)]
pub struct PhotoUrls {
    pub raw: String,
    pub full: String,
    pub regular: String,
    pub small: String,
    pub thumb: String,
}

#[derive(Debug, PartialEq, Eq, Deserialize, Clone)]
pub struct PhotoLinks {
    /// The photo in the API.
    #[serde(rename = "self")]
    pub api: String,
    pub html: String,
    pub download: Option<String>,
    /// Must be requested when the photo is downloaded, per the API guidelines.
    pub download_location: Option<String>,
}

/// Structure representing a photo.
#[derive(Debug, PartialEq, Eq, Deserialize, Clone)]
#[non_exhaustive]
pub struct Photo {
    pub id: String,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub width: u64,
    #[serde(default)]
    pub height: u64,
    /// Dominant color, as `#RRGGBB`.
    pub color: Option<String>,
    pub blur_hash: Option<String>,
    #[serde(default)]
    pub downloads: u64,
    #[serde(default)]
    pub likes: u64,
    #[serde(default)]
    pub liked_by_user: bool,
    pub description: Option<String>,
    pub alt_description: Option<String>,
    pub urls: Option<PhotoUrls>,
    pub links: Option<PhotoLinks>,
    /// The uploader.
    pub user: Option<User>,
}

/// Accessor for the `/photos` endpoints.
#[derive(Debug, Clone, Copy)]
pub struct Photos<'a> {
    client: &'a Client,
}

impl<'a> Photos<'a> {
    /// Returns the photo with the given ID, resized and cropped as `opt` says.
    ///
    /// ```no_run
    /// # use unsplash::client::Client;
    /// # use unsplash::options::PhotoOpt;
    /// # #[tokio::main]
    /// # async fn main() -> unsplash::error::Result<()> {
    /// let client = Client::new("https://api.unsplash.com", "my-access-key")?;
    /// let photo = client
    ///     .photos()
    ///     .photo("LBI7cgq3pbM", Some(&PhotoOpt::new().width(400)))
    ///     .await?;
    ///
    /// assert_eq!(photo.id, "LBI7cgq3pbM");
    /// # Ok(()) }
    /// ```
    pub async fn photo(&self, id: &str, opt: Option<&PhotoOpt>) -> Result<Photo> {
        let id = path_segment(id, "Photo ID")?;
        let opt = validated(opt)?;

        let endpoint = format!("{}/{}", Endpoint::Photos, id);
        let (photo, _): (Photo, _) = self
            .client
            .get_json_endpoint_query(&endpoint, Some(&*opt))
            .await?;

        Ok(photo)
    }

    /// Returns a page of the editorial feed.
    pub async fn all(&self, opt: Option<&ListOpt>) -> Result<(Vec<Photo>, Response)> {
        self.client
            .list_photos(Endpoint::Photos.as_str(), opt)
            .await
    }

    /// Returns the download, view and like statistics of a photo.
    pub async fn statistics(
        &self,
        id: &str,
        opt: Option<&StatsOpt>,
    ) -> Result<(PhotoStatistics, Response)> {
        let id = path_segment(id, "Photo ID")?;
        let opt = validated(opt)?;

        let endpoint = format!("{}/{}/statistics", Endpoint::Photos, id);
        self.client
            .get_json_endpoint_query(&endpoint, Some(&*opt))
            .await
    }
}

impl Client {
    /// Accessor for the photos of the API.
    pub fn photos(&self) -> Photos<'_> {
        Photos { client: self }
    }

    /// Lists photos at `endpoint`, paginated as `opt` says.
    pub(crate) async fn list_photos(
        &self,
        endpoint: &str,
        opt: Option<&ListOpt>,
    ) -> Result<(Vec<Photo>, Response)> {
        let opt = validated(opt)?;

        self.get_json_endpoint_query(endpoint, Some(&*opt)).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::options::{Order, Rect};
    use mockito::{mock, Matcher};

    #[test]
    fn photo_from_json() {
        let photos: Vec<Photo> = serde_json::from_str(include_str!("mocked/photos.json")).unwrap();

        assert_eq!(photos.len(), 2);

        let photo = &photos[0];
        assert_eq!(photo.id, "LBI7cgq3pbM");
        assert_eq!(photo.width, 5245);
        assert_eq!(photo.color.as_deref(), Some("#60544D"));
        assert_eq!(
            photo.created_at,
            Some("2016-05-03T15:00:28Z".parse::<DateTime<Utc>>().unwrap())
        );
        assert_eq!(photo.user.as_ref().unwrap().username, "poorkane");
        assert_eq!(
            photo.links.as_ref().unwrap().api,
            "https://api.unsplash.com/photos/LBI7cgq3pbM"
        );

        let photo = &photos[1];
        assert_eq!(photo.color, None);
        assert_eq!(photo.updated_at, None);
        assert!(photo.user.is_none());
        assert!(!photo.liked_by_user);
    }

    #[test]
    fn photographer_is_a_plain_user() {
        let raw: serde_json::Value =
            serde_json::from_str(include_str!("mocked/photos.json")).unwrap();
        let user: User = serde_json::from_value(raw[0]["user"].clone()).unwrap();

        let photos: Vec<Photo> = serde_json::from_value(raw).unwrap();

        assert_eq!(photos[0].user, Some(user));
    }

    #[tokio::test]
    async fn get_photo_with_opt() {
        let client = Client::new(&mockito::server_url(), "unit_test").unwrap();

        let opt = PhotoOpt::new().width(400).rect(Rect {
            x: 0,
            y: 0,
            width: 100,
            height: 50,
        });

        let _m = mock("GET", "/photos/LBI7cgq3pbM")
            .match_query(Matcher::AllOf(vec![
                Matcher::UrlEncoded("w".into(), "400".into()),
                Matcher::UrlEncoded("rect".into(), "0,0,100,50".into()),
            ]))
            .with_body(include_str!("mocked/photo.json"))
            .create();

        let photo = client.photos().photo("LBI7cgq3pbM", Some(&opt)).await.unwrap();

        assert_eq!(photo.id, "LBI7cgq3pbM");
    }

    #[tokio::test]
    async fn invalid_photo_opt_sends_nothing() {
        let client = Client::new(&mockito::server_url(), "unit_test").unwrap();

        let m = mock("GET", Matcher::Regex(r"^/photos/invalid".into()))
            .expect(0)
            .create();

        let opt = PhotoOpt::new().rect(Rect {
            x: 0,
            y: 0,
            width: 0,
            height: 0,
        });

        assert!(matches!(
            client.photos().photo("invalid", Some(&opt)).await,
            Err(Error::InvalidPhotoOpt(_))
        ));

        m.assert();
    }

    #[tokio::test]
    async fn empty_photo_id_sends_nothing() {
        let client = Client::new(&mockito::server_url(), "unit_test").unwrap();

        let m = mock("GET", Matcher::Regex(r"^/photos/(/|\?|$)".into()))
            .expect(0)
            .create();

        assert!(matches!(
            client.photos().photo("", None).await,
            Err(Error::IllegalArgument(_))
        ));
        assert!(matches!(
            client.photos().statistics("", None).await,
            Err(Error::IllegalArgument(_))
        ));

        m.assert();
    }

    #[tokio::test]
    async fn list_all_photos() {
        let client = Client::new(&mockito::server_url(), "unit_test").unwrap();

        let _m = mock("GET", "/photos")
            .match_query(Matcher::AllOf(vec![
                Matcher::UrlEncoded("page".into(), "2".into()),
                Matcher::UrlEncoded("per_page".into(), "2".into()),
                Matcher::UrlEncoded("order_by".into(), "oldest".into()),
            ]))
            .with_header("x-total", "120")
            .with_body(include_str!("mocked/photos.json"))
            .create();

        let opt = ListOpt::new().page(2).per_page(2).order_by(Order::Oldest);
        let (photos, response) = client.photos().all(Some(&opt)).await.unwrap();

        assert_eq!(photos.len(), 2);
        assert_eq!(response.total, Some(120));
    }

    #[tokio::test]
    async fn photo_statistics() {
        let client = Client::new(&mockito::server_url(), "unit_test").unwrap();

        let _m = mock("GET", "/photos/LF8gK8-HGSg/statistics")
            .match_query(Matcher::AllOf(vec![
                Matcher::UrlEncoded("resolution".into(), "days".into()),
                Matcher::UrlEncoded("quantity".into(), "2".into()),
            ]))
            .with_body(include_str!("mocked/photo_statistics.json"))
            .create();

        let opt = StatsOpt::new().quantity(2);
        let (stats, _) = client
            .photos()
            .statistics("LF8gK8-HGSg", Some(&opt))
            .await
            .unwrap();

        assert_eq!(stats.downloads.total, 829);
    }
}
