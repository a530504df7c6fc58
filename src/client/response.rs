use itertools::Itertools;

use reqwest::header::{HeaderMap, LINK};

use url::Url;

/// Pagination and rate limit metadata of a response.
///
/// Every field is `None` when the API didn't send the corresponding header or sent something
/// unreadable.
#[derive(Debug, Default, PartialEq, Eq, Clone)]
pub struct Response {
    pub first_page: Option<u64>,
    pub prev_page: Option<u64>,
    pub next_page: Option<u64>,
    pub last_page: Option<u64>,
    /// Total number of items in the listing (`X-Total`).
    pub total: Option<u64>,
    /// Number of items per page (`X-Per-Page`).
    pub per_page: Option<u64>,
    /// Requests allowed per hour for the access key (`X-Ratelimit-Limit`).
    pub rate_limit: Option<u64>,
    /// Requests left in the current hour (`X-Ratelimit-Remaining`).
    pub rate_limit_remaining: Option<u64>,
}

impl Response {
    pub(crate) fn from_headers(headers: &HeaderMap) -> Self {
        let mut response = Response {
            total: header_u64(headers, "x-total"),
            per_page: header_u64(headers, "x-per-page"),
            rate_limit: header_u64(headers, "x-ratelimit-limit"),
            rate_limit_remaining: header_u64(headers, "x-ratelimit-remaining"),
            ..Response::default()
        };

        for link in headers.get_all(LINK) {
            if let Ok(link) = link.to_str() {
                response.read_link(link);
            }
        }

        response
    }

    /// Whether there's a page after this one.
    pub fn has_next_page(&self) -> bool {
        self.next_page.is_some()
    }

    // `<https://api.unsplash.com/users/alice/photos?page=2>; rel="next", <...>; rel="last"`
    fn read_link(&mut self, link: &str) {
        for entry in link.split(',') {
            let (target, rel) = match entry.split(';').map(str::trim).collect_tuple() {
                Some(parts) => parts,
                None => continue,
            };

            let page = target
                .strip_prefix('<')
                .and_then(|t| t.strip_suffix('>'))
                .and_then(page_of);

            let rel = rel
                .strip_prefix("rel=")
                .map(|r| r.trim_matches('"'))
                .unwrap_or_default();

            match rel {
                "first" => self.first_page = page,
                "prev" => self.prev_page = page,
                "next" => self.next_page = page,
                "last" => self.last_page = page,
                _ => {}
            }
        }
    }
}

fn page_of(target: &str) -> Option<u64> {
    let url = Url::parse(target).ok()?;
    let (_, page) = url.query_pairs().find(|(key, _)| key == "page")?;
    page.parse().ok()
}

fn header_u64(headers: &HeaderMap, name: &str) -> Option<u64> {
    headers.get(name)?.to_str().ok()?.trim().parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::header::HeaderValue;

    #[test]
    fn response_from_headers() {
        let mut headers = HeaderMap::new();
        headers.insert(
            LINK,
            HeaderValue::from_static(
                "<https://api.unsplash.com/users/alice/photos?page=1>; rel=\"first\", \
                 <https://api.unsplash.com/users/alice/photos?page=1>; rel=\"prev\", \
                 <https://api.unsplash.com/users/alice/photos?page=5>; rel=\"last\", \
                 <https://api.unsplash.com/users/alice/photos?page=3&per_page=10>; rel=\"next\"",
            ),
        );
        headers.insert("x-total", HeaderValue::from_static("48"));
        headers.insert("x-per-page", HeaderValue::from_static("10"));
        headers.insert("x-ratelimit-limit", HeaderValue::from_static("50"));
        headers.insert("x-ratelimit-remaining", HeaderValue::from_static("49"));

        assert_eq!(
            Response::from_headers(&headers),
            Response {
                first_page: Some(1),
                prev_page: Some(1),
                next_page: Some(3),
                last_page: Some(5),
                total: Some(48),
                per_page: Some(10),
                rate_limit: Some(50),
                rate_limit_remaining: Some(49),
            }
        );
    }

    #[test]
    fn last_page_has_no_next() {
        let mut headers = HeaderMap::new();
        headers.insert(
            LINK,
            HeaderValue::from_static(
                "<https://api.unsplash.com/photos?page=1>; rel=\"first\", \
                 <https://api.unsplash.com/photos?page=4>; rel=\"prev\"",
            ),
        );

        let response = Response::from_headers(&headers);

        assert!(!response.has_next_page());
        assert_eq!(response.prev_page, Some(4));
    }

    #[test]
    fn garbage_headers_are_ignored() {
        let mut headers = HeaderMap::new();
        headers.insert(LINK, HeaderValue::from_static("<not a url>; rel=\"next\", junk"));
        headers.insert("x-total", HeaderValue::from_static("many"));

        assert_eq!(Response::from_headers(&headers), Response::default());
    }
}
