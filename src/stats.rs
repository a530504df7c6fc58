use crate::options::Resolution;

use chrono::NaiveDate;

use serde::Deserialize;

/// A single sample of a statistic.
#[derive(Debug, PartialEq, Eq, Deserialize, Clone)]
pub struct StatValue {
    pub date: NaiveDate,
    pub value: u64,
}

/// Recent evolution of a statistic.
#[derive(Debug, PartialEq, Eq, Deserialize, Clone)]
pub struct Historical {
    /// Total change over the sampled period.
    pub change: i64,
    pub average: Option<u64>,
    pub resolution: Resolution,
    pub quantity: u32,
    pub values: Vec<StatValue>,
}

#[derive(Debug, PartialEq, Eq, Deserialize, Clone)]
pub struct Stat {
    pub total: u64,
    pub historical: Historical,
}

/// Download, view and like counts of a user's photos.
#[derive(Debug, PartialEq, Eq, Deserialize, Clone)]
#[non_exhaustive]
pub struct UserStatistics {
    pub username: String,
    pub downloads: Stat,
    pub views: Stat,
    pub likes: Option<Stat>,
}

/// Download, view and like counts of a photo.
#[derive(Debug, PartialEq, Eq, Deserialize, Clone)]
#[non_exhaustive]
pub struct PhotoStatistics {
    pub id: String,
    pub downloads: Stat,
    pub views: Stat,
    pub likes: Option<Stat>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_statistics_from_json() {
        let stats: UserStatistics =
            serde_json::from_str(include_str!("mocked/user_statistics.json")).unwrap();

        assert_eq!(stats.username, "jimmyexample");
        assert_eq!(stats.downloads.total, 50272);
        assert_eq!(stats.views.historical.average, Some(1078));
        assert_eq!(stats.views.historical.resolution, Resolution::Days);
        assert_eq!(
            stats.downloads.historical.values[2],
            StatValue {
                date: NaiveDate::from_ymd_opt(2017, 2, 9).unwrap(),
                value: 633,
            }
        );
        assert_eq!(stats.likes.unwrap().historical.average, None);
    }

    #[test]
    fn photo_statistics_without_likes() {
        let stats: PhotoStatistics =
            serde_json::from_str(include_str!("mocked/photo_statistics.json")).unwrap();

        assert_eq!(stats.id, "LF8gK8-HGSg");
        assert_eq!(stats.views.historical.change, 3342);
        assert_eq!(stats.likes, None);
    }
}
