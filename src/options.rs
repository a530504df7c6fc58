use crate::error::{Error, Result};

use serde::{Deserialize, Serialize};

use serde_with::{serde_as, DisplayFromStr};

use std::{borrow::Cow, fmt};

/// Largest page size the API accepts.
pub const MAX_PER_PAGE: u32 = 30;

/// Largest number of statistic samples the API accepts.
pub const MAX_STATS_QUANTITY: u32 = 30;

fn is_zero(v: &u32) -> bool {
    *v == 0
}

/// Option structs self-report whether the API would accept them.
pub trait Opt: Default + Clone + Serialize {
    /// Whether this value can be sent to the API.
    fn valid(&self) -> bool;

    #[doc(hidden)]
    fn invalid() -> Error;
}

/// Substitutes the default for a missing option struct and rejects invalid ones.
pub(crate) fn validated<O: Opt>(opt: Option<&O>) -> Result<Cow<'_, O>> {
    let opt = match opt {
        Some(opt) => Cow::Borrowed(opt),
        None => Cow::Owned(O::default()),
    };

    if opt.valid() {
        Ok(opt)
    } else {
        Err(O::invalid())
    }
}

/// Size of a user's profile image. Zero means the API's default for that dimension.
#[derive(Default, Debug, PartialEq, Eq, Serialize, Clone, Copy)]
pub struct ProfileImageOpt {
    #[serde(rename = "h", skip_serializing_if = "is_zero")]
    pub height: u32,
    #[serde(rename = "w", skip_serializing_if = "is_zero")]
    pub width: u32,
}

impl ProfileImageOpt {
    pub fn new(width: u32, height: u32) -> Self {
        ProfileImageOpt { height, width }
    }
}

/// How to sort listed resources.
#[derive(Debug, PartialEq, Eq, Serialize, Clone, Copy)]
#[serde(rename_all = "snake_case")]
pub enum Order {
    Latest,
    Oldest,
    Popular,
}

impl Default for Order {
    fn default() -> Self {
        Order::Latest
    }
}

/// Pagination and ordering of a listing.
///
/// ```
/// # use unsplash::options::{ListOpt, Opt, Order};
/// let opt = ListOpt::new().page(2).per_page(30).order_by(Order::Popular);
///
/// assert!(opt.valid());
/// ```
#[derive(Debug, PartialEq, Eq, Serialize, Clone)]
pub struct ListOpt {
    page: u32,
    per_page: u32,
    order_by: Order,
}

impl Default for ListOpt {
    fn default() -> Self {
        ListOpt {
            page: 1,
            per_page: 10,
            order_by: Order::Latest,
        }
    }
}

impl ListOpt {
    /// Create a new instance of `ListOpt` with the default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the page to retrieve, starting at 1.
    pub fn page(mut self, page: u32) -> Self {
        self.page = page;
        self
    }

    /// Set the number of items per page, at most [`MAX_PER_PAGE`].
    pub fn per_page(mut self, per_page: u32) -> Self {
        self.per_page = per_page;
        self
    }

    /// Set the sort order.
    pub fn order_by(mut self, order_by: Order) -> Self {
        self.order_by = order_by;
        self
    }
}

impl Opt for ListOpt {
    fn valid(&self) -> bool {
        self.page >= 1 && (1..=MAX_PER_PAGE).contains(&self.per_page)
    }

    fn invalid() -> Error {
        Error::InvalidListOpt(String::from("opt provided is not valid."))
    }
}

/// Granularity of historical statistics.
#[derive(Debug, PartialEq, Eq, Serialize, Deserialize, Clone, Copy)]
#[serde(rename_all = "snake_case")]
pub enum Resolution {
    Days,
}

impl Default for Resolution {
    fn default() -> Self {
        Resolution::Days
    }
}

/// Shape of the historical statistics to retrieve.
#[derive(Debug, PartialEq, Eq, Serialize, Clone)]
pub struct StatsOpt {
    resolution: Resolution,
    quantity: u32,
}

impl Default for StatsOpt {
    fn default() -> Self {
        StatsOpt {
            resolution: Resolution::Days,
            quantity: MAX_STATS_QUANTITY,
        }
    }
}

impl StatsOpt {
    /// Create a new instance of `StatsOpt` with the default values.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn resolution(mut self, resolution: Resolution) -> Self {
        self.resolution = resolution;
        self
    }

    /// Set the number of samples, between 1 and [`MAX_STATS_QUANTITY`].
    pub fn quantity(mut self, quantity: u32) -> Self {
        self.quantity = quantity;
        self
    }
}

impl Opt for StatsOpt {
    fn valid(&self) -> bool {
        (1..=MAX_STATS_QUANTITY).contains(&self.quantity)
    }

    fn invalid() -> Error {
        Error::InvalidStatsOpt(String::from("opt provided is not valid."))
    }
}

/// A crop rectangle, in pixels of the original photo.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct Rect {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl fmt::Display for Rect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{},{},{}", self.x, self.y, self.width, self.height)
    }
}

/// Size and crop of a requested photo. Zero sizes are left to the API.
#[serde_as]
#[derive(Default, Debug, PartialEq, Eq, Serialize, Clone)]
pub struct PhotoOpt {
    #[serde(rename = "h", skip_serializing_if = "is_zero")]
    height: u32,

    #[serde(rename = "w", skip_serializing_if = "is_zero")]
    width: u32,

    #[serde_as(as = "Option<DisplayFromStr>")]
    #[serde(skip_serializing_if = "Option::is_none")]
    rect: Option<Rect>,
}

impl PhotoOpt {
    /// Create a new instance of `PhotoOpt` with the default values.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn height(mut self, height: u32) -> Self {
        self.height = height;
        self
    }

    pub fn width(mut self, width: u32) -> Self {
        self.width = width;
        self
    }

    /// Crop the photo before resizing it.
    pub fn rect<T: Into<Option<Rect>>>(mut self, rect: T) -> Self {
        self.rect = rect.into();
        self
    }
}

impl Opt for PhotoOpt {
    fn valid(&self) -> bool {
        match self.rect {
            Some(rect) => rect.width > 0 && rect.height > 0,
            None => true,
        }
    }

    fn invalid() -> Error {
        Error::InvalidPhotoOpt(String::from("opt provided is not valid."))
    }
}
