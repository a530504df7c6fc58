//! Wrapper crate for the [Unsplash](https://unsplash.com/developers) API.
//!
//! ## Usage
//!
//! First, create a [`Client`]. You have to provide the access key of your Unsplash application;
//! every request is authorized with it.
//!
//! ```no_run
//! # use unsplash::client::Client;
//! # fn main() -> Result<(), unsplash::error::Error> {
//! let client = Client::new("https://api.unsplash.com", "my-access-key")?;
//! # Ok(()) }
//! ```
//!
//! Now it's ready to go! Resources are reached through accessors borrowing the client. For
//! example you can get a user and their latest photos like this:
//!
//! ```no_run
//! # use unsplash::client::Client;
//! # use unsplash::options::ListOpt;
//! # #[tokio::main]
//! # async fn main() -> Result<(), unsplash::error::Error> {
//! # let client = Client::new("https://api.unsplash.com", "my-access-key")?;
//! let user = client.users().user("jimmyexample", None).await?;
//!
//! let (photos, response) = client
//!     .users()
//!     .photos(&user.username, Some(&ListOpt::new().per_page(30)))
//!     .await?;
//!
//! for photo in photos {
//!     println!("{} ({} likes)", photo.id, photo.likes);
//! }
//!
//! if response.has_next_page() {
//!     println!("there's more!");
//! }
//! # Ok(()) }
//! ```
//!
//! The client holds no mutable state, so independent requests can run concurrently:
//!
//! ```no_run
//! # use unsplash::client::Client;
//! # #[tokio::main]
//! # async fn main() -> Result<(), unsplash::error::Error> {
//! # let client = Client::new("https://api.unsplash.com", "my-access-key")?;
//! let users = client.users();
//!
//! let (portfolio, (stats, _)) = futures::try_join!(
//!     users.portfolio("jimmyexample"),
//!     users.statistics("jimmyexample", None),
//! )?;
//! # Ok(()) }
//! ```
//!
//! ## Errors
//!
//! Invalid arguments (an empty username, an option struct the API would refuse) are reported
//! before any request is made. Failed requests are classified into [`Error`] variants; nothing
//! is ever retried. When the API is overloaded, [`Error::status`] and [`Error::retry_after`] tell
//! when to try again:
//!
//! ```no_run
//! # use unsplash::client::Client;
//! # use unsplash::error::Error;
//! # #[tokio::main]
//! # async fn main() {
//! # let client = Client::new("https://api.unsplash.com", "my-access-key").unwrap();
//! match client.users().user("jimmyexample", None).await {
//!     Ok(user) => println!("{:?}", user.name),
//!     Err(Error::RateLimit(_)) => println!("out of requests for this hour"),
//!     Err(e) => match e.retry_after() {
//!         Some(delay) => println!("{}: retry in {:?}", e, delay),
//!         None => println!("{}", e),
//!     },
//! }
//! # }
//! ```
//!
//! ## Cancellation
//!
//! Every request is an `async fn`; dropping its future aborts it. A deadline can be set for all
//! requests with [`ClientBuilder::timeout`].
//!
//! ## Logging
//!
//! Requests and their outcome are reported through [`tracing`] at the `debug` level. Install a
//! subscriber to see them.
//!
//! [`Client`]: client::Client
//! [`ClientBuilder::timeout`]: client::ClientBuilder::timeout
//! [`Error`]: error::Error
//! [`Error::status`]: error::Error::status
//! [`Error::retry_after`]: error::Error::retry_after

mod utils;

/// Client related structures.
pub mod client;

/// Error management.
pub mod error;

/// Base paths of the API resources.
pub mod endpoint;

/// Query parameters of the requests.
pub mod options;

/// User management.
pub mod user;

/// Photo management.
pub mod photo;

/// Collection management.
pub mod collection;

/// Statistics of users and photos.
pub mod stats;
