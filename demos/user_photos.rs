use unsplash::{client::Client, error::Error, options::ListOpt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let access_key = std::env::var("UNSPLASH_ACCESS_KEY")?;
    let username = std::env::args().nth(1).unwrap_or_else(|| "unsplash".into());

    let client = Client::new("https://api.unsplash.com", access_key)?;

    let user = client.users().user(&username, None).await?;
    println!("{} ({} photos)", user.username, user.total_photos);

    let opt = ListOpt::new().per_page(10);
    match client.users().photos(&username, Some(&opt)).await {
        Ok((photos, response)) => {
            for photo in photos {
                println!("- {}: {}", photo.id, photo.description.unwrap_or_default());
            }

            if let Some(remaining) = response.rate_limit_remaining {
                println!("{} requests left this hour", remaining);
            }
        }
        Err(Error::RateLimit(msg)) => println!("rate limited: {}", msg),
        Err(e) => println!("couldn't load photos: {}", e),
    }

    Ok(())
}
