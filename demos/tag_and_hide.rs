/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */

extern crate flickr_photos;

use anyhow::{Context, Result};
use dotenvy::dotenv;
use flickr_photos::rest::{add_tags, get_info, set_perms, Client, Creds, PrivacyType};

// Tags a photo owned by the authenticated user and makes it visible to
// family only.
// NOTE: the access token needs write permission.
#[tokio::main]
async fn main() -> Result<()> {
    dotenv().ok();
    env_logger::init();

    let photo_id = std::env::args()
        .nth(1)
        .context("usage: tag_and_hide <photo id> [tag...]")?;
    let tags: Vec<String> = std::env::args().skip(2).collect();

    let client = Client::new(Creds::from_tokens(
        &std::env::var("FLICKR_API_KEY")?,
        Some(&std::env::var("FLICKR_API_SECRET")?),
        Some(&std::env::var("FLICKR_ACCESS_TOKEN")?),
        Some(&std::env::var("FLICKR_ACCESS_TOKEN_SECRET")?),
    ));

    if !tags.is_empty() {
        add_tags(&client, &photo_id, tags.as_slice()).await?;
    }
    set_perms(
        &client,
        &photo_id,
        PrivacyType::No,
        PrivacyType::No,
        PrivacyType::Yes,
    )
    .await?;

    let info = get_info(&client, &photo_id, "").await?;
    println!(
        "{} '{}' public:{} family:{}",
        info.id, info.title, info.visibility.is_public, info.visibility.is_family
    );
    for tag in &info.tags {
        println!("\ttag {} ({})", tag.value, tag.raw);
    }
    Ok(())
}
