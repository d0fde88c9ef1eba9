/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */

extern crate flickr_photos;

use anyhow::Result;
use dotenvy::dotenv;
use flickr_photos::rest::{
    get_sizes, search, Client, Creds, MediaFilter, PhotoSearchRequest, SortOrder,
};

// Searches for the text given on the command line and prints every size
// available for the top hits.
#[tokio::main]
async fn main() -> Result<()> {
    dotenv().ok();
    env_logger::init();

    let text = std::env::args().nth(1).unwrap_or_else(|| "lighthouse".to_string());
    let api_key = std::env::var("FLICKR_API_KEY")?;
    let client = Client::new(Creds::from_tokens(&api_key, None, None, None));

    // No paging helper so walk the first two pages by hand
    for page in 1..=2 {
        let query = PhotoSearchRequest {
            text: text.clone(),
            extras: vec!["url_q".to_string(), "url_o".to_string(), "views".to_string()],
            page,
            per_page: 5,
            ..Default::default()
        }
        .sorted_by(SortOrder::Relevance)
        .with_media(MediaFilter::Photos);

        let photos = search(&client, &query).await?;
        println!(
            "Page {} of {} ({} total)",
            photos.page,
            photos.pages,
            photos.total
        );

        for photo in &photos.photos {
            println!("{} '{}' views:{:?}", photo.id, photo.title, photo.views()?);
            for variant in photo.size_variants() {
                println!("\tsearch extra {:?}: {}", variant.suffix, variant.url);
            }
            for size in get_sizes(&client, &photo.id).await? {
                println!("\t{}\t{}x{}\t{}", size.label, size.width, size.height, size.source);
            }
        }

        if photos.page == photos.pages {
            break;
        }
    }
    Ok(())
}
