use album_client::AlbumClient;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging
    env_logger::init();

    let client = AlbumClient::new("https://jsonplaceholder.typicode.com")?;

    // Prefetch page 2 the way the routing loader does, without waiting for it
    let deferred = client.ensure_page(2);
    println!("prefetch started, cache stats: {:?}", client.cache_stats());

    // First read awaits the prefetched entry
    let start = std::time::Instant::now();
    let albums = client.read_page(2).await?;
    println!(
        "page 2: {} records in {:?} (shared with prefetch: {})",
        albums.len(),
        start.elapsed(),
        deferred.await.is_ok()
    );

    // Second read is served from the cache
    let start = std::time::Instant::now();
    client.read_page(2).await?;
    println!("cached read took {:?}", start.elapsed());
    println!("cache stats: {:?}", client.cache_stats());

    // Clearing forces the next read to refetch
    client.clear_cache();
    let start = std::time::Instant::now();
    client.read_page(2).await?;
    println!("read after clear took {:?}", start.elapsed());

    Ok(())
}
