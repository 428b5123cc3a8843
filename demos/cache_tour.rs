//! # Cache Tour
//!
//! A walkthrough of the bounded cache semantics, no database required:
//! - Capacity bounds and recency-ordered eviction
//! - Lazy TTL expiration
//! - The capacity-only configuration (no time-based expiry)
//! - Sharing one cache across tasks with SharedCache

use curio::prelude::*;
use std::time::Duration;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    println!("🗄️  Curio Cache Tour");
    println!("===================");

    // 1. Capacity bounds
    println!("\n📏 Capacity");
    println!("-----------");

    let mut cache: BoundedTimedCache<&str, i32> =
        BoundedTimedCache::new(CacheParams::bounded(2, Duration::from_secs(30)));
    cache.put("a", 1);
    cache.put("b", 2);
    cache.put("c", 3); // evicts "a", the least recently used

    println!("Inserted a, b, c into a capacity-2 cache");
    println!("  len = {} (never exceeds capacity)", cache.len());
    println!("  a -> {:?} (evicted)", cache.get(&"a"));
    println!("  c -> {:?}", cache.get(&"c"));

    // Reading refreshes recency: touch "b", then overflow evicts "c"
    let _ = cache.get(&"b");
    cache.put("d", 4);
    println!("After touching b and inserting d:");
    println!("  b -> {:?} (kept: recently read)", cache.get(&"b"));
    println!("  c -> {:?} (evicted instead)", cache.get(&"c"));

    // 2. TTL expiration (lazy)
    println!("\n⏱️  TTL");
    println!("-------");

    let mut short_lived: BoundedTimedCache<&str, &str> =
        BoundedTimedCache::new(CacheParams::bounded(10, Duration::from_millis(50)));
    short_lived.put("greeting", "hello");
    println!("Fresh entry: {:?}", short_lived.get(&"greeting"));

    tokio::time::sleep(Duration::from_millis(80)).await;
    println!("After 80ms (ttl 50ms): {:?}", short_lived.get(&"greeting"));
    println!("The stale entry was swept by that read: len = {}", short_lived.len());

    // 3. Capacity-only configuration
    println!("\n♾️  Capacity-only");
    println!("----------------");

    let mut identity_style: BoundedTimedCache<i32, &str> =
        BoundedTimedCache::new(CacheParams::capacity_only(100));
    identity_style.put(1, "ada");
    tokio::time::sleep(Duration::from_millis(80)).await;
    println!("Entries never expire by time: {:?}", identity_style.get(&1));

    // 4. Sharing across tasks
    println!("\n🧵 SharedCache");
    println!("--------------");

    let shared: SharedCache<i32, String> = SharedCache::new(CacheParams::capacity_only(100));
    let mut handles = Vec::new();
    for task in 0..4 {
        let cache = shared.clone();
        handles.push(tokio::spawn(async move {
            cache.put(task, format!("from task {task}")).await;
        }));
    }
    for handle in handles {
        handle.await?;
    }

    println!("{} entries written by 4 tasks into one cache", shared.len().await);
    println!("  2 -> {:?}", shared.get(&2).await);

    println!("\n🎉 Done!");
    Ok(())
}
