/// Read-through caching around an async computation.
///
/// Looks the key up first. On a hit the cached value is returned. On a miss,
/// or when the cache itself fails, the block is awaited, its value is queued
/// for a background write with the given TTL and then returned. A broken cache
/// therefore degrades to an uncached call instead of an error.
///
/// # Arguments
/// * `$cache`: value exposing `get_from_cache` and `set_in_background`.
/// * `$key`: the `CacheKey` to read and write.
/// * `$ttl`: time-to-live in seconds.
/// * `$block`: future producing `AppResult<T>` on a miss.
///
/// # Example
/// ```rust,ignore
/// let reading: WeatherReading = cached!(cache, CacheKey::weather(&coords), 600, async move {
///     fetch_from_api(coords).await
/// })?;
/// ```
#[macro_export]
macro_rules! cached {
    ($cache:expr, $key:expr, $ttl:expr, $block:expr) => {{
        let key = $key;
        match $cache.get_from_cache(&key).await {
            Ok(Some(cached)) => Ok(cached),
            lookup => {
                if let Err(e) = lookup {
                    tracing::warn!(error = %e, key = %key, "Cache lookup failed, bypassing cache");
                }
                match $block.await {
                    Ok(value) => {
                        $cache.set_in_background(&key, &value, $ttl);
                        Ok(value)
                    }
                    Err(e) => Err(e),
                }
            }
        }
    }};
}
