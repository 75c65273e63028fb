use std::time::Duration;

/// Platform sleep: browser timers on wasm, tokio elsewhere.
pub async fn sleep(duration: Duration) {
    #[cfg(target_family = "wasm")]
    {
        let ms = u32::try_from(duration.as_millis()).unwrap_or(u32::MAX);
        gloo_timers::future::TimeoutFuture::new(ms).await;
    }
    #[cfg(not(target_family = "wasm"))]
    tokio::time::sleep(duration).await;
}
