// json logs without ansi codes, target or timestamps, the lambda runtime adds ingestion time
pub fn setup_tracing(level: tracing::Level) {
    let _ = tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .with_ansi(false)
        .without_time()
        .json()
        .try_init();
}

#[cfg(test)]
mod tests {
    use crate::utils::logs::setup_tracing;

    #[tokio::test]
    async fn test_should_setup_tracing_twice() {
        setup_tracing(tracing::Level::DEBUG);
        setup_tracing(tracing::Level::INFO);
        tracing::info!("tracing ready");
    }
}
