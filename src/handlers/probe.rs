pub const PROBE_MESSAGE: &str = "MySQL підключення працює!";

/// GET / -> fixed confirmation; reaching it means the pool was built at startup.
pub async fn home() -> &'static str {
    PROBE_MESSAGE
}
