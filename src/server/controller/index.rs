/// Plain-text greeting served at the root path, usable as a liveness check.
pub async fn welcome() -> &'static str {
    "Welcome to the visitor counter API"
}
