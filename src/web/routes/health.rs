pub async fn health_handler() -> &'static str {
    "healthy"
}
