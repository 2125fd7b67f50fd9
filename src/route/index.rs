pub async fn index() -> &'static str {
    "A Test Server!"
}
