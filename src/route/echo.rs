use axum::extract::Request;
use http_body_util::BodyExt;

/// Reflects the request method and body text back to the caller.
///
/// A body read failure is swallowed and treated as an empty body, and
/// non-UTF-8 bytes are replaced lossily. Consuming the whole [`Request`]
/// ties the body stream's lifetime to this handler, so it is released no
/// matter how the read went.
pub async fn echo(req: Request) -> String {
    let method = req.method().clone();

    let bytes = req
        .into_body()
        .collect()
        .await
        .map(|collected| collected.to_bytes())
        .unwrap_or_default();

    let text = String::from_utf8_lossy(&bytes);

    format!("Your request ({method}): {text}")
}
