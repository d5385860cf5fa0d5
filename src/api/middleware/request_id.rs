use axum::{
    extract::Request,
    http::{HeaderName, HeaderValue},
    middleware::Next,
    response::Response,
};
use uuid::Uuid;

static REQUEST_ID_HEADER: HeaderName = HeaderName::from_static("x-request-id");

/// Tags a request and its response with an `x-request-id` header,
/// keeping a caller supplied id when one is present.
pub async fn request_id_middleware(mut req: Request, next: Next) -> Response {
    let request_id = req
        .headers()
        .get(&REQUEST_ID_HEADER)
        .and_then(|value| value.to_str().ok())
        .map(str::to_owned)
        .unwrap_or_else(|| Uuid::new_v4().to_string());

    match HeaderValue::from_str(&request_id) {
        Ok(header_value) => {
            req.headers_mut()
                .insert(&REQUEST_ID_HEADER, header_value.clone());

            let mut response = next.run(req).await;
            response
                .headers_mut()
                .insert(&REQUEST_ID_HEADER, header_value);
            response
        }
        Err(_) => next.run(req).await,
    }
}
