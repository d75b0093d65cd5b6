use actix_web::{
    body::{BoxBody, MessageBody},
    dev::{ServiceRequest, ServiceResponse},
    http::header::{self, HeaderMap, HeaderValue},
    http::Method,
    middleware::Next,
    Error, HttpResponse,
};

use crate::routes::sitemap::allowed_methods;

/// Any origin may call the API. The advertised methods are the ones the
/// endpoint map serves at the request path; preflights for paths outside
/// the map fall through to the router.
pub async fn cors_handler<B>(
    req: ServiceRequest,
    next: Next<B>,
) -> Result<ServiceResponse<BoxBody>, Error>
where
    B: MessageBody + 'static,
{
    let methods = allowed_methods(req.path());

    let mut res = if req.method() == Method::OPTIONS && !methods.is_empty() {
        req.into_response(HttpResponse::NoContent().finish())
    } else {
        next.call(req).await?.map_into_boxed_body()
    };

    apply_cors_headers(res.headers_mut(), &methods);
    Ok(res)
}

fn apply_cors_headers(headers: &mut HeaderMap, methods: &[&str]) {
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_ORIGIN,
        HeaderValue::from_static("*"),
    );
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_HEADERS,
        HeaderValue::from_static("Content-Type, Accept"),
    );
    if methods.is_empty() {
        return;
    }

    let mut allow = methods.join(", ");
    allow.push_str(", OPTIONS");
    if let Ok(value) = HeaderValue::from_str(&allow) {
        headers.insert(header::ACCESS_CONTROL_ALLOW_METHODS, value.clone());
        headers.insert(header::ALLOW, value);
    }
}
