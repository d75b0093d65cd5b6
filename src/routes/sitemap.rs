use actix_web::HttpResponse;
use serde::Serialize;

#[derive(Clone, Copy, Debug, Serialize)]
pub struct Endpoint {
    pub method: &'static str,
    pub path: &'static str,
}

pub const ENDPOINTS: &[Endpoint] = &[
    Endpoint { method: "GET", path: "/" },
    Endpoint { method: "GET", path: "/people" },
    Endpoint { method: "GET", path: "/people/{id}" },
    Endpoint { method: "GET", path: "/planets" },
    Endpoint { method: "GET", path: "/planets/{id}" },
    Endpoint { method: "GET", path: "/users" },
    Endpoint { method: "GET", path: "/users/favorites?user_id={id}" },
    Endpoint { method: "POST", path: "/favorite/planet/{id}?user_id={id}" },
    Endpoint { method: "DELETE", path: "/favorite/planet/{id}?user_id={id}" },
    Endpoint { method: "POST", path: "/favorite/people/{id}?user_id={id}" },
    Endpoint { method: "DELETE", path: "/favorite/people/{id}?user_id={id}" },
];

impl Endpoint {
    /// Matches a request path, ignoring the query hint; `{id}` segments
    /// match digits.
    pub fn matches(&self, path: &str) -> bool {
        let pattern = self.path.split('?').next().unwrap_or(self.path);
        let mut want = pattern.split('/');
        let mut got = path.split('/');
        loop {
            match (want.next(), got.next()) {
                (None, None) => return true,
                (Some("{id}"), Some(seg)) => {
                    if seg.is_empty() || !seg.bytes().all(|b| b.is_ascii_digit()) {
                        return false;
                    }
                }
                (Some(w), Some(g)) if w == g => {}
                _ => return false,
            }
        }
    }
}

/// Methods served at `path`, in endpoint map order.
pub fn allowed_methods(path: &str) -> Vec<&'static str> {
    ENDPOINTS
        .iter()
        .filter(|endpoint| endpoint.matches(path))
        .map(|endpoint| endpoint.method)
        .collect()
}

#[derive(Serialize)]
struct SitemapDto {
    endpoints: &'static [Endpoint],
}

pub async fn sitemap() -> HttpResponse {
    HttpResponse::Ok().json(SitemapDto { endpoints: ENDPOINTS })
}
