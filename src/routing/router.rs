//! HTTP router

use crate::http::{Request, Response};
use matchit::Router as MatchitRouter;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

/// Type alias for route handlers
pub type BoxedHandler =
    Box<dyn Fn(Request) -> Pin<Box<dyn Future<Output = Response> + Send>> + Send + Sync>;

/// HTTP router matching method + path to a handler
pub struct Router {
    get_routes: MatchitRouter<Arc<BoxedHandler>>,
    post_routes: MatchitRouter<Arc<BoxedHandler>>,
}

impl Router {
    pub fn new() -> Self {
        Self {
            get_routes: MatchitRouter::new(),
            post_routes: MatchitRouter::new(),
        }
    }

    /// Register a GET route
    pub fn get<H, Fut>(mut self, path: &str, handler: H) -> Self
    where
        H: Fn(Request) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Response> + Send + 'static,
    {
        let handler: BoxedHandler = Box::new(move |req| Box::pin(handler(req)));
        self.get_routes.insert(path, Arc::new(handler)).ok();
        self
    }

    /// Register a POST route
    pub fn post<H, Fut>(mut self, path: &str, handler: H) -> Self
    where
        H: Fn(Request) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Response> + Send + 'static,
    {
        let handler: BoxedHandler = Box::new(move |req| Box::pin(handler(req)));
        self.post_routes.insert(path, Arc::new(handler)).ok();
        self
    }

    /// Match a request to its handler
    pub fn match_route(&self, method: &hyper::Method, path: &str) -> Option<Arc<BoxedHandler>> {
        let routes = match *method {
            hyper::Method::GET => &self.get_routes,
            hyper::Method::POST => &self.post_routes,
            _ => return None,
        };

        routes.at(path).ok().map(|matched| matched.value.clone())
    }
}

impl Default for Router {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http::HttpResponse;

    fn sample_router() -> Router {
        Router::new()
            .get("/", |_req| async { HttpResponse::text("index").ok() })
            .post("/todos", |_req| async { HttpResponse::text("store").ok() })
    }

    #[test]
    fn test_match_registered_routes() {
        let router = sample_router();
        assert!(router.match_route(&hyper::Method::GET, "/").is_some());
        assert!(router.match_route(&hyper::Method::POST, "/todos").is_some());
    }

    #[test]
    fn test_no_match_for_unknown_path_or_method() {
        let router = sample_router();
        assert!(router.match_route(&hyper::Method::GET, "/missing").is_none());
        assert!(router.match_route(&hyper::Method::POST, "/").is_none());
        assert!(router.match_route(&hyper::Method::DELETE, "/todos").is_none());
    }
}
