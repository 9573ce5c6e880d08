use http::Method;

use super::table::Router;
use crate::Result;

/// Chained registration, finished with [RouterBuilder::build].
#[derive(Debug, Clone)]
pub struct RouterBuilder<T> {
    router: Router<T>,
}

impl<T> Default for RouterBuilder<T> {
    fn default() -> Self {
        Self {
            router: Router::new(),
        }
    }
}

impl<T> RouterBuilder<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn route(mut self, method: Method, pattern: impl Into<String>, metadata: T) -> Self {
        self.router.route(method, pattern, metadata);
        self
    }

    pub fn route_str(mut self, method: &str, pattern: impl Into<String>, metadata: T) -> Result<Self> {
        self.router.route_str(method, pattern, metadata)?;
        Ok(self)
    }

    pub fn routes<I>(mut self, pattern: impl Into<String>, methods: I) -> Self
    where
        I: IntoIterator<Item = (Method, T)>,
    {
        self.router.routes(pattern, methods);
        self
    }

    method_shortcuts!(by_value);

    pub fn build(self) -> Router<T> {
        self.router
    }
}

impl<T, P: Into<String>> FromIterator<(Method, P, T)> for RouterBuilder<T> {
    fn from_iter<I: IntoIterator<Item = (Method, P, T)>>(iter: I) -> Self {
        iter.into_iter()
            .fold(Self::new(), |builder, (method, pattern, metadata)| {
                builder.route(method, pattern, metadata)
            })
    }
}

impl<T> From<RouterBuilder<T>> for Router<T> {
    fn from(builder: RouterBuilder<T>) -> Self {
        builder.build()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_build() {
        let router = RouterBuilder::new()
            .get("/", "root")
            .post("/", "create")
            .head("/", "head")
            .put("/:id", "put")
            .patch("/:id", "patch")
            .delete("/:id", "delete")
            .options("/:id", "options")
            .build();
        assert_eq!(router.to_string(), "/ GET,POST,HEAD\n/:id PUT,PATCH,DELETE,OPTIONS");
    }

    #[test]
    fn test_batch_and_named_methods() {
        let router = RouterBuilder::new()
            .routes("/posts", [(Method::GET, 1), (Method::POST, 2)])
            .route_str("delete", "/posts/:id", 3)
            .unwrap()
            .build();
        assert_eq!(router.to_string(), "/posts GET,POST\n/posts/:id DELETE");
        assert!(RouterBuilder::<()>::new().route_str("", "/", ()).is_err());
    }

    #[test]
    fn test_from_iter() {
        let router: Router<_> = [
            (Method::GET, "/a", 'a'),
            (Method::GET, "/b", 'b'),
            (Method::PUT, "/a", 'c'),
        ]
        .into_iter()
        .collect::<RouterBuilder<_>>()
        .into();
        assert_eq!(router.len(), 2);
        assert_eq!(router.dispatch(&Method::PUT, "/a").metadata(), Some(&'c'));
    }
}
