use http::Method;

use crate::{Error, Result};

pub use builder::RouterBuilder;
pub use dispatch::Dispatch;
pub use matcher::{Params, PathMatcher};
pub use rule::Rule;
pub use segment::{tokenize, Pattern, Segment};
pub use table::Router;

/// Generates the per-verb shortcuts forwarding to `route`.
macro_rules! method_shortcuts {
    (@fn by_ref $name:ident $method:ident) => {
        #[doc = concat!("Route a `", stringify!($method), "` request.")]
        pub fn $name(&mut self, pattern: impl Into<String>, metadata: T) -> &mut Self {
            self.route(http::Method::$method, pattern, metadata)
        }
    };
    (@fn by_value $name:ident $method:ident) => {
        #[doc = concat!("Route a `", stringify!($method), "` request.")]
        pub fn $name(self, pattern: impl Into<String>, metadata: T) -> Self {
            self.route(http::Method::$method, pattern, metadata)
        }
    };
    ($kind:ident) => {
        method_shortcuts!(@fn $kind options OPTIONS);
        method_shortcuts!(@fn $kind head HEAD);
        method_shortcuts!(@fn $kind get GET);
        method_shortcuts!(@fn $kind post POST);
        method_shortcuts!(@fn $kind put PUT);
        method_shortcuts!(@fn $kind patch PATCH);
        method_shortcuts!(@fn $kind delete DELETE);
    };
}

mod builder;
mod dispatch;
mod matcher;
mod rule;
mod segment;
mod table;

/// Parse a method name the way a request adapter sees it, upper-casing it first.
pub fn parse_method(method: &str) -> Result<Method> {
    Method::from_bytes(method.to_ascii_uppercase().as_bytes())
        .map_err(|_| Error::invalid_method(method))
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_parse_method() {
        assert_eq!(parse_method("get"), Ok(Method::GET));
        assert_eq!(parse_method("Delete"), Ok(Method::DELETE));
        assert_eq!(parse_method("purge").unwrap().as_str(), "PURGE");
        assert_eq!(parse_method("GE T"), Err(Error::invalid_method("GE T")));
        assert_eq!(parse_method(""), Err(Error::invalid_method("")));
    }
}
