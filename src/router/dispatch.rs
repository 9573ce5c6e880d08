use http::{header, HeaderValue, Method, Response, StatusCode};

use super::matcher::Params;

/// Outcome of resolving a request against the rule table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Dispatch<'a, T> {
    /// A rule matched the path and has metadata for the method.
    Matched { params: Params, metadata: &'a T },
    /// No rule matched the path.
    NoMatch,
    /// Preflight request for a path whose rule does not route `OPTIONS`.
    Options { allowed: Vec<Method> },
    /// A rule matched the path but not the method.
    MethodNotAllowed { allowed: Vec<Method> },
}

impl<'a, T> Dispatch<'a, T> {
    pub fn is_matched(&self) -> bool {
        matches!(self, Self::Matched { .. })
    }

    pub fn metadata(&self) -> Option<&'a T> {
        match self {
            Self::Matched { metadata, .. } => Some(*metadata),
            _ => None,
        }
    }

    pub fn params(&self) -> Option<&Params> {
        match self {
            Self::Matched { params, .. } => Some(params),
            _ => None,
        }
    }

    /// Methods to advertise in the `Allow` header.
    pub fn allowed(&self) -> Option<&[Method]> {
        match self {
            Self::Options { allowed } | Self::MethodNotAllowed { allowed } => {
                Some(allowed.as_slice())
            }
            _ => None,
        }
    }

    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Self::Options { .. } => Some(StatusCode::NO_CONTENT),
            Self::MethodNotAllowed { .. } => Some(StatusCode::METHOD_NOT_ALLOWED),
            _ => None,
        }
    }

    pub fn allow_header(&self) -> Option<HeaderValue> {
        let value = self
            .allowed()?
            .iter()
            .map(Method::as_str)
            .collect::<Vec<&str>>()
            .join(",");
        HeaderValue::from_str(&value).ok()
    }

    /// Build the empty response for the `OPTIONS` and 405 outcomes.
    pub fn into_response<B: Default>(self) -> Option<Response<B>> {
        let status = self.status()?;
        let mut response = Response::new(B::default());
        *response.status_mut() = status;
        if let Some(allow) = self.allow_header() {
            response.headers_mut().insert(header::ALLOW, allow);
        }
        Some(response)
    }
}
