use std::collections::HashMap;

use super::segment::{Pattern, Segment};

/// Values captured by the dynamic segments of a pattern, keyed by name.
pub type Params = HashMap<String, String>;

pub trait PathMatcher {
    /// Match a request path, returning the captured parameters on success.
    fn matches(&self, path: &str) -> Option<Params>;
}

impl PathMatcher for Pattern {
    fn matches(&self, path: &str) -> Option<Params> {
        let mut params = Params::new();
        let mut cursor = 0;
        let mut rest = self.segments();
        if let Some(Segment::Static(prefix)) = rest.first() {
            if !path.starts_with(prefix.as_str()) {
                return None;
            }
            cursor = prefix.len();
            rest = &rest[1..];
        }
        // Remaining segments come in (capture, delimiter) pairs, the last
        // capture possibly without a delimiter.
        for pair in rest.chunks(2) {
            let value = match pair.get(1) {
                Some(delimiter) => {
                    let index = cursor + path[cursor..].find(delimiter.value())?;
                    let value = &path[cursor..index];
                    cursor = index + delimiter.value().len();
                    value
                }
                None => {
                    let value = &path[cursor..];
                    cursor = path.len();
                    value
                }
            };
            if value.contains('/') {
                return None;
            }
            params.insert(pair[0].value().to_string(), value.to_string());
        }
        if cursor < path.len() {
            return None;
        }
        Some(params)
    }
}
