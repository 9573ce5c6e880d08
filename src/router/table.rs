use std::{collections::HashMap, fmt::Display};

use essentials::debug;
use http::Method;

use super::{dispatch::Dispatch, parse_method, rule::Rule};
use crate::Result;

/// Rules in registration order, scanned front to back at dispatch time.
///
/// The first rule whose pattern matches the path decides the outcome, even
/// when a later rule would also match and routes the requested method.
#[derive(Debug, Clone)]
pub struct Router<T> {
    rules: Vec<Rule<T>>,
    index: HashMap<String, usize>,
}

impl<T> Default for Router<T> {
    fn default() -> Self {
        Self {
            rules: Vec::new(),
            index: HashMap::new(),
        }
    }
}

impl<T> Router<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach `metadata` to `method` on `pattern`.
    ///
    /// A pattern registered earlier keeps its rule and position; only its
    /// method entry is inserted or replaced.
    pub fn route(&mut self, method: Method, pattern: impl Into<String>, metadata: T) -> &mut Self {
        let pattern = pattern.into();
        let id = match self.index.get(&pattern) {
            Some(id) => *id,
            None => {
                let id = self.rules.len();
                let rule = Rule::new(pattern.clone());
                debug!(id = id, pattern = %pattern, segments = %rule.compiled(), "Compiled route");
                self.rules.push(rule);
                self.index.insert(pattern, id);
                id
            }
        };
        let rule = &mut self.rules[id];
        if rule.insert(method.clone(), metadata).is_some() {
            debug!(pattern = rule.pattern(), method = %method, "Replaced route handler");
        }
        self
    }

    /// Same as [Router::route], with the method given as a name in any case.
    pub fn route_str(
        &mut self,
        method: &str,
        pattern: impl Into<String>,
        metadata: T,
    ) -> Result<&mut Self> {
        Ok(self.route(parse_method(method)?, pattern, metadata))
    }

    /// Register several methods on one pattern.
    pub fn routes<I>(&mut self, pattern: impl Into<String>, methods: I) -> &mut Self
    where
        I: IntoIterator<Item = (Method, T)>,
    {
        let pattern = pattern.into();
        for (method, metadata) in methods {
            self.route(method, pattern.as_str(), metadata);
        }
        self
    }

    method_shortcuts!(by_ref);

    /// Resolve a request against the rules.
    pub fn dispatch(&self, method: &Method, path: &str) -> Dispatch<'_, T> {
        for rule in &self.rules {
            let Some(params) = rule.matches(path) else {
                continue;
            };
            let dispatch = match rule.get(method) {
                Some(metadata) => Dispatch::Matched { params, metadata },
                None if method == Method::OPTIONS => Dispatch::Options {
                    allowed: std::iter::once(Method::OPTIONS)
                        .chain(rule.methods().cloned())
                        .collect(),
                },
                None => Dispatch::MethodNotAllowed {
                    allowed: rule.allowed_methods(),
                },
            };
            debug!(
                method = %method,
                path = path,
                pattern = rule.pattern(),
                status = ?dispatch.status(),
                "Dispatched request"
            );
            return dispatch;
        }
        debug!(method = %method, path = path, "No route matched");
        Dispatch::NoMatch
    }

    /// Same as [Router::dispatch], with the method given as a name in any case.
    pub fn dispatch_str(&self, method: &str, path: &str) -> Result<Dispatch<'_, T>> {
        Ok(self.dispatch(&parse_method(method)?, path))
    }

    pub fn get_rule(&self, pattern: &str) -> Option<&Rule<T>> {
        self.index.get(pattern).map(|id| &self.rules[*id])
    }

    pub fn rules(&self) -> impl Iterator<Item = &Rule<T>> {
        self.rules.iter()
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

impl<T> Display for Router<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, rule) in self.rules.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            let methods = rule.methods().map(Method::as_str).collect::<Vec<_>>();
            write!(f, "{} {}", rule.pattern(), methods.join(","))?;
        }
        Ok(())
    }
}
