use http::Method;

use super::{
    matcher::{Params, PathMatcher},
    segment::{tokenize, Pattern},
};

/// A registered pattern together with the metadata attached per method.
#[derive(Debug, Clone)]
pub struct Rule<T> {
    pattern: String,
    compiled: Pattern,
    methods: Vec<(Method, T)>,
}

impl<T> Rule<T> {
    pub fn new(pattern: impl Into<String>) -> Self {
        let pattern = pattern.into();
        let compiled = tokenize(&pattern);
        Self {
            pattern,
            compiled,
            methods: Vec::new(),
        }
    }

    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    pub fn compiled(&self) -> &Pattern {
        &self.compiled
    }

    /// Attach `metadata` to `method`, returning the metadata it replaced.
    /// A replaced method keeps its original position.
    pub fn insert(&mut self, method: Method, metadata: T) -> Option<T> {
        match self.methods.iter_mut().find(|(m, _)| *m == method) {
            Some((_, current)) => Some(std::mem::replace(current, metadata)),
            None => {
                self.methods.push((method, metadata));
                None
            }
        }
    }

    pub fn get(&self, method: &Method) -> Option<&T> {
        self.methods
            .iter()
            .find(|(m, _)| m == method)
            .map(|(_, metadata)| metadata)
    }

    /// Registered methods in registration order.
    pub fn methods(&self) -> impl Iterator<Item = &Method> {
        self.methods.iter().map(|(method, _)| method)
    }

    /// `OPTIONS` followed by the registered methods, without duplicates.
    pub fn allowed_methods(&self) -> Vec<Method> {
        let mut allowed = vec![Method::OPTIONS];
        for method in self.methods() {
            if !allowed.contains(method) {
                allowed.push(method.clone());
            }
        }
        allowed
    }

    pub fn matches(&self, path: &str) -> Option<Params> {
        self.compiled.matches(path)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_insert_keeps_position() {
        let mut rule = Rule::new("/posts/:id");
        assert_eq!(rule.insert(Method::POST, 1), None);
        assert_eq!(rule.insert(Method::DELETE, 2), None);
        assert_eq!(rule.insert(Method::POST, 3), Some(1));
        assert_eq!(
            rule.methods().cloned().collect::<Vec<_>>(),
            vec![Method::POST, Method::DELETE]
        );
        assert_eq!(rule.get(&Method::POST), Some(&3));
        assert_eq!(rule.get(&Method::GET), None);
    }

    #[test]
    fn test_allowed_methods() {
        let mut rule = Rule::new("/");
        assert_eq!(rule.allowed_methods(), vec![Method::OPTIONS]);
        rule.insert(Method::GET, ());
        rule.insert(Method::OPTIONS, ());
        rule.insert(Method::PUT, ());
        assert_eq!(
            rule.allowed_methods(),
            vec![Method::OPTIONS, Method::GET, Method::PUT]
        );
    }

    #[test]
    fn test_matches() {
        let rule = Rule::<()>::new("/posts/:id/tags");
        assert_eq!(rule.pattern(), "/posts/:id/tags");
        assert_eq!(rule.compiled().len(), 3);
        assert_eq!(
            rule.matches("/posts/9/tags").and_then(|params| params.get("id").cloned()),
            Some("9".to_string())
        );
        assert!(rule.matches("/posts/9").is_none());
    }
}
