use std::fmt::Display;

/// A piece of a compiled route pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    /// Literal text that must appear verbatim in the request path.
    Static(String),
    /// Named capture of a run of characters that contains no `/`.
    Dynamic(String),
}

impl Segment {
    pub fn value(&self) -> &str {
        match self {
            Self::Static(text) => text,
            Self::Dynamic(name) => name,
        }
    }

    pub fn is_dynamic(&self) -> bool {
        matches!(self, Self::Dynamic(_))
    }

    fn push(&mut self, c: char) {
        match self {
            Self::Static(value) | Self::Dynamic(value) => value.push(c),
        }
    }
}

impl Display for Segment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Static(text) => write!(f, "<StaticSegment {text}>"),
            Self::Dynamic(name) => write!(f, "<DynamicSegment {name}>"),
        }
    }
}

/// A route pattern compiled into its ordered segments.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Pattern {
    segments: Box<[Segment]>,
}

impl Pattern {
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }
}

impl From<&str> for Pattern {
    fn from(pattern: &str) -> Self {
        tokenize(pattern)
    }
}

impl From<Vec<Segment>> for Pattern {
    fn from(segments: Vec<Segment>) -> Self {
        Self {
            segments: segments.into_boxed_slice(),
        }
    }
}

impl FromIterator<Segment> for Pattern {
    fn from_iter<T: IntoIterator<Item = Segment>>(iter: T) -> Self {
        Self {
            segments: iter.into_iter().collect(),
        }
    }
}

impl Display for Pattern {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, segment) in self.segments.iter().enumerate() {
            if i > 0 {
                ",".fmt(f)?;
            }
            segment.fmt(f)?;
        }
        Ok(())
    }
}

fn is_ident(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// Compile a route pattern such as `/posts/:id` into segments.
///
/// Any string is accepted. A `:` opens a named capture which ends at the
/// first character that is not a letter, digit or underscore; that character
/// starts the following literal.
pub fn tokenize(pattern: &str) -> Pattern {
    let mut segments = Vec::new();
    let mut current: Option<Segment> = None;
    for c in pattern.chars() {
        if c == ':' {
            if let Some(segment) = current.take() {
                segments.push(segment);
            }
            current = Some(Segment::Dynamic(String::new()));
            continue;
        }
        current = match current.take() {
            None => Some(Segment::Static(c.to_string())),
            Some(segment @ Segment::Dynamic(_)) if !is_ident(c) => {
                segments.push(segment);
                Some(Segment::Static(c.to_string()))
            }
            Some(mut segment) => {
                segment.push(c);
                Some(segment)
            }
        };
    }
    segments.extend(current);
    Pattern::from(segments)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn s(text: &str) -> Segment {
        Segment::Static(text.to_string())
    }

    fn d(name: &str) -> Segment {
        Segment::Dynamic(name.to_string())
    }

    #[test]
    fn test_tokenize_static() {
        assert_eq!(tokenize("/").segments(), &[s("/")]);
        assert_eq!(tokenize("/posts").segments(), &[s("/posts")]);
        assert!(tokenize("").is_empty());
    }

    #[test]
    fn test_tokenize_dynamic() {
        assert_eq!(tokenize("/:anything").segments(), &[s("/"), d("anything")]);
        assert_eq!(tokenize("/posts/:id").segments(), &[s("/posts/"), d("id")]);
        assert_eq!(
            tokenize("/posts/:id/tags").segments(),
            &[s("/posts/"), d("id"), s("/tags")]
        );
        assert_eq!(tokenize(":id").segments(), &[d("id")]);
    }

    #[test]
    fn test_tokenize_delimited_captures() {
        assert_eq!(
            tokenize("/:namespace/:hash.json").segments(),
            &[s("/"), d("namespace"), s("/"), d("hash"), s(".json")]
        );
        assert_eq!(
            tokenize("/:namespace/:hash.:ext").segments(),
            &[s("/"), d("namespace"), s("/"), d("hash"), s("."), d("ext")]
        );
    }

    #[test]
    fn test_tokenize_back_to_back_colons() {
        // The first capture closes with an empty name.
        assert_eq!(tokenize("/::id").segments(), &[s("/"), d(""), d("id")]);
    }

    #[test]
    fn test_display() {
        assert_eq!(
            tokenize("/posts/:id/tags").to_string(),
            "<StaticSegment /posts/>,<DynamicSegment id>,<StaticSegment /tags>"
        );
        assert_eq!(tokenize("").to_string(), "");
    }
}
