use std::fmt;

use smol_str::SmolStr;

/// A single Java identifier token. Equality is string equality.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Identifier(SmolStr);

impl Identifier {
    #[inline]
    pub fn new(text: impl Into<SmolStr>) -> Self {
        Self(text.into())
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Debug for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Identifier").field(&self.0.as_str()).finish()
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<&str> for Identifier {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for Identifier {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}

/// An ordered, non-empty sequence of identifier segments, e.g.
/// `java.util.List`. Selectors are immutable; all combinators return a new
/// value.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Selector(Vec<Identifier>);

impl Selector {
    /// Build a selector from its segments. Panics on an empty list: an empty
    /// selector has no rightmost segment and never occurs in valid input.
    pub fn of<I, S>(segments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<Identifier>,
    {
        let segments: Vec<Identifier> = segments.into_iter().map(Into::into).collect();
        assert!(!segments.is_empty(), "selector must have at least one segment");
        Self(segments)
    }

    pub fn from_dotted(path: &str) -> Self {
        Self::of(path.split('.'))
    }

    pub fn single(identifier: Identifier) -> Self {
        Self(vec![identifier])
    }

    pub fn segments(&self) -> &[Identifier] {
        &self.0
    }

    pub fn size(&self) -> usize {
        self.0.len()
    }

    pub fn rightmost(&self) -> &Identifier {
        self.0.last().expect("selector is never empty")
    }

    pub fn leftmost(&self) -> &Identifier {
        self.0.first().expect("selector is never empty")
    }

    /// Concatenation: `a.b` combined with `C.D` is `a.b.C.D`.
    pub fn combine(&self, other: &Selector) -> Selector {
        let mut segments = self.0.clone();
        segments.extend(other.0.iter().cloned());
        Selector(segments)
    }

    /// Everything but the rightmost segment, or `None` for a single-segment
    /// selector. For an import selector this is the package (or enclosing
    /// class) path.
    pub fn qualifier(&self) -> Option<Selector> {
        if self.0.len() < 2 {
            return None;
        }
        Some(Selector(self.0[..self.0.len() - 1].to_vec()))
    }

    pub fn starts_with(&self, prefix: &Selector) -> bool {
        self.0.len() >= prefix.0.len() && self.0[..prefix.0.len()] == prefix.0[..]
    }

    /// Number of leading segments shared with `other`.
    pub fn common_prefix_len(&self, other: &Selector) -> usize {
        self.0
            .iter()
            .zip(other.0.iter())
            .take_while(|(a, b)| a == b)
            .count()
    }

    pub fn to_dotted(&self) -> String {
        self.0
            .iter()
            .map(|s| s.as_str())
            .collect::<Vec<_>>()
            .join(".")
    }
}

impl fmt::Debug for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Selector").field(&self.to_dotted()).finish()
    }
}

impl fmt::Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_dotted())
    }
}
