/// Classification of a single input line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineClass {
    /// Always emitted, never sampled
    Header,
    /// Candidate for the reservoir
    Data,
}

/// Prefix rule used to recognize header lines
///
/// An absent or empty prefix disables header recognition, so every line is
/// classified as [`LineClass::Data`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HeaderRule {
    prefix: Option<Vec<u8>>,
}

impl HeaderRule {
    /// Build a rule from an optional prefix
    pub fn new<P: AsRef<[u8]>>(prefix: Option<P>) -> Self {
        let prefix = prefix
            .map(|p| p.as_ref().to_vec())
            .filter(|p| !p.is_empty());
        HeaderRule { prefix }
    }

    /// Rule that treats every line as data
    pub fn none() -> Self {
        HeaderRule::default()
    }

    /// Whether this rule can ever produce a header
    pub fn is_enabled(&self) -> bool {
        self.prefix.is_some()
    }

    /// Configured prefix, if header recognition is enabled
    pub fn prefix(&self) -> Option<&[u8]> {
        self.prefix.as_deref()
    }

    /// Classify a raw line (terminator included) by exact byte-prefix match
    #[inline]
    pub fn classify(&self, line: &[u8]) -> LineClass {
        match &self.prefix {
            Some(prefix) if line.starts_with(prefix) => LineClass::Header,
            _ => LineClass::Data,
        }
    }
}
