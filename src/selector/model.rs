//! Selector descriptor: tag, optional id, ordered classes.

use std::fmt;

/// Tag used when a selector has no leading tag segment.
pub const DEFAULT_TAG: &str = "div";

/// Structured form of a `tag.class1.class2#id` selector string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selector {
    /// Element tag name. Never empty.
    pub tag: String,
    /// The last accepted `#id` segment, if any.
    pub id: Option<String>,
    /// Accepted `.class` segments in order of appearance.
    pub classes: Vec<String>,
}

impl Selector {
    /// Create a selector for `tag` with no id or classes.
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            id: None,
            classes: Vec::new(),
        }
    }

    /// Set the id (builder).
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Append a class (builder).
    pub fn with_class(mut self, class: impl Into<String>) -> Self {
        self.classes.push(class.into());
        self
    }

    /// The class list joined with single spaces, or `None` when there are no
    /// classes.
    pub fn class_name(&self) -> Option<String> {
        if self.classes.is_empty() {
            None
        } else {
            Some(self.classes.join(" "))
        }
    }
}

impl Default for Selector {
    fn default() -> Self {
        Self::new(DEFAULT_TAG)
    }
}

/// Canonical form: `tag.class1.class2#id`.
impl fmt::Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.tag)?;
        for class in &self.classes {
            write!(f, ".{class}")?;
        }
        if let Some(id) = &self.id {
            write!(f, "#{id}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_div() {
        let sel = Selector::default();
        assert_eq!(sel.tag, "div");
        assert!(sel.id.is_none());
        assert!(sel.classes.is_empty());
    }

    #[test]
    fn class_name_joins_in_order() {
        let sel = Selector::new("p").with_class("a").with_class("b");
        assert_eq!(sel.class_name().as_deref(), Some("a b"));
    }

    #[test]
    fn class_name_none_when_empty() {
        assert_eq!(Selector::new("p").class_name(), None);
    }

    #[test]
    fn display_canonical() {
        let sel = Selector::new("h1")
            .with_class("x")
            .with_class("y")
            .with_id("main");
        assert_eq!(sel.to_string(), "h1.x.y#main");
        assert_eq!(Selector::new("span").to_string(), "span");
    }
}
