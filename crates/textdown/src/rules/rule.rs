//! Rendering strategies an element tag can be mapped to.

/// How an element is turned into text.
///
/// The set is closed: every tag resolves to exactly one of these, with
/// [`Rule::Transparent`] as the fallback for anything unrecognised.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rule {
    /// Uppercased content framed by a rule above and below (`h1`).
    Banner(char),
    /// Uppercased content with a rule underneath (`h2`, `h3`).
    Underlined(char),
    /// Uppercased content, no decoration (`h4`).
    Uppercase,
    /// Content followed by a blank line (`p`, `div`, lists, `h5`..`h9`).
    Block,
    /// Tab-indented content followed by a blank line (`blockquote`, `pre`).
    Indented,
    /// Bullet-prefixed content followed by a newline (`li`).
    ListItem,
    /// Content followed by a newline (`dd`, `dt`).
    Line,
    /// Label/URL heuristics (`a`).
    Link,
    /// A bare newline (`br`).
    LineBreak,
    /// A dashed rule followed by a blank line (`hr`).
    HorizontalRule,
    /// Nothing, and the subtree is never visited (`script`, `style`, ...).
    Skip,
    /// Children only; the tag itself is stripped.
    Transparent,
}

impl Rule {
    /// Text appended after the rendering unless the element is the last
    /// element child of a block-level parent.
    pub fn trailer(self) -> Option<&'static str> {
        match self {
            Rule::Banner(_)
            | Rule::Underlined(_)
            | Rule::Uppercase
            | Rule::Block
            | Rule::Indented
            | Rule::HorizontalRule => Some("\n\n"),
            Rule::ListItem | Rule::Line => Some("\n"),
            Rule::Link | Rule::LineBreak | Rule::Skip | Rule::Transparent => None,
        }
    }

    /// Whether the element's children are rendered at all.
    pub fn visits_children(self) -> bool {
        !matches!(self, Rule::Skip | Rule::LineBreak | Rule::HorizontalRule)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trailers() {
        assert_eq!(Rule::Block.trailer(), Some("\n\n"));
        assert_eq!(Rule::Banner('*').trailer(), Some("\n\n"));
        assert_eq!(Rule::HorizontalRule.trailer(), Some("\n\n"));
        assert_eq!(Rule::ListItem.trailer(), Some("\n"));
        assert_eq!(Rule::Line.trailer(), Some("\n"));
        assert_eq!(Rule::LineBreak.trailer(), None);
        assert_eq!(Rule::Transparent.trailer(), None);
    }

    #[test]
    fn test_skip_does_not_visit_children() {
        assert!(!Rule::Skip.visits_children());
        assert!(Rule::Transparent.visits_children());
        assert!(Rule::Link.visits_children());
    }
}
