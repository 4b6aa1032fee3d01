//! # Pagination Link Relations
//!
//! Computes which sibling pages exist for the current window and renders them as an
//! RFC 5988 `Link` value:
//!
//! ```text
//! <http://api.test/items?range=10-10>; rel="self", <http://api.test/items?range=0-10>; rel="first", ...
//! ```
//!
//! Relation existence ([`PageDescriptor`]) and URL production ([`LinkRewriter`]) are
//! kept apart so the URL strategy can change without touching the boundary rules.

use std::{fmt, sync::Arc};

use crate::models::RangeRequest;

/// Link relation types emitted for a paginated collection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Relation {
    SelfLink,
    First,
    Prev,
    Next,
    Last,
}

impl Relation {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::SelfLink => "self",
            Self::First => "first",
            Self::Prev => "prev",
            Self::Next => "next",
            Self::Last => "last",
        }
    }
}

impl fmt::Display for Relation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Target window of a relation.
///
/// `start` is signed: `last` is placed at `count - max_range`, which is negative
/// for collections smaller than one window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageWindow {
    pub start: i128,
    pub end: u64,
}

impl fmt::Display for PageWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.start, self.end)
    }
}

/// Sibling pages of the current window. `None` means the relation is omitted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PageDescriptor {
    pub first: Option<PageWindow>,
    pub prev: Option<PageWindow>,
    pub next: Option<PageWindow>,
    pub last: Option<PageWindow>,
}

impl PageDescriptor {
    /// Work out the sibling windows for `range` in a collection of `count` items.
    ///
    /// Every target window has size `max_range`. The rules are applied exactly:
    ///
    /// | relation | present iff | target start |
    /// |---|---|---|
    /// | `first` | `start != 0` | `0` |
    /// | `prev` | `start - max > 0` | `start - max` |
    /// | `next` | `start + max > start && start + max < count` | `start + max` |
    /// | `last` | `count - max != start` | `count - max` |
    ///
    /// `prev` is therefore absent when `start == max`, even though page `0` exists.
    #[must_use]
    pub fn compute(range: RangeRequest, max_range: u64, count: u64) -> Self {
        let start = i128::from(range.start);
        let max = i128::from(max_range);
        let count = i128::from(count);
        let window = |start: i128| PageWindow {
            start,
            end: max_range,
        };

        let first = (start != 0).then(|| window(0));
        let prev = (start - max > 0).then(|| window(start - max));
        // `start + max > start` only fails for max_range == 0; kept as an explicit guard
        let next = (start + max > start && start + max < count).then(|| window(start + max));
        let last = (count - max != start).then(|| window(count - max));

        Self {
            first,
            prev,
            next,
            last,
        }
    }

    /// Present relations in emission order (first, prev, next, last)
    pub fn relations(&self) -> impl Iterator<Item = (Relation, PageWindow)> + '_ {
        [
            (Relation::First, self.first),
            (Relation::Prev, self.prev),
            (Relation::Next, self.next),
            (Relation::Last, self.last),
        ]
        .into_iter()
        .filter_map(|(relation, window)| window.map(|window| (relation, window)))
    }
}

/// Strategy turning the current URL into the URL of a sibling window
pub trait LinkRewriter: Send + Sync {
    fn rewrite(&self, host_url: &str, current: RangeRequest, target: PageWindow) -> String;
}

impl<R: LinkRewriter + ?Sized> LinkRewriter for Arc<R> {
    fn rewrite(&self, host_url: &str, current: RangeRequest, target: PageWindow) -> String {
        (**self).rewrite(host_url, current, target)
    }
}

/// Replaces the literal `range={start}-{end}` of the current request.
///
/// This is plain substring replacement over the whole URL. If the request spelled its
/// range any other way (JSON form, percent-encoding, different parameter name) nothing
/// matches and the sibling link falls back to the unmodified current URL.
#[derive(Debug, Clone, Copy, Default)]
pub struct LiteralRangeRewriter;

impl LinkRewriter for LiteralRangeRewriter {
    fn rewrite(&self, host_url: &str, current: RangeRequest, target: PageWindow) -> String {
        host_url.replace(&format!("range={current}"), &format!("range={target}"))
    }
}

/// Render one `<url>; rel="name"` entry
#[must_use]
pub fn link_entry(url: &str, relation: Relation) -> String {
    format!("<{url}>; rel=\"{relation}\"")
}

/// Build the full `Link` value: `self` followed by every present sibling relation.
#[must_use]
pub fn build_link_value<R: LinkRewriter + ?Sized>(
    rewriter: &R,
    host_url: &str,
    range: RangeRequest,
    pages: &PageDescriptor,
) -> String {
    std::iter::once(link_entry(host_url, Relation::SelfLink))
        .chain(pages.relations().map(|(relation, window)| {
            link_entry(&rewriter.rewrite(host_url, range, window), relation)
        }))
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    const URL: &str = "http://api.test/items?range=10-10";

    fn window(start: i128, end: u64) -> Option<PageWindow> {
        Some(PageWindow { start, end })
    }

    // ============================================================================
    // Relation existence
    // ============================================================================

    #[test]
    fn test_middle_page_at_one_window() {
        let pages = PageDescriptor::compute(RangeRequest::new(10, 10), 10, 35);
        assert_eq!(pages.first, window(0, 10));
        assert_eq!(pages.prev, None, "start - max == 0 excludes prev");
        assert_eq!(pages.next, window(20, 10));
        assert_eq!(pages.last, window(25, 10));
    }

    #[test]
    fn test_collection_smaller_than_window() {
        let pages = PageDescriptor::compute(RangeRequest::new(0, 10), 10, 5);
        assert_eq!(pages.first, None);
        assert_eq!(pages.prev, None);
        assert_eq!(pages.next, None);
        assert_eq!(pages.last, window(-5, 10));
    }

    #[test]
    fn test_deep_page_has_prev() {
        let pages = PageDescriptor::compute(RangeRequest::new(30, 10), 10, 100);
        assert_eq!(pages.prev, window(20, 10));
        assert_eq!(pages.next, window(40, 10));
    }

    #[test]
    fn test_on_last_page() {
        let pages = PageDescriptor::compute(RangeRequest::new(25, 10), 10, 35);
        assert_eq!(pages.last, None);
        assert_eq!(pages.next, None, "35 is not < 35");
    }

    #[test]
    fn test_zero_max_range_has_no_next() {
        let pages = PageDescriptor::compute(RangeRequest::new(0, 0), 0, 10);
        assert_eq!(pages.next, None);
    }

    #[test]
    fn test_large_values_do_not_overflow() {
        let pages = PageDescriptor::compute(RangeRequest::new(u64::MAX, 1), u64::MAX, u64::MAX);
        assert_eq!(pages.next, None);
        assert_eq!(pages.last, window(0, u64::MAX));
    }

    #[test]
    fn test_relations_order() {
        let pages = PageDescriptor::compute(RangeRequest::new(30, 10), 10, 100);
        let order: Vec<_> = pages.relations().map(|(relation, _)| relation).collect();
        assert_eq!(
            order,
            vec![Relation::First, Relation::Prev, Relation::Next, Relation::Last]
        );
    }

    // ============================================================================
    // URL rewriting
    // ============================================================================

    #[test]
    fn test_literal_rewrite() {
        let url = LiteralRangeRewriter.rewrite(
            URL,
            RangeRequest::new(10, 10),
            PageWindow { start: 20, end: 10 },
        );
        assert_eq!(url, "http://api.test/items?range=20-10");
    }

    #[test]
    fn test_literal_rewrite_negative_start() {
        let url = LiteralRangeRewriter.rewrite(
            "http://api.test/items?range=0-10",
            RangeRequest::new(0, 10),
            PageWindow { start: -5, end: 10 },
        );
        assert_eq!(url, "http://api.test/items?range=-5-10");
    }

    #[test]
    fn test_literal_rewrite_no_match_keeps_url() {
        let url = "http://api.test/items?range=%5B10%2C10%5D";
        let rewritten =
            LiteralRangeRewriter.rewrite(url, RangeRequest::new(10, 10), PageWindow { start: 0, end: 10 });
        assert_eq!(rewritten, url);
    }

    #[test]
    fn test_literal_rewrite_replaces_every_occurrence() {
        let url = "http://api.test/items?range=0-5&prev_range=0-5";
        let rewritten =
            LiteralRangeRewriter.rewrite(url, RangeRequest::new(0, 5), PageWindow { start: 5, end: 5 });
        assert_eq!(rewritten, "http://api.test/items?range=5-5&prev_range=5-5");
    }

    // ============================================================================
    // Link value
    // ============================================================================

    #[test]
    fn test_link_value() {
        let range = RangeRequest::new(10, 10);
        let pages = PageDescriptor::compute(range, 10, 35);
        assert_eq!(
            build_link_value(&LiteralRangeRewriter, URL, range, &pages),
            "<http://api.test/items?range=10-10>; rel=\"self\", \
             <http://api.test/items?range=0-10>; rel=\"first\", \
             <http://api.test/items?range=20-10>; rel=\"next\", \
             <http://api.test/items?range=25-10>; rel=\"last\""
        );
    }

    #[test]
    fn test_link_value_self_only() {
        let range = RangeRequest::new(0, 10);
        let pages = PageDescriptor::compute(range, 10, 10);
        assert_eq!(
            build_link_value(&LiteralRangeRewriter, "http://a.test/x?range=0-10", range, &pages),
            "<http://a.test/x?range=0-10>; rel=\"self\""
        );
    }

    struct Tagging;

    impl LinkRewriter for Tagging {
        fn rewrite(&self, host_url: &str, _current: RangeRequest, target: PageWindow) -> String {
            format!("{host_url}#{target}")
        }
    }

    #[test]
    fn test_custom_rewriter() {
        let range = RangeRequest::new(0, 10);
        let pages = PageDescriptor::compute(range, 10, 35);
        let value = build_link_value(&Tagging, "http://a.test/x", range, &pages);
        assert!(value.contains("<http://a.test/x#10-10>; rel=\"next\""));
        assert!(value.contains("<http://a.test/x#25-10>; rel=\"last\""));
    }
}
