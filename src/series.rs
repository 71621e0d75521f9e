//! Defines the [`Series`] type: the ordered, navigable sequence of posts
//! sharing a category. A series is immutable once built and is shared by
//! every member post, so it carries lightweight [`SeriesPost`] snapshots
//! rather than the posts themselves.

use crate::post::Post;
use crate::window::{self, Window};
use std::fmt;

/// The slice of a member post that series navigation needs: enough to label
/// a link and point it somewhere.
#[derive(Clone, Debug, PartialEq)]
pub struct SeriesPost {
    pub id: String,
    pub title: String,
    pub url: url::Url,
}

impl From<&Post> for SeriesPost {
    fn from(post: &Post) -> SeriesPost {
        SeriesPost {
            id: post.id.clone(),
            title: post.title.clone(),
            url: post.url.clone(),
        }
    }
}

/// An ordered group of posts sharing a category. Construction guarantees at
/// least one member, so queries that read "the first post" are always
/// defined.
#[derive(Debug)]
pub struct Series {
    category: String,
    slug: String,
    title: Option<String>,
    posts: Vec<SeriesPost>,
}

impl Series {
    /// Wraps an already-ordered list of posts. `title` overrides the
    /// default display title. Building from zero posts is an error; the
    /// builder skips empty categories instead of calling this.
    pub fn new(category: &str, title: Option<String>, posts: Vec<SeriesPost>) -> Result<Series> {
        if posts.is_empty() {
            return Err(Error::Empty);
        }
        Ok(Series {
            category: category.to_owned(),
            slug: slug::slugify(category),
            title,
            posts,
        })
    }

    /// The category name this series was built from.
    pub fn category(&self) -> &str {
        &self.category
    }

    /// The slugified category, suitable for dropping into a URL.
    pub fn slug(&self) -> &str {
        &self.slug
    }

    /// The display title: the override if one was set, otherwise the title
    /// of the first post.
    pub fn title(&self) -> &str {
        match &self.title {
            Some(title) => title,
            None => &self.posts[0].title,
        }
    }

    /// The number of posts in the series.
    pub fn count(&self) -> usize {
        self.posts.len()
    }

    /// The members, in series order.
    pub fn posts(&self) -> &[SeriesPost] {
        &self.posts
    }

    /// Zero-based positional access.
    pub fn post_at(&self, index: usize) -> Result<&SeriesPost> {
        self.posts.get(index).ok_or(Error::OutOfRange {
            index,
            count: self.posts.len(),
        })
    }

    /// The zero-based position of the post with id `id`.
    pub fn index_of(&self, id: &str) -> Result<usize> {
        self.posts
            .iter()
            .position(|post| post.id == id)
            .ok_or_else(|| Error::NotInSeries { id: id.to_owned() })
    }

    /// The one-based position of the post with id `id`, for "N of M" labels.
    pub fn number_of(&self, id: &str) -> Result<usize> {
        Ok(self.index_of(id)? + 1)
    }

    /// The window of (up to) `size` positions centered on the given post,
    /// clamped to the series bounds. See [`window::centered`].
    pub fn neighbor_window(&self, id: &str, size: usize) -> Result<Window> {
        Ok(window::centered(self.index_of(id)?, self.count(), size))
    }

    /// The posts covered by [`Series::neighbor_window`].
    pub fn posts_around(&self, id: &str, size: usize) -> Result<&[SeriesPost]> {
        let window = self.neighbor_window(id, size)?;
        Ok(&self.posts[window.first..=window.last])
    }

    /// Whether the given post's window reaches the start of the series.
    /// Templates use this to suppress the "previous" affordance.
    pub fn includes_first(&self, id: &str, size: usize) -> Result<bool> {
        Ok(self.neighbor_window(id, size)?.first == 0)
    }

    /// Whether the given post's window reaches the end of the series.
    /// Templates use this to suppress the "next" affordance.
    pub fn includes_last(&self, id: &str, size: usize) -> Result<bool> {
        Ok(self.neighbor_window(id, size)?.last == self.count() - 1)
    }
}

/// The result of a fallible series query.
pub type Result<T> = std::result::Result<T, Error>;

/// Represents a failed series construction or query.
#[derive(Debug)]
pub enum Error {
    /// A series cannot be built from zero posts.
    Empty,

    /// Positional access beyond the series bounds.
    OutOfRange { index: usize, count: usize },

    /// A lookup for a post that isn't a member of the series.
    NotInSeries { id: String },
}

impl fmt::Display for Error {
    /// Implements [`fmt::Display`] for [`Error`].
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::Empty => write!(f, "Cannot build a series from zero posts"),
            Error::OutOfRange { index, count } => write!(
                f,
                "Index {} out of range for series of {} posts",
                index, count
            ),
            Error::NotInSeries { id } => {
                write!(f, "Post '{}' is not a member of this series", id)
            }
        }
    }
}

impl std::error::Error for Error {}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_round_trip() -> Result<()> {
        let series = fixture(10);
        for post in series.posts() {
            assert_eq!(post, series.post_at(series.index_of(&post.id)?)?);
        }
        Ok(())
    }

    #[test]
    fn test_number_of() -> Result<()> {
        let series = fixture(10);
        assert_eq!(1, series.number_of("p0")?);
        assert_eq!(10, series.number_of("p9")?);
        Ok(())
    }

    #[test]
    fn test_title_defaults_to_first_post() {
        assert_eq!("Part 0", fixture(3).title());
    }

    #[test]
    fn test_title_override() {
        let posts = (0..3).map(series_post).collect();
        let series = Series::new("deep dive", Some("Deep Dive".to_owned()), posts).unwrap();
        assert_eq!("Deep Dive", series.title());
        assert_eq!("deep-dive", series.slug());
        assert_eq!("deep dive", series.category());
    }

    #[test]
    fn test_empty_series_fails() {
        assert!(matches!(
            Series::new("deep dive", None, Vec::new()),
            Err(Error::Empty)
        ));
    }

    #[test]
    fn test_post_at_out_of_range() {
        assert!(matches!(
            fixture(3).post_at(3),
            Err(Error::OutOfRange { index: 3, count: 3 })
        ));
    }

    #[test]
    fn test_index_of_non_member() {
        assert!(matches!(
            fixture(3).index_of("stranger"),
            Err(Error::NotInSeries { .. })
        ));
    }

    #[test]
    fn test_posts_around() -> Result<()> {
        let series = fixture(10);
        let around = series.posts_around("p4", 5)?;
        let ids: Vec<&str> = around.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(&["p2", "p3", "p4", "p5", "p6"], ids.as_slice());
        Ok(())
    }

    #[test]
    fn test_neighbor_window_clamps() -> Result<()> {
        let series = fixture(10);
        let window = series.neighbor_window("p0", 5)?;
        assert_eq!((0, 4), (window.first, window.last));
        let window = series.neighbor_window("p9", 5)?;
        assert_eq!((5, 9), (window.first, window.last));
        Ok(())
    }

    #[test]
    fn test_boundary_flags() -> Result<()> {
        let series = fixture(10);
        assert!(series.includes_first("p1", 5)?);
        assert!(!series.includes_last("p1", 5)?);
        assert!(!series.includes_first("p5", 5)?);
        assert!(series.includes_last("p8", 5)?);

        // a window wider than the series touches both ends
        assert!(series.includes_first("p5", 11)?);
        assert!(series.includes_last("p5", 11)?);
        Ok(())
    }

    fn fixture(count: usize) -> Series {
        Series::new("parts", None, (0..count).map(series_post).collect()).unwrap()
    }

    fn series_post(i: usize) -> SeriesPost {
        SeriesPost {
            id: format!("p{}", i),
            title: format!("Part {}", i),
            url: url::Url::parse(&format!("https://example.org/posts/p{}.html", i)).unwrap(),
        }
    }
}
