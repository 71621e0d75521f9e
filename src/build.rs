//! Exports the [`Builder`], which stitches together the steps of a series
//! pass: grouping posts by language and category ([`crate::classify`]),
//! putting each group into series order ([`crate::order`]), and attaching
//! the resulting [`Series`] to every member post. The host generator calls
//! [`Builder::build_all`] once per build, after categorization.

use crate::classify::{classify, Classification};
use crate::order::{self, Error as OrderError};
use crate::post::Post;
use crate::series::{Error as SeriesError, Series, SeriesPost};
use std::collections::HashMap;
use std::fmt;
use std::rc::Rc;

/// Builds every series for a post store.
#[derive(Default)]
pub struct Builder {
    /// When set, each member's `next_post`/`prev_post` links are rewired to
    /// its series neighbors, replacing whatever a global chronological pass
    /// put there. Off by default: enabling it changes site-wide timeline
    /// navigation into series-scoped navigation.
    pub wire_links: bool,

    /// Display-title overrides, keyed by category. A series without an
    /// override takes its first post's title.
    pub titles: HashMap<String, String>,
}

impl Builder {
    /// Builds all the series, one per (language, category) pair. Classifies
    /// the posts itself; use [`Builder::build_classified`] if the host has
    /// already done that.
    pub fn build_all(&self, posts: &mut [Post]) -> Result<()> {
        let classification = classify(posts);
        self.build_classified(&classification, posts)
    }

    /// Builds all the series from a host-supplied classification. The
    /// classification's indices must point into `posts`.
    pub fn build_classified(
        &self,
        classification: &Classification,
        posts: &mut [Post],
    ) -> Result<()> {
        for (lang, categories) in classification {
            for (category, members) in categories {
                self.build_series(lang, category, members, posts)?;
            }
        }
        Ok(())
    }

    /// Builds the series for one category: orders the members, wraps them in
    /// a [`Series`], and points every member post at that same instance. A
    /// category with zero posts produces no series.
    pub fn build_series(
        &self,
        lang: &str,
        category: &str,
        members: &[usize],
        posts: &mut [Post],
    ) -> Result<()> {
        if members.is_empty() {
            return Ok(());
        }

        let ordered = order::order_posts(lang, posts, members)?;
        let snapshots: Vec<SeriesPost> = ordered
            .iter()
            .map(|&index| SeriesPost::from(&posts[index]))
            .collect();
        let series = Rc::new(Series::new(
            category,
            self.titles.get(category).cloned(),
            snapshots,
        )?);

        for &index in &ordered {
            posts[index].series = Some(Rc::clone(&series));
        }

        if self.wire_links {
            wire_links(posts, &ordered);
        }

        Ok(())
    }
}

// Points each member's next/prev links at its series neighbors instead of
// its chronological neighbors. Endpoints are cleared even if a global pass
// set them.
fn wire_links(posts: &mut [Post], ordered: &[usize]) {
    let ids: Vec<String> = ordered.iter().map(|&index| posts[index].id.clone()).collect();
    for (position, &index) in ordered.iter().enumerate() {
        posts[index].prev_post = match position {
            0 => None,
            _ => Some(ids[position - 1].clone()),
        };
        posts[index].next_post = match position + 1 == ids.len() {
            true => None,
            false => Some(ids[position + 1].clone()),
        };
    }
}

/// The result of a fallible series-building operation.
pub type Result<T> = std::result::Result<T, Error>;

/// Represents an error in a series-building pass. Errors can be during
/// ordering or series construction.
#[derive(Debug)]
pub enum Error {
    /// Returned for validation errors while ordering a category's posts.
    Order(OrderError),

    /// Returned for errors constructing the [`Series`] itself.
    Series(SeriesError),
}

impl fmt::Display for Error {
    /// Implements [`fmt::Display`] for [`Error`].
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::Order(err) => err.fmt(f),
            Error::Series(err) => err.fmt(f),
        }
    }
}

impl std::error::Error for Error {
    /// Implements [`std::error::Error`] for [`Error`].
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Order(err) => Some(err),
            Error::Series(err) => Some(err),
        }
    }
}

impl From<OrderError> for Error {
    /// Converts [`OrderError`]s into [`Error`]. This allows us to use the
    /// `?` operator.
    fn from(err: OrderError) -> Error {
        Error::Order(err)
    }
}

impl From<SeriesError> for Error {
    /// Converts [`SeriesError`]s into [`Error`]. This allows us to use the
    /// `?` operator.
    fn from(err: SeriesError) -> Error {
        Error::Series(err)
    }
}
