//! The ranking rule that turns a category's posts into series order. Posts
//! sort chronologically by default; a post with an explicit `category_order`
//! metadata value sorts by that value instead, and because the values are
//! real numbers a post can slot between two others (e.g. 1.5 lands between
//! the first and second chronological positions).

use crate::post::Post;
use chrono::NaiveDate;
use serde_yaml::Value;
use std::fmt;

/// The date format posts carry in their metadata.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Puts the member posts of one (language, category) pair into series order.
/// `members` holds indices into `posts` (the host's post store); the result
/// is the same indices, reordered.
///
/// The rule: stable-sort by date, give every post without an explicit
/// `category_order` a synthetic value of `date_rank + 1`, then stable-sort
/// by order value as a real number. Ties keep their chronological order.
pub fn order_posts(lang: &str, posts: &[Post], members: &[usize]) -> Result<Vec<usize>> {
    let mut dated: Vec<(usize, NaiveDate)> = Vec::with_capacity(members.len());
    for &index in members {
        dated.push((index, post_date(lang, &posts[index])?));
    }
    dated.sort_by_key(|&(_, date)| date);

    let mut keyed: Vec<(usize, f64)> = Vec::with_capacity(dated.len());
    for (rank, &(index, _)) in dated.iter().enumerate() {
        let key = match explicit_order(lang, &posts[index])? {
            Some(value) => value,
            None => (rank + 1) as f64,
        };
        keyed.push((index, key));
    }
    keyed.sort_by(|a, b| a.1.total_cmp(&b.1));

    Ok(keyed.into_iter().map(|(index, _)| index).collect())
}

fn post_date(lang: &str, post: &Post) -> Result<NaiveDate> {
    let raw = post
        .meta(lang)
        .and_then(|meta| meta.date())
        .ok_or_else(|| Error::MissingDate {
            post: post.id.clone(),
            lang: lang.to_owned(),
        })?;
    NaiveDate::parse_from_str(raw, DATE_FORMAT).map_err(|err| Error::DateParse {
        post: post.id.clone(),
        lang: lang.to_owned(),
        err,
    })
}

fn explicit_order(lang: &str, post: &Post) -> Result<Option<f64>> {
    match post.meta(lang).and_then(|meta| meta.category_order()) {
        None => Ok(None),
        Some(raw) => match order_value(raw) {
            Some(value) => Ok(Some(value)),
            None => Err(Error::OrderParse {
                post: post.id.clone(),
                lang: lang.to_owned(),
                value: match raw {
                    Value::String(s) => s.clone(),
                    other => format!("{:?}", other),
                },
            }),
        },
    }
}

// Accepts both YAML numbers and numeric strings; everything else is invalid
// rather than silently falling back to date order.
fn order_value(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

/// The result of a fallible ordering operation.
pub type Result<T> = std::result::Result<T, Error>;

/// Represents a validation problem while ordering a category's posts. Any of
/// these aborts series construction for the whole category.
#[derive(Debug)]
pub enum Error {
    /// A post has no date in its metadata for the requested language.
    MissingDate { post: String, lang: String },

    /// A post's date doesn't parse as [`DATE_FORMAT`].
    DateParse {
        post: String,
        lang: String,
        err: chrono::ParseError,
    },

    /// A post's explicit `category_order` doesn't parse as a real number.
    OrderParse {
        post: String,
        lang: String,
        value: String,
    },
}

impl fmt::Display for Error {
    /// Implements [`fmt::Display`] for [`Error`].
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::MissingDate { post, lang } => {
                write!(f, "Post '{}' has no date for language '{}'", post, lang)
            }
            Error::DateParse { post, lang, err } => {
                write!(f, "Parsing date of post '{}' ({}): {}", post, lang, err)
            }
            Error::OrderParse { post, lang, value } => write!(
                f,
                "Invalid category order '{}' on post '{}' ({})",
                value, post, lang
            ),
        }
    }
}

impl std::error::Error for Error {
    /// Implements [`std::error::Error`] for [`Error`].
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::DateParse { err, .. } => Some(err),
            _ => None,
        }
    }
}
