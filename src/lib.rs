//! The library code for the `seriate` series plugin. Given a site's posts,
//! it groups the posts sharing a category into an ordered "series" and hands
//! templates the data for series navigation (a "3 of 7" label, a window of
//! nearby posts). The architecture can be generally broken down into two
//! distinct steps:
//!
//! 1. Building series from categorized posts ([`crate::build`])
//! 2. Querying a series for navigation ([`crate::series`])
//!
//! The first step runs once per site build, after the host generator has
//! finished categorizing posts: each (language, category) pair is put into
//! order ([`crate::order`]) and wrapped in a [`crate::series::Series`] that
//! every member post points back to. Ordering is chronological by default; a
//! post opts into an explicit position with a real-valued `category_order`
//! metadata entry, and fractional values slot between the date-ranked
//! positions (a `category_order` of 1.5 lands between the first and second
//! chronological posts).
//!
//! The second step is driven by templates: a series answers positional
//! queries (`post_at`, `index_of`, `number_of`) and computes the centered,
//! boundary-clamped window of nearby posts ([`crate::window`]) behind
//! "nearby in this series" navigation. [`crate::value`] converts the results
//! into template values.

#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]

pub mod build;
pub mod classify;
pub mod order;
pub mod post;
pub mod series;
pub mod value;
pub mod window;
