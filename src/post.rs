//! Defines the [`Post`] and [`Meta`] types. A [`Post`] is owned by the host
//! generator's post store; this crate only reads its metadata and writes the
//! series back-reference (and, when wiring is enabled, the neighbor links).

use crate::series::Series;
use serde::Deserialize;
use serde_yaml::Value;
use std::collections::{BTreeMap, HashMap};
use std::rc::Rc;
use url::Url;

const DATE_KEY: &str = "date";
const CATEGORY_KEY: &str = "category";
const ORDER_KEY: &str = "category_order";

/// A per-language metadata bag. The host may stash anything in here; the
/// series pass only reads the `date`, `category`, and `category_order` keys.
#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
#[serde(transparent)]
pub struct Meta(BTreeMap<String, Value>);

impl Meta {
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn insert(&mut self, key: &str, value: Value) {
        self.0.insert(key.to_owned(), value);
    }

    /// The post's publication date as written (`YYYY-MM-DD`).
    pub fn date(&self) -> Option<&str> {
        self.get(DATE_KEY).and_then(Value::as_str)
    }

    /// The category this post belongs to, if any.
    pub fn category(&self) -> Option<&str> {
        self.get(CATEGORY_KEY).and_then(Value::as_str)
    }

    /// The explicit series position, if any. Left unparsed here; the
    /// ordering pass validates it ([`crate::order`]).
    pub fn category_order(&self) -> Option<&Value> {
        self.get(ORDER_KEY)
    }
}

/// A post as the series pass sees it. The `series`, `next_post`, and
/// `prev_post` slots are never deserialized; they are written exactly once
/// per build pass by [`crate::build::Builder`].
#[derive(Clone, Debug, Deserialize)]
pub struct Post {
    pub id: String,
    pub title: String,
    pub url: Url,

    /// Per-language metadata bags, keyed by language code.
    #[serde(default)]
    pub meta: HashMap<String, Meta>,

    /// Back-reference to the series this post belongs to. Every member of a
    /// series shares the same instance.
    #[serde(skip)]
    pub series: Option<Rc<Series>>,

    /// Id of the next post in series order. Only written when the builder's
    /// link wiring is enabled; `None` for the last post in the series.
    #[serde(skip)]
    pub next_post: Option<String>,

    /// Id of the previous post in series order. Only written when the
    /// builder's link wiring is enabled; `None` for the first post.
    #[serde(skip)]
    pub prev_post: Option<String>,
}

impl Post {
    /// The post's metadata bag for `lang`, if the post exists in that
    /// language.
    pub fn meta(&self, lang: &str) -> Option<&Meta> {
        self.meta.get(lang)
    }
}

/// Parses a list of posts from a YAML document, the interchange format the
/// host generator hands us its post store in.
pub fn from_yaml(input: &str) -> serde_yaml::Result<Vec<Post>> {
    serde_yaml::from_str(input)
}
