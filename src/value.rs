//! Conversions into [`gtmpl_value::Value`] so templates can render series
//! navigation, plus [`nav_context`], which assembles the whole context for
//! one post's navigation block.

use crate::series::{self, Series, SeriesPost};
use gtmpl_value::Value;
use std::collections::HashMap;

impl From<&SeriesPost> for Value {
    /// Converts [`SeriesPost`]s into [`Value`]s for templating.
    fn from(post: &SeriesPost) -> Value {
        let mut m: HashMap<String, Value> = HashMap::new();
        m.insert("id".to_owned(), (&post.id).into());
        m.insert("title".to_owned(), (&post.title).into());
        m.insert("url".to_owned(), Value::String(post.url.to_string()));
        Value::Object(m)
    }
}

impl From<&Series> for Value {
    /// Converts [`Series`]s into [`Value`]s for templating. Deliberately
    /// shallow: the member list is exposed through [`nav_context`] instead,
    /// already windowed.
    fn from(series: &Series) -> Value {
        let mut m: HashMap<String, Value> = HashMap::new();
        m.insert("title".to_owned(), Value::String(series.title().to_owned()));
        m.insert(
            "category".to_owned(),
            Value::String(series.category().to_owned()),
        );
        m.insert("slug".to_owned(), Value::String(series.slug().to_owned()));
        m.insert("count".to_owned(), Value::from(series.count() as u64));
        Value::Object(m)
    }
}

/// Builds the template context for one post's series-navigation block: the
/// series title, `number`/`count` for an "N of M" label, the window of (up
/// to) `size` nearby posts (each with its own one-based `number` and a
/// `current` flag), and the `includes_first`/`includes_last` flags templates
/// use to suppress the previous/next affordances at the ends of the series.
pub fn nav_context(series: &Series, id: &str, size: usize) -> series::Result<Value> {
    let number = series.number_of(id)?;
    let window = series.neighbor_window(id, size)?;

    let mut around: Vec<Value> = Vec::with_capacity(window.len());
    for index in window.first..=window.last {
        let post = series.post_at(index)?;
        let mut value = Value::from(post);
        if let Value::Object(obj) = &mut value {
            obj.insert("number".to_owned(), Value::from(index as u64 + 1));
            obj.insert("current".to_owned(), Value::Bool(post.id == id));
        }
        around.push(value);
    }

    let mut m: HashMap<String, Value> = HashMap::new();
    m.insert("title".to_owned(), Value::String(series.title().to_owned()));
    m.insert("number".to_owned(), Value::from(number as u64));
    m.insert("count".to_owned(), Value::from(series.count() as u64));
    m.insert("around".to_owned(), Value::Array(around));
    m.insert(
        "includes_first".to_owned(),
        Value::Bool(window.first == 0),
    );
    m.insert(
        "includes_last".to_owned(),
        Value::Bool(window.last == series.count() - 1),
    );
    Ok(Value::Object(m))
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::series::Error;

    #[test]
    fn test_nav_context_shape() -> series::Result<()> {
        let context = nav_context(&fixture(10), "p4", 5)?;
        let obj = match &context {
            Value::Object(obj) => obj,
            other => panic!("expected an object, got {:?}", other),
        };
        assert_eq!(Some(&Value::from(5u64)), obj.get("number"));
        assert_eq!(Some(&Value::from(10u64)), obj.get("count"));
        assert_eq!(Some(&Value::Bool(false)), obj.get("includes_first"));
        assert_eq!(Some(&Value::Bool(false)), obj.get("includes_last"));

        let around = match obj.get("around") {
            Some(Value::Array(around)) => around,
            other => panic!("expected an array, got {:?}", other),
        };
        assert_eq!(5, around.len());
        for (i, entry) in around.iter().enumerate() {
            let entry = match entry {
                Value::Object(entry) => entry,
                other => panic!("expected an object, got {:?}", other),
            };
            assert_eq!(Some(&Value::from(i as u64 + 3)), entry.get("number"));
            assert_eq!(Some(&Value::Bool(i == 2)), entry.get("current"));
        }
        Ok(())
    }

    #[test]
    fn test_nav_context_non_member() {
        assert!(matches!(
            nav_context(&fixture(3), "stranger", 5),
            Err(Error::NotInSeries { .. })
        ));
    }

    #[test]
    fn test_render_nav_label() -> Result<(), String> {
        let context = nav_context(&fixture(10), "p4", 5).map_err(|e| e.to_string())?;
        let mut template = gtmpl::Template::default();
        template.parse("{{.title}}: {{.number}} of {{.count}}")?;

        let mut out: Vec<u8> = Vec::new();
        template.execute(&mut out, &gtmpl::Context::from(context).unwrap())?;
        assert_eq!(
            "Part 0: 5 of 10",
            String::from_utf8(out).map_err(|e| e.to_string())?
        );
        Ok(())
    }

    fn fixture(count: usize) -> Series {
        Series::new(
            "parts",
            None,
            (0..count)
                .map(|i| SeriesPost {
                    id: format!("p{}", i),
                    title: format!("Part {}", i),
                    url: url::Url::parse(&format!("https://example.org/posts/p{}.html", i))
                        .unwrap(),
                })
                .collect(),
        )
        .unwrap()
    }
}
