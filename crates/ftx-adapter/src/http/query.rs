/*
[INPUT]:  Flat filter records and a request URL
[OUTPUT]: URL with the record's non-zero fields appended as query parameters
[POS]:    HTTP layer - query string encoding for filterable read endpoints
[UPDATE]: When adding filter records or changing zero-value omission rules
*/

use serde::Serialize;
use serde_json::Value;
use url::Url;

use crate::http::{FtxError, Result};

/// A filter record that lists its own query fields
pub trait QueryOptions {
    fn write_query(&self, query: &mut QueryBuilder) -> Result<()>;
}

/// Collects `name=value` pairs, dropping zero values
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct QueryBuilder {
    pairs: Vec<(&'static str, String)>,
}

impl QueryBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a scalar field.
    ///
    /// `null`, `0`, `""` and `false` are omitted. Arrays and objects are
    /// rejected with [`FtxError::Encoding`].
    pub fn push<T: Serialize + ?Sized>(&mut self, name: &'static str, value: &T) -> Result<&mut Self> {
        match serde_json::to_value(value)? {
            Value::Null | Value::Bool(false) => {}
            Value::Bool(true) => self.pairs.push((name, "true".to_string())),
            Value::Number(number) => {
                if !is_zero(&number) {
                    self.pairs.push((name, number.to_string()));
                }
            }
            Value::String(text) => {
                if !text.is_empty() {
                    self.pairs.push((name, text));
                }
            }
            Value::Array(_) | Value::Object(_) => {
                return Err(FtxError::Encoding(format!(
                    "field `{name}` is not a scalar query value"
                )));
            }
        }
        Ok(self)
    }

    pub fn pairs(&self) -> &[(&'static str, String)] {
        &self.pairs
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }
}

fn is_zero(number: &serde_json::Number) -> bool {
    if let Some(value) = number.as_i64() {
        value == 0
    } else if let Some(value) = number.as_u64() {
        value == 0
    } else {
        number.as_f64().is_some_and(|value| value == 0.0)
    }
}

/// Append the options' query pairs to `url` in field order.
///
/// The URL is returned unchanged when every field is a zero value.
pub fn add_options<O: QueryOptions + ?Sized>(mut url: Url, opts: &O) -> Result<Url> {
    let mut query = QueryBuilder::new();
    opts.write_query(&mut query)?;
    if !query.is_empty() {
        url.query_pairs_mut().extend_pairs(query.pairs());
    }
    Ok(url)
}

impl<O: QueryOptions> QueryOptions for Option<O> {
    fn write_query(&self, query: &mut QueryBuilder) -> Result<()> {
        match self {
            Some(opts) => opts.write_query(query),
            None => Ok(()),
        }
    }
}
