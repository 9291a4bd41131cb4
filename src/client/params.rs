//! Named request parameters, encoded as a query string or a POST form

use crate::client::dispatch::Form;
use crate::error::Result;

/// Ordered list of `name=value` pairs
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Params(Vec<(String, String)>);

impl Params {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(mut self, name: &str, value: impl ToString) -> Self {
        self.0.push((name.to_string(), value.to_string()));
        self
    }

    /// Push only when `value` is present
    pub fn push_opt<T: ToString>(self, name: &str, value: Option<T>) -> Self {
        match value {
            Some(v) => self.push(name, v),
            None => self,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }

    /// URL-encode in insertion order, e.g. `botId=42&limit=10`
    pub fn to_query(&self) -> Result<String> {
        Ok(serde_urlencoded::to_string(&self.0)?)
    }

    pub fn into_form(self) -> Form {
        self.0.into_iter().collect()
    }
}
