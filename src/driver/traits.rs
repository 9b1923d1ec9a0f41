use anyhow::Result;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Raw outcome of calling the function under test once
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Invocation {
    /// The function returned a boolean
    Returned(bool),
    /// The call threw, or returned something other than a boolean
    Errored(String),
}

impl Invocation {
    pub fn value(&self) -> Option<bool> {
        match self {
            Invocation::Returned(v) => Some(*v),
            Invocation::Errored(_) => None,
        }
    }

    /// Build from a JSON value produced by the page; only booleans count as results
    pub fn from_json(value: &serde_json::Value) -> Self {
        match value {
            serde_json::Value::Bool(b) => Invocation::Returned(*b),
            other => Invocation::Errored(format!("returned non-boolean value: {}", other)),
        }
    }
}

/// Isolated environment able to load the page and call its function.
///
/// Implementations are acquired once per run and must be released with
/// [`EvalContext::close`]. Calls are issued strictly one at a time.
#[async_trait(?Send)]
pub trait EvalContext {
    /// Short engine name for logs
    fn engine_name(&self) -> &str;

    /// Load the page under test. Called once before any invocation.
    async fn load(&mut self) -> Result<()>;

    /// Call the exposed function with `input`
    async fn invoke(&mut self, input: &str) -> Invocation;

    /// Release the context
    async fn close(&mut self) -> Result<()>;
}
