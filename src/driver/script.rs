//! Script rendering context using boa_engine
//!
//! Collects the page's `<script>` sources (inline and local `src` files), runs
//! them in a fresh JavaScript realm and calls the exposed function directly.
//! No layout or DOM: a small `document` stub keeps load-time handlers wiring
//! up without a browser.

use anyhow::{Context as _, Result};
use async_trait::async_trait;
use boa_engine::{Context, JsString, JsValue, Source};
use regex::Regex;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use crate::driver::traits::{EvalContext, Invocation};

const PRELUDE: &str = r#"
var window = globalThis;
var self = globalThis;
var document = (function () {
    function element() {
        return { value: "", textContent: "", innerText: "", addEventListener: function () {} };
    }
    return {
        getElementById: function () { return element(); },
        querySelector: function () { return element(); },
        addEventListener: function () {}
    };
})();
"#;

/// Iterations allowed per loop before the engine aborts the script
pub const LOOP_ITERATION_LIMIT: u64 = 10_000_000;
/// Maximum call depth inside the realm
pub const RECURSION_LIMIT: usize = 512;

/// One piece of script found on the page
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScriptSource {
    Inline(String),
    File(PathBuf),
}

/// In-process JavaScript context
pub struct ScriptContext {
    page: PathBuf,
    function: String,
    context: Context,
    loaded: bool,
}

impl ScriptContext {
    pub fn new(page: &Path, function: &str) -> Result<Self> {
        let mut context = Context::default();
        context
            .runtime_limits_mut()
            .set_loop_iteration_limit(LOOP_ITERATION_LIMIT);
        context
            .runtime_limits_mut()
            .set_recursion_limit(RECURSION_LIMIT);
        context
            .eval(Source::from_bytes(PRELUDE))
            .map_err(|e| anyhow::anyhow!("JS Error: {}", e))?;

        Ok(Self {
            page: page.to_path_buf(),
            function: function.to_string(),
            context,
            loaded: false,
        })
    }

    fn eval_source(&mut self, code: &str, origin: &str) -> Result<()> {
        self.context
            .eval(Source::from_bytes(code))
            .map_err(|e| anyhow::anyhow!("JS Execution Error in {}: {}", origin, e))?;
        Ok(())
    }

    fn call(&mut self, input: &str) -> Result<JsValue, String> {
        let global = self.context.global_object();
        let func = global
            .get(JsString::from(self.function.as_str()), &mut self.context)
            .map_err(|e| format!("JavaScript error: {}", e))?;

        let callable = func
            .as_callable()
            .ok_or_else(|| format!("{} is not defined or not a function", self.function))?;

        callable
            .call(
                &JsValue::undefined(),
                &[JsValue::from(JsString::from(input))],
                &mut self.context,
            )
            .map_err(|e| format!("JavaScript error: {}", e))
    }
}

#[async_trait(?Send)]
impl EvalContext for ScriptContext {
    fn engine_name(&self) -> &str {
        "script"
    }

    /// Only an unreadable page is fatal. A script that fails to read or throws
    /// is logged and skipped, the way a browser reports it in the console and
    /// keeps loading the page.
    async fn load(&mut self) -> Result<()> {
        let sources = collect_scripts(&self.page)?;
        log::debug!("{} script source(s) on {}", sources.len(), self.page.display());

        for source in sources {
            let outcome = match source {
                ScriptSource::Inline(code) => self.eval_source(&code, "inline script"),
                ScriptSource::File(path) => std::fs::read_to_string(&path)
                    .with_context(|| format!("Failed to read script: {}", path.display()))
                    .and_then(|code| self.eval_source(&code, &path.display().to_string())),
            };
            if let Err(e) = outcome {
                log::warn!("{:#}", e);
            }
        }
        self.loaded = true;
        Ok(())
    }

    async fn invoke(&mut self, input: &str) -> Invocation {
        if !self.loaded {
            return Invocation::Errored("page not loaded".to_string());
        }
        match self.call(input) {
            Ok(value) => match value.as_boolean() {
                Some(b) => Invocation::Returned(b),
                None => Invocation::Errored(format!(
                    "returned non-boolean value: {}",
                    value.display()
                )),
            },
            Err(e) => Invocation::Errored(e),
        }
    }

    async fn close(&mut self) -> Result<()> {
        self.loaded = false;
        Ok(())
    }
}

fn script_tag_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"(?is)<script\b([^>]*)>(.*?)</script\s*>").expect("static pattern compiles")
    })
}

fn src_attr_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r#"(?i)\bsrc\s*=\s*["']([^"']+)["']"#).expect("static pattern compiles")
    })
}

/// List the scripts a page would run, in document order.
///
/// A `.js` page is treated as a single script file.
pub fn collect_scripts(page: &Path) -> Result<Vec<ScriptSource>> {
    if page.extension().map_or(false, |ext| ext == "js") {
        if !page.is_file() {
            anyhow::bail!("Script not found: {}", page.display());
        }
        return Ok(vec![ScriptSource::File(page.to_path_buf())]);
    }

    let html = std::fs::read_to_string(page)
        .with_context(|| format!("Failed to read page: {}", page.display()))?;
    let base = page.parent().unwrap_or_else(|| Path::new("."));

    let mut sources = Vec::new();
    for caps in script_tag_re().captures_iter(&html) {
        let attrs = caps.get(1).map_or("", |m| m.as_str());
        if let Some(src) = src_attr_re().captures(attrs).and_then(|c| c.get(1)) {
            let src = src.as_str();
            if src.contains("://") {
                anyhow::bail!("Remote script not supported: {}", src);
            }
            sources.push(ScriptSource::File(base.join(src)));
        } else {
            let body = caps.get(2).map_or("", |m| m.as_str());
            if !body.trim().is_empty() {
                sources.push(ScriptSource::Inline(body.to_string()));
            }
        }
    }
    Ok(sources)
}
