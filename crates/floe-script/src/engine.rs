//! The script engine: execution context lifecycle and orchestration.

use crate::error::ScriptError;
use crate::marshal::FromScript;
use crate::modifications::ModificationRhoU;
use crate::registry;
use crate::session::{Session, SessionGuard};
use crate::value::ScriptValue;
use floe_core::{ReportSink, StderrReporter};
use floe_grid::GridView;
use std::cell::RefCell;

/// Helper script concatenated before user code in `modify_node_layout`.
const PRELUDE: &str = include_str!("prelude.lua");

/// An embedded script execution context.
///
/// The engine owns one runtime state for its whole lifetime. Globals set by
/// one [`run`](ScriptEngine::run) persist and are visible to later runs on
/// the same engine. The state is released exactly once when the engine is
/// dropped.
///
/// The engine remains usable after a [`ScriptError::Runtime`]: the runtime
/// leaves its state consistent when an error is caught at the boundary.
///
/// Not `Send`: script execution is single-threaded, synchronous, and
/// blocking, with no suspension or cancellation. A script that does not
/// terminate blocks the calling thread; callers needing bounded execution
/// must impose an external watchdog.
pub struct ScriptEngine {
    lua: mlua::Lua,
    reporter: RefCell<Box<dyn ReportSink>>,
}

impl ScriptEngine {
    /// Open a fresh execution context reporting to stderr.
    ///
    /// The runtime allocator aborts the process if the context cannot be
    /// created (resource exhaustion is fatal), so construction is
    /// infallible at the API level.
    pub fn new() -> Self {
        Self::with_reporter(Box::new(StderrReporter))
    }

    /// Open a fresh execution context with a custom reporting sink.
    pub fn with_reporter(reporter: Box<dyn ReportSink>) -> Self {
        Self {
            lua: mlua::Lua::new(),
            reporter: RefCell::new(reporter),
        }
    }

    /// Compile and execute a script.
    ///
    /// Malformed text fails with [`ScriptError::Compile`]. A script-side
    /// raise has its class name and message captured verbatim, logged to
    /// the reporting sink, and returned as [`ScriptError::Runtime`].
    /// Success yields the last expression's value ([`ScriptValue::Nil`]
    /// for statement-only scripts).
    pub fn run(&self, code: &str) -> Result<ScriptValue, ScriptError> {
        let values = self
            .lua
            .load(code)
            .set_name("script")
            .eval::<mlua::MultiValue>()
            .map_err(|err| self.translate(err))?;
        Ok(values
            .into_iter()
            .next()
            .map(|value| ScriptValue::from_lua(&value))
            .unwrap_or(ScriptValue::Nil))
    }

    /// Read a global variable as a host type.
    ///
    /// An absent (nil) global fails with [`ScriptError::VariableNotFound`]
    /// before any conversion is attempted; otherwise the value converts
    /// through [`FromScript`], propagating its failure.
    pub fn global<T: FromScript>(&self, name: &str) -> Result<T, ScriptError> {
        let value: mlua::Value = self
            .lua
            .globals()
            .get(name)
            .map_err(|err| self.translate(err))?;
        if value.is_nil() {
            return Err(ScriptError::VariableNotFound {
                name: name.to_string(),
            });
        }
        T::from_script(&ScriptValue::from_lua(&value))
    }

    /// Run a script against a grid, collecting deferred changes.
    ///
    /// Publishes the native function registry, binds a fresh session
    /// (grid + empty accumulator), prepends the prelude to `user_code`,
    /// and executes. The session bindings are valid only inside this call:
    /// the installed functions are invalidated when it returns, whatever
    /// the outcome, so a native function invoked outside an active session
    /// fails as a script error instead of touching stale data. At most one
    /// session is in flight per process; concurrent callers block.
    ///
    /// Returns the accumulator by value, or propagates the run failure.
    pub fn modify_node_layout(
        &self,
        grid: &mut dyn GridView,
        user_code: &str,
    ) -> Result<ModificationRhoU, ScriptError> {
        let _session_lock = SessionGuard::acquire();
        let grid = RefCell::new(grid);
        let mods = RefCell::new(ModificationRhoU::new());
        let session = Session {
            grid: &grid,
            mods: &mods,
            reporter: &self.reporter,
        };
        let code = format!("{PRELUDE}\n{user_code}");
        let outcome = self.lua.scope(|scope| {
            registry::install(&self.lua, scope, session)?;
            self.lua.load(code.as_str()).set_name("modifyNodeLayout").exec()
        });
        match outcome {
            Ok(()) => Ok(mods.into_inner()),
            Err(err) => Err(self.translate(err)),
        }
    }

    /// Translate a runtime error into a [`ScriptError`].
    ///
    /// Typed bridge errors raised inside native functions are recovered
    /// verbatim from the cause chain. Genuine script raises are classified
    /// and logged (class, then message) before being returned.
    fn translate(&self, err: mlua::Error) -> ScriptError {
        if let Some(bridge) = bridge_error(&err) {
            return bridge;
        }
        if let mlua::Error::SyntaxError { message, .. } = &err {
            return ScriptError::Compile {
                message: message.clone(),
            };
        }
        let (class_name, message) = classify(&err);
        let mut reporter = self.reporter.borrow_mut();
        reporter.error(&format!("script error: class = {class_name}"));
        reporter.error(&format!("script error: message = {message}"));
        ScriptError::Runtime {
            class_name,
            message,
        }
    }
}

impl Default for ScriptEngine {
    fn default() -> Self {
        Self::new()
    }
}

/// Recover a typed bridge error from a runtime error's cause chain.
fn bridge_error(err: &mlua::Error) -> Option<ScriptError> {
    match err {
        mlua::Error::CallbackError { cause, .. } => bridge_error(cause),
        mlua::Error::WithContext { cause, .. } => bridge_error(cause),
        mlua::Error::ExternalError(external) => {
            external.downcast_ref::<ScriptError>().cloned()
        }
        _ => None,
    }
}

/// Runtime classification and message of a script-side raise.
fn classify(err: &mlua::Error) -> (String, String) {
    match err {
        mlua::Error::RuntimeError(message) => ("RuntimeError".to_string(), message.clone()),
        mlua::Error::MemoryError(message) => ("MemoryError".to_string(), message.clone()),
        mlua::Error::CallbackError { cause, .. } => classify(cause),
        mlua::Error::WithContext { cause, .. } => classify(cause),
        other => ("Error".to_string(), other.to_string()),
    }
}
