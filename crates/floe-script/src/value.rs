//! The [`ScriptValue`] tagged variant for script-side dynamic values.

/// A script-side dynamic value, as a closed tagged union.
///
/// Built at the marshalling boundary from the runtime's own value type.
/// Conversion is pure: it never has side effects on the script runtime.
/// Variants the bridge has no use for (functions, userdata, non-sequence
/// tables) collapse to [`Other`](ScriptValue::Other) carrying the runtime's
/// type name so conversion diagnostics stay exact.
#[derive(Clone, Debug, PartialEq)]
pub enum ScriptValue {
    /// The runtime's "no value".
    Nil,
    /// A boolean.
    Bool(bool),
    /// An integer. The runtime's integer representation is wider than the
    /// host-facing conversions accept; range checks happen at conversion.
    Integer(i64),
    /// A float.
    Float(f64),
    /// A string.
    Str(String),
    /// A sequence.
    Array(Vec<ScriptValue>),
    /// Any other runtime value, by type name.
    Other(&'static str),
}

impl ScriptValue {
    /// The value's type name, for diagnostics.
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Nil => "nil",
            Self::Bool(_) => "boolean",
            Self::Integer(_) => "integer",
            Self::Float(_) => "float",
            Self::Str(_) => "string",
            Self::Array(_) => "array",
            Self::Other(name) => name,
        }
    }

    /// Build a [`ScriptValue`] from a runtime value.
    ///
    /// Tables with a non-empty sequence part become [`Array`](Self::Array)
    /// (elements converted recursively, non-sequence keys ignored); other
    /// tables collapse to `Other("table")`.
    pub(crate) fn from_lua(value: &mlua::Value) -> Self {
        match value {
            mlua::Value::Nil => Self::Nil,
            mlua::Value::Boolean(b) => Self::Bool(*b),
            mlua::Value::Integer(i) => Self::Integer(*i),
            mlua::Value::Number(n) => Self::Float(*n),
            mlua::Value::String(s) => Self::Str(s.to_string_lossy().to_string()),
            mlua::Value::Table(table) => {
                let len = table.raw_len();
                if len == 0 {
                    return Self::Other("table");
                }
                let items = (1..=len)
                    .map(|i| {
                        let item = table
                            .raw_get::<mlua::Value>(i)
                            .unwrap_or(mlua::Value::Nil);
                        Self::from_lua(&item)
                    })
                    .collect();
                Self::Array(items)
            }
            other => Self::Other(other.type_name()),
        }
    }
}
