//! The native function registry published into the script namespace.
//!
//! Each entry has a fixed name, arity, and handler. Installation overwrites
//! the same global names every time, so re-registration is idempotent.
//! Every call validates its argument count before reading any argument.

use crate::error::ScriptError;
use crate::marshal::FromScript;
use crate::session::Session;
use crate::value::ScriptValue;
use floe_core::{Coord, NodeBaseType, PlacementModifier};
use indexmap::IndexMap;
use std::sync::LazyLock;

/// Handler identity for a registry entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum NativeFn {
    SetBaseType,
    SetPlacementModifier,
    SetRhoPhysical,
    SetRhoBoundaryPhysical,
    SetUPhysical,
    SetUBoundaryPhysical,
    GetNode,
    GetSize,
}

/// A native function's published contract.
#[derive(Clone, Copy, Debug)]
pub(crate) struct FnSpec {
    /// Global name the function is published under.
    pub(crate) name: &'static str,
    /// Fixed argument count.
    pub(crate) arity: usize,
    handler: NativeFn,
}

static REGISTRY: LazyLock<IndexMap<&'static str, FnSpec>> = LazyLock::new(|| {
    [
        ("setBaseType", 4, NativeFn::SetBaseType),
        ("setPlacementModifier", 4, NativeFn::SetPlacementModifier),
        ("setRhoPhysical", 4, NativeFn::SetRhoPhysical),
        ("setRhoBoundaryPhysical", 4, NativeFn::SetRhoBoundaryPhysical),
        ("setUPhysical", 4, NativeFn::SetUPhysical),
        ("setUBoundaryPhysical", 4, NativeFn::SetUBoundaryPhysical),
        ("getNode", 3, NativeFn::GetNode),
        ("getSize", 0, NativeFn::GetSize),
    ]
    .into_iter()
    .map(|(name, arity, handler)| {
        (
            name,
            FnSpec {
                name,
                arity,
                handler,
            },
        )
    })
    .collect()
});

/// All registry entries in publication order.
pub(crate) fn specs() -> impl Iterator<Item = &'static FnSpec> {
    REGISTRY.values()
}

/// A script-side value a native function produces, converted into the
/// runtime's representation only at the boundary.
#[derive(Clone, Debug, PartialEq)]
pub(crate) enum NativeValue {
    /// The runtime's "no value".
    Nil,
    /// A node description: base type and placement modifier names.
    Node {
        base_type: &'static str,
        placement_modifier: &'static str,
    },
    /// A grid size description.
    Size {
        width: u32,
        height: u32,
        depth: u32,
    },
}

impl mlua::IntoLua for NativeValue {
    fn into_lua(self, lua: &mlua::Lua) -> mlua::Result<mlua::Value> {
        match self {
            Self::Nil => Ok(mlua::Value::Nil),
            Self::Node {
                base_type,
                placement_modifier,
            } => {
                let node = lua.create_table()?;
                node.set("baseType", base_type)?;
                node.set("placementModifier", placement_modifier)?;
                Ok(mlua::Value::Table(node))
            }
            Self::Size {
                width,
                height,
                depth,
            } => {
                let size = lua.create_table()?;
                size.set("width", width)?;
                size.set("height", height)?;
                size.set("depth", depth)?;
                Ok(mlua::Value::Table(size))
            }
        }
    }
}

/// Publish every registry entry into the script global namespace as a
/// function scoped to the given session.
pub(crate) fn install<'s, 'env, 'a, 'g>(
    lua: &mlua::Lua,
    scope: &'s mlua::Scope<'s, 'env>,
    session: Session<'a, 'g>,
) -> mlua::Result<()>
where
    'a: 's,
    'g: 's,
{
    let globals = lua.globals();
    for spec in specs() {
        let function = scope.create_function(move |_, args: mlua::MultiValue| {
            let args: Vec<mlua::Value> = args.into_iter().collect();
            dispatch(spec, session, &args).map_err(mlua::Error::from)
        })?;
        globals.set(spec.name, function)?;
    }
    Ok(())
}

/// Validate arity, unmarshal arguments, and run one native function.
pub(crate) fn dispatch(
    spec: &FnSpec,
    session: Session<'_, '_>,
    args: &[mlua::Value],
) -> Result<NativeValue, ScriptError> {
    if args.len() != spec.arity {
        return Err(ScriptError::WrongArgumentCount {
            function: spec.name,
            expected: spec.arity,
            actual: args.len(),
        });
    }

    match spec.handler {
        NativeFn::SetBaseType => {
            let coord = coord_args(args)?;
            let name = String::from_script(&ScriptValue::from_lua(&args[3]))?;
            let base_type = match NodeBaseType::from_name(&name) {
                Some(base_type) => base_type,
                None => {
                    return Err(ScriptError::UnknownEnumName {
                        kind: "base type",
                        name,
                    })
                }
            };
            let mut grid = session.grid.borrow_mut();
            let node = grid.node_type(&coord)?;
            grid.set_node_type(&coord, node.with_base_type(base_type))?;
            Ok(NativeValue::Nil)
        }
        NativeFn::SetPlacementModifier => {
            let coord = coord_args(args)?;
            let name = String::from_script(&ScriptValue::from_lua(&args[3]))?;
            let modifier = match PlacementModifier::from_name(&name) {
                Some(modifier) => modifier,
                None => {
                    return Err(ScriptError::UnknownEnumName {
                        kind: "placement modifier",
                        name,
                    })
                }
            };
            let mut grid = session.grid.borrow_mut();
            let node = grid.node_type(&coord)?;
            grid.set_node_type(&coord, node.with_placement_modifier(modifier))?;
            Ok(NativeValue::Nil)
        }
        NativeFn::SetRhoPhysical => {
            let coord = coord_args(args)?;
            let rho = f64::from_script(&ScriptValue::from_lua(&args[3]))?;
            session.mods.borrow_mut().add_rho_physical(coord, rho);
            Ok(NativeValue::Nil)
        }
        NativeFn::SetRhoBoundaryPhysical => {
            let coord = coord_args(args)?;
            let rho = f64::from_script(&ScriptValue::from_lua(&args[3]))?;
            session
                .mods
                .borrow_mut()
                .add_rho_boundary_physical(coord, rho);
            Ok(NativeValue::Nil)
        }
        NativeFn::SetUPhysical => {
            let coord = coord_args(args)?;
            let u = velocity_arg(&args[3])?;
            session.mods.borrow_mut().add_u_physical(coord, u);
            Ok(NativeValue::Nil)
        }
        NativeFn::SetUBoundaryPhysical => {
            let coord = coord_args(args)?;
            let u = velocity_arg(&args[3])?;
            session.mods.borrow_mut().add_u_boundary_physical(coord, u);
            Ok(NativeValue::Nil)
        }
        NativeFn::GetNode => {
            let coord = coord_args(args)?;
            let grid = session.grid.borrow();
            let size = grid.size();
            if !size.contains(&coord) {
                session.reporter.borrow_mut().warning(&format!(
                    "can not get node type at {coord}, coordinates outside of {size}"
                ));
                return Ok(NativeValue::Nil);
            }
            let node = grid.node_type(&coord)?;
            Ok(NativeValue::Node {
                base_type: node.base_type().name(),
                placement_modifier: node.placement_modifier().name(),
            })
        }
        NativeFn::GetSize => {
            let size = session.grid.borrow().size();
            Ok(NativeValue::Size {
                width: size.width,
                height: size.height,
                depth: size.depth,
            })
        }
    }
}

/// Unmarshal the leading x, y, z arguments into a coordinate.
fn coord_args(args: &[mlua::Value]) -> Result<Coord, ScriptError> {
    let x = u32::from_script(&ScriptValue::from_lua(&args[0]))?;
    let y = u32::from_script(&ScriptValue::from_lua(&args[1]))?;
    let z = u32::from_script(&ScriptValue::from_lua(&args[2]))?;
    Ok(Coord::new(x, y, z))
}

/// Unmarshal a velocity argument.
///
/// Components 0–2 are read; extra elements are ignored. A missing or
/// non-numeric component fails the usual float conversion.
fn velocity_arg(value: &mlua::Value) -> Result<[f64; 3], ScriptError> {
    match ScriptValue::from_lua(value) {
        ScriptValue::Array(items) => {
            let component = |i: usize| -> Result<f64, ScriptError> {
                f64::from_script(items.get(i).unwrap_or(&ScriptValue::Nil))
            };
            Ok([component(0)?, component(1)?, component(2)?])
        }
        other => Err(ScriptError::TypeMismatch {
            expected: "an array",
            actual: other.type_name(),
        }),
    }
}
