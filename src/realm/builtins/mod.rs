//! Intrinsic prototype methods

pub mod boolean;
pub mod number;
pub mod object;
pub mod string;

pub use boolean::*;
pub use number::*;
pub use object::*;
pub use string::*;

use super::Realm;
use crate::error::JsError;
use crate::value::{CheapClone, JsValue};

/// Install every intrinsic method on the realm's prototypes
pub fn init_builtins(realm: &mut Realm) -> Result<(), JsError> {
    init_object_prototype(realm)?;
    init_boolean_prototype(realm)?;
    init_number_prototype(realm)?;
    init_string_prototype(realm)?;
    Ok(())
}

/// The primitive behind `this`: primitives as-is, wrapper objects unwrapped
pub(crate) fn this_primitive(realm: &Realm, this: &JsValue) -> Option<JsValue> {
    match this {
        JsValue::Object(obj) => realm
            .object(*obj)
            .ok()
            .and_then(|record| record.primitive_value().map(CheapClone::cheap_clone)),
        JsValue::Undefined | JsValue::Null => None,
        primitive => Some(primitive.cheap_clone()),
    }
}
