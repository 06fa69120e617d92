//! String.prototype methods

use crate::error::JsError;
use crate::realm::Realm;
use crate::value::{JsString, JsValue};

use super::this_primitive;

/// Initialize String.prototype with toString and valueOf. Being a wrapper
/// of "", it reports an own `length` of 0 without storing one.
pub fn init_string_prototype(realm: &mut Realm) -> Result<(), JsError> {
    let proto = realm.string_prototype;

    realm.register_method(proto, "toString", string_to_string, 0)?;
    realm.register_method(proto, "valueOf", string_value_of, 0)?;
    Ok(())
}

/// String.prototype.toString()
pub fn string_to_string(
    realm: &mut Realm,
    this: JsValue,
    _args: &[JsValue],
) -> Result<JsValue, JsError> {
    Ok(JsValue::String(get_string_value(realm, &this)?))
}

/// String.prototype.valueOf()
pub fn string_value_of(
    realm: &mut Realm,
    this: JsValue,
    _args: &[JsValue],
) -> Result<JsValue, JsError> {
    Ok(JsValue::String(get_string_value(realm, &this)?))
}

/// Works for both primitive strings and String wrapper objects
fn get_string_value(realm: &Realm, this: &JsValue) -> Result<JsString, JsError> {
    match this_primitive(realm, this) {
        Some(JsValue::String(s)) => Ok(s),
        _ => Err(JsError::type_error(
            "String.prototype method called on incompatible receiver",
        )),
    }
}
