//! Boolean.prototype methods

use crate::error::JsError;
use crate::realm::Realm;
use crate::value::JsValue;

use super::this_primitive;

/// Initialize Boolean.prototype with toString, valueOf
pub fn init_boolean_prototype(realm: &mut Realm) -> Result<(), JsError> {
    let proto = realm.boolean_prototype;

    realm.register_method(proto, "toString", boolean_to_string, 0)?;
    realm.register_method(proto, "valueOf", boolean_value_of, 0)?;
    Ok(())
}

/// Boolean.prototype.toString()
pub fn boolean_to_string(
    realm: &mut Realm,
    this: JsValue,
    _args: &[JsValue],
) -> Result<JsValue, JsError> {
    let bool_val = get_boolean_value(realm, &this)?;
    let result = if bool_val { "true" } else { "false" };
    Ok(JsValue::String(realm.intern(result)))
}

/// Boolean.prototype.valueOf()
pub fn boolean_value_of(
    realm: &mut Realm,
    this: JsValue,
    _args: &[JsValue],
) -> Result<JsValue, JsError> {
    Ok(JsValue::Boolean(get_boolean_value(realm, &this)?))
}

/// Works for both primitive booleans and Boolean wrapper objects
fn get_boolean_value(realm: &Realm, this: &JsValue) -> Result<bool, JsError> {
    match this_primitive(realm, this) {
        Some(JsValue::Boolean(b)) => Ok(b),
        _ => Err(JsError::type_error(
            "Boolean.prototype method called on incompatible receiver",
        )),
    }
}
