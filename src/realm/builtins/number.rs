//! Number.prototype methods

use crate::error::JsError;
use crate::realm::Realm;
use crate::value::{JsValue, number_to_string};

use super::this_primitive;

/// Initialize Number.prototype with toString, valueOf
pub fn init_number_prototype(realm: &mut Realm) -> Result<(), JsError> {
    let proto = realm.number_prototype;

    realm.register_method(proto, "toString", number_to_string_method, 0)?;
    realm.register_method(proto, "valueOf", number_value_of, 0)?;
    Ok(())
}

/// Number.prototype.toString()
pub fn number_to_string_method(
    realm: &mut Realm,
    this: JsValue,
    _args: &[JsValue],
) -> Result<JsValue, JsError> {
    let num_val = get_number_value(realm, &this)?;
    Ok(JsValue::from(number_to_string(num_val)))
}

/// Number.prototype.valueOf()
pub fn number_value_of(
    realm: &mut Realm,
    this: JsValue,
    _args: &[JsValue],
) -> Result<JsValue, JsError> {
    Ok(JsValue::Number(get_number_value(realm, &this)?))
}

/// Works for both primitive numbers and Number wrapper objects
fn get_number_value(realm: &Realm, this: &JsValue) -> Result<f64, JsError> {
    match this_primitive(realm, this) {
        Some(JsValue::Number(n)) => Ok(n),
        _ => Err(JsError::type_error(
            "Number.prototype method called on incompatible receiver",
        )),
    }
}
