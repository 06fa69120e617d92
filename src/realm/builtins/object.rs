//! Object.prototype methods and the `__proto__` accessor

use log::debug;

use crate::error::JsError;
use crate::realm::Realm;
use crate::value::{JsValue, PropertyKey};

/// Initialize Object.prototype. The `__proto__` accessor is only installed
/// when the realm enables the proto initializer.
pub fn init_object_prototype(realm: &mut Realm) -> Result<(), JsError> {
    let proto = realm.object_prototype;

    realm.register_method(proto, "hasOwnProperty", object_has_own_property, 1)?;
    realm.register_method(proto, "isPrototypeOf", object_is_prototype_of, 1)?;
    realm.register_method(proto, "propertyIsEnumerable", object_property_is_enumerable, 1)?;
    realm.register_method(proto, "toString", object_to_string, 0)?;
    realm.register_method(proto, "valueOf", object_value_of, 0)?;

    if realm.config().proto_initializer {
        realm.register_accessor(
            proto,
            "__proto__",
            Some(object_proto_getter),
            Some(object_proto_setter),
        )?;
    }
    Ok(())
}

fn first_arg(args: &[JsValue]) -> JsValue {
    args.first().cloned().unwrap_or_default()
}

/// Object.prototype.hasOwnProperty(key)
pub fn object_has_own_property(
    realm: &mut Realm,
    this: JsValue,
    args: &[JsValue],
) -> Result<JsValue, JsError> {
    let key = PropertyKey::from_value(&first_arg(args));
    let obj = realm.to_object(&this)?;
    Ok(JsValue::Boolean(realm.has_own_property(obj, &key)?))
}

/// Object.prototype.isPrototypeOf(value)
pub fn object_is_prototype_of(
    realm: &mut Realm,
    this: JsValue,
    args: &[JsValue],
) -> Result<JsValue, JsError> {
    // Primitives have no chain to search
    let JsValue::Object(mut check_obj) = first_arg(args) else {
        return Ok(JsValue::Boolean(false));
    };
    let this_obj = realm.to_object(&this)?;

    while let Some(proto) = realm.object(check_obj)?.prototype() {
        if proto == this_obj {
            return Ok(JsValue::Boolean(true));
        }
        check_obj = proto;
    }
    Ok(JsValue::Boolean(false))
}

/// Object.prototype.propertyIsEnumerable(key): own enumerable properties only
pub fn object_property_is_enumerable(
    realm: &mut Realm,
    this: JsValue,
    args: &[JsValue],
) -> Result<JsValue, JsError> {
    let key = PropertyKey::from_value(&first_arg(args));
    let obj = realm.to_object(&this)?;
    let enumerable = realm
        .get_own_property_descriptor(obj, &key)?
        .is_some_and(|desc| desc.enumerable);
    Ok(JsValue::Boolean(enumerable))
}

/// Object.prototype.toString(): `[object Tag]`
pub fn object_to_string(
    realm: &mut Realm,
    this: JsValue,
    _args: &[JsValue],
) -> Result<JsValue, JsError> {
    let tag = match &this {
        JsValue::Undefined => "Undefined",
        JsValue::Null => "Null",
        JsValue::Boolean(_) => "Boolean",
        JsValue::Number(_) => "Number",
        JsValue::String(_) => "String",
        JsValue::Object(obj) => {
            let record = realm.object(*obj)?;
            match record.primitive_value() {
                Some(JsValue::Boolean(_)) => "Boolean",
                Some(JsValue::Number(_)) => "Number",
                Some(JsValue::String(_)) => "String",
                _ if record.is_callable() => "Function",
                _ => "Object",
            }
        }
    };
    Ok(JsValue::from(format!("[object {}]", tag)))
}

/// Object.prototype.valueOf(): ToObject(this)
pub fn object_value_of(
    realm: &mut Realm,
    this: JsValue,
    _args: &[JsValue],
) -> Result<JsValue, JsError> {
    Ok(JsValue::Object(realm.to_object(&this)?))
}

/// get Object.prototype.__proto__
pub fn object_proto_getter(
    realm: &mut Realm,
    this: JsValue,
    _args: &[JsValue],
) -> Result<JsValue, JsError> {
    Ok(JsValue::from(realm.get_prototype_of(&this)?))
}

/// set Object.prototype.__proto__
///
/// Values other than objects and null are ignored, as are primitive
/// receivers. Undefined and null receivers are a TypeError.
pub fn object_proto_setter(
    realm: &mut Realm,
    this: JsValue,
    args: &[JsValue],
) -> Result<JsValue, JsError> {
    if this.is_null_or_undefined() {
        return Err(JsError::type_error(
            "Object.prototype.__proto__ called on null or undefined",
        ));
    }
    let proto = first_arg(args);
    if !proto.is_object() && proto != JsValue::Null {
        debug!("ignoring __proto__ assignment of non-object {:?}", proto);
        return Ok(JsValue::Undefined);
    }
    let JsValue::Object(obj) = this else {
        return Ok(JsValue::Undefined);
    };
    realm.set_prototype_from_value(obj, &proto)?;
    Ok(JsValue::Undefined)
}
