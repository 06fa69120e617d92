//! Integration tests for the realm, organized by feature
//!
//! These tests exercise property lookup through the public API only.
//! Logging goes through `env_logger`; run with `RUST_LOG=debug` to see
//! prototype changes and rejected assignments.

mod delete;
mod enumeration;
mod primitives;

use protochain::{
    FunctionRef, JsError, JsValue, ObjectRef, PropertyDescriptor, PropertyKey, Realm, RealmConfig,
};

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Create a realm with the default configuration
pub fn create_test_realm() -> Realm {
    init_logging();
    Realm::new()
}

/// Create a realm with an explicit configuration
pub fn create_realm_with(config: RealmConfig) -> Realm {
    init_logging();
    Realm::with_config(config)
}

/// Read `obj[name]`
pub fn get(realm: &mut Realm, obj: ObjectRef, name: &str) -> JsValue {
    realm.get_property(obj, name).unwrap()
}

/// Sloppy-mode `obj[name] = value`
pub fn put(realm: &mut Realm, obj: ObjectRef, name: &str, value: impl Into<JsValue>) {
    realm.set_property(obj, name, value.into()).unwrap();
}

/// Own keys rendered as strings, for compact assertions
pub fn key_names(keys: Vec<PropertyKey>) -> Vec<String> {
    keys.iter().map(|k| k.to_string()).collect()
}

/// Look up a method on `this` and call it
pub fn call_method(
    realm: &mut Realm,
    this: &JsValue,
    name: &str,
    args: &[JsValue],
) -> Result<JsValue, JsError> {
    let key = realm.key(name);
    let method = realm.get_value(this, &key)?;
    realm.call(&method, this.clone(), args)
}

fn return_this(_: &mut Realm, this: JsValue, _: &[JsValue]) -> Result<JsValue, JsError> {
    Ok(this)
}

fn this_type(realm: &mut Realm, this: JsValue, _: &[JsValue]) -> Result<JsValue, JsError> {
    Ok(JsValue::from(realm.type_of(&this)))
}

/// Getter that returns its receiver unchanged
pub fn this_getter(realm: &mut Realm, strict: bool) -> FunctionRef {
    realm.create_function("getThis", strict, 0, return_this)
}

/// Getter that reports `typeof this`
pub fn this_type_getter(realm: &mut Realm, strict: bool) -> FunctionRef {
    realm.create_function("getThisType", strict, 0, this_type)
}

/// Getter that always returns `value`
pub fn constant_getter(realm: &mut Realm, value: JsValue) -> FunctionRef {
    realm.create_function(
        "getConstant",
        true,
        0,
        move |_: &mut Realm, _: JsValue, _: &[JsValue]| -> Result<JsValue, JsError> {
            Ok(value.clone())
        },
    )
}

/// Install an accessor on `obj` (enumerable, configurable)
pub fn define_accessor(
    realm: &mut Realm,
    obj: ObjectRef,
    name: &str,
    getter: Option<FunctionRef>,
    setter: Option<FunctionRef>,
) {
    let key = realm.key(name);
    realm
        .define_own(obj, key, PropertyDescriptor::accessor(getter, setter))
        .unwrap();
}
