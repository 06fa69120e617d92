//! Object literal construction

use super::Realm;
use crate::error::JsError;
use crate::property::{PropertyDescriptor, PropertySlot};
use crate::value::{FunctionRef, JsValue, ObjectRef, PropertyKey};

/// One entry of an object literal, already evaluated
#[derive(Debug, Clone)]
pub enum LiteralProperty {
    /// `key: value` or `"key": value`. A `__proto__` key here is the
    /// prototype initializer when the realm enables it.
    Init(PropertyKey, JsValue),
    /// `[expr]: value` or shorthand `{ key }`; always an own property
    Computed(PropertyKey, JsValue),
    /// `get key() {}`
    Getter(PropertyKey, FunctionRef),
    /// `set key(v) {}`
    Setter(PropertyKey, FunctionRef),
}

impl Realm {
    /// Evaluate an object literal. Entries are applied in source order, so
    /// later entries overwrite earlier ones and a getter and setter for the
    /// same key merge into one accessor.
    pub fn create_object_literal(
        &mut self,
        properties: impl IntoIterator<Item = LiteralProperty>,
    ) -> Result<ObjectRef, JsError> {
        let obj = self.create_plain_object();
        for property in properties {
            match property {
                LiteralProperty::Init(key, value)
                    if self.config().proto_initializer && key.eq_str("__proto__") =>
                {
                    self.set_prototype_from_value(obj, &value)?;
                }
                LiteralProperty::Init(key, value) | LiteralProperty::Computed(key, value) => {
                    self.define_own(obj, key, PropertyDescriptor::data(value))?;
                }
                LiteralProperty::Getter(key, getter) => {
                    let setter = self.own_accessor_half(obj, &key, |_, setter| setter)?;
                    self.define_own(obj, key, PropertyDescriptor::accessor(Some(getter), setter))?;
                }
                LiteralProperty::Setter(key, setter) => {
                    let getter = self.own_accessor_half(obj, &key, |getter, _| getter)?;
                    self.define_own(obj, key, PropertyDescriptor::accessor(getter, Some(setter)))?;
                }
            }
        }
        Ok(obj)
    }

    /// The half of an existing own accessor to keep when the other half is
    /// redefined; data properties are simply replaced
    fn own_accessor_half(
        &self,
        obj: ObjectRef,
        key: &PropertyKey,
        pick: impl Fn(Option<FunctionRef>, Option<FunctionRef>) -> Option<FunctionRef>,
    ) -> Result<Option<FunctionRef>, JsError> {
        Ok(match self.get_own_property_descriptor(obj, key)? {
            Some(PropertyDescriptor {
                slot: PropertySlot::Accessor { getter, setter },
                ..
            }) => pick(getter, setter),
            _ => None,
        })
    }
}
