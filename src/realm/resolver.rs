//! Property resolution along the prototype chain
//!
//! GET walks from the target towards `None` and returns the first match,
//! invoking getters with the original receiver. SET finds the nearest
//! descriptor the same way but only ever writes to the receiver itself.
//! Nothing here caches lookups, so prototype mutations are seen immediately.

use log::debug;

use super::Realm;
use crate::error::JsError;
use crate::prelude::FxHashSet;
use crate::property::{PartialDescriptor, PropertyDescriptor, PropertySlot};
use crate::object::string_own_descriptor;
use crate::value::{CheapClone, JsValue, ObjectRef, PropertyKey};

/// Why an ordinary SET did not store the value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SetRejection {
    /// The nearest property is a non-writable data property
    ReadOnly,
    /// The nearest property is an accessor without a setter
    GetterOnly,
    /// The receiver's own property is an accessor
    ReceiverAccessor,
    /// A new property would be added to a non-extensible receiver
    NotExtensible,
    /// The receiver is a primitive, which has nowhere to store a property
    PrimitiveReceiver,
}

impl Realm {
    /// First object of the chain searched for `target`, or `None` when the
    /// lookup can be answered without one
    fn lookup_start(&self, target: &JsValue) -> Option<ObjectRef> {
        match target {
            JsValue::Object(obj) => Some(*obj),
            _ => self.prototype_for_primitive(target),
        }
    }

    /// Find the nearest descriptor for `key`, starting at `start`
    pub fn find_property(
        &self,
        start: Option<ObjectRef>,
        key: &PropertyKey,
    ) -> Result<Option<(ObjectRef, PropertyDescriptor)>, JsError> {
        let mut current = start;
        while let Some(holder) = current {
            let record = self.heap.get(holder)?;
            if let Some(desc) = record.own_property(key) {
                return Ok(Some((holder, desc)));
            }
            current = record.prototype();
        }
        Ok(None)
    }

    // ═══════════════════════════════════════════════════════════════════════════
    // GET
    // ═══════════════════════════════════════════════════════════════════════════

    /// `[[Get]]`: read `key` from `target`, calling getters with `receiver`
    /// as `this`. Missing properties read as undefined.
    pub fn get(
        &mut self,
        target: &JsValue,
        key: &PropertyKey,
        receiver: &JsValue,
    ) -> Result<JsValue, JsError> {
        match target {
            JsValue::Undefined | JsValue::Null => {
                return Err(JsError::type_error(format!(
                    "Cannot read properties of {:?} (reading '{}')",
                    target, key
                )));
            }
            JsValue::String(s) => {
                if let Some(desc) = string_own_descriptor(s, key) {
                    return Ok(desc.value().cloned().unwrap_or_default());
                }
            }
            _ => {}
        }

        let start = self.lookup_start(target);
        match self.find_property(start, key)? {
            Some((_, desc)) => match &desc.slot {
                PropertySlot::Data { value, .. } => Ok(value.cheap_clone()),
                PropertySlot::Accessor { .. } => self.invoke_getter(&desc, receiver),
            },
            None => Ok(JsValue::Undefined),
        }
    }

    /// Member read `value.key` where the receiver is the value itself
    pub fn get_value(&mut self, value: &JsValue, key: &PropertyKey) -> Result<JsValue, JsError> {
        self.get(value, key, value)
    }

    /// Convenience read of a string-named property of an object
    pub fn get_property(&mut self, obj: ObjectRef, name: &str) -> Result<JsValue, JsError> {
        let key = self.key(name);
        let target = JsValue::Object(obj);
        self.get(&target, &key, &target)
    }

    // ═══════════════════════════════════════════════════════════════════════════
    // SET
    // ═══════════════════════════════════════════════════════════════════════════

    /// `[[Set]]`: assign `value` to `key`.
    ///
    /// The nearest descriptor on `target`'s chain decides the outcome: a
    /// setter is called with `receiver`, a read-only property or getter-only
    /// accessor rejects the write, anything else defines or updates an own
    /// data property on `receiver`. Rejections are TypeErrors in strict
    /// code and silently ignored otherwise.
    pub fn set(
        &mut self,
        target: &JsValue,
        key: &PropertyKey,
        value: JsValue,
        receiver: &JsValue,
        strict: bool,
    ) -> Result<(), JsError> {
        match self.ordinary_set(target, key, value, receiver)? {
            None => Ok(()),
            Some(rejection) => {
                if strict {
                    let message = self.set_rejection_message(rejection, key, receiver);
                    debug!("strict assignment rejected: {}", message);
                    Err(JsError::type_error(message))
                } else {
                    debug!("sloppy assignment to '{}' ignored ({:?})", key, rejection);
                    Ok(())
                }
            }
        }
    }

    /// Member assignment `value.key = v` where the receiver is the value itself
    pub fn set_value(
        &mut self,
        target: &JsValue,
        key: &PropertyKey,
        value: JsValue,
        strict: bool,
    ) -> Result<(), JsError> {
        self.set(target, key, value, target, strict)
    }

    /// Convenience sloppy assignment of a string-named property of an object
    pub fn set_property(&mut self, obj: ObjectRef, name: &str, value: JsValue) -> Result<(), JsError> {
        let key = self.key(name);
        let target = JsValue::Object(obj);
        self.set(&target, &key, value, &target, false)
    }

    fn ordinary_set(
        &mut self,
        target: &JsValue,
        key: &PropertyKey,
        value: JsValue,
        receiver: &JsValue,
    ) -> Result<Option<SetRejection>, JsError> {
        match target {
            JsValue::Undefined | JsValue::Null => {
                return Err(JsError::type_error(format!(
                    "Cannot set properties of {:?} (setting '{}')",
                    target, key
                )));
            }
            JsValue::String(s) => {
                if string_own_descriptor(s, key).is_some() {
                    return Ok(Some(SetRejection::ReadOnly));
                }
            }
            _ => {}
        }

        let start = self.lookup_start(target);
        match self.find_property(start, key)? {
            Some((_, desc)) if desc.is_accessor() => {
                if desc.setter().is_none() {
                    return Ok(Some(SetRejection::GetterOnly));
                }
                self.invoke_setter(&desc, receiver, value)?;
                Ok(None)
            }
            Some((_, desc)) if !desc.is_writable() => Ok(Some(SetRejection::ReadOnly)),
            _ => self.write_own_data(receiver, key, value),
        }
    }

    /// Final step of SET: update or create the data property on the receiver
    fn write_own_data(
        &mut self,
        receiver: &JsValue,
        key: &PropertyKey,
        value: JsValue,
    ) -> Result<Option<SetRejection>, JsError> {
        let JsValue::Object(obj) = receiver else {
            return Ok(Some(SetRejection::PrimitiveReceiver));
        };
        let record = self.heap.get_mut(*obj)?;
        if record
            .string_data()
            .is_some_and(|s| string_own_descriptor(s, key).is_some())
        {
            return Ok(Some(SetRejection::ReadOnly));
        }
        if let Some(desc) = record.properties.get_own_mut(key) {
            return Ok(match &mut desc.slot {
                PropertySlot::Accessor { .. } => Some(SetRejection::ReceiverAccessor),
                PropertySlot::Data {
                    writable: false, ..
                } => Some(SetRejection::ReadOnly),
                PropertySlot::Data { value: slot, .. } => {
                    *slot = value;
                    None
                }
            });
        }
        if !record.is_extensible() {
            return Ok(Some(SetRejection::NotExtensible));
        }
        record
            .properties
            .define(key.cheap_clone(), PropertyDescriptor::data(value));
        Ok(None)
    }

    fn set_rejection_message(
        &self,
        rejection: SetRejection,
        key: &PropertyKey,
        receiver: &JsValue,
    ) -> String {
        let label = self.describe(receiver);
        match rejection {
            SetRejection::ReadOnly if receiver.is_object() => format!(
                "Cannot assign to read only property '{}' of object '{}'",
                key, label
            ),
            SetRejection::ReadOnly => {
                format!("Cannot assign to read only property '{}' of {}", key, label)
            }
            SetRejection::GetterOnly => {
                format!("Cannot set property {} of {} which has only a getter", key, label)
            }
            SetRejection::ReceiverAccessor => {
                format!("Cannot redefine property: {}", key)
            }
            SetRejection::NotExtensible => {
                format!("Cannot add property {}, object is not extensible", key)
            }
            SetRejection::PrimitiveReceiver => {
                format!("Cannot create property '{}' on {}", key, label)
            }
        }
    }

    // ═══════════════════════════════════════════════════════════════════════════
    // DELETE and definition
    // ═══════════════════════════════════════════════════════════════════════════

    /// `delete obj[key]`: removes an own configurable property. Missing keys
    /// succeed; non-configurable ones fail (a TypeError in strict code).
    /// Inherited properties are never touched.
    pub fn delete(&mut self, obj: ObjectRef, key: &PropertyKey, strict: bool) -> Result<bool, JsError> {
        let record = self.heap.get_mut(obj)?;
        let configurable = match record.own_property(key) {
            None => return Ok(true),
            Some(desc) => desc.configurable,
        };
        if configurable {
            record.properties.delete(key);
            return Ok(true);
        }
        if strict {
            let label = record.class_label();
            return Err(JsError::type_error(format!(
                "Cannot delete property '{}' of {}",
                key, label
            )));
        }
        Ok(false)
    }

    /// Install a complete descriptor as an own property, overwriting any
    /// existing one in place. Bypasses attribute validation; used for
    /// literal construction and host setup.
    pub fn define_own(
        &mut self,
        obj: ObjectRef,
        key: PropertyKey,
        descriptor: PropertyDescriptor,
    ) -> Result<(), JsError> {
        self.heap.get_mut(obj)?.properties.define(key, descriptor);
        Ok(())
    }

    /// `[[DefineOwnProperty]]` with full attribute validation.
    ///
    /// Returns false when the change is not allowed: adding to a
    /// non-extensible object, or altering a non-configurable property in any
    /// way other than narrowing a writable data property.
    pub fn define_property(
        &mut self,
        obj: ObjectRef,
        key: PropertyKey,
        desc: PartialDescriptor,
    ) -> Result<bool, JsError> {
        if desc.is_accessor_descriptor() && desc.is_data_descriptor() {
            return Err(JsError::type_error(
                "Invalid property descriptor. Cannot both specify accessors and a value or writable attribute",
            ));
        }

        let record = self.heap.get_mut(obj)?;
        let Some(current) = record.own_property(&key) else {
            if !record.is_extensible() {
                return Ok(false);
            }
            record.properties.define(key, desc.to_complete());
            return Ok(true);
        };

        if !current.configurable && !is_compatible_change(&current, &desc) {
            return Ok(false);
        }
        if record
            .string_data()
            .is_some_and(|s| string_own_descriptor(s, &key).is_some())
        {
            // compatible redefinition of a code unit or `length` changes nothing
            return Ok(true);
        }
        record.properties.define(key, merge_descriptor(current, desc));
        Ok(true)
    }

    /// Object.defineProperty: like [`Realm::define_property`] but a refused
    /// definition is a TypeError
    pub fn define_property_or_throw(
        &mut self,
        obj: ObjectRef,
        key: PropertyKey,
        desc: PartialDescriptor,
    ) -> Result<(), JsError> {
        let existed = self.has_own_property(obj, &key)?;
        let message_key = key.cheap_clone();
        if self.define_property(obj, key, desc)? {
            return Ok(());
        }
        if existed {
            Err(JsError::type_error(format!("Cannot redefine property: {}", message_key)))
        } else {
            Err(JsError::type_error(format!(
                "Cannot define property {}, object is not extensible",
                message_key
            )))
        }
    }

    // ═══════════════════════════════════════════════════════════════════════════
    // Queries
    // ═══════════════════════════════════════════════════════════════════════════

    pub fn get_own_property_descriptor(
        &self,
        obj: ObjectRef,
        key: &PropertyKey,
    ) -> Result<Option<PropertyDescriptor>, JsError> {
        self.heap.own_descriptor(obj, key)
    }

    pub fn has_own_property(&self, obj: ObjectRef, key: &PropertyKey) -> Result<bool, JsError> {
        Ok(self.heap.get(obj)?.has_own(key))
    }

    /// The `in` operator: own or inherited
    pub fn has_property(&self, obj: ObjectRef, key: &PropertyKey) -> Result<bool, JsError> {
        Ok(self.find_property(Some(obj), key)?.is_some())
    }

    /// Every own key, enumerable or not, in enumeration order
    pub fn own_property_keys(&self, obj: ObjectRef) -> Result<Vec<PropertyKey>, JsError> {
        Ok(self.heap.get(obj)?.own_keys())
    }

    /// Own enumerable keys in enumeration order (Object.keys)
    pub fn enumerate_keys(&self, obj: ObjectRef) -> Result<Vec<PropertyKey>, JsError> {
        let record = self.heap.get(obj)?;
        Ok(record
            .own_keys()
            .into_iter()
            .filter(|key| record.own_property(key).is_some_and(|d| d.enumerable))
            .collect())
    }

    /// for-in order: own enumerable keys, then each prototype's in turn.
    /// A key is reported once, and a non-enumerable property hides
    /// same-named keys further up the chain.
    pub fn enumerate_chain_keys(&self, obj: ObjectRef) -> Result<Vec<PropertyKey>, JsError> {
        let mut result = Vec::new();
        let mut visited: FxHashSet<PropertyKey> = FxHashSet::default();
        let mut current = Some(obj);
        while let Some(holder) = current {
            let record = self.heap.get(holder)?;
            for key in record.own_keys() {
                if !visited.insert(key.cheap_clone()) {
                    continue;
                }
                if record.own_property(&key).is_some_and(|d| d.enumerable) {
                    result.push(key);
                }
            }
            current = record.prototype();
        }
        Ok(result)
    }
}

/// Whether `desc` may be applied to the non-configurable property `current`
fn is_compatible_change(current: &PropertyDescriptor, desc: &PartialDescriptor) -> bool {
    if desc.configurable == Some(true) {
        return false;
    }
    if desc.enumerable.is_some_and(|e| e != current.enumerable) {
        return false;
    }
    if desc.is_generic_descriptor() {
        return true;
    }
    if desc.is_accessor_descriptor() != current.is_accessor() {
        return false;
    }
    match &current.slot {
        PropertySlot::Accessor { getter, setter } => {
            desc.get.is_none_or(|g| g == *getter) && desc.set.is_none_or(|s| s == *setter)
        }
        PropertySlot::Data {
            value,
            writable: false,
        } => {
            desc.writable != Some(true)
                && desc.value.as_ref().is_none_or(|v| v.same_value(value))
        }
        PropertySlot::Data { .. } => true,
    }
}

/// Apply the fields present in `desc` on top of `current`. Switching
/// between data and accessor resets the slot to that kind's defaults.
fn merge_descriptor(current: PropertyDescriptor, desc: PartialDescriptor) -> PropertyDescriptor {
    let slot = match current.slot {
        PropertySlot::Data { .. } if desc.is_accessor_descriptor() => PropertySlot::Accessor {
            getter: desc.get.flatten(),
            setter: desc.set.flatten(),
        },
        PropertySlot::Accessor { .. } if desc.is_data_descriptor() => PropertySlot::Data {
            value: desc.value.unwrap_or_default(),
            writable: desc.writable.unwrap_or(false),
        },
        PropertySlot::Data { value, writable } => PropertySlot::Data {
            value: desc.value.unwrap_or(value),
            writable: desc.writable.unwrap_or(writable),
        },
        PropertySlot::Accessor { getter, setter } => PropertySlot::Accessor {
            getter: desc.get.unwrap_or(getter),
            setter: desc.set.unwrap_or(setter),
        },
    };
    PropertyDescriptor {
        slot,
        enumerable: desc.enumerable.unwrap_or(current.enumerable),
        configurable: desc.configurable.unwrap_or(current.configurable),
    }
}
