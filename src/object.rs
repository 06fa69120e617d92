//! Object records and the arena that owns them

use crate::error::JsError;
use crate::property::{PropertyDescriptor, PropertySlot, PropertyTable};
use crate::value::{CheapClone, FunctionRef, JsString, JsValue, ObjectRef, PropertyKey};

/// Exotic object behavior
#[derive(Debug, Clone)]
pub enum ObjectKind {
    /// Ordinary object
    Ordinary,
    /// Callable object backed by a host function
    Function(FunctionRef),
    /// Boolean, Number or String wrapper holding its primitive value
    PrimitiveWrapper(JsValue),
}

/// Own property of a string value: a code unit per index plus `length`.
/// Both are read-only and non-configurable; only the indices enumerate.
pub fn string_own_descriptor(s: &JsString, key: &PropertyKey) -> Option<PropertyDescriptor> {
    match key {
        PropertyKey::Index(i) => s.code_unit_at(*i as usize).map(|unit| {
            PropertyDescriptor::with_attributes(JsValue::String(unit), false, true, false)
        }),
        PropertyKey::String(name) if name.as_str() == "length" => {
            Some(PropertyDescriptor::with_attributes(
                JsValue::Number(s.utf16_len() as f64),
                false,
                false,
                false,
            ))
        }
        PropertyKey::String(_) => None,
    }
}

/// A JavaScript object
#[derive(Debug, Clone)]
pub struct ObjectRecord {
    /// Own properties in enumeration order
    pub properties: PropertyTable,
    /// Prototype link; `None` terminates the chain
    prototype: Option<ObjectRef>,
    /// Whether the object can have properties added
    extensible: bool,
    pub kind: ObjectKind,
}

impl ObjectRecord {
    /// Create a new ordinary object
    pub fn new(prototype: Option<ObjectRef>) -> Self {
        Self::with_kind(prototype, ObjectKind::Ordinary)
    }

    pub fn with_kind(prototype: Option<ObjectRef>, kind: ObjectKind) -> Self {
        Self {
            properties: PropertyTable::new(),
            prototype,
            extensible: true,
            kind,
        }
    }

    pub fn prototype(&self) -> Option<ObjectRef> {
        self.prototype
    }

    /// Change the prototype link.
    ///
    /// Re-assigning the current prototype always succeeds; any other change
    /// on a non-extensible object is a TypeError. Cycle checks need the whole
    /// heap and live in [`ObjectHeap::set_prototype`].
    pub(crate) fn set_prototype(&mut self, new_proto: Option<ObjectRef>) -> Result<(), JsError> {
        if self.prototype == new_proto {
            return Ok(());
        }
        if !self.extensible {
            return Err(JsError::type_error(format!(
                "{} is not extensible",
                self.class_label()
            )));
        }
        self.prototype = new_proto;
        Ok(())
    }

    pub fn is_extensible(&self) -> bool {
        self.extensible
    }

    pub fn prevent_extensions(&mut self) {
        self.extensible = false;
    }

    /// Object.freeze: non-extensible, every property non-configurable and
    /// data properties non-writable
    pub fn freeze(&mut self) {
        self.extensible = false;
        for desc in self.properties.descriptors_mut() {
            desc.configurable = false;
            if let PropertySlot::Data { writable, .. } = &mut desc.slot {
                *writable = false;
            }
        }
    }

    /// Object.seal: non-extensible, every property non-configurable
    pub fn seal(&mut self) {
        self.extensible = false;
        for desc in self.properties.descriptors_mut() {
            desc.configurable = false;
        }
    }

    pub fn is_frozen(&self) -> bool {
        !self.extensible
            && self
                .properties
                .iter()
                .all(|(_, desc)| !desc.configurable && !desc.is_writable())
    }

    pub fn is_sealed(&self) -> bool {
        !self.extensible && self.properties.iter().all(|(_, desc)| !desc.configurable)
    }

    pub fn is_callable(&self) -> bool {
        matches!(self.kind, ObjectKind::Function(_))
    }

    pub fn function(&self) -> Option<FunctionRef> {
        match self.kind {
            ObjectKind::Function(f) => Some(f),
            _ => None,
        }
    }

    pub fn primitive_value(&self) -> Option<&JsValue> {
        match &self.kind {
            ObjectKind::PrimitiveWrapper(value) => Some(value),
            _ => None,
        }
    }

    /// The wrapped string of a String wrapper object
    pub fn string_data(&self) -> Option<&JsString> {
        match &self.kind {
            ObjectKind::PrimitiveWrapper(JsValue::String(s)) => Some(s),
            _ => None,
        }
    }

    /// Own property lookup. String wrappers answer index and `length`
    /// reads from their string instead of the table.
    pub fn own_property(&self, key: &PropertyKey) -> Option<PropertyDescriptor> {
        if let Some(desc) = self.string_data().and_then(|s| string_own_descriptor(s, key)) {
            return Some(desc);
        }
        self.properties.get_own(key).cloned()
    }

    pub fn has_own(&self, key: &PropertyKey) -> bool {
        self.string_data()
            .is_some_and(|s| string_own_descriptor(s, key).is_some())
            || self.properties.contains(key)
    }

    /// Every own key in enumeration order: string indices, remaining
    /// integer keys, `length` for wrappers, then named keys
    pub fn own_keys(&self) -> Vec<PropertyKey> {
        let stored = self.properties.keys_in_enumeration_order();
        let Some(s) = self.string_data() else {
            return stored;
        };
        let len = s.utf16_len() as u32;
        let mut keys: Vec<PropertyKey> = (0..len).map(PropertyKey::Index).collect();
        keys.extend(
            stored
                .iter()
                .filter(|key| matches!(key, PropertyKey::Index(i) if *i >= len))
                .map(CheapClone::cheap_clone),
        );
        keys.push(PropertyKey::from("length"));
        keys.extend(
            stored
                .into_iter()
                .filter(|key| matches!(key, PropertyKey::String(_)) && !key.eq_str("length")),
        );
        keys
    }

    /// Label used in error messages, e.g. `#<Object>`
    pub fn class_label(&self) -> &'static str {
        match &self.kind {
            ObjectKind::Ordinary => "#<Object>",
            ObjectKind::Function(_) => "#<Function>",
            ObjectKind::PrimitiveWrapper(JsValue::Boolean(_)) => "#<Boolean>",
            ObjectKind::PrimitiveWrapper(JsValue::Number(_)) => "#<Number>",
            ObjectKind::PrimitiveWrapper(JsValue::String(_)) => "#<String>",
            ObjectKind::PrimitiveWrapper(_) => "#<Object>",
        }
    }
}

/// Arena owning every object record of a realm.
///
/// Records are addressed by [`ObjectRef`] and never freed; reachability is
/// the embedding engine's concern.
#[derive(Debug, Default)]
pub struct ObjectHeap {
    records: Vec<ObjectRecord>,
}

impl ObjectHeap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn alloc(&mut self, record: ObjectRecord) -> ObjectRef {
        let handle = ObjectRef(self.records.len() as u32);
        self.records.push(record);
        handle
    }

    pub fn get(&self, handle: ObjectRef) -> Result<&ObjectRecord, JsError> {
        self.records
            .get(handle.index())
            .ok_or_else(|| JsError::internal_error(format!("{:?} not found", handle)))
    }

    pub fn get_mut(&mut self, handle: ObjectRef) -> Result<&mut ObjectRecord, JsError> {
        self.records
            .get_mut(handle.index())
            .ok_or_else(|| JsError::internal_error(format!("{:?} not found", handle)))
    }

    /// Own descriptor copied out of the table so no borrow outlives the call
    pub fn own_descriptor(
        &self,
        handle: ObjectRef,
        key: &PropertyKey,
    ) -> Result<Option<PropertyDescriptor>, JsError> {
        Ok(self.get(handle)?.own_property(key))
    }

    pub fn prototype_of(&self, handle: ObjectRef) -> Result<Option<ObjectRef>, JsError> {
        Ok(self.get(handle)?.prototype())
    }

    /// Set the prototype of `handle`, refusing links that would create a cycle
    pub fn set_prototype(
        &mut self,
        handle: ObjectRef,
        new_proto: Option<ObjectRef>,
    ) -> Result<(), JsError> {
        if self.get(handle)?.prototype() == new_proto {
            return Ok(());
        }
        let mut current = new_proto;
        while let Some(ancestor) = current {
            if ancestor == handle {
                return Err(JsError::type_error("Cyclic __proto__ value"));
            }
            current = self.prototype_of(ancestor)?;
        }
        self.get_mut(handle)?.set_prototype(new_proto)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
