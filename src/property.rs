//! Property descriptors and the ordered per-object property table

use crate::prelude::{IndexMap, index_map_new};
use crate::value::{CheapClone, FunctionRef, JsValue, PropertyKey};

/// Payload of a property: either a stored value or a getter/setter pair
#[derive(Debug, Clone)]
pub enum PropertySlot {
    Data {
        value: JsValue,
        writable: bool,
    },
    Accessor {
        getter: Option<FunctionRef>,
        setter: Option<FunctionRef>,
    },
}

/// Object property descriptor
#[derive(Debug, Clone)]
pub struct PropertyDescriptor {
    pub slot: PropertySlot,
    pub enumerable: bool,
    pub configurable: bool,
}

impl PropertyDescriptor {
    /// Writable, enumerable, configurable data property
    pub fn data(value: JsValue) -> Self {
        Self::with_attributes(value, true, true, true)
    }

    pub fn data_readonly(value: JsValue) -> Self {
        Self::with_attributes(value, false, true, true)
    }

    /// Data property as installed for built-in methods (not enumerable)
    pub fn hidden(value: JsValue) -> Self {
        Self::with_attributes(value, true, false, true)
    }

    /// Create a property with custom attributes
    pub fn with_attributes(
        value: JsValue,
        writable: bool,
        enumerable: bool,
        configurable: bool,
    ) -> Self {
        Self {
            slot: PropertySlot::Data { value, writable },
            enumerable,
            configurable,
        }
    }

    /// Create an accessor property with getter and/or setter
    pub fn accessor(getter: Option<FunctionRef>, setter: Option<FunctionRef>) -> Self {
        Self {
            slot: PropertySlot::Accessor { getter, setter },
            enumerable: true,
            configurable: true,
        }
    }

    pub fn is_accessor(&self) -> bool {
        matches!(self.slot, PropertySlot::Accessor { .. })
    }

    pub fn is_data(&self) -> bool {
        matches!(self.slot, PropertySlot::Data { .. })
    }

    /// Stored value of a data property
    pub fn value(&self) -> Option<&JsValue> {
        match &self.slot {
            PropertySlot::Data { value, .. } => Some(value),
            PropertySlot::Accessor { .. } => None,
        }
    }

    /// Accessor properties are never writable in the data sense
    pub fn is_writable(&self) -> bool {
        matches!(self.slot, PropertySlot::Data { writable: true, .. })
    }

    pub fn getter(&self) -> Option<FunctionRef> {
        match self.slot {
            PropertySlot::Accessor { getter, .. } => getter,
            PropertySlot::Data { .. } => None,
        }
    }

    pub fn setter(&self) -> Option<FunctionRef> {
        match self.slot {
            PropertySlot::Accessor { setter, .. } => setter,
            PropertySlot::Data { .. } => None,
        }
    }
}

/// Descriptor as passed to `Object.defineProperty`: every field optional.
///
/// `get`/`set` use a nested option so that "absent" and "explicitly
/// undefined" stay distinguishable.
#[derive(Debug, Clone, Default)]
pub struct PartialDescriptor {
    pub value: Option<JsValue>,
    pub writable: Option<bool>,
    pub get: Option<Option<FunctionRef>>,
    pub set: Option<Option<FunctionRef>>,
    pub enumerable: Option<bool>,
    pub configurable: Option<bool>,
}

impl PartialDescriptor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn value(mut self, value: JsValue) -> Self {
        self.value = Some(value);
        self
    }

    pub fn writable(mut self, writable: bool) -> Self {
        self.writable = Some(writable);
        self
    }

    pub fn get(mut self, getter: Option<FunctionRef>) -> Self {
        self.get = Some(getter);
        self
    }

    pub fn set(mut self, setter: Option<FunctionRef>) -> Self {
        self.set = Some(setter);
        self
    }

    pub fn enumerable(mut self, enumerable: bool) -> Self {
        self.enumerable = Some(enumerable);
        self
    }

    pub fn configurable(mut self, configurable: bool) -> Self {
        self.configurable = Some(configurable);
        self
    }

    pub fn is_accessor_descriptor(&self) -> bool {
        self.get.is_some() || self.set.is_some()
    }

    pub fn is_data_descriptor(&self) -> bool {
        self.value.is_some() || self.writable.is_some()
    }

    pub fn is_generic_descriptor(&self) -> bool {
        !self.is_accessor_descriptor() && !self.is_data_descriptor()
    }

    /// Fill absent fields with the defaults used when creating a property
    pub fn to_complete(&self) -> PropertyDescriptor {
        let slot = if self.is_accessor_descriptor() {
            PropertySlot::Accessor {
                getter: self.get.flatten(),
                setter: self.set.flatten(),
            }
        } else {
            PropertySlot::Data {
                value: self.value.clone().unwrap_or_default(),
                writable: self.writable.unwrap_or(false),
            }
        };
        PropertyDescriptor {
            slot,
            enumerable: self.enumerable.unwrap_or(false),
            configurable: self.configurable.unwrap_or(false),
        }
    }
}

/// Ordered own-property storage for one object.
///
/// Backed by an insertion-ordered map: overwriting a key keeps its slot,
/// removal shifts later keys down so relative order is preserved.
#[derive(Debug, Clone)]
pub struct PropertyTable {
    entries: IndexMap<PropertyKey, PropertyDescriptor>,
}

impl PropertyTable {
    pub fn new() -> Self {
        Self {
            entries: index_map_new(),
        }
    }

    /// Insert or overwrite. An existing key keeps its enumeration position.
    pub fn define(&mut self, key: PropertyKey, descriptor: PropertyDescriptor) {
        self.entries.insert(key, descriptor);
    }

    pub fn get_own(&self, key: &PropertyKey) -> Option<&PropertyDescriptor> {
        self.entries.get(key)
    }

    pub fn get_own_mut(&mut self, key: &PropertyKey) -> Option<&mut PropertyDescriptor> {
        self.entries.get_mut(key)
    }

    pub fn contains(&self, key: &PropertyKey) -> bool {
        self.entries.contains_key(key)
    }

    /// Remove a configurable property. Returns false when the key is absent
    /// or the property is non-configurable; the caller decides whether that
    /// is an error.
    pub fn delete(&mut self, key: &PropertyKey) -> bool {
        match self.entries.get(key) {
            Some(desc) if desc.configurable => self.entries.shift_remove(key).is_some(),
            _ => false,
        }
    }

    /// Integer keys in ascending numeric order, then string keys in
    /// insertion order.
    pub fn keys_in_enumeration_order(&self) -> Vec<PropertyKey> {
        let mut indices: Vec<u32> = Vec::new();
        let mut strings: Vec<PropertyKey> = Vec::new();
        for key in self.entries.keys() {
            match key {
                PropertyKey::Index(i) => indices.push(*i),
                PropertyKey::String(_) => strings.push(key.cheap_clone()),
            }
        }
        indices.sort_unstable();
        let mut result: Vec<PropertyKey> = indices.into_iter().map(PropertyKey::Index).collect();
        result.extend(strings);
        result
    }

    /// Entries in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&PropertyKey, &PropertyDescriptor)> {
        self.entries.iter()
    }

    pub(crate) fn descriptors_mut(&mut self) -> impl Iterator<Item = &mut PropertyDescriptor> {
        self.entries.values_mut()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for PropertyTable {
    fn default() -> Self {
        Self::new()
    }
}
