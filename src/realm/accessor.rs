//! Getter/setter dispatch and `this` binding for host calls

use log::trace;

use super::Realm;
use crate::error::JsError;
use crate::property::PropertyDescriptor;
use crate::value::{CheapClone, FunctionRef, JsValue};

impl Realm {
    /// Run the getter of an accessor with `receiver` as `this`. An accessor
    /// without a getter reads as undefined.
    pub fn invoke_getter(
        &mut self,
        descriptor: &PropertyDescriptor,
        receiver: &JsValue,
    ) -> Result<JsValue, JsError> {
        let Some(getter) = descriptor.getter() else {
            return Ok(JsValue::Undefined);
        };
        trace!("invoking getter {:?} on {:?}", getter, receiver);
        self.call_function(getter, receiver.cheap_clone(), &[])
    }

    /// Run the setter of an accessor with `receiver` as `this` and `value`
    /// as its only argument. The setter's return value is discarded.
    pub fn invoke_setter(
        &mut self,
        descriptor: &PropertyDescriptor,
        receiver: &JsValue,
        value: JsValue,
    ) -> Result<(), JsError> {
        let Some(setter) = descriptor.setter() else {
            return Ok(());
        };
        trace!("invoking setter {:?} on {:?}", setter, receiver);
        self.call_function(setter, receiver.cheap_clone(), &[value])?;
        Ok(())
    }

    /// Call a registered function. Errors raised by the body, thrown values
    /// included, reach the caller unchanged.
    pub fn call_function(
        &mut self,
        function: FunctionRef,
        this: JsValue,
        args: &[JsValue],
    ) -> Result<JsValue, JsError> {
        let record = self.functions.get(function)?;
        let this = self.bind_this(record.strict, this)?;
        record.body.call(self, this, args)
    }

    /// Call a value; anything but a function object is a TypeError
    pub fn call(
        &mut self,
        callee: &JsValue,
        this: JsValue,
        args: &[JsValue],
    ) -> Result<JsValue, JsError> {
        let function = match callee {
            JsValue::Object(obj) => self.heap.get(*obj)?.function(),
            _ => None,
        };
        match function {
            Some(function) => self.call_function(function, this, args),
            None => Err(JsError::type_error(format!(
                "{} is not a function",
                self.describe(callee)
            ))),
        }
    }

    /// Strict bodies see `this` exactly as passed. Sloppy bodies see
    /// primitives boxed and undefined/null replaced by the global object.
    fn bind_this(&mut self, strict: bool, this: JsValue) -> Result<JsValue, JsError> {
        if strict {
            return Ok(this);
        }
        match this {
            JsValue::Undefined | JsValue::Null => Ok(JsValue::Object(self.global)),
            JsValue::Object(_) => Ok(this),
            primitive => Ok(JsValue::Object(self.to_object(&primitive)?)),
        }
    }
}
