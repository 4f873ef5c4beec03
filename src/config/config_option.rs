use crate::{
    misc::log::targets::{self},
    types::err::{self},
};

/// A configuration option, together with the bounds within which the value may be set.
#[derive(Clone, Debug)]
pub struct ConfigOption<T> {
    pub name: &'static str,
    pub min: T,
    pub max: T,
    pub value: T,
}

impl<T: Clone + PartialOrd> ConfigOption<T> {
    pub fn min_max(&self) -> (T, T) {
        (self.min.clone(), self.max.clone())
    }

    /// Sets the value of the option to `value`, if `value` is within the bounds of the option.
    pub fn set(&mut self, value: T) -> Result<(), err::ConfigError> {
        if value < self.min || self.max < value {
            log::warn!(target: targets::CONFIG, "Value outside the bounds of {}", self.name);
            return Err(err::ConfigError::OutOfBounds);
        }
        self.value = value;
        Ok(())
    }
}
