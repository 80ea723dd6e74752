use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum InputError {
    #[error("coefficient '{name}' must be finite, got {value}")]
    NonFinite { name: &'static str, value: f64 },
}

impl InputError {
    pub fn non_finite(name: &'static str, value: f64) -> Self {
        Self::NonFinite { name, value }
    }
}
