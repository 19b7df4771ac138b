use ghcc_types::{FieldErrors, FieldNameError};

#[derive(Debug, thiserror::Error)]
pub enum FormError {
    #[error("{0}")]
    UnknownField(#[from] FieldNameError),
    #[error("unknown appointment type: '{0}'")]
    UnknownAppointmentType(String),
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
    #[error("form has validation errors: {0}")]
    Validation(FieldErrors),
}

pub type FormResult<T> = std::result::Result<T, FormError>;
