use crate::quantity::Quantity;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("unit '{0}' is not registered")]
    UnitNotRegistered(String),

    #[error("quantity mismatch: cannot convert {from} to {target}")]
    QuantityMismatch { from: Quantity, target: Quantity },

    #[error("invalid decimal literal: {0}")]
    InvalidDecimal(#[from] rust_decimal::Error),

    #[error("float {0} has no decimal representation")]
    UnrepresentableFloat(f64),

    #[error("division by zero")]
    DivisionByZero,

    #[error("unit '{0}' is already registered")]
    AlreadyRegistered(String),

    #[error("numeric overflow")]
    Overflow,
}
