use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    #[error("invalid {kind} value: {value}")]
    InvalidEnumValue { kind: &'static str, value: i64 },
    #[error("unknown {kind} '{name}'")]
    UnknownEnumName { kind: &'static str, name: String },
    #[error("invalid money amount '{0}'")]
    InvalidMoney(String),
}
