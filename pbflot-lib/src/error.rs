use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum FlotationError {
    EmptyTable(String),
    NoAttributes(String),
    DuplicateAttribute { table: String, attribute: String },
    NonFiniteKey { table: String, key: f64 },
    DuplicateKey { table: String, key: f64 },
    RaggedPoint { table: String, key: f64, expected: usize, found: usize },
    MissingAttribute { table: String, attribute: String },
    UnknownTable(String),
    UnknownLever(String),
    UnknownIronModel(String),
    UnknownAirRateUnits(String),
    DataError(String),
}

pub type Result<T> = std::result::Result<T, FlotationError>;

impl fmt::Display for FlotationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyTable(table) => write!(f, "table '{table}' has no control points"),
            Self::NoAttributes(table) => write!(f, "table '{table}' defines no attributes"),
            Self::DuplicateAttribute { table, attribute } => {
                write!(f, "attribute '{attribute}' listed twice in table '{table}'")
            }
            Self::NonFiniteKey { table, key } => {
                write!(f, "non-finite key {key} in table '{table}'")
            }
            Self::DuplicateKey { table, key } => {
                write!(f, "duplicate key {key} in table '{table}'")
            }
            Self::RaggedPoint {
                table,
                key,
                expected,
                found,
            } => write!(
                f,
                "point {key} of table '{table}' has {found} values, expected {expected}"
            ),
            Self::MissingAttribute { table, attribute } => {
                write!(f, "table '{table}' has no attribute '{attribute}'")
            }
            Self::UnknownTable(name) => write!(f, "unknown response table: {name}"),
            Self::UnknownLever(name) => write!(f, "unknown lever: {name}"),
            Self::UnknownIronModel(name) => write!(f, "unknown iron model: {name}"),
            Self::UnknownAirRateUnits(name) => write!(f, "unknown air rate units: {name}"),
            Self::DataError(msg) => write!(f, "data error: {msg}"),
        }
    }
}

impl std::error::Error for FlotationError {}
