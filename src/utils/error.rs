use thiserror::Error;

#[derive(Error, Debug)]
pub enum LookupError {
    #[error("Who is the {name}?!!11!")]
    UnknownPerson { name: String },

    #[error("Sum of {x} and {y} does not fit in an i32")]
    Overflow { x: i32, y: i32 },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    TomlParseError(#[from] toml::de::Error),

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

impl LookupError {
    pub fn unknown_person(name: impl Into<String>) -> Self {
        Self::UnknownPerson { name: name.into() }
    }

    /// Process exit code used by the CLI for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::UnknownPerson { .. } => 2,
            Self::Overflow { .. } => 3,
            Self::IoError(_) | Self::TomlParseError(_) | Self::InvalidConfigValueError { .. } => 1,
        }
    }
}

pub type Result<T> = std::result::Result<T, LookupError>;
