use std::error;
use std::fmt;

/// Error type for JSON Schema to Swagger conversion.
#[derive(Debug)]
pub enum SwaggerGenError {
    /// Generic error with a message.
    GenericError(String),

    /// I/O error (e.g., listing the source directory, reading a schema file).
    IoError(std::io::Error),

    /// JSON parsing or serialization error.
    JsonError(serde_json::Error),

    /// The schema document is not a JSON object.
    RootNotObject,

    /// A property that is not a `$ref` has no `type`.
    /// `path` is the JSON Pointer of the property inside the normalized schema.
    MissingPropertyType { path: String },

    /// The Swagger template lacks a location the stamper writes to.
    InvalidTemplate(String),

    /// Any of the above, raised while converting the named input file.
    InFile {
        file_name: String,
        source: Box<SwaggerGenError>,
    },
}

impl SwaggerGenError {
    /// Attach the input file name to this error.
    #[must_use]
    pub fn in_file(self, file_name: impl Into<String>) -> Self {
        Self::InFile {
            file_name: file_name.into(),
            source: Box::new(self),
        }
    }
}

impl error::Error for SwaggerGenError {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match self {
            Self::IoError(io_error) => Some(io_error),
            Self::JsonError(json_error) => Some(json_error),
            Self::InFile { source, .. } => Some(source.as_ref()),
            Self::GenericError(_)
            | Self::RootNotObject
            | Self::MissingPropertyType { .. }
            | Self::InvalidTemplate(_) => None,
        }
    }
}

impl fmt::Display for SwaggerGenError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::GenericError(message) => write!(f, "{message}"),
            Self::IoError(io_error) => fmt::Display::fmt(io_error, f),
            Self::JsonError(json_error) => fmt::Display::fmt(json_error, f),
            Self::RootNotObject => write!(f, "Supplied document is not a JSON Schema object"),
            Self::MissingPropertyType { path } => {
                write!(f, "Property at {path} has neither \"$ref\" nor \"type\"")
            }
            Self::InvalidTemplate(location) => {
                write!(f, "Swagger template is missing {location}")
            }
            Self::InFile { file_name, source } => write!(f, "{file_name}: {source}"),
        }
    }
}

impl From<std::io::Error> for SwaggerGenError {
    fn from(io_error: std::io::Error) -> Self {
        Self::IoError(io_error)
    }
}

impl From<serde_json::Error> for SwaggerGenError {
    fn from(json_error: serde_json::Error) -> Self {
        Self::JsonError(json_error)
    }
}
