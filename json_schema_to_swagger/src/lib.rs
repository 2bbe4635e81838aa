//! Convert JSON Schema documents (draft-03, 04, 06 and 07) into Swagger 2.0.
//!
//! Each schema becomes one Swagger document: nested object schemas are
//! flattened into uniquely named `definitions`, properties get Swagger
//! formats and Java naming hints, and the result is stamped into a template
//! describing a single `GET /api` operation that returns the root definition.

mod coerce;
mod convert;
mod draft;
mod error;
mod flatten;
mod json_pointer;
pub mod naming;
mod pretty;
mod registry;
mod settings;
mod template;

#[cfg(test)]
mod test_support;

pub use convert::{ConvertReport, convert_directory, convert_schema, definition_name_for_stem};
pub use draft::{Draft, normalize};
pub use error::SwaggerGenError;
pub use flatten::flatten;
pub use pretty::to_pretty_string;
pub use registry::DefinitionRegistry;
pub use settings::ConvertSettings;
pub use template::{BUILTIN_TEMPLATE, SwaggerTemplate};
