//! Conversion pipeline: normalize, flatten, stamp, and the directory driver.

use crate::draft;
use crate::error::SwaggerGenError;
use crate::flatten::flatten;
use crate::naming;
use crate::pretty::to_pretty_string;
use crate::registry::DefinitionRegistry;
use crate::settings::ConvertSettings;
use crate::template::SwaggerTemplate;
use serde_json::Value;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

const SCHEMA_EXTENSION: &str = ".json";

/// Outcome of [`convert_directory`].
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ConvertReport {
    /// Output files written, in processing order.
    pub written: Vec<PathBuf>,
    /// Input file names whose output could not be written.
    pub failed: Vec<String>,
}

impl ConvertReport {
    /// True when every output was written.
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.failed.is_empty()
    }
}

/// Root definition name for a schema file stem: `USER_ACCOUNT` -> `UserAccountPayload`.
#[must_use]
pub fn definition_name_for_stem(stem: &str) -> String {
    format!("{}Payload", naming::upper_underscore_to_upper_camel(stem))
}

/// Convert one parsed schema into a Swagger document whose root definition
/// is `root_name`.
///
/// # Errors
///
/// Returns `SwaggerGenError::RootNotObject` if `schema` is not an object,
/// `SwaggerGenError::MissingPropertyType` for a property without `$ref` or
/// `type`, and `SwaggerGenError::InvalidTemplate` if stamping fails.
pub fn convert_schema(
    schema: Value,
    root_name: &str,
    template: &SwaggerTemplate,
) -> Result<Value, SwaggerGenError> {
    if !schema.is_object() {
        return Err(SwaggerGenError::RootNotObject);
    }
    let normalized: Value = draft::normalize(schema);
    let mut registry: DefinitionRegistry = DefinitionRegistry::new();
    flatten(root_name, &normalized, &mut registry)?;
    template.stamp(registry.into_definitions(), root_name)
}

/// Convert every `*.json` file directly inside `settings.source_dir` and
/// write each result under the same file name in `settings.dest_dir`.
///
/// Files are processed in file-name order. A file that cannot be read,
/// parsed or converted stops the run; a failed write is logged, recorded in
/// the report, and the run continues with the next file.
///
/// # Errors
///
/// Returns `SwaggerGenError::InFile` naming the source directory, the
/// template or the input file that failed.
pub fn convert_directory(settings: &ConvertSettings) -> Result<ConvertReport, SwaggerGenError> {
    let template: SwaggerTemplate = match &settings.template_path {
        Some(path) => SwaggerTemplate::from_file(path)?,
        None => SwaggerTemplate::builtin()?,
    };

    let inputs: Vec<SchemaFile> = list_schema_files(&settings.source_dir)
        .map_err(|e| e.in_file(settings.source_dir.display().to_string()))?;

    let mut report: ConvertReport = ConvertReport::default();
    for input in inputs {
        let rendered: String = convert_file(&input, &template)
            .map_err(|e| e.in_file(input.file_name.clone()))?;

        let output_path: PathBuf = settings.dest_dir.join(&input.file_name);
        match write_output(&settings.dest_dir, &output_path, &rendered) {
            Ok(()) => {
                tracing::info!(output = %output_path.display(), "wrote swagger document");
                report.written.push(output_path);
            }
            Err(e) => {
                tracing::error!(
                    output = %output_path.display(),
                    error = %e,
                    "failed to write swagger document"
                );
                report.failed.push(input.file_name);
            }
        }
    }

    Ok(report)
}

/// An input schema file and the stem its names derive from.
struct SchemaFile {
    path: PathBuf,
    file_name: String,
    stem: String,
}

fn list_schema_files(source_dir: &Path) -> Result<Vec<SchemaFile>, SwaggerGenError> {
    let mut files: BTreeMap<String, SchemaFile> = BTreeMap::new();
    for entry in fs::read_dir(source_dir)? {
        let path: PathBuf = entry?.path();
        if !path.is_file() {
            continue;
        }
        let Some(file_name) = path.file_name().and_then(|n| n.to_str()) else {
            tracing::warn!(path = %path.display(), "skipping file with non UTF-8 name");
            continue;
        };
        let Some(stem) = file_name.strip_suffix(SCHEMA_EXTENSION) else {
            continue;
        };
        let (file_name, stem): (String, String) = (file_name.to_string(), stem.to_string());
        files.insert(
            file_name.clone(),
            SchemaFile {
                path,
                file_name,
                stem,
            },
        );
    }
    Ok(files.into_values().collect())
}

fn convert_file(input: &SchemaFile, template: &SwaggerTemplate) -> Result<String, SwaggerGenError> {
    let text: String = fs::read_to_string(&input.path)?;
    let schema: Value = serde_json::from_str(&text)?;
    let root_name: String = definition_name_for_stem(&input.stem);
    let document: Value = convert_schema(schema, &root_name, template)?;
    to_pretty_string(&document)
}

fn write_output(dest_dir: &Path, output_path: &Path, rendered: &str) -> std::io::Result<()> {
    fs::create_dir_all(dest_dir)?;
    fs::write(output_path, rendered)
}
