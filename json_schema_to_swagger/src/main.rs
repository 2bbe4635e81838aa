//! Binary converting a directory of JSON Schemas into Swagger 2.0 documents.
//!
//! Usage: `jsonschema2swagger [--source <DIR>] [--dest <DIR>] [--template <FILE>] [-v]...`
//!
//! Every `*.json` file in the source directory is written, converted, under
//! the same name in the destination directory.

use std::path::PathBuf;
use std::process;

use clap::Parser;
use json_schema_to_swagger::{ConvertReport, ConvertSettings, convert_directory};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(author, version, about = "Convert JSON Schema files into Swagger 2.0 documents")]
struct Cli {
    /// Directory containing the `*.json` schemas to convert.
    #[arg(long, default_value = ".")]
    source: PathBuf,

    /// Directory the Swagger documents are written to.
    #[arg(long, default_value = "./swagger")]
    dest: PathBuf,

    /// Swagger template to use instead of the built-in one.
    #[arg(long)]
    template: Option<PathBuf>,

    /// Raise log verbosity (`-v` debug, `-vv` trace). `RUST_LOG` takes precedence.
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

impl Cli {
    fn settings(self) -> ConvertSettings {
        ConvertSettings {
            source_dir: self.source,
            dest_dir: self.dest,
            template_path: self.template,
        }
    }

    fn default_level(&self) -> &'static str {
        match self.verbose {
            0 => "info",
            1 => "debug",
            _ => "trace",
        }
    }
}

fn main() {
    let cli: Cli = Cli::parse();

    let filter: EnvFilter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(cli.default_level()));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let report: ConvertReport = match convert_directory(&cli.settings()) {
        Ok(report) => report,
        Err(e) => {
            eprintln!("Error: {e}");
            process::exit(1);
        }
    };

    if !report.is_success() {
        eprintln!(
            "Error: failed to write {} of {} outputs: {}",
            report.failed.len(),
            report.failed.len() + report.written.len(),
            report.failed.join(", ")
        );
        process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn verify_cli_structure() {
        Cli::command().debug_assert();
    }

    #[test]
    fn defaults_match_library_settings() {
        let cli: Cli = Cli::parse_from(["jsonschema2swagger"]);
        assert_eq!("info", cli.default_level());
        assert_eq!(ConvertSettings::default(), cli.settings());
    }

    #[test]
    fn flags_map_onto_settings() {
        let cli: Cli = Cli::parse_from([
            "jsonschema2swagger",
            "--source",
            "schemas",
            "--dest",
            "out",
            "--template",
            "custom.json",
            "-vv",
        ]);
        assert_eq!("trace", cli.default_level());
        let expected: ConvertSettings = ConvertSettings {
            source_dir: PathBuf::from("schemas"),
            dest_dir: PathBuf::from("out"),
            template_path: Some(PathBuf::from("custom.json")),
        };
        assert_eq!(expected, cli.settings());
    }
}
