//! Describe command handler

use crate::cli::DescribeArgs;
use crate::config::Config;
use crate::error::{Error, Result};
use crate::logging::timing::Timer;
use crate::output::{OutputFormatter, OutputWriter};
use serde_json::Value;
use std::fs;
use std::io::Read;
use std::path::Path;
use vanadia_schema::{Format, SchemaNode, SchemaParser, SchemaRenderer};

/// Handle the describe command
pub fn handle_describe(
    args: DescribeArgs,
    config: &Config,
    output: &mut OutputWriter,
) -> Result<()> {
    describe_with_input(args, config, output, &mut std::io::stdin().lock())
}

fn describe_with_input(
    args: DescribeArgs,
    config: &Config,
    output: &mut OutputWriter,
    stdin: &mut dyn Read,
) -> Result<()> {
    let source = match args.schema.as_deref() {
        Some(path) if path != Path::new("-") => path.display().to_string(),
        _ => "stdin".to_string(),
    };
    output.info(&format!("Reading schema from {}", source))?;

    let document = load_document(args.schema.as_deref(), stdin)?;
    let schema = select(&document, args.pointer.as_deref())?;
    if let Some(pointer) = args.pointer.as_deref() {
        output.info(&format!("Selected {} from {}", pointer, source))?;
    }

    let node = {
        let _timer = Timer::new("schema_decoding");
        SchemaNode::from_value(schema)
    };

    let mut options = config.render.to_options();
    if let Some(max_depth) = args.max_depth {
        options.max_depth = max_depth;
    }
    let inline = args.inline || config.render.inline;

    let html = {
        let _timer = Timer::with_details("schema_rendering", if inline { "inline" } else { "outer" });
        let renderer = SchemaRenderer::with_options(options);
        if inline {
            renderer.render_inline(&node)
        } else {
            renderer.render(&node)
        }
    };
    tracing::debug!(bytes = html.len(), inline, max_depth = options.max_depth, "Rendered schema");

    match args.output_file {
        Some(path) => {
            let content = output.format().format_html(&html)?;
            fs::write(&path, content)?;
            output.success(&format!("✓ Wrote documentation to {}", path.display()))
        }
        None => output.html(&html),
    }
}

/// Read the schema document from a file or, for `-` or no path, from stdin
fn load_document(path: Option<&Path>, stdin: &mut dyn Read) -> Result<Value> {
    let parser = SchemaParser::new();

    let path = match path {
        Some(path) if path != Path::new("-") => path,
        _ => {
            let mut content = String::new();
            stdin.read_to_string(&mut content)?;
            let (value, format) = parser.parse_with_fallback(&content)?;
            tracing::debug!(format = format.primary_extension(), "Read schema from stdin");
            return Ok(value);
        }
    };

    if !path.exists() {
        return Err(Error::FileNotFound {
            path: path.to_path_buf(),
        });
    }

    if Format::from_path(path).is_ok() {
        return Ok(parser.parse_file(path)?);
    }

    let content = fs::read_to_string(path)?;
    let (value, format) = parser.parse_with_fallback(&content)?;
    tracing::debug!(
        path = %path.display(),
        format = format.primary_extension(),
        "Detected schema format from content"
    );
    Ok(value)
}

/// Apply an optional JSON pointer to the loaded document
fn select<'a>(document: &'a Value, pointer: Option<&str>) -> Result<&'a Value> {
    match pointer {
        None => Ok(document),
        Some(pointer) if !pointer.is_empty() && !pointer.starts_with('/') => Err(
            Error::invalid_args(format!("JSON pointer '{}' must start with '/'", pointer)),
        ),
        Some(pointer) => document.pointer(pointer).ok_or_else(|| Error::PointerNotFound {
            pointer: pointer.to_string(),
        }),
    }
}
