//! Inline markdown command handler

use crate::cli::MarkdownArgs;
use crate::error::Result;
use crate::output::OutputWriter;
use vanadia_schema::render_markdown;

/// Handle the markdown command
pub fn handle_markdown(args: MarkdownArgs, output: &mut OutputWriter) -> Result<()> {
    output.html(&render_markdown(&args.text))
}
