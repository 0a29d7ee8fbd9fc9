//! The clean and compare operations
//!
//! Each operation is a linear sequence: validate input files, load the
//! template, build the prompt, resolve the optional credential, invoke the
//! gateway, then write or print the response. No file handle stays open
//! across the gateway call.

use std::fs;
use std::path::Path;

use colored::Colorize;
use eyre::{Context, Result, bail};
use tracing::info;

use crate::config::{Config, api_key_for};
use crate::llm::ModelGateway;
use crate::prompts::{MARKER_OCR, MARKER_TEXT_A, MARKER_TEXT_B, PromptLoader, TemplateKind, render};

/// Delimiter printed before a comparison result
const RESULT_HEADER: &str = "--- Comparison Result ---";

/// Delimiter printed after a comparison result
const RESULT_FOOTER: &str = "-------------------------";

/// Which comparison template to use
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompareKind {
    Quick,
    Detailed,
}

impl CompareKind {
    fn template(self) -> TemplateKind {
        match self {
            Self::Quick => TemplateKind::QuickComparison,
            Self::Detailed => TemplateKind::DetailedComparison,
        }
    }
}

/// Clean an OCR text file and write the model response to `output_file`
pub fn run_clean(
    gateway: &dyn ModelGateway,
    config: &Config,
    input_file: &Path,
    output_file: &Path,
    model: &str,
) -> Result<()> {
    info!(input = %input_file.display(), %model, "Starting clean operation");

    if !input_file.is_file() {
        bail!("Input file not found: {}", input_file.display());
    }

    let loader = PromptLoader::new(&config.prompts.dir);
    let template = loader.load(TemplateKind::CleanText)?;

    let ocr_text =
        fs::read_to_string(input_file).context(format!("Failed to read input file {}", input_file.display()))?;

    let prompt = render(&template, &[(MARKER_OCR, ocr_text.as_str())]);
    let api_key = api_key_for(model, &config.model.api_key_suffix);

    let cleaned = gateway.invoke(&prompt, model, api_key.as_deref())?;

    fs::write(output_file, &cleaned)
        .context(format!("Failed to write output file {}", output_file.display()))?;

    println!("{} Cleaned text saved to: {}", "✓".green(), output_file.display());
    Ok(())
}

/// Compare two files and print the model response between delimiter lines
pub fn run_compare(
    gateway: &dyn ModelGateway,
    config: &Config,
    kind: CompareKind,
    file_a: &Path,
    file_b: &Path,
    model: &str,
) -> Result<()> {
    info!(?kind, a = %file_a.display(), b = %file_b.display(), %model, "Starting compare operation");

    if !file_a.is_file() {
        bail!("Input file not found: {}", file_a.display());
    }
    if !file_b.is_file() {
        bail!("Input file not found: {}", file_b.display());
    }

    let loader = PromptLoader::new(&config.prompts.dir);
    let template = loader.load(kind.template())?;

    let text_a = fs::read_to_string(file_a).context(format!("Failed to read input file {}", file_a.display()))?;
    let text_b = fs::read_to_string(file_b).context(format!("Failed to read input file {}", file_b.display()))?;

    let prompt = render(&template, &[(MARKER_TEXT_A, text_a.as_str()), (MARKER_TEXT_B, text_b.as_str())]);
    let api_key = api_key_for(model, &config.model.api_key_suffix);

    let result = gateway.invoke(&prompt, model, api_key.as_deref())?;

    println!();
    println!("{}", RESULT_HEADER);
    println!("{}", result);
    println!("{}", RESULT_FOOTER);
    Ok(())
}
