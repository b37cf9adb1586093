//! signprep CLI - placeholder extraction and template upload tool
//!
//! Extracts `{{placeholder}}` fields from PDF/DOCX documents, prints the
//! extraction report as JSON, and can push documents to the configured
//! e-signature provider as signable templates.

mod config;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use config::CliConfig;
use signprep_api::{
    template_fields, EsignClient, Positioning, SubmissionRequest, Submitter, TemplateDocument,
    TemplateRequest,
};
use signprep_backend::{DocumentPipeline, DocxExtractor, PdfExtractor, TextExtractor};
use signprep_core::{ExtractionReport, InputFormat, SignprepError};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(
    name = "signprep",
    version,
    about = "Extract {{placeholder}} fields from documents and prepare e-signature templates"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Extract placeholder fields from a document and print a JSON report
    Extract {
        /// Input PDF or DOCX file
        file: PathBuf,

        /// Write the JSON report to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Emit compact JSON instead of pretty-printed
        #[arg(long)]
        compact: bool,
    },

    /// Show format, page count, and metadata without parsing tags
    Info {
        /// Input PDF or DOCX file
        file: PathBuf,
    },

    /// List supported input formats
    Formats,

    /// Create a template at the e-signature provider from a document
    Push {
        /// Input PDF or DOCX file
        file: PathBuf,

        /// Template name (defaults to the file stem)
        #[arg(long)]
        name: Option<String>,

        /// Also create a submission: repeatable ROLE=EMAIL pairs
        #[arg(long = "submit", value_name = "ROLE=EMAIL")]
        submitters: Vec<String>,

        /// Ask the provider to email signing invitations
        #[arg(long)]
        send_email: bool,
    },
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    match run(cli) {
        Ok(code) => std::process::exit(code),
        Err(err) => {
            eprintln!("{} {err:#}", "error:".red().bold());
            std::process::exit(1);
        }
    }
}

fn run(cli: Cli) -> Result<i32> {
    match cli.command {
        Commands::Extract {
            file,
            output,
            compact,
        } => cmd_extract(&file, output.as_deref(), compact),
        Commands::Info { file } => cmd_info(&file),
        Commands::Formats => cmd_formats(),
        Commands::Push {
            file,
            name,
            submitters,
            send_email,
        } => cmd_push(&file, name, &submitters, send_email),
    }
}

/// Run the pipeline and emit the wire report.
fn cmd_extract(file: &Path, output: Option<&Path>, compact: bool) -> Result<i32> {
    let outcome = DocumentPipeline::new().extract(file);

    if let Err(SignprepError::NoTagsFound { text_length, .. }) = &outcome {
        eprintln!(
            "{} no {{{{...}}}} tags found ({text_length} characters scanned)",
            "warning:".yellow().bold()
        );
        eprintln!(
            "         add placeholders like {} or {} to the document text",
            "{{client_name}}".cyan(),
            "{{client_signature}}".cyan()
        );
    }

    let report = ExtractionReport::from_outcome(&outcome);
    let json = if compact {
        serde_json::to_string(&report)?
    } else {
        serde_json::to_string_pretty(&report)?
    };

    match output {
        Some(path) => {
            std::fs::write(path, json).with_context(|| format!("writing {}", path.display()))?;
            println!(
                "{} report written to {}",
                "ok:".green().bold(),
                path.display()
            );
        }
        None => println!("{json}"),
    }

    if let Ok(extraction) = &outcome {
        eprintln!(
            "{} {} field(s), {} page(s), {:?}",
            "ok:".green().bold(),
            extraction.fields.len(),
            extraction.page_count,
            extraction.latency
        );
    }

    Ok(i32::from(!report.success))
}

/// Show document facts without running the tag parser.
fn cmd_info(file: &Path) -> Result<i32> {
    let data = std::fs::read(file).with_context(|| format!("reading {}", file.display()))?;
    let format = InputFormat::from_path(file)
        .or_else(|| InputFormat::sniff(&data))
        .context("unsupported document format (expected .pdf or .docx)")?;

    let extractor: &dyn TextExtractor = match format {
        InputFormat::Pdf => &PdfExtractor,
        InputFormat::Docx => &DocxExtractor,
    };
    let extracted = extractor
        .extract_bytes(&data)
        .with_context(|| format!("extracting {}", file.display()))?;

    println!("{}   {format}", "format:".bold());
    match extracted.page_count {
        Some(pages) => println!("{}    {pages}", "pages:".bold()),
        None => println!("{}    unknown (not stored in DOCX)", "pages:".bold()),
    }
    println!(
        "{}    {} characters",
        "text:".bold(),
        extracted.text.chars().count()
    );
    if let Some(title) = &extracted.metadata.title {
        println!("{}    {title}", "title:".bold());
    }
    if let Some(author) = &extracted.metadata.author {
        println!("{}   {author}", "author:".bold());
    }
    if let Some(created) = &extracted.metadata.created {
        println!("{}  {created}", "created:".bold());
    }
    if let Some(modified) = &extracted.metadata.modified {
        println!("{} {modified}", "modified:".bold());
    }
    Ok(0)
}

/// List supported input formats.
fn cmd_formats() -> Result<i32> {
    println!("{}", "supported input formats:".bold());
    println!("  pdf   - PDF document (authoritative page count)");
    println!("  docx  - Microsoft Word document (page count estimated)");
    Ok(0)
}

/// Extract fields, then create a provider template (and optionally a
/// submission) from the document.
fn cmd_push(file: &Path, name: Option<String>, submitters: &[String], send_email: bool) -> Result<i32> {
    let data = std::fs::read(file).with_context(|| format!("reading {}", file.display()))?;
    let format = InputFormat::from_path(file)
        .or_else(|| InputFormat::sniff(&data))
        .context("unsupported document format (expected .pdf or .docx)")?;

    let extraction = DocumentPipeline::new()
        .extract_bytes(&data, format)
        .with_context(|| format!("extracting {}", file.display()))?;

    let file_name = file
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| "document".to_string());
    let template_name = name.unwrap_or_else(|| {
        file.file_stem()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_else(|| "Untitled template".to_string())
    });

    // Tag-based positioning: the provider anchors fields to the literal
    // {{...}} text in the uploaded file, so preview areas are not sent.
    let request = TemplateRequest {
        name: template_name,
        documents: vec![TemplateDocument::from_bytes(file_name, &data)],
        fields: template_fields(&extraction.fields, Positioning::TextTags),
        external_id: None,
    };

    let (url, key) = CliConfig::load().provider()?;
    let client = EsignClient::new(url, key);
    let template = client.create_template(&request)?;

    println!(
        "{} template {} created ({} field(s))",
        "ok:".green().bold(),
        template.id,
        extraction.fields.len()
    );
    if let Some(slug) = &template.slug {
        println!("     slug: {slug}");
    }

    if !submitters.is_empty() {
        let submitters = submitters
            .iter()
            .map(|pair| parse_submitter(pair))
            .collect::<Result<Vec<_>>>()?;
        let submission = client.create_submission(&SubmissionRequest {
            template_id: template.id,
            send_email,
            submitters,
        })?;
        println!(
            "{} submission {} created",
            "ok:".green().bold(),
            submission.id
        );
    }

    Ok(0)
}

/// Parse a `ROLE=EMAIL` pair from `--submit`.
fn parse_submitter(pair: &str) -> Result<Submitter> {
    let Some((role, email)) = pair.split_once('=') else {
        bail!("invalid --submit value {pair:?}, expected ROLE=EMAIL");
    };
    let (role, email) = (role.trim(), email.trim());
    if role.is_empty() || email.is_empty() || !email.contains('@') {
        bail!("invalid --submit value {pair:?}, expected ROLE=EMAIL");
    }
    Ok(Submitter {
        role: role.to_string(),
        email: email.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_submitter_pair() {
        let submitter = parse_submitter("Client=alice@example.com").unwrap();
        assert_eq!(submitter.role, "Client");
        assert_eq!(submitter.email, "alice@example.com");
    }

    #[test]
    fn test_parse_submitter_trims_whitespace() {
        let submitter = parse_submitter(" Service Provider = bob@example.com ").unwrap();
        assert_eq!(submitter.role, "Service Provider");
        assert_eq!(submitter.email, "bob@example.com");
    }

    #[test]
    fn test_parse_submitter_rejects_malformed_pairs() {
        assert!(parse_submitter("no-separator").is_err());
        assert!(parse_submitter("=missing-role@example.com").is_err());
        assert!(parse_submitter("Client=not-an-email").is_err());
    }

    #[test]
    fn test_cli_parses_extract_command() {
        let cli = Cli::try_parse_from(["signprep", "extract", "msa.pdf", "--compact"]).unwrap();
        match cli.command {
            Commands::Extract { file, compact, .. } => {
                assert_eq!(file, PathBuf::from("msa.pdf"));
                assert!(compact);
            }
            _ => panic!("expected extract command"),
        }
    }

    #[test]
    fn test_cli_parses_push_with_submitters() {
        let cli = Cli::try_parse_from([
            "signprep",
            "push",
            "msa.docx",
            "--name",
            "MSA",
            "--submit",
            "Client=alice@example.com",
            "--submit",
            "Service Provider=bob@example.com",
        ])
        .unwrap();
        match cli.command {
            Commands::Push {
                name, submitters, ..
            } => {
                assert_eq!(name.as_deref(), Some("MSA"));
                assert_eq!(submitters.len(), 2);
            }
            _ => panic!("expected push command"),
        }
    }
}
