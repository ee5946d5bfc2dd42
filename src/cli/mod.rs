// ============================================================
// Layer 1: CLI / Presentation Layer
// ============================================================
// Parses arguments with clap and routes to a use case. The only
// place that prints to stdout.
//
// Generation failures are caught here, once, and printed as a
// message; the process still exits normally.

pub mod commands;

use anyhow::Result;
use clap::Parser;
use commands::{Commands, OutlineArgs};

use crate::application::generate_use_case::{GenerateConfig, GenerateUseCase};
use crate::application::outline_use_case::OutlineUseCase;
use crate::infra::reader::DocxOutlineReader;
use crate::render::docx_writer::DocxWriter;

#[derive(Parser, Debug)]
#[command(
    name = "cine-aurora-docs",
    version,
    about = "Generate the Cine Aurora technical documentation (.docx) on your Desktop."
)]
pub struct Cli {
    /// Omit to generate the report
    #[command(subcommand)]
    pub command: Option<Commands>,
}

impl Cli {
    /// Dispatch to the chosen subcommand, `generate` when none is given
    pub fn run(self) -> Result<()> {
        match self.command.unwrap_or(Commands::Generate) {
            Commands::Generate => run_generate(),
            Commands::Outline(args) => run_outline(args),
        }
    }
}

fn run_generate() -> Result<()> {
    let use_case = GenerateUseCase::new(GenerateConfig::default(), DocxWriter::default());

    match use_case.execute() {
        Ok(path) => {
            println!("Documentação gerada com sucesso em: {}", path.display());
        }
        Err(e) => {
            tracing::error!("Report generation failed: {e:#}");
            println!("{}", failure_message(&e));
        }
    }
    Ok(())
}

/// The one line the user sees when generation fails: the error
/// and its cause chain, each named once.
fn failure_message(e: &anyhow::Error) -> String {
    format!("Erro ao gerar documentação: {e:#}")
}

fn run_outline(args: OutlineArgs) -> Result<()> {
    let use_case = OutlineUseCase::new(DocxOutlineReader::new());
    let outline = use_case.read(&args.path)?;

    if args.json {
        println!("{}", OutlineUseCase::<DocxOutlineReader>::to_json(&outline)?);
    } else {
        print!("{}", OutlineUseCase::<DocxOutlineReader>::to_text(&outline));
    }
    Ok(())
}
