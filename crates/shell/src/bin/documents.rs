use std::io;

use anyhow::Result;
use clap::Parser;

use storefront_documents::RequirementDocumentBuilder;
use storefront_shell::{document_shell, Prompter, ShellArgs};

/// Assemble a requirements document interactively.
#[derive(Debug, Parser)]
#[command(version)]
struct Cli {
    #[command(flatten)]
    shell: ShellArgs,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    storefront_observability::init(&cli.shell.log_settings());

    let mut prompter = Prompter::new(io::stdin().lock(), io::stdout().lock());
    let document = document_shell::run(
        RequirementDocumentBuilder::new(),
        &mut prompter,
        cli.shell.output_format(),
    )?;

    match document {
        Some(doc) => tracing::info!(requirements = doc.requirements().len(), "document created"),
        None => tracing::info!("document session ended without creating a document"),
    }
    Ok(())
}
