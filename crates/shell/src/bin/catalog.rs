use std::io;

use anyhow::Result;
use clap::Parser;

use storefront_catalog::CatalogFacade;
use storefront_shell::{catalog_shell, Prompter, ShellArgs};

/// Manage products, bundles and discount offers interactively.
#[derive(Debug, Parser)]
#[command(version)]
struct Cli {
    #[command(flatten)]
    shell: ShellArgs,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    storefront_observability::init(&cli.shell.log_settings());

    let mut catalog = CatalogFacade::new();
    let mut prompter = Prompter::new(io::stdin().lock(), io::stdout().lock());
    catalog_shell::run(&mut catalog, &mut prompter, cli.shell.output_format())?;

    tracing::info!(
        products = catalog.products().len(),
        bundles = catalog.bundles().len(),
        discounts = catalog.discounts().len(),
        "catalog session ended"
    );
    Ok(())
}
