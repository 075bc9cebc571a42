//! Interactive menu over a [`CatalogFacade`].

use std::io::{BufRead, Write};

use tracing::debug;

use storefront_catalog::{CatalogComponent, CatalogFacade};
use storefront_core::{OutputFormat, Percent, Price};

use crate::errors::{warning_for, ShellError};
use crate::prompt::{Prompter, Step};

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum CatalogAction {
    AddProduct,
    AddBundle,
    AddDiscount,
    ListProducts,
    ListBundles,
    ListDiscounts,
    Exit,
}

impl CatalogAction {
    pub const ALL: [CatalogAction; 7] = [
        CatalogAction::AddProduct,
        CatalogAction::AddBundle,
        CatalogAction::AddDiscount,
        CatalogAction::ListProducts,
        CatalogAction::ListBundles,
        CatalogAction::ListDiscounts,
        CatalogAction::Exit,
    ];

    pub fn label(self) -> &'static str {
        match self {
            CatalogAction::AddProduct => "Add Product",
            CatalogAction::AddBundle => "Add Product Bundle",
            CatalogAction::AddDiscount => "Add Discount",
            CatalogAction::ListProducts => "Get All Products",
            CatalogAction::ListBundles => "Get All Bundles",
            CatalogAction::ListDiscounts => "Get All Discounts",
            CatalogAction::Exit => "Exit",
        }
    }
}

/// Run the catalog menu until Exit is chosen or input ends.
pub fn run<R: BufRead, W: Write>(
    catalog: &mut CatalogFacade,
    prompter: &mut Prompter<R, W>,
    format: OutputFormat,
) -> Result<(), ShellError> {
    let labels = CatalogAction::ALL.map(CatalogAction::label);

    loop {
        let Some(choice) = prompter.choose("What do you want to do?", &labels)? else {
            break;
        };
        let action = CatalogAction::ALL[choice];
        debug!(action = action.label(), "catalog action selected");

        if dispatch(action, catalog, prompter, format)? == Step::Done {
            break;
        }
    }
    Ok(())
}

fn dispatch<R: BufRead, W: Write>(
    action: CatalogAction,
    catalog: &mut CatalogFacade,
    prompter: &mut Prompter<R, W>,
    format: OutputFormat,
) -> Result<Step, ShellError> {
    match action {
        CatalogAction::AddProduct => add_product(catalog, prompter),
        CatalogAction::AddBundle => add_bundle(catalog, prompter),
        CatalogAction::AddDiscount => add_discount(catalog, prompter),
        CatalogAction::ListProducts => {
            prompter.say(catalog.list_products(format)?)?;
            Ok(Step::Continue)
        }
        CatalogAction::ListBundles => {
            prompter.say(catalog.list_bundles(format)?)?;
            Ok(Step::Continue)
        }
        CatalogAction::ListDiscounts => {
            prompter.say(catalog.list_discounts(format)?)?;
            Ok(Step::Continue)
        }
        CatalogAction::Exit => Ok(Step::Done),
    }
}

fn add_product<R: BufRead, W: Write>(
    catalog: &mut CatalogFacade,
    prompter: &mut Prompter<R, W>,
) -> Result<Step, ShellError> {
    let Some(name) = prompter.ask("Product Name?")? else {
        return Ok(Step::Done);
    };
    let Some(code) = prompter.ask("Product Code?")? else {
        return Ok(Step::Done);
    };
    let Some(price) = prompter.ask_parsed::<Price>("Product Price?")? else {
        return Ok(Step::Done);
    };

    let item = catalog.add_product(name, code, price);
    prompter.say(format_args!("Added {}", item.display()))?;
    Ok(Step::Continue)
}

fn add_bundle<R: BufRead, W: Write>(
    catalog: &mut CatalogFacade,
    prompter: &mut Prompter<R, W>,
) -> Result<Step, ShellError> {
    let Some(name) = prompter.ask("Bundle Name?")? else {
        return Ok(Step::Done);
    };
    let Some(code) = prompter.ask("Bundle Code?")? else {
        return Ok(Step::Done);
    };

    let mut child_codes = Vec::new();
    loop {
        let Some(child) = prompter.ask("Product Code? (empty to finish)")? else {
            return Ok(Step::Done);
        };
        if child.is_empty() {
            break;
        }
        child_codes.push(child);
    }

    let outcome = catalog.add_bundle(name, code, &child_codes);
    for missing in &outcome.missing {
        prompter.warn(format_args!("no product found with provided code {missing}; left out of the bundle"))?;
    }
    prompter.say(format_args!(
        "Added bundle {} with {} item(s), total ${}",
        outcome.bundle.name(),
        outcome.bundle.len(),
        outcome.bundle.price()
    ))?;
    Ok(Step::Continue)
}

fn add_discount<R: BufRead, W: Write>(
    catalog: &mut CatalogFacade,
    prompter: &mut Prompter<R, W>,
) -> Result<Step, ShellError> {
    let Some(offer) = prompter.ask("Offer Name?")? else {
        return Ok(Step::Done);
    };
    let Some(rate) = prompter.ask_parsed::<Percent>("Discount rate?")? else {
        return Ok(Step::Done);
    };
    let Some(code) = prompter.ask("Product Code?")? else {
        return Ok(Step::Done);
    };

    match catalog.add_discount(offer, rate, &code) {
        Ok(offer) => prompter.say(format_args!(
            "Added {} (now ${})",
            offer.display(),
            offer.discounted_price()
        ))?,
        Err(err) => prompter.warn(warning_for(&err))?,
    }
    Ok(Step::Continue)
}
