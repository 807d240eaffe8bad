//! `products` command: rank a catalogue CSV by price, sales and profit.

use sigmatick_core::{read_products, TopProductsReport};

use crate::cli::ProductsArgs;
use crate::commands::CommandResult;
use crate::error::CliError;

pub fn run(args: &ProductsArgs) -> Result<CommandResult, CliError> {
    let products = read_products(&args.file)?;
    let report = TopProductsReport::build(&products, args.top)?;

    let data = serde_json::to_value(&report)?;
    let mut result = CommandResult::ok(data, report.to_string());
    if products.is_empty() {
        result = result.with_warning(format!(
            "catalogue {} is missing or empty",
            args.file.display()
        ));
    }

    Ok(result)
}
