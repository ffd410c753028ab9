//! Calculation and price-check CLI commands

use clap::Args;
use tracing::warn;

use crate::config::Settings;
use crate::display::{format_anomalies, format_results};
use crate::error::HourlyBuysResult;
use crate::models::share_summary;
use crate::pricecheck::{LlmPriceChecker, PriceChecker};
use crate::services::{failure_notice, CalculationOptions, CalculationService, ProductService};
use crate::storage::Storage;

/// Arguments for `calc`
#[derive(Args)]
pub struct CalcArgs {
    /// Skip the AI price check
    #[arg(long)]
    pub no_check: bool,

    /// Replace flagged prices with the suggested ones before computing
    #[arg(long, conflicts_with = "no_check")]
    pub apply_suggestions: bool,

    /// Print a shareable one-line summary
    #[arg(long)]
    pub share: bool,
}

/// Arguments for `check`
#[derive(Args)]
pub struct CheckArgs {
    /// Replace flagged prices with the suggested ones
    #[arg(long)]
    pub apply: bool,
}

/// Build the configured price checker
pub fn build_checker(settings: &Settings) -> HourlyBuysResult<LlmPriceChecker> {
    LlmPriceChecker::from_settings(&settings.price_check)
}

/// Handle `calc`
pub async fn handle_calc_command(
    storage: &Storage,
    settings: &Settings,
    args: CalcArgs,
) -> HourlyBuysResult<()> {
    let wants_check = settings.price_check.enabled && !args.no_check;
    let mut setup_notice = None;

    let checker = if wants_check {
        match build_checker(settings) {
            Ok(checker) => Some(checker),
            Err(e) => {
                warn!("Price check unavailable: {}", e);
                setup_notice = Some(failure_notice(&e));
                None
            }
        }
    } else {
        None
    };

    let service = CalculationService::new(
        storage,
        checker.as_ref().map(|c| c as &dyn PriceChecker),
    );
    let outcome = service
        .run(CalculationOptions {
            check_prices: wants_check,
            apply_suggestions: args.apply_suggestions,
        })
        .await?;

    if let Some(notice) = setup_notice.or(outcome.notice.clone()) {
        println!("Note: {}\n", notice);
    }

    if let Some(anomalies) = &outcome.entry.anomalies {
        println!("{}", format_anomalies(anomalies, settings).trim_end());
        for product in &outcome.applied {
            println!(
                "  Using suggested price for {}: {}",
                product.name,
                settings.format_amount(product.price)
            );
        }
        println!();
    }

    print!(
        "{}",
        format_results(outcome.entry.hourly_wage, &outcome.entry.results, settings)
    );

    if args.share {
        println!(
            "\n{}",
            share_summary(
                outcome.entry.hourly_wage,
                &outcome.entry.results,
                &settings.currency_symbol
            )
        );
    }

    println!("\nSaved to history as {}", outcome.entry.id);
    Ok(())
}

/// Handle `check`
pub async fn handle_check_command(
    storage: &Storage,
    settings: &Settings,
    args: CheckArgs,
) -> HourlyBuysResult<()> {
    let checker = build_checker(settings)?;
    let service = CalculationService::new(storage, Some(&checker));
    let anomalies = service.check_prices().await?;

    println!("{}", format_anomalies(&anomalies, settings).trim_end());

    if args.apply && !anomalies.is_empty() {
        let products = ProductService::new(storage);
        println!();
        for anomaly in &anomalies {
            match products.apply_suggestion(anomaly)? {
                Some(product) => println!(
                    "Updated {} to {}",
                    product.name,
                    settings.format_amount(product.price)
                ),
                None => println!("Skipped {}: no such product", anomaly.product_name),
            }
        }
    }

    Ok(())
}
