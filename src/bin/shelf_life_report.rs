//! Shelf-Life Report
//!
//! Runs the reference storage scenarios through the estimator and prints
//! each result, followed by the material overview.
//!
//! Run with: cargo run --bin shelf_life_report
//!
//! Environment:
//! - `CATALOG_PATH`: JSON catalog to use instead of the built-in tables
//! - `MODEL_PARAMS_PATH`: JSON model parameter overrides
//! - `REPORT_LOCALE`: `en` (default) or `id`
//! - `REPORT_FORMAT`: `markdown` (default) or `json`

use anyhow::Context;
use nanosmart_shelf_life::{
    Catalog, EstimationRequest, Estimator, FoodKind, JsonFormatter, Locale, MarkdownFormatter,
    MaterialKind, ModelParameters,
};
use std::path::Path;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// (food, material, °C, days, humidity %)
const SCENARIOS: &[(FoodKind, MaterialKind, f64, u32, f64)] = &[
    (FoodKind::Daging, MaterialKind::NanoAg, 4.0, 3, 70.0),
    (FoodKind::Daging, MaterialKind::NanoAg, 20.0, 3, 70.0),
    (FoodKind::Ikan, MaterialKind::NanoZnO, 4.0, 10, 80.0),
    (FoodKind::Buah, MaterialKind::NanoKitosan, 12.0, 5, 60.0),
    (FoodKind::Sayur, MaterialKind::NanoClay, 2.0, 7, 90.0),
    (FoodKind::ProdukOlahan, MaterialKind::NanoZnO, 25.0, 30, 55.0),
];

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "nanosmart_shelf_life=info,warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let catalog = match std::env::var("CATALOG_PATH") {
        Ok(path) => Catalog::load(Path::new(&path))?,
        Err(_) => Catalog::builtin()?,
    };

    let params = match std::env::var("MODEL_PARAMS_PATH") {
        Ok(path) => ModelParameters::load(Path::new(&path))?,
        Err(_) => ModelParameters::default(),
    };

    let locale: Locale = std::env::var("REPORT_LOCALE")
        .unwrap_or_else(|_| "en".to_string())
        .parse()
        .context("REPORT_LOCALE")?;

    let as_json = std::env::var("REPORT_FORMAT")
        .map(|f| f.eq_ignore_ascii_case("json"))
        .unwrap_or(false);

    tracing::info!("Running {} scenarios (locale: {})", SCENARIOS.len(), locale.code());

    let estimator = Estimator::with_catalog(&catalog, params)?;

    for &(food, material, temperature_c, storage_days, humidity_pct) in SCENARIOS {
        let request = EstimationRequest::new(food, material, temperature_c, storage_days, humidity_pct);
        let result = estimator
            .estimate(&request)
            .with_context(|| format!("Scenario {:?} failed", request))?;

        if as_json {
            println!("{}", JsonFormatter::format_result(&result, locale)?);
        } else {
            println!(
                "<!-- {:.0}°C, {} days, {:.0}% RH -->",
                temperature_c, storage_days, humidity_pct
            );
            println!("{}", MarkdownFormatter::format(&result, locale));
        }
    }

    if !as_json {
        println!("{}", MarkdownFormatter::format_materials(&catalog, locale));
    }

    Ok(())
}
