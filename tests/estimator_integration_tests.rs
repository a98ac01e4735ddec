//! Estimator Integration Tests
//!
//! Runs the public entry points end to end: identifier listing, the reference
//! storage scenarios, error reporting and the bundled data files.

use approx::assert_relative_eq;
use nanosmart_shelf_life::{
    estimate, list_food_ids, list_material_ids, Catalog, CatalogError, CatalogTable,
    EstimateError, EstimationRequest, Estimator, FoodKind, FreshnessStatus, JsonFormatter, Locale,
    MarkdownFormatter, MaterialKind, ModelParameters, Recommendation, ResultView,
};
use std::path::PathBuf;

fn data_file(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("data").join(name)
}

#[test]
fn every_listed_pair_estimates() {
    for food in list_food_ids() {
        for material in list_material_ids() {
            let result = estimate(food, material, 4.0, 3, 70.0)
                .unwrap_or_else(|e| panic!("{} + {} failed: {}", food, material, e));
            assert_eq!(result.food.id(), food);
            assert_eq!(result.material.id(), material);
            assert_eq!(result.recommendations.last(), Some(&Recommendation::SealedContainer));
        }
    }
}

#[test]
fn reference_scenario_refrigerated_meat() {
    let result = estimate("Daging", "Nano-Ag", 4.0, 3, 70.0).unwrap();
    assert_eq!(result.status, FreshnessStatus::Fresh);
    assert_eq!(result.base_shelf_life_days, 7.0);
    assert_relative_eq!(result.adjusted_shelf_life_days, 10.0);
    assert_relative_eq!(result.remaining_days, 7.0);
    assert_relative_eq!(result.microbial_level, 0.02);
}

#[test]
fn reference_scenario_warm_meat() {
    let result = estimate("Daging", "Nano-Ag", 20.0, 3, 70.0).unwrap();
    assert_eq!(result.factors.temperature, 0.5);
    assert_relative_eq!(result.adjusted_shelf_life_days, 5.0);
    assert_relative_eq!(result.remaining_days, 2.0);
    // Warm storage outweighs the treatment
    assert_relative_eq!(result.shelf_life_gain_days(), -2.0);
    // Temperature does not feed the microbial model
    assert_eq!(result.status, FreshnessStatus::Fresh);
}

#[test]
fn reference_scenario_fish_zno() {
    let result = estimate("Ikan", "Nano-ZnO", 4.0, 10, 80.0).unwrap();
    assert_relative_eq!(result.microbial_level, 0.38);
    assert_eq!(result.status, FreshnessStatus::Degrading);
}

#[test]
fn unknown_identifiers_are_not_found() {
    assert_eq!(
        estimate("Tahu", "Nano-Ag", 4.0, 3, 70.0).unwrap_err(),
        EstimateError::NotFound {
            table: CatalogTable::Food,
            id: "Tahu".to_string()
        }
    );
    assert_eq!(
        estimate("Daging", "Nano-TiO2", 4.0, 3, 70.0).unwrap_err(),
        EstimateError::NotFound {
            table: CatalogTable::Material,
            id: "Nano-TiO2".to_string()
        }
    );
}

#[test]
fn invalid_arguments_are_rejected() {
    let cases: &[(f64, u32, f64, &str)] = &[
        (4.0, 0, 70.0, "storage_days"),
        (4.0, 3, 29.0, "humidity_pct"),
        (4.0, 3, 101.0, "humidity_pct"),
        (f64::NAN, 3, 70.0, "temperature_c"),
        (f64::NEG_INFINITY, 3, 70.0, "temperature_c"),
        (4.0, 3, f64::NAN, "humidity_pct"),
    ];
    for &(temperature, days, humidity, expected_field) in cases {
        match estimate("Buah", "Nano-clay", temperature, days, humidity) {
            Err(EstimateError::InvalidArgument { field, .. }) => assert_eq!(field, expected_field),
            other => panic!("expected InvalidArgument for {}, got {:?}", expected_field, other),
        }
    }
}

#[test]
fn bundled_catalog_matches_builtin() {
    let catalog = Catalog::load(&data_file("catalog.json")).unwrap();
    assert_eq!(catalog, Catalog::builtin().unwrap());
}

#[test]
fn bundled_parameters_match_defaults() {
    let params = ModelParameters::load(&data_file("model_parameters.json")).unwrap();
    assert_eq!(params, ModelParameters::default());
}

#[test]
fn custom_catalog_drives_estimates() {
    let mut foods: Vec<_> = Catalog::builtin().unwrap().foods().cloned().collect();
    let materials: Vec<_> = Catalog::builtin().unwrap().materials().cloned().collect();
    foods[0].shelf_life_untreated_days = 10.0;

    let catalog = Catalog::from_entries(foods, materials).unwrap();
    let estimator = Estimator::with_catalog(&catalog, ModelParameters::default()).unwrap();
    let request = EstimationRequest::new(FoodKind::Daging, MaterialKind::NanoAg, 4.0, 3, 70.0);
    let result = estimator.estimate(&request).unwrap();

    assert_eq!(result.base_shelf_life_days, 10.0);
    // 10 × 1.425 = 14.25
    assert_relative_eq!(result.adjusted_shelf_life_days, 14.3);
}

#[test]
fn negative_material_weight_is_rejected_before_estimating() {
    let params = ModelParameters {
        material_weight: -5.0,
        ..ModelParameters::default()
    };
    assert!(Estimator::with_catalog(Catalog::global().unwrap(), params).is_err());

    // Same set through the file loader
    let json = r#"{ "material_weight": -5.0 }"#;
    assert!(ModelParameters::from_json_str(json).is_err());
}

#[test]
fn malformed_catalog_fails_before_any_estimate() {
    let json = std::fs::read_to_string(data_file("catalog.json"))
        .unwrap()
        .replace("\"microbial_growth_rate\": 0.25", "\"microbial_growth_rate\": -0.25");
    let err = Catalog::from_json_str(&json).unwrap_err();
    assert!(matches!(
        err.downcast_ref::<CatalogError>(),
        Some(CatalogError::OutOfRange { field: "microbial_growth_rate", .. })
    ));
}

#[test]
fn caller_keeps_last_result() {
    // The core holds no session: a presentation layer stores the value itself
    let mut last = None;
    for days in [1, 5, 20] {
        last = Some(estimate("Sayur", "Nano-kitosan", 4.0, days, 90.0).unwrap());
    }
    let last = last.unwrap();
    // 0.12 × 20 × 0.1 = 0.24
    assert_eq!(last.status, FreshnessStatus::Fresh);
    assert_relative_eq!(last.microbial_level, 0.24);
}

#[test]
fn result_serializes_for_presentation() {
    let result = estimate("Produk Olahan", "Nano-ZnO", 25.0, 30, 55.0).unwrap();

    let json = serde_json::to_value(&result).unwrap();
    assert_eq!(json["food"], "Produk Olahan");
    assert_eq!(json["material"], "Nano-ZnO");
    assert_eq!(json["recommendations"][0]["kind"], "refrigerate");

    let view = ResultView::build(&result, Locale::En);
    let pretty = JsonFormatter::format(&view).unwrap();
    assert!(pretty.contains("\"title\": \"Shelf-Life Comparison\""));

    let md = MarkdownFormatter::format(&result, Locale::En);
    assert!(md.contains("1. Storage temperature is too high."));
}
