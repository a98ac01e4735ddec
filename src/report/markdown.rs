use crate::estimator::EstimationResult;
use crate::locale::Locale;

use super::view::{material_summaries, MaterialSummary};
use crate::catalog::Catalog;

struct Labels {
    heading: &'static str,
    status: &'static str,
    microbial: &'static str,
    estimate: &'static str,
    without: &'static str,
    with: &'static str,
    remaining: &'static str,
    days: &'static str,
    notes: &'static str,
    materials: &'static str,
    effectiveness: &'static str,
    antimicrobial: &'static str,
    barrier: &'static str,
    cost: &'static str,
}

impl Labels {
    fn for_locale(locale: Locale) -> Self {
        match locale {
            Locale::En => Labels {
                heading: "Analysis Result",
                status: "Food status",
                microbial: "Microbial level",
                estimate: "Shelf-Life Estimate",
                without: "Without nano packaging",
                with: "With",
                remaining: "Estimated days remaining",
                days: "days",
                notes: "Notes & Recommendations",
                materials: "Nano Packaging Materials",
                effectiveness: "Effectiveness",
                antimicrobial: "Antimicrobial",
                barrier: "Barrier property",
                cost: "Cost",
            },
            Locale::Id => Labels {
                heading: "Hasil Analisis",
                status: "Status pangan",
                microbial: "Level mikroba",
                estimate: "Estimasi Umur Simpan",
                without: "Tanpa nano packaging",
                with: "Dengan",
                remaining: "Hari tersisa estimasi",
                days: "hari",
                notes: "Catatan & Rekomendasi",
                materials: "Informasi Nano Packaging",
                effectiveness: "Efektivitas",
                antimicrobial: "Antimikroba",
                barrier: "Barrier property",
                cost: "Biaya",
            },
        }
    }
}

/// Markdown formatter for estimation results
pub struct MarkdownFormatter;

impl MarkdownFormatter {
    /// Format a single result page
    pub fn format(result: &EstimationResult, locale: Locale) -> String {
        let labels = Labels::for_locale(locale);
        let mut md = String::with_capacity(1024);

        md.push_str(&format!(
            "## {}: {} + {}\n\n",
            labels.heading, result.food, result.material
        ));

        md.push_str(&format!(
            "**{}:** {} {}  \n",
            labels.status,
            result.status.icon(),
            result.status.label(locale)
        ));
        md.push_str(&format!("**{}:** {}\n\n", labels.microbial, result.microbial_level));

        md.push_str(&format!("### {}\n\n", labels.estimate));
        md.push_str(&format!(
            "- {}: {} {}\n",
            labels.without, result.base_shelf_life_days, labels.days
        ));
        md.push_str(&format!(
            "- {} {}: {:.1} {}\n",
            labels.with, result.material, result.adjusted_shelf_life_days, labels.days
        ));
        md.push_str(&format!(
            "- {}: {:.1} {}\n\n",
            labels.remaining, result.remaining_days, labels.days
        ));

        md.push_str(&format!("### {}\n\n", labels.notes));
        for (i, line) in result.recommendation_lines(locale).iter().enumerate() {
            md.push_str(&format!("{}. {}\n", i + 1, line));
        }

        md
    }

    /// Format the material overview shown on the dashboard
    pub fn format_materials(catalog: &Catalog, locale: Locale) -> String {
        let labels = Labels::for_locale(locale);
        let mut md = String::with_capacity(512);

        md.push_str(&format!("## {}\n\n", labels.materials));
        for row in material_summaries(catalog, locale) {
            Self::format_material_row(&mut md, &row, &labels);
        }
        md
    }

    fn format_material_row(md: &mut String, row: &MaterialSummary, labels: &Labels) {
        md.push_str(&format!("### {}\n\n", row.material));
        md.push_str(&format!("- {}: {}%\n", labels.effectiveness, row.effectiveness_pct));
        md.push_str(&format!("- {}: {}%\n", labels.antimicrobial, row.antimicrobial_pct));
        md.push_str(&format!("- {}: {}%\n", labels.barrier, row.barrier_property_pct));
        md.push_str(&format!("- {}: {}\n\n", labels.cost, row.cost));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::estimator::estimate;

    #[test]
    fn test_format_result() {
        let result = estimate("Daging", "Nano-Ag", 4.0, 3, 70.0).unwrap();
        let md = MarkdownFormatter::format(&result, Locale::En);

        assert!(md.starts_with("## Analysis Result: Daging + Nano-Ag\n"));
        assert!(md.contains("**Food status:** 🟢 Fresh"));
        assert!(md.contains("**Microbial level:** 0.02"));
        assert!(md.contains("- Without nano packaging: 7 days"));
        assert!(md.contains("- With Nano-Ag: 10.0 days"));
        assert!(md.contains("- Estimated days remaining: 7.0 days"));
        assert!(md.contains("1. Daging (meat) is highly sensitive"));
        assert!(md.contains("3. Store in a sealed container"));
    }

    #[test]
    fn test_format_result_indonesian() {
        let result = estimate("Ikan", "Nano-ZnO", 4.0, 10, 80.0).unwrap();
        let md = MarkdownFormatter::format(&result, Locale::Id);

        assert!(md.contains("🟡 Mulai Rusak"));
        assert!(md.contains("- Dengan Nano-ZnO: 4.1 hari"));
        assert!(md.contains("- Hari tersisa estimasi: 0.0 hari"));
        assert!(md.contains("1. Ikan sangat sensitif."));
    }

    #[test]
    fn test_format_materials() {
        let md = MarkdownFormatter::format_materials(Catalog::global().unwrap(), Locale::Id);
        assert!(md.contains("### Nano-kitosan"));
        assert!(md.contains("- Efektivitas: 80%"));
        assert!(md.contains("- Biaya: Tinggi"));
    }
}
