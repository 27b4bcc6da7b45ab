//! Run the local estimator on the built-in sample scenario and print the
//! full report.
//!
//! Run with: cargo run --bin analyze_sample

use agro_advisor::display::{format_area, format_money};
use agro_advisor::{AnalysisRequest, Crop, FieldSelection, LatLng, ShapeKind, SoilReading};

fn main() -> anyhow::Result<()> {
    // The demo's "fill sample" values: a 2 ha polygon near Yakutsk
    let request = AnalysisRequest {
        crop: Crop::Potato,
        soil: SoilReading { ph: 6.4, n: 48.0, p: 16.0, k: 64.0, moisture: 23.5, om: 2.9 },
        field: FieldSelection {
            area_m2: 20_000.0,
            center: LatLng { lat: 62.0272, lng: 129.7321 },
            shape: ShapeKind::Polygon,
        },
    };

    let report = request.analyze()?;

    println!("Field Analysis · {}", report.crop.label());
    println!("==========================================");
    println!();
    println!("Field: {} · {}", report.selection_label, format_area(request.field.area_m2));
    println!("Center: {}", report.center_label);
    println!();

    println!("Soil suitability: {:.1} / 100", report.score.overall);
    println!("  pH {:.1} · NPK {:.1} · moisture {:.1} · organic matter {:.1}",
        report.score.ph, report.score.npk, report.score.moisture, report.score.organic_matter);
    for note in &report.score.notes {
        println!("  - {note}");
    }
    println!();

    println!("Fertilizer plan:");
    println!("  {}", report.fertilizer.summary);
    println!();

    println!("Care checklist:");
    for task in &report.care_plan {
        println!("  [ ] {task}");
    }
    println!();

    println!("Projection:");
    println!(
        "  Yield: +{:.1}% ({})",
        report.projection.yield_increase_pct, report.projection.yield_rationale
    );
    println!(
        "  Profit/savings: ~${} ({})",
        format_money(report.projection.profit),
        report.projection.profit_rationale
    );
    println!();

    println!("Share summary:");
    println!("{}", report.share_summary());

    Ok(())
}
