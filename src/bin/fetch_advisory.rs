//! Fetch a plan from the remote advisory service, falling back to the local
//! estimator when the service is unreachable or returns a bad payload.
//!
//! Run with: cargo run --features remote --bin fetch_advisory -- <endpoint-url>

use agro_advisor::display::format_money;
use agro_advisor::remote::{AdvisoryClient, AdvisoryRequest};
use agro_advisor::{AnalysisRequest, Crop, FieldSelection, LatLng, ShapeKind, SoilReading};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let endpoint = std::env::args()
        .nth(1)
        .ok_or_else(|| anyhow::anyhow!("usage: fetch_advisory <endpoint-url>"))?;

    let request = AnalysisRequest {
        crop: Crop::Potato,
        soil: SoilReading { ph: 6.4, n: 48.0, p: 16.0, k: 64.0, moisture: 23.5, om: 2.9 },
        field: FieldSelection {
            area_m2: 20_000.0,
            center: LatLng { lat: 62.0272, lng: 129.7321 },
            shape: ShapeKind::Polygon,
        },
    };

    let advisory_request = AdvisoryRequest {
        soil: request.soil,
        crop: request.crop,
        area: request.field.area_ha(),
        center: request.field.center_label(),
    };

    let client = AdvisoryClient::new(endpoint);
    match client.fetch(&advisory_request).await {
        Ok(advisory) => {
            println!("Remote advisory:");
            println!("  Yield: +{:.1}%", advisory.yield_increase);
            println!("  Profit/savings: ~${}", format_money(advisory.profit));
            println!("  Fertilizer: {}", advisory.fertilizer_plan);
            println!("  Care tasks:");
            for task in advisory.care_tasks() {
                println!("    [ ] {task}");
            }
        }
        Err(e) => {
            tracing::warn!("advisory service unavailable, using local estimator: {}", e);
            let report = request.analyze()?;
            println!("Local estimate (fallback):");
            println!("  Yield: +{:.1}%", report.projection.yield_increase_pct);
            println!("  Profit/savings: ~${}", format_money(report.projection.profit));
            println!("  Fertilizer: {}", report.fertilizer.summary);
            println!("  Care tasks:");
            for task in &report.care_plan {
                println!("    [ ] {task}");
            }
        }
    }

    Ok(())
}
