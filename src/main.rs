// main.rs
//
// Generate one enclosure and write it as binary STL.
//
//     pegbox [params.json] [out.stl]
//
// Missing fields in params.json fall back to the reference box.

use anyhow::Context;
use pegbox::config::{BoxParameters, GeneratorConfig};
use pegbox::{Outcome, generate_shared};
use std::fs;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let mut args = std::env::args().skip(1);
    let params = match args.next() {
        Some(path) => {
            let text = fs::read_to_string(&path)
                .with_context(|| format!("reading parameters from {path}"))?;
            serde_json::from_str::<BoxParameters>(&text)
                .with_context(|| format!("parsing parameters in {path}"))?
        },
        None => BoxParameters::default(),
    };
    let out = args.next().unwrap_or_else(|| "pegbox.stl".to_string());

    if let Err(problem) = params.validate() {
        warn!("Parameters out of range: {}", problem);
    }

    let generated = generate_shared(&params, &GeneratorConfig::default())
        .await
        .context("generating enclosure")?;
    if let Outcome::Degraded { cause, .. } = &generated.outcome {
        warn!("Box written without vents: {}", cause);
    }

    let solid = generated.outcome.solid();
    let report = solid.manifold_report();
    if report.boundary_edges > 0 || report.components != 1 {
        warn!(
            "Solid is not a single closed body: {} open edges, {} components",
            report.boundary_edges, report.components
        );
    }

    let bytes = solid
        .to_stl_binary()
        .context("encoding STL")?;
    fs::write(&out, &bytes).with_context(|| format!("writing {out}"))?;
    info!("Wrote {} ({} bytes)", out, bytes.len());
    Ok(())
}
