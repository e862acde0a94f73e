use anyhow::{Context, Result};
use lottie_data::Document;
use lottie_recolor::{
    build_variants, elide_layers, write_variants, ColorScheme, RecolorConfig, Recolorer, Role,
};
use std::fmt::Write as _;
use std::path::{Path, PathBuf};

pub enum SchemeSelector {
    Named(String),
    Burnout(f64),
}

pub fn load_config(path: Option<&Path>) -> Result<RecolorConfig> {
    RecolorConfig::load_or_default(path).with_context(|| match path {
        Some(path) => format!("Failed to load config: {}", path.display()),
        None => "Failed to build default config".to_string(),
    })
}

fn load_document(path: &Path) -> Result<Document> {
    Document::from_path(path)
        .with_context(|| format!("Failed to load animation: {}", path.display()))
}

fn resolve_scheme<'a>(
    config: &'a RecolorConfig,
    selector: &SchemeSelector,
) -> Result<&'a ColorScheme> {
    match selector {
        SchemeSelector::Named(name) => config.scheme(name).context("Failed to resolve scheme"),
        SchemeSelector::Burnout(percent) => config
            .scheme_for_burnout(*percent)
            .with_context(|| format!("Failed to resolve scheme for burnout {percent}%")),
    }
}

pub fn cmd_variants(config: &RecolorConfig, input: &Path, out_dir: &Path) -> Result<Vec<PathBuf>> {
    let base = load_document(input)?;
    let variants = build_variants(&base, config)
        .with_context(|| format!("Failed to build variants of {}", input.display()))?;
    let written = write_variants(&variants, out_dir)
        .with_context(|| format!("Failed to write variants to {}", out_dir.display()))?;

    println!("Wrote {} variants to {}", written.len(), out_dir.display());
    Ok(written)
}

pub fn cmd_remap(
    config: &RecolorConfig,
    input: &Path,
    output: &Path,
    selector: &SchemeSelector,
    elide: bool,
) -> Result<()> {
    let scheme = resolve_scheme(config, selector)?;
    let mut document = load_document(input)?;

    if elide {
        let (stripped, report) = elide_layers(&document, &config.elide);
        tracing::info!("Elided {} layers", report.removed);
        document = stripped;
    }

    let remapped = Recolorer::new(scheme, &config.rules).apply(&document);
    remapped
        .document
        .write_to_path(output)
        .with_context(|| format!("Failed to write {}", output.display()))?;

    tracing::info!(
        "Recolored {} colors with '{}' → {}",
        remapped.report.total(),
        scheme.name,
        output.display()
    );
    Ok(())
}

pub fn cmd_elide(config: &RecolorConfig, input: &Path, output: &Path) -> Result<()> {
    let document = load_document(input)?;
    let (stripped, report) = elide_layers(&document, &config.elide);
    for asset_id in &report.missing_assets {
        tracing::warn!("Asset '{}' not found, nothing elided there", asset_id);
    }
    stripped
        .write_to_path(output)
        .with_context(|| format!("Failed to write {}", output.display()))?;

    println!("Removed {} layers → {}", report.removed, output.display());
    Ok(())
}

pub fn render_schemes(config: &RecolorConfig) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Color Schemes:");
    let _ = writeln!(out, "==============");
    for scheme in &config.schemes {
        let _ = writeln!(out, "{}", scheme.name);
        for role in Role::ALL {
            let _ = writeln!(out, "  {:<10} {}", role.as_str(), scheme.role(role));
        }
    }
    let _ = writeln!(
        out,
        "\nBurnout thresholds: moderate ≥ {}%, burnout ≥ {}%",
        config.thresholds.moderate, config.thresholds.burnout
    );
    out
}
