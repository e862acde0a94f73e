use crate::config::{RecolorConfig, VariantTarget};
use crate::elide::elide_layers;
use crate::error::{RecolorError, Result};
use crate::remap::{RemapReport, Recolorer, Remapped};
use lottie_data::Document;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

/// A recolored copy of the base animation, ready to be written.
#[derive(Debug, Clone)]
pub struct Variant {
    pub target: VariantTarget,
    pub document: Document,
    pub report: RemapReport,
}

/// Elides configured layers once, then recolors the result once per variant.
pub fn build_variants(base: &Document, config: &RecolorConfig) -> Result<Vec<Variant>> {
    let (stripped, elided) = elide_layers(base, &config.elide);
    if elided.removed > 0 {
        info!(removed = elided.removed, "elided layers from base animation");
    }

    config
        .variants
        .iter()
        .map(|target| {
            target.check_file()?;
            let scheme = config.scheme(&target.scheme)?;
            let Remapped { document, report } =
                Recolorer::new(scheme, &config.rules).apply(&stripped);
            Ok(Variant {
                target: target.clone(),
                document,
                report,
            })
        })
        .collect()
}

/// Writes each variant under `out_dir`, returning the written paths.
pub fn write_variants(variants: &[Variant], out_dir: &Path) -> Result<Vec<PathBuf>> {
    fs::create_dir_all(out_dir).map_err(|source| RecolorError::Io {
        path: out_dir.to_path_buf(),
        source,
    })?;

    let mut written = Vec::with_capacity(variants.len());
    for variant in variants {
        let path = out_dir.join(&variant.target.file);
        variant.document.write_to_path(&path)?;
        info!(
            scheme = %variant.target.scheme,
            colors = variant.report.total(),
            "wrote {}",
            path.display()
        );
        written.push(path);
    }
    Ok(written)
}
