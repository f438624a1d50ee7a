use std::{
    collections::HashSet,
    path::{Path, PathBuf},
};

use anyhow::Context;
use rayon::prelude::*;

use crate::{
    compose::{
        composite::{Composite, compose_pair},
        summary::{compose_comparison, compose_extracted, compose_overview},
    },
    config::{OutputFormat, RenderConfig},
    foundation::{
        core::{Rng64, derive_seed},
        error::{SwatchError, SwatchResult},
    },
    layout,
    palette::model::{ColorScheme, PaletteDocument, Variant},
    render::{
        raster::{rasterize, write_png},
        svg::to_svg,
    },
};

/// What an [`Output`] depicts. Decides its file name.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Artifact {
    /// Light and dark desktop mockups of one scheme.
    Desktop { scheme: String },
    Overview,
    Comparison,
    Extracted,
}

impl Artifact {
    pub fn file_stem(&self) -> String {
        match self {
            Self::Desktop { scheme } => format!("desktop_concept_{}", scheme.to_lowercase()),
            Self::Overview => "all_schemes_overview".to_owned(),
            Self::Comparison => "scheme_comparison".to_owned(),
            Self::Extracted => "extracted_colors".to_owned(),
        }
    }
}

/// A composed artifact waiting to be written.
#[derive(Clone, Debug, PartialEq)]
pub struct Output {
    pub artifact: Artifact,
    pub composite: Composite,
}

impl Output {
    pub fn file_name(&self, format: OutputFormat) -> String {
        format!("{}.{}", self.artifact.file_stem(), format.extension())
    }
}

/// Lay out both variants of `scheme` and place them side by side.
///
/// Both variants share one random stream derived from the scheme name, so their geometry is
/// identical and only the tokens differ.
#[tracing::instrument(skip_all, fields(scheme = %scheme.name))]
pub fn render_scheme(scheme: &ColorScheme, cfg: &RenderConfig) -> SwatchResult<Composite> {
    cfg.validate()?;
    let seed = derive_seed(cfg.seed, &scheme.name);
    let canvas = cfg.canvas_size();
    let opts = cfg.layout_options();

    let [light, dark] = Variant::ALL
        .map(|variant| layout::render(scheme.variant(variant), canvas, Rng64::new(seed), &opts));
    let composite = compose_pair(&scheme.name, light, dark);

    let missing = composite.missing_tokens();
    if !missing.is_empty() {
        if cfg.strict {
            return Err(SwatchError::validation(format!(
                "scheme '{}' is missing tokens: {}",
                scheme.name,
                missing.join(", ")
            )));
        }
        tracing::warn!(
            scheme = %scheme.name,
            missing = %missing.join(","),
            "substituted default color for missing tokens"
        );
    }
    Ok(composite)
}

/// Every artifact for `doc`: one desktop pair per scheme in document order, then the summary
/// sheets that have something to show.
#[tracing::instrument(skip_all, fields(schemes = doc.schemes().len(), parallel = cfg.parallel))]
pub fn render_document(doc: &PaletteDocument, cfg: &RenderConfig) -> SwatchResult<Vec<Output>> {
    cfg.validate()?;

    let desktop = |scheme: &ColorScheme| -> SwatchResult<Output> {
        let composite = render_scheme(scheme, cfg)?;
        tracing::debug!(scheme = %scheme.name, "composed desktop pair");
        Ok(Output {
            artifact: Artifact::Desktop {
                scheme: scheme.name.clone(),
            },
            composite,
        })
    };

    let mut outputs = if cfg.parallel {
        let pool = build_thread_pool(cfg.threads)?;
        pool.install(|| {
            doc.schemes()
                .par_iter()
                .map(desktop)
                .collect::<SwatchResult<Vec<_>>>()
        })?
    } else {
        doc.schemes()
            .iter()
            .map(desktop)
            .collect::<SwatchResult<Vec<_>>>()?
    };

    let opts = cfg.layout_options();
    let summaries = [
        (Artifact::Overview, compose_overview(doc, &opts)),
        (Artifact::Comparison, compose_comparison(doc, &opts)),
        (Artifact::Extracted, compose_extracted(doc.extracted(), &opts)),
    ];
    for (artifact, composed) in summaries {
        match composed {
            Ok(composite) => outputs.push(Output {
                artifact,
                composite,
            }),
            Err(SwatchError::Validation(reason)) => {
                tracing::warn!(artifact = %artifact.file_stem(), %reason, "skipped summary");
            }
            Err(e) => return Err(e),
        }
    }
    Ok(outputs)
}

/// Write each output into `dir`, creating it if needed. Returns the written paths in order.
///
/// Artifacts whose file names collide (schemes differing only in case) get a `_2`, `_3`, ...
/// suffix instead of overwriting the earlier file.
#[tracing::instrument(skip(outputs), fields(outputs = outputs.len()))]
pub fn write_outputs(
    outputs: &[Output],
    dir: &Path,
    format: OutputFormat,
    scale: f64,
) -> SwatchResult<Vec<PathBuf>> {
    std::fs::create_dir_all(dir)
        .with_context(|| format!("create output dir '{}'", dir.display()))?;

    let mut written = Vec::with_capacity(outputs.len());
    let mut taken = HashSet::with_capacity(outputs.len());
    for output in outputs {
        let stem = unique_stem(&mut taken, output.artifact.file_stem());
        let path = dir.join(format!("{stem}.{}", format.extension()));
        match format {
            OutputFormat::Svg => {
                std::fs::write(&path, to_svg(&output.composite))
                    .with_context(|| format!("write svg '{}'", path.display()))?;
            }
            OutputFormat::Png => {
                let frame = rasterize(&output.composite, scale)?;
                write_png(&frame, &path)?;
            }
        }
        tracing::debug!(path = %path.display(), "wrote artifact");
        written.push(path);
    }
    Ok(written)
}

fn unique_stem(taken: &mut HashSet<String>, stem: String) -> String {
    if taken.insert(stem.clone()) {
        return stem;
    }
    let mut n = 2usize;
    loop {
        let candidate = format!("{stem}_{n}");
        if taken.insert(candidate.clone()) {
            tracing::warn!(%stem, renamed = %candidate, "output name collision");
            return candidate;
        }
        n += 1;
    }
}

fn build_thread_pool(threads: Option<usize>) -> SwatchResult<rayon::ThreadPool> {
    if let Some(n) = threads
        && n == 0
    {
        return Err(SwatchError::validation("'threads' must be >= 1 when set"));
    }

    let mut builder = rayon::ThreadPoolBuilder::new();
    if let Some(n) = threads {
        builder = builder.num_threads(n);
    }
    builder
        .build()
        .map_err(|e| SwatchError::render(format!("failed to build rayon thread pool: {e}")))
}
