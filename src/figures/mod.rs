//! The figure catalogue.
//!
//! Every figure is a plain function from a [`Style`] to one or more SVG
//! documents. Which figures exist depends on the target document.

pub mod frieze;
pub mod sketches;
pub mod wallpaper;

use std::fmt;
use std::path::{Path, PathBuf};

use svg::Document;

use crate::error::{Result, SymfigError};
use crate::style::{Style, Target};
use crate::util::output;

/// A rendered SVG document and the file name it is saved under.
#[derive(Debug)]
pub struct SvgFile {
    /// File name inside the `figs/` directory.
    pub name: String,
    /// The document.
    pub document: Document,
}

impl SvgFile {
    /// Create a new SVG file.
    pub fn new(name: impl Into<String>, document: Document) -> Self {
        Self {
            name: name.into(),
            document,
        }
    }
}

/// Signature shared by all figure functions.
pub type RenderFn = fn(&Style) -> Result<Vec<SvgFile>>;

/// A named entry in the catalogue.
#[derive(Clone, Copy)]
pub struct Figure {
    /// Name used on the command line.
    pub name: &'static str,
    /// What the figure shows.
    pub description: &'static str,
    /// Renderer.
    pub render: RenderFn,
}

impl fmt::Debug for Figure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Figure")
            .field("name", &self.name)
            .field("description", &self.description)
            .finish_non_exhaustive()
    }
}

/// Figures available for a target, in render order.
pub fn catalog(target: Target) -> Vec<Figure> {
    let mut figures = vec![
        Figure {
            name: "p1",
            description: "frieze p1: translations of a single motif",
            render: frieze::p1,
        },
        Figure {
            name: "p1m_g",
            description: "frieze p1m, general position: translations and reflections",
            render: frieze::p1m_general,
        },
        Figure {
            name: "p1m_s",
            description: "frieze p1m, special position on a mirror",
            render: frieze::p1m_special,
        },
        Figure {
            name: "p2mg",
            description: "wallpaper p2mg with one arrow per operation class, and its legend",
            render: wallpaper::p2mg,
        },
    ];

    match target {
        Target::Presentation => figures.extend([
            Figure {
                name: "wyckoff",
                description: "general positions in one p2mg cell",
                render: wallpaper::wyckoff,
            },
            Figure {
                name: "generator",
                description: "threefold generator orbit and single arrows",
                render: sketches::generator,
            },
        ]),
        Target::Report => figures.extend([
            Figure {
                name: "title",
                description: "title graphic: p2mg lattice with operation arrows",
                render: wallpaper::title,
            },
            Figure {
                name: "variants",
                description: "sample sheet of all arrow variants",
                render: sketches::variants,
            },
        ]),
    }

    figures
}

/// Look up a figure by name.
pub fn find(target: Target, name: &str) -> Result<Figure> {
    catalog(target)
        .into_iter()
        .find(|f| f.name == name)
        .ok_or_else(|| SymfigError::unknown_figure(name, target.to_string()))
}

/// Figures selected by `only`, or the whole catalogue when `only` is empty.
pub fn select(target: Target, only: &[String]) -> Result<Vec<Figure>> {
    if only.is_empty() {
        return Ok(catalog(target));
    }
    only.iter().map(|name| find(target, name)).collect()
}

/// Render the selected figures into `<out_root>/<target>/figs/`.
///
/// Returns the paths of all written files.
pub fn render_target(target: Target, only: &[String], out_root: &Path) -> Result<Vec<PathBuf>> {
    let figures = select(target, only)?;
    let style = Style::for_target(target);
    let dir = output::ensure_dir(&out_root.join(target.dir_name()).join("figs"))?;

    let mut written = Vec::new();
    for figure in figures {
        tracing::debug!(figure = figure.name, %target, "rendering");
        for file in (figure.render)(&style)? {
            written.push(output::write_svg(&dir, &file)?);
        }
    }

    tracing::info!(%target, count = written.len(), "figures written");
    Ok(written)
}
