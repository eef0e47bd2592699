//! Symfig - figures for a talk and a report on crystallographic symmetry.
//!
//! Symfig renders the diagrams used to explain frieze and wallpaper groups
//! as SVG, and simulates diffraction from a partially ordered tiling as a
//! series of PNG images.
//!
//! # Features
//!
//! - Frieze group diagrams (`p1`, `p1m`) with symmetry operation arrows
//! - Wallpaper group diagrams (`p2mg`) with legends
//! - Site and pair multiplicities behind the legend counts
//! - Arrow, arc-arrow and self-loop glyphs in colour and dash variants
//! - Two styles: dark slides and printable black-on-white
//! - Diffraction and pair distribution images via 2D FFT
//!
//! # Example
//!
//! ```ignore
//! use symfig::figures;
//! use symfig::style::Target;
//! use std::path::Path;
//!
//! // Render every report figure below ./out/report/figs
//! let written = figures::render_target(Target::Report, &[], Path::new("out"))?;
//! println!("wrote {} files", written.len());
//! ```

#![warn(
    missing_docs,
    missing_debug_implementations,
    rust_2018_idioms,
    unreachable_pub
)]
#![deny(unsafe_code)]

pub mod diffraction;
pub mod draw;
pub mod error;
pub mod figures;
pub mod geometry;
pub mod style;
pub mod symmetry;
pub mod util;

pub use error::{Result, SymfigError};
