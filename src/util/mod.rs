//! Utility functions.
//!
//! This module provides layout configuration, colormaps for raster
//! output, and the file writers.

pub mod colormaps;
pub mod layout_config;
pub mod output;

pub use colormaps::{colorize, ColorPalette};
pub use layout_config::{FriezeLayout, WallpaperLayout};
