//! Symmetry groups in fractional coordinates.
//!
//! Operations are affine isometries acting on positions measured in unit
//! cells. Two operations that differ only by a lattice translation are
//! the same coset, so a group is stored as one representative per coset
//! with its translation wrapped into the unit cell.
//!
//! The pair counts shown in the figure legends come from [`pairs`].

pub mod pairs;

use std::fmt;

use glam::{DAffine2, DMat2, DVec2};

use crate::error::{Result, SymfigError};

pub use pairs::{PairCollection, PairExpansion, Site};

/// Two coordinates closer than this are treated as equal.
pub const TOLERANCE: f64 = 1e-6;

/// Cap on operation products while closing a group.
const MAX_PRODUCTS: usize = 10_000;

/// Position of the first mirror in a `p1m` cell, in cell lengths.
pub const FRIEZE_MIRROR: f64 = 2.0 / 5.0;

/// Directions along which a pattern repeats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lattice {
    /// Periodic along x only, as for frieze groups.
    Line,
    /// Periodic along x and y.
    Plane,
}

impl Lattice {
    fn periodic(self) -> [bool; 2] {
        match self {
            Self::Line => [true, false],
            Self::Plane => [true, true],
        }
    }

    /// Move `p` into the unit cell along every periodic axis.
    pub fn wrap(self, p: DVec2) -> DVec2 {
        let [px, py] = self.periodic();
        DVec2::new(wrap_axis(p.x, px), wrap_axis(p.y, py))
    }

    /// The lattice vector `v` is equal to, if it is one.
    pub fn lattice_vector(self, v: DVec2) -> Option<DVec2> {
        let [px, py] = self.periodic();
        Some(DVec2::new(snap_axis(v.x, px)?, snap_axis(v.y, py)?))
    }

    /// Whether `a` and `b` differ by a lattice vector.
    pub fn equivalent(self, a: DVec2, b: DVec2) -> bool {
        self.lattice_vector(a - b).is_some()
    }

    /// Lattice vectors with every periodic component in `-reach..=reach`.
    pub fn translations(self, reach: i32) -> Vec<DVec2> {
        let ys = match self {
            Self::Line => 0..=0,
            Self::Plane => -reach..=reach,
        };
        ys.flat_map(|j| (-reach..=reach).map(move |i| DVec2::new(f64::from(i), f64::from(j))))
            .collect()
    }
}

fn wrap_axis(x: f64, periodic: bool) -> f64 {
    if !periodic {
        return x;
    }
    let w = x.rem_euclid(1.0);
    if 1.0 - w < TOLERANCE { 0.0 } else { w }
}

fn snap_axis(x: f64, periodic: bool) -> Option<f64> {
    let target = if periodic { x.round() } else { 0.0 };
    ((x - target).abs() < TOLERANCE).then_some(target)
}

/// A finite set of isometries, closed under composition modulo the lattice.
#[derive(Debug, Clone)]
pub struct SymmetryGroup {
    name: String,
    lattice: Lattice,
    ops: Vec<DAffine2>,
}

impl SymmetryGroup {
    /// Close `generators` under composition.
    ///
    /// Fails when the closure keeps growing, which happens for generators
    /// that are not compatible with the lattice.
    pub fn generate(
        name: impl Into<String>,
        lattice: Lattice,
        generators: &[DAffine2],
    ) -> Result<Self> {
        let mut group = Self {
            name: name.into(),
            lattice,
            ops: vec![DAffine2::IDENTITY],
        };
        for g in generators {
            group.insert(*g);
        }

        // right multiplication by every generator reaches the whole group
        let mut products = 0;
        let mut next = 0;
        while next < group.ops.len() {
            let op = group.ops[next];
            for g in generators {
                products += 1;
                if products > MAX_PRODUCTS {
                    return Err(SymfigError::group_not_closed(group.name, MAX_PRODUCTS));
                }
                group.insert(op * *g);
            }
            next += 1;
        }

        tracing::debug!(group = %group.name, order = group.ops.len(), "closed symmetry group");
        Ok(group)
    }

    fn insert(&mut self, op: DAffine2) {
        let op = DAffine2::from_mat2_translation(op.matrix2, self.lattice.wrap(op.translation));
        if !self.contains(&op) {
            self.ops.push(op);
        }
    }

    /// Whether `op` is one of the group's cosets.
    pub fn contains(&self, op: &DAffine2) -> bool {
        self.ops.iter().any(|o| {
            o.matrix2.abs_diff_eq(op.matrix2, TOLERANCE)
                && self.lattice.equivalent(o.translation, op.translation)
        })
    }

    /// Group name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Periodicity of the group.
    pub fn lattice(&self) -> Lattice {
        self.lattice
    }

    /// One operation per coset, identity first.
    pub fn ops(&self) -> &[DAffine2] {
        &self.ops
    }

    /// Number of cosets.
    pub fn order(&self) -> usize {
        self.ops.len()
    }
}

/// The groups drawn in the figures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum BuiltinGroup {
    /// Frieze group of pure translations.
    P1,
    /// Frieze group with mirrors perpendicular to the axis.
    P1m,
    /// Plane group with mirrors, glides and twofold rotations.
    P2mg,
}

impl BuiltinGroup {
    /// Short symbol.
    pub fn name(self) -> &'static str {
        match self {
            Self::P1 => "p1",
            Self::P1m => "p1m",
            Self::P2mg => "p2mg",
        }
    }

    /// Periodicity.
    pub fn lattice(self) -> Lattice {
        match self {
            Self::P1 | Self::P1m => Lattice::Line,
            Self::P2mg => Lattice::Plane,
        }
    }

    /// Generating operations besides the lattice translations.
    pub fn generators(self) -> Vec<DAffine2> {
        match self {
            Self::P1 => Vec::new(),
            // x -> 4/5 - x
            Self::P1m => vec![DAffine2::from_mat2_translation(
                DMat2::from_diagonal(DVec2::new(-1.0, 1.0)),
                DVec2::new(2.0 * FRIEZE_MIRROR, 0.0),
            )],
            // (-x, -y) and (x, 1/2 - y)
            Self::P2mg => vec![
                DAffine2::from_mat2(-DMat2::IDENTITY),
                DAffine2::from_mat2_translation(
                    DMat2::from_diagonal(DVec2::new(1.0, -1.0)),
                    DVec2::new(0.0, 0.5),
                ),
            ],
        }
    }

    /// The closed group.
    pub fn group(self) -> Result<SymmetryGroup> {
        SymmetryGroup::generate(self.name(), self.lattice(), &self.generators())
    }
}

impl fmt::Display for BuiltinGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn builtin_orders() {
        assert_eq!(BuiltinGroup::P1.group().unwrap().order(), 1);
        assert_eq!(BuiltinGroup::P1m.group().unwrap().order(), 2);
        assert_eq!(BuiltinGroup::P2mg.group().unwrap().order(), 4);
    }

    #[test]
    fn p2mg_contains_the_glide() {
        let group = BuiltinGroup::P2mg.group().unwrap();
        // (-x, y + 1/2)
        let glide = DAffine2::from_mat2_translation(
            DMat2::from_diagonal(DVec2::new(-1.0, 1.0)),
            DVec2::new(0.0, 0.5),
        );
        assert!(group.contains(&glide));
        // the same coset shifted by a lattice vector
        let shifted = DAffine2::from_translation(DVec2::new(2.0, -1.0)) * glide;
        assert!(group.contains(&shifted));
    }

    #[test]
    fn stored_translations_lie_in_the_cell() {
        let group = BuiltinGroup::P2mg.group().unwrap();
        for op in group.ops() {
            for t in [op.translation.x, op.translation.y] {
                assert!((0.0..1.0).contains(&t), "{t}");
            }
        }
    }

    #[test]
    fn incommensurate_rotation_does_not_close() {
        let turn = DAffine2::from_angle(1.0);
        let err = SymmetryGroup::generate("spin", Lattice::Plane, &[turn]).unwrap_err();
        assert!(matches!(err, SymfigError::GroupNotClosed { .. }));
    }

    #[test]
    fn wrap_only_touches_periodic_axes() {
        let p = Lattice::Line.wrap(DVec2::new(-0.25, 3.5));
        assert_abs_diff_eq!(p.x, 0.75, epsilon = 1e-12);
        assert_abs_diff_eq!(p.y, 3.5, epsilon = 1e-12);
        let p = Lattice::Plane.wrap(DVec2::new(2.0 - 1e-9, -1.5));
        assert_abs_diff_eq!(p.x, 0.0, epsilon = 1e-12);
        assert_abs_diff_eq!(p.y, 0.5, epsilon = 1e-12);
    }

    #[test]
    fn lattice_vectors() {
        assert_eq!(
            Lattice::Plane.lattice_vector(DVec2::new(1.0, -2.0)),
            Some(DVec2::new(1.0, -2.0))
        );
        assert_eq!(Lattice::Plane.lattice_vector(DVec2::new(0.5, 0.0)), None);
        assert_eq!(Lattice::Line.lattice_vector(DVec2::new(1.0, 1.0)), None);
        assert_eq!(Lattice::Line.translations(2).len(), 5);
        assert_eq!(Lattice::Plane.translations(1).len(), 9);
    }
}
