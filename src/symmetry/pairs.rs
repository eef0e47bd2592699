//! Sites and the pairs of symmetry related positions they form.

use std::fmt;

use glam::{DAffine2, DVec2};

use super::{Lattice, SymmetryGroup, TOLERANCE};

/// A position together with its orbit and stabiliser.
#[derive(Debug, Clone)]
pub struct Site {
    position: DVec2,
    orbit: Vec<DVec2>,
    stabiliser: Vec<DAffine2>,
}

impl Site {
    /// Site of `position`, moved into the unit cell first.
    pub fn new(group: &SymmetryGroup, position: DVec2) -> Self {
        let lattice = group.lattice();
        let position = lattice.wrap(position);
        let mut orbit = vec![position];
        let mut stabiliser = Vec::new();

        for op in group.ops() {
            let image = lattice.wrap(op.transform_point2(position));
            if lattice.equivalent(image, position) {
                stabiliser.push(*op);
            }
            if !orbit.iter().any(|p| lattice.equivalent(*p, image)) {
                orbit.push(image);
            }
        }

        Self {
            position,
            orbit,
            stabiliser,
        }
    }

    /// Representative position inside the unit cell.
    pub fn position(&self) -> DVec2 {
        self.position
    }

    /// Symmetry equivalent positions inside the unit cell.
    pub fn orbit(&self) -> &[DVec2] {
        &self.orbit
    }

    /// Operations that leave the position in place.
    pub fn stabiliser(&self) -> &[DAffine2] {
        &self.stabiliser
    }

    /// Number of equivalent positions per cell.
    pub fn multiplicity(&self) -> usize {
        self.orbit.len()
    }

    /// Whether `p` is one of the orbit positions, up to a lattice vector.
    pub fn contains(&self, lattice: Lattice, p: DVec2) -> bool {
        self.orbit.iter().any(|q| lattice.equivalent(*q, p))
    }
}

/// Every pair equivalent to (`origin`, `origin + vector`) that starts at
/// the origin.
#[derive(Debug, Clone)]
pub struct PairExpansion {
    site: Site,
    vector: DVec2,
    ends: Vec<DVec2>,
}

impl PairExpansion {
    /// Expand the pair from `origin` along `vector`.
    ///
    /// `vector` is measured in cells from the wrapped origin.
    pub fn new(group: &SymmetryGroup, origin: DVec2, vector: DVec2) -> Self {
        let lattice = group.lattice();
        let site = Site::new(group, origin);
        let origin = site.position();
        let end = origin + vector;

        let mut ends: Vec<DVec2> = Vec::new();
        for op in group.ops() {
            let (p1, p2) = (op.transform_point2(origin), op.transform_point2(end));
            // either end of the image pair may land back on the origin
            let images = [
                lattice.lattice_vector(origin - p1).map(|d| p2 + d),
                lattice.lattice_vector(origin - p2).map(|d| p1 + d),
            ];
            for e in images.into_iter().flatten() {
                if !ends.iter().any(|x| x.abs_diff_eq(e, TOLERANCE)) {
                    ends.push(e);
                }
            }
        }

        Self { site, vector, ends }
    }

    /// Site of the origin.
    pub fn site(&self) -> &Site {
        &self.site
    }

    /// Pair vector this expansion was built from.
    pub fn vector(&self) -> DVec2 {
        self.vector
    }

    /// End points of all equivalent pairs from the origin.
    pub fn ends(&self) -> &[DVec2] {
        &self.ends
    }

    /// Whether (`origin`, `end`) is one of the expanded pairs.
    pub fn contains(&self, end: DVec2) -> bool {
        self.ends.iter().any(|e| e.abs_diff_eq(end, TOLERANCE))
    }

    /// Equivalent pairs starting at one orbit position.
    pub fn neighbours(&self) -> usize {
        self.ends.len()
    }

    /// Equivalent ordered pairs per unit cell.
    pub fn multiplicity(&self) -> usize {
        self.site.multiplicity() * self.neighbours()
    }
}

/// All pair classes between positions of the same site, with pair vectors
/// reaching at most `reach` cells.
#[derive(Debug, Clone)]
pub struct PairCollection {
    expansions: Vec<PairExpansion>,
}

impl PairCollection {
    /// Collect pairs for every distinct site among `positions`.
    pub fn new(group: &SymmetryGroup, positions: &[DVec2], reach: i32) -> Self {
        let lattice = group.lattice();
        let mut sites: Vec<Site> = Vec::new();
        for &p in positions {
            if !sites.iter().any(|s| s.contains(lattice, p)) {
                sites.push(Site::new(group, p));
            }
        }

        let translations = lattice.translations(reach);
        let mut expansions: Vec<PairExpansion> = Vec::new();
        for site in &sites {
            let first = expansions.len();
            for point in site.orbit() {
                for t in &translations {
                    let end = *point + *t;
                    if expansions[first..].iter().any(|e| e.contains(end)) {
                        continue;
                    }
                    let vector = end - site.position();
                    expansions.push(PairExpansion::new(group, site.position(), vector));
                }
            }
        }

        tracing::debug!(
            group = group.name(),
            sites = sites.len(),
            classes = expansions.len(),
            "collected pairs"
        );
        Self { expansions }
    }

    /// One expansion per pair class.
    pub fn expansions(&self) -> &[PairExpansion] {
        &self.expansions
    }
}

fn vec_label(v: DVec2) -> String {
    // avoid printing "-0.000"
    let clean = |x: f64| if x.abs() < TOLERANCE { 0.0 } else { x };
    format!("({:.3}, {:.3})", clean(v.x), clean(v.y))
}

impl fmt::Display for PairCollection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:<15}, {:<15}, {:<15}", "Origin", "Vector", "Multiplicity")?;
        for e in &self.expansions {
            write!(
                f,
                "\n{:<15}, {:<15}, {:<15}",
                vec_label(e.site.position()),
                vec_label(e.vector),
                e.multiplicity()
            )?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::symmetry::BuiltinGroup;

    fn p2mg() -> SymmetryGroup {
        BuiltinGroup::P2mg.group().unwrap()
    }

    /// Motif position in the `p2mg` figure: on a mirror.
    const MOTIF: DVec2 = DVec2::new(0.2, 0.25);

    #[test]
    fn general_and_special_sites() {
        let p1m = BuiltinGroup::P1m.group().unwrap();
        let general = Site::new(&p1m, DVec2::new(3.2, 0.0));
        assert_eq!(general.multiplicity(), 2);
        assert_eq!(general.stabiliser().len(), 1);
        assert!(general.contains(Lattice::Line, DVec2::new(-0.4, 0.0)));

        let on_mirror = Site::new(&p1m, DVec2::new(0.4, 0.0));
        assert_eq!(on_mirror.multiplicity(), 1);
        assert_eq!(on_mirror.stabiliser().len(), 2);
    }

    #[test]
    fn p2mg_motif_sits_on_a_mirror() {
        let site = Site::new(&p2mg(), MOTIF);
        assert_eq!(site.multiplicity(), 2);
        assert_eq!(site.stabiliser().len(), 2);
    }

    #[test]
    fn frieze_translation_pairs() {
        let p1 = BuiltinGroup::P1.group().unwrap();
        let origin = DVec2::new(1.0 / 3.0, 0.0);
        for k in 1..=3 {
            let pair = PairExpansion::new(&p1, origin, DVec2::new(f64::from(k), 0.0));
            // forwards and backwards
            assert_eq!(pair.neighbours(), 2);
            assert_eq!(pair.multiplicity(), 2);
        }
        assert_eq!(PairExpansion::new(&p1, origin, DVec2::ZERO).multiplicity(), 1);
    }

    #[test]
    fn frieze_mirror_pairs() {
        let p1m = BuiltinGroup::P1m.group().unwrap();
        let origin = DVec2::new(0.2, 0.0);
        let translation = PairExpansion::new(&p1m, origin, DVec2::new(1.0, 0.0));
        assert_eq!(translation.multiplicity(), 4);
        // origin 0.2 and its image 0.6
        let reflection = PairExpansion::new(&p1m, origin, DVec2::new(0.4, 0.0));
        assert_eq!(reflection.neighbours(), 1);
        assert_eq!(reflection.multiplicity(), 2);
        assert_eq!(PairExpansion::new(&p1m, origin, DVec2::ZERO).multiplicity(), 2);

        let on_mirror = DVec2::new(0.4, 0.0);
        let translation = PairExpansion::new(&p1m, on_mirror, DVec2::new(2.0, 0.0));
        assert_eq!(translation.multiplicity(), 2);
    }

    #[test]
    fn p2mg_operation_classes() {
        let group = p2mg();
        let classes = [
            (DVec2::ZERO, 1),
            (DVec2::new(1.0, 0.0), 2),
            (DVec2::new(0.6, 0.5), 2),
            (DVec2::new(-0.4, -0.5), 2),
            (DVec2::new(0.0, 1.0), 2),
        ];
        for (vector, neighbours) in classes {
            let pair = PairExpansion::new(&group, MOTIF, vector);
            assert_eq!(pair.neighbours(), neighbours, "{vector}");
            assert_eq!(pair.multiplicity(), 2 * neighbours, "{vector}");
        }
    }

    #[test]
    fn rotation_pair_reaches_its_mirror_image() {
        let pair = PairExpansion::new(&p2mg(), MOTIF, DVec2::new(0.6, 0.5));
        assert!(pair.contains(DVec2::new(0.8, 0.75)));
        assert!(pair.contains(DVec2::new(0.8, -0.25)));
    }

    #[test]
    fn collection_splits_pair_classes() {
        let p1 = BuiltinGroup::P1.group().unwrap();
        let pairs = PairCollection::new(&p1, &[DVec2::new(1.0 / 3.0, 0.0)], 1);
        let counts: Vec<_> = pairs.expansions().iter().map(|e| e.multiplicity()).collect();
        assert_eq!(counts, [2, 1]);
    }

    #[test]
    fn equivalent_positions_share_a_site() {
        let p1m = BuiltinGroup::P1m.group().unwrap();
        let once = PairCollection::new(&p1m, &[DVec2::new(0.2, 0.0)], 1);
        let twice = PairCollection::new(&p1m, &[DVec2::new(0.2, 0.0), DVec2::new(0.6, 0.0)], 1);
        assert_eq!(once.expansions().len(), twice.expansions().len());
    }

    #[test]
    fn table_has_header_and_one_row_per_class() {
        let p1 = BuiltinGroup::P1.group().unwrap();
        let text = PairCollection::new(&p1, &[DVec2::new(0.5, 0.0)], 2).to_string();
        let mut lines = text.lines();
        let header = lines.next().unwrap();
        assert!(header.starts_with("Origin"));
        assert!(header.contains("Multiplicity"));
        assert_eq!(lines.count(), 3);
        assert!(text.contains("(0.500, 0.000)"));
        assert!(!text.contains("-0.000"));
    }
}
