// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Locate the cheapest connected seam in an energy map.
//!
//! The classic cumulative-minimum dynamic program.  Both directions
//! are the same algorithm once phrased in terms of a traversal
//! ("outer") axis and a perpendicular ("inner") axis; only the
//! mapping back to (x, y) differs, so there is one implementation
//! here instead of two mirrored ones.
//!
//! Tie-breaking is part of the contract, not an accident: among equal
//! predecessor costs the lowest inner index wins, and among equal
//! endpoint totals the first occurrence wins.  On a perfectly flat
//! map this pins the seam to column or row zero, which the tests rely
//! on.

use crate::cq;
use crate::direction::Direction;
use crate::energy::EnergyMap;
use crate::error::CarveError;
use crate::twodmap::TwoDimensionalMap;

/// A located seam: element i is the perpendicular coordinate (x for
/// vertical seams, y for horizontal ones) at position i along the
/// traversal axis.  Adjacent elements never differ by more than one.
pub type Seam = Vec<u32>;

// Cumulative cost of the cheapest path into a cell, plus the inner
// coordinate it arrived from.
#[derive(Default, Debug, Copy, Clone)]
struct CostAndParent {
    cost: f64,
    parent: u32,
}

/// Find the minimum-total-cost seam through `energy` in the given
/// direction.  Fails only on a map with a zero dimension.
pub fn find_seam(energy: &EnergyMap, direction: Direction) -> Result<Seam, CarveError> {
    let (width, height) = (energy.width, energy.height);
    if width == 0 || height == 0 {
        return Err(CarveError::DegenerateInput { width, height });
    }

    let (outer, inner) = match direction {
        Direction::Vertical => (height, width),
        Direction::Horizontal => (width, height),
    };
    let energy_at = |o: u32, j: u32| match direction {
        Direction::Vertical => energy[(j, o)],
        Direction::Horizontal => energy[(o, j)],
    };

    let mut table: TwoDimensionalMap<CostAndParent> = TwoDimensionalMap::new(inner, outer);

    // The first line's cumulative costs are its raw energies.
    for j in 0..inner {
        table[(j, 0)] = CostAndParent {
            cost: energy_at(0, j),
            parent: j,
        };
    }

    let maxinner = inner - 1;
    for o in 1..outer {
        for j in 0..inner {
            // Three candidate predecessors at j-1, j, j+1, clamped at
            // the edges rather than wrapping.  Scanned lowest index
            // first with a strict improvement test, so ties resolve
            // toward left/up.
            let lo = cq!(j == 0, 0, j - 1);
            let hi = cq!(j == maxinner, maxinner, j + 1);
            let mut parent = lo;
            let mut best = table[(lo, o - 1)].cost;
            for k in lo + 1..=hi {
                let cost = table[(k, o - 1)].cost;
                if cost < best {
                    best = cost;
                    parent = k;
                }
            }
            table[(j, o)] = CostAndParent {
                cost: energy_at(o, j) + best,
                parent,
            };
        }
    }

    // Cheapest endpoint on the last line; first occurrence wins.
    let mut end = 0;
    for j in 1..inner {
        if table[(j, outer - 1)].cost < table[(end, outer - 1)].cost {
            end = j;
        }
    }

    // Walk the stored parents back to the first line, then flip the
    // result into traversal order.
    Ok((0..outer)
        .rev()
        .fold(Vec::with_capacity(outer as usize), |mut acc, o| {
            acc.push(end);
            end = table[(end, o)].parent;
            acc
        })
        .into_iter()
        .rev()
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    const ENERGY_DATA: [f64; 20] = [
        9., 9., 0., 9., 9., //
        9., 1., 9., 8., 9., //
        9., 9., 9., 9., 0., //
        9., 9., 9., 0., 9.,
    ];

    #[test]
    fn energy_grid_to_vertical_seam() {
        let energies = EnergyMap::from_raw(5, 4, ENERGY_DATA.to_vec());
        assert_eq!(
            find_seam(&energies, Direction::Vertical).unwrap(),
            [2, 3, 4, 3]
        );
    }

    #[test]
    fn energy_grid_to_horizontal_seam() {
        let energies = EnergyMap::from_raw(5, 4, ENERGY_DATA.to_vec());
        assert_eq!(
            find_seam(&energies, Direction::Horizontal).unwrap(),
            [0, 1, 0, 1, 2]
        );
    }

    #[test]
    fn flat_maps_pin_the_seam_to_the_low_edge() {
        let energies = EnergyMap::new(4, 4);
        assert_eq!(
            find_seam(&energies, Direction::Vertical).unwrap(),
            [0, 0, 0, 0]
        );
        assert_eq!(
            find_seam(&energies, Direction::Horizontal).unwrap(),
            [0, 0, 0, 0]
        );
    }

    #[test]
    fn seam_routes_around_an_expensive_center() {
        // Cumulative costs by hand: the center column costs 101 by
        // row 1, so every path worth taking hugs an edge; the
        // tie-break then picks column 0 all the way down.
        let energies =
            EnergyMap::from_raw(3, 3, vec![1., 1., 1., 1., 100., 1., 1., 1., 1.]);
        assert_eq!(find_seam(&energies, Direction::Vertical).unwrap(), [0, 0, 0]);
    }

    #[test]
    fn seams_are_connected_and_in_bounds() {
        // A fixed little LCG so the grid is arbitrary but repeatable.
        let mut state: u32 = 0x2545_f491;
        let cells: Vec<f64> = (0..48)
            .map(|_| {
                state = state.wrapping_mul(1_664_525).wrapping_add(1_013_904_223);
                f64::from(state >> 24)
            })
            .collect();
        let energies = EnergyMap::from_raw(8, 6, cells);

        for &direction in &[Direction::Vertical, Direction::Horizontal] {
            let (span, bound) = match direction {
                Direction::Vertical => (6, 8),
                Direction::Horizontal => (8, 6),
            };
            let seam = find_seam(&energies, direction).unwrap();
            assert_eq!(seam.len(), span);
            assert!(seam.iter().all(|&j| j < bound as u32));
            assert!(seam
                .windows(2)
                .all(|w| (i64::from(w[0]) - i64::from(w[1])).abs() <= 1));
        }
    }

    #[test]
    fn zero_dimension_maps_are_rejected() {
        assert_eq!(
            find_seam(&EnergyMap::new(0, 4), Direction::Vertical),
            Err(CarveError::DegenerateInput {
                width: 0,
                height: 4
            })
        );
        assert_eq!(
            find_seam(&EnergyMap::new(3, 0), Direction::Horizontal),
            Err(CarveError::DegenerateInput {
                width: 3,
                height: 0
            })
        );
    }
}
