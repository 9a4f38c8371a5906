/// Single coordinate axis used for board width, height, and positions.
///
/// Signed so that positions translated from pointer input can land off the
/// board (including negative) and still be looked up harmlessly.
pub type Coord = i16;

/// Count type used for mine counts and total-cell counts.
pub type CellCount = u32;

/// Two-dimensional coordinates `(x, y)`.
pub type Coord2 = (Coord, Coord);

pub trait ToNdIndex {
    type Output;
    fn to_nd_index(self) -> Self::Output;
}

impl ToNdIndex for Coord2 {
    type Output = [usize; 2];

    /// Only meaningful for in-bounds coordinates, which are never negative.
    fn to_nd_index(self) -> Self::Output {
        [self.0 as usize, self.1 as usize]
    }
}

/// Cell count of a `a * b` board, treating non-positive sides as empty.
pub const fn mult(a: Coord, b: Coord) -> CellCount {
    if a <= 0 || b <= 0 {
        return 0;
    }
    (a as CellCount) * (b as CellCount)
}

/// Whether `coords` lies inside `[0, size.0) x [0, size.1)`.
pub const fn in_bounds(coords: Coord2, size: Coord2) -> bool {
    coords.0 >= 0 && coords.0 < size.0 && coords.1 >= 0 && coords.1 < size.1
}

/// Moore neighborhood, the eight cells around a center.
pub(crate) const MOORE: [Coord2; 8] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (-1, 0),
    (1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];

/// Von Neumann neighborhood, used by the flood fill.
pub(crate) const ORTHOGONAL: [Coord2; 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

/// Applies `delta` to `coords`, returning a value only when it remains in bounds.
fn apply_delta(coords: Coord2, delta: Coord2, bounds: Coord2) -> Option<Coord2> {
    let next = (
        coords.0.checked_add(delta.0)?,
        coords.1.checked_add(delta.1)?,
    );
    in_bounds(next, bounds).then_some(next)
}

/// Iterates the in-bounds cells of a neighborhood around `center`.
#[derive(Debug, Clone)]
pub struct NeighborIter {
    center: Coord2,
    bounds: Coord2,
    displacements: &'static [Coord2],
    index: usize,
}

impl NeighborIter {
    pub(crate) fn new(center: Coord2, bounds: Coord2, displacements: &'static [Coord2]) -> Self {
        Self {
            center,
            bounds,
            displacements,
            index: 0,
        }
    }

    pub fn moore(center: Coord2, bounds: Coord2) -> Self {
        Self::new(center, bounds, &MOORE)
    }

    pub fn orthogonal(center: Coord2, bounds: Coord2) -> Self {
        Self::new(center, bounds, &ORTHOGONAL)
    }
}

impl Iterator for NeighborIter {
    type Item = Coord2;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(&delta) = self.displacements.get(self.index) {
            self.index += 1;

            if let Some(next_item) = apply_delta(self.center, delta, self.bounds) {
                return Some(next_item);
            }
        }
        None
    }
}
