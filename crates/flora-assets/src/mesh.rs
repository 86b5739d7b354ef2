//! CPU-side vertex positions that seed the particle state.

/// Axis-aligned bounding box.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub min: [f32; 3],
    pub max: [f32; 3],
}

/// Flat list of vertex positions, one particle per entry.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MeshPositions {
    pub positions: Vec<[f32; 3]>,
}

impl MeshPositions {
    pub fn new(positions: Vec<[f32; 3]>) -> Self {
        Self { positions }
    }

    /// Number of vertices, which is also the particle count.
    pub fn count(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Bounding box of all positions, or `None` for an empty mesh.
    pub fn bounds(&self) -> Option<Bounds> {
        let first = *self.positions.first()?;
        let bounds = self.positions.iter().fold(
            Bounds {
                min: first,
                max: first,
            },
            |mut b, p| {
                for axis in 0..3 {
                    b.min[axis] = b.min[axis].min(p[axis]);
                    b.max[axis] = b.max[axis].max(p[axis]);
                }
                b
            },
        );
        Some(bounds)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_mesh_has_no_bounds() {
        let mesh = MeshPositions::default();
        assert!(mesh.is_empty());
        assert_eq!(mesh.count(), 0);
        assert!(mesh.bounds().is_none());
    }

    #[test]
    fn bounds_cover_all_points() {
        let mesh = MeshPositions::new(vec![[1.0, -2.0, 0.5], [-1.0, 3.0, 0.0], [0.0, 0.0, 2.0]]);
        let b = mesh.bounds().unwrap();
        assert_eq!(b.min, [-1.0, -2.0, 0.0]);
        assert_eq!(b.max, [1.0, 3.0, 2.0]);
    }
}
