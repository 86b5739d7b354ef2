//! Procedural lattice sphere.
//!
//! Produces one vertex per (latitude, longitude) cell, so the vertex count
//! is exactly `latitudes * longitudes`. Rows are sampled at cell centers,
//! which keeps both poles from collapsing into a single repeated point.

use super::mesh::MeshPositions;

/// Generate a lattice sphere point cloud.
///
/// `latitudes` = number of rings (clamped to ≥ 2), `longitudes` = points
/// per ring (clamped to ≥ 3). The sphere is centered at the origin with
/// its north pole on +Y.
pub fn sphere_mesh(latitudes: u32, longitudes: u32, radius: f32) -> MeshPositions {
    let n_lat = latitudes.max(2);
    let n_lon = longitudes.max(3);

    let mut positions = Vec::with_capacity((n_lat * n_lon) as usize);
    for lat in 0..n_lat {
        for lon in 0..n_lon {
            let [x, y, z] = sphere_point(lat, lon, n_lat, n_lon);
            positions.push([x * radius, y * radius, z * radius]);
        }
    }

    MeshPositions::new(positions)
}

/// Unit-sphere point at the center of cell (`lat`, `lon`).
fn sphere_point(lat: u32, lon: u32, n_lat: u32, n_lon: u32) -> [f32; 3] {
    let theta = std::f32::consts::PI * (lat as f32 + 0.5) / (n_lat as f32);
    let phi = 2.0 * std::f32::consts::PI * (lon as f32) / (n_lon as f32);

    let (sin_theta, cos_theta) = theta.sin_cos();
    let (sin_phi, cos_phi) = phi.sin_cos();

    [sin_theta * cos_phi, cos_theta, sin_theta * sin_phi]
}

// =============================================================================
// Tests
// =============================================================================
