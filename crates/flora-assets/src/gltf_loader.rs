//! glTF / GLB loading: extract the vertex positions of the first mesh.

use std::path::Path;

use flora_common::AssetError;
use tracing::{debug, info};

use super::mesh::MeshPositions;

/// Compression extension the `gltf` crate cannot decode.
pub const DRACO_EXTENSION: &str = "KHR_draco_mesh_compression";

/// Load the vertex positions of the first mesh in a `.gltf` / `.glb` file.
///
/// The mesh is the first node carrying one in the default scene, searched
/// depth-first, falling back to the document's first mesh. Only the first
/// primitive is read and node transforms are ignored, so positions are in
/// the mesh's local space.
///
/// `decoder_path` only appears in the error raised for Draco-compressed
/// files.
pub fn load_mesh(path: &Path, decoder_path: &str) -> Result<MeshPositions, AssetError> {
    let bytes = std::fs::read(path).map_err(|source| AssetError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let gltf = gltf::Gltf::from_slice_without_validation(&bytes)
        .map_err(|e| AssetError::Gltf(e.to_string()))?;

    if let Some(ext) = gltf
        .document
        .extensions_required()
        .find(|ext| *ext == DRACO_EXTENSION)
    {
        return Err(AssetError::UnsupportedExtension {
            extension: ext.to_string(),
            decoder_path: decoder_path.to_string(),
        });
    }

    let buffers = gltf::import_buffers(&gltf.document, path.parent(), gltf.blob.clone())
        .map_err(|e| AssetError::Gltf(e.to_string()))?;

    let mesh = first_mesh(&gltf.document).ok_or(AssetError::NoMesh)?;
    let primitive = mesh.primitives().next().ok_or(AssetError::NoMesh)?;
    debug!(
        mesh = mesh.name().unwrap_or("<unnamed>"),
        primitives = mesh.primitives().count(),
        "selected mesh"
    );

    let reader = primitive.reader(|buffer| buffers.get(buffer.index()).map(|data| &data[..]));
    let positions: Vec<[f32; 3]> = reader
        .read_positions()
        .ok_or(AssetError::MissingPositions)?
        .collect();

    if positions.is_empty() {
        return Err(AssetError::Empty);
    }

    let mesh = MeshPositions::new(positions);
    if let Some(bounds) = mesh.bounds() {
        info!(
            path = %path.display(),
            vertices = mesh.count(),
            "loaded mesh (bounds {:?} .. {:?})",
            bounds.min,
            bounds.max,
        );
    }
    Ok(mesh)
}

/// First mesh reachable from the default scene, else the first mesh at all.
fn first_mesh(document: &gltf::Document) -> Option<gltf::Mesh<'_>> {
    let scene = document
        .default_scene()
        .or_else(|| document.scenes().next());

    if let Some(scene) = scene {
        for node in scene.nodes() {
            if let Some(mesh) = find_mesh(node) {
                return Some(mesh);
            }
        }
    }

    document.meshes().next()
}

fn find_mesh(node: gltf::Node<'_>) -> Option<gltf::Mesh<'_>> {
    if let Some(mesh) = node.mesh() {
        return Some(mesh);
    }
    node.children().find_map(find_mesh)
}

// =============================================================================
// Tests
// =============================================================================
