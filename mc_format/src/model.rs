use gfx_maths::{Vec2, Vec3};

/// Vertex attribute flag: position
pub const ATTR_POSITION: u32 = 1;
/// Vertex attribute flag: normal
pub const ATTR_NORMAL: u32 = 2;
/// Vertex attribute flag: per-vertex color
pub const ATTR_COLOR: u32 = 4;
/// Vertex attribute flag: texture coordinates
pub const ATTR_UV: u32 = 8;
/// Vertex attribute flag: bone indices/weights for skinning
pub const ATTR_BONE_WEIGHT: u32 = 16;

/// Primitive topology values (GL-style) stored in [`MeshPart::primitive_type`]
pub const PRIMITIVE_POINTS: u32 = 0;
pub const PRIMITIVE_LINES: u32 = 1;
pub const PRIMITIVE_LINE_STRIP: u32 = 3;
pub const PRIMITIVE_TRIANGLES: u32 = 4;
pub const PRIMITIVE_TRIANGLE_STRIP: u32 = 5;

/// Texture channel values stored in [`Texture::usage`]
pub const USAGE_UNKNOWN: i32 = 0;
pub const USAGE_DIFFUSE: i32 = 1;
pub const USAGE_NORMAL: i32 = 2;
pub const USAGE_EMISSIVE: i32 = 3;
pub const USAGE_SPECULAR: i32 = 4;

/// Texture wrap values (GL-style) stored in [`Texture::wrap_mode_u`]/`_v`
pub const WRAP_REPEAT: i32 = 0x2901;
pub const WRAP_CLAMP_TO_EDGE: i32 = 0x812F;
pub const WRAP_MIRRORED_REPEAT: i32 = 0x8370;

/// Root container of a loaded model. Meshes, materials and top-level nodes
/// keep their encounter order; every cross-reference held by a node resolves
/// into this same instance or is unresolved.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Model {
    pub meshes: Vec<Mesh>,
    pub materials: Vec<Material>,
    pub nodes: Vec<Node>,
}

impl Model {
    /// Looks up a mesh part by id across all meshes.
    ///
    /// Part ids are only guaranteed unique within one mesh. The scan runs
    /// over meshes in order and the first mesh containing a match wins, even
    /// if a later mesh contains the same id.
    pub fn find_mesh_part(&self, id: &str) -> Option<MeshPartRef> {
        for (mesh_index, mesh) in self.meshes.iter().enumerate() {
            for (part_index, part) in mesh.parts.iter().enumerate() {
                if part.id == id {
                    return Some(MeshPartRef {
                        mesh: mesh_index,
                        part: part_index,
                    });
                }
            }
        }
        None
    }

    /// Looks up a material by id, first match wins.
    pub fn find_material(&self, id: &str) -> Option<usize> {
        self.materials.iter().position(|material| material.id == id)
    }

    /// Resolves a [`MeshPartRef`] back to the part it names.
    pub fn mesh_part(&self, reference: MeshPartRef) -> Option<&MeshPart> {
        self.meshes
            .get(reference.mesh)
            .and_then(|mesh| mesh.parts.get(reference.part))
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Mesh {
    pub id: String,
    /// Stride of one vertex, in scalar-count terms.
    pub vertex_size: u32,
    /// Interleaved vertex data, `vertex_size` floats per vertex.
    pub vertices: Vec<f32>,
    /// Bitmask of `ATTR_*` flags describing the channels packed into the stride.
    pub attributes: u32,
    pub parts: Vec<MeshPart>,
}

/// A named sub-range of a mesh's index buffer with its own topology and
/// bounding box.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MeshPart {
    pub id: String,
    pub indices: Vec<u16>,
    pub primitive_type: u32,
    pub aabb: Aabb,
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Aabb {
    pub min: Vec3,
    pub max: Vec3,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Material {
    pub id: String,
    pub textures: Vec<Texture>,
}

/// Reference to an external image resource; the image itself is never loaded
/// here.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Texture {
    pub id: String,
    pub path: String,
    pub uv_translation: Vec2,
    pub uv_scale: Vec2,
    pub usage: i32,
    pub wrap_mode_u: i32,
    pub wrap_mode_v: i32,
}

/// A transform-bearing element of the scene hierarchy, binding mesh parts to
/// materials.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Node {
    /// 4x4 matrix, stored exactly as found on the wire.
    pub transform: [f32; 16],
    pub id: String,
    pub parts: Vec<NodePart>,
    pub children: Vec<Node>,
}

/// Non-owning handle to a mesh part: index into [`Model::meshes`] plus index
/// into that mesh's part list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MeshPartRef {
    pub mesh: usize,
    pub part: usize,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct NodePart {
    pub mesh_part_id: String,
    pub material_id: String,
    /// Resolved against the owning model; `None` when the id had no match.
    pub mesh_part: Option<MeshPartRef>,
    /// Index into [`Model::materials`]; `None` when the id had no match.
    pub material: Option<usize>,
}
