use gfx_maths::{Vec2, Vec3};
use log::{debug, warn};
use mc_format::model::{Aabb, Material, Mesh, MeshPart, Model, Node, NodePart, Texture};

use super::cursor::ByteCursor;
use super::ReadError;

/// Decodes the three sections of the stream, in their fixed order, into a
/// [`Model`]. Nodes are read last so their mesh-part and material references
/// can be resolved against the already-populated lists.
pub(crate) struct ModelReader<'a> {
    cur: ByteCursor<'a>,
}

impl<'a> ModelReader<'a> {
    pub(crate) fn new(data: &'a [u8]) -> Self {
        Self {
            cur: ByteCursor::new(data),
        }
    }

    pub(crate) fn convert(mut self) -> Result<Model, ReadError> {
        let mut model = Model::default();
        self.convert_meshes(&mut model)?;
        self.convert_materials(&mut model)?;
        self.convert_nodes(&mut model)?;
        Ok(model)
    }

    fn convert_meshes(&mut self, model: &mut Model) -> Result<(), ReadError> {
        let mesh_count = self.cur.read_count("mesh")?;
        debug!("Reading {} meshes", mesh_count);

        for _ in 0..mesh_count {
            let vertex_size = self.cur.read_count("vertex size")?;
            let vertex_count = self.cur.read_count("vertex")?;
            let vertices = self.cur.read_f32_array(vertex_size * vertex_count)?;
            let id = self.cur.read_string()?;
            let attributes = self.cur.read_u32()?;

            let mut mesh = Mesh {
                id,
                vertex_size: vertex_size as u32,
                vertices,
                attributes,
                parts: Vec::new(),
            };

            let part_count = self.cur.read_count("mesh part")?;
            for _ in 0..part_count {
                let id = self.cur.read_string()?;
                let index_count = self.cur.read_count("index")?;
                let indices = self.cur.read_u16_array(index_count)?;
                let primitive_type = self.cur.read_u32()?;
                let aabb = self.read_aabb()?;

                mesh.parts.push(MeshPart {
                    id,
                    indices,
                    primitive_type,
                    aabb,
                });
            }

            model.meshes.push(mesh);
        }

        Ok(())
    }

    fn convert_materials(&mut self, model: &mut Model) -> Result<(), ReadError> {
        let material_count = self.cur.read_count("material")?;
        debug!("Reading {} materials", material_count);

        for _ in 0..material_count {
            let id = self.cur.read_string()?;
            let mut material = Material {
                id,
                textures: Vec::new(),
            };

            let texture_count = self.cur.read_count("texture")?;
            for _ in 0..texture_count {
                let id = self.cur.read_string()?;
                let path = self.cur.read_string()?;
                let uv_translation = self.read_vec2()?;
                let uv_scale = self.read_vec2()?;
                let usage = self.cur.read_i32()?;
                let wrap_mode_u = self.cur.read_i32()?;
                let wrap_mode_v = self.cur.read_i32()?;

                material.textures.push(Texture {
                    id,
                    path,
                    uv_translation,
                    uv_scale,
                    usage,
                    wrap_mode_u,
                    wrap_mode_v,
                });
            }

            model.materials.push(material);
        }

        Ok(())
    }

    fn convert_nodes(&mut self, model: &mut Model) -> Result<(), ReadError> {
        let mut roots_left = self.cur.read_count("node")?;
        debug!("Reading {} root nodes", roots_left);

        // Nodes still waiting for children, innermost last. An explicit stack
        // instead of recursion: tree depth is bounded only by input size.
        let mut open: Vec<(Node, usize)> = Vec::new();

        loop {
            // attach nodes whose subtrees are complete
            while open.last().map_or(false, |(_, left)| *left == 0) {
                if let Some((done, _)) = open.pop() {
                    match open.last_mut() {
                        Some((parent, _)) => parent.children.push(done),
                        None => model.nodes.push(done),
                    }
                }
            }

            if let Some((_, left)) = open.last_mut() {
                *left -= 1;
            } else if roots_left > 0 {
                roots_left -= 1;
            } else {
                break;
            }

            let (node, child_count) = self.read_node_record(model)?;
            open.push((node, child_count));
        }

        Ok(())
    }

    /// Reads one node record up to and including its child count; the
    /// children themselves are handled by [`Self::convert_nodes`].
    fn read_node_record(&mut self, model: &Model) -> Result<(Node, usize), ReadError> {
        let transform = self.read_transform()?;
        let id = self.cur.read_string()?;

        let mut node = Node {
            transform,
            id,
            parts: Vec::new(),
            children: Vec::new(),
        };

        let part_count = self.cur.read_count("node part")?;
        for _ in 0..part_count {
            let mesh_part_id = self.cur.read_string()?;
            let material_id = self.cur.read_string()?;

            let mesh_part = model.find_mesh_part(&mesh_part_id);
            if mesh_part.is_none() {
                warn!("Node `{}`: no mesh part with id `{}`", node.id, mesh_part_id);
            }

            let material = model.find_material(&material_id);
            if material.is_none() {
                warn!("Node `{}`: no material with id `{}`", node.id, material_id);
            }

            let bone_count = self.cur.read_count("bone")?;
            if bone_count > 0 {
                // bone record layout is not defined yet, nothing is consumed
                warn!(
                    "Node `{}`: {} bone records present but not decoded",
                    node.id, bone_count
                );
            }

            node.parts.push(NodePart {
                mesh_part_id,
                material_id,
                mesh_part,
                material,
            });
        }

        let child_count = self.cur.read_count("child")?;
        Ok((node, child_count))
    }

    fn read_transform(&mut self) -> Result<[f32; 16], ReadError> {
        let values = self.cur.read_f32_array(16)?;
        let mut transform = [0.0; 16];
        transform.copy_from_slice(&values);
        Ok(transform)
    }

    fn read_vec2(&mut self) -> Result<Vec2, ReadError> {
        Ok(Vec2::new(self.cur.read_f32()?, self.cur.read_f32()?))
    }

    fn read_aabb(&mut self) -> Result<Aabb, ReadError> {
        let values = self.cur.read_f32_array(6)?;
        Ok(Aabb {
            min: Vec3::new(values[0], values[1], values[2]),
            max: Vec3::new(values[3], values[4], values[5]),
        })
    }
}
