use bytemuck::{Pod, Zeroable};
use gl::types::*;
use memoffset::offset_of;
use std::mem;

use crate::physic_engine::types::{Head, Position, Segment};

/// Longueur en dessous de laquelle un segment n'est pas tracé.
const MIN_SEGMENT_LENGTH: f64 = 1e-9;

/// Sommet envoyé au GPU.
///
/// # Attributs GPU
///
/// | Location | Type   | Champs                     |
/// |:---------:|:-------|:---------------------------|
/// | `0`       | `vec2` | `pos_x`, `pos_y`          |
/// | `1`       | `vec3` | `col_r`, `col_g`, `col_b` |
/// | `2`       | `float`| `size`                    |
///
/// **Stride total** : `6 × f32 = 24 octets`
#[repr(C)] // garantit un layout C-compatible pour l’envoi GPU
#[derive(Debug, Clone, Copy, Default, PartialEq, Pod, Zeroable)]
pub struct VertexGPU {
    /// Position horizontale, repère écran centré.
    pub pos_x: f32,

    /// Position verticale, repère écran centré.
    pub pos_y: f32,

    pub col_r: f32,
    pub col_g: f32,
    pub col_b: f32,

    /// Taille du point (utilisée uniquement pour les pointes).
    pub size: f32,
}

impl VertexGPU {
    fn new(pos: Position, rgb: [f32; 3], size: f32) -> Self {
        Self {
            pos_x: pos.x as f32,
            pos_y: pos.y as f32,
            col_r: rgb[0],
            col_g: rgb[1],
            col_b: rgb[2],
            size,
        }
    }

    /// Configure les attributs de sommets pour OpenGL.
    ///
    /// ⚠️ Pré-requis : un *Vertex Array Object (VAO)* doit déjà être lié avant l’appel.
    pub fn setup_vertex_attribs() {
        let stride = mem::size_of::<Self>() as GLsizei;

        unsafe {
            // Attribut 0 : position (x, y)
            gl::VertexAttribPointer(
                0,
                2,
                gl::FLOAT,
                gl::FALSE,
                stride,
                offset_of!(Self, pos_x) as *const _,
            );
            gl::EnableVertexAttribArray(0);

            // Attribut 1 : couleur (r, g, b)
            gl::VertexAttribPointer(
                1,
                3,
                gl::FLOAT,
                gl::FALSE,
                stride,
                offset_of!(Self, col_r) as *const _,
            );
            gl::EnableVertexAttribArray(1);

            // Attribut 2 : taille
            gl::VertexAttribPointer(
                2,
                1,
                gl::FLOAT,
                gl::FALSE,
                stride,
                offset_of!(Self, size) as *const _,
            );
            gl::EnableVertexAttribArray(2);
        }
    }
}

/// Transforme un segment en quad (deux triangles, six sommets).
///
/// Le quad est centré sur le segment, d'épaisseur `segment.width * width_scale`.
/// Les segments de longueur nulle ne produisent rien.
pub fn tessellate_segment(segment: &Segment, width_scale: f32) -> Option<[VertexGPU; 6]> {
    let dir = segment.to - segment.from;
    let length = dir.length();
    if length < MIN_SEGMENT_LENGTH {
        return None;
    }

    let half_width = segment.width * width_scale as f64 / 2.0;
    let normal = dir.perp() / length * half_width;
    let rgb = segment.color.rgb();

    let a = VertexGPU::new(segment.from + normal, rgb, 0.0);
    let b = VertexGPU::new(segment.from - normal, rgb, 0.0);
    let c = VertexGPU::new(segment.to + normal, rgb, 0.0);
    let d = VertexGPU::new(segment.to - normal, rgb, 0.0);

    Some([a, b, c, c, b, d])
}

/// Sommet unique (rendu en `GL_POINTS`) pour une pointe.
pub fn head_vertex(head: &Head, point_size: f32) -> VertexGPU {
    VertexGPU::new(head.pos, head.color.rgb(), point_size)
}
