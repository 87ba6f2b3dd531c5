use anyhow::Result;
use log::{debug, info};

use crate::cstr;
use crate::physic_engine::PhysicEngineFull;
use crate::renderer_engine::{
    config::RendererConfig,
    shader::compile_shader_program,
    types::{head_vertex, tessellate_segment, VertexGPU},
    RendererEngine,
};

/// Capacité initiale du buffer de sommets (réallouée au besoin).
const INITIAL_VERTEX_CAPACITY: usize = 4096;

/// Rendu OpenGL des tracés de feux d'artifice.
///
/// Les segments sont tessellés en quads (`GL_TRIANGLES`), les pointes sont
/// envoyées en `GL_POINTS`. Les deux lots partagent le même VBO : segments
/// d'abord, pointes ensuite.
pub struct Renderer {
    vao: u32,
    vbo: u32,
    shader_program: u32,
    loc_half_size: i32,

    vertex_capacity: usize,
    vertices: Vec<VertexGPU>,

    window_size_f32: (f32, f32),
    config: RendererConfig,
}

impl Renderer {
    /// Crée le renderer. Le contexte OpenGL doit déjà être courant.
    pub fn new(width: i32, height: i32, config: &RendererConfig) -> Result<Self> {
        let (vertex_src, fragment_src) = Self::src_shaders_strokes();
        let shader_program = unsafe { compile_shader_program(vertex_src, fragment_src)? };
        let loc_half_size = unsafe { gl::GetUniformLocation(shader_program, cstr!("uHalfSize")) };

        let (vao, vbo) = unsafe {
            gl::Viewport(0, 0, width, height);
            Self::setup_gpu_buffers(INITIAL_VERTEX_CAPACITY)
        };
        info!(
            "🎨 Stroke renderer ready ({} x {}, {} vertices preallocated)",
            width, height, INITIAL_VERTEX_CAPACITY
        );

        Ok(Self {
            vao,
            vbo,
            shader_program,
            loc_half_size,
            vertex_capacity: INITIAL_VERTEX_CAPACITY,
            vertices: Vec::with_capacity(INITIAL_VERTEX_CAPACITY),
            window_size_f32: (width as f32, height as f32),
            config: config.clone(),
        })
    }

    fn src_shaders_strokes() -> (&'static str, &'static str) {
        let vertex_src = r#"
        #version 330 core
        layout(location = 0) in vec2 aPos;
        layout(location = 1) in vec3 aColor;
        layout(location = 2) in float aSize;

        out vec3 vertexColor;

        // demi-taille de la fenêtre : le repère physique est centré
        uniform vec2 uHalfSize;

        void main() {
            vertexColor = aColor;
            gl_Position = vec4(aPos / uHalfSize, 0.0, 1.0);
            gl_PointSize = max(aSize, 1.0);
        }
        "#;

        let fragment_src = r#"
        #version 330 core
        in vec3 vertexColor;
        out vec4 FragColor;

        void main() {
            FragColor = vec4(vertexColor, 1.0);
        }
        "#;
        (vertex_src, fragment_src)
    }

    unsafe fn setup_gpu_buffers(capacity: usize) -> (u32, u32) {
        let (mut vao, mut vbo) = (0u32, 0u32);

        gl::GenVertexArrays(1, &mut vao);
        gl::BindVertexArray(vao);

        gl::GenBuffers(1, &mut vbo);
        gl::BindBuffer(gl::ARRAY_BUFFER, vbo);
        gl::BufferData(
            gl::ARRAY_BUFFER,
            (capacity * std::mem::size_of::<VertexGPU>()) as isize,
            std::ptr::null(),
            gl::STREAM_DRAW,
        );

        VertexGPU::setup_vertex_attribs();
        gl::BindVertexArray(0);

        (vao, vbo)
    }

    /// Construit les sommets de la frame. Retourne le nombre de sommets de segments ;
    /// les pointes suivent dans `self.vertices`.
    fn build_vertices<P: PhysicEngineFull>(&mut self, physic: &P) -> usize {
        self.vertices.clear();

        let width_scale = self.config.pen_width_scale;
        for segment in physic.iter_segments() {
            if let Some(quad) = tessellate_segment(&segment, width_scale) {
                self.vertices.extend_from_slice(&quad);
            }
        }
        let segment_vertices = self.vertices.len();

        let point_size = self.config.head_point_size;
        self.vertices
            .extend(physic.iter_heads().map(|head| head_vertex(&head, point_size)));

        segment_vertices
    }

    unsafe fn upload_vertices(&mut self) {
        gl::BindBuffer(gl::ARRAY_BUFFER, self.vbo);

        if self.vertices.len() > self.vertex_capacity {
            let new_capacity = self.vertices.len().next_power_of_two();
            debug!(
                "🔁 Vertex buffer reallocation ({} → {})",
                self.vertex_capacity, new_capacity
            );
            self.vertex_capacity = new_capacity;
        }

        // orphaning : on réalloue à chaque frame pour éviter la synchro GPU
        gl::BufferData(
            gl::ARRAY_BUFFER,
            (self.vertex_capacity * std::mem::size_of::<VertexGPU>()) as isize,
            std::ptr::null(),
            gl::STREAM_DRAW,
        );
        let bytes: &[u8] = bytemuck::cast_slice(&self.vertices);
        gl::BufferSubData(
            gl::ARRAY_BUFFER,
            0,
            bytes.len() as isize,
            bytes.as_ptr() as *const _,
        );
    }
}

impl RendererEngine for Renderer {
    fn render_frame<P: PhysicEngineFull>(&mut self, physic: &P) -> usize {
        let segment_vertices = self.build_vertices(physic);
        let total = self.vertices.len();
        let [r, g, b] = self.config.clear_color;

        unsafe {
            gl::ClearColor(r, g, b, 1.0);
            gl::Clear(gl::COLOR_BUFFER_BIT);

            if total == 0 {
                return 0;
            }

            self.upload_vertices();

            gl::UseProgram(self.shader_program);
            gl::Uniform2f(
                self.loc_half_size,
                (self.window_size_f32.0 / 2.0).max(1.0),
                (self.window_size_f32.1 / 2.0).max(1.0),
            );
            gl::BindVertexArray(self.vao);
            if segment_vertices > 0 {
                gl::DrawArrays(gl::TRIANGLES, 0, segment_vertices as i32);
            }
            if total > segment_vertices {
                gl::DrawArrays(
                    gl::POINTS,
                    segment_vertices as i32,
                    (total - segment_vertices) as i32,
                );
            }
            gl::BindVertexArray(0);
        }

        total
    }

    fn set_window_size(&mut self, width: i32, height: i32) {
        self.window_size_f32 = (width as f32, height as f32);
        unsafe {
            gl::Viewport(0, 0, width, height);
        }
    }

    fn close(&mut self) {
        unsafe {
            gl::DeleteVertexArrays(1, &self.vao);
            gl::DeleteBuffers(1, &self.vbo);
            gl::DeleteProgram(self.shader_program);
        }
        self.vao = 0;
        self.vbo = 0;
        self.shader_program = 0;
        info!("🧹 Stroke renderer closed");
    }
}
