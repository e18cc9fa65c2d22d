use crate::mesh::Mesh;

/// Interleaved vertex with Pod/Zeroable for buffer uploading
///
/// 32 bytes per vertex: position, normal, then UV.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct GpuVertex {
    pub position: [f32; 3], // 12 bytes
    pub normal: [f32; 3],   // 12 bytes
    pub uv: [f32; 2],       // 8 bytes
}

impl Mesh {
    /// One interleaved vertex per mesh vertex, in vertex order.
    pub fn interleaved(&self) -> Vec<GpuVertex> {
        self.positions()
            .iter()
            .zip(self.normals())
            .zip(self.uvs())
            .map(|((&position, &normal), &uv)| GpuVertex {
                position,
                normal,
                uv,
            })
            .collect()
    }
}

#[cfg(feature = "wgpu")]
impl GpuVertex {
    pub const fn desc() -> wgpu::VertexBufferLayout<'static> {
        const ATTRIBUTES: &[wgpu::VertexAttribute] = &[
            wgpu::VertexAttribute {
                offset: 0,
                shader_location: 0,
                format: wgpu::VertexFormat::Float32x3,
            },
            wgpu::VertexAttribute {
                offset: std::mem::size_of::<[f32; 3]>() as wgpu::BufferAddress,
                shader_location: 1,
                format: wgpu::VertexFormat::Float32x3,
            },
            wgpu::VertexAttribute {
                offset: std::mem::size_of::<[f32; 6]>() as wgpu::BufferAddress,
                shader_location: 2,
                format: wgpu::VertexFormat::Float32x2,
            },
        ];

        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<GpuVertex>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: ATTRIBUTES,
        }
    }
}
