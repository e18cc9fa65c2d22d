//! Vehicle telemetry dashboard meshes
//!
//! Builds every rounded panel the dashboard draws, going through a mesh cache
//! the way the scene does on re-render, and reports what would be uploaded.

mod panels;

use anyhow::{ensure, Context};
use round_geometry::{GpuVertex, MeshCache};

const VEHICLE_COUNT: usize = 6;
/// Hover and press re-renders rebuild every panel this many times.
const RENDER_PASSES: usize = 3;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let panels = panels::dashboard_panels(VEHICLE_COUNT);
    let mut cache = MeshCache::new(panels.len());
    let mut uploaded_bytes = 0;

    for pass in 0..RENDER_PASSES {
        for panel in &panels {
            let mesh = cache
                .get_or_build(&panel.geometry)
                .with_context(|| format!("failed to build mesh for {}", panel.name))?;
            ensure!(
                mesh.is_consistent(),
                "mesh for {} has mismatched buffers",
                panel.name
            );

            if pass > 0 {
                continue;
            }

            let vertices: Vec<GpuVertex> = mesh.interleaved();
            let bytes = bytemuck::cast_slice::<GpuVertex, u8>(&vertices).len()
                + bytemuck::cast_slice::<u32, u8>(mesh.indices()).len();
            uploaded_bytes += bytes;

            log::info!(
                "✓ {:<10} {:>3} vertices, {:>3} triangles, {:>5} bytes at {}",
                panel.name,
                mesh.vertex_count(),
                mesh.triangle_count(),
                bytes,
                panel.position
            );
        }
    }

    log::info!(
        "✓ {} panels over {} passes served by {} cached meshes ({} bytes)",
        panels.len(),
        RENDER_PASSES,
        cache.len(),
        uploaded_bytes
    );

    Ok(())
}
