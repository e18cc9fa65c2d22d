use glam::Vec2;

/// Map a position inside a `width` x `height` rectangle centered at the origin
/// to texture space.
///
/// `u` grows left to right. `v` is flipped so the top edge maps to `v = 0`.
/// The result depends only on the position and the bounding box, never on
/// how the outline was rounded.
#[inline]
pub fn compute_uv(position: Vec2, width: f32, height: f32) -> [f32; 2] {
    let u = (position.x + width * 0.5) / width;
    let v = 1.0 - (position.y + height * 0.5) / height;
    [u, v]
}
