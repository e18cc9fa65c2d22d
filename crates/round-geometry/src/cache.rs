//! Memoization of built meshes for callers that rebuild the same shape often
//! (hover re-renders, list items sharing one button size).

use crate::error::Result;
use crate::geometry::RoundGeometry;
use crate::mesh::Mesh;
use std::collections::HashMap;
use std::sync::Arc;

/// Exact identity of a [`RoundGeometry`], compared bit for bit.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct MeshKey {
    width: u32,
    height: u32,
    left: u32,
    right: u32,
    segments: u32,
}

impl From<&RoundGeometry> for MeshKey {
    fn from(geometry: &RoundGeometry) -> Self {
        let radii = geometry.radii.sanitized();
        Self {
            width: geometry.width.to_bits(),
            height: geometry.height.to_bits(),
            left: radii.left.to_bits(),
            right: radii.right.to_bits(),
            segments: geometry.options.segments_per_corner,
        }
    }
}

struct Entry {
    mesh: Arc<Mesh>,
    last_used: u64,
}

/// Fixed-capacity cache that discards the least recently used mesh when full.
pub struct MeshCache {
    entries: HashMap<MeshKey, Entry>,
    capacity: usize,
    tick: u64,
}

impl MeshCache {
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            entries: HashMap::with_capacity(capacity),
            capacity,
            tick: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn contains(&self, geometry: &RoundGeometry) -> bool {
        self.entries.contains_key(&MeshKey::from(geometry))
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Return the cached mesh for `geometry`, building it on a miss.
    ///
    /// Failed builds are not cached.
    pub fn get_or_build(&mut self, geometry: &RoundGeometry) -> Result<Arc<Mesh>> {
        self.tick += 1;
        let key = MeshKey::from(geometry);

        if let Some(entry) = self.entries.get_mut(&key) {
            log::trace!("mesh cache hit: {:?}", key);
            entry.last_used = self.tick;
            return Ok(Arc::clone(&entry.mesh));
        }

        log::trace!("mesh cache miss: {:?}", key);
        let mesh = Arc::new(geometry.build()?);

        if self.entries.len() >= self.capacity {
            self.evict_oldest();
        }
        self.entries.insert(
            key,
            Entry {
                mesh: Arc::clone(&mesh),
                last_used: self.tick,
            },
        );

        Ok(mesh)
    }

    fn evict_oldest(&mut self) {
        let oldest = self
            .entries
            .iter()
            .min_by_key(|(_, entry)| entry.last_used)
            .map(|(key, _)| *key);

        if let Some(key) = oldest {
            log::trace!("mesh cache evict: {:?}", key);
            self.entries.remove(&key);
        }
    }
}

impl Default for MeshCache {
    fn default() -> Self {
        Self::new(64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::GeometryError;
    use crate::primitives::CornerRadii;

    #[test]
    fn test_repeat_returns_same_mesh() {
        let mut cache = MeshCache::new(4);
        let geometry = RoundGeometry::new(0.9, 0.25, 0.02_f32);

        let first = cache.get_or_build(&geometry).unwrap();
        let second = cache.get_or_build(&geometry).unwrap();

        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn test_distinct_keys() {
        let mut cache = MeshCache::new(4);
        let a = RoundGeometry::new(1.0, 1.0, 0.1_f32);
        let b = a.with_segments_per_corner(3);
        let c = RoundGeometry::new(1.0, 1.0, CornerRadii::new(0.1, 0.0));

        cache.get_or_build(&a).unwrap();
        cache.get_or_build(&b).unwrap();
        cache.get_or_build(&c).unwrap();
        assert_eq!(cache.len(), 3);
    }

    #[test]
    fn test_signed_zero_radii_share_entry() {
        let mut cache = MeshCache::new(4);
        let positive = RoundGeometry::new(1.0, 1.0, CornerRadii::new(0.0, 0.0));
        let negative = RoundGeometry::new(1.0, 1.0, CornerRadii::new(-0.0, -0.0));
        assert_eq!(MeshKey::from(&positive), MeshKey::from(&negative));

        let first = cache.get_or_build(&positive).unwrap();
        let second = cache.get_or_build(&negative).unwrap();
        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn test_least_recently_used_is_evicted() {
        let mut cache = MeshCache::new(2);
        let a = RoundGeometry::new(1.0, 1.0, 0.1_f32);
        let b = RoundGeometry::new(2.0, 1.0, 0.1_f32);
        let c = RoundGeometry::new(3.0, 1.0, 0.1_f32);

        cache.get_or_build(&a).unwrap();
        cache.get_or_build(&b).unwrap();
        // Touch a so b becomes the oldest
        cache.get_or_build(&a).unwrap();
        cache.get_or_build(&c).unwrap();

        assert_eq!(cache.len(), 2);
        assert!(cache.contains(&a));
        assert!(!cache.contains(&b));
        assert!(cache.contains(&c));
    }

    #[test]
    fn test_errors_are_not_cached() {
        let mut cache = MeshCache::new(2);
        let invalid = RoundGeometry::new(0.0, 1.0, 0.1_f32);
        assert!(matches!(
            cache.get_or_build(&invalid),
            Err(GeometryError::InvalidDimension { .. })
        ));
        assert!(cache.is_empty());
    }

    #[test]
    fn test_zero_capacity_still_holds_one() {
        let cache = MeshCache::new(0);
        assert_eq!(cache.capacity(), 1);
    }
}
