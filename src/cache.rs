//! Content-hash-keyed geometry cache with bounded LRU eviction.
//!
//! Box geometry is pure in its inputs, so identical inputs always produce
//! identical buffers; the cache keys on a hash of the full input tuple and
//! shares results through `Arc`. Capacity-bounded: least recently used
//! entries are evicted, no ambient global state.

use crate::generator::tessellate_box;
use crate::gradient::{BorderColors, FillGradient};
use crate::metrics::{BorderWidths, BoxShape, CornerRadius};
use crate::vertex::BoxGeometry;
use crate::MathRect;
use ahash::AHasher;
use lru::LruCache;
use std::hash::{Hash, Hasher};
use std::num::NonZeroUsize;
use std::sync::Arc;
use tracing::trace;

/// Content hash of a full box-geometry input tuple.
///
/// Two input tuples hash equal iff every float resolves to the same bit
/// pattern, so the hash is a sound cache key for bit-identical outputs.
pub fn box_content_hash(
    rect: &MathRect,
    shape: &BoxShape,
    widths: &BorderWidths,
    colors: &BorderColors,
    fill: &FillGradient,
) -> u64 {
    let mut hasher = AHasher::default();
    hash_f32(&mut hasher, rect.min.x);
    hash_f32(&mut hasher, rect.min.y);
    hash_f32(&mut hasher, rect.max.x);
    hash_f32(&mut hasher, rect.max.y);

    for corner in 0..4 {
        hash_radius(&mut hasher, shape.radius(corner));
    }
    shape.size_mode.hash(&mut hasher);
    shape.aspect_mode.hash(&mut hasher);

    for edge in 0..4 {
        hash_f32(&mut hasher, widths.width(edge));
    }
    widths.size_mode.hash(&mut hasher);

    for edge in 0..4 {
        hash_gradient(&mut hasher, colors.edge(edge));
    }
    hash_gradient(&mut hasher, fill);
    hasher.finish()
}

fn hash_f32(hasher: &mut impl Hasher, value: f32) {
    value.to_bits().hash(hasher);
}

fn hash_radius(hasher: &mut impl Hasher, radius: CornerRadius) {
    hash_f32(hasher, radius.x);
    hash_f32(hasher, radius.y);
}

fn hash_gradient(hasher: &mut impl Hasher, gradient: &FillGradient) {
    gradient.shape().hash(hasher);
    gradient.direction().hash(hasher);
    gradient.stops().len().hash(hasher);
    for stop in gradient.stops() {
        hash_f32(hasher, stop.position);
        stop.color.hash(hasher);
    }
}

/// A bounded cache of tessellated box geometry.
///
/// # Examples
///
/// ```
/// use kadro::{BorderColors, BorderWidths, BoxShape, Color, FillGradient, GeometryCache, MathRect};
/// use lyon::math::point;
/// use std::num::NonZeroUsize;
///
/// let mut cache = GeometryCache::new(NonZeroUsize::new(64).unwrap());
/// let rect = MathRect::new(point(0.0, 0.0), point(100.0, 60.0));
/// let shape = BoxShape::uniform(8.0);
/// let widths = BorderWidths::uniform(2.0);
/// let colors = BorderColors::solid(Color::BLACK);
/// let fill = FillGradient::solid(Color::WHITE);
///
/// let first = cache.get_or_tessellate(&rect, &shape, &widths, &colors, &fill);
/// let second = cache.get_or_tessellate(&rect, &shape, &widths, &colors, &fill);
/// assert!(std::sync::Arc::ptr_eq(&first, &second));
/// ```
pub struct GeometryCache {
    entries: LruCache<u64, Arc<BoxGeometry>>,
}

impl GeometryCache {
    pub fn new(capacity: NonZeroUsize) -> Self {
        Self {
            entries: LruCache::new(capacity),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Returns cached geometry for the inputs, tessellating on a miss.
    pub fn get_or_tessellate(
        &mut self,
        rect: &MathRect,
        shape: &BoxShape,
        widths: &BorderWidths,
        colors: &BorderColors,
        fill: &FillGradient,
    ) -> Arc<BoxGeometry> {
        let key = box_content_hash(rect, shape, widths, colors, fill);
        if let Some(hit) = self.entries.get(&key) {
            trace!(key, "box geometry cache hit");
            return hit.clone();
        }
        let geometry = Arc::new(tessellate_box(rect, shape, widths, colors, fill));
        self.entries.put(key, geometry.clone());
        geometry
    }
}
