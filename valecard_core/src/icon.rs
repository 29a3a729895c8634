//! Icon descriptors and the height-tolerant icon cache.
//!
//! Descriptors are immutable and shared via `Arc`. When a caller asks for an
//! icon at a height that differs from the cached one by half a pixel or more,
//! the entry is replaced by a fresh descriptor rather than mutated, so tokens
//! built earlier keep their geometry.

use std::collections::HashMap;
use std::hash::Hash;
use std::sync::Arc;

use crate::card::Family;
use crate::codeword::Keyword;
use crate::surface::{IconKey, IconProvider, ImageHandle};

/// Smallest aspect ratio an icon may have. Keeps degenerate images from
/// producing zero-width tokens.
pub const MIN_ASPECT: f32 = 0.0001;

/// Height change (px) below which a cached descriptor is reused.
pub const HEIGHT_TOLERANCE: f32 = 0.5;

/// Default multiplier applied to gem denomination icons.
pub const DEFAULT_GEM_SCALE: f32 = 0.9;

/// An icon sized for one target height.
#[derive(Debug, Clone, PartialEq)]
pub struct IconDescriptor {
    /// `None` draws a placeholder box.
    pub image: Option<ImageHandle>,
    pub height: f32,
    /// Image width / height, 1.0 without an image.
    pub aspect: f32,
    /// `height * aspect`, at least one pixel.
    pub width: f32,
}

impl IconDescriptor {
    pub fn new(image: Option<ImageHandle>, height: f32) -> Self {
        let aspect = image
            .and_then(|img| img.aspect())
            .unwrap_or(1.0)
            .max(MIN_ASPECT);
        Self {
            image,
            height,
            aspect,
            width: (height * aspect).max(1.0),
        }
    }
}

/// An icon with a short value string drawn over it.
#[derive(Debug, Clone, PartialEq)]
pub struct ValuedIconDescriptor {
    pub icon: IconDescriptor,
    pub value: String,
}

impl ValuedIconDescriptor {
    pub fn new(image: Option<ImageHandle>, height: f32, value: impl Into<String>) -> Self {
        Self {
            icon: IconDescriptor::new(image, height),
            value: value.into(),
        }
    }
}

/// One keyed table with the tolerant-height reuse policy.
#[derive(Debug)]
struct HeightCache<K> {
    entries: HashMap<K, Arc<IconDescriptor>>,
}

impl<K: Copy + Eq + Hash + std::fmt::Debug> HeightCache<K> {
    fn new() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    fn resolve(
        &mut self,
        key: K,
        height: f32,
        load: impl FnOnce() -> Option<ImageHandle>,
    ) -> Arc<IconDescriptor> {
        if let Some(cached) = self.entries.get(&key) {
            if (cached.height - height).abs() < HEIGHT_TOLERANCE {
                log::trace!("icon cache: hit {key:?} at {height:.2}px");
                return Arc::clone(cached);
            }
            log::debug!(
                "icon cache: {key:?} height {:.2}px -> {height:.2}px, rebuilding",
                cached.height
            );
        }
        let icon = Arc::new(IconDescriptor::new(load(), height));
        self.entries.insert(key, Arc::clone(&icon));
        icon
    }

    fn len(&self) -> usize {
        self.entries.len()
    }
}

/// Family and keyword icon caches owned by a render context.
#[derive(Debug)]
pub struct IconCache {
    families: HeightCache<Family>,
    keywords: HeightCache<Keyword>,
    gem_scale: f32,
}

impl Default for IconCache {
    fn default() -> Self {
        Self::new()
    }
}

impl IconCache {
    pub fn new() -> Self {
        Self::with_gem_scale(DEFAULT_GEM_SCALE)
    }

    /// Create a cache that shrinks gem denomination icons by `gem_scale`.
    pub fn with_gem_scale(gem_scale: f32) -> Self {
        Self {
            families: HeightCache::new(),
            keywords: HeightCache::new(),
            gem_scale,
        }
    }

    pub fn gem_scale(&self) -> f32 {
        self.gem_scale
    }

    /// Change the gem multiplier. Cached gem entries rebuild lazily once the
    /// scaled height drifts past the tolerance.
    pub fn set_gem_scale(&mut self, gem_scale: f32) {
        self.gem_scale = gem_scale;
    }

    /// Family icon at `height` pixels.
    pub fn family_icon(
        &mut self,
        family: Family,
        height: f32,
        provider: &dyn IconProvider,
    ) -> Arc<IconDescriptor> {
        self.families
            .resolve(family, height, || provider.icon_image(IconKey::Family(family)))
    }

    /// Keyword icon at `height` pixels, shrunk for gem denominations.
    pub fn keyword_icon(
        &mut self,
        keyword: Keyword,
        height: f32,
        provider: &dyn IconProvider,
    ) -> Arc<IconDescriptor> {
        let height = if keyword.is_denomination() {
            height * self.gem_scale
        } else {
            height
        };
        self.keywords
            .resolve(keyword, height, || provider.icon_image(IconKey::Keyword(keyword)))
    }

    /// Number of cached entries across both tables.
    pub fn len(&self) -> usize {
        self.families.len() + self.keywords.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
