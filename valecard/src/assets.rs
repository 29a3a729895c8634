//! Decoded artwork for one card.
//!
//! Every image is registered under an opaque [`ImageHandle`] id; the canvas
//! resolves ids back to pixels. A missing or undecodable file is logged and
//! left out, and the compositor draws a placeholder in its place.

use std::collections::HashMap;
use std::path::Path;

use image::RgbaImage;

use valecard_core::{Family, IconKey, IconProvider, ImageHandle, Keyword};

use crate::card::CardDoc;

const KEYWORDS: [Keyword; 6] = [
    Keyword::Immediate,
    Keyword::Continuous,
    Keyword::Periodic,
    Keyword::OneGem,
    Keyword::ThreeGem,
    Keyword::SixGem,
];

/// Asset file name for an icon key.
pub fn icon_file(key: IconKey) -> String {
    match key {
        IconKey::Family(f) => format!("icon_{}.png", f.asset_name()),
        IconKey::Keyword(k) => format!("icon_{}.png", k.asset_name()),
        IconKey::Willpower => String::from("icon_wp.png"),
    }
}

#[derive(Debug, Default)]
pub struct AssetStore {
    images: Vec<RgbaImage>,
    icons: HashMap<IconKey, ImageHandle>,
    pub background: Option<ImageHandle>,
    pub fade: Option<ImageHandle>,
    pub frame: Option<ImageHandle>,
    pub cost: Option<ImageHandle>,
    pub creature: Option<ImageHandle>,
}

impl AssetStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load everything `card` can draw from `dir`.
    pub fn load(dir: &Path, card: &CardDoc) -> Self {
        let mut store = Self::new();
        for family in Family::ALL {
            store.load_icon(dir, IconKey::Family(family));
        }
        for keyword in KEYWORDS {
            store.load_icon(dir, IconKey::Keyword(keyword));
        }
        store.load_icon(dir, IconKey::Willpower);

        store.background = store.load_file(&dir.join(format!("bg_{}.png", card.family.asset_name())));
        store.fade = store.load_file(&dir.join("vertical_fade.png"));
        store.frame = store.load_file(&dir.join("edge_frame.png"));
        store.cost = store.load_file(&dir.join("costImages").join(card.cost_image_name()));
        store.creature = card.creature.as_deref().and_then(|p| store.load_file(p));

        if store.is_empty() {
            log::warn!("assets: nothing loaded from {}", dir.display());
        } else {
            log::info!("assets: {} image(s) loaded from {}", store.len(), dir.display());
        }
        store
    }

    fn load_icon(&mut self, dir: &Path, key: IconKey) {
        if let Some(handle) = self.load_file(&dir.join(icon_file(key))) {
            self.icons.insert(key, handle);
        }
    }

    fn load_file(&mut self, path: &Path) -> Option<ImageHandle> {
        match image::open(path) {
            Ok(img) => Some(self.insert(img.into_rgba8())),
            Err(e) => {
                log::warn!("assets: {}: {e}", path.display());
                None
            }
        }
    }

    /// Register decoded pixels and return their handle.
    pub fn insert(&mut self, image: RgbaImage) -> ImageHandle {
        let handle = ImageHandle {
            id: self.images.len() as u32,
            width: image.width(),
            height: image.height(),
        };
        self.images.push(image);
        handle
    }

    #[cfg(test)]
    /// Register `image` as the icon for `key`, replacing any previous one.
    pub fn insert_icon(&mut self, key: IconKey, image: RgbaImage) -> ImageHandle {
        let handle = self.insert(image);
        self.icons.insert(key, handle);
        handle
    }

    pub fn pixels(&self, handle: ImageHandle) -> Option<&RgbaImage> {
        self.images.get(handle.id as usize)
    }

    pub fn len(&self) -> usize {
        self.images.len()
    }

    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }
}

impl IconProvider for AssetStore {
    fn icon_image(&self, key: IconKey) -> Option<ImageHandle> {
        self.icons.get(&key).copied()
    }
}
