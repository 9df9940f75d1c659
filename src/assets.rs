//! Sprite loading and atlas packing
//!
//! The five creature sprites are read from PNG files, scaled to their draw
//! sizes and packed left to right into a single RGBA atlas. A small opaque
//! white block after the last sprite gives flat shapes a texel to sample, so
//! every primitive goes through the same textured pipeline.

use std::path::{Path, PathBuf};

use image::imageops::{self, FilterType};
use image::{Rgba, RgbaImage};

/// Transparent gutter around each atlas region (texels)
const PADDING: u32 = 2;
/// Side of the white block used by untextured shapes
const WHITE_BLOCK: u32 = 4;

/// Error type for sprite loading.
#[derive(Debug, thiserror::Error)]
pub enum AssetError {
    #[error("failed to read sprite {}", path.display())]
    Load {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to decode sprite {}", path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
}

/// Sprites the game draws
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Sprite {
    Shark,
    Fish,
    Crab,
    Orca,
    Seagull,
}

impl Sprite {
    pub const ALL: [Sprite; 5] = [
        Sprite::Shark,
        Sprite::Fish,
        Sprite::Crab,
        Sprite::Orca,
        Sprite::Seagull,
    ];

    /// Draw size in viewport pixels (width, height)
    pub fn size(self) -> (u32, u32) {
        match self {
            Sprite::Shark => (120, 120),
            Sprite::Fish => (40, 40),
            Sprite::Crab => (40, 40),
            Sprite::Orca => (160, 100),
            Sprite::Seagull => (50, 40),
        }
    }

    pub fn file_name(self) -> &'static str {
        match self {
            Sprite::Shark => "shark.png",
            Sprite::Fish => "fish.png",
            Sprite::Crab => "crab.png",
            Sprite::Orca => "orca.png",
            Sprite::Seagull => "seagull.png",
        }
    }

    fn index(self) -> usize {
        self as usize
    }
}

/// Texel rectangle inside the atlas
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Region {
    pub x: u32,
    pub y: u32,
    pub w: u32,
    pub h: u32,
}

impl Region {
    fn overlaps(&self, other: &Region) -> bool {
        self.x < other.x + other.w
            && other.x < self.x + self.w
            && self.y < other.y + other.h
            && other.y < self.y + self.h
    }
}

/// Where each sprite lives in the atlas, and how to address it with UVs
#[derive(Debug, Clone, PartialEq)]
pub struct AtlasLayout {
    pub width: u32,
    pub height: u32,
    regions: [Region; 5],
    white: Region,
}

impl AtlasLayout {
    /// Pack the sprites' native sizes in a single row
    pub fn pack() -> Self {
        let mut x = PADDING;
        let mut tallest = WHITE_BLOCK;
        let regions = Sprite::ALL.map(|sprite| {
            let (w, h) = sprite.size();
            let region = Region {
                x,
                y: PADDING,
                w,
                h,
            };
            x += w + PADDING;
            tallest = tallest.max(h);
            region
        });
        let white = Region {
            x,
            y: PADDING,
            w: WHITE_BLOCK,
            h: WHITE_BLOCK,
        };

        Self {
            width: x + WHITE_BLOCK + PADDING,
            height: tallest + 2 * PADDING,
            regions,
            white,
        }
    }

    pub fn region(&self, sprite: Sprite) -> Region {
        self.regions[sprite.index()]
    }

    pub fn white_region(&self) -> Region {
        self.white
    }

    /// Normalized (min, max) texture coordinates of a sprite
    pub fn uv_rect(&self, sprite: Sprite) -> ([f32; 2], [f32; 2]) {
        let r = self.region(sprite);
        let (w, h) = (self.width as f32, self.height as f32);
        (
            [r.x as f32 / w, r.y as f32 / h],
            [(r.x + r.w) as f32 / w, (r.y + r.h) as f32 / h],
        )
    }

    /// Texture coordinate at the center of the white block
    pub fn white_uv(&self) -> [f32; 2] {
        let r = self.white;
        [
            (r.x as f32 + r.w as f32 / 2.0) / self.width as f32,
            (r.y as f32 + r.h as f32 / 2.0) / self.height as f32,
        ]
    }
}

/// Packed RGBA sprite atlas, ready for upload
pub struct SpriteAtlas {
    pub image: RgbaImage,
    pub layout: AtlasLayout,
}

impl SpriteAtlas {
    /// Load every sprite from `dir` and pack them
    pub fn load(dir: &Path) -> Result<Self, AssetError> {
        let mut images = Vec::with_capacity(Sprite::ALL.len());
        for sprite in Sprite::ALL {
            images.push(load_sprite(&dir.join(sprite.file_name()))?);
            log::debug!("Loaded sprite {:?}", sprite);
        }

        let atlas = Self::from_images(images);
        log::info!(
            "Sprite atlas {}x{} from {}",
            atlas.layout.width,
            atlas.layout.height,
            dir.display()
        );
        Ok(atlas)
    }

    /// Pack already decoded images, given in `Sprite::ALL` order. Each is
    /// scaled to its sprite's draw size if needed.
    pub fn from_images(images: Vec<RgbaImage>) -> Self {
        let layout = AtlasLayout::pack();
        let mut image = RgbaImage::new(layout.width, layout.height);

        for (sprite, src) in Sprite::ALL.into_iter().zip(images) {
            let (w, h) = sprite.size();
            let scaled = if src.dimensions() == (w, h) {
                src
            } else {
                imageops::resize(&src, w, h, FilterType::Triangle)
            };
            let r = layout.region(sprite);
            imageops::replace(&mut image, &scaled, r.x as i64, r.y as i64);
        }

        let white = layout.white_region();
        let block = RgbaImage::from_pixel(white.w, white.h, Rgba([255, 255, 255, 255]));
        imageops::replace(&mut image, &block, white.x as i64, white.y as i64);

        Self { image, layout }
    }
}

fn load_sprite(path: &Path) -> Result<RgbaImage, AssetError> {
    let bytes = std::fs::read(path).map_err(|source| AssetError::Load {
        path: path.to_path_buf(),
        source,
    })?;
    let decoded = image::load_from_memory(&bytes).map_err(|source| AssetError::Decode {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(decoded.to_rgba8())
}
