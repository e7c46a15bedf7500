//! Asset loading
//!
//! Every image and font is loaded once at startup. A missing or unreadable
//! file is fatal: the game never starts with placeholders.
//!
//! Images become [`Sprite`]s: a texture plus the region of it to show and
//! the on-screen size to stretch that region to. Scaling and cropping only
//! change those two values, the texture itself is never touched.

use macroquad::prelude::{
    draw_text_ex, draw_texture_ex, load_texture, load_ttf_font, measure_text, vec2, Color,
    DrawTextureParams, FilterMode, Font, TextParams, Texture2D, Vec2, WHITE,
};
use macroquad::math::Rect as TexRect;
use thiserror::Error;

use crate::game::constants::{
    AVATAR_FRAME_COUNT, AVATAR_INTRO_SIZE, AVATAR_SIZE, BACKGROUND_CROP_TOP,
    BACKGROUND_SCALED_HEIGHT, ITEM_SIZE, SCREEN_WIDTH,
};

/// Point size for all text
pub const FONT_SIZE: u16 = 50;

#[derive(Debug, Error)]
pub enum AssetError {
    #[error("failed to load texture '{path}': {message}")]
    Texture { path: String, message: String },
    #[error("failed to load font '{path}': {message}")]
    Font { path: String, message: String },
}

/// File locations relative to the asset root
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetPaths {
    pub background: String,
    pub bird_frames: Vec<String>,
    /// Larger bird shown on the title screen
    pub bird_intro: String,
    pub food: String,
    pub font: String,
}

impl AssetPaths {
    pub fn new(root: &str) -> Self {
        let root = root.trim_end_matches('/');
        Self {
            background: format!("{}/Background/Background.png", root),
            bird_frames: (1..=AVATAR_FRAME_COUNT)
                .map(|i| format!("{}/Bird_Objects/Bird{}.png", root, i))
                .collect(),
            bird_intro: format!("{}/Bird_Objects/Bird2.png", root),
            food: format!("{}/Bird_Objects/Food_1.png", root),
            font: format!("{}/Font/Pixeltype.ttf", root),
        }
    }
}

/// A drawable region of a texture
#[derive(Clone)]
pub struct Sprite {
    texture: Texture2D,
    /// Region of the texture, in texel coordinates
    source: TexRect,
    /// On-screen size in pixels
    size: Vec2,
}

impl Sprite {
    /// Whole texture at its native size
    pub fn new(texture: Texture2D) -> Self {
        let (w, h) = (texture.width(), texture.height());
        Self {
            texture,
            source: TexRect::new(0.0, 0.0, w, h),
            size: vec2(w, h),
        }
    }

    /// Stretch to a target size in pixels
    pub fn scaled(mut self, w: f32, h: f32) -> Self {
        self.size = vec2(w, h);
        self
    }

    /// Keep only a sub-rectangle, given in current on-screen pixels
    pub fn cropped(mut self, x: f32, y: f32, w: f32, h: f32) -> Self {
        self.source = crop_source(self.source, self.size, TexRect::new(x, y, w, h));
        self.size = vec2(w, h);
        self
    }

    pub fn size(&self) -> Vec2 {
        self.size
    }

    /// Blit with the top-left corner at (x, y)
    pub fn draw(&self, x: f32, y: f32) {
        draw_texture_ex(
            &self.texture,
            x,
            y,
            WHITE,
            DrawTextureParams {
                dest_size: Some(self.size),
                source: Some(self.source),
                ..Default::default()
            },
        );
    }
}

/// Map a crop given in display pixels back into texel space
fn crop_source(source: TexRect, size: Vec2, crop: TexRect) -> TexRect {
    let sx = if size.x > 0.0 { source.w / size.x } else { 0.0 };
    let sy = if size.y > 0.0 { source.h / size.y } else { 0.0 };
    TexRect::new(
        source.x + crop.x * sx,
        source.y + crop.y * sy,
        crop.w * sx,
        crop.h * sy,
    )
}

/// Everything the renderer needs, loaded up front
pub struct Assets {
    pub background: Sprite,
    pub bird_frames: Vec<Sprite>,
    pub bird_intro: Sprite,
    pub food: Sprite,
    /// Pixel font, no smoothing
    font: Font,
    /// Same face with linear filtering, for antialiased labels
    smooth_font: Font,
}

impl Assets {
    pub async fn load(root: &str) -> Result<Self, AssetError> {
        let paths = AssetPaths::new(root);

        let background = Sprite::new(load_tex(&paths.background).await?)
            .scaled(SCREEN_WIDTH, BACKGROUND_SCALED_HEIGHT)
            .cropped(
                0.0,
                BACKGROUND_CROP_TOP,
                SCREEN_WIDTH,
                BACKGROUND_SCALED_HEIGHT - BACKGROUND_CROP_TOP,
            );

        let mut bird_frames = Vec::with_capacity(paths.bird_frames.len());
        for path in &paths.bird_frames {
            bird_frames.push(Sprite::new(load_tex(path).await?).scaled(AVATAR_SIZE, AVATAR_SIZE));
        }

        let bird_intro = Sprite::new(load_tex(&paths.bird_intro).await?)
            .scaled(AVATAR_INTRO_SIZE, AVATAR_INTRO_SIZE);
        let food = Sprite::new(load_tex(&paths.food).await?).scaled(ITEM_SIZE, ITEM_SIZE);

        let mut font = load_font(&paths.font).await?;
        font.set_filter(FilterMode::Nearest);
        let mut smooth_font = load_font(&paths.font).await?;
        smooth_font.set_filter(FilterMode::Linear);

        log::info!(
            "Loaded {} textures and font from {}",
            bird_frames.len() + 3,
            root
        );

        Ok(Self {
            background,
            bird_frames,
            bird_intro,
            food,
            font,
            smooth_font,
        })
    }

    fn font_for(&self, antialias: bool) -> &Font {
        if antialias {
            &self.smooth_font
        } else {
            &self.font
        }
    }

    /// Width of a line of text in pixels
    pub fn text_width(&self, text: &str, antialias: bool) -> f32 {
        measure_text(text, Some(self.font_for(antialias)), FONT_SIZE, 1.0).width
    }

    /// Draw text with its top-left corner at (x, y)
    pub fn draw_text(&self, text: &str, x: f32, y: f32, color: Color, antialias: bool) {
        let font = self.font_for(antialias);
        let dims = measure_text(text, Some(font), FONT_SIZE, 1.0);
        draw_text_ex(
            text,
            x,
            y + dims.offset_y,
            TextParams {
                font: Some(font),
                font_size: FONT_SIZE,
                color,
                ..Default::default()
            },
        );
    }
}

async fn load_tex(path: &str) -> Result<Texture2D, AssetError> {
    let tex = load_texture(path).await.map_err(|e| AssetError::Texture {
        path: path.to_string(),
        message: e.to_string(),
    })?;
    tex.set_filter(FilterMode::Nearest);
    Ok(tex)
}

async fn load_font(path: &str) -> Result<Font, AssetError> {
    load_ttf_font(path).await.map_err(|e| AssetError::Font {
        path: path.to_string(),
        message: e.to_string(),
    })
}
