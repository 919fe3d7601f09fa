use std::path::Path;

use anyhow::{anyhow, Context, Result};
use macroquad::prelude::*;

use crate::animation::SpriteSheet;
use crate::config::GameConfig;

// 启动时一次性加载的资源
pub struct Assets {
    pub background: Texture2D,
    pub sheet_texture: Texture2D,
    pub sheet: SpriteSheet,
}

impl Assets {
    // 加载背景与精灵表；纹理缺失视为致命错误
    pub async fn load(config: &GameConfig) -> Result<Self> {
        let sheet = load_sprite_sheet(&config.sprite_sheet)?;
        let background = load_pixel_texture(&config.background).await?;
        let sheet_texture = load_pixel_texture(&sheet.texture).await?;
        log::info!(
            "assets loaded: background {}x{}, sprite sheet {}x{}",
            background.width(),
            background.height(),
            sheet_texture.width(),
            sheet_texture.height()
        );
        Ok(Self {
            background,
            sheet_texture,
            sheet,
        })
    }
}

// 精灵表描述缺失时使用内置默认值
fn load_sprite_sheet(path: &str) -> Result<SpriteSheet> {
    if !Path::new(path).exists() {
        log::warn!("{path} not found, using built-in sprite sheet layout");
        return Ok(SpriteSheet::default());
    }
    SpriteSheet::load_from_file(path)
        .map_err(|e| anyhow!(e))
        .with_context(|| format!("failed to parse sprite sheet {path}"))
}

// 加载纹理并设置最近邻采样，保持像素风
async fn load_pixel_texture(path: &str) -> Result<Texture2D> {
    let texture = load_texture(path)
        .await
        .map_err(|e| anyhow!("{e:?}"))
        .with_context(|| {
            format!("failed to load texture {path} (run `cargo run --bin sheet_gen` to generate it)")
        })?;
    texture.set_filter(FilterMode::Nearest);
    Ok(texture)
}
