use std::fs;

use macroquad::miniquad::conf::Platform;
use macroquad::prelude::*;
use serde::{Deserialize, Serialize};

pub const SCREEN_W: f32 = 800.0;
pub const SCREEN_H: f32 = 480.0;

pub const CONFIG_PATH: &str = "data/game.json";

// 相机跟随的插值系数：每次更新向玩家靠近 5%
pub const CAMERA_SMOOTHING: f32 = 0.05;

// 配置窗口标题、尺寸与可变大小选项，关闭垂直同步
pub fn window_conf() -> Conf {
    let resizable = cfg!(any(target_os = "windows", target_os = "macos", target_os = "linux"));
    Conf {
        window_title: "Elthen Blade".to_string(),
        window_width: SCREEN_W as i32,
        window_height: SCREEN_H as i32,
        high_dpi: true,
        window_resizable: resizable,
        platform: Platform {
            swap_interval: Some(0),
            ..Default::default()
        },
        ..Default::default()
    }
}

// 序列化用的二维坐标
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Vec2Def {
    pub x: f32,
    pub y: f32,
}

impl Vec2Def {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    // 转换为 macroquad::Vec2
    pub fn to_vec2(self) -> Vec2 {
        vec2(self.x, self.y)
    }
}

// 游戏参数（数据驱动，缺省字段使用默认值）
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub spawn: Vec2Def,
    pub speed: f32,
    pub initial_zoom: f32,
    pub min_zoom: f32,
    pub max_zoom: f32,
    pub zoom_rate: f32,
    pub update_hz: f32,
    pub max_catch_up_steps: u32,
    pub background: String,
    pub sprite_sheet: String,
    pub clear_color: [u8; 3],
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            spawn: Vec2Def::new(120.0, 200.0),
            speed: 90.0,
            initial_zoom: 4.0,
            min_zoom: 1.0,
            max_zoom: 8.0,
            zoom_rate: 1.0,
            update_hz: 60.0,
            max_catch_up_steps: 5,
            background: "assets/background.png".to_string(),
            sprite_sheet: "data/adventurer.json".to_string(),
            clear_color: [100, 149, 237],
        }
    }
}

impl GameConfig {
    // 从JSON文件加载配置
    pub fn load_from_file(path: &str) -> Result<Self, String> {
        let text = fs::read_to_string(path).map_err(|e| e.to_string())?;
        Self::from_json(&text)
    }

    pub fn from_json(text: &str) -> Result<Self, String> {
        let config: GameConfig = serde_json::from_str(text).map_err(|e| e.to_string())?;
        Ok(config.sanitized())
    }

    // 加载失败时回退到默认配置
    pub fn load_or_default(path: &str) -> Self {
        match Self::load_from_file(path) {
            Ok(config) => {
                log::info!("loaded game config from {path}");
                config
            }
            Err(e) => {
                log::warn!("using default game config ({path}: {e})");
                Self::default()
            }
        }
    }

    // 修正非法数值，保证后续逻辑无需再做检查
    pub fn sanitized(mut self) -> Self {
        let defaults = Self::default();
        if !self.speed.is_finite() || self.speed < 0.0 {
            log::warn!("speed {} is invalid, using {}", self.speed, defaults.speed);
            self.speed = defaults.speed;
        }
        if !is_positive(self.min_zoom) {
            log::warn!("min_zoom {} is invalid, using {}", self.min_zoom, defaults.min_zoom);
            self.min_zoom = defaults.min_zoom;
        }
        if !is_positive(self.max_zoom) {
            log::warn!("max_zoom {} is invalid, using {}", self.max_zoom, defaults.max_zoom);
            self.max_zoom = defaults.max_zoom;
        }
        if self.min_zoom > self.max_zoom {
            log::warn!("min_zoom {} > max_zoom {}, swapping", self.min_zoom, self.max_zoom);
            std::mem::swap(&mut self.min_zoom, &mut self.max_zoom);
        }
        if !self.initial_zoom.is_finite() {
            self.initial_zoom = defaults.initial_zoom;
        }
        self.initial_zoom = self.initial_zoom.clamp(self.min_zoom, self.max_zoom);
        if !self.zoom_rate.is_finite() || self.zoom_rate < 0.0 {
            self.zoom_rate = defaults.zoom_rate;
        }
        if !is_positive(self.update_hz) {
            log::warn!("update_hz {} is invalid, using {}", self.update_hz, defaults.update_hz);
            self.update_hz = defaults.update_hz;
        }
        self.max_catch_up_steps = self.max_catch_up_steps.max(1);
        self
    }

    // 固定步长（秒）
    pub fn step_seconds(&self) -> f32 {
        1.0 / self.update_hz
    }

    pub fn clear_color(&self) -> Color {
        let [r, g, b] = self.clear_color;
        Color::from_rgba(r, g, b, 255)
    }
}

fn is_positive(v: f32) -> bool {
    v.is_finite() && v > 0.0
}
