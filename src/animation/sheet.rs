use std::fs;

use macroquad::prelude::*;
use serde::{Deserialize, Serialize};

use crate::animation::Clip;

// 单个动画片段：帧序号、每帧时长与是否循环
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ClipDef {
    pub frames: Vec<usize>,
    pub frame_duration: f32,
    #[serde(default = "default_looping")]
    pub looping: bool,
}

fn default_looping() -> bool {
    true
}

impl ClipDef {
    // 片段总时长
    pub fn duration(&self) -> f32 {
        self.frames.len() as f32 * self.frame_duration
    }
}

// 每个片段对应一个字段，查找是穷尽匹配
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Clips {
    pub idle: ClipDef,
    pub walk: ClipDef,
}

// 精灵表描述（数据驱动）
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SpriteSheet {
    pub texture: String,
    pub frame_width: f32,
    pub frame_height: f32,
    pub columns: usize,
    pub clips: Clips,
}

impl Default for SpriteSheet {
    // 默认精灵表：7 列，首行待机 4 帧，次行行走 6 帧
    fn default() -> Self {
        Self {
            texture: "assets/adventurer.png".to_string(),
            frame_width: 50.0,
            frame_height: 37.0,
            columns: 7,
            clips: Clips {
                idle: ClipDef {
                    frames: vec![0, 1, 2, 3],
                    frame_duration: 0.15,
                    looping: true,
                },
                walk: ClipDef {
                    frames: vec![7, 8, 9, 10, 11, 12],
                    frame_duration: 0.1,
                    looping: true,
                },
            },
        }
    }
}

impl SpriteSheet {
    // 从JSON文件加载精灵表描述
    pub fn load_from_file(path: &str) -> Result<Self, String> {
        let text = fs::read_to_string(path).map_err(|e| e.to_string())?;
        let sheet: SpriteSheet = serde_json::from_str(&text).map_err(|e| e.to_string())?;
        if sheet.columns == 0 || sheet.frame_width <= 0.0 || sheet.frame_height <= 0.0 {
            return Err(format!("{path}: frame grid must be non-empty"));
        }
        Ok(sheet)
    }

    pub fn clip(&self, clip: Clip) -> &ClipDef {
        match clip {
            Clip::Idle => &self.clips.idle,
            Clip::Walk => &self.clips.walk,
        }
    }

    // 按网格计算帧的纹理区域
    pub fn frame_rect(&self, frame: usize) -> Rect {
        let columns = self.columns.max(1);
        let col = (frame % columns) as f32;
        let row = (frame / columns) as f32;
        Rect::new(
            col * self.frame_width,
            row * self.frame_height,
            self.frame_width,
            self.frame_height,
        )
    }

    // 精灵原点（帧中心），同时作为绘制偏移
    pub fn origin(&self) -> Vec2 {
        vec2(self.frame_width * 0.5, self.frame_height * 0.5)
    }
}
