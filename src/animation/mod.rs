use macroquad::prelude::*;

pub mod sheet;

pub use sheet::{ClipDef, SpriteSheet};

// 动画片段：由输入状态决定，不再通过字符串查找
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum Clip {
    Idle,
    Walk,
}

impl Clip {
    // 根据水平输入选择片段
    pub fn for_input(horizontal_held: bool) -> Self {
        if horizontal_held {
            Clip::Walk
        } else {
            Clip::Idle
        }
    }
}

// 精灵动画状态：当前片段、水平翻转与片段内已播放时间
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AnimationState {
    pub clip: Clip,
    pub flipped: bool,
    pub elapsed: f32,
}

impl Default for AnimationState {
    fn default() -> Self {
        Self::new(Clip::Idle)
    }
}

impl AnimationState {
    pub fn new(clip: Clip) -> Self {
        Self {
            clip,
            flipped: false,
            elapsed: 0.0,
        }
    }

    // 切换片段；只有片段真正改变时才重置播放时间，返回是否切换
    pub fn play(&mut self, clip: Clip) -> bool {
        if self.clip == clip {
            return false;
        }
        log::debug!("clip {:?} -> {:?}", self.clip, clip);
        self.clip = clip;
        self.elapsed = 0.0;
        true
    }

    // 推进播放时间，循环片段按时长取模，非循环片段停在末尾
    pub fn advance(&mut self, dt: f32, def: &ClipDef) {
        let duration = def.duration();
        if duration <= 0.0 {
            self.elapsed = 0.0;
            return;
        }
        let t = self.elapsed + dt.max(0.0);
        self.elapsed = if def.looping {
            t.rem_euclid(duration)
        } else {
            t.min(duration)
        };
    }

    // 当前片段内的帧序号（相对片段）
    pub fn frame_in_clip(&self, def: &ClipDef) -> usize {
        if def.frames.is_empty() || def.frame_duration <= 0.0 {
            return 0;
        }
        let idx = (self.elapsed / def.frame_duration) as usize;
        idx.min(def.frames.len() - 1)
    }

    // 当前帧在精灵表中的纹理区域
    pub fn source_rect(&self, sheet: &SpriteSheet) -> Rect {
        let def = sheet.clip(self.clip);
        let frame = def
            .frames
            .get(self.frame_in_clip(def))
            .copied()
            .unwrap_or(0);
        sheet.frame_rect(frame)
    }
}
