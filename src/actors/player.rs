use macroquad::prelude::*;

use crate::animation::{AnimationState, Clip};

// 玩家实体：位置、移动速度与动画状态
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Player {
    pub pos: Vec2,
    pub speed: f32,
    pub anim: AnimationState,
    origin: Vec2,
}

impl Player {
    // 创建玩家，初始播放待机动画
    pub fn new(spawn: Vec2, speed: f32, origin: Vec2) -> Self {
        Self {
            pos: spawn,
            speed,
            anim: AnimationState::new(Clip::Idle),
            origin,
        }
    }

    // 绘制偏移：精灵原点
    pub fn offset(&self) -> Vec2 {
        self.origin
    }

    // 精灵左上角的绘制位置
    pub fn draw_pos(&self) -> Vec2 {
        self.pos - self.offset()
    }
}
