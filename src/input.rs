use macroquad::prelude::*;

// 输入动作
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Action {
    Quit,
    MoveLeft,
    MoveRight,
    MoveUp,
    MoveDown,
    ZoomIn,
    ZoomOut,
}

// 按键绑定：任一按键按下即视为动作触发
pub const BINDINGS: [(Action, &[KeyCode]); 7] = [
    (Action::Quit, &[KeyCode::Escape]),
    (Action::MoveLeft, &[KeyCode::Left, KeyCode::A]),
    (Action::MoveRight, &[KeyCode::Right, KeyCode::D]),
    (Action::MoveUp, &[KeyCode::Up, KeyCode::W]),
    (Action::MoveDown, &[KeyCode::Down, KeyCode::S]),
    (Action::ZoomIn, &[KeyCode::R]),
    (Action::ZoomOut, &[KeyCode::F]),
];

// 单帧输入快照
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct InputSnapshot {
    pub quit: bool,
    pub left: bool,
    pub right: bool,
    pub up: bool,
    pub down: bool,
    pub zoom_in: bool,
    pub zoom_out: bool,
}

impl InputSnapshot {
    // 从键盘采样（每帧一次）
    pub fn sample() -> Self {
        Self::from_keys(is_key_down)
    }

    // 根据任意按键查询函数构建快照
    pub fn from_keys(key_down: impl Fn(KeyCode) -> bool) -> Self {
        let mut snapshot = Self::default();
        for (action, keys) in BINDINGS {
            if keys.iter().any(|&k| key_down(k)) {
                snapshot.set(action, true);
            }
        }
        snapshot
    }

    #[cfg(test)]
    pub fn with(mut self, action: Action) -> Self {
        self.set(action, true);
        self
    }

    pub fn set(&mut self, action: Action, down: bool) {
        let slot = match action {
            Action::Quit => &mut self.quit,
            Action::MoveLeft => &mut self.left,
            Action::MoveRight => &mut self.right,
            Action::MoveUp => &mut self.up,
            Action::MoveDown => &mut self.down,
            Action::ZoomIn => &mut self.zoom_in,
            Action::ZoomOut => &mut self.zoom_out,
        };
        *slot = down;
    }

    pub fn horizontal_held(&self) -> bool {
        self.left || self.right
    }

    // 原始方向向量，不做归一化（斜向速度为 speed * sqrt(2)）
    pub fn direction(&self) -> Vec2 {
        let mut dir = vec2(0.0, 0.0);
        if self.left {
            dir.x -= 1.0;
        }
        if self.right {
            dir.x += 1.0;
        }
        if self.up {
            dir.y -= 1.0;
        }
        if self.down {
            dir.y += 1.0;
        }
        dir
    }
}
