use macroquad::prelude::*;

use crate::actors::player::Player;
use crate::animation::SpriteSheet;
use crate::camera::FollowCamera;
use crate::config::GameConfig;

// 世界状态：玩家与相机，启动时构建一次，每帧由更新函数独占修改
#[derive(Clone, Debug, PartialEq)]
pub struct World {
    pub player: Player,
    pub camera: FollowCamera,
}

impl World {
    pub fn new(config: &GameConfig, sheet: &SpriteSheet, viewport: Vec2) -> Self {
        let player = Player::new(config.spawn.to_vec2(), config.speed, sheet.origin());
        let camera = FollowCamera::new(
            viewport,
            config.initial_zoom,
            config.min_zoom,
            config.max_zoom,
            config.zoom_rate,
        );
        Self { player, camera }
    }
}
