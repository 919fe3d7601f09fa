use macroquad::prelude::*;

use crate::actors::player::Player;
use crate::assets::Assets;
use crate::world::World;

// 绘制一帧：清屏、背景、玩家（按调用顺序决定层级）
pub fn draw_world(assets: &Assets, world: &World, clear: Color) {
    clear_background(clear);

    set_camera(&world.camera.to_camera2d());
    draw_background(&assets.background);
    draw_player(assets, &world.player);
    set_default_camera();
}

// 背景贴在世界原点
fn draw_background(texture: &Texture2D) {
    draw_texture(texture, 0.0, 0.0, WHITE);
}

// 绘制玩家当前动画帧，向左移动时水平翻转
fn draw_player(assets: &Assets, player: &Player) {
    let source = player.anim.source_rect(&assets.sheet);
    let pos = player.draw_pos();
    draw_texture_ex(
        &assets.sheet_texture,
        pos.x,
        pos.y,
        WHITE,
        DrawTextureParams {
            source: Some(source),
            dest_size: Some(vec2(source.w, source.h)),
            flip_x: player.anim.flipped,
            ..Default::default()
        },
    );
}
