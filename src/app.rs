use anyhow::Result;
use macroquad::prelude::*;

use crate::assets::Assets;
use crate::config::{GameConfig, CONFIG_PATH};
use crate::input::InputSnapshot;
use crate::render::draw_world;
use crate::systems::{update, Flow};
use crate::timing::FixedStep;
use crate::world::World;

// 游戏主循环：采样输入 -> 固定步长更新 -> 绘制
pub async fn run() -> Result<()> {
    let config = GameConfig::load_or_default(CONFIG_PATH);
    let assets = Assets::load(&config).await?;

    let mut world = World::new(&config, &assets.sheet, viewport());
    let mut clock = FixedStep::new(config.step_seconds(), config.max_catch_up_steps);
    let clear = config.clear_color();

    log::info!(
        "player spawned at ({}, {}), fixed step {:.4}s",
        world.player.pos.x,
        world.player.pos.y,
        clock.step()
    );

    'frames: loop {
        // 输入每帧采样一次，供本帧所有更新步使用
        let input = InputSnapshot::sample();
        world.camera.set_viewport(viewport());

        for _ in 0..clock.advance(get_frame_time()) {
            if update(&mut world, &input, &assets.sheet, clock.step()) == Flow::Quit {
                break 'frames;
            }
        }

        draw_world(&assets, &world, clear);
        next_frame().await;
    }

    log::info!("quit requested, exiting");
    Ok(())
}

fn viewport() -> Vec2 {
    vec2(screen_width(), screen_height())
}
