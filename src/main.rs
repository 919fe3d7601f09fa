mod actors;
mod animation;
mod app;
mod assets;
mod camera;
mod config;
mod input;
mod render;
mod systems;
mod timing;
mod world;

use crate::config::window_conf;

#[macroquad::main(window_conf)]
// 程序入口：初始化日志与窗口配置并启动游戏主循环
async fn main() {
    env_logger::init();
    log::info!("Elthen Blade starting up");

    if let Err(e) = app::run().await {
        log::error!("fatal error: {e:#}");
        std::process::exit(1);
    }
}
