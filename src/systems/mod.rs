use macroquad::prelude::*;

use crate::animation::{Clip, SpriteSheet};
use crate::config::CAMERA_SMOOTHING;
use crate::input::InputSnapshot;
use crate::world::World;

// 单次更新后主循环的去向
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Flow {
    Continue,
    Quit,
}

// 单次固定步长更新：输入 -> 移动 -> 动画 -> 相机
pub fn update(world: &mut World, input: &InputSnapshot, sheet: &SpriteSheet, dt: f32) -> Flow {
    if input.quit {
        return Flow::Quit;
    }

    handle_movement(world, input, dt);
    handle_animation(world, input, sheet, dt);
    handle_camera(world, input, dt);

    Flow::Continue
}

// 处理玩家移动输入（斜向不归一化）
fn handle_movement(world: &mut World, input: &InputSnapshot, dt: f32) {
    let player = &mut world.player;
    player.pos += input.direction() * player.speed * dt;
}

// 选择动画片段与朝向，并推进播放时间
fn handle_animation(world: &mut World, input: &InputSnapshot, sheet: &SpriteSheet, dt: f32) {
    let anim = &mut world.player.anim;

    // 只在按下水平方向键时写入朝向，松开后保持
    if input.left {
        anim.flipped = true;
    }
    if input.right {
        anim.flipped = false;
    }

    anim.play(Clip::for_input(input.horizontal_held()));
    anim.advance(dt, sheet.clip(anim.clip));
}

// 缩放与平滑跟随
fn handle_camera(world: &mut World, input: &InputSnapshot, dt: f32) {
    let camera = &mut world.camera;
    if input.zoom_in {
        camera.zoom_in(dt);
    }
    if input.zoom_out {
        camera.zoom_out(dt);
    }

    let target = camera.center().lerp(world.player.pos, CAMERA_SMOOTHING);
    camera.look_at(target);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;
    use crate::input::Action;

    const DT: f32 = 0.5;

    fn setup() -> (World, SpriteSheet) {
        let sheet = SpriteSheet::default();
        let world = World::new(&GameConfig::default(), &sheet, vec2(800.0, 480.0));
        (world, sheet)
    }

    fn held(actions: &[Action]) -> InputSnapshot {
        actions
            .iter()
            .fold(InputSnapshot::default(), |snapshot, &a| snapshot.with(a))
    }

    #[test]
    fn no_input_keeps_position() {
        let (mut world, sheet) = setup();
        for dt in [0.0, 1.0 / 60.0, 0.5, 3.0] {
            let before = world.player.pos;
            assert_eq!(update(&mut world, &InputSnapshot::default(), &sheet, dt), Flow::Continue);
            assert_eq!(world.player.pos, before);
        }
    }

    #[test]
    fn right_moves_by_speed_times_dt() {
        let (mut world, sheet) = setup();
        let before = world.player.pos;
        update(&mut world, &held(&[Action::MoveRight]), &sheet, DT);
        assert_eq!(world.player.pos - before, vec2(90.0 * DT, 0.0));
        assert!(!world.player.anim.flipped);
    }

    #[test]
    fn left_moves_by_negative_speed_times_dt() {
        let (mut world, sheet) = setup();
        let before = world.player.pos;
        update(&mut world, &held(&[Action::MoveLeft]), &sheet, DT);
        assert_eq!(world.player.pos - before, vec2(-90.0 * DT, 0.0));
        assert!(world.player.anim.flipped);
    }

    #[test]
    fn diagonal_is_not_normalized() {
        let (mut world, sheet) = setup();
        let before = world.player.pos;
        update(&mut world, &held(&[Action::MoveRight, Action::MoveDown]), &sheet, DT);
        let delta = world.player.pos - before;
        assert_eq!(delta, vec2(90.0 * DT, 90.0 * DT));
        assert!((delta.length() - 90.0 * DT * 2f32.sqrt()).abs() < 1e-3);
    }

    #[test]
    fn up_moves_toward_negative_y() {
        let (mut world, sheet) = setup();
        let before = world.player.pos;
        update(&mut world, &held(&[Action::MoveUp]), &sheet, DT);
        assert_eq!(world.player.pos - before, vec2(0.0, -90.0 * DT));
    }

    #[test]
    fn flip_is_sticky_after_release() {
        let (mut world, sheet) = setup();
        update(&mut world, &held(&[Action::MoveLeft]), &sheet, DT);
        update(&mut world, &InputSnapshot::default(), &sheet, DT);
        assert!(world.player.anim.flipped);
        update(&mut world, &held(&[Action::MoveUp]), &sheet, DT);
        assert!(world.player.anim.flipped);
    }

    #[test]
    fn both_horizontal_keys_face_right() {
        let (mut world, sheet) = setup();
        world.player.anim.flipped = true;
        update(&mut world, &held(&[Action::MoveLeft, Action::MoveRight]), &sheet, DT);
        assert!(!world.player.anim.flipped);
        assert_eq!(world.player.anim.clip, Clip::Walk);
    }

    #[test]
    fn clip_follows_horizontal_input() {
        let (mut world, sheet) = setup();
        update(&mut world, &held(&[Action::MoveRight]), &sheet, 0.05);
        assert_eq!(world.player.anim.clip, Clip::Walk);
        assert!((world.player.anim.elapsed - 0.05).abs() < 1e-6);

        // 纵向移动不触发行走动画
        update(&mut world, &held(&[Action::MoveDown]), &sheet, 0.05);
        assert_eq!(world.player.anim.clip, Clip::Idle);
        assert!((world.player.anim.elapsed - 0.05).abs() < 1e-6);
    }

    #[test]
    fn clip_time_wraps_while_held() {
        let (mut world, sheet) = setup();
        let walk = held(&[Action::MoveRight]);
        update(&mut world, &walk, &sheet, 0.5);
        update(&mut world, &walk, &sheet, 0.25);
        // 行走片段时长 0.6 秒
        assert!((world.player.anim.elapsed - 0.15).abs() < 1e-5);
    }

    #[test]
    fn camera_lerps_toward_player() {
        let (mut world, sheet) = setup();
        world.camera.look_at(vec2(10.0, -30.0));
        let previous = world.camera.center();
        update(&mut world, &held(&[Action::MoveRight]), &sheet, DT);
        let expected = previous.lerp(world.player.pos, 0.05);
        assert!((world.camera.center() - expected).length() < 1e-4);
    }

    #[test]
    fn zoom_in_is_monotonic_and_capped() {
        let (mut world, sheet) = setup();
        let input = held(&[Action::ZoomIn]);
        let mut last = world.camera.zoom;
        for _ in 0..600 {
            update(&mut world, &input, &sheet, 1.0 / 60.0);
            assert!(world.camera.zoom >= last);
            assert!(world.camera.zoom <= world.camera.max_zoom);
            last = world.camera.zoom;
        }
        assert_eq!(world.camera.zoom, world.camera.max_zoom);
    }

    #[test]
    fn zoom_out_is_monotonic_and_floored() {
        let (mut world, sheet) = setup();
        let input = held(&[Action::ZoomOut]);
        let mut last = world.camera.zoom;
        for _ in 0..600 {
            update(&mut world, &input, &sheet, 1.0 / 60.0);
            assert!(world.camera.zoom <= last);
            assert!(world.camera.zoom >= world.camera.min_zoom);
            last = world.camera.zoom;
        }
        assert_eq!(world.camera.zoom, world.camera.min_zoom);
    }

    #[test]
    fn quit_wins_over_other_keys() {
        let (mut world, sheet) = setup();
        let before = world.clone();
        let input = held(&[Action::Quit, Action::MoveRight, Action::ZoomIn]);
        assert_eq!(update(&mut world, &input, &sheet, DT), Flow::Quit);
        assert_eq!(world, before);
    }
}
