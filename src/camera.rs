use macroquad::prelude::*;

// 正交跟随相机：position 为缩放前的左上角，origin 为视口中心
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FollowCamera {
    pub position: Vec2,
    pub origin: Vec2,
    pub zoom: f32,
    pub min_zoom: f32,
    pub max_zoom: f32,
    pub zoom_rate: f32,
}

impl FollowCamera {
    pub fn new(viewport: Vec2, zoom: f32, min_zoom: f32, max_zoom: f32, zoom_rate: f32) -> Self {
        Self {
            position: Vec2::ZERO,
            origin: viewport * 0.5,
            zoom: zoom.clamp(min_zoom, max_zoom),
            min_zoom,
            max_zoom,
            zoom_rate,
        }
    }

    // 相机注视的世界坐标
    pub fn center(&self) -> Vec2 {
        self.position + self.origin
    }

    // 让相机中心对准指定点
    pub fn look_at(&mut self, point: Vec2) {
        self.position = point - self.origin;
    }

    pub fn zoom_in(&mut self, dt: f32) {
        self.set_zoom(self.zoom + dt * self.zoom_rate);
    }

    pub fn zoom_out(&mut self, dt: f32) {
        self.set_zoom(self.zoom - dt * self.zoom_rate);
    }

    fn set_zoom(&mut self, zoom: f32) {
        self.zoom = zoom.clamp(self.min_zoom, self.max_zoom);
    }

    // 窗口尺寸变化时更新原点，保持注视点不变
    pub fn set_viewport(&mut self, viewport: Vec2) {
        // 窗口最小化时尺寸为零，保留原视口
        if viewport.x <= 0.0 || viewport.y <= 0.0 {
            return;
        }
        let center = self.center();
        self.origin = viewport * 0.5;
        self.look_at(center);
    }

    // 当前缩放下可见的世界区域
    pub fn view_rect(&self) -> Rect {
        let size = self.origin * 2.0 / self.zoom;
        let center = self.center();
        Rect::new(center.x - size.x * 0.5, center.y - size.y * 0.5, size.x, size.y)
    }

    // 转换为 macroquad 的视图变换
    pub fn to_camera2d(&self) -> Camera2D {
        Camera2D::from_display_rect(self.view_rect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn camera() -> FollowCamera {
        FollowCamera::new(vec2(800.0, 480.0), 4.0, 1.0, 8.0, 1.0)
    }

    #[test]
    fn starts_centered_on_viewport() {
        let cam = camera();
        assert_eq!(cam.position, Vec2::ZERO);
        assert_eq!(cam.origin, vec2(400.0, 240.0));
        assert_eq!(cam.center(), vec2(400.0, 240.0));
    }

    #[test]
    fn look_at_moves_center() {
        let mut cam = camera();
        cam.look_at(vec2(10.0, 20.0));
        assert_eq!(cam.center(), vec2(10.0, 20.0));
        assert_eq!(cam.position, vec2(-390.0, -220.0));
    }

    #[test]
    fn zoom_is_clamped() {
        let mut cam = camera();
        cam.zoom_in(10.0);
        assert_eq!(cam.zoom, 8.0);
        cam.zoom_out(100.0);
        assert_eq!(cam.zoom, 1.0);
    }

    #[test]
    fn zoom_scales_with_rate() {
        let mut cam = FollowCamera::new(vec2(800.0, 480.0), 4.0, 1.0, 8.0, 2.0);
        cam.zoom_in(0.5);
        assert_eq!(cam.zoom, 5.0);
    }

    #[test]
    fn resize_keeps_center() {
        let mut cam = camera();
        cam.look_at(vec2(120.0, 200.0));
        cam.set_viewport(vec2(1024.0, 768.0));
        assert_eq!(cam.origin, vec2(512.0, 384.0));
        assert_eq!(cam.center(), vec2(120.0, 200.0));
    }

    #[test]
    fn view_rect_shrinks_with_zoom() {
        let mut cam = camera();
        cam.look_at(vec2(100.0, 100.0));
        assert_eq!(cam.view_rect(), Rect::new(0.0, 40.0, 200.0, 120.0));
        assert_eq!(cam.to_camera2d().target, vec2(100.0, 100.0));
    }
}
