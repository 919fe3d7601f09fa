use image::{ImageBuffer, Rgba, RgbaImage};
use std::f32::consts::TAU;
use std::fs;

// 与 data/adventurer.json 的网格保持一致
const FRAME_W: u32 = 50;
const FRAME_H: u32 = 37;
const COLUMNS: u32 = 7;
const ROWS: u32 = 2;
const IDLE_FRAMES: u32 = 4;
const WALK_FRAMES: u32 = 6;

const BG_W: u32 = 480;
const BG_H: u32 = 320;
const TILE: u32 = 16;

#[derive(Clone, Copy)]
struct Color {
    r: u8,
    g: u8,
    b: u8,
    a: u8,
}

impl Color {
    const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    fn shade(self, amount: i16) -> Self {
        let f = |c: u8| (c as i16 + amount).clamp(0, 255) as u8;
        Self::rgba(f(self.r), f(self.g), f(self.b), self.a)
    }
}

fn set_px(img: &mut RgbaImage, x: i32, y: i32, color: Color) {
    if x < 0 || y < 0 {
        return;
    }
    let (w, h) = img.dimensions();
    if x as u32 >= w || y as u32 >= h {
        return;
    }
    img.put_pixel(x as u32, y as u32, Rgba([color.r, color.g, color.b, color.a]));
}

fn fill_rect(img: &mut RgbaImage, x: i32, y: i32, w: i32, h: i32, color: Color) {
    for py in y..y + h {
        for px in x..x + w {
            set_px(img, px, py, color);
        }
    }
}

fn fill_circle(img: &mut RgbaImage, cx: i32, cy: i32, r: i32, color: Color) {
    for y in (cy - r)..=(cy + r) {
        for x in (cx - r)..=(cx + r) {
            let dx = x - cx;
            let dy = y - cy;
            if dx * dx + dy * dy <= r * r {
                set_px(img, x, y, color);
            }
        }
    }
}

fn rand_u32(seed: u32) -> u32 {
    let mut x = seed ^ 0x9e37_79b9;
    x ^= x << 13;
    x ^= x >> 17;
    x ^= x << 5;
    x
}

fn rand_f32(seed: u32) -> f32 {
    (rand_u32(seed) as f32) / (u32::MAX as f32)
}

// 绘制单帧冒险者：bob 为身体上下起伏，stride 为迈步幅度
fn draw_adventurer(img: &mut RgbaImage, ox: i32, oy: i32, bob: i32, stride: i32) {
    let skin = Color::rgba(238, 196, 150, 255);
    let hair = Color::rgba(92, 52, 30, 255);
    let tunic = Color::rgba(46, 98, 160, 255);
    let belt = Color::rgba(70, 44, 24, 255);
    let pants = Color::rgba(58, 58, 70, 255);
    let boots = Color::rgba(40, 26, 18, 255);
    let blade = Color::rgba(200, 210, 220, 255);

    let cx = ox + FRAME_W as i32 / 2;
    let feet = oy + FRAME_H as i32 - 2;
    let hip = feet - 10 + bob;

    // 双腿（前后交错）
    fill_rect(img, cx - 3 + stride, hip, 3, feet - hip - 2, pants);
    fill_rect(img, cx + 1 - stride, hip, 3, feet - hip - 2, pants.shade(-18));
    fill_rect(img, cx - 4 + stride, feet - 2, 5, 2, boots);
    fill_rect(img, cx - stride, feet - 2, 5, 2, boots);

    // 躯干与腰带
    fill_rect(img, cx - 5, hip - 11, 10, 11, tunic);
    fill_rect(img, cx - 5, hip - 11, 2, 11, tunic.shade(-25));
    fill_rect(img, cx - 5, hip - 3, 10, 2, belt);

    // 手臂随步伐摆动
    fill_rect(img, cx - 7, hip - 10 - stride / 2, 2, 8, skin);
    fill_rect(img, cx + 5, hip - 10 + stride / 2, 2, 8, skin);

    // 头部
    let head_y = hip - 17;
    fill_circle(img, cx, head_y, 4, skin);
    fill_rect(img, cx - 4, head_y - 5, 9, 3, hair);
    fill_rect(img, cx - 5, head_y - 3, 2, 4, hair);
    set_px(img, cx + 2, head_y, Color::rgba(20, 20, 30, 255));

    // 背后的剑
    for i in 0..12 {
        set_px(img, cx - 8 - i / 3, hip - 14 + i, blade);
    }
    fill_rect(img, cx - 9, hip - 15, 4, 1, belt);
}

fn build_sheet() -> RgbaImage {
    let mut img: RgbaImage = ImageBuffer::new(FRAME_W * COLUMNS, FRAME_H * ROWS);

    for frame in 0..IDLE_FRAMES {
        let bob = if frame == 1 || frame == 2 { 1 } else { 0 };
        draw_adventurer(&mut img, (frame * FRAME_W) as i32, 0, bob, 0);
    }

    for frame in 0..WALK_FRAMES {
        let phase = frame as f32 / WALK_FRAMES as f32 * TAU;
        let stride = (phase.sin() * 3.0).round() as i32;
        let bob = if stride == 0 { 0 } else { -1 };
        draw_adventurer(&mut img, (frame * FRAME_W) as i32, FRAME_H as i32, bob, stride);
    }

    img
}

fn build_background() -> RgbaImage {
    let mut img: RgbaImage = ImageBuffer::new(BG_W, BG_H);
    let grass = Color::rgba(84, 140, 70, 255);
    let dirt = Color::rgba(150, 112, 72, 255);

    // 棋盘草地
    for ty in 0..BG_H / TILE {
        for tx in 0..BG_W / TILE {
            let shade = if (tx + ty) % 2 == 0 { 0 } else { -8 };
            fill_rect(
                &mut img,
                (tx * TILE) as i32,
                (ty * TILE) as i32,
                TILE as i32,
                TILE as i32,
                grass.shade(shade),
            );
        }
    }

    // 横贯地图的土路
    let path_y = 188;
    for x in 0..BG_W as i32 {
        let wobble = ((x as f32 / 40.0).sin() * 4.0) as i32;
        fill_rect(&mut img, x, path_y + wobble, 1, 22, dirt);
        set_px(&mut img, x, path_y + wobble, dirt.shade(-30));
        set_px(&mut img, x, path_y + wobble + 21, dirt.shade(-30));
    }

    // 草丛与石子
    for i in 0..260u32 {
        let s = 0xbeef ^ i.wrapping_mul(2654435761);
        let x = (rand_f32(s) * BG_W as f32) as i32;
        let y = (rand_f32(s ^ 0x55aa) * BG_H as f32) as i32;
        if rand_f32(s ^ 0x1111) < 0.8 {
            let tuft = grass.shade(30);
            set_px(&mut img, x, y, tuft);
            set_px(&mut img, x - 1, y + 1, tuft);
            set_px(&mut img, x + 1, y + 1, tuft);
        } else {
            fill_circle(&mut img, x, y, 1, Color::rgba(130, 130, 135, 255));
        }
    }

    img
}

fn main() -> Result<(), String> {
    fs::create_dir_all("assets").map_err(|e| format!("create assets dir failed: {e}"))?;

    let sheet = build_sheet();
    sheet
        .save("assets/adventurer.png")
        .map_err(|e| format!("save failed: {e}"))?;
    println!("wrote assets/adventurer.png ({}x{})", sheet.width(), sheet.height());

    let background = build_background();
    background
        .save("assets/background.png")
        .map_err(|e| format!("save failed: {e}"))?;
    println!(
        "wrote assets/background.png ({}x{})",
        background.width(),
        background.height()
    );
    Ok(())
}
