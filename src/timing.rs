// 固定步长累加器：渲染帧时间累积后按固定步长驱动更新
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FixedStep {
    step: f32,
    max_steps: u32,
    accumulator: f32,
}

impl FixedStep {
    pub fn new(step: f32, max_steps: u32) -> Self {
        Self {
            step,
            max_steps: max_steps.max(1),
            accumulator: 0.0,
        }
    }

    pub fn step(&self) -> f32 {
        self.step
    }

    // 累加一帧的真实耗时，返回本帧需要执行的更新次数
    pub fn advance(&mut self, frame_time: f32) -> u32 {
        if frame_time.is_finite() && frame_time > 0.0 {
            self.accumulator += frame_time;
        }
        let mut steps = 0;
        while self.accumulator >= self.step && steps < self.max_steps {
            self.accumulator -= self.step;
            steps += 1;
        }
        // 追帧上限：丢弃积压时间，避免越追越慢
        if steps == self.max_steps && self.accumulator >= self.step {
            log::debug!("dropping {:.3}s of update backlog", self.accumulator);
            self.accumulator %= self.step;
        }
        steps
    }
}
