use std::time::Duration;

/// Natural frequency of the snap-back spring, in radians per second.
const SPRING_OMEGA: f32 = 14.0;
/// Distance from the target under which a spring counts as settled.
const REST_DISPLACEMENT: f32 = 0.5;
/// Hard stop for springs so a row can never hang mid-flight.
const SPRING_TIMEOUT: Duration = Duration::from_secs(2);

#[derive(Debug, Clone, Copy, PartialEq)]
enum Curve {
    EaseInOut { duration: Duration },
    Spring,
}

/// A one-shot animation of a single offset value, advanced by elapsed time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Animation {
    from: f32,
    to: f32,
    elapsed: Duration,
    curve: Curve,
    value: f32,
}

impl Animation {
    /// Fixed-duration animation with ease-in-out timing.
    pub fn timing(from: f32, to: f32, duration: Duration) -> Self {
        Self { from, to, elapsed: Duration::ZERO, curve: Curve::EaseInOut { duration }, value: from }
    }

    /// Critically damped spring towards `to`.
    pub fn spring(from: f32, to: f32) -> Self {
        Self { from, to, elapsed: Duration::ZERO, curve: Curve::Spring, value: from }
    }

    pub fn value(&self) -> f32 {
        self.value
    }

    pub fn is_finished(&self) -> bool {
        self.value == self.to
    }

    /// Moves the animation forward by `dt` and returns the new value.
    ///
    /// A finished animation lands exactly on its target.
    pub fn advance(&mut self, dt: Duration) -> f32 {
        self.elapsed += dt;
        self.value = match self.curve {
            Curve::EaseInOut { duration } => {
                if self.elapsed >= duration {
                    self.to
                } else {
                    let t = self.elapsed.as_secs_f32() / duration.as_secs_f32();
                    self.from + (self.to - self.from) * ease_in_out(t)
                }
            }
            Curve::Spring => {
                let t = self.elapsed.as_secs_f32();
                let x = (self.from - self.to) * (1.0 + SPRING_OMEGA * t) * (-SPRING_OMEGA * t).exp();
                if x.abs() < REST_DISPLACEMENT || self.elapsed >= SPRING_TIMEOUT {
                    self.to
                } else {
                    self.to + x
                }
            }
        };
        self.value
    }
}

fn ease_in_out(t: f32) -> f32 {
    if t < 0.5 {
        2.0 * t * t
    } else {
        1.0 - (-2.0 * t + 2.0).powi(2) / 2.0
    }
}
