//! Fixed-rate tick driver
//!
//! The host (requestAnimationFrame on the web, a sleep loop natively) reports
//! elapsed wall time; `GameTimer` turns it into a whole number of ticks at
//! the configured rate. A failing tick stops the timer for good: the canvas
//! may be half drawn, so carrying on would only hide the problem.

/// Longest frame accepted in one `advance` call (seconds)
pub const MAX_FRAME_SECS: f32 = 0.1;
/// Maximum ticks per `advance` call, to avoid a spiral of death
pub const MAX_CATCHUP_TICKS: u32 = 8;

#[derive(Debug, Clone)]
pub struct GameTimer {
    fps: f32,
    accumulator: f32,
    running: bool,
    ticks: u64,
}

impl GameTimer {
    /// A stopped timer; `fps` below 1 is raised to 1
    pub fn new(fps: f32) -> Self {
        Self {
            fps: fps.max(1.0),
            accumulator: 0.0,
            running: false,
            ticks: 0,
        }
    }

    pub fn fps(&self) -> f32 {
        self.fps
    }

    /// Seconds per tick
    pub fn period(&self) -> f32 {
        1.0 / self.fps
    }

    /// (Re)start from an empty accumulator
    pub fn start(&mut self) {
        if self.running {
            log::debug!("Restarting game timer");
        }
        self.running = true;
        self.accumulator = 0.0;
        log::info!("Game timer started at {} fps", self.fps);
    }

    pub fn stop(&mut self) {
        if self.running {
            self.running = false;
            log::info!("Game timer stopped after {} ticks", self.ticks);
        }
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Ticks completed since creation
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// Run exactly one tick. Returns `Ok(false)` if the timer is stopped.
    pub fn fire<F>(&mut self, mut tick: F) -> anyhow::Result<bool>
    where
        F: FnMut() -> anyhow::Result<()>,
    {
        if !self.running {
            return Ok(false);
        }
        match tick() {
            Ok(()) => {
                self.ticks += 1;
                Ok(true)
            }
            Err(e) => {
                log::error!("Tick {} failed, stopping timer: {e:#}", self.ticks);
                self.stop();
                Err(e)
            }
        }
    }

    /// Account for `elapsed` seconds of wall time and run the ticks that are
    /// due. Returns how many ran.
    pub fn advance<F>(&mut self, elapsed: f32, mut tick: F) -> anyhow::Result<u32>
    where
        F: FnMut() -> anyhow::Result<()>,
    {
        if !self.running {
            return Ok(0);
        }
        self.accumulator += elapsed.clamp(0.0, MAX_FRAME_SECS);

        let period = self.period();
        let mut substeps = 0;
        while self.accumulator >= period && substeps < MAX_CATCHUP_TICKS {
            self.fire(&mut tick)?;
            self.accumulator -= period;
            substeps += 1;
        }
        Ok(substeps)
    }
}

/// Elapsed-time measurement in seconds
#[derive(Debug, Clone, Copy)]
pub struct Stopwatch {
    start: f64,
}

impl Default for Stopwatch {
    fn default() -> Self {
        Self::new()
    }
}

impl Stopwatch {
    pub fn new() -> Self {
        Self { start: now_secs() }
    }

    pub fn reset(&mut self) {
        self.start = now_secs();
    }

    /// Seconds since creation or the last reset
    pub fn elapsed(&self) -> f64 {
        now_secs() - self.start
    }
}

#[cfg(target_arch = "wasm32")]
fn now_secs() -> f64 {
    js_sys::Date::now() / 1000.0
}

#[cfg(not(target_arch = "wasm32"))]
fn now_secs() -> f64 {
    use std::sync::OnceLock;
    use std::time::Instant;

    static EPOCH: OnceLock<Instant> = OnceLock::new();
    EPOCH.get_or_init(Instant::now).elapsed().as_secs_f64()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stopped_timer_does_not_tick() {
        let mut timer = GameTimer::new(60.0);
        let mut count = 0;
        let ran = timer
            .advance(1.0, || {
                count += 1;
                Ok(())
            })
            .unwrap();
        assert_eq!(ran, 0);
        assert_eq!(count, 0);
        assert!(!timer.fire(|| Ok(())).unwrap());
    }

    #[test]
    fn test_advance_runs_due_ticks() {
        let mut timer = GameTimer::new(50.0);
        timer.start();
        let mut count = 0;
        // 0.05s at 50 fps = 2.5 periods
        let ran = timer
            .advance(0.05, || {
                count += 1;
                Ok(())
            })
            .unwrap();
        assert_eq!(ran, 2);
        // Leftover half period plus another half
        let ran = timer
            .advance(0.011, || {
                count += 1;
                Ok(())
            })
            .unwrap();
        assert_eq!(ran, 1);
        assert_eq!(count, 3);
        assert_eq!(timer.ticks(), 3);
    }

    #[test]
    fn test_long_frame_is_capped() {
        let mut timer = GameTimer::new(1000.0);
        timer.start();
        let ran = timer.advance(5.0, || Ok(())).unwrap();
        assert_eq!(ran, MAX_CATCHUP_TICKS);
    }

    #[test]
    fn test_failing_tick_stops_timer() {
        let mut timer = GameTimer::new(10.0);
        timer.start();
        let mut calls = 0;
        let err = timer
            .advance(0.1, || {
                calls += 1;
                anyhow::bail!("canvas gone")
            })
            .unwrap_err();
        assert_eq!(err.to_string(), "canvas gone");
        assert!(!timer.is_running());
        assert_eq!(calls, 1);

        // Later frames do nothing until restarted
        assert_eq!(timer.advance(0.1, || Ok(())).unwrap(), 0);
        timer.start();
        assert_eq!(timer.advance(0.1, || Ok(())).unwrap(), 1);
    }

    #[test]
    fn test_fps_floor() {
        let timer = GameTimer::new(0.0);
        assert_eq!(timer.fps(), 1.0);
        assert_eq!(timer.period(), 1.0);
    }

    #[test]
    fn test_stopwatch_monotonic() {
        let mut sw = Stopwatch::new();
        let a = sw.elapsed();
        let b = sw.elapsed();
        assert!(a >= 0.0 && b >= a);
        sw.reset();
        assert!(sw.elapsed() >= 0.0);
    }
}
