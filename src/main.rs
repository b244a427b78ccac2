//! Book Rain entry point
//!
//! Handles platform-specific initialization and runs the tick loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_app {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::HtmlCanvasElement;

    use book_rain::platform::web::{CanvasSurface, DomListeners, show_error};
    use book_rain::{Game, GameTimer, Settings};

    /// Loop state owned by the animation frame chain
    struct Runner {
        game: Rc<RefCell<Game<CanvasSurface>>>,
        listeners: DomListeners,
        timer: GameTimer,
        settings: Settings,
        last_time: f64,
    }

    impl Runner {
        /// Returns false once the loop should end
        fn frame(&mut self, time: f64) -> bool {
            let dt = if self.last_time > 0.0 {
                ((time - self.last_time) / 1000.0) as f32
            } else {
                self.timer.period()
            };
            self.last_time = time;

            let game = self.game.clone();
            if let Err(e) = self.timer.advance(dt, || game.borrow_mut().tick()) {
                self.listeners.detach();
                game.borrow_mut().detach_input();
                show_error(&format!("Book Rain stopped: {e:#}"));
                return false;
            }

            // Remember the last theme across visits
            let theme = self.game.borrow().stage().theme;
            if theme != self.settings.theme {
                self.settings.theme = theme;
                self.settings.save();
            }
            true
        }
    }

    pub fn run() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

        log::info!("Book Rain starting...");

        let window = web_sys::window().expect("no window");
        let document = window.document().expect("no document");
        let settings = Settings::load();

        if let Some(loading) = document.get_element_by_id("loading") {
            let _ = loading.set_attribute("class", "hidden");
        }

        let canvas: HtmlCanvasElement = document
            .get_element_by_id(&settings.canvas_id)
            .expect("no canvas")
            .dyn_into()
            .expect("not a canvas");

        // Fill the wrapper if the page has one, otherwise keep the CSS size
        let (width, height) = match document.get_element_by_id("wrapper") {
            Some(wrapper) => (wrapper.client_width(), wrapper.client_height()),
            None => (canvas.client_width(), canvas.client_height()),
        };
        let surface = CanvasSurface::new(canvas.clone()).expect("canvas 2d context");
        surface.resize(width.max(1) as u32, height.max(1) as u32);

        let seed = js_sys::Date::now() as u64;
        let game = Rc::new(RefCell::new(Game::new(surface, settings.clone(), seed)));
        let listeners = DomListeners::attach(&game, &document, &canvas);

        let mut timer = GameTimer::new(settings.fps);
        timer.start();

        let runner = Runner {
            game,
            listeners,
            timer,
            settings,
            last_time: 0.0,
        };
        request_animation_frame(Rc::new(RefCell::new(runner)));

        log::info!("Book Rain running!");
    }

    fn request_animation_frame(runner: Rc<RefCell<Runner>>) {
        let window = web_sys::window().unwrap();
        let closure = Closure::once(move |time: f64| {
            frame_loop(runner, time);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn frame_loop(runner: Rc<RefCell<Runner>>, time: f64) {
        let keep_going = runner.borrow_mut().frame(time);
        if keep_going {
            request_animation_frame(runner);
        } else {
            log::info!("Tick loop ended");
        }
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    wasm_app::run();
}

#[cfg(not(target_arch = "wasm32"))]
fn main() -> anyhow::Result<()> {
    env_logger::init();
    log::info!("Book Rain (native) starting...");
    log::info!("Native mode runs a headless session - run with `trunk serve` for the web version");

    headless_session(10.0)
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

/// Run `seconds` of simulated time against a recording surface, pressing
/// SPACE halfway through
#[cfg(not(target_arch = "wasm32"))]
fn headless_session(seconds: f32) -> anyhow::Result<()> {
    use book_rain::input::{InputEvent, key};
    use book_rain::render::RecordingSurface;
    use book_rain::{Game, GameTimer, Settings, Stopwatch};

    let settings = Settings::default();
    let mut game = Game::new(RecordingSurface::new(1920.0, 1080.0), settings.clone(), 42);
    let mut timer = GameTimer::new(settings.fps);
    let watch = Stopwatch::new();

    // Feed the timer in 60 Hz frames, like a browser would
    let frame = 1.0 / 60.0;
    let frames = (seconds / frame) as u32;
    let mut draw_calls = 0;
    timer.start();
    for i in 0..frames {
        if i == frames / 2 {
            game.handle_event(&InputEvent::KeyDown(key::SPACE));
        } else if i == frames / 2 + 1 {
            game.handle_event(&InputEvent::KeyUp(key::SPACE));
        }
        timer.advance(frame, || {
            game.tick()?;
            draw_calls += game.stage_mut().surface.take_calls().len();
            Ok(())
        })?;
    }

    log::info!(
        "{} ticks in {:.3}s: {} entities live, {} draw calls, theme {}",
        timer.ticks(),
        watch.elapsed(),
        game.entity_count(),
        draw_calls,
        game.stage().theme.as_str()
    );
    Ok(())
}
