//! Doodle Climb entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{Document, Element, HtmlCanvasElement, KeyboardEvent};

    use doodle_climb::renderer::{RenderError, RenderState};
    use doodle_climb::ui::{Hud, game_over_text, score_text};
    use doodle_climb::{GameLoop, Tuning};

    const SCORE_BOX_ID: &str = "score-box";
    const GAME_OVER_BOX_ID: &str = "game-over-box";

    const OVERLAY_STYLE: &str = "position: absolute; transform: translateX(-50%); \
        font-family: 'Press Start 2P', monospace; font-size: 24px; \
        background: none; z-index: 10;";

    /// Score and game-over boxes as absolutely positioned DOM elements
    struct DomHud {
        document: Document,
    }

    impl DomHud {
        fn element(&self, id: &str, placement: &str) -> Option<Element> {
            if let Some(el) = self.document.get_element_by_id(id) {
                return Some(el);
            }
            let el = self.document.create_element("div").ok()?;
            el.set_id(id);
            let _ = el.set_attribute("style", &format!("{} {}", OVERLAY_STYLE, placement));
            self.document.body()?.append_child(&el).ok()?;
            Some(el)
        }
    }

    impl Hud for DomHud {
        fn show_score(&mut self, score: i64) {
            if let Some(el) = self.element(SCORE_BOX_ID, "left: 20%; top: 80px; color: black;") {
                el.set_text_content(Some(&score_text(score)));
            }
        }

        fn show_game_over(&mut self, final_score: i64) {
            if self.document.get_element_by_id(GAME_OVER_BOX_ID).is_some() {
                return;
            }
            if let Some(el) = self.element(GAME_OVER_BOX_ID, "left: 50%; top: 40%; color: red;") {
                el.set_inner_html(&game_over_text(final_score).replace('\n', "<br><br>"));
            }
        }

        fn hide_game_over(&mut self) {
            if let Some(el) = self.document.get_element_by_id(GAME_OVER_BOX_ID) {
                el.remove();
            }
        }
    }

    type Game = GameLoop<RenderState, DomHud>;

    pub async fn run() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

        log::info!("Doodle Climb starting...");

        if let Err(e) = start().await {
            log::error!("Failed to start: {}", e);
        }
    }

    async fn start() -> Result<(), RenderError> {
        let window = web_sys::window().expect("no window");
        let document = window.document().expect("no document");

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("canvas")
            .expect("no canvas")
            .dyn_into()
            .expect("not a canvas");

        let tuning = Tuning::load();

        // Back the canvas at device resolution; game coordinates stay in view pixels
        let dpr = window.device_pixel_ratio();
        let width = (tuning.view_width as f64 * dpr) as u32;
        let height = (tuning.view_height as f64 * dpr) as u32;
        canvas.set_width(width);
        canvas.set_height(height);

        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::BROWSER_WEBGPU | wgpu::Backends::GL,
            ..Default::default()
        });

        let surface = instance.create_surface(wgpu::SurfaceTarget::Canvas(canvas.clone()))?;

        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::HighPerformance,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await?;

        log::info!("Using adapter: {:?}", adapter.get_info().name);

        let view = (tuning.view_width, tuning.view_height);
        let render_state = RenderState::new(surface, &adapter, width, height, view).await?;

        let seed = js_sys::Date::now() as u64;
        let hud = DomHud { document };
        let game = Rc::new(RefCell::new(GameLoop::new(seed, tuning, render_state, hud)));

        setup_input_handlers(game.clone());
        setup_teardown(game.clone());

        request_animation_frame(game);

        log::info!("Doodle Climb running!");
        Ok(())
    }

    fn setup_input_handlers(game: Rc<RefCell<Game>>) {
        let window = web_sys::window().unwrap();

        // Key down
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                if game.borrow_mut().key_down(&event.code()) {
                    // Keep Space and arrows from scrolling the page
                    event.prevent_default();
                }
            });
            let _ = window
                .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Key up
        {
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                if game.borrow_mut().key_up(&event.code()) {
                    event.prevent_default();
                }
            });
            let _ = window
                .add_event_listener_with_callback("keyup", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    /// Stop the loop when the page goes away
    fn setup_teardown(game: Rc<RefCell<Game>>) {
        let window = web_sys::window().unwrap();
        let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
            game.borrow_mut().stop();
        });
        let _ = window.add_event_listener_with_callback("pagehide", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn request_animation_frame(game: Rc<RefCell<Game>>) {
        let window = web_sys::window().unwrap();
        let closure = Closure::once(move |_time: f64| {
            game_loop(game);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn game_loop(game: Rc<RefCell<Game>>) {
        {
            let mut g = game.borrow_mut();
            if !g.is_running() {
                return;
            }

            g.frame();

            let render_state = g.surface_mut();
            match render_state.present() {
                Ok(_) => {}
                Err(wgpu::SurfaceError::Lost) => {
                    render_state.resize(render_state.size.0, render_state.size.1);
                }
                Err(wgpu::SurfaceError::OutOfMemory) => {
                    log::error!("Out of memory!");
                }
                Err(e) => log::warn!("Render error: {:?}", e),
            }
        }

        request_animation_frame(game);
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub async fn wasm_main() {
    wasm_game::run().await;
}

#[cfg(not(target_arch = "wasm32"))]
mod native_game {
    use std::thread;
    use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

    use doodle_climb::renderer::RectBatch;
    use doodle_climb::sim::{GameEvent, GameState};
    use doodle_climb::ui::TextHud;
    use doodle_climb::{GameLoop, Tuning};

    /// ~60 Hz, one tick per frame like a display refresh
    const FRAME_TIME: Duration = Duration::from_micros(16_667);
    /// Headless demo length cap (30 seconds)
    const MAX_FRAMES: u64 = 60 * 30;

    /// Which horizontal key the demo pilot should hold
    fn steer(state: &GameState) -> Option<&'static str> {
        let doodler = &state.doodler;
        let center = doodler.pos.x + doodler.size().x / 2.0;
        let target = state
            .field
            .platforms()
            .iter()
            .filter(|p| p.pos.y < doodler.bottom())
            .max_by(|a, b| a.pos.y.total_cmp(&b.pos.y))?;
        let target_center = target.pos.x + target.size.x / 2.0;
        if target_center < center - 4.0 {
            Some("ArrowLeft")
        } else if target_center > center + 4.0 {
            Some("ArrowRight")
        } else {
            None
        }
    }

    /// Play one headless run with a simple pilot, then stop
    pub fn run() {
        let seed = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis() as u64)
            .unwrap_or_default();
        let mut game = GameLoop::new(seed, Tuning::load(), RectBatch::default(), TextHud::default());

        game.key_down("Space");
        while game.is_running() {
            let start_time = Instant::now();

            for key in ["ArrowLeft", "ArrowRight"] {
                game.key_up(key);
            }
            if let Some(key) = steer(game.state()) {
                game.key_down(key);
            }

            let events = game.frame();
            if events
                .iter()
                .any(|e| matches!(e, GameEvent::GameOver { .. }))
                || game.frames() >= MAX_FRAMES
            {
                game.stop();
            }

            if let Some(time_to_wait) = FRAME_TIME.checked_sub(start_time.elapsed()) {
                thread::sleep(time_to_wait);
            }
        }

        let (_, hud) = game.into_parts();
        log::info!("{}", hud.score);
        if let Some(text) = hud.game_over {
            println!("{}", text);
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Doodle Climb (native) starting...");
    log::info!("Native mode runs a headless demo - run with `trunk serve` for the web version");

    native_game::run();
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}
