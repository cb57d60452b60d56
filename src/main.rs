//! Road Dodger entry point
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

    use road_dodger::input::is_steering_key;
    use road_dodger::renderer::colors::to_css;
    use road_dodger::renderer::{RenderState, ShapeBatch, TextAlign, TextLabel, render};
    use road_dodger::sim::{GameEvent, GameState, TickInput, tick};
    use road_dodger::{KeyState, Tuning};

    /// Retry button shown after a crash
    struct RetryControl {
        button: Option<Element>,
    }

    impl RetryControl {
        fn new(document: &Document) -> Self {
            let button = document.get_element_by_id("retry-btn");
            if button.is_none() {
                log::warn!("No #retry-btn element; retry is unavailable");
            }
            Self { button }
        }

        fn show(&self) {
            if let Some(ref btn) = self.button {
                let _ = btn.set_attribute("class", "");
            }
        }

        fn hide(&self) {
            if let Some(ref btn) = self.button {
                let _ = btn.set_attribute("class", "hidden");
            }
        }
    }

    /// Positioned DOM elements standing in for canvas text
    struct LabelLayer {
        document: Document,
        layer: Option<Element>,
        pool: Vec<Element>,
    }

    impl LabelLayer {
        fn new(document: &Document) -> Self {
            Self {
                document: document.clone(),
                layer: document.get_element_by_id("labels"),
                pool: Vec::new(),
            }
        }

        /// Mirror this frame's labels, hiding any left over from last frame
        fn sync(&mut self, labels: &[TextLabel]) {
            let Some(ref layer) = self.layer else {
                return;
            };

            while self.pool.len() < labels.len() {
                match self.document.create_element("div") {
                    Ok(el) => {
                        let _ = layer.append_child(&el);
                        self.pool.push(el);
                    }
                    Err(_) => {
                        log::error!("Failed to create label element");
                        return;
                    }
                }
            }

            for (el, label) in self.pool.iter().zip(labels) {
                // Canvas text is positioned by its baseline point
                let shift_x = match label.style.align {
                    TextAlign::Left => "0%",
                    TextAlign::Center => "-50%",
                };
                let style = format!(
                    "left:{}px;top:{}px;font-size:{}px;color:{};transform:translate({},-100%)",
                    label.pos.x,
                    label.pos.y,
                    label.style.size_px,
                    to_css(label.style.color),
                    shift_x,
                );
                let _ = el.set_attribute("style", &style);
                let _ = el.set_attribute("class", "label");
                if el.text_content().as_deref() != Some(label.text.as_str()) {
                    el.set_text_content(Some(&label.text));
                }
            }

            for el in self.pool.iter().skip(labels.len()) {
                let _ = el.set_attribute("class", "label hidden");
            }
        }
    }

    /// Game instance holding all state
    struct Game {
        state: GameState,
        keys: KeyState,
        batch: ShapeBatch,
        render_state: Option<RenderState>,
        retry: RetryControl,
        labels: LabelLayer,
    }

    impl Game {
        fn new(tuning: Tuning, seed: u64, document: &Document) -> Self {
            Self {
                state: GameState::new(tuning, seed),
                keys: KeyState::new(),
                batch: ShapeBatch::new(),
                render_state: None,
                retry: RetryControl::new(document),
                labels: LabelLayer::new(document),
            }
        }

        /// Run one simulation tick
        fn update(&mut self) {
            let input = TickInput::from(&self.keys);
            for event in tick(&mut self.state, &input) {
                if let GameEvent::Crashed { .. } = event {
                    self.retry.show();
                }
            }
        }

        /// Render the current frame
        fn render(&mut self) {
            render(&self.state, &mut self.batch);

            if let Some(ref mut render_state) = self.render_state {
                match render_state.render(&self.batch) {
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

            self.labels.sync(&self.batch.labels);
        }

        /// Reset game state for retry
        fn restart(&mut self, seed: u64) {
            self.state.reset(seed);
            self.retry.hide();
        }
    }

    pub async fn run() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

        log::info!("Road Dodger starting...");

        let window = web_sys::window().expect("no window");
        let document = window.document().expect("no document");

        // Hide loading indicator
        if let Some(loading) = document.get_element_by_id("loading") {
            let _ = loading.set_attribute("class", "hidden");
        }

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("canvas")
            .expect("no canvas")
            .dyn_into()
            .expect("not a canvas");

        let tuning = Tuning::load();

        // Canvas keeps the logical size on screen, backing store scaled for the display
        let dpr = window.device_pixel_ratio();
        let width = (tuning.canvas_width as f64 * dpr) as u32;
        let height = (tuning.canvas_height as f64 * dpr) as u32;
        canvas.set_width(width);
        canvas.set_height(height);
        let _ = canvas.set_attribute(
            "style",
            &format!(
                "width:{}px;height:{}px",
                tuning.canvas_width, tuning.canvas_height
            ),
        );

        let seed = js_sys::Date::now() as u64;
        let game = Rc::new(RefCell::new(Game::new(tuning, seed, &document)));
        game.borrow().retry.hide();

        log::info!("Game initialized with seed: {}", seed);

        // Initialize WebGPU
        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::BROWSER_WEBGPU | wgpu::Backends::GL,
            ..Default::default()
        });

        let surface = instance
            .create_surface(wgpu::SurfaceTarget::Canvas(canvas.clone()))
            .expect("Failed to create surface");

        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::LowPower,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .expect("Failed to get adapter");

        log::info!("Using adapter: {:?}", adapter.get_info().name);

        let render_state = RenderState::new(surface, &adapter, width, height).await;
        game.borrow_mut().render_state = Some(render_state);

        setup_input_handlers(game.clone());
        setup_retry_button(game.clone());

        // Start game loop
        request_animation_frame(game);

        log::info!("Road Dodger running!");
    }

    fn setup_input_handlers(game: Rc<RefCell<Game>>) {
        let window = web_sys::window().unwrap();

        // Key down
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                let key = event.key();
                if is_steering_key(&key) {
                    event.prevent_default();
                }
                game.borrow_mut().keys.press(&key);
            });
            let _ = window
                .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Key up
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                game.borrow_mut().keys.release(&event.key());
            });
            let _ = window
                .add_event_listener_with_callback("keyup", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Window blur: keyup events never arrive, so drop held keys
        {
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
                game.borrow_mut().keys.clear();
            });
            let _ = window.add_event_listener_with_callback("blur", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn setup_retry_button(game: Rc<RefCell<Game>>) {
        let window = web_sys::window().unwrap();
        let document = window.document().unwrap();

        if let Some(btn) = document.get_element_by_id("retry-btn") {
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::MouseEvent| {
                let seed = js_sys::Date::now() as u64;
                game.borrow_mut().restart(seed);
                log::info!("Game restarted with seed: {}", seed);
            });
            let _ = btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
            closure.forget();
        }
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
            g.update();
            g.render();
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
mod headless {
    use road_dodger::Tuning;
    use road_dodger::renderer::{ShapeBatch, render};
    use road_dodger::sim::{GameEvent, GameState, TickInput, tick};

    /// Five minutes of frames at 60 Hz
    const MAX_TICKS: u64 = 60 * 60 * 5;

    /// Steer away from the nearest opponent heading into the player's lane
    pub fn autopilot(state: &GameState) -> TickInput {
        let player = state.player.rect();
        let center = player.pos.x + player.size.x / 2.0;

        let threat = state
            .opponents
            .iter()
            .filter(|o| {
                let r = o.rect();
                r.bottom() < player.bottom()
                    && r.bottom() > player.top() - 200.0
                    && r.left() < player.right() + 10.0
                    && r.right() > player.left() - 10.0
            })
            .max_by(|a, b| a.pos.y.total_cmp(&b.pos.y));

        let Some(threat) = threat else {
            return TickInput::default();
        };

        let threat_center = threat.pos.x + threat.size.x / 2.0;
        let room_left = threat.pos.x - state.tuning.road_left();
        let room_right = state.tuning.road_right() - (threat.pos.x + threat.size.x);

        // Dodge toward the side with more room, breaking ties by relative position
        let go_left = if (room_left - room_right).abs() > player.size.x {
            room_left > room_right
        } else {
            center < threat_center
        };

        TickInput {
            left: go_left,
            right: !go_left,
        }
    }

    pub fn run(tuning: Tuning, seed: u64) {
        let mut state = GameState::new(tuning, seed);
        log::info!("Headless run with seed {}", seed);

        while state.is_running() && state.time_ticks < MAX_TICKS {
            let input = autopilot(&state);
            for event in tick(&mut state, &input) {
                match event {
                    GameEvent::Spawned { x, speed } => {
                        log::debug!("tick {}: spawn x={:.1} speed={:.2}", state.time_ticks, x, speed)
                    }
                    GameEvent::Passed { score } => {
                        log::debug!("tick {}: passed, score {}", state.time_ticks, score)
                    }
                    GameEvent::Crashed { score } => {
                        log::info!("tick {}: crashed with score {}", state.time_ticks, score)
                    }
                }
            }
        }

        let mut batch = ShapeBatch::new();
        render(&state, &mut batch);

        log::info!(
            "Finished after {} ticks: score {}, {} opponents on road, last frame {} triangles / {} labels",
            state.time_ticks,
            state.score,
            state.opponents.len(),
            batch.triangle_count(),
            batch.labels.len()
        );
        println!(
            "score={} ticks={} crashed={}",
            state.score,
            state.time_ticks,
            !state.is_running()
        );
    }

}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Road Dodger (native) starting...");
    log::info!("Native mode runs a headless simulation - run with `trunk serve` for the web version");

    let mut args = std::env::args().skip(1);

    let tuning = match args.next() {
        Some(path) => match road_dodger::Tuning::from_path(&path) {
            Ok(tuning) => tuning,
            Err(e) => {
                log::error!("Failed to load tuning from {}: {}", path, e);
                std::process::exit(1);
            }
        },
        None => road_dodger::Tuning::load(),
    };

    let seed = args.next().and_then(|s| s.parse().ok()).unwrap_or(12345);

    headless::run(tuning, seed);
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}
