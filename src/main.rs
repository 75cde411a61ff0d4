//! AstroType entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{Document, HtmlElement, KeyboardEvent};

    use astrotype::FrameSnapshot;
    use astrotype::audio::{AudioManager, SoundEffect};
    use astrotype::settings::Settings;
    use astrotype::sim::{GameEvent, GamePhase, GameState, resolve_key, tick};

    /// Game instance holding all state
    struct Game {
        state: GameState,
        settings: Settings,
        audio: AudioManager,
        last_time: f64,
        /// Whether an animation frame chain is currently scheduled
        loop_running: bool,
        // FPS tracking
        frame_times: [f64; 60],
        frame_index: usize,
        fps: u32,
    }

    impl Game {
        fn new(seed: u64, settings: Settings) -> Self {
            let mut audio = AudioManager::new();
            audio.set_master_volume(settings.master_volume);
            audio.set_sfx_volume(settings.sfx_volume);
            Self {
                state: GameState::new(seed),
                settings,
                audio,
                last_time: 0.0,
                loop_running: false,
                frame_times: [0.0; 60],
                frame_index: 0,
                fps: 0,
            }
        }

        /// Discard the old session and begin a fresh one
        fn restart(&mut self, seed: u64) {
            self.state = GameState::new(seed);
            self.state.start();
            self.last_time = 0.0;
            log::info!("Session started with seed: {seed}");
        }

        /// Route simulation events to the audio sink
        fn play_events(&self, events: &[GameEvent]) {
            for &event in events {
                self.audio.play(SoundEffect::for_event(event));
            }
        }

        fn track_frame(&mut self, time: f64) {
            self.frame_times[self.frame_index] = time;
            self.frame_index = (self.frame_index + 1) % 60;
            let oldest = self.frame_times[self.frame_index];
            if oldest > 0.0 {
                let elapsed = time - oldest;
                if elapsed > 0.0 {
                    self.fps = (60000.0 / elapsed).round() as u32;
                }
            }
        }

        /// Project the session and paint words, HUD and overlays
        fn paint(&self) {
            let Some(document) = web_sys::window().and_then(|w| w.document()) else {
                return;
            };
            let snap = FrameSnapshot::capture(&self.state);
            paint_words(&document, &snap, self.settings.reduced_motion);
            self.paint_hud(&document, &snap);
            paint_overlays(&document, &snap);
        }

        fn paint_hud(&self, document: &Document, snap: &FrameSnapshot) {
            if let Some(el) = document.get_element_by_id("hud-score") {
                el.set_text_content(Some(&snap.score.to_string()));
            }
            if let Some(el) = document.get_element_by_id("hud-lives") {
                el.set_text_content(Some(&"\u{2665}".repeat(snap.lives as usize)));
            }
            if let Some(el) = document.get_element_by_id("hud-fps") {
                if self.settings.show_fps {
                    el.set_text_content(Some(&format!("{} fps", self.fps)));
                } else {
                    el.set_text_content(None);
                }
            }
        }
    }

    /// Rebuild the word layer from the frame snapshot.
    ///
    /// A few dozen DOM nodes at most - recreating them each frame is cheaper
    /// than diffing.
    fn paint_words(document: &Document, snap: &FrameSnapshot, reduced_motion: bool) {
        let Some(field) = document.get_element_by_id("field") else {
            return;
        };
        field.set_inner_html("");

        for word in &snap.words {
            let Ok(el) = document.create_element("div") else {
                continue;
            };
            let class = match (word.is_target, reduced_motion) {
                (true, false) => "word target",
                (true, true) => "word target still",
                _ => "word",
            };
            let _ = el.set_attribute("class", class);

            let typed: String = word.text.chars().take(word.typed_index).collect();
            let rest: String = word.text.chars().skip(word.typed_index).collect();
            el.set_inner_html(&format!(
                "<span class=\"typed\">{typed}</span><span class=\"rest\">{rest}</span>"
            ));

            if let Some(html) = el.dyn_ref::<HtmlElement>() {
                let style = html.style();
                let _ = style.set_property("left", &format!("{}%", word.x));
                let _ = style.set_property("top", &format!("{}%", word.y));
            }
            let _ = field.append_child(&el);
        }
    }

    /// Swap start / game-over overlays based on phase
    fn paint_overlays(document: &Document, snap: &FrameSnapshot) {
        if let Some(el) = document.get_element_by_id("start-screen") {
            let class = if snap.phase == GamePhase::Idle { "overlay" } else { "overlay hidden" };
            let _ = el.set_attribute("class", class);
        }
        if let Some(el) = document.get_element_by_id("game-over") {
            if snap.phase == GamePhase::GameOver {
                let _ = el.set_attribute("class", "overlay");
                if let Some(score_el) = document.get_element_by_id("final-score") {
                    score_el.set_text_content(Some(&snap.score.to_string()));
                }
            } else {
                let _ = el.set_attribute("class", "overlay hidden");
            }
        }
    }

    fn request_animation_frame(game: Rc<RefCell<Game>>) {
        let window = web_sys::window().unwrap();
        let closure = Closure::once(move |time: f64| {
            game_loop(game, time);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn game_loop(game: Rc<RefCell<Game>>, time: f64) {
        let keep_running = {
            let mut g = game.borrow_mut();

            // First frame of a session runs with zero elapsed time so there
            // is no startup jump.
            let elapsed_ms = if g.last_time > 0.0 {
                (time - g.last_time) as f32
            } else {
                0.0
            };
            g.last_time = time;

            let events = tick(&mut g.state, elapsed_ms);
            g.play_events(&events);
            g.track_frame(time);
            g.paint();

            // The frame chain ends with the session; the restart button
            // starts a new one.
            let playing = g.state.phase == GamePhase::Playing;
            g.loop_running = playing;
            playing
        };

        if keep_running {
            request_animation_frame(game);
        }
    }

    /// Begin a fresh session (start button, restart button)
    fn start_session(game: &Rc<RefCell<Game>>) {
        let seed = js_sys::Date::now() as u64;
        let launch_loop;
        {
            let mut g = game.borrow_mut();
            // Resume audio on the user gesture that started the game
            g.audio.resume();
            g.restart(seed);
            g.paint();
            launch_loop = !g.loop_running;
            g.loop_running = true;
        }
        if launch_loop {
            request_animation_frame(game.clone());
        }
    }

    fn setup_input_handlers(game: Rc<RefCell<Game>>) {
        let window = web_sys::window().unwrap();

        // Keyboard drives the resolver directly; the projection is repainted
        // on every keypress, not just on frames.
        let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
            let mut g = game.borrow_mut();
            if g.state.phase != GamePhase::Playing {
                return;
            }
            let events = resolve_key(&mut g.state, &event.key());
            g.play_events(&events);
            g.paint();
        });
        let _ = window.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn setup_buttons(game: Rc<RefCell<Game>>) {
        let document = web_sys::window().unwrap().document().unwrap();

        for btn_id in ["start-btn", "restart-btn"] {
            if let Some(btn) = document.get_element_by_id(btn_id) {
                let game = game.clone();
                let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::MouseEvent| {
                    start_session(&game);
                });
                let _ =
                    btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
                closure.forget();
            }
        }
    }

    fn setup_blur_mute(game: Rc<RefCell<Game>>) {
        let window = web_sys::window().unwrap();

        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::FocusEvent| {
                let mut g = game.borrow_mut();
                if g.settings.mute_on_blur {
                    g.audio.set_muted(true);
                }
            });
            let _ = window.add_event_listener_with_callback("blur", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        {
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::FocusEvent| {
                game.borrow_mut().audio.set_muted(false);
            });
            let _ =
                window.add_event_listener_with_callback("focus", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    pub fn run() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

        log::info!("AstroType starting...");

        let document = web_sys::window()
            .expect("no window")
            .document()
            .expect("no document");

        // Hide loading indicator
        if let Some(loading) = document.get_element_by_id("loading") {
            let _ = loading.set_attribute("class", "hidden");
        }

        let settings = Settings::load();
        let seed = js_sys::Date::now() as u64;
        let game = Rc::new(RefCell::new(Game::new(seed, settings)));

        setup_input_handlers(game.clone());
        setup_buttons(game.clone());
        setup_blur_mute(game.clone());

        // Idle until the start button constructs the first session
        game.borrow().paint();

        log::info!("AstroType ready");
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    wasm_game::run();
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("AstroType (native) starting...");
    log::info!("Native mode is headless - run with `trunk serve` for the web version");

    println!("\nRunning headless smoke session...");
    smoke_session();
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

/// Drive a short scripted session: tick at ~60 Hz while a bot types the word
/// closest to the danger line.
#[cfg(not(target_arch = "wasm32"))]
fn smoke_session() {
    use astrotype::sim::{GamePhase, GameState, input::resolve_letter, tick};

    let mut state = GameState::new(0xA57);
    state.start();

    for _ in 0..4000 {
        tick(&mut state, 16.0);
        if state.phase != GamePhase::Playing {
            break;
        }

        let letter = state
            .target_id
            .and_then(|id| state.word(id))
            .or_else(|| {
                state
                    .words
                    .iter()
                    .max_by(|a, b| a.pos.y.total_cmp(&b.pos.y))
            })
            .and_then(|w| w.next_char());
        if let Some(c) = letter {
            resolve_letter(&mut state, c);
        }
    }

    assert!(state.score > 0, "bot should have destroyed words");
    println!(
        "✓ Smoke session done: score {}, lives {}, {:?}",
        state.score, state.lives, state.phase
    );
}
