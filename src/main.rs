//! Emoji Dash entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{
        CanvasRenderingContext2d, Document, Element, HtmlCanvasElement, HtmlElement,
        KeyboardEvent, MouseEvent,
    };

    use emoji_dash::platform::{run_seed, web::LocalStorage};
    use emoji_dash::render::{Drawable, Fill};
    use emoji_dash::sim::Playfield;
    use emoji_dash::{Game, Screen};

    /// Browser app holding the session and the canvas it draws on
    struct App {
        game: Game<LocalStorage>,
        canvas: HtmlCanvasElement,
        ctx: CanvasRenderingContext2d,
    }

    fn current_document() -> Option<Document> {
        web_sys::window()?.document()
    }

    fn set_visible(document: &Document, id: &str, visible: bool) {
        if let Some(el) = document
            .get_element_by_id(id)
            .and_then(|el| el.dyn_into::<HtmlElement>().ok())
        {
            let display = if visible { "block" } else { "none" };
            let _ = el.style().set_property("display", display);
        }
    }

    /// Show exactly the DOM screen matching the session state
    fn sync_screens(document: &Document, screen: Screen, high_score: u64) {
        set_visible(document, "start-screen", screen == Screen::Start);
        set_visible(document, "avatar-picker", screen == Screen::AvatarSelect);
        set_visible(document, "game-screen", screen == Screen::Playing);
        set_visible(
            document,
            "end-screen",
            matches!(screen, Screen::Results { .. }),
        );

        if let Screen::Results {
            final_score,
            high_score,
        } = screen
        {
            if let Some(el) = document.get_element_by_id("results") {
                el.set_inner_html(&format!(
                    "<h2>Score: {final_score}</h2><h3>High Score: {high_score}</h3>"
                ));
            }
        }

        if let Some(el) = document.get_element_by_id("high-score") {
            el.set_text_content(Some(&high_score.to_string()));
        }
    }

    impl App {
        /// Match the canvas to its container and tell the simulation
        fn fit_canvas(&mut self) {
            let Some(container) = current_document()
                .and_then(|d| d.query_selector(".game__container").ok().flatten())
                .and_then(|el| el.dyn_into::<HtmlElement>().ok())
            else {
                return;
            };
            let (w, h) = (container.offset_width(), container.offset_height());
            self.canvas.set_width(w.max(0) as u32);
            self.canvas.set_height(h.max(0) as u32);
            self.game.resize(Playfield::new(w as f32, h as f32));
        }

        fn draw(&self, drawables: &[Drawable]) {
            let ctx = &self.ctx;
            ctx.clear_rect(
                0.0,
                0.0,
                self.canvas.width() as f64,
                self.canvas.height() as f64,
            );

            for d in drawables {
                match &d.fill {
                    Fill::Rect { color } => {
                        ctx.set_fill_style_str(color);
                        ctx.fill_rect(d.x as f64, d.y as f64, d.width as f64, d.height as f64);
                    }
                    Fill::Text { text, color } => {
                        ctx.set_fill_style_str(color);
                        ctx.set_font(&format!("{}px sans-serif", d.height));
                        ctx.set_text_align(d.align.as_str());
                        ctx.set_text_baseline("hanging");
                        let _ = ctx.fill_text(text, d.x as f64, d.y as f64);
                    }
                }
            }
        }
    }

    fn request_animation_frame(app: Rc<RefCell<App>>) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let closure = Closure::once(move |_time: f64| {
            game_loop(app);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    /// One display refresh = one simulated frame
    fn game_loop(app: Rc<RefCell<App>>) {
        let ended = {
            let mut a = app.borrow_mut();
            let event = a.game.frame();
            let drawables = a.game.drawables();
            a.draw(&drawables);
            event.is_some() || a.game.screen() != Screen::Playing
        };

        if ended {
            let a = app.borrow();
            if let Some(document) = current_document() {
                sync_screens(&document, a.game.screen(), a.game.high_score());
            }
            return;
        }

        request_animation_frame(app);
    }

    fn on_click(element: &Element, mut handler: impl FnMut() + 'static) {
        let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| handler());
        let _ = element.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn setup_menu_handlers(document: &Document, app: Rc<RefCell<App>>) {
        // Title -> avatar picker
        if let Some(btn) = document.query_selector("#start-screen button").ok().flatten() {
            let app = app.clone();
            on_click(&btn, move || {
                let mut a = app.borrow_mut();
                a.game.open_avatar_picker();
                if let Some(document) = current_document() {
                    sync_screens(&document, a.game.screen(), a.game.high_score());
                }
            });
        }

        // Avatar picker -> new run
        if let Ok(options) = document.query_selector_all(".select-avatar") {
            for i in 0..options.length() {
                let Some(option) = options.item(i).and_then(|n| n.dyn_into::<Element>().ok())
                else {
                    continue;
                };
                let glyph = option.inner_html();
                let app = app.clone();
                on_click(&option, move || {
                    {
                        let mut a = app.borrow_mut();
                        if a.game.screen() == Screen::Playing {
                            return;
                        }
                        a.game.choose_avatar(&glyph, run_seed());
                        if let Some(document) = current_document() {
                            sync_screens(&document, a.game.screen(), a.game.high_score());
                        }
                        // The game screen is visible now, so the container has a size
                        a.fit_canvas();
                    }
                    request_animation_frame(app.clone());
                });
            }
        }

        // Results -> avatar picker
        if let Some(btn) = document.query_selector("#end-screen button").ok().flatten() {
            on_click(&btn, move || {
                let mut a = app.borrow_mut();
                a.game.open_avatar_picker();
                if let Some(document) = current_document() {
                    sync_screens(&document, a.game.screen(), a.game.high_score());
                }
            });
        }
    }

    fn setup_input_handlers(document: &Document, app: Rc<RefCell<App>>) {
        {
            let app = app.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                app.borrow_mut().game.input.key_down(&event.code());
            });
            let _ = document
                .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
            closure.forget();
        }
        {
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                app.borrow_mut().game.input.key_up(&event.code());
            });
            let _ = document
                .add_event_listener_with_callback("keyup", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    pub fn run() {
        console_error_panic_hook::set_once();
        let _ = console_log::init_with_level(log::Level::Info);
        log::info!("Emoji Dash starting...");

        let Some(document) = current_document() else {
            log::error!("No document");
            return;
        };
        let Some(canvas) = document
            .get_element_by_id("game")
            .and_then(|el| el.dyn_into::<HtmlCanvasElement>().ok())
        else {
            log::error!("Canvas #game not found");
            return;
        };
        let Some(ctx) = canvas
            .get_context("2d")
            .ok()
            .flatten()
            .and_then(|c| c.dyn_into::<CanvasRenderingContext2d>().ok())
        else {
            log::error!("Canvas 2D context unavailable");
            return;
        };

        let playfield = Playfield::new(canvas.width() as f32, canvas.height() as f32);
        let game = Game::new(LocalStorage::new(), playfield);
        sync_screens(&document, game.screen(), game.high_score());

        let app = Rc::new(RefCell::new(App { game, canvas, ctx }));
        setup_input_handlers(&document, app.clone());
        setup_menu_handlers(&document, app);

        log::info!("Emoji Dash ready");
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    wasm_game::run();
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use emoji_dash::consts::DEFAULT_AVATAR;
    use emoji_dash::persistence::FileStore;
    use emoji_dash::platform::run_seed;
    use emoji_dash::sim::{GameEvent, Playfield};
    use emoji_dash::{Game, Tuning};

    /// Give up eventually; the autopilot can survive a long time
    const MAX_FRAMES: u64 = 60 * 60 * 10;

    env_logger::init();
    log::info!("Emoji Dash (native) starting...");
    log::info!("Native mode is a headless autopilot demo - build for wasm32 to play");

    let glyph = std::env::args()
        .nth(1)
        .unwrap_or_else(|| DEFAULT_AVATAR.to_string());
    let tuning = std::env::var("EMOJI_DASH_TUNING")
        .ok()
        .and_then(|json| Tuning::from_json(&json))
        .unwrap_or_default();
    let store = FileStore::new(std::env::temp_dir().join("emoji-dash"));
    let mut game = Game::with_tuning(store, Playfield::new(800.0, 400.0), tuning);
    println!("High score so far: {}", game.high_score());

    game.open_avatar_picker();
    game.choose_avatar(&glyph, run_seed());

    for _ in 0..MAX_FRAMES {
        if autopilot_wants_jump(&game) {
            game.input.key_down("Space");
        } else {
            game.input.key_up("Space");
        }

        if let Some(GameEvent::GameOver {
            final_score,
            high_score,
        }) = game.frame()
        {
            println!("{glyph} crashed! Score: {final_score}, High Score: {high_score}");
            return;
        }
    }

    let score = game.run().map(|r| r.score.score()).unwrap_or(0);
    println!("{glyph} was still running after {MAX_FRAMES} frames (score {score})");
}

/// Hold jump while an obstacle is about to reach the avatar
#[cfg(not(target_arch = "wasm32"))]
fn autopilot_wants_jump<S: emoji_dash::persistence::KeyValueStore>(
    game: &emoji_dash::Game<S>,
) -> bool {
    let Some(run) = game.run() else {
        return false;
    };
    let avatar = &run.avatar;
    let front = avatar.pos.x + avatar.width;
    let lookahead = run.game_speed * 6.0;
    run.obstacles.iter().any(|o| {
        let gap = o.pos.x - front;
        gap < lookahead && o.pos.x + o.size.x > avatar.pos.x
    })
}
