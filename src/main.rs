#![allow(dead_code)]

mod app;
mod audio;
mod camera;
mod components;
mod constants;
mod events;
mod grid;
mod input;
mod level_def;
mod systems;
mod typewriter;
mod ui;
mod voice;

use std::sync::Arc;
use std::time::Instant;

use camera::Camera;
use constants::*;
use grid::Grid;
use hecs::World;

use glutin::prelude::*;
use glutin::surface::WindowSurface;
use winit::application::ApplicationHandler;
use winit::event::{ElementState, WindowEvent};
use winit::event_loop::{ActiveEventLoop, EventLoop};
use winit::keyboard::{KeyCode, PhysicalKey};
use winit::window::{Window, WindowId};

use egui_glow::EguiGlow;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let event_loop = EventLoop::new()?;
    let mut app = App::new();
    event_loop.run_app(&mut app)?;
    Ok(())
}

struct App {
    state: Option<AppState>,
}

struct AppState {
    // Window and GL
    window: Window,
    gl_surface: glutin::surface::Surface<WindowSurface>,
    gl_context: glutin::context::PossiblyCurrentContext,
    gl: Arc<glow::Context>,
    egui_glow: EguiGlow,

    // World state
    camera: Camera,
    grid: Grid,
    world: World,
    player_entity: hecs::Entity,
    voices: voice::VoiceRegistry,

    // Dialogue state
    manager: systems::DialogueManager,
    dialogue_window: ui::DialogueWindow,
    interact_prompt: ui::InteractPrompt,
    overlap: systems::OverlapTracker,
    events: events::EventQueue,
    audio: audio::AudioOutput,

    // Input state
    input: input::InputState,
    paused: bool,
    show_zones: bool,

    // Timing
    last_frame_time: Instant,
}

impl App {
    fn new() -> Self {
        Self { state: None }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.state.is_some() {
            return;
        }

        // Create window and GL context
        let app::WindowContext {
            window,
            gl_surface,
            gl_context,
            gl,
            egui_glow,
        } = app::create_window(event_loop);

        // Build the level
        let mut world = World::new();
        let level = level_def::load_or_default(&mut world);

        let size = window.inner_size();
        let mut camera = Camera::new(size.width as f32, size.height as f32);
        if let Ok(pos) = world.get::<&components::Position>(level.player) {
            camera.jump_to(glam::Vec2::new(pos.x as f32 + 0.5, pos.y as f32 + 0.5));
        }

        self.state = Some(AppState {
            window,
            gl_surface,
            gl_context,
            gl,
            egui_glow,
            camera,
            grid: level.grid,
            world,
            player_entity: level.player,
            voices: level.voices,
            manager: systems::DialogueManager::new(),
            dialogue_window: ui::DialogueWindow::new(),
            interact_prompt: ui::InteractPrompt::new(),
            overlap: systems::OverlapTracker::new(),
            events: events::EventQueue::new(),
            audio: audio::AudioOutput::new(),
            input: input::InputState::new(),
            paused: false,
            show_zones: false,
            last_frame_time: Instant::now(),
        });
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        let state = match &mut self.state {
            Some(s) => s,
            None => return,
        };

        // Let egui handle the event first
        let egui_consumed = state.egui_glow.on_window_event(&state.window, &event);

        match event {
            WindowEvent::CloseRequested => {
                event_loop.exit();
            }
            WindowEvent::Resized(size) => {
                app::resize_surface(&state.gl_surface, &state.gl_context, size.width, size.height);
                state.camera.resize(size.width as f32, size.height as f32);
            }
            WindowEvent::KeyboardInput { event, .. } => {
                if !egui_consumed.consumed {
                    if let PhysicalKey::Code(key) = event.physical_key {
                        match event.state {
                            ElementState::Pressed => {
                                if key == KeyCode::Escape {
                                    event_loop.exit();
                                }
                                state.input.key_down(key);
                            }
                            ElementState::Released => {
                                state.input.key_up(key);
                            }
                        }
                    }
                }
            }
            WindowEvent::RedrawRequested => {
                state.update_and_render();
                state.window.request_redraw();
            }
            _ => {}
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(state) = &self.state {
            state.window.request_redraw();
        }
    }
}

impl AppState {
    fn update_and_render(&mut self) {
        puffin::profile_function!();

        let current_time = Instant::now();
        let raw_dt = (current_time - self.last_frame_time).as_secs_f32();
        self.last_frame_time = current_time;

        // Cap dt to prevent snapping after long frames
        let dt = raw_dt.min(MAX_ANIMATION_DT);

        self.handle_input();

        // Overlap detection and trigger reactions
        systems::detect_overlaps(&self.world, &mut self.overlap, &mut self.events);
        let fired: Vec<events::GameEvent> = self.events.drain().collect();
        for event in fired {
            match event {
                events::GameEvent::TriggerEntered { trigger, other } => {
                    systems::handle_trigger_entered(
                        &self.world,
                        &mut self.manager,
                        &mut self.interact_prompt,
                        trigger,
                        other,
                    );
                }
                events::GameEvent::TriggerExited { trigger, other } => {
                    systems::handle_trigger_exited(
                        &self.world,
                        &mut self.manager,
                        &mut self.interact_prompt,
                        trigger,
                        other,
                    );
                }
            }
        }

        // Advance the dialogue reveal and the prompt fade
        self.dialogue_window
            .tick(dt, self.paused, &self.voices, &mut self.audio);
        self.interact_prompt.update(dt);

        // Follow the player
        if let Ok(pos) = self.world.get::<&components::Position>(self.player_entity) {
            self.camera
                .follow(glam::Vec2::new(pos.x as f32 + 0.5, pos.y as f32 + 0.5), dt);
        }

        // Run UI
        let world = &self.world;
        let grid = &self.grid;
        let camera = &self.camera;
        let show_zones = self.show_zones;
        let paused = self.paused;
        let dialogue_window = &self.dialogue_window;
        let interact_prompt = &self.interact_prompt;

        self.egui_glow.run(&self.window, |ctx| {
            ui::draw_world(ctx, world, grid, camera, show_zones);
            interact_prompt.draw(ctx);
            dialogue_window.draw(ctx);
            ui::draw_controls_hint(ctx);
            if paused {
                ui::draw_pause_overlay(ctx);
            }
        });

        // Render
        unsafe {
            use glow::HasContext;
            self.gl.clear_color(0.05, 0.05, 0.06, 1.0);
            self.gl.clear(glow::COLOR_BUFFER_BIT);
        }
        self.egui_glow.paint(&self.window);
        self.gl_surface.swap_buffers(&self.gl_context).unwrap();
    }

    fn handle_input(&mut self) {
        let result = input::process_keyboard(&mut self.input);

        if result.toggle_fullscreen {
            use winit::window::Fullscreen;
            let fullscreen = if self.window.fullscreen().is_some() {
                None
            } else {
                Some(Fullscreen::Borderless(None))
            };
            self.window.set_fullscreen(fullscreen);
        }

        if result.toggle_pause {
            self.paused = !self.paused;
            log::info!("host pause: {}", self.paused);
        }

        if result.toggle_zones {
            self.show_zones = !self.show_zones;
        }

        if result.interact && !self.paused {
            if self.manager.is_dialogue_shown() {
                self.manager.skip_message(
                    &self.world,
                    &mut self.interact_prompt,
                    &mut self.dialogue_window,
                    &mut self.audio,
                );
            } else {
                self.manager.show_dialogue(
                    &self.world,
                    &mut self.interact_prompt,
                    &mut self.dialogue_window,
                    &mut self.audio,
                );
            }
        }

        // Walking is frozen while paused or while a dialogue is open
        if self.paused || self.manager.is_dialogue_shown() {
            return;
        }

        if let Some((dx, dy)) = result.movement {
            systems::try_move_player(&mut self.world, self.player_entity, &self.grid, dx, dy);
        }
    }
}
