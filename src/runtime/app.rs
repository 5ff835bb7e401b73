use std::rc::Rc;
use std::time::Instant;

use anyhow::Result;
use softbuffer::Context;
use winit::application::ApplicationHandler;
use winit::dpi::LogicalSize;
use winit::event::{ElementState, MouseButton, WindowEvent};
use winit::event_loop::{ActiveEventLoop, ControlFlow};
use winit::window::Window;

use crate::cli::StartupConfig;
use crate::gesture::PointerTracker;
use crate::hit_test::{route_gesture, GestureRegion, Point};
use crate::sheet::{SheetController, TabEntry};
use crate::view::{sheet_layout, tab_at_point, Renderer};

pub struct App {
    controller: SheetController<u32>,
    pointer: PointerTracker,
    renderer: Option<Renderer>,
    window: Option<Rc<Window>>,
    context: Option<Context<Rc<Window>>>,
    window_size: (u32, u32),
    cursor: Option<(f64, f64)>,
    active_region: Option<GestureRegion>,
    last_tick: Instant,
}

impl App {
    pub fn new(startup: StartupConfig) -> Self {
        let mut controller = SheetController::new(startup.sheet);
        controller.add_tab(TabEntry::new("songs", "Songs", 0xFF5B8266));
        controller.add_tab(TabEntry::new("albums", "Albums", 0xFF6E5B82));
        controller.add_tab(TabEntry::new("shows", "Shows", 0xFF82765B));
        controller.set_haptic_hook(|| tracing::debug!("haptic pulse"));

        Self {
            controller,
            pointer: PointerTracker::new(),
            renderer: None,
            window: None,
            context: None,
            window_size: startup.window_size,
            cursor: None,
            active_region: None,
            last_tick: Instant::now(),
        }
    }

    fn init_renderer(&mut self, window: Rc<Window>, context: &Context<Rc<Window>>) -> Result<()> {
        self.renderer = Some(Renderer::new(window, context)?);
        Ok(())
    }

    /// Handle a window event; returns true when a redraw is needed.
    fn handle_event(&mut self, event: &WindowEvent) -> bool {
        match event {
            WindowEvent::Resized(size) => {
                self.window_size = (size.width, size.height);
                true
            }
            WindowEvent::CursorMoved { position, .. } => {
                self.cursor = Some((position.x, position.y));
                match self.active_region {
                    Some(GestureRegion::Panel) => {
                        if let Some(sample) =
                            self.pointer.moved((position.x, position.y), Instant::now())
                        {
                            self.controller.on_gesture(sample)
                        } else {
                            false
                        }
                    }
                    Some(GestureRegion::Header) => {
                        // Keep folding velocity for the release decision; the
                        // header band never scrubs the sheet while held.
                        let _ = self.pointer.moved((position.x, position.y), Instant::now());
                        false
                    }
                    None => false,
                }
            }
            WindowEvent::MouseInput {
                state: ElementState::Pressed,
                button: MouseButton::Left,
                ..
            } => {
                if let Some((x, y)) = self.cursor {
                    let layout = sheet_layout(&self.controller, self.window_size);
                    self.active_region =
                        route_gesture(&layout, Point::new(x, y), self.controller.is_expanded());
                    if self.active_region.is_some() {
                        self.pointer.press((x, y), Instant::now());
                    }
                }
                false
            }
            WindowEvent::MouseInput {
                state: ElementState::Released,
                button: MouseButton::Left,
                ..
            } => {
                let region = self.active_region.take();
                let Some((x, y)) = self.cursor else {
                    return false;
                };
                match region {
                    Some(GestureRegion::Panel) => {
                        if let Some(sample) = self.pointer.release((x, y), Instant::now()) {
                            self.controller.on_gesture(sample)
                        } else {
                            // Plain tap: toggle the accordion row under the cursor.
                            match tab_at_point(&self.controller, self.window_size, Point::new(x, y))
                            {
                                Some(id) => {
                                    let id = id.to_string();
                                    self.controller.toggle_tab(&id)
                                }
                                None => false,
                            }
                        }
                    }
                    Some(GestureRegion::Header) => {
                        match self.pointer.release_header((x, y), Instant::now()) {
                            Some(release) => self.controller.on_header_release(release),
                            None => false,
                        }
                    }
                    None => false,
                }
            }
            WindowEvent::RedrawRequested => {
                if let Err(e) = self.render() {
                    eprintln!("Render error: {}", e);
                }
                false
            }
            _ => false,
        }
    }

    fn render(&mut self) -> Result<()> {
        if let Some(renderer) = &mut self.renderer {
            renderer.render(&self.controller, self.window_size)?;
        }
        Ok(())
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_none() {
            let (width, height) = self.window_size;
            let window_attributes = Window::default_attributes()
                .with_title("Peeksheet Demo")
                .with_inner_size(LogicalSize::new(width, height));

            let window = Rc::new(event_loop.create_window(window_attributes).unwrap());
            let context = Context::new(Rc::clone(&window)).unwrap();

            self.init_renderer(Rc::clone(&window), &context).unwrap();
            self.window = Some(window);
            self.context = Some(context);
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        window_id: winit::window::WindowId,
        event: WindowEvent,
    ) {
        let should_exit = matches!(event, WindowEvent::CloseRequested);
        let should_redraw = if let Some(window) = &self.window {
            if window_id == window.id() && !should_exit {
                self.handle_event(&event)
            } else {
                false
            }
        } else {
            false
        };

        if should_exit {
            event_loop.exit();
        } else if should_redraw {
            if let Some(window) = &self.window {
                window.request_redraw();
            }
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        event_loop.set_control_flow(ControlFlow::Poll);

        let now = Instant::now();
        let dt = now.duration_since(self.last_tick);
        self.last_tick = now;

        if self.controller.tick(dt) {
            if let Some(window) = &self.window {
                window.request_redraw();
            }
        }
    }
}
