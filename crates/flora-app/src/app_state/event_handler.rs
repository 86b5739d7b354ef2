//! `ApplicationHandler` implementation for the winit event loop.

use std::time::Instant;

use winit::application::ApplicationHandler;
use winit::event::{ElementState, KeyEvent, MouseButton, WindowEvent};
use winit::event_loop::{ActiveEventLoop, ControlFlow};
use winit::keyboard::{Key, NamedKey};
use winit::window::WindowId;

use flora_renderer::{EventOutcome, InputEvent};

use super::core::FloraApp;

impl ApplicationHandler for FloraApp {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        event_loop.set_control_flow(ControlFlow::Wait);

        if !self.initialize_window(event_loop) {
            self.failed = true;
            event_loop.exit();
            return;
        }

        // The window is on screen: start the loop
        self.dispatch_input(InputEvent::Visibility(true));
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::CloseRequested => {
                tracing::info!("Window close requested");
                event_loop.exit();
            }

            WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        logical_key: Key::Named(NamedKey::Escape),
                        state: ElementState::Pressed,
                        ..
                    },
                ..
            } => {
                tracing::info!("Escape pressed, exiting");
                event_loop.exit();
            }

            WindowEvent::Resized(size) if size.width == 0 || size.height == 0 => {
                // Minimized
                self.timer.reset_gap();
                self.dispatch_input(InputEvent::Visibility(false));
            }

            WindowEvent::Resized(size) => {
                let scale_factor = self
                    .window
                    .as_ref()
                    .map(|w| w.scale_factor())
                    .unwrap_or(1.0);
                self.dispatch_input(InputEvent::Resized {
                    width: size.width,
                    height: size.height,
                    scale_factor,
                });
                if !self.occluded {
                    self.dispatch_input(InputEvent::Visibility(true));
                }
            }

            WindowEvent::CursorMoved { position, .. } => {
                self.dispatch_input(InputEvent::PointerMoved {
                    x: position.x,
                    y: position.y,
                });
            }

            WindowEvent::MouseInput {
                state,
                button: MouseButton::Left,
                ..
            } => {
                self.dispatch_input(InputEvent::PointerButton {
                    pressed: state == ElementState::Pressed,
                });
            }

            WindowEvent::Occluded(occluded) => {
                tracing::debug!(occluded, "window visibility changed");
                self.occluded = occluded;
                if occluded {
                    self.timer.reset_gap();
                }
                self.dispatch_input(InputEvent::Visibility(!occluded));
            }

            WindowEvent::RedrawRequested => {
                if !self.render_frame() {
                    self.failed = true;
                    event_loop.exit();
                }
            }

            _ => {}
        }
    }
}

impl FloraApp {
    /// Feed one input event to the frame driver and schedule a redraw if asked.
    fn dispatch_input(&mut self, event: InputEvent) {
        let (Some(driver), Some(scene)) = (self.driver.as_mut(), self.scene.as_mut()) else {
            return;
        };
        if driver.handle_event(event, Instant::now(), scene) == EventOutcome::ScheduleTick {
            self.request_redraw();
        }
    }
}
