use glam::Vec2;
use winit::event::WindowEvent;

/// Immutable view of the input state, read by the scheduler at tick start
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct InputSnapshot {
    /// Pointer position normalized to -1..1 on both axes, 0 at center
    pub pointer: Vec2,
}

/// Map a pixel-space cursor position to the -1..1 range
///
/// A degenerate viewport yields the centered pointer rather than NaN.
pub fn normalize_pointer(cursor: (f32, f32), viewport: (f32, f32)) -> Vec2 {
    if viewport.0 <= 0.0 || viewport.1 <= 0.0 {
        return Vec2::ZERO;
    }
    Vec2::new(
        (cursor.0 / viewport.0 - 0.5) * 2.0,
        (cursor.1 / viewport.1 - 0.5) * 2.0,
    )
}

/// Adapter that folds winit cursor and resize events into a pointer state
///
/// Single writer (the event loop), single reader (the renderer tick); the
/// renderer never sees a pointer older than one tick.
#[derive(Debug, Clone)]
pub struct PointerTracker {
    viewport: (f32, f32),
    pointer: Vec2,
}

impl PointerTracker {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            viewport: (width as f32, height as f32),
            pointer: Vec2::ZERO,
        }
    }

    /// Fold one window event into the tracked state
    pub fn process_event(&mut self, event: &WindowEvent) {
        match event {
            WindowEvent::CursorMoved { position, .. } => {
                self.set_cursor(position.x as f32, position.y as f32);
            }
            WindowEvent::Resized(size) => {
                self.set_viewport(size.width, size.height);
            }
            _ => {}
        }
    }

    pub fn set_viewport(&mut self, width: u32, height: u32) {
        self.viewport = (width as f32, height as f32);
    }

    pub fn set_cursor(&mut self, x: f32, y: f32) {
        self.pointer = normalize_pointer((x, y), self.viewport);
    }

    pub fn snapshot(&self) -> InputSnapshot {
        InputSnapshot {
            pointer: self.pointer,
        }
    }
}
