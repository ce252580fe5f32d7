use winit::event::WindowEvent;

use super::ctx::{FrameCtx, WindowCtx};

/// Returned by application callbacks.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum AppControl {
    Continue,
    Exit,
}

pub trait App {
    /// Raw window events (keyboard, mouse, focus). Resize and close are also
    /// handled by the runtime after this returns.
    fn on_window_event(&mut self, window: &WindowCtx<'_>, event: &WindowEvent) -> AppControl {
        let _ = (window, event);
        AppControl::Continue
    }

    /// Called once per redraw.
    fn on_frame(&mut self, ctx: &mut FrameCtx<'_, '_>) -> AppControl;
}
