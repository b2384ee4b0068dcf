//! Terminal presentation of session frames.

use std::io::{self, Write};

use anyhow::Result;

use crate::core::GameSnapshot;
use crate::engine::FrameSink;
use crate::term::{FrameBuffer, GameView, TerminalRenderer, Viewport};

/// [`FrameSink`] that renders snapshots with [`GameView`] and flushes them
/// through a [`TerminalRenderer`].
pub struct TerminalSink<W: Write = io::Stdout> {
    renderer: TerminalRenderer<W>,
    view: GameView,
    fb: FrameBuffer,
    fixed_viewport: Option<Viewport>,
}

impl TerminalSink<io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(TerminalRenderer::new())
    }
}

impl<W: Write> TerminalSink<W> {
    pub fn new(renderer: TerminalRenderer<W>) -> Self {
        Self {
            renderer,
            view: GameView::default(),
            fb: FrameBuffer::new(0, 0),
            fixed_viewport: None,
        }
    }

    /// Render at a fixed size instead of querying the terminal.
    pub fn with_viewport(mut self, viewport: Viewport) -> Self {
        self.fixed_viewport = Some(viewport);
        self
    }

    pub fn renderer(&self) -> &TerminalRenderer<W> {
        &self.renderer
    }

    pub fn renderer_mut(&mut self) -> &mut TerminalRenderer<W> {
        &mut self.renderer
    }

    fn viewport(&self) -> Viewport {
        self.fixed_viewport.unwrap_or_else(|| {
            let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
            Viewport::new(w, h)
        })
    }
}

impl<W: Write> FrameSink for TerminalSink<W> {
    fn present(&mut self, snap: &GameSnapshot) -> Result<()> {
        let viewport = self.viewport();
        self.view.render_into(snap, viewport, &mut self.fb);
        self.renderer.draw_swap(&mut self.fb)
    }
}
