//! Redraw throttling for the main loop.
//!
//! The loop wakes up for every input event and every tick. A frame is only
//! worth drawing when something visible changed (the fingerprint) or, while
//! the game is static (idle, paused, over), at a slow refresh cadence.

#[derive(Debug, Clone)]
pub struct RenderThrottle {
    static_refresh_ms: u64,
    /// `(drawn_at_ms, fingerprint)` of the last drawn frame.
    last: Option<(u64, u64)>,
}

impl RenderThrottle {
    pub fn new(static_refresh_ms: u64) -> Self {
        Self {
            static_refresh_ms,
            last: None,
        }
    }

    /// Decide whether to draw now, recording the frame if so.
    ///
    /// - first call: always draw
    /// - fingerprint changed: draw
    /// - unchanged and live (`is_static == false`): draw
    /// - unchanged and static: at most once per `static_refresh_ms`
    pub fn should_render(&mut self, now_ms: u64, fingerprint: u64, is_static: bool) -> bool {
        let draw = match self.last {
            None => true,
            Some((_, fp)) if fp != fingerprint => true,
            Some(_) if !is_static => true,
            Some((at, _)) => now_ms.saturating_sub(at) >= self.static_refresh_ms,
        };
        if draw {
            self.last = Some((now_ms, fingerprint));
        }
        draw
    }

    /// Forget the last frame so the next call draws.
    pub fn reset(&mut self) {
        self.last = None;
    }
}

/// Fingerprint of what the view depends on: session revision and viewport.
pub fn frame_fingerprint(revision: u64, width: u16, height: u16) -> u64 {
    revision
        .wrapping_mul(0x9E37_79B9_7F4A_7C15)
        ^ ((width as u64) << 16 | height as u64)
}
