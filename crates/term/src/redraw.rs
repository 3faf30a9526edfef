/// Decides when the board needs to be drawn again.
///
/// The board only changes in response to input, so a frame is drawn when its
/// fingerprint differs from the last one drawn, and otherwise at most once per
/// `refresh_interval_ms` to repair whatever else scribbled on the terminal.
#[derive(Debug, Clone)]
pub struct RedrawGate {
    refresh_interval_ms: u64,
    last_draw_ms: u64,
    last_fingerprint: Option<u64>,
}

impl RedrawGate {
    pub fn new(refresh_interval_ms: u64) -> Self {
        Self {
            refresh_interval_ms,
            last_draw_ms: 0,
            last_fingerprint: None,
        }
    }

    /// Forget the last frame so the next call draws.
    pub fn invalidate(&mut self) {
        self.last_fingerprint = None;
    }

    pub fn should_draw(&mut self, now_ms: u64, fingerprint: u64) -> bool {
        let stale = now_ms.saturating_sub(self.last_draw_ms) >= self.refresh_interval_ms;
        if self.last_fingerprint == Some(fingerprint) && !stale {
            return false;
        }
        self.last_draw_ms = now_ms;
        self.last_fingerprint = Some(fingerprint);
        true
    }
}
