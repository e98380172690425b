/// Freshness of the local collection relative to the remote store.
///
/// Replaces the original's independent stale/in-flight booleans with one
/// tagged state so that "stale while fetching" and similar combinations
/// cannot be represented twice over.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncPhase {
    /// The local copy may not reflect the remote store and must be
    /// refreshed before being trusted.
    Stale,
    /// Exactly one refresh is outstanding. `was_stale` records the phase
    /// on entry so a failed fetch restores it.
    Fetching { was_stale: bool },
    /// The local copy reflects the last authoritative response.
    Fresh,
}

/// Decides when to fetch, prevents overlapping fetches, and tracks data
/// freshness.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyncState {
    phase: SyncPhase,
    view_active: bool,
    initializing: bool,
    /// Last observed printer state; `None` until the first report, so the
    /// first report always counts as a flip.
    printing: Option<bool>,
}

impl Default for SyncState {
    fn default() -> Self {
        Self {
            phase: SyncPhase::Stale,
            view_active: false,
            initializing: true,
            printing: None,
        }
    }
}

impl SyncState {
    pub fn phase(&self) -> SyncPhase {
        self.phase
    }

    pub fn is_fetching(&self) -> bool {
        matches!(self.phase, SyncPhase::Fetching { .. })
    }

    /// True until the first fetch attempt has completed, success or
    /// failure.
    pub fn is_initializing(&self) -> bool {
        self.initializing
    }

    pub fn view_active(&self) -> bool {
        self.view_active
    }

    /// Flags the local copy as untrustworthy. An in-flight fetch stays in
    /// flight; its success will still deliver fresh data.
    pub fn mark_stale(&mut self) {
        self.phase = match self.phase {
            SyncPhase::Fetching { .. } => SyncPhase::Fetching { was_stale: true },
            _ => SyncPhase::Stale,
        };
    }

    /// Records that the collection now holds a full authoritative
    /// response (a mutation's success payload).
    pub fn mark_fresh(&mut self) {
        self.phase = match self.phase {
            SyncPhase::Fetching { .. } => SyncPhase::Fetching { was_stale: false },
            _ => SyncPhase::Fresh,
        };
    }

    /// Decides whether a refresh may be issued right now.
    ///
    /// While the queue panel is hidden the work is deferred: the data is
    /// marked stale and no request goes out. While a fetch is in flight
    /// the request is dropped (single-flight). Otherwise the state enters
    /// `Fetching` and the caller must issue the request.
    pub fn begin_refresh(&mut self) -> bool {
        if !self.view_active {
            self.mark_stale();
            return false;
        }
        if self.is_fetching() {
            return false;
        }
        self.phase = SyncPhase::Fetching {
            was_stale: self.phase == SyncPhase::Stale,
        };
        true
    }

    /// Completes the outstanding fetch. Success lands on `Fresh`; failure
    /// restores the phase recorded when the fetch started, leaving the
    /// previous collection displayed and the refresh retryable.
    pub fn finish_refresh(&mut self, success: bool) {
        self.initializing = false;
        if let SyncPhase::Fetching { was_stale } = self.phase {
            self.phase = if success || !was_stale {
                SyncPhase::Fresh
            } else {
                SyncPhase::Stale
            };
        }
    }

    /// Sets the panel visibility. Returns whether becoming active must
    /// trigger an immediate refresh (stale data waiting for the panel).
    pub fn set_view_active(&mut self, active: bool) -> bool {
        self.view_active = active;
        active && self.phase == SyncPhase::Stale
    }

    /// Records a printer-state report. Returns whether the flag flipped
    /// since the last observation, which warrants a refresh.
    pub fn observe_printing(&mut self, printing: bool) -> bool {
        let flipped = self.printing != Some(printing);
        self.printing = Some(printing);
        flipped
    }
}
