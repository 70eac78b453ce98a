use chrono::{DateTime, TimeDelta, Utc};
use tracing::debug;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PreloaderConfig {
    pub min_dwell: TimeDelta,
    pub fade_out: TimeDelta,
}

impl Default for PreloaderConfig {
    fn default() -> Self {
        PreloaderConfig {
            min_dwell: TimeDelta::milliseconds(2000),
            fade_out: TimeDelta::milliseconds(500),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    // only the splash is on screen
    Splash,
    // the page is mounted underneath and the splash is fading away
    FadingOut,
    Open,
}

// the splash screen gate
//
// the gate opens at max(mounted_at + min_dwell, ready_at) and is fully gone fade_out later.
// the phase is a pure function of the clock, so a fade that never gets to finish animating
// (hidden tab, dropped frames) still ends with the gate open
#[derive(Clone, Debug)]
pub struct PreloaderGate {
    mounted_at: DateTime<Utc>,
    config: PreloaderConfig,
    ready_at: Option<DateTime<Utc>>,
    forced_open: bool,
}

impl PreloaderGate {
    pub fn new(mounted_at: DateTime<Utc>, config: PreloaderConfig) -> Self {
        PreloaderGate {
            mounted_at,
            config,
            ready_at: None,
            forced_open: false,
        }
    }

    pub fn config(&self) -> PreloaderConfig {
        self.config
    }

    pub fn mark_ready(&mut self, now: DateTime<Utc>) {
        if self.ready_at.is_none() {
            debug!(after_ms = (now - self.mounted_at).num_milliseconds(), "content ready");
            self.ready_at = Some(now);
        }
    }

    pub fn is_ready(&self) -> bool {
        self.ready_at.is_some()
    }

    // cut a running fade short.  this never shortens the dwell itself: during the splash
    // phase it does nothing and returns false
    pub fn finish_fade(&mut self, now: DateTime<Utc>) -> bool {
        if self.phase(now) != Phase::FadingOut {
            return false;
        }

        debug!("fade cut short, opening");
        self.forced_open = true;
        true
    }

    pub fn release_at(&self) -> Option<DateTime<Utc>> {
        let earliest = self.mounted_at + self.config.min_dwell;
        self.ready_at.map(|ready| ready.max(earliest))
    }

    pub fn phase(&self, now: DateTime<Utc>) -> Phase {
        if self.forced_open {
            return Phase::Open;
        }

        match self.release_at() {
            None => Phase::Splash,
            Some(release) if now < release => Phase::Splash,
            Some(release) if now < release + self.config.fade_out => Phase::FadingOut,
            Some(_) => Phase::Open,
        }
    }

    pub fn shows_content(&self, now: DateTime<Utc>) -> bool {
        self.phase(now) != Phase::Splash
    }

    pub fn shows_splash(&self, now: DateTime<Utc>) -> bool {
        self.phase(now) != Phase::Open
    }

    // when the phase will next change, if that is already known
    pub fn next_wakeup(&self, now: DateTime<Utc>) -> Option<DateTime<Utc>> {
        let release = self.release_at()?;

        match self.phase(now) {
            Phase::Splash => Some(release),
            Phase::FadingOut => Some(release + self.config.fade_out),
            Phase::Open => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    fn at(ms: i64) -> DateTime<Utc> {
        Utc.timestamp_millis_opt(1_700_000_000_000 + ms).unwrap()
    }

    #[test]
    fn minimum_dwell_is_enforced() {
        let mut gate = PreloaderGate::new(at(0), PreloaderConfig::default());
        gate.mark_ready(at(0));

        assert_eq!(gate.phase(at(1999)), Phase::Splash);
        assert!(!gate.shows_content(at(1999)));

        assert_eq!(gate.phase(at(2000)), Phase::FadingOut);
        assert!(gate.shows_content(at(2000)));
        assert!(gate.shows_splash(at(2000)));

        assert_eq!(gate.phase(at(2500)), Phase::Open);
        assert!(gate.shows_content(at(2500)));
        assert!(!gate.shows_splash(at(2500)));
    }

    #[test]
    fn late_content_holds_the_splash() {
        let mut gate = PreloaderGate::new(at(0), PreloaderConfig::default());

        assert_eq!(gate.phase(at(3000)), Phase::Splash);
        assert_eq!(gate.next_wakeup(at(3000)), None);

        gate.mark_ready(at(3200));
        assert_eq!(gate.phase(at(3200)), Phase::FadingOut);
        assert_eq!(gate.next_wakeup(at(3200)), Some(at(3700)));
        assert_eq!(gate.phase(at(3700)), Phase::Open);
    }

    #[test]
    fn readiness_is_recorded_once() {
        let mut gate = PreloaderGate::new(at(0), PreloaderConfig::default());
        gate.mark_ready(at(2500));
        gate.mark_ready(at(100));

        assert_eq!(gate.release_at(), Some(at(2500)));
    }

    #[test]
    fn wakeups_walk_through_the_phases() {
        let config = PreloaderConfig {
            min_dwell: TimeDelta::milliseconds(5000),
            fade_out: TimeDelta::milliseconds(250),
        };
        let mut gate = PreloaderGate::new(at(0), config);
        gate.mark_ready(at(10));

        assert_eq!(gate.next_wakeup(at(10)), Some(at(5000)));
        assert_eq!(gate.next_wakeup(at(5000)), Some(at(5250)));
        assert_eq!(gate.next_wakeup(at(5250)), None);
    }

    #[test]
    fn interrupted_fade_still_ends_open() {
        let mut gate = PreloaderGate::new(at(0), PreloaderConfig::default());
        gate.mark_ready(at(0));

        assert!(!gate.finish_fade(at(1000)));
        assert_eq!(gate.phase(at(1000)), Phase::Splash);

        assert!(gate.finish_fade(at(2100)));
        assert_eq!(gate.phase(at(2100)), Phase::Open);
        assert_eq!(gate.next_wakeup(at(2100)), None);
    }
}
