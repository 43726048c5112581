use std::sync::Arc;
use std::time::Duration;

use chrono::{DateTime, FixedOffset};
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;
use tracing::{debug, info, trace};

use crate::clock::Clock;
use crate::countdown::compute_snapshot;
use crate::models::CountdownSnapshot;
use crate::store::ScheduleStore;

pub const DEFAULT_PERIOD: Duration = Duration::from_secs(1);

/// A snapshot together with the instant it was computed for.
#[derive(Debug, Clone, PartialEq)]
pub struct Tick {
    pub at: DateTime<FixedOffset>,
    pub snapshot: CountdownSnapshot,
}

impl Tick {
    // One tick's worth of work: read the store, read the clock, compute.
    pub fn compute(store: &ScheduleStore, clock: &dyn Clock) -> Self {
        let at = clock.now();
        Self {
            at,
            snapshot: compute_snapshot(&store.current(), at),
        }
    }
}

/// Running tick task. Dropping the handle stops the task.
#[derive(Debug)]
pub struct TickerHandle {
    rx: watch::Receiver<Tick>,
    task: JoinHandle<()>,
}

impl TickerHandle {
    pub fn subscribe(&self) -> watch::Receiver<Tick> {
        self.rx.clone()
    }

    pub fn latest(&self) -> Tick {
        self.rx.borrow().clone()
    }
}

impl Drop for TickerHandle {
    fn drop(&mut self) {
        self.task.abort();
    }
}

// Start recomputing the countdown every `period`.
// The first snapshot is computed before returning so `latest` is never stale-empty.
pub fn spawn(store: ScheduleStore, clock: Arc<dyn Clock>, period: Duration) -> TickerHandle {
    let initial = Tick::compute(&store, clock.as_ref());
    let (tx, rx) = watch::channel(initial);
    let task = tokio::spawn(run(store, clock, period, tx));
    debug!(period_ms = period.as_millis() as u64, "ticker started");
    TickerHandle { rx, task }
}

async fn run(
    store: ScheduleStore,
    clock: Arc<dyn Clock>,
    period: Duration,
    tx: watch::Sender<Tick>,
) {
    let mut interval = tokio::time::interval(period);
    interval.set_missed_tick_behavior(MissedTickBehavior::Skip);

    let mut last_phase = tx.borrow().snapshot.day_phase;

    loop {
        interval.tick().await;

        let tick = Tick::compute(&store, clock.as_ref());
        let phase = tick.snapshot.day_phase;
        if phase != last_phase {
            info!(from = ?last_phase, to = ?phase, at = %tick.at, "day phase changed");
            last_phase = phase;
        }
        trace!(
            phase = ?phase,
            to_end = ?tick.snapshot.time_to_end,
            days_left = ?tick.snapshot.year_days_remaining,
            "tick"
        );

        if tx.send(tick).is_err() {
            debug!("no receivers left, ticker exiting");
            break;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::FixedClock;
    use crate::models::{DayPhase, Hms, ScheduleConfig};

    fn at(s: &str) -> DateTime<FixedOffset> {
        DateTime::parse_from_rfc3339(s).unwrap()
    }

    fn config() -> ScheduleConfig {
        ScheduleConfig::new("2024-09-01", "2025-06-01", "08:00", "15:00")
    }

    #[tokio::test(start_paused = true)]
    async fn initial_snapshot_is_available_immediately() {
        let store = ScheduleStore::with_config(config());
        let clock = FixedClock::new(at("2024-09-02T07:00:00+00:00"));
        let handle = spawn(store, Arc::new(clock), DEFAULT_PERIOD);

        let latest = handle.latest().snapshot;
        assert_eq!(latest.day_phase, Some(DayPhase::BeforeStart));
        assert_eq!(latest.time_to_start, Some(Hms::new(1, 0, 0)));
    }

    #[tokio::test(start_paused = true)]
    async fn picks_up_store_and_clock_changes() {
        let store = ScheduleStore::new();
        let clock = FixedClock::new(at("2024-09-02T07:00:00+00:00"));
        let handle = spawn(store.clone(), Arc::new(clock.clone()), DEFAULT_PERIOD);
        assert!(!handle.latest().snapshot.is_configured());

        store.replace(config());
        let mut rx = handle.subscribe();
        rx.changed().await.unwrap();
        assert_eq!(rx.borrow().snapshot.day_phase, Some(DayPhase::BeforeStart));

        clock.set(at("2024-09-02T08:00:00+00:00"));
        rx.changed().await.unwrap();
        assert_eq!(rx.borrow().snapshot.day_phase, Some(DayPhase::InSession));
        assert_eq!(rx.borrow().at, at("2024-09-02T08:00:00+00:00"));

        clock.set(at("2024-09-02T15:00:01+00:00"));
        rx.changed().await.unwrap();
        assert_eq!(rx.borrow().snapshot.day_phase, Some(DayPhase::AfterEnd));
    }

    #[tokio::test(start_paused = true)]
    async fn dropping_the_handle_stops_the_task() {
        let store = ScheduleStore::with_config(config());
        let clock = FixedClock::new(at("2024-09-02T07:00:00+00:00"));
        let handle = spawn(store, Arc::new(clock), DEFAULT_PERIOD);

        let mut rx = handle.subscribe();
        drop(handle);

        // Sender goes away with the aborted task.
        while rx.changed().await.is_ok() {}
    }
}
