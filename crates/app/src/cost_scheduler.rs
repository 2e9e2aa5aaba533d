//! Periodic recomputation of event costs.
//!
//! Every `period` the scheduler asks the [`EventServices`] to recompute the
//! cost of the configured organizer's events. A failed run is logged and the
//! next tick proceeds as usual.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::watch;
use tokio::time::MissedTickBehavior;

use eventsproject_domain::error::EventsError;
use eventsproject_domain::participant::Organizer;

use crate::ports::EventServices;

/// Background job driving [`EventServices::calcul_cout`].
pub struct CostScheduler<S> {
    service: Arc<S>,
    organizer: Organizer,
    period: Duration,
}

impl<S> CostScheduler<S>
where
    S: EventServices + Send + Sync + 'static,
{
    /// Create a scheduler sharing `service` with the HTTP layer.
    pub fn new(service: Arc<S>, organizer: Organizer, period: Duration) -> Self {
        Self {
            service,
            organizer,
            period,
        }
    }

    /// Run a single recomputation and return how many events were updated.
    ///
    /// # Errors
    ///
    /// Propagates any error from the service.
    pub async fn tick(&self) -> Result<usize, EventsError> {
        let updated = self.service.calcul_cout(&self.organizer).await?;
        Ok(updated.len())
    }

    /// Loop until `shutdown` flips to `true` or its sender is dropped.
    ///
    /// The first recomputation happens immediately.
    pub async fn run(self, mut shutdown: watch::Receiver<bool>) {
        let mut interval = tokio::time::interval(self.period);
        interval.set_missed_tick_behavior(MissedTickBehavior::Delay);

        tracing::info!(period_secs = self.period.as_secs(), "cost scheduler started");
        loop {
            tokio::select! {
                _ = interval.tick() => {
                    match self.tick().await {
                        Ok(count) => tracing::debug!(count, "event costs recomputed"),
                        Err(err) => tracing::error!(error = %err, "event cost recomputation failed"),
                    }
                }
                changed = shutdown.changed() => {
                    if changed.is_err() || *shutdown.borrow() {
                        break;
                    }
                }
            }
        }
        tracing::info!("cost scheduler stopped");
    }
}
