//! Narrative analysis pipeline.
//!
//! Flow: claim the employee slot → primary analyzer under a timeout →
//! keyword fallback on any failure → cancellation check → result.
//!
//! At most one analysis per employee is in flight; a second request for the
//! same employee is rejected rather than queued. A cancelled request never
//! yields a result, so nothing downstream can persist it.

use std::collections::HashSet;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use tokio_util::sync::CancellationToken;
use tracing::{info, warn};
use uuid::Uuid;

use crate::analysis::fallback::KeywordNarrativeAnalyzer;
use crate::analysis::{AnalysisRequest, NarrativeAnalysis, NarrativeAnalyzer};
use crate::clock::Clock;
use crate::errors::EngineError;

pub struct NarrativeAnalysisPipeline {
    primary: Arc<dyn NarrativeAnalyzer>,
    fallback: KeywordNarrativeAnalyzer,
    timeout: Duration,
    clock: Arc<dyn Clock>,
    in_flight: Arc<Mutex<HashSet<Uuid>>>,
}

/// Releases the employee's in-flight slot on drop, including when the
/// request future is dropped mid-flight.
struct InFlightGuard {
    employee_id: Uuid,
    in_flight: Arc<Mutex<HashSet<Uuid>>>,
}

impl Drop for InFlightGuard {
    fn drop(&mut self) {
        let mut set = self.in_flight.lock().unwrap_or_else(|p| p.into_inner());
        set.remove(&self.employee_id);
    }
}

impl NarrativeAnalysisPipeline {
    pub fn new(primary: Arc<dyn NarrativeAnalyzer>, clock: Arc<dyn Clock>, timeout: Duration) -> Self {
        Self {
            primary,
            fallback: KeywordNarrativeAnalyzer,
            timeout,
            clock,
            in_flight: Arc::new(Mutex::new(HashSet::new())),
        }
    }

    fn claim(&self, employee_id: Uuid) -> Result<InFlightGuard, EngineError> {
        let mut set = self.in_flight.lock().unwrap_or_else(|p| p.into_inner());
        if !set.insert(employee_id) {
            return Err(EngineError::AnalysisInFlight(employee_id));
        }
        Ok(InFlightGuard {
            employee_id,
            in_flight: Arc::clone(&self.in_flight),
        })
    }

    #[cfg(test)]
    pub fn is_in_flight(&self, employee_id: Uuid) -> bool {
        self.in_flight
            .lock()
            .unwrap_or_else(|p| p.into_inner())
            .contains(&employee_id)
    }

    /// Runs the analysis. Service failures never surface here: the only
    /// errors are the in-flight rejection and cancellation.
    pub async fn analyze(
        &self,
        request: &AnalysisRequest,
        cancel: &CancellationToken,
    ) -> Result<NarrativeAnalysis, EngineError> {
        let employee_id = request.employee_id;
        let _guard = self.claim(employee_id)?;

        if cancel.is_cancelled() {
            return Err(EngineError::AnalysisCancelled(employee_id));
        }

        let now = self.clock.now();
        info!(
            "Analysing narrative for employee {} via {}",
            employee_id,
            self.primary.name()
        );

        let primary = tokio::select! {
            biased;
            _ = cancel.cancelled() => {
                return Err(EngineError::AnalysisCancelled(employee_id));
            }
            outcome = tokio::time::timeout(self.timeout, self.primary.analyze(request, now)) => outcome,
        };

        let analysis = match primary {
            Ok(Ok(analysis)) => analysis,
            Ok(Err(e)) => {
                warn!("Primary analysis failed for employee {employee_id}, using keyword fallback: {e}");
                self.fallback.analyze_offline(request, now)
            }
            Err(_) => {
                warn!(
                    "Primary analysis timed out after {}s for employee {employee_id}, using keyword fallback",
                    self.timeout.as_secs()
                );
                self.fallback.analyze_offline(request, now)
            }
        };

        if cancel.is_cancelled() {
            info!("Discarding analysis for employee {employee_id}: request cancelled");
            return Err(EngineError::AnalysisCancelled(employee_id));
        }

        info!(
            "Analysis for employee {} complete: box {} ({:?}, confidence {})",
            employee_id, analysis.box_key, analysis.source, analysis.confidence
        );
        Ok(analysis)
    }
}
