//! Prometheus metrics for the verification service.
//!
//! Counters cover verification outcomes, notification dispatches, and
//! collaborator failures; one histogram tracks end-to-end verification
//! latency. The [`ServiceMetrics`] struct owns a dedicated [`Registry`]
//! that callers can encode into the Prometheus text exposition format.

use prometheus::{
    register_histogram_with_registry, register_int_counter_with_registry, Histogram,
    HistogramOpts, IntCounter, Opts, Registry,
};

/// Central collection of all service-level Prometheus metrics.
pub struct ServiceMetrics {
    /// The Prometheus registry that owns every metric below.
    pub registry: Registry,

    // ── Counters ────────────────────────────────────────────────────────
    /// Total verifications that ran to a verdict.
    pub verifications_total: IntCounter,
    /// Verifications whose verdict passed.
    pub verifications_passed: IntCounter,
    /// Verifications whose verdict failed.
    pub verifications_failed: IntCounter,
    /// Accountability notifications accepted by the messenger.
    pub notifications_sent: IntCounter,
    /// Detection requests that failed (either provider).
    pub provider_errors: IntCounter,
    /// Notification dispatches that failed.
    pub notify_errors: IntCounter,

    // ── Histograms ──────────────────────────────────────────────────────
    /// End-to-end verification latency, in milliseconds.
    pub verification_latency_ms: Histogram,
}

impl ServiceMetrics {
    /// Create a fresh set of metrics, all registered under a new
    /// [`Registry`].
    pub fn new() -> Self {
        let registry = Registry::new();

        let verifications_total = register_int_counter_with_registry!(
            Opts::new(
                "ventus_verifications_total",
                "Total verifications that ran to a verdict"
            ),
            registry
        )
        .expect("failed to register verifications_total counter");

        let verifications_passed = register_int_counter_with_registry!(
            Opts::new(
                "ventus_verifications_passed_total",
                "Verifications whose verdict passed"
            ),
            registry
        )
        .expect("failed to register verifications_passed counter");

        let verifications_failed = register_int_counter_with_registry!(
            Opts::new(
                "ventus_verifications_failed_total",
                "Verifications whose verdict failed"
            ),
            registry
        )
        .expect("failed to register verifications_failed counter");

        let notifications_sent = register_int_counter_with_registry!(
            Opts::new(
                "ventus_notifications_sent_total",
                "Accountability notifications accepted by the messenger"
            ),
            registry
        )
        .expect("failed to register notifications_sent counter");

        let provider_errors = register_int_counter_with_registry!(
            Opts::new(
                "ventus_provider_errors_total",
                "Detection requests that failed"
            ),
            registry
        )
        .expect("failed to register provider_errors counter");

        let notify_errors = register_int_counter_with_registry!(
            Opts::new(
                "ventus_notify_errors_total",
                "Notification dispatches that failed"
            ),
            registry
        )
        .expect("failed to register notify_errors counter");

        // Exponential buckets covering 1 ms → ~16 s.
        let verification_latency_ms = register_histogram_with_registry!(
            HistogramOpts::new(
                "ventus_verification_latency_ms",
                "End-to-end verification latency in milliseconds"
            )
            .buckets(prometheus::exponential_buckets(1.0, 2.0, 15).unwrap()),
            registry
        )
        .expect("failed to register verification_latency_ms histogram");

        Self {
            registry,
            verifications_total,
            verifications_passed,
            verifications_failed,
            notifications_sent,
            provider_errors,
            notify_errors,
            verification_latency_ms,
        }
    }
}

impl Default for ServiceMetrics {
    fn default() -> Self {
        Self::new()
    }
}
