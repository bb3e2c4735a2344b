use prometheus::{IntCounterVec, Opts, Registry};
use lazy_static::lazy_static;

pub const METRICS_NAMESPACE: &str = "kfservice_snapshot";

lazy_static! {
    pub static ref SNAPSHOTS: IntCounterVec = IntCounterVec::new(
      Opts::new("kfservice_snapshots", "working copies handed out of the KFService cache")
      .namespace(METRICS_NAMESPACE),
      &["kind"]
    ).unwrap();
    pub static ref ERRORS: IntCounterVec = IntCounterVec::new(
      Opts::new("errors", "kfservice-snapshot errors")
      .namespace(METRICS_NAMESPACE),
      &["name"]
    ).unwrap();
}

pub fn custom_metrics(registry: &Registry) -> Result<(), prometheus::Error> {
  registry.register(Box::new(SNAPSHOTS.clone()))?;
  registry.register(Box::new(ERRORS.clone()))?;
  Ok(())
}

pub fn snapshots_taken(kind: &str, count: usize) {
  SNAPSHOTS.with_label_values(&[kind]).inc_by(count as u64);
}

pub fn error_happened(name: &str) {
  ERRORS.with_label_values(&[name]).inc_by(1);
}
