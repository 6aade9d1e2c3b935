/// Trigger-file handoff and demo batch.
pub mod batch;
/// PNG and JSON sidecar persistence.
pub mod store;
