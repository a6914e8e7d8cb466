// Assessment signals: grid placement, flight risk, review alignment and alerts.
// Everything here is synchronous and pure; callers pass snapshots and "now".

pub mod alerts;
pub mod alignment;
pub mod distribution;
pub mod flight_risk;
pub mod grid;
pub mod handlers;
