// Action planning: the 9-box decision table, retention composition,
// plan-type policy and progress tracking. All pure; "now" is passed in.

pub mod handlers;
pub mod policy;
pub mod progress;
pub mod retention;
pub mod templates;
