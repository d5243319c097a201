pub mod evaluator;
pub mod gate;
pub mod guard;

pub use evaluator::{AccessSnapshot, PermissionEvaluator};
pub use gate::{GateOutcome, GateSpec, RenderGate};
pub use guard::{Decision, RouteGuard, decide};
