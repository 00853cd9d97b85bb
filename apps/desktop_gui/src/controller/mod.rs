//! Controller layer: UI events and command orchestration around the intake
//! state machine.

pub mod events;
pub mod orchestration;
