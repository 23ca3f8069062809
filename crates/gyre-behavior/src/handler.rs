//! The four-method contract every behavior state implements.

use gyre_core::enums::BehaviorState;

use crate::context::BehaviorContext;

/// A behavior state handler.
///
/// Handlers are stateless; everything they need lives in the context.
/// The driver calls `update` once per frame, then `next_state`; when the
/// result differs from the current state it calls `exit` on this handler
/// and `enter` on the next one.
pub trait StateHandler {
    /// The state this handler drives. Used as the registry key.
    fn state_type(&self) -> BehaviorState;

    fn enter(&self, _ctx: &mut BehaviorContext<'_>) {}

    fn update(&self, ctx: &mut BehaviorContext<'_>, dt: f32);

    fn exit(&self, _ctx: &mut BehaviorContext<'_>) {}

    /// State the enemy should be in after this frame's update.
    fn next_state(&self, ctx: &BehaviorContext<'_>) -> BehaviorState;
}
