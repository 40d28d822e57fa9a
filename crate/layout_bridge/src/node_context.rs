use vizcore_state::EntityId;

/// Data stored alongside each `taffy` node, so a computed layout can be
/// mapped back onto the entity it belongs to.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NodeContext {
    pub entity_id: EntityId,
}
