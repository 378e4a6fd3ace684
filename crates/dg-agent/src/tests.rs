//! Unit tests for dg-agent.

#[cfg(test)]
mod store {
    use dg_core::{AgentId, WorldPoint};

    use crate::AgentStoreBuilder;

    #[test]
    fn builder_allocates_all_arrays() {
        let (store, rngs) = AgentStoreBuilder::new(5, 7).build();
        assert_eq!(store.count, 5);
        assert_eq!(store.world_pos.len(), 5);
        assert_eq!(rngs.len(), 5);
        assert!(!store.is_empty());
    }

    #[test]
    fn empty_store() {
        let (store, rngs) = AgentStoreBuilder::new(0, 0).build();
        assert!(store.is_empty());
        assert!(rngs.is_empty());
        assert_eq!(store.agent_ids().count(), 0);
    }

    #[test]
    fn agent_ids_ascending() {
        let (store, _) = AgentStoreBuilder::new(3, 0).build();
        let ids: Vec<_> = store.agent_ids().collect();
        assert_eq!(ids, vec![AgentId(0), AgentId(1), AgentId(2)]);
    }

    #[test]
    fn position_writes_visible() {
        let (mut store, _) = AgentStoreBuilder::new(2, 0).build();
        store.world_pos[1] = WorldPoint::new(4.5, -2.0);
        assert_eq!(store.position(AgentId(1)), WorldPoint::new(4.5, -2.0));
        assert_eq!(store.position(AgentId(0)), WorldPoint::default());
    }

    #[test]
    fn rngs_independent_per_agent() {
        let (_, mut rngs) = AgentStoreBuilder::new(2, 99).build();
        let a: u64 = rngs.get_mut(AgentId(0)).random();
        let b: u64 = rngs.get_mut(AgentId(1)).random();
        assert_ne!(a, b);
    }
}
