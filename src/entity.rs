//! Updatable entities and the collection that drives them
//!
//! One pass over an [`EntityList`] advances every entity once, in insertion
//! order. Entities spawned during the pass are appended at the end and are
//! advanced later in the same pass. Entities that report themselves finished
//! are dropped once the pass completes.

use anyhow::Context as _;

/// Something advanced (and drawn) once per tick.
///
/// `C` is the explicit per-tick context (canvas, palette, RNG, ...).
pub trait Entity<C> {
    /// Advance one tick. New entities go through `spawner`.
    fn advance(&mut self, ctx: &mut C, spawner: &mut Spawner<C>) -> anyhow::Result<()>;

    /// Once true, the entity is removed at the end of the current pass
    fn is_finished(&self) -> bool {
        false
    }
}

/// Collects entities created while another entity is being advanced
pub struct Spawner<C> {
    spawned: Vec<Box<dyn Entity<C>>>,
}

impl<C> Spawner<C> {
    fn new() -> Self {
        Self { spawned: Vec::new() }
    }

    pub fn spawn(&mut self, entity: impl Entity<C> + 'static) {
        self.spawned.push(Box::new(entity));
    }

    pub fn spawn_boxed(&mut self, entity: Box<dyn Entity<C>>) {
        self.spawned.push(entity);
    }

    /// Number of entities queued by the current visit
    pub fn pending(&self) -> usize {
        self.spawned.len()
    }
}

/// Counters for one pass
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PassSummary {
    /// Entities advanced, including ones spawned during the pass
    pub visited: usize,
    /// Entities dropped at compaction
    pub removed: usize,
}

/// Ordered, appendable set of entities
pub struct EntityList<C> {
    entities: Vec<Box<dyn Entity<C>>>,
}

impl<C> Default for EntityList<C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C> EntityList<C> {
    pub fn new() -> Self {
        Self { entities: Vec::new() }
    }

    /// Add an entity at the end (drawn last, on top)
    pub fn append(&mut self, entity: impl Entity<C> + 'static) {
        self.entities.push(Box::new(entity));
    }

    pub fn append_boxed(&mut self, entity: Box<dyn Entity<C>>) {
        self.entities.push(entity);
    }

    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    /// Advance every entity once, then drop finished ones.
    ///
    /// Walks by index and re-reads the length after each visit, so whatever
    /// a visit spawns is appended and visited before the pass ends. On error
    /// the pass stops immediately and nothing is removed.
    pub fn traverse(&mut self, ctx: &mut C) -> anyhow::Result<PassSummary> {
        let mut spawner = Spawner::new();
        let mut i = 0;
        while i < self.entities.len() {
            let result = self.entities[i].advance(ctx, &mut spawner);
            self.entities.append(&mut spawner.spawned);
            result.with_context(|| format!("entity #{i} failed to advance"))?;
            i += 1;
        }

        let before = self.entities.len();
        self.entities.retain(|e| !e.is_finished());
        let summary = PassSummary {
            visited: i,
            removed: before - self.entities.len(),
        };
        if summary.removed > 0 {
            log::debug!(
                "Pass visited {} entities, removed {}",
                summary.visited,
                summary.removed
            );
        }
        Ok(summary)
    }
}

/// Lists nest: a child list runs its own full pass when advanced
impl<C> Entity<C> for EntityList<C> {
    fn advance(&mut self, ctx: &mut C, _spawner: &mut Spawner<C>) -> anyhow::Result<()> {
        self.traverse(ctx).map(|_| ())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Records its id into the context on every visit
    struct Probe {
        id: u32,
        /// Ids to spawn on the first visit
        children: Vec<u32>,
        /// Finish during the visit with this pass number (1-based)
        finish_on_visit: Option<u32>,
        visits: u32,
        finished: bool,
    }

    impl Probe {
        fn new(id: u32) -> Self {
            Self {
                id,
                children: Vec::new(),
                finish_on_visit: None,
                visits: 0,
                finished: false,
            }
        }

        fn spawning(mut self, children: &[u32]) -> Self {
            self.children = children.to_vec();
            self
        }

        fn finishing_on(mut self, visit: u32) -> Self {
            self.finish_on_visit = Some(visit);
            self
        }
    }

    impl Entity<Vec<u32>> for Probe {
        fn advance(&mut self, log: &mut Vec<u32>, spawner: &mut Spawner<Vec<u32>>) -> anyhow::Result<()> {
            self.visits += 1;
            log.push(self.id);
            for id in self.children.drain(..) {
                spawner.spawn(Probe::new(id));
            }
            if self.finish_on_visit == Some(self.visits) {
                self.finished = true;
            }
            Ok(())
        }

        fn is_finished(&self) -> bool {
            self.finished
        }
    }

    struct Failing;

    impl Entity<Vec<u32>> for Failing {
        fn advance(&mut self, _: &mut Vec<u32>, _: &mut Spawner<Vec<u32>>) -> anyhow::Result<()> {
            anyhow::bail!("boom")
        }
    }

    #[test]
    fn test_spawned_during_pass_visited_in_same_pass() {
        let mut list = EntityList::new();
        list.append(Probe::new(0).spawning(&[1, 2, 3]));

        let mut log = Vec::new();
        let summary = list.traverse(&mut log).unwrap();
        assert_eq!(log, vec![0, 1, 2, 3]);
        assert_eq!(summary, PassSummary { visited: 4, removed: 0 });
        assert_eq!(list.len(), 4);

        // Each visited exactly once per pass
        log.clear();
        list.traverse(&mut log).unwrap();
        assert_eq!(log, vec![0, 1, 2, 3]);
    }

    #[test]
    fn test_spawn_chain_within_one_pass() {
        let mut list = EntityList::new();
        list.append(Probe::new(0).spawning(&[1]));
        list.append(Probe::new(5));

        let mut log = Vec::new();
        list.traverse(&mut log).unwrap();
        // Spawned entities go after everything already present
        assert_eq!(log, vec![0, 5, 1]);
    }

    #[test]
    fn test_finished_entity_removed_preserving_order() {
        let mut list = EntityList::new();
        list.append(Probe::new(10));
        list.append(Probe::new(11).finishing_on(1));
        list.append(Probe::new(12));

        let mut log = Vec::new();
        let summary = list.traverse(&mut log).unwrap();
        assert_eq!(log, vec![10, 11, 12]);
        assert_eq!(summary.removed, 1);

        log.clear();
        list.traverse(&mut log).unwrap();
        assert_eq!(log, vec![10, 12]);
    }

    #[test]
    fn test_spawned_and_finished_in_same_pass() {
        let mut list = EntityList::new();
        let mut log = Vec::new();
        list.append(Probe::new(0).spawning(&[1]).finishing_on(1));
        list.traverse(&mut log).unwrap();
        assert_eq!(log, vec![0, 1]);
        assert_eq!(list.len(), 1);
    }

    #[test]
    fn test_error_aborts_pass_without_compaction() {
        let mut list = EntityList::new();
        list.append(Probe::new(0).finishing_on(1));
        list.append(Failing);
        list.append(Probe::new(2));

        let mut log = Vec::new();
        let err = list.traverse(&mut log).unwrap_err();
        assert!(format!("{err:#}").contains("boom"));
        assert_eq!(log, vec![0]);
        assert_eq!(list.len(), 3);
    }

    #[test]
    fn test_nested_lists() {
        let mut inner = EntityList::new();
        inner.append(Probe::new(1).spawning(&[2]));
        let mut outer = EntityList::new();
        outer.append(inner);
        outer.append(Probe::new(3));

        let mut log = Vec::new();
        let summary = outer.traverse(&mut log).unwrap();
        assert_eq!(log, vec![1, 2, 3]);
        assert_eq!(summary.visited, 2);
    }

    #[test]
    fn test_append_between_passes() {
        let mut list: EntityList<Vec<u32>> = EntityList::new();
        assert!(list.is_empty());
        list.append(Probe::new(7));
        list.append_boxed(Box::new(Probe::new(8)));
        let mut log = Vec::new();
        list.traverse(&mut log).unwrap();
        assert_eq!(log, vec![7, 8]);
    }
}
