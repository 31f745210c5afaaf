use crate::entity::Entity;
use crate::term::ScreenBuffer;

/// Handle returned by [`EntityGroup::add`]. Never reused within a group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EntityId(u64);

/// Owned collection of entities, kept in insertion order.
#[derive(Debug, Clone, Default)]
pub struct EntityGroup {
    next_id: u64,
    entities: Vec<(EntityId, Entity)>,
}

impl EntityGroup {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, entity: Entity) -> EntityId {
        let id = EntityId(self.next_id);
        self.next_id += 1;
        self.entities.push((id, entity));
        id
    }

    /// Take an entity out of the group. Unknown ids are ignored.
    pub fn remove(&mut self, id: EntityId) -> Option<Entity> {
        let pos = self.entities.iter().position(|(eid, _)| *eid == id)?;
        Some(self.entities.remove(pos).1)
    }

    pub fn get(&self, id: EntityId) -> Option<&Entity> {
        self.entities
            .iter()
            .find(|(eid, _)| *eid == id)
            .map(|(_, e)| e)
    }

    pub fn get_mut(&mut self, id: EntityId) -> Option<&mut Entity> {
        self.entities
            .iter_mut()
            .find(|(eid, _)| *eid == id)
            .map(|(_, e)| e)
    }

    pub fn clear(&mut self) {
        self.entities.clear();
    }

    /// Advance every active entity.
    pub fn update(&mut self, dt: f64) {
        for entity in self.iter_mut().filter(|e| e.active) {
            entity.update(dt);
        }
    }

    /// Draw every active entity, in insertion order.
    pub fn draw(&self, screen: &mut ScreenBuffer) {
        for entity in self.iter().filter(|e| e.active) {
            entity.draw(screen);
        }
    }

    pub fn get_by_tag<'a>(&'a self, tag: &'a str) -> impl Iterator<Item = &'a Entity> + 'a {
        self.iter().filter(move |e| e.tag == tag)
    }

    pub fn remove_inactive(&mut self) {
        self.entities.retain(|(_, e)| e.active);
    }

    pub fn iter(&self) -> impl Iterator<Item = &Entity> {
        self.entities.iter().map(|(_, e)| e)
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Entity> {
        self.entities.iter_mut().map(|(_, e)| e)
    }

    pub fn ids(&self) -> impl Iterator<Item = EntityId> + '_ {
        self.entities.iter().map(|(id, _)| *id)
    }

    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }
}
