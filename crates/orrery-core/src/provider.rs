/// Capability seam between the camera controller and whatever owns the
/// live body positions. The rig depends only on this trait, never on the
/// scene graph's structure.

use glam::Vec3;

use crate::bodies::{BodyId, BODY_COUNT};

pub trait PositionProvider {
    /// Current world-space position of a body, looked up fresh every frame.
    /// `None` means the body is not resolvable this frame (treated as a
    /// no-op by consumers, retried next tick).
    fn lookup(&self, id: BodyId) -> Option<Vec3>;
}

/// Flat per-frame position table, rebuilt every tick by the app.
#[derive(Debug, Clone)]
pub struct PositionTable {
    entries: [Option<Vec3>; BODY_COUNT],
}

impl PositionTable {
    pub fn new() -> Self {
        Self {
            entries: [None; BODY_COUNT],
        }
    }

    pub fn set(&mut self, id: BodyId, pos: Vec3) {
        self.entries[id.index()] = Some(pos);
    }

    pub fn clear(&mut self) {
        self.entries = [None; BODY_COUNT];
    }
}

impl Default for PositionTable {
    fn default() -> Self {
        Self::new()
    }
}

impl PositionProvider for PositionTable {
    fn lookup(&self, id: BodyId) -> Option<Vec3> {
        self.entries[id.index()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_and_lookup() {
        let mut table = PositionTable::new();
        assert_eq!(table.lookup(BodyId::Earth), None);
        table.set(BodyId::Earth, Vec3::new(8.0, 0.0, 0.1));
        assert_eq!(table.lookup(BodyId::Earth), Some(Vec3::new(8.0, 0.0, 0.1)));
        table.clear();
        assert_eq!(table.lookup(BodyId::Earth), None);
    }
}
