use serde::{Deserialize, Serialize};

use crate::state::WorldState;

pub const SNAPSHOT_FORMAT_VERSION: u32 = 1;

/// The single persisted unit: the whole world plus a format tag. How and
/// where it is stored is the shell's business.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorldSnapshot {
    pub format_version: u32,
    pub world: WorldState,
}

impl WorldSnapshot {
    pub fn capture(world: &WorldState) -> Self {
        Self { format_version: SNAPSHOT_FORMAT_VERSION, world: world.clone() }
    }

    pub fn into_world(self) -> WorldState {
        self.world
    }
}
