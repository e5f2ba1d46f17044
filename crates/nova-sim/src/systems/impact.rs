//! Ground impact resolution.
//!
//! A projectile within `IMPACT_RANGE` of its target point has landed. It
//! knocks out the installation it was aimed at and is removed.

use log::debug;

use nova_core::constants::IMPACT_RANGE;
use nova_core::enums::TargetRef;
use nova_core::events::GameEvent;
use nova_core::state::WorldSnapshot;

pub fn run(state: &mut WorldSnapshot, events: &mut Vec<GameEvent>) {
    let projectiles = std::mem::take(&mut state.projectiles);
    let mut airborne = Vec::with_capacity(projectiles.len());

    for projectile in projectiles {
        if projectile.distance_to_target() >= IMPACT_RANGE {
            airborne.push(projectile);
            continue;
        }

        events.push(GameEvent::Impacted {
            projectile: projectile.id,
            x: projectile.target_x,
            y: projectile.target_y,
        });
        if let Some(destroyed) = deactivate(state, projectile.target) {
            events.push(destroyed);
        }
    }

    state.projectiles = airborne;
}

/// Knock out the targeted installation. Returns the destruction event the
/// first time a given installation goes down.
fn deactivate(state: &mut WorldSnapshot, target: TargetRef) -> Option<GameEvent> {
    match target {
        TargetRef::City(id) => {
            let city = state.cities.iter_mut().find(|c| c.id == id)?;
            if !city.active {
                return None;
            }
            city.active = false;
            debug!("city {id} destroyed");
            Some(GameEvent::CityDestroyed { city: id })
        }
        TargetRef::Tower(id) => {
            let tower = state.towers.iter_mut().find(|t| t.id == id)?;
            if !tower.active {
                return None;
            }
            tower.active = false;
            debug!("tower {id} destroyed");
            Some(GameEvent::TowerDestroyed { tower: id })
        }
    }
}
