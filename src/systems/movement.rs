//! Grid-stepped player movement.

use hecs::{Entity, World};

use crate::components::{BlocksMovement, Position};
use crate::grid::Grid;

/// Outcome of a movement attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveResult {
    Moved,
    Blocked,
}

/// Step the player one tile, refusing walls and occupied tiles.
pub fn try_move_player(
    world: &mut World,
    player: Entity,
    grid: &Grid,
    dx: i32,
    dy: i32,
) -> MoveResult {
    let Ok(pos) = world.get::<&Position>(player).map(|p| *p) else {
        log::error!("player entity has no position");
        return MoveResult::Blocked;
    };

    let target_x = pos.x + dx;
    let target_y = pos.y + dy;

    if !grid.is_walkable(target_x, target_y) {
        return MoveResult::Blocked;
    }

    let occupied = world
        .query::<(&Position, &BlocksMovement)>()
        .iter()
        .any(|(_, (other, _))| other.x == target_x && other.y == target_y);
    if occupied {
        return MoveResult::Blocked;
    }

    if let Ok(mut pos) = world.get::<&mut Position>(player) {
        pos.x = target_x;
        pos.y = target_y;
    }
    MoveResult::Moved
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::{ActorKind, Player};

    fn setup() -> (World, Entity, Grid) {
        let mut world = World::new();
        let player = world.spawn((Position::new(2, 2), Player, ActorKind::Player));
        let grid = Grid::new_room(6, 6);
        (world, player, grid)
    }

    #[test]
    fn test_moves_onto_floor() {
        let (mut world, player, grid) = setup();
        assert_eq!(try_move_player(&mut world, player, &grid, 1, 0), MoveResult::Moved);
        assert_eq!(*world.get::<&Position>(player).unwrap(), Position::new(3, 2));
    }

    #[test]
    fn test_blocked_by_wall() {
        let (mut world, player, grid) = setup();
        assert_eq!(try_move_player(&mut world, player, &grid, -1, 0), MoveResult::Moved);
        assert_eq!(
            try_move_player(&mut world, player, &grid, -1, 0),
            MoveResult::Blocked
        );
        assert_eq!(*world.get::<&Position>(player).unwrap(), Position::new(1, 2));
    }

    #[test]
    fn test_blocked_by_npc() {
        let (mut world, player, grid) = setup();
        world.spawn((Position::new(3, 2), ActorKind::Npc, BlocksMovement));
        assert_eq!(
            try_move_player(&mut world, player, &grid, 1, 0),
            MoveResult::Blocked
        );
    }
}
