/// What a grid cell is made of
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TileType {
    Floor,
    Wall,
}

impl TileType {
    pub fn is_walkable(&self) -> bool {
        matches!(self, TileType::Floor)
    }
}

#[derive(Debug)]
pub struct Grid {
    pub width: usize,
    pub height: usize,
    pub tiles: Vec<TileType>,
}

impl Grid {
    /// A rectangular room: floor everywhere, walls on the border.
    pub fn new_room(width: usize, height: usize) -> Self {
        let mut tiles = vec![TileType::Floor; width * height];
        for x in 0..width {
            tiles[x] = TileType::Wall;
            tiles[(height - 1) * width + x] = TileType::Wall;
        }
        for y in 0..height {
            tiles[y * width] = TileType::Wall;
            tiles[y * width + width - 1] = TileType::Wall;
        }
        Self {
            width,
            height,
            tiles,
        }
    }

    pub fn get(&self, x: i32, y: i32) -> Option<TileType> {
        if x < 0 || y < 0 || x >= self.width as i32 || y >= self.height as i32 {
            return None;
        }
        Some(self.tiles[y as usize * self.width + x as usize])
    }

    pub fn is_walkable(&self, x: i32, y: i32) -> bool {
        self.get(x, y).map(|t| t.is_walkable()).unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_room_has_wall_border() {
        let grid = Grid::new_room(8, 5);
        assert_eq!(grid.get(0, 0), Some(TileType::Wall));
        assert_eq!(grid.get(7, 4), Some(TileType::Wall));
        assert_eq!(grid.get(3, 0), Some(TileType::Wall));
        assert_eq!(grid.get(0, 2), Some(TileType::Wall));
        assert_eq!(grid.get(3, 2), Some(TileType::Floor));
    }

    #[test]
    fn test_out_of_bounds_is_not_walkable() {
        let grid = Grid::new_room(8, 5);
        assert!(!grid.is_walkable(-1, 2));
        assert!(!grid.is_walkable(8, 2));
        assert!(grid.is_walkable(3, 2));
    }
}
