mod item_tile;

pub use item_tile::ItemTile;
