use super::state::Position;

/// Centres of the `board_size` x `board_size` tiles, x-major, board centred on the origin
pub fn generate_tiles(board_size: usize) -> Vec<Position> {
    let offset = board_size as f32 / 2.0 - 0.5;
    (0..board_size)
        .flat_map(|i| {
            (0..board_size).map(move |j| Position::new(i as f32 - offset, j as f32 - offset))
        })
        .collect()
}
