//! Tests for canvas geometry constants and their relationships

#[cfg(test)]
mod tests {

    use identikon::io::configuration::{
        CANVAS_SIZE, CELL_SIZE, GRID_CELL_COUNT, GRID_COLUMNS, ROW_SEED_LENGTH,
    };
    use identikon::pipeline::digest::DIGEST_LENGTH;

    #[test]
    fn test_cells_exactly_cover_the_canvas() {
        assert_eq!(CANVAS_SIZE, CELL_SIZE * GRID_COLUMNS as u32);
    }

    #[test]
    fn test_grid_is_square() {
        assert_eq!(GRID_CELL_COUNT, GRID_COLUMNS * GRID_COLUMNS);
    }

    #[test]
    fn test_digest_seeds_exactly_the_grid_rows() {
        // 16 bytes in rows of 3: five full rows, one dropped leftover byte
        assert_eq!(DIGEST_LENGTH / ROW_SEED_LENGTH, GRID_COLUMNS);
        assert_eq!(DIGEST_LENGTH % ROW_SEED_LENGTH, 1);
    }
}
