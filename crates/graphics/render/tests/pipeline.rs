use math::Color;
use render::{
    coarse, Cell, Grid, GridState, Palette, Position, RenderConfig, RenderError, Renderer, Tile,
    UPSCALE_FACTOR,
};

const PALETTE: Palette = Palette::CLASSIC;

/// A 5x7 maze with a wall border
fn maze() -> GridState {
    let mut grid = Grid::filled(5, 7, Tile::Passage);
    for col in 0..7 {
        grid.set_tile(Cell::new(0, col), Tile::Wall);
        grid.set_tile(Cell::new(4, col), Tile::Wall);
    }
    for row in 0..5 {
        grid.set_tile(Cell::new(row, 0), Tile::Wall);
        grid.set_tile(Cell::new(row, 6), Tile::Wall);
    }

    GridState::new(
        grid,
        Position::new(3, 1),
        &[
            Position::new(1, 1),
            Position::new(2, 1),
            Position::new(3, 2),
            Position::new(5, 2),
        ],
    )
    .expect("four pursuers")
    .with_items(vec![
        Position::new(4, 1),
        Position::new(5, 1),
        Position::new(2, 3),
        Position::new(4, 3),
    ])
    .with_power_items(vec![Position::new(5, 3)])
    .with_score(40)
}

/// The magnified block of a grid cell contains the pixel
fn in_block(pixel: (usize, usize), cell: Cell) -> bool {
    pixel.0 / UPSCALE_FACTOR == cell.row && pixel.1 / UPSCALE_FACTOR == cell.col
}

#[test]
fn deterministic() {
    let renderer = Renderer::default();
    let state = maze();

    let first = renderer.render(&state).expect("valid state");
    let second = renderer.render(&state).expect("valid state");

    let bits = |channels: Vec<f32>| channels.into_iter().map(f32::to_bits).collect::<Vec<_>>();
    assert_eq!(bits(first.to_channels()), bits(second.to_channels()));
}

#[test]
fn shape() {
    let renderer = Renderer::default();

    for (height, width) in [(1, 1), (3, 3), (5, 7), (31, 28)] {
        let state = GridState::new(
            Grid::filled(height, width, Tile::Wall),
            Position::new(0, 0),
            &[Position::new(0, 0); 4],
        )
        .expect("four pursuers");

        let frame = renderer.render(&state).expect("valid state");
        assert_eq!(frame.shape(), (height * 3, width * 3, 3));
        assert_eq!(frame.to_channels().len(), height * 3 * width * 3 * 3);
    }
}

#[test]
fn pursuers_hide_items_in_coarse_pass() {
    let state = maze().with_power_items(vec![Position::new(1, 1)]);
    let checked = state.check().expect("valid state");
    let coarse = coarse::compose(&checked, &PALETTE);

    // Pursuer 0 and the power item share row 1, column 1
    assert_eq!(coarse.color_at(Cell::new(1, 1)), Color::RED);
}

#[test]
fn mode_switch_only_changes_pursuers() {
    let renderer = Renderer::default();
    let normal = maze();
    let scared = maze().with_scared_timer(20);

    let normal_frame = renderer.render(&normal).expect("valid state");
    let scared_frame = renderer.render(&scared).expect("valid state");

    let pursuer_cells: Vec<Cell> = normal.pursuers.iter().map(|p| p.cell()).collect();

    for row in 0..normal_frame.height() {
        for col in 0..normal_frame.width() {
            let covered = pursuer_cells
                .iter()
                .any(|&cell| in_block((row, col), cell));

            if !covered {
                assert_eq!(
                    normal_frame.pixel(row, col),
                    scared_frame.pixel(row, col),
                    "pixel ({row}, {col}) changed"
                );
            }
        }
    }

    let scared_eyes = Color::rgb(1., 0.6, 0.2);
    for cell in pursuer_cells {
        let center = cell.center(UPSCALE_FACTOR);
        assert_ne!(
            normal_frame.pixel(center.row, center.col),
            scared_frame.pixel(center.row, center.col)
        );
        assert_eq!(scared_frame.pixel(center.row, center.col), Color::BLUE);
        assert_eq!(
            normal_frame.pixel(center.row, center.col + 1),
            Color::WHITE
        );
        assert_eq!(scared_frame.pixel(center.row, center.col + 1), scared_eyes);
    }
}

#[test]
fn agent_precedence() {
    let renderer = Renderer::default();

    let mut state = maze()
        .with_items(vec![Position::new(3, 3)])
        .with_power_items(vec![Position::new(3, 3)]);
    state.agent = Position::new(3, 3);

    let frame = renderer.render(&state).expect("valid state");
    assert_eq!(frame.pixel(10, 10), PALETTE.agent);
}

#[test]
fn three_by_three() {
    let grid = Grid::filled(3, 3, Tile::Passage);
    let state = GridState::new(
        grid,
        Position::new(1, 1),
        &[
            Position::new(0, 0),
            Position::new(2, 2),
            Position::new(2, 2),
            Position::new(2, 2),
        ],
    )
    .expect("four pursuers")
    .with_items(vec![Position::new(1, 1)]);

    let frame = Renderer::default().render(&state).expect("valid state");

    assert_eq!(frame.shape(), (9, 9, 3));
    assert_eq!(frame.pixel(4, 4), PALETTE.agent);
    assert_eq!(frame.pixel(1, 1), Color::RED);

    let scared_eyes = Color::rgb(1., 0.6, 0.2);
    assert!(frame.texture().data().iter().all(|&pixel| pixel != scared_eyes));
}

#[test]
fn empty_overlay() {
    let state = maze().with_items(vec![]).with_power_items(vec![]);
    let frame = Renderer::default().render(&state).expect("valid state");

    let agent = state.agent.agent_cell();
    let pursuers: Vec<Cell> = state.pursuers.iter().map(|p| p.cell()).collect();

    for row in 0..frame.height() {
        for col in 0..frame.width() {
            let pixel = (row, col);
            if in_block(pixel, agent) || pursuers.iter().any(|&cell| in_block(pixel, cell)) {
                continue;
            }

            let cell = Cell::new(row / UPSCALE_FACTOR, col / UPSCALE_FACTOR);
            let expected = PALETTE.tile(state.grid.tile(cell));
            assert_eq!(frame.pixel(row, col), expected, "pixel ({row}, {col})");
        }
    }
}

#[test]
fn out_of_bounds_pursuer() {
    let mut state = maze();
    state.pursuers[2] = Position::new(7, 1);

    let error = Renderer::default()
        .render(&state)
        .expect_err("pursuer is outside the grid");

    assert_eq!(
        error,
        RenderError::OutOfBounds {
            entity: render::Entity::Pursuer(2),
            row: 1,
            col: 7,
            height: 5,
            width: 7
        }
    );
}

#[test]
fn sequence() {
    let renderer = Renderer::new(PALETTE, RenderConfig::default());

    let mut broken = maze();
    broken.agent = Position::new(5, 0);
    let states = [maze(), maze().with_scared_timer(1), broken];

    let frames: Vec<_> = renderer.render_all(&states).collect();

    assert_eq!(frames.len(), 3);
    assert!(frames[0].is_ok());
    assert_ne!(frames[0], frames[1]);
    assert!(matches!(
        frames[2],
        Err(RenderError::OutOfBounds {
            entity: render::Entity::Agent,
            ..
        })
    ));
}

#[test]
fn shared_between_threads() {
    let renderer = Renderer::default();
    let states = [maze(), maze().with_scared_timer(3)];

    let frames: Vec<_> = std::thread::scope(|scope| {
        let handles: Vec<_> = states
            .iter()
            .map(|state| scope.spawn(move || renderer.render(state)))
            .collect();

        handles
            .into_iter()
            .map(|handle| handle.join().expect("render thread finished"))
            .collect()
    });

    let sequential: Vec<_> = renderer.render_all(&states).collect();
    assert_eq!(frames, sequential);
}
