//! The second pass, drawing single-pixel details onto the magnified layers
//!
//! Everything here is anchored at the center pixel of a magnified cell.
//! Pixels are painted in this order, later writes replace earlier ones:
//! 1. items
//! 2. pursuers, including their notches and eyes
//! 3. power items
//! 4. the agent

use crate::{
    upscale::UPSCALE_FACTOR, Channel, CheckedState, EntityClass, FineLayers, Layers,
    MarkerAlignment, Palette, PursuerSlot, RenderConfig, RenderError,
};

/// Offsets from a pursuer's center that are carved out with the background color
const NOTCHES: [(isize, isize); 2] = [(-1, -1), (-1, 1)];

/// Offsets from a pursuer's center that get the eye color
const EYES: [(isize, isize); 2] = [(0, -1), (0, 1)];

/// Draw items, pursuer details, power items and the agent at pixel resolution
///
/// Fails if the layers were not magnified from the grid of `state`.
pub fn decorate(
    mut fine: FineLayers,
    state: &CheckedState<'_>,
    palette: &Palette,
    config: &RenderConfig,
) -> Result<FineLayers, RenderError> {
    let expected = (
        state.grid.height() * UPSCALE_FACTOR,
        state.grid.width() * UPSCALE_FACTOR,
    );
    let found = (fine.layers().height(), fine.layers().width());
    if found != expected {
        return Err(RenderError::LayerShape { expected, found });
    }

    let layers = fine.layers_mut();
    draw_items(layers, state, palette, config);
    draw_pursuers(layers, state, palette);
    draw_power_items(layers, state, palette, config.power_item_marker);

    // Drawn last so nothing can hide it
    layers.paint(state.agent_cell().center(UPSCALE_FACTOR), palette.agent);

    Ok(fine)
}

fn draw_items(
    layers: &mut Layers,
    state: &CheckedState<'_>,
    palette: &Palette,
    config: &RenderConfig,
) {
    for (index, item) in state.items.iter().enumerate() {
        if config.skip_origin_items && item.is_origin() {
            log::trace!("Item slot {index} is empty");
            continue;
        }

        layers.paint(item.cell().center(UPSCALE_FACTOR), palette.item);
    }
}

fn draw_pursuers(layers: &mut Layers, state: &CheckedState<'_>, palette: &Palette) {
    let mode = state.mode();
    let eyes = palette.color(EntityClass::Ornament, mode);

    for (cell, slot) in state.pursuer_cells().zip(PursuerSlot::ALL) {
        let center = cell.center(UPSCALE_FACTOR);
        layers.paint(center, palette.color(EntityClass::Pursuer(slot), mode));

        for (rows, cols) in NOTCHES {
            layers.paint(center.offset(rows, cols), palette.background);
        }

        for (rows, cols) in EYES {
            layers.paint(center.offset(rows, cols), eyes);
        }
    }
}

fn draw_power_items(
    layers: &mut Layers,
    state: &CheckedState<'_>,
    palette: &Palette,
    alignment: MarkerAlignment,
) {
    for cell in state.power_item_cells() {
        let center = cell.center(UPSCALE_FACTOR);

        match alignment {
            MarkerAlignment::Centered => {
                layers.paint(center, palette.power_item);
            },
            MarkerAlignment::Shifted => {
                layers
                    .paint_channel(Channel::Red, center.offset(1, 0), palette.power_item)
                    .paint_channel(Channel::Green, center, palette.power_item)
                    .paint_channel(Channel::Blue, center, palette.power_item);
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use math::Color;

    use super::decorate;
    use crate::{
        coarse, upscale, Cell, FineLayers, Grid, GridState, MarkerAlignment, Palette, Position,
        RenderConfig, RenderError, Tile,
    };

    const PALETTE: Palette = Palette::CLASSIC;

    fn state() -> GridState {
        GridState::new(
            Grid::filled(4, 4, Tile::Passage),
            Position::new(3, 3),
            &[
                Position::new(1, 1),
                Position::new(2, 1),
                Position::new(3, 1),
                Position::new(1, 2),
            ],
        )
        .expect("four pursuers")
    }

    fn render(state: &GridState, config: &RenderConfig) -> FineLayers {
        let checked = state.check().expect("valid state");
        let fine = upscale::magnify(&coarse::compose(&checked, &PALETTE));
        decorate(fine, &checked, &PALETTE, config).expect("matching layers")
    }

    #[test]
    fn pursuer_pattern() {
        let fine = render(&state(), &RenderConfig::default());

        // Pursuer 0 covers pixels 3..6 in both directions
        let eyes = Color::WHITE;
        let body = Color::RED;
        let notch = PALETTE.background;
        let expected = [
            [notch, body, notch],
            [eyes, body, eyes],
            [body, body, body],
        ];

        for (row, expected_row) in expected.iter().enumerate() {
            for (col, &expected_color) in expected_row.iter().enumerate() {
                assert_eq!(
                    fine.color_at(Cell::new(3 + row, 3 + col)),
                    expected_color,
                    "pixel ({row}, {col}) of pursuer 0"
                );
            }
        }
    }

    #[test]
    fn scared_eyes() {
        let fine = render(&state().with_scared_timer(1), &RenderConfig::default());

        assert_eq!(fine.color_at(Cell::new(4, 4)), Color::BLUE);
        assert_eq!(fine.color_at(Cell::new(4, 3)), Color::rgb(1., 0.6, 0.2));
        assert_eq!(fine.color_at(Cell::new(4, 5)), Color::rgb(1., 0.6, 0.2));
    }

    #[test]
    fn items_are_centered() {
        let state = state().with_items(vec![Position::new(0, 2)]);
        let fine = render(&state, &RenderConfig::default());

        // Item (0, 2) is in row 2, column 0
        assert_eq!(fine.color_at(Cell::new(7, 1)), PALETTE.item);
        assert_eq!(fine.color_at(Cell::new(6, 0)), PALETTE.background);
    }

    #[test]
    fn origin_items_are_skipped() {
        let state = state().with_items(vec![Position::new(0, 0)]);

        let fine = render(&state, &RenderConfig::default());
        assert_eq!(fine.color_at(Cell::new(1, 1)), PALETTE.wall);

        let config = RenderConfig {
            skip_origin_items: false,
            ..RenderConfig::default()
        };
        let fine = render(&state, &config);
        assert_eq!(fine.color_at(Cell::new(1, 1)), PALETTE.item);
    }

    #[test]
    fn pursuers_hide_items() {
        let state = state().with_items(vec![Position::new(1, 1)]);
        let fine = render(&state, &RenderConfig::default());

        assert_eq!(fine.color_at(Cell::new(4, 4)), Color::RED);
    }

    #[test]
    fn power_items_hide_pursuers() {
        let state = state().with_power_items(vec![Position::new(2, 1)]);
        let fine = render(&state, &RenderConfig::default());

        // Pursuer 1 keeps its eyes, but not its center
        assert_eq!(fine.color_at(Cell::new(4, 7)), PALETTE.power_item);
        assert_eq!(fine.color_at(Cell::new(4, 6)), Color::WHITE);
    }

    #[test]
    fn shifted_power_items() {
        // Power item on top of scared pursuer 3, in row 2, column 1
        let state = state()
            .with_scared_timer(5)
            .with_power_items(vec![Position::new(1, 2)]);
        let config = RenderConfig {
            power_item_marker: MarkerAlignment::Shifted,
            ..RenderConfig::default()
        };
        let fine = render(&state, &config);

        // Red lands one row below green and blue
        assert_eq!(fine.color_at(Cell::new(7, 4)), Color::rgb(0., 0.8, 0.6));
        assert_eq!(fine.color_at(Cell::new(8, 4)), Color::rgb(1., 0., 1.));

        let fine = render(&state, &RenderConfig::default());
        assert_eq!(fine.color_at(Cell::new(7, 4)), PALETTE.power_item);
        assert_eq!(fine.color_at(Cell::new(8, 4)), Color::BLUE);
    }

    #[test]
    fn agent_is_drawn_last() {
        let mut state = state()
            .with_items(vec![Position::new(1, 1)])
            .with_power_items(vec![Position::new(1, 1)]);
        state.agent = Position::new(1, 1);

        let fine = render(&state, &RenderConfig::default());
        assert_eq!(fine.color_at(Cell::new(4, 4)), PALETTE.agent);
    }

    #[test]
    fn mismatched_layers() {
        let state = state();
        let checked = state.check().expect("valid state");

        let other = GridState::new(
            Grid::filled(2, 4, Tile::Passage),
            Position::new(0, 0),
            &[Position::new(0, 0); 4],
        )
        .expect("four pursuers");
        let fine = upscale::magnify(&coarse::compose(
            &other.check().expect("valid state"),
            &PALETTE,
        ));

        let result = decorate(fine, &checked, &PALETTE, &RenderConfig::default());
        assert_eq!(
            result,
            Err(RenderError::LayerShape {
                expected: (12, 12),
                found: (6, 12)
            })
        );
    }
}
