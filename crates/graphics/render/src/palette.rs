//! Colors for everything that can appear in a frame

use math::Color;

use crate::{Tile, PURSUER_COUNT};

/// Whether pursuers are currently scared
///
/// The mode is global for a frame, all pursuers share it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Mode {
    #[default]
    Normal,
    Scared,
}

impl Mode {
    /// Pursuers are scared whenever the timer is positive
    #[inline]
    #[must_use]
    pub const fn from_scared_timer(scared_timer: i32) -> Self {
        if scared_timer > 0 {
            Self::Scared
        } else {
            Self::Normal
        }
    }

    #[inline]
    const fn index(self) -> usize {
        match self {
            Self::Normal => 0,
            Self::Scared => 1,
        }
    }
}

/// One of the [PURSUER_COUNT] pursuer slots
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PursuerSlot {
    First,
    Second,
    Third,
    Fourth,
}

impl PursuerSlot {
    /// All slots, in drawing order
    pub const ALL: [Self; PURSUER_COUNT] = [Self::First, Self::Second, Self::Third, Self::Fourth];

    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::First => 0,
            Self::Second => 1,
            Self::Third => 2,
            Self::Fourth => 3,
        }
    }
}

/// Everything a color can be looked up for
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EntityClass {
    Agent,

    /// The body of the pursuer in the given slot
    Pursuer(PursuerSlot),

    /// Eyes of all pursuers
    Ornament,
    Item,
    PowerItem,
    Wall,
    Background,
}

/// How all pursuers look in one [Mode]
#[derive(Clone, Copy, Debug, PartialEq)]
struct PursuerStyle {
    /// Indexed by [PursuerSlot::index]
    bodies: [Color; PURSUER_COUNT],
    eyes: Color,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Palette {
    pub wall: Color,

    /// Passages, and the notches carved into pursuers
    pub background: Color,
    pub item: Color,
    pub power_item: Color,
    pub agent: Color,

    /// Indexed by [Mode::index]
    pursuers: [PursuerStyle; 2],
}

impl Palette {
    pub const CLASSIC: Self = Self {
        wall: Color::rgb(0., 0., 0.6),
        background: Color::BLACK,
        item: Color::rgb(1., 0.8, 0.6),
        power_item: Color::rgb(1., 0.8, 0.6),
        agent: Color::rgb(1., 1., 0.),
        pursuers: [
            PursuerStyle {
                bodies: [
                    Color::RED,
                    Color::rgb(1., 0.7, 1.),
                    Color::rgb(0., 1., 1.),
                    Color::rgb(1., 0.5, 0.),
                ],
                eyes: Color::WHITE,
            },
            PursuerStyle {
                bodies: [Color::BLUE; PURSUER_COUNT],
                eyes: Color::rgb(1., 0.6, 0.2),
            },
        ],
    };

    #[inline]
    const fn pursuer_style(&self, mode: Mode) -> &PursuerStyle {
        &self.pursuers[mode.index()]
    }

    #[inline]
    #[must_use]
    pub const fn tile(&self, tile: Tile) -> Color {
        match tile {
            Tile::Wall => self.wall,
            Tile::Passage => self.background,
        }
    }

    /// Look up the color of an entity
    ///
    /// The mode only affects pursuers and their ornaments.
    #[must_use]
    pub const fn color(&self, class: EntityClass, mode: Mode) -> Color {
        match class {
            EntityClass::Agent => self.agent,
            EntityClass::Pursuer(slot) => self.pursuer_style(mode).bodies[slot.index()],
            EntityClass::Ornament => self.pursuer_style(mode).eyes,
            EntityClass::Item => self.item,
            EntityClass::PowerItem => self.power_item,
            EntityClass::Wall => self.wall,
            EntityClass::Background => self.background,
        }
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::CLASSIC
    }
}

#[cfg(test)]
mod tests {
    use math::Color;

    use super::{EntityClass, Mode, Palette, PursuerSlot};

    #[test]
    fn mode_only_affects_pursuers() {
        let palette = Palette::CLASSIC;

        for class in [
            EntityClass::Agent,
            EntityClass::Item,
            EntityClass::PowerItem,
            EntityClass::Wall,
            EntityClass::Background,
        ] {
            assert_eq!(
                palette.color(class, Mode::Normal),
                palette.color(class, Mode::Scared)
            );
        }

        for slot in PursuerSlot::ALL {
            assert_ne!(
                palette.color(EntityClass::Pursuer(slot), Mode::Normal),
                palette.color(EntityClass::Pursuer(slot), Mode::Scared)
            );
        }

        assert_ne!(
            palette.color(EntityClass::Ornament, Mode::Normal),
            palette.color(EntityClass::Ornament, Mode::Scared)
        );
    }

    #[test]
    fn scared_pursuers_look_alike() {
        for slot in PursuerSlot::ALL {
            assert_eq!(
                Palette::CLASSIC.color(EntityClass::Pursuer(slot), Mode::Scared),
                Color::BLUE
            );
        }
    }

    #[test]
    fn slots_are_ordered() {
        let indices = PursuerSlot::ALL.map(PursuerSlot::index);
        assert_eq!(indices, [0, 1, 2, 3]);

        assert_eq!(
            Palette::CLASSIC.color(EntityClass::Pursuer(PursuerSlot::Fourth), Mode::Normal),
            Color::rgb(1., 0.5, 0.)
        );
    }
}
