use crate::slot::SlotType;

/// Fixed color constants for the piece themes.
///
/// Hues follow the learning app: French blue for main-verb pieces, amber for
/// auxiliaries, green/red for validation feedback.
pub mod palette {
    pub const AMBER_BG: &str = "#fffbeb";
    pub const AMBER_INK: &str = "#78350f";
    pub const AMBER_EDGE: &str = "#fcd34d";
    pub const AMBER_FILL: &str = "#f59e0b";
    pub const AMBER_FILL_EDGE: &str = "#d97706";
    pub const AMBER_RING: &str = "#fde68a";

    pub const BLUE_BG: &str = "#eff6ff";
    pub const BLUE_INK: &str = "#1e3a8a";
    pub const BLUE_EDGE: &str = "#93c5fd";
    pub const FRENCH_BLUE: &str = "#0055a4";
    pub const BLUE_FILL_EDGE: &str = "#2563eb";
    pub const BLUE_RING: &str = "#bfdbfe";

    pub const GREEN_FILL: &str = "#22c55e";
    pub const GREEN_EDGE: &str = "#16a34a";
    pub const GREEN_RING: &str = "#bbf7d0";

    pub const FRENCH_RED: &str = "#ef4135";
    pub const RED_EDGE: &str = "#dc2626";
    pub const RED_RING: &str = "#fecaca";

    /// Text color on every filled theme.
    pub const INK_ON_FILL: &str = "#ffffff";
    /// Page background the socket cut-out must match so it reads as a hole.
    pub const CANVAS: &str = "#ffffff";
}

/// Knob/socket circle diameter in px. The knob overlaps the piece edge by
/// half of this; the socket circle is centered on the leading edge.
pub const CONNECTOR_DIAMETER: u32 = 24;
/// Seam-masking bridge between the knob and the piece body, in px.
pub const BRIDGE_WIDTH: u32 = CONNECTOR_DIAMETER / 2;
pub const BRIDGE_HEIGHT: u32 = 16;

/// Resolved theme after applying the precedence chain.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Theme {
    AmberBase,
    BlueBase,
    AmberFilled,
    BlueFilled,
    Success,
    Error,
}

/// Connector geometry a piece exposes. At most one side per instance.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Connector {
    /// Convex circle on the trailing edge plus a bridge masking the seam.
    Knob,
    /// Circle cut-out on the leading edge; only the inward half of its
    /// border arc stays visible.
    Socket,
    None,
}

/// Everything the DOM layer needs to paint one piece.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Presentation {
    pub theme: Theme,
    pub fill: &'static str,
    pub ink: &'static str,
    pub edge: &'static str,
    pub ring: Option<&'static str>,
    pub dashed: bool,
    pub connector: Connector,
}

/// Derive the visual state of a piece from its type and the externally held
/// flags. Total function; no stored style state anywhere.
///
/// Precedence, later rules overriding earlier ones: role-axis base theme,
/// then `selected` (filled variant of the same hue), then
/// `correctness == Some(true)` (success), then `correctness == Some(false)`
/// (error).
pub fn derive_presentation(
    slot_type: SlotType,
    selected: bool,
    correctness: Option<bool>,
    show_connectors: bool,
) -> Presentation {
    let class = slot_type.classify();

    let theme = match (correctness, selected, class.is_auxiliary) {
        (Some(false), _, _) => Theme::Error,
        (Some(true), _, _) => Theme::Success,
        (None, true, true) => Theme::AmberFilled,
        (None, true, false) => Theme::BlueFilled,
        (None, false, true) => Theme::AmberBase,
        (None, false, false) => Theme::BlueBase,
    };

    let (fill, ink, edge, ring) = match theme {
        Theme::AmberBase => (
            palette::AMBER_BG,
            palette::AMBER_INK,
            palette::AMBER_EDGE,
            None,
        ),
        Theme::BlueBase => (palette::BLUE_BG, palette::BLUE_INK, palette::BLUE_EDGE, None),
        Theme::AmberFilled => (
            palette::AMBER_FILL,
            palette::INK_ON_FILL,
            palette::AMBER_FILL_EDGE,
            Some(palette::AMBER_RING),
        ),
        Theme::BlueFilled => (
            palette::FRENCH_BLUE,
            palette::INK_ON_FILL,
            palette::BLUE_FILL_EDGE,
            Some(palette::BLUE_RING),
        ),
        Theme::Success => (
            palette::GREEN_FILL,
            palette::INK_ON_FILL,
            palette::GREEN_EDGE,
            Some(palette::GREEN_RING),
        ),
        Theme::Error => (
            palette::FRENCH_RED,
            palette::INK_ON_FILL,
            palette::RED_EDGE,
            Some(palette::RED_RING),
        ),
    };

    let connector = if !show_connectors {
        Connector::None
    } else if class.is_stem {
        Connector::Knob
    } else {
        Connector::Socket
    };

    Presentation {
        theme,
        fill,
        ink,
        edge,
        ring,
        dashed: class.is_stem && show_connectors,
        connector,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [SlotType; 4] = [
        SlotType::STEM_MAIN,
        SlotType::STEM_AUX,
        SlotType::ENDING_MAIN,
        SlotType::ENDING_AUX,
    ];

    #[test]
    fn base_theme_follows_the_role_axis() {
        assert_eq!(
            derive_presentation(SlotType::STEM_MAIN, false, None, false).theme,
            Theme::BlueBase
        );
        assert_eq!(
            derive_presentation(SlotType::ENDING_AUX, false, None, false).theme,
            Theme::AmberBase
        );
    }

    #[test]
    fn selected_moves_to_the_filled_variant_never_to_validation_themes() {
        for t in ALL {
            let p = derive_presentation(t, true, None, false);
            let base = derive_presentation(t, false, None, false);
            assert_ne!(p.theme, base.theme);
            assert!(matches!(p.theme, Theme::AmberFilled | Theme::BlueFilled));
            assert!(p.ring.is_some());
        }
    }

    #[test]
    fn incorrect_overrides_selection() {
        let p = derive_presentation(SlotType::STEM_MAIN, true, Some(false), true);
        assert_eq!(p.theme, Theme::Error);
        assert_eq!(p.fill, palette::FRENCH_RED);
        assert_eq!(p.ring, Some(palette::RED_RING));
    }

    #[test]
    fn correct_overrides_selection() {
        let p = derive_presentation(SlotType::ENDING_AUX, true, Some(true), true);
        assert_eq!(p.theme, Theme::Success);
        assert_eq!(p.fill, palette::GREEN_FILL);
        assert_eq!(p.ring, Some(palette::GREEN_RING));
    }

    #[test]
    fn validation_theme_is_independent_of_type() {
        for t in ALL {
            for selected in [false, true] {
                assert_eq!(
                    derive_presentation(t, selected, Some(true), true).theme,
                    Theme::Success
                );
                assert_eq!(
                    derive_presentation(t, selected, Some(false), true).theme,
                    Theme::Error
                );
            }
        }
    }

    #[test]
    fn dashed_iff_stem_with_connectors() {
        let cases = [
            (SlotType::STEM_MAIN, true, true),
            (SlotType::STEM_MAIN, false, false),
            (SlotType::ENDING_MAIN, true, false),
            (SlotType::ENDING_MAIN, false, false),
        ];
        for (t, show, expect) in cases {
            assert_eq!(derive_presentation(t, false, None, show).dashed, expect);
        }
    }

    #[test]
    fn connector_side_follows_the_position_axis() {
        assert_eq!(
            derive_presentation(SlotType::STEM_MAIN, false, None, true).connector,
            Connector::Knob
        );
        assert_eq!(
            derive_presentation(SlotType::STEM_AUX, false, None, true).connector,
            Connector::Knob
        );
        assert_eq!(
            derive_presentation(SlotType::ENDING_MAIN, false, None, true).connector,
            Connector::Socket
        );
        assert_eq!(
            derive_presentation(SlotType::ENDING_AUX, false, None, true).connector,
            Connector::Socket
        );
        for t in ALL {
            assert_eq!(
                derive_presentation(t, false, None, false).connector,
                Connector::None
            );
        }
    }

    // The end-to-end scenario from the pool's point of view: a flat tray of
    // [parl|stem, é|ending], then "parl" placed and validated as correct.
    #[test]
    fn tray_then_validated_scenario() {
        let parl = derive_presentation(SlotType::STEM_MAIN, false, None, false);
        let ending = derive_presentation(SlotType::ENDING_MAIN, false, None, false);
        assert_eq!(parl.theme, Theme::BlueBase);
        assert_eq!(ending.theme, Theme::BlueBase);
        assert_eq!(parl.connector, Connector::None);
        assert_eq!(ending.connector, Connector::None);
        assert!(!parl.dashed);

        let validated = derive_presentation(SlotType::STEM_MAIN, true, Some(true), true);
        assert_eq!(validated.theme, Theme::Success);
        let untouched = derive_presentation(SlotType::ENDING_MAIN, false, None, false);
        assert_eq!(untouched.theme, Theme::BlueBase);
    }
}
