//! On-screen text: remark line, mini-game instructions, and the score.

use bevy::prelude::*;

use crate::GameSet;
use crate::gameplay::score::Score;

// === Constants ===

const HUD_MARGIN: f32 = 12.0;
const HUD_TEXT_COLOR: Color = Color::srgb(1.0, 0.75, 0.85);

const REMARK_LINE: &str = "A snowy diorama with particle effects and light visualization";
const INSTRUCTION_LINE: &str =
    "Mini game: click to look around, press Space to throw snowballs at the colossus";

// === Components ===

/// Marker for the score readout text.
#[derive(Component, Debug, Clone, Copy, Reflect)]
#[reflect(Component)]
pub struct ScoreDisplay;

// === Systems ===

fn spawn_hud(mut commands: Commands) {
    commands.spawn((
        Name::new("Hud"),
        Node {
            position_type: PositionType::Absolute,
            top: Val::Px(HUD_MARGIN),
            left: Val::Px(HUD_MARGIN),
            flex_direction: FlexDirection::Column,
            row_gap: Val::Px(4.0),
            ..default()
        },
        children![
            (
                Name::new("Remark"),
                Text::new(REMARK_LINE),
                TextFont::from_font_size(16.0),
                TextColor(HUD_TEXT_COLOR),
            ),
            (
                Name::new("Instructions"),
                Text::new(INSTRUCTION_LINE),
                TextFont::from_font_size(16.0),
                TextColor(HUD_TEXT_COLOR),
            ),
            (
                Name::new("Score Display"),
                ScoreDisplay,
                Text::new("Score: 0"),
                TextFont::from_font_size(22.0),
                TextColor(HUD_TEXT_COLOR),
            ),
        ],
    ));
}

fn update_score_display(score: Res<Score>, mut query: Single<&mut Text, With<ScoreDisplay>>) {
    if score.is_changed() {
        **query = Text::new(format!("Score: {}", score.0));
    }
}

// === Plugin ===

pub(super) fn plugin(app: &mut App) {
    app.register_type::<ScoreDisplay>();

    app.add_systems(Startup, spawn_hud);
    app.add_systems(Update, update_score_display.in_set(GameSet::Ui));
}

#[cfg(test)]
mod tests {
    use bevy::prelude::*;
    use pretty_assertions::assert_eq;

    use super::ScoreDisplay;
    use crate::gameplay::score::Score;

    #[test]
    fn score_display_updates_on_change() {
        let mut app = crate::testing::create_test_app();
        app.init_resource::<Score>();
        app.add_systems(Update, super::update_score_display);

        app.world_mut().spawn((Text::new("Score: 0"), ScoreDisplay));
        app.update();

        app.world_mut().resource_mut::<Score>().add(15);
        app.update();

        let text = app
            .world_mut()
            .query_filtered::<&Text, With<ScoreDisplay>>()
            .single(app.world())
            .unwrap();
        assert_eq!(**text, "Score: 15");
    }
}
