use bevy::prelude::*;

use crate::components::ScoreText;

/// Carrot cakes collected this run. Reset to 0 whenever a run starts.
#[derive(Resource, Default, Debug, Clone, Copy, PartialEq, Eq, Deref, DerefMut)]
pub struct Score(pub u32);

pub fn score_text(count: u32) -> String {
    format!("Carrot Cakes Collected: {count}")
}

/// Rewrites the HUD label whenever the score changes (including the reset
/// on run start).
pub fn update_score_text(score: Res<Score>, mut q: Query<&mut Text, With<ScoreText>>) {
    if !score.is_changed() {
        return;
    }
    let Ok(mut text) = q.single_mut() else {
        return;
    };
    *text = Text::new(score_text(score.0));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn label_uses_literal_form() {
        assert_eq!(score_text(0), "Carrot Cakes Collected: 0");
        assert_eq!(score_text(3), "Carrot Cakes Collected: 3");
    }
}
