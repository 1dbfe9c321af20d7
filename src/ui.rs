//! Score and game-over overlay
//!
//! The simulation never touches the page; the loop reports through [`Hud`].

/// Text shown in the score box
pub fn score_text(score: i64) -> String {
    format!("Score: {}", score)
}

/// Text shown in the game-over box
pub fn game_over_text(final_score: i64) -> String {
    format!(
        "Game Over!\nFinal Score: {}\nPress Space to Restart.",
        final_score
    )
}

/// Overlay collaborator
pub trait Hud {
    /// Called every frame with the displayed score
    fn show_score(&mut self, score: i64);
    /// Called once when a run ends
    fn show_game_over(&mut self, final_score: i64);
    /// Remove the game-over box; must be a no-op when none is shown
    fn hide_game_over(&mut self);
}

/// Keeps the overlay as plain text
#[derive(Debug, Clone, Default)]
pub struct TextHud {
    pub score: String,
    pub game_over: Option<String>,
}

impl Hud for TextHud {
    fn show_score(&mut self, score: i64) {
        self.score = score_text(score);
    }

    fn show_game_over(&mut self, final_score: i64) {
        if self.game_over.is_none() {
            log::info!("Game over, final score {}", final_score);
            self.game_over = Some(game_over_text(final_score));
        }
    }

    fn hide_game_over(&mut self) {
        self.game_over = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_negative_score_text() {
        assert_eq!(score_text(-5), "Score: -5");
    }

    #[test]
    fn test_game_over_box() {
        let mut hud = TextHud::default();
        hud.hide_game_over();
        assert!(hud.game_over.is_none());

        hud.show_game_over(35);
        hud.show_game_over(40);
        let text = hud.game_over.clone().unwrap();
        assert!(text.contains("Final Score: 35"));

        hud.hide_game_over();
        assert!(hud.game_over.is_none());
    }
}
