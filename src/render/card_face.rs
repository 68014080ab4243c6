//! Plain-text card face.

use super::CardRenderer;
use crate::cards::Card;

/// Inner width of the card frame, in characters.
const FACE_WIDTH: usize = 30;

/// Height of the blank art window.
const ART_ROWS: usize = 4;

/// Lays out a card the way the printed face reads, top to bottom: id and
/// health, art window, rarity, ability, attacks.
#[derive(Clone, Copy, Debug, Default)]
pub struct TextCardRenderer;

impl TextCardRenderer {
    fn row(text: &str) -> String {
        format!("| {text:<width$} |", width = FACE_WIDTH)
    }
}

impl CardRenderer for TextCardRenderer {
    type Output = String;

    fn render(&self, card: &Card) -> String {
        let border = format!("+{}+", "-".repeat(FACE_WIDTH + 2));
        let header = format!("Card ID: {}", card.unique_card_id);
        let health = format!("({})", card.health);
        let gap = FACE_WIDTH.saturating_sub(header.len() + health.len());

        let mut lines = vec![border.clone(), Self::row(&format!("{header}{}{health}", " ".repeat(gap)))];
        lines.push(Self::row(&format!("+{}+", "-".repeat(FACE_WIDTH - 2))));
        for _ in 0..ART_ROWS {
            lines.push(Self::row(&format!("|{}|", " ".repeat(FACE_WIDTH - 2))));
        }
        lines.push(Self::row(&format!("+{}+", "-".repeat(FACE_WIDTH - 2))));
        lines.push(Self::row(&format!("{} Card", card.rarity)));
        lines.push(Self::row(&format!(
            "Ability: {}",
            if card.has_ability { "Yes" } else { "No" }
        )));
        lines.push(Self::row(&format!("Primary Attack: {}", card.primary_attack)));
        if card.is_dual_attack() {
            lines.push(Self::row(&format!("Secondary Attack: {}", card.secondary_attack)));
        }
        lines.push(border);
        lines.join("\n")
    }
}
