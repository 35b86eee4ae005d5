//! Named bot presets and the factory that turns a config into a bot.

use crate::engines::engine_minimax::MinimaxBot;
use crate::engines::engine_one_ply::OnePlyBot;
use crate::engines::engine_trait::{Ai, BotConfig};
use crate::search::board_scoring::{MaterialEvaluation, WeightedEvaluation};

/// Beginner bot: one ply, material only.
pub fn martin_config() -> BotConfig {
    BotConfig::new("Martin", "martin", 250, 1)
}

pub fn nelson_config() -> BotConfig {
    BotConfig::new("Nelson", "nelson", 1300, 2).with_centralization_weight(5)
}

/// Strongest preset: three-ply minimax with a centralization bonus.
pub fn magnus_config() -> BotConfig {
    BotConfig::new("Magnus", "magnus", 2850, 3).with_centralization_weight(10)
}

/// Presets in ascending strength.
pub fn default_roster() -> Vec<BotConfig> {
    vec![martin_config(), nelson_config(), magnus_config()]
}

/// Build a bot for `config`. Depth 0 or 1 gets the one-ply bot, anything
/// deeper gets minimax.
pub fn bot_for_config(config: BotConfig) -> Box<dyn Ai> {
    let weight = config.centralization_weight;
    match (config.depth <= 1, weight == 0) {
        (true, true) => Box::new(OnePlyBot::new(config, MaterialEvaluation)),
        (true, false) => Box::new(OnePlyBot::new(config, WeightedEvaluation::new(weight))),
        (false, true) => Box::new(MinimaxBot::new(config, MaterialEvaluation)),
        (false, false) => Box::new(MinimaxBot::new(config, WeightedEvaluation::new(weight))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::board::Board;

    #[test]
    fn roster_is_ordered_by_elo() {
        let roster = default_roster();
        assert_eq!(roster.len(), 3);
        assert!(roster.windows(2).all(|w| w[0].elo < w[1].elo));
        assert_eq!(roster[0].name, "Martin");
        assert_eq!(roster[2].name, "Magnus");
    }

    #[test]
    fn factory_keeps_the_config() {
        let bot = bot_for_config(magnus_config());
        assert_eq!(bot.name(), "Magnus");
        assert_eq!(bot.config().depth, 3);
    }

    #[test]
    fn martin_and_magnus_both_take_a_hanging_queen() {
        let board = Board::from_fen("4k3/8/8/1p1q4/8/2N5/8/4K3 w - - 0 1").expect("test FEN should parse");
        for config in [martin_config(), magnus_config()] {
            let bot = bot_for_config(config);
            let chosen = bot.find_strategic_move(&board).expect("white has moves");
            assert_eq!(chosen.to_string(), "c3d5", "{} missed the queen", bot.name());
        }
    }
}
