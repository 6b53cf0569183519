use serde::{Deserialize, Serialize};

/// Configuration for the game
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameConfig {
    /// Width of the playing field, in pixels
    pub width: i32,
    /// Height of the playing field, in pixels
    pub height: i32,
    /// Distance the head moves per tick
    pub step: i32,
    /// Side length of one snake segment (used by the renderer to map
    /// pixel coordinates onto terminal cells)
    pub cell_size: i32,
    /// Where the head starts a new game
    pub spawn_x: i32,
    pub spawn_y: i32,
    /// Food is eaten when both |head - food| deltas are strictly below this
    pub eat_radius: i32,
    /// Food never spawns closer than this to the field edge
    pub food_margin: i32,
    /// Score awarded per food eaten
    pub food_score: u32,
    /// Body segments gained per food eaten
    pub growth_per_food: usize,
    /// Game loop frequency in ticks per second
    pub tick_rate: u64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            width: 900,
            height: 600,
            step: 5,
            cell_size: 20,
            spawn_x: 100,
            spawn_y: 100,
            eat_radius: 6,
            food_margin: 50,
            food_score: 10,
            growth_per_food: 5,
            tick_rate: 60,
        }
    }
}

impl GameConfig {
    /// Create a new configuration with a custom field size
    pub fn new(width: i32, height: i32) -> Self {
        Self {
            width,
            height,
            ..Default::default()
        }
    }

    /// Create a small field for testing
    pub fn small() -> Self {
        Self::new(200, 200)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = GameConfig::default();
        assert_eq!(config.width, 900);
        assert_eq!(config.height, 600);
        assert_eq!(config.step, 5);
        assert_eq!(config.eat_radius, 6);
        assert_eq!(config.tick_rate, 60);
    }

    #[test]
    fn test_custom_config() {
        let config = GameConfig::new(300, 150);
        assert_eq!(config.width, 300);
        assert_eq!(config.height, 150);
        assert_eq!(config.step, 5);
    }

    #[test]
    fn test_food_margin_fits_small_field() {
        let config = GameConfig::small();
        assert!(config.food_margin * 2 < config.width);
        assert!(config.food_margin * 2 < config.height);
    }
}
