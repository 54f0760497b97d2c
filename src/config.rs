use crate::error::{ConfigError, Result};
use crate::grid::{Connectivity, EdgePolicy};
use crate::pheromone::FieldParams;

/// Ant decision tuning. Defaults match the reference colony model.
#[derive(Clone, Debug)]
pub struct BehaviorParams {
    /// How far an ant can see food, trails, and the nest
    pub detection_radius: u16,
    /// Trails weaker than this are ignored when choosing where to go
    pub follow_threshold: f32,
    /// Ticks after a delivery during which nest-ward moves are avoided
    pub cooldown_ticks: u32,
    /// Base strength laid while carrying food home
    pub to_nest_deposit: f32,
    /// Base strength laid while retracing to a known source
    pub to_food_deposit: f32,
}

impl Default for BehaviorParams {
    fn default() -> Self {
        Self {
            detection_radius: 2,
            follow_threshold: 0.1,
            cooldown_ticks: 5,
            to_nest_deposit: 1.5,
            to_food_deposit: 1.0,
        }
    }
}

/// Full run configuration, validated once before the engine is built
#[derive(Clone, Debug)]
pub struct SimConfig {
    pub width: u16,
    pub height: u16,
    pub ants: usize,
    pub food_piles: usize,
    pub pile_size: u32,
    pub pile_radius: u16,
    pub speed: u32,
    /// To-nest pheromone lifespan, in seconds
    pub to_nest_lifespan: f32,
    /// To-food pheromone lifespan, in seconds
    pub to_food_lifespan: f32,
    pub record: bool,
    pub seed: u64,
    pub edge: EdgePolicy,
    pub connectivity: Connectivity,
    pub behavior: BehaviorParams,
    pub field: FieldParams,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            width: 100,
            height: 100,
            ants: 50,
            food_piles: 5,
            pile_size: 100,
            pile_radius: 2,
            speed: 1,
            to_nest_lifespan: 10.0,
            to_food_lifespan: 6.0,
            record: false,
            seed: 42,
            edge: EdgePolicy::Wrap,
            connectivity: Connectivity::Moore,
            behavior: BehaviorParams::default(),
            field: FieldParams::default(),
        }
    }
}

impl SimConfig {
    /// Check every externally settable value against its declared bounds
    pub fn validate(&self) -> Result<()> {
        check("width", self.width, 16, 1024)?;
        check("height", self.height, 16, 1024)?;
        check("ants", self.ants, 10, 500)?;
        check("food_piles", self.food_piles, 1, 20)?;
        check("pile_size", self.pile_size, 10, 1000)?;
        check("speed", self.speed, 1, 10)?;
        check("to_nest_lifespan", self.to_nest_lifespan, 1.0, 30.0)?;
        check("to_food_lifespan", self.to_food_lifespan, 1.0, 20.0)?;
        Ok(())
    }
}

fn check<T>(field: &'static str, value: T, min: T, max: T) -> Result<()>
where
    T: PartialOrd + std::fmt::Display + Copy,
{
    if value < min || value > max {
        return Err(ConfigError::OutOfRange {
            field,
            value: value.to_string(),
            min: min.to_string(),
            max: max.to_string(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn field_of(err: ConfigError) -> &'static str {
        match err {
            ConfigError::OutOfRange { field, .. } => field,
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_default_config_validates() {
        assert!(SimConfig::default().validate().is_ok());
    }

    #[test]
    fn test_bounds_are_enforced() {
        let mut config = SimConfig::default();
        config.ants = 5;
        assert_eq!(field_of(config.validate().unwrap_err()), "ants");

        let mut config = SimConfig::default();
        config.ants = 501;
        assert_eq!(field_of(config.validate().unwrap_err()), "ants");

        let mut config = SimConfig::default();
        config.food_piles = 0;
        assert_eq!(field_of(config.validate().unwrap_err()), "food_piles");

        let mut config = SimConfig::default();
        config.pile_size = 2000;
        assert_eq!(field_of(config.validate().unwrap_err()), "pile_size");

        let mut config = SimConfig::default();
        config.speed = 11;
        assert_eq!(field_of(config.validate().unwrap_err()), "speed");

        let mut config = SimConfig::default();
        config.to_nest_lifespan = 45.0;
        assert_eq!(field_of(config.validate().unwrap_err()), "to_nest_lifespan");

        let mut config = SimConfig::default();
        config.to_food_lifespan = 0.5;
        assert_eq!(field_of(config.validate().unwrap_err()), "to_food_lifespan");
    }

    #[test]
    fn test_boundary_values_pass() {
        let mut config = SimConfig::default();
        config.ants = 10;
        config.food_piles = 20;
        config.pile_size = 1000;
        config.speed = 10;
        config.to_nest_lifespan = 30.0;
        config.to_food_lifespan = 1.0;
        assert!(config.validate().is_ok());
    }
}
