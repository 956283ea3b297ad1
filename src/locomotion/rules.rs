//! Ordered rule lists that pick the facing for a frame.
//!
//! Walk rules are evaluated against the current input; the first rule whose
//! condition holds selects the walk animation. When none match, idle rules are
//! evaluated against the previous frame's velocity to pick a resting pose.
//!
//! The default lists encode the priority left > right > up > down > idle, and
//! for idle poses x<0 > x>0 > y<0 > y>0.

use raylib::prelude::Vector2;
use serde::{Deserialize, Serialize};

use super::{Direction, DirectionalInput, Facing};

/// Condition over one frame of directional input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum InputCondition {
    Held(Direction),
    All(Vec<InputCondition>),
    Any(Vec<InputCondition>),
    Not(Box<InputCondition>),
}

impl InputCondition {
    pub fn evaluate(&self, input: &DirectionalInput) -> bool {
        match self {
            InputCondition::Held(direction) => input.is_held(*direction),
            InputCondition::All(conditions) => conditions.iter().all(|c| c.evaluate(input)),
            InputCondition::Any(conditions) => conditions.iter().any(|c| c.evaluate(input)),
            InputCondition::Not(condition) => !condition.evaluate(input),
        }
    }
}

/// Play the walk cycle for `facing` when `when` holds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WalkRule {
    pub when: InputCondition,
    pub facing: Facing,
}

impl WalkRule {
    pub fn new(when: InputCondition, facing: Facing) -> Self {
        Self { when, facing }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Axis {
    X,
    Y,
}

/// Strict sign test. Zero matches neither.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Sign {
    Negative,
    Positive,
}

/// Rest in `facing` when the previous velocity on `axis` has `sign`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdleRule {
    pub axis: Axis,
    pub sign: Sign,
    pub facing: Facing,
}

impl IdleRule {
    pub fn new(axis: Axis, sign: Sign, facing: Facing) -> Self {
        Self { axis, sign, facing }
    }

    pub fn matches(&self, previous_velocity: Vector2) -> bool {
        let component = match self.axis {
            Axis::X => previous_velocity.x,
            Axis::Y => previous_velocity.y,
        };
        match self.sign {
            Sign::Negative => component < 0.0,
            Sign::Positive => component > 0.0,
        }
    }
}

/// left > right > up > down.
pub fn default_walk_rules() -> Vec<WalkRule> {
    vec![
        WalkRule::new(InputCondition::Held(Direction::Left), Facing::Left),
        WalkRule::new(InputCondition::Held(Direction::Right), Facing::Right),
        WalkRule::new(InputCondition::Held(Direction::Up), Facing::Back),
        WalkRule::new(InputCondition::Held(Direction::Down), Facing::Front),
    ]
}

/// x<0 > x>0 > y<0 > y>0.
pub fn default_idle_rules() -> Vec<IdleRule> {
    vec![
        IdleRule::new(Axis::X, Sign::Negative, Facing::Left),
        IdleRule::new(Axis::X, Sign::Positive, Facing::Right),
        IdleRule::new(Axis::Y, Sign::Negative, Facing::Back),
        IdleRule::new(Axis::Y, Sign::Positive, Facing::Front),
    ]
}

/// First walk rule matching `input`, if any.
pub fn select_walk(rules: &[WalkRule], input: &DirectionalInput) -> Option<Facing> {
    rules
        .iter()
        .find(|rule| rule.when.evaluate(input))
        .map(|rule| rule.facing)
}

/// First idle rule matching `previous_velocity`, if any.
pub fn select_idle(rules: &[IdleRule], previous_velocity: Vector2) -> Option<Facing> {
    rules
        .iter()
        .find(|rule| rule.matches(previous_velocity))
        .map(|rule| rule.facing)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn v(x: f32, y: f32) -> Vector2 {
        Vector2 { x, y }
    }

    #[test]
    fn test_default_walk_priority_left_over_up() {
        let input = DirectionalInput::only(Direction::Left).with(Direction::Up);
        assert_eq!(
            select_walk(&default_walk_rules(), &input),
            Some(Facing::Left)
        );
    }

    #[test]
    fn test_default_walk_priority_right_over_down() {
        let input = DirectionalInput::only(Direction::Right).with(Direction::Down);
        assert_eq!(
            select_walk(&default_walk_rules(), &input),
            Some(Facing::Right)
        );
    }

    #[test]
    fn test_default_walk_priority_left_over_right() {
        let input = DirectionalInput::only(Direction::Right).with(Direction::Left);
        assert_eq!(
            select_walk(&default_walk_rules(), &input),
            Some(Facing::Left)
        );
    }

    #[test]
    fn test_default_walk_up_is_back_down_is_front() {
        let rules = default_walk_rules();
        assert_eq!(
            select_walk(&rules, &DirectionalInput::only(Direction::Up)),
            Some(Facing::Back)
        );
        assert_eq!(
            select_walk(&rules, &DirectionalInput::only(Direction::Down)),
            Some(Facing::Front)
        );
        assert_eq!(
            select_walk(&rules, &DirectionalInput::only(Direction::Up).with(Direction::Down)),
            Some(Facing::Back)
        );
    }

    #[test]
    fn test_default_walk_no_input_selects_nothing() {
        assert_eq!(
            select_walk(&default_walk_rules(), &DirectionalInput::none()),
            None
        );
    }

    #[test]
    fn test_empty_rule_list_never_walks() {
        assert_eq!(
            select_walk(&[], &DirectionalInput::only(Direction::Left)),
            None
        );
    }

    #[test]
    fn test_idle_from_previous_velocity() {
        let rules = default_idle_rules();
        assert_eq!(select_idle(&rules, v(-175.0, 0.0)), Some(Facing::Left));
        assert_eq!(select_idle(&rules, v(175.0, 0.0)), Some(Facing::Right));
        assert_eq!(select_idle(&rules, v(0.0, -175.0)), Some(Facing::Back));
        assert_eq!(select_idle(&rules, v(0.0, 175.0)), Some(Facing::Front));
    }

    #[test]
    fn test_idle_horizontal_wins_on_diagonal() {
        let rules = default_idle_rules();
        assert_eq!(select_idle(&rules, v(-123.7, 123.7)), Some(Facing::Left));
        assert_eq!(select_idle(&rules, v(123.7, -123.7)), Some(Facing::Right));
    }

    #[test]
    fn test_idle_zero_velocity_selects_nothing() {
        assert_eq!(select_idle(&default_idle_rules(), v(0.0, 0.0)), None);
    }

    #[test]
    fn test_idle_negative_zero_is_not_negative() {
        assert_eq!(select_idle(&default_idle_rules(), v(-0.0, -0.0)), None);
    }

    #[test]
    fn test_condition_combinators() {
        let up_left = InputCondition::All(vec![
            InputCondition::Held(Direction::Up),
            InputCondition::Held(Direction::Left),
        ]);
        let horizontal = InputCondition::Any(vec![
            InputCondition::Held(Direction::Left),
            InputCondition::Held(Direction::Right),
        ]);
        let not_down = InputCondition::Not(Box::new(InputCondition::Held(Direction::Down)));

        let input = DirectionalInput::only(Direction::Up).with(Direction::Left);
        assert!(up_left.evaluate(&input));
        assert!(horizontal.evaluate(&input));
        assert!(not_down.evaluate(&input));

        let input = DirectionalInput::only(Direction::Down);
        assert!(!up_left.evaluate(&input));
        assert!(!horizontal.evaluate(&input));
        assert!(!not_down.evaluate(&input));
    }

    #[test]
    fn test_empty_combinators() {
        let input = DirectionalInput::none();
        assert!(InputCondition::All(vec![]).evaluate(&input));
        assert!(!InputCondition::Any(vec![]).evaluate(&input));
    }

    #[test]
    fn test_custom_rule_order_changes_priority() {
        // vertical first
        let rules = vec![
            WalkRule::new(InputCondition::Held(Direction::Up), Facing::Back),
            WalkRule::new(InputCondition::Held(Direction::Left), Facing::Left),
        ];
        let input = DirectionalInput::only(Direction::Left).with(Direction::Up);
        assert_eq!(select_walk(&rules, &input), Some(Facing::Back));
    }

    #[test]
    fn test_rules_deserialize_from_json() {
        let json = r#"[
            {"when": {"Held": "Left"}, "facing": "Left"},
            {"when": {"Not": {"Held": "Down"}}, "facing": "Back"}
        ]"#;
        let rules: Vec<WalkRule> = serde_json::from_str(json).unwrap();
        assert_eq!(rules.len(), 2);
        assert_eq!(rules[0], WalkRule::new(InputCondition::Held(Direction::Left), Facing::Left));
        assert_eq!(
            select_walk(&rules, &DirectionalInput::none()),
            Some(Facing::Back)
        );
    }
}
