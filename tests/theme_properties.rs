//! Property tests for color parsing and inheritance.

use std::sync::Arc;

use proptest::prelude::*;
use themestore::{Color, ThemeDefinition, Value, ValueMap};

fn theme(name: &str, entries: Vec<(String, Value)>) -> ThemeDefinition {
    ThemeDefinition::new(name, entries.into_iter().collect::<ValueMap>())
}

proptest! {
    #[test]
    fn hex_colors_parse_with_or_without_hash(
        red in any::<u8>(),
        green in any::<u8>(),
        blue in any::<u8>(),
        with_hash in prop::bool::ANY,
        uppercase in prop::bool::ANY,
    ) {
        let mut hex = format!("{:02x}{:02x}{:02x}", red, green, blue);
        if uppercase {
            hex = hex.to_uppercase();
        }
        if with_hash {
            hex.insert(0, '#');
        }

        let definition = theme("t", vec![("accentColor".to_string(), Value::from(hex))]);
        prop_assert_eq!(definition.color("accentColor"), Color::rgb(red, green, blue));
    }

    #[test]
    fn wrong_length_colors_are_clear(digits in "[0-9a-fA-F]{0,12}") {
        prop_assume!(digits.len() != 6);

        let definition = theme("t", vec![
            ("plain".to_string(), Value::from(digits.clone())),
            ("hashed".to_string(), Value::from(format!("#{}", digits))),
        ]);
        prop_assert_eq!(definition.color("plain"), Color::CLEAR);
        prop_assert_eq!(definition.color("hashed"), Color::CLEAR);
    }

    #[test]
    fn to_hex_parses_back(red in any::<u8>(), green in any::<u8>(), blue in any::<u8>()) {
        let color = Color::rgb(red, green, blue);
        prop_assert_eq!(Color::from_hex(&color.to_hex()), Some(color));
    }

    #[test]
    fn child_values_shadow_parent(
        key in "[a-z][a-zA-Z]{0,10}",
        parent_value in any::<i64>(),
        child_value in any::<i64>(),
    ) {
        let parent = Arc::new(theme("parent", vec![(key.clone(), Value::from(parent_value))]));
        let child = theme("child", vec![(key.clone(), Value::from(child_value))])
            .with_parent(parent.clone());

        prop_assert_eq!(child.integer(&key), child_value);
        prop_assert_eq!(parent.integer(&key), parent_value);
    }

    #[test]
    fn missing_child_values_are_inherited(
        depth in 1usize..6,
        value in any::<i64>(),
    ) {
        let root = theme("root", vec![("spacing".to_string(), Value::from(value))]);
        let mut current = Arc::new(root);
        for level in 0..depth {
            current = Arc::new(theme(&format!("level{}", level), Vec::new()).with_parent(current));
        }

        prop_assert_eq!(current.integer("spacing"), value);
        prop_assert_eq!(current.chain().count(), depth + 1);
    }

    #[test]
    fn cached_colors_match_fresh_lookups(
        red in any::<u8>(),
        green in any::<u8>(),
        blue in any::<u8>(),
    ) {
        let hex = format!("{:02x}{:02x}{:02x}", red, green, blue);
        let definition = theme("t", vec![("tint".to_string(), Value::from(hex))]);

        let first = definition.color("tint");
        prop_assert_eq!(definition.cached_value_count(), 1);
        prop_assert_eq!(definition.color("tint"), first);

        definition.clear_caches();
        prop_assert_eq!(definition.cached_value_count(), 0);
        prop_assert_eq!(definition.color("tint"), first);
    }
}
