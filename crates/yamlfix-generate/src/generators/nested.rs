/// Nested mapping with `depth` levels of `width` keys each.
///
/// Every level but the last is followed by a `nested<level>:` marker at that
/// level's indent; the next level is indented two further spaces.
pub fn generate_nested_yaml(depth: usize, width: usize) -> String {
    let mut lines = Vec::with_capacity(depth * (width + 1));
    for level in 0..depth {
        let indent = "  ".repeat(level);
        for i in 0..width {
            lines.push(format!("{indent}key{level}_{i}: \"value{level}_{i}\""));
        }
        if level + 1 < depth {
            lines.push(format!("{indent}nested{level}:"));
        }
    }
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn two_levels_of_two() {
        assert_eq!(
            generate_nested_yaml(2, 2),
            "key0_0: \"value0_0\"\nkey0_1: \"value0_1\"\nnested0:\n  key1_0: \"value1_0\"\n  key1_1: \"value1_1\""
        );
    }

    #[test]
    fn counts_entries_and_markers() {
        let text = generate_nested_yaml(4, 10);
        let entries = text.lines().filter(|line| line.contains(": \"")).count();
        let markers = text
            .lines()
            .filter(|line| line.trim_start().starts_with("nested"))
            .count();
        assert_eq!(entries, 40);
        assert_eq!(markers, 3);
    }

    #[test]
    fn indents_two_spaces_per_level() {
        let text = generate_nested_yaml(3, 1);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(
            lines,
            vec![
                "key0_0: \"value0_0\"",
                "nested0:",
                "  key1_0: \"value1_0\"",
                "  nested1:",
                "    key2_0: \"value2_0\"",
            ]
        );
    }

    #[test]
    fn degenerate_shapes() {
        assert_eq!(generate_nested_yaml(0, 5), "");
        assert_eq!(generate_nested_yaml(1, 0), "");
        assert_eq!(generate_nested_yaml(3, 0), "nested0:\n  nested1:");
    }
}
