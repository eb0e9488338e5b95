/// Flat mapping of `count` quoted string values: `key<i>: "value<i>"`.
pub fn generate_yaml_mapping(count: usize) -> String {
    (0..count)
        .map(|i| format!("key{i}: \"value{i}\""))
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn emits_two_entries() {
        assert_eq!(generate_yaml_mapping(2), "key0: \"value0\"\nkey1: \"value1\"");
    }

    #[test]
    fn empty_for_zero() {
        assert_eq!(generate_yaml_mapping(0), "");
    }

    #[test]
    fn one_line_per_entry_in_order() {
        let text = generate_yaml_mapping(250);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 250);
        for (i, line) in lines.iter().enumerate() {
            assert_eq!(*line, format!("key{i}: \"value{i}\""));
        }
    }
}
