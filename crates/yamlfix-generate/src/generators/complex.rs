const COMPLEX_YAML: &str = r#"default:
  host: default.host
  port: 1234

development:
  host: default.host
  port: 1234
  database: dev_db
  description: |
    This is a multi-line
    description with YAML
    block scalar.

production:
  host: default.host
  port: 1234
  database: prod_db
  description: >
    Production description
    with folded newlines
    and special characters: !@#$%^&*()
"#;

/// Hand-written document exercising block (`|`) and folded (`>`) scalars.
///
/// Unlike the generated shapes this text already ends with a newline.
pub fn generate_complex_yaml() -> &'static str {
    COMPLEX_YAML
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn has_three_sections() {
        let sections: Vec<&str> = generate_complex_yaml()
            .lines()
            .filter(|line| !line.is_empty() && !line.starts_with(' '))
            .collect();
        assert_eq!(sections, vec!["default:", "development:", "production:"]);
    }

    #[test]
    fn keeps_scalar_styles_verbatim() {
        let text = generate_complex_yaml();
        assert!(text.contains("  description: |\n    This is a multi-line\n"));
        assert!(text.contains("  description: >\n    Production description\n"));
        assert!(text.ends_with("special characters: !@#$%^&*()\n"));
    }
}
