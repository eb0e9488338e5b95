//! Text generators for each fixture shape.
//!
//! Generators are total: they never fail and always return the same text for
//! the same inputs. Lines are joined with `\n` and carry no trailing newline;
//! the writer appends it.

mod arrays;
mod complex;
mod mapping;
mod nested;

pub use arrays::generate_arrays_yaml;
pub use complex::generate_complex_yaml;
pub use mapping::generate_yaml_mapping;
pub use nested::generate_nested_yaml;

use crate::model::{FixtureKind, FixtureParams};

/// Render the document for `kind` using the sizes in `params`.
pub fn render(kind: FixtureKind, params: &FixtureParams) -> String {
    match kind {
        FixtureKind::Small => generate_yaml_mapping(params.small_size),
        FixtureKind::Large => generate_yaml_mapping(params.large_size),
        FixtureKind::Nested => generate_nested_yaml(params.nested_depth, params.nested_width),
        FixtureKind::Arrays => generate_arrays_yaml(params.array_size, params.array_props),
        FixtureKind::Complex => generate_complex_yaml().to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn render_uses_matching_sizes() {
        let params = FixtureParams {
            small_size: 1,
            large_size: 3,
            ..FixtureParams::default()
        };
        assert_eq!(render(FixtureKind::Small, &params).lines().count(), 1);
        assert_eq!(render(FixtureKind::Large, &params).lines().count(), 3);
        assert_eq!(
            render(FixtureKind::Complex, &params),
            generate_complex_yaml()
        );
    }
}
