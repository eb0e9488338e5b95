/// Sequence of `count` records under a top-level `items` key.
///
/// Each record carries its 0-based `id` and `props` string properties
/// indented four spaces, two beyond the sequence dash.
pub fn generate_arrays_yaml(count: usize, props: usize) -> String {
    let mut lines = Vec::with_capacity(1 + count * (props + 1));
    lines.push("items:".to_string());
    for i in 0..count {
        lines.push(format!("  - id: {i}"));
        for j in 0..props {
            lines.push(format!("    prop{j}: \"value{j}_{i}\""));
        }
    }
    lines.join("\n")
}
