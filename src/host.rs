//! Host-side vector management: random initialization and preview printing.

use rand::Rng;

/// Set to false to silence all array previews.
pub const PRINT_ENABLED: bool = true;

/// Vectors longer than this are truncated to a head/tail preview.
const PREVIEW_FULL_MAX: usize = 15;
const PREVIEW_HEAD: usize = 5;
const PREVIEW_TAIL: usize = 5;
const ELLIPSIS: &str = " ..... ";
const SEPARATOR: &str = "----------------------------";

/// Allocate a vector of `len` elements with uniform random values in [0, 100).
pub fn init_random<R: Rng>(len: usize, rng: &mut R) -> Vec<i32> {
    (0..len).map(|_| rng.random_range(0..100)).collect()
}

/// Render a preview of `values`: all elements when the vector is short,
/// otherwise the first and last five joined by an ellipsis marker.
pub fn preview(values: &[i32]) -> String {
    let join = |vals: &[i32]| {
        vals.iter()
            .map(|v| v.to_string())
            .collect::<Vec<_>>()
            .join(" ")
    };

    if values.len() > PREVIEW_FULL_MAX {
        let head = join(&values[..PREVIEW_HEAD]);
        let tail = join(&values[values.len() - PREVIEW_TAIL..]);
        format!("{head}{ELLIPSIS}{tail}")
    } else {
        join(values)
    }
}

/// Print the preview of `values` followed by a separator line.
pub fn print_vector(values: &[i32]) {
    if !PRINT_ENABLED {
        return;
    }
    println!("{}", preview(values));
    println!("{SEPARATOR}");
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn init_random_values_stay_in_range() {
        let mut rng = StdRng::seed_from_u64(42);
        let values = init_random(1000, &mut rng);
        assert_eq!(values.len(), 1000);
        assert!(values.iter().all(|&v| (0..100).contains(&v)));
    }

    #[test]
    fn preview_shows_all_elements_for_short_vectors() {
        let values: Vec<i32> = (0..10).collect();
        let rendered = preview(&values);
        assert_eq!(rendered, "0 1 2 3 4 5 6 7 8 9");
        assert!(!rendered.contains("....."));
    }

    #[test]
    fn preview_shows_all_fifteen_elements_at_the_boundary() {
        let values: Vec<i32> = (0..15).collect();
        let rendered = preview(&values);
        assert_eq!(rendered.split_whitespace().count(), 15);
        assert!(!rendered.contains("....."));
    }

    #[test]
    fn preview_truncates_long_vectors_to_head_and_tail() {
        let values: Vec<i32> = (0..20).collect();
        let rendered = preview(&values);
        assert_eq!(rendered, "0 1 2 3 4 ..... 15 16 17 18 19");
        let numbers = rendered
            .split_whitespace()
            .filter(|t| t.chars().all(|c| c.is_ascii_digit()))
            .count();
        assert_eq!(numbers, 10);
    }

    #[test]
    fn preview_of_single_element() {
        assert_eq!(preview(&[7]), "7");
    }
}
