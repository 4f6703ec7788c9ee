use roster_ingest::format_fixed_1;
use roster_model::Average;

/// Mean of `sum` over `count`, rounded to one decimal.
///
/// A zero count yields the literal `0` rather than `0.0`.
pub fn mean(sum: i128, count: usize) -> Average {
    if count == 0 {
        return Average::zero();
    }
    let text = format_fixed_1(sum as f64 / count as f64);
    let value = text.parse::<f64>().unwrap_or(0.0);
    Average::new(value, text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mean_rounds_to_one_decimal() {
        let avg = mean(75, 2);
        assert_eq!(avg.as_str(), "37.5");
        assert_eq!(avg.value(), 37.5);
        assert_eq!(mean(100, 3).as_str(), "33.3");
        assert_eq!(mean(70, 2).as_str(), "35.0");
    }

    #[test]
    fn mean_of_nothing_is_literal_zero() {
        assert_eq!(mean(0, 0).as_str(), "0");
        assert_eq!(mean(0, 0).value(), 0.0);
    }

    #[test]
    fn value_is_the_rounded_number() {
        // 24.96 displays as 25.0 and is judged as 25.0
        assert_eq!(mean(2496, 100).value(), 25.0);
    }
}
