// Display normalization for price tiers and ratings
use crate::model::Value;

const FULL_STAR: char = '★';
const EMPTY_STAR: char = '☆';
const STAR_COUNT: usize = 5;

/// Maps a price tier to its dollar symbols. Anything outside 1..=4,
/// including text, non-integral or missing values, is "N/A".
pub fn price_level_to_string(level: Option<&Value>) -> &'static str {
    match level.and_then(Value::as_number) {
        Some(l) if l == 1.0 => "$",
        Some(l) if l == 2.0 => "$$",
        Some(l) if l == 3.0 => "$$$",
        Some(l) if l == 4.0 => "$$$$",
        _ => "N/A",
    }
}

/// Renders a rating as exactly five glyphs. A fractional part of .5 or more
/// adds one more filled star; there is no distinct half glyph.
pub fn rating_to_stars(rating: f64) -> String {
    let rating = if rating.is_nan() { 0.0 } else { rating.clamp(0.0, STAR_COUNT as f64) };
    let full = rating.floor() as usize;
    let half = usize::from(rating % 1.0 >= 0.5);

    let mut stars = String::with_capacity(STAR_COUNT * FULL_STAR.len_utf8());
    stars.extend(std::iter::repeat_n(FULL_STAR, full + half));
    stars.extend(std::iter::repeat_n(EMPTY_STAR, STAR_COUNT - full - half));
    stars
}

/// Numeric rating shown next to the stars, one decimal with ties rounded up.
pub fn format_rating(rating: f64) -> String {
    format!("{:.1}", (rating * 10.0).round() / 10.0)
}

pub fn maps_url(place_id: &str) -> String {
    format!("https://www.google.com/maps/place/?q=place_id:{}", place_id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn price_symbols() {
        assert_eq!(price_level_to_string(Some(&Value::Number(1.0))), "$");
        assert_eq!(price_level_to_string(Some(&Value::Number(2.0))), "$$");
        assert_eq!(price_level_to_string(Some(&Value::Number(3.0))), "$$$");
        assert_eq!(price_level_to_string(Some(&Value::Number(4.0))), "$$$$");
    }

    #[test]
    fn price_out_of_range_is_na() {
        for n in [0.0, 5.0, 2.5, -1.0, f64::NAN] {
            assert_eq!(price_level_to_string(Some(&Value::Number(n))), "N/A", "{}", n);
        }
        assert_eq!(price_level_to_string(None), "N/A");
        assert_eq!(price_level_to_string(Some(&Value::from("1"))), "N/A");
        assert_eq!(price_level_to_string(Some(&Value::Bool(true))), "N/A");
    }

    #[test]
    fn stars_are_always_five_glyphs() {
        let mut r = 0.0;
        while r <= 5.0 {
            assert_eq!(rating_to_stars(r).chars().count(), 5, "rating {}", r);
            r += 0.05;
        }
        assert_eq!(rating_to_stars(7.3).chars().count(), 5);
        assert_eq!(rating_to_stars(-2.0).chars().count(), 5);
        assert_eq!(rating_to_stars(f64::NAN).chars().count(), 5);
    }

    #[test]
    fn star_boundaries() {
        assert_eq!(rating_to_stars(0.0), "☆☆☆☆☆");
        assert_eq!(rating_to_stars(5.0), "★★★★★");
        assert_eq!(rating_to_stars(3.5), "★★★★☆");
        assert_eq!(rating_to_stars(3.49), "★★★☆☆");
        assert_eq!(rating_to_stars(4.7), "★★★★★");
    }

    #[test]
    fn rating_one_decimal() {
        assert_eq!(format_rating(4.0), "4.0");
        assert_eq!(format_rating(3.94), "3.9");
        assert_eq!(format_rating(4.25), "4.3");
        assert_eq!(format_rating(2.25), "2.3");
        assert_eq!(format_rating(0.25), "0.3");
    }

    #[test]
    fn map_link() {
        assert_eq!(
            maps_url("ChIJ123"),
            "https://www.google.com/maps/place/?q=place_id:ChIJ123"
        );
    }
}
