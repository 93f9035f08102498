// render/card.rs

use crate::model::{Restaurant, Value};
use crate::normalizer::{format_rating, maps_url, price_level_to_string, rating_to_stars};
use crate::utils::escape_html;

/// Markup for one restaurant card. Only called on eligible records, but
/// tolerates missing fields anyway.
pub fn render_card(restaurant: &Restaurant, fallback_image: &str) -> String {
    let image_src = restaurant.image_url.as_deref().unwrap_or(fallback_image);
    let onerror = format!("this.onerror=null; this.src='{}'", fallback_image);
    let rating = restaurant.rating.as_ref().and_then(Value::as_number);
    let rating_text = match (rating, &restaurant.rating) {
        (Some(n), _) => format_rating(n),
        (None, Some(other)) => other.to_string(),
        (None, None) => format_rating(0.0),
    };
    // Review counts are shown as they appear in the source.
    let reviews = restaurant
        .number_reviews
        .as_ref()
        .map(ToString::to_string)
        .unwrap_or_default();
    let place_id = restaurant.google_maps_place_id.as_deref().unwrap_or_default();

    format!(
        r#"<div class="restaurant">
  <img src="{src}" alt="Restaurant Image" onerror="{onerror}">
  <h2>{name}</h2>
  <p>Address: {address}</p>
  <p>{district} Arrondissement</p>
  <p>Rating: {stars} ({rating}) from {reviews} reviews</p>
  <p>Price Range: {price}</p>
  <a href="{map}" target="_blank">View on Map</a>
</div>"#,
        src = escape_html(image_src),
        onerror = escape_html(&onerror),
        name = escape_html(restaurant.name.as_deref().unwrap_or_default()),
        address = escape_html(restaurant.address.as_deref().unwrap_or("N/A")),
        district = escape_html(restaurant.arrondissement.as_deref().unwrap_or_default()),
        stars = rating_to_stars(rating.unwrap_or(0.0)),
        rating = escape_html(&rating_text),
        reviews = escape_html(&reviews),
        price = escape_html(price_level_to_string(restaurant.price.as_ref())),
        map = escape_html(&maps_url(place_id)),
    )
}
