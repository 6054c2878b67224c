/// Mass assumed when quantity or unit cannot be interpreted.
pub const DEFAULT_GRAMS: f64 = 100.0;

/// Average mass of one counted piece.
pub const GRAMS_PER_PIECE: f64 = 50.0;

/// Grams per one unit of `unit`, or `None` for units outside the table.
/// Volumes assume the density of water.
pub fn grams_per_unit(unit: &str) -> Option<f64> {
    match unit.trim().to_lowercase().as_str() {
        "g" | "gram" | "grams" => Some(1.0),
        "kg" | "kilogram" | "kilograms" => Some(1000.0),
        "ml" | "milliliter" | "milliliters" | "millilitre" | "millilitres" => Some(1.0),
        "l" | "liter" | "liters" | "litre" | "litres" => Some(1000.0),
        "piece" | "pieces" => Some(GRAMS_PER_PIECE),
        _ => None,
    }
}

/// Converts a quantity into grams. Missing or unknown units and
/// non-positive quantities fall back to [`DEFAULT_GRAMS`].
pub fn estimate_grams(quantity: f64, unit: Option<&str>) -> f64 {
    if quantity.is_nan() || quantity <= 0.0 {
        return DEFAULT_GRAMS;
    }
    match unit.and_then(grams_per_unit) {
        Some(factor) => quantity * factor,
        None => DEFAULT_GRAMS,
    }
}
