use aurum_backend::models::{PricingInput, Purity};
use aurum_backend::pricing::{self, PricingError, GST_RATE};
use rust_decimal::Decimal;
use std::collections::HashMap;
use uuid::Uuid;

fn standard_rates() -> HashMap<Purity, Decimal> {
    let mut rates = HashMap::new();
    rates.insert(Purity::Gold22K, Decimal::new(6000, 0));
    rates.insert(Purity::Gold18K, Decimal::new(4900, 0));
    rates.insert(Purity::Gold14K, Decimal::new(3800, 0));
    rates.insert(Purity::Silver, Decimal::new(75, 0));
    rates.insert(Purity::Platinum, Decimal::new(3200, 0));
    rates
}

fn input(
    weight: Decimal,
    purity: Purity,
    making_pct: Decimal,
    wastage_pct: Decimal,
) -> PricingInput {
    PricingInput {
        weight_grams: weight,
        purity,
        making_charge_pct: making_pct,
        wastage_pct,
        category: None,
    }
}

/// Unit tests for the pricing calculator
#[test]
fn test_worked_example() {
    // 10g of 22K at 6000/g, 12% making, 2% wastage
    let input = input(
        Decimal::new(10, 0),
        Purity::Gold22K,
        Decimal::new(12, 0),
        Decimal::new(2, 0),
    );

    let breakdown = pricing::calculate(&input, &standard_rates()).unwrap();

    assert_eq!(breakdown.gold_value, Decimal::new(60000, 0));
    assert_eq!(breakdown.making_charges, Decimal::new(7200, 0));
    assert_eq!(breakdown.wastage_amount, Decimal::new(1200, 0));
    assert_eq!(breakdown.subtotal, Decimal::new(68400, 0));
    assert_eq!(breakdown.gst_amount, Decimal::new(2052, 0));
    assert_eq!(breakdown.total_price, Decimal::new(70452, 0));
}

#[test]
fn test_invariants_hold() {
    let input = input(
        Decimal::new(125, 1), // 12.5g
        Purity::Gold18K,
        Decimal::new(85, 1), // 8.5%
        Decimal::new(3, 0),
    );

    let b = pricing::calculate(&input, &standard_rates()).unwrap();

    assert_eq!(b.subtotal, b.gold_value + b.making_charges + b.wastage_amount);
    assert_eq!(b.gst_amount, b.subtotal * GST_RATE);
    assert_eq!(b.total_price, b.subtotal + b.gst_amount);
}

#[test]
fn test_charges_never_reduce_price() {
    // Charges and tax never bring the total below the metal value
    let cases = [
        (Decimal::new(1, 1), Purity::Silver, Decimal::ZERO, Decimal::ZERO),
        (Decimal::new(5, 0), Purity::Gold14K, Decimal::new(20, 0), Decimal::ZERO),
        (Decimal::new(100, 0), Purity::Platinum, Decimal::new(12, 0), Decimal::new(7, 0)),
    ];

    for (weight, purity, making, wastage) in cases {
        let b = pricing::calculate(&input(weight, purity, making, wastage), &standard_rates())
            .unwrap();
        assert!(b.total_price >= b.gold_value, "total below gold value for {}", purity);
    }
}

#[test]
fn test_deterministic() {
    let input = input(
        Decimal::new(7, 0),
        Purity::Gold22K,
        Decimal::new(10, 0),
        Decimal::new(1, 0),
    );
    let rates = standard_rates();

    let first = pricing::calculate(&input, &rates).unwrap();
    let second = pricing::calculate(&input, &rates).unwrap();

    assert_eq!(first, second);
}

#[test]
fn test_zero_charges_boundary() {
    let input = input(Decimal::new(10, 0), Purity::Gold22K, Decimal::ZERO, Decimal::ZERO);

    let b = pricing::calculate(&input, &standard_rates()).unwrap();

    assert_eq!(b.subtotal, b.gold_value);
    assert_eq!(b.total_price, b.gold_value * Decimal::new(103, 2));
}

#[test]
fn test_missing_rate_is_an_error() {
    let mut rates = standard_rates();
    rates.remove(&Purity::Platinum);

    let input = input(
        Decimal::new(10, 0),
        Purity::Platinum,
        Decimal::new(5, 0),
        Decimal::ZERO,
    );

    let result = pricing::calculate(&input, &rates);
    assert_eq!(result, Err(PricingError::MissingRate(Purity::Platinum)));
}

#[test]
fn test_non_positive_rate_rejected() {
    let mut rates = standard_rates();
    rates.insert(Purity::Silver, Decimal::ZERO);

    let input = input(Decimal::new(10, 0), Purity::Silver, Decimal::ZERO, Decimal::ZERO);

    let result = pricing::calculate(&input, &rates);
    assert_eq!(result, Err(PricingError::InvalidRate(Purity::Silver)));
}

#[test]
fn test_invalid_weight_rejected() {
    for weight in [Decimal::ZERO, Decimal::new(-5, 0)] {
        let input = input(weight, Purity::Gold22K, Decimal::ZERO, Decimal::ZERO);
        let result = pricing::calculate(&input, &standard_rates());
        assert_eq!(result, Err(PricingError::InvalidWeight(weight)));
    }
}

#[test]
fn test_out_of_range_percentage_rejected() {
    let input = input(
        Decimal::new(10, 0),
        Purity::Gold22K,
        Decimal::new(101, 0),
        Decimal::ZERO,
    );

    let result = pricing::calculate(&input, &standard_rates());
    assert!(matches!(
        result,
        Err(PricingError::InvalidPercentage { name: "making_charge_pct", .. })
    ));
}

#[test]
fn test_display_rounding_preserves_identities() {
    // Fractional weight so the full-precision chain has many decimals
    let input = input(
        Decimal::new(3171, 3), // 3.171g
        Purity::Gold18K,
        Decimal::new(115, 1), // 11.5%
        Decimal::new(25, 1),  // 2.5%
    );

    let rounded = pricing::calculate(&input, &standard_rates()).unwrap().rounded();

    assert_eq!(rounded.gold_value.scale(), 0);
    assert_eq!(
        rounded.subtotal,
        rounded.gold_value + rounded.making_charges + rounded.wastage_amount
    );
    assert_eq!(rounded.total_price, rounded.subtotal + rounded.gst_amount);
}

/// Unit tests for models
#[test]
fn test_purity_conversion() {
    assert_eq!(Purity::Gold22K.as_str(), "22K");
    assert_eq!(Purity::Silver.as_str(), "Silver");

    assert_eq!(Purity::from_str("22K"), Ok(Purity::Gold22K));
    assert_eq!(Purity::from_str("22k"), Ok(Purity::Gold22K));
    assert_eq!(Purity::from_str("platinum"), Ok(Purity::Platinum));
    assert!(Purity::from_str("24K").is_err());
}

#[test]
fn test_purity_serde_string_forms() {
    let json = serde_json::to_string(&Purity::Gold18K).unwrap();
    assert_eq!(json, "\"18K\"");

    let parsed: Purity = serde_json::from_str("\"Platinum\"").unwrap();
    assert_eq!(parsed, Purity::Platinum);
}

/// Unit tests for Decimal operations
#[test]
fn test_decimal_precision() {
    let a = Decimal::new(100, 0);
    let b = Decimal::new(50, 0);
    let result = a + b;
    assert_eq!(result, Decimal::new(150, 0));

    let division = a / Decimal::new(2, 0);
    assert_eq!(division, Decimal::new(50, 0));
}

/// Unit tests for UUID generation
#[test]
fn test_uuid_generation() {
    let id1 = Uuid::new_v4();
    let id2 = Uuid::new_v4();
    assert_ne!(id1, id2);
}

/// Unit tests for error mapping
#[test]
fn test_pricing_error_status_codes() {
    use aurum_backend::error::AppError;

    let unavailable = AppError::from(PricingError::MissingRate(Purity::Gold22K));
    assert_eq!(unavailable.status_code(), 503);
    assert!(unavailable.is_rate_unavailable());

    let invalid = AppError::from(PricingError::InvalidWeight(Decimal::ZERO));
    assert_eq!(invalid.status_code(), 400);
    assert!(!invalid.is_rate_unavailable());
}
