//! Integration tests for the feature encoder (label encoders + price scaler).

use dairypulse_classifiers::config::{PriceRange, RangePolicy};
use dairypulse_classifiers::preprocessing::{LabelEncoder, PriceScaler};
use dairypulse_classifiers::{FeatureEncoder, PredictError, PredictionRequest};

const MONTHS: [&str; 12] = [
    "January", "February", "March", "April", "May", "June", "July", "August", "September",
    "October", "November", "December",
];

fn encoder(policy: RangePolicy) -> FeatureEncoder {
    let month = LabelEncoder::from_classes(MONTHS.iter().map(|m| m.to_string()).collect()).unwrap();
    let product = LabelEncoder::fit(["Milk", "Curd", "Paneer", "Butter", "Ghee"]);
    let price = PriceScaler::Standard {
        mean: 150.0,
        scale: 100.0,
    };
    FeatureEncoder::new(month, product, price, PriceRange::new(10.0, 500.0, policy))
}

// ---------------------------------------------------------------------------
// Categorical encoding
// ---------------------------------------------------------------------------

#[test]
fn every_month_round_trips_through_its_code() {
    let enc = encoder(RangePolicy::Reject);
    for month in enc.months().to_vec() {
        let features = enc
            .encode(&PredictionRequest::new(month.clone(), "Milk", 50.0))
            .unwrap();
        assert_eq!(enc.decode_month(features.month_code()).unwrap(), month);
    }
}

#[test]
fn stored_class_order_defines_codes() {
    let enc = encoder(RangePolicy::Reject);
    let features = enc
        .encode(&PredictionRequest::new("January", "Butter", 50.0))
        .unwrap();
    assert_eq!(features.month_code(), 0);
    // fitted product classes are sorted: Butter, Curd, Ghee, Milk, Paneer
    assert_eq!(features.product_code(), 0);
    assert_eq!(enc.decode_product(3).unwrap(), "Milk");
}

#[test]
fn unknown_month_is_an_error_not_a_default() {
    let enc = encoder(RangePolicy::Reject);
    let err = enc
        .encode(&PredictionRequest::new("Smarch", "Milk", 50.0))
        .unwrap_err();
    assert_eq!(
        err,
        PredictError::UnknownCategory {
            encoder: "month".to_string(),
            label: "Smarch".to_string(),
        }
    );
}

#[test]
fn unknown_product_is_an_error() {
    let enc = encoder(RangePolicy::Reject);
    let err = enc
        .encode(&PredictionRequest::new("March", "Cheese", 50.0))
        .unwrap_err();
    assert!(matches!(err, PredictError::UnknownCategory { ref encoder, .. } if encoder == "product"));
}

#[test]
fn labels_are_case_sensitive() {
    let enc = encoder(RangePolicy::Reject);
    assert!(enc
        .encode(&PredictionRequest::new("january", "Milk", 50.0))
        .is_err());
}

#[test]
fn decode_out_of_range_code_fails() {
    let enc = encoder(RangePolicy::Reject);
    assert!(enc.decode_month(12).is_err());
}

// ---------------------------------------------------------------------------
// Price scaling and range policy
// ---------------------------------------------------------------------------

#[test]
fn encode_is_deterministic() {
    let enc = encoder(RangePolicy::Reject);
    let req = PredictionRequest::new("July", "Paneer", 275.0);
    assert_eq!(enc.encode(&req).unwrap(), enc.encode(&req).unwrap());
}

#[test]
fn feature_order_is_month_product_price() {
    let enc = encoder(RangePolicy::Reject);
    let features = enc
        .encode(&PredictionRequest::new("March", "Milk", 250.0))
        .unwrap();
    assert_eq!(features.as_slice(), &[2.0, 3.0, 1.0]);
    assert_eq!(features.to_array().len(), 3);
}

#[test]
fn range_bounds_are_inclusive() {
    let enc = encoder(RangePolicy::Reject);
    assert!(enc.encode(&PredictionRequest::new("May", "Milk", 10.0)).is_ok());
    assert!(enc.encode(&PredictionRequest::new("May", "Milk", 500.0)).is_ok());
}

#[test]
fn prices_outside_range_are_rejected() {
    let enc = encoder(RangePolicy::Reject);
    for price in [9.0, 501.0] {
        let err = enc
            .encode(&PredictionRequest::new("May", "Milk", price))
            .unwrap_err();
        assert!(matches!(err, PredictError::InvalidInput(_)), "price {}", price);
    }
}

#[test]
fn extrapolate_policy_scales_outside_range() {
    let enc = encoder(RangePolicy::Extrapolate);
    let features = enc
        .encode(&PredictionRequest::new("May", "Milk", 650.0))
        .unwrap();
    assert!((features.scaled_price() - 5.0).abs() < 1e-6);
}

#[test]
fn non_finite_price_is_rejected_under_any_policy() {
    for policy in [RangePolicy::Reject, RangePolicy::Extrapolate] {
        let enc = encoder(policy);
        let err = enc
            .encode(&PredictionRequest::new("May", "Milk", f32::NAN))
            .unwrap_err();
        assert!(matches!(err, PredictError::InvalidInput(_)));
    }
}
