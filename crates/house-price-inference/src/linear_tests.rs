use super::*;
use chrono::TimeZone;

fn sample_request() -> PredictionRequest {
    PredictionRequest {
        sqft: 1500.0,
        bedrooms: 3,
        bathrooms: 2.0,
        location: Location::Rural,
        year_built: 2000,
        condition: Condition::Fair,
    }
}

fn fixed_time() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 3, 14, 9, 26, 53).unwrap()
}

fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 0.01
}

#[test]
fn test_default_estimate() {
    let model = LinearPriceModel::default();
    let resp = model.estimate(&sample_request(), fixed_time()).unwrap();

    // 335_000 base * 0.8 rural * 0.95 fair * 0.95 (25 years old)
    assert!(approx(resp.predicted_price, 241_870.0), "{}", resp.predicted_price);
    assert!(approx(resp.confidence_interval[0], 217_683.0));
    assert!(approx(resp.confidence_interval[1], 266_057.0));
    assert_eq!(resp.prediction_time, "2025-03-14T09:26:53Z");
}

#[test]
fn test_interval_brackets_price() {
    let model = LinearPriceModel::default();
    for location in Location::ALL {
        for condition in Condition::ALL {
            let req = PredictionRequest {
                location,
                condition,
                ..sample_request()
            };
            let resp = model.estimate(&req, fixed_time()).unwrap();
            let [low, high] = resp.confidence_interval;
            assert!(low <= resp.predicted_price && resp.predicted_price <= high);
        }
    }
}

#[test]
fn test_importance_keys() {
    let model = LinearPriceModel::default();
    let resp = model.estimate(&sample_request(), fixed_time()).unwrap();
    let mut keys: Vec<&str> = resp.features_importance.keys().map(|k| k.as_str()).collect();
    let mut expected = FEATURE_NAMES.to_vec();
    keys.sort();
    expected.sort();
    assert_eq!(keys, expected);
}

#[test]
fn test_importance_signs() {
    let model = LinearPriceModel::default();
    let resp = model.estimate(&sample_request(), fixed_time()).unwrap();
    let fi = &resp.features_importance;
    assert!(fi["sqft"] > 0.0);
    assert!(approx(fi["location"], -0.2));
    assert!(approx(fi["condition"], -0.05));
    assert!(approx(fi["year_built"], -0.05));
}

#[test]
fn test_additive_importance_shares() {
    let model = LinearPriceModel::default();
    let resp = model.estimate(&sample_request(), fixed_time()).unwrap();
    let fi = &resp.features_importance;
    // 225_000 + 30_000 + 30_000 of a 335_000 base
    assert_eq!(fi["sqft"], 0.6716);
    assert_eq!(fi["bedrooms"], 0.0896);
    assert_eq!(fi["bathrooms"], 0.0896);
}

#[test]
fn test_waterfront_beats_rural() {
    let model = LinearPriceModel::default();
    let rural = model.estimate(&sample_request(), fixed_time()).unwrap();
    let waterfront = model
        .estimate(
            &PredictionRequest {
                location: Location::Waterfront,
                ..sample_request()
            },
            fixed_time(),
        )
        .unwrap();
    assert!(waterfront.predicted_price > rural.predicted_price);
}

#[test]
fn test_future_build_year_has_no_depreciation() {
    let model = LinearPriceModel::default();
    let resp = model
        .estimate(
            &PredictionRequest {
                year_built: 2090,
                ..sample_request()
            },
            fixed_time(),
        )
        .unwrap();
    assert_eq!(resp.features_importance["year_built"], 0.0);
}

#[test]
fn test_oldest_house_depreciation() {
    let model = LinearPriceModel::default();
    let resp = model
        .estimate(
            &PredictionRequest {
                year_built: 1800,
                ..sample_request()
            },
            fixed_time(),
        )
        .unwrap();
    // 225 years at 0.2% per year
    assert!(approx(resp.features_importance["year_built"], -0.45));
}

#[test]
fn test_depreciation_floor() {
    let config = ModelConfig {
        depreciation_rate: 0.01,
        ..ModelConfig::default()
    };
    let model = LinearPriceModel::new(config);
    let resp = model
        .estimate(
            &PredictionRequest {
                year_built: 1800,
                ..sample_request()
            },
            fixed_time(),
        )
        .unwrap();
    assert!(approx(resp.features_importance["year_built"], -0.5));
}

#[test]
fn test_zero_base_fails() {
    let config = ModelConfig {
        base_price: 0.0,
        price_per_sqft: 0.0,
        bedroom_value: 0.0,
        bathroom_value: 0.0,
        ..ModelConfig::default()
    };
    let model = LinearPriceModel::new(config);
    let result = model.estimate(&sample_request(), fixed_time());
    assert!(matches!(result, Err(PredictionError::InferenceFailed(_))));
}

#[test]
fn test_model_id_from_config() {
    let config = ModelConfig {
        id: "coastal".to_string(),
        ..ModelConfig::default()
    };
    let model = LinearPriceModel::new(config);
    assert_eq!(model.id(), "coastal");
    assert!(model.is_loaded());
}

#[tokio::test]
async fn test_predict_batch_order() {
    let model = LinearPriceModel::default();
    let batch = vec![
        PredictionRequest {
            sqft: 3000.0,
            ..sample_request()
        },
        sample_request(),
        PredictionRequest {
            sqft: 800.0,
            ..sample_request()
        },
    ];
    let responses = model.predict_batch(&batch).await.unwrap();
    assert_eq!(responses.len(), 3);
    assert!(responses[0].predicted_price > responses[1].predicted_price);
    assert!(responses[1].predicted_price > responses[2].predicted_price);
}

#[tokio::test]
async fn test_predict_matches_estimate() {
    let model = LinearPriceModel::default();
    let resp = model.predict(&sample_request()).await.unwrap();
    let expected = model.estimate(&sample_request(), fixed_time()).unwrap();
    assert_eq!(resp.predicted_price, expected.predicted_price);
    assert!(chrono::DateTime::parse_from_rfc3339(&resp.prediction_time).is_ok());
}

#[test]
fn test_round_to() {
    assert_eq!(round_to(1.23456, 2), 1.23);
    assert_eq!(round_to(-0.123456, 4), -0.1235);
}
