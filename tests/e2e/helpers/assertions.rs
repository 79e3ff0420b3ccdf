use serde_json::Value;

pub fn assert_food_response(food: &Value, expected_name: &str, expected_status: &str) {
    assert!(
        food.get("id").and_then(|v| v.as_i64()).is_some(),
        "Missing numeric id field"
    );
    assert_eq!(
        food.get("name").and_then(|v| v.as_str()),
        Some(expected_name)
    );
    assert_eq!(
        food.get("status").and_then(|v| v.as_str()),
        Some(expected_status)
    );
}

pub fn assert_me_response(user: &Value) {
    assert!(
        user.get("id").and_then(|v| v.as_i64()).is_some(),
        "Missing numeric id field"
    );
    assert!(
        user.get("email").and_then(|v| v.as_str()).is_some(),
        "Missing email field"
    );
}

pub fn assert_token_response(response: &Value) {
    let jwt = response
        .get("jwt")
        .and_then(|v| v.as_str())
        .expect("Missing jwt field");
    assert!(!jwt.is_empty(), "jwt should not be empty");
}
