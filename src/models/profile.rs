// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use serde::{Deserialize, Serialize};

use super::lenient;
use super::ApiResponse;

/// User profile as stored by `utente_profilo.php`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    #[serde(default, deserialize_with = "lenient::int")]
    pub user_id: i64,
    /// Height in centimeters
    #[serde(rename = "height", default, deserialize_with = "lenient::opt_number")]
    pub height_cm: Option<f64>,
    /// Body weight in kilograms
    #[serde(rename = "weight", default, deserialize_with = "lenient::opt_number")]
    pub weight_kg: Option<f64>,
    #[serde(default, deserialize_with = "lenient::opt_int")]
    pub age: Option<i64>,
    #[serde(default, deserialize_with = "lenient::opt_text")]
    pub gender: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_text")]
    pub experience_level: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_text")]
    pub fitness_goals: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_text")]
    pub injuries: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_text")]
    pub preferences: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_text")]
    pub notes: Option<String>,
}

impl UserProfile {
    /// Body mass index, when height and weight are both known
    pub fn bmi(&self) -> Option<f64> {
        let height_m = self.height_cm? / 100.0;
        let weight = self.weight_kg?;
        if height_m <= 0.0 {
            return None;
        }
        Some(weight / (height_m * height_m))
    }
}

impl ApiResponse for UserProfile {
    fn is_success(&self) -> bool {
        true
    }

    fn message(&self) -> Option<&str> {
        None
    }
}

/// Answer to a profile update
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProfileUpdateResponse {
    #[serde(default, deserialize_with = "lenient::flag")]
    pub success: bool,
    #[serde(default, deserialize_with = "lenient::opt_text")]
    pub message: Option<String>,
    #[serde(default)]
    pub profile: Option<UserProfile>,
}

envelope!(ProfileUpdateResponse);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_profile_bmi() {
        let profile: UserProfile =
            serde_json::from_str(r#"{"user_id": 3, "height": "180", "weight": 81}"#).unwrap();
        let bmi = profile.bmi().unwrap();
        assert!((bmi - 25.0).abs() < 0.01);
    }

    #[test]
    fn test_profile_without_height_has_no_bmi() {
        let profile: UserProfile = serde_json::from_str(r#"{"weight": 70}"#).unwrap();
        assert!(profile.bmi().is_none());
    }
}
