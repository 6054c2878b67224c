use serde_json::Value;
use sqlx::FromRow;

use business::domain::profile::model::ProfileRecord;

#[derive(Debug, FromRow)]
pub struct ProfileEntity {
    pub user_id: String,
    pub age: Option<i32>,
    pub gender: Option<String>,
    pub weight_kg: Option<f64>,
    pub height_cm: Option<f64>,
    pub health_goal: Option<String>,
    pub diet_type: Option<String>,
    pub preferences: Option<Value>,
}

impl ProfileEntity {
    pub fn into_domain(self) -> ProfileRecord {
        ProfileRecord {
            user_id: self.user_id,
            age: self.age,
            gender: self.gender,
            weight_kg: self.weight_kg,
            height_cm: self.height_cm,
            health_goal: self.health_goal,
            diet_type: self.diet_type,
            preferences: self.preferences,
        }
    }
}
