use chrono::{TimeZone, Utc};

use crate::domain::child_profile::entities::ChildProfile;
use crate::entity::child_profiles::Model as ChildProfileModel;

impl From<ChildProfileModel> for ChildProfile {
    fn from(model: ChildProfileModel) -> Self {
        ChildProfile {
            id: model.id,
            user_id: model.user_id,
            name: model.name,
            age: model.age,
            preferences: model.preferences,
            allergies: model.allergies,
            created_at: Utc.from_utc_datetime(&model.created_at),
            updated_at: Utc.from_utc_datetime(&model.updated_at),
        }
    }
}

impl From<&ChildProfileModel> for ChildProfile {
    fn from(model: &ChildProfileModel) -> Self {
        ChildProfile::from(model.clone())
    }
}
