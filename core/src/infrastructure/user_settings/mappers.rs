use chrono::{TimeZone, Utc};

use crate::domain::user_settings::entities::UserSettings;
use crate::entity::user_settings::Model as UserSettingsModel;

impl From<UserSettingsModel> for UserSettings {
    fn from(model: UserSettingsModel) -> Self {
        UserSettings {
            user_id: model.user_id,
            system_prompt: model.system_prompt,
            updated_at: Utc.from_utc_datetime(&model.updated_at),
        }
    }
}
