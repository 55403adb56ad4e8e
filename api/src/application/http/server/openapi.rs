use crate::application::http::{
    chat::router::ChatApiDoc, child_profile::router::ChildProfileApiDoc,
    health::router::HealthApiDoc, history::router::HistoryApiDoc, recipe::router::RecipeApiDoc,
    settings::router::SettingsApiDoc,
};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Picky Joy API"
    ),
    nest(
        (path = "/chat", api = ChatApiDoc),
        (path = "/messages", api = HistoryApiDoc),
        (path = "/settings/system-prompt", api = SettingsApiDoc),
        (path = "/child-profiles", api = ChildProfileApiDoc),
        (path = "/recipes", api = RecipeApiDoc),
        (path = "/health", api = HealthApiDoc),
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_feature_is_documented() {
        let openapi = ApiDoc::openapi();

        for path in [
            "/chat",
            "/messages",
            "/messages/export",
            "/settings/system-prompt",
            "/child-profiles",
            "/child-profiles/{profile_id}",
            "/recipes/extract",
            "/recipes/{recipe_id}/ratings",
            "/health/ready",
        ] {
            assert!(openapi.paths.paths.contains_key(path), "missing {path}");
        }
    }
}
