use uuid::Uuid;

#[derive(Debug, Clone)]
pub struct CreateChildProfileInput {
    pub name: String,
    pub age: Option<i32>,
    pub preferences: Vec<String>,
    pub allergies: Vec<String>,
}

#[derive(Debug, Clone)]
pub struct UpdateChildProfileInput {
    pub profile_id: Uuid,
    pub name: String,
    pub age: Option<i32>,
    pub preferences: Vec<String>,
    pub allergies: Vec<String>,
}

#[derive(Debug, Clone)]
pub struct DeleteChildProfileInput {
    pub profile_id: Uuid,
}
