use reqwest::Method;

use super::{ApiClient, ApiError};
use crate::models::Profile;

pub struct ProfileApi<'a> {
    client: &'a ApiClient,
}

impl ApiClient {
    pub fn profile(&self) -> ProfileApi<'_> {
        ProfileApi { client: self }
    }
}

impl ProfileApi<'_> {
    /// `None` when the user has not saved a shipping profile yet.
    pub async fn get(&self) -> Result<Option<Profile>, ApiError> {
        self.client.get("/profile/getprofile").await
    }

    pub async fn set(&self, profile: &Profile) -> Result<(), ApiError> {
        self.client
            .send_json_unit(Method::POST, "/profile/setprofile", profile)
            .await
    }
}
