use super::Api;
use crate::error::ClientError;
use crate::http::RequestOptions;
use grocer_types::Profile;

impl Api {
    pub async fn profile(&self) -> Result<Profile, ClientError> {
        self.http.request_as("/profile", RequestOptions::get()).await
    }
}
