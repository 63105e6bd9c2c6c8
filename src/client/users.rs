use super::{Client, ClientError};
use crate::objects::User;

impl Client {
    /// `GET projects/{project_id}/users/{user_id}` — fetch a project user.
    pub async fn get_user(&self, user_id: &str) -> Result<User, ClientError> {
        let url = self.project_url(&format!("users/{}", urlencoding::encode(user_id)));
        self.get_json(url).await
    }
}
