use async_trait::async_trait;
use reqwest::Method;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::adapter::supabase::client::{SupabaseSession, ensure_success};
use crate::application::app_error::AppResult;
use crate::application::interface::gateway::profile::{ProfileReader, ProfileWriter};
use crate::domain::entities::id::Id;
use crate::domain::entities::profile::Profile;
use crate::domain::entities::user::User;

const PROFILES: &str = "/rest/v1/profiles";

#[derive(Debug, Serialize, Deserialize)]
struct ProfileRow {
    id: Uuid,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    bio: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    avatar_url: Option<String>,
}

impl From<Profile> for ProfileRow {
    fn from(profile: Profile) -> Self {
        Self {
            id: profile.id.value,
            name: profile.name,
            bio: profile.bio,
            avatar_url: profile.avatar_url,
        }
    }
}

impl From<ProfileRow> for Profile {
    fn from(row: ProfileRow) -> Self {
        Self {
            id: Id::new(row.id),
            name: row.name,
            bio: row.bio,
            avatar_url: row.avatar_url,
        }
    }
}

#[derive(Clone)]
pub struct ProfileGateway {
    session: SupabaseSession,
}

impl ProfileGateway {
    pub fn new(session: SupabaseSession) -> Self {
        Self { session }
    }
}

#[async_trait]
impl ProfileReader for ProfileGateway {
    async fn find_by_id(&self, user_id: &Id<User>) -> AppResult<Option<Profile>> {
        let response = self
            .session
            .request(Method::GET, PROFILES)
            .query(&[
                ("select", "id,name,bio,avatar_url".to_string()),
                ("id", format!("eq.{}", user_id)),
            ])
            .send()
            .await?;
        let rows: Vec<ProfileRow> = ensure_success(response).await?.json().await?;
        Ok(rows.into_iter().next().map(Profile::from))
    }
}

#[async_trait]
impl ProfileWriter for ProfileGateway {
    async fn upsert(&self, profile: Profile) -> AppResult<()> {
        let response = self
            .session
            .request(Method::POST, PROFILES)
            .header("Prefer", "resolution=merge-duplicates,return=minimal")
            .json(&ProfileRow::from(profile))
            .send()
            .await?;
        ensure_success(response).await?;
        Ok(())
    }
}
