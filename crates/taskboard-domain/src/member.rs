use serde::{Deserialize, Serialize};
use taskboard_core::MemberConfig;

pub type MemberId = String;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Member {
    #[serde(alias = "_id")]
    pub id: MemberId,
    pub fullname: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub img_url: Option<String>,
}

impl Member {
    pub fn new(id: impl Into<String>, fullname: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            fullname: fullname.into(),
            img_url: None,
        }
    }

    pub fn with_img_url(mut self, img_url: impl Into<String>) -> Self {
        self.img_url = Some(img_url.into());
        self
    }
}

impl From<&MemberConfig> for Member {
    fn from(config: &MemberConfig) -> Self {
        Self {
            id: config.id.clone(),
            fullname: config.fullname.clone(),
            img_url: config.img_url.clone(),
        }
    }
}
