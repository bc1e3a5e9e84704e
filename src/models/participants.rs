use serde::{Deserialize, Serialize};

/// A participant document as it sits in the `Studyjams` collection.
///
/// Key names follow the program's progress export verbatim. Every field is
/// optional on the wire so that partially filled rows still render.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ParticipantDocument {
    #[serde(rename = "User Name")]
    pub user_name: String,
    #[serde(rename = "User Email")]
    pub user_email: String,
    #[serde(rename = "Google Cloud Skills Boost Profile URL")]
    pub profile_url: String,
    #[serde(rename = "Profile URL Status")]
    pub profile_url_status: String,
    #[serde(rename = "Access Code Redemption Status")]
    pub access_code_redemption_status: String,
    #[serde(rename = "All Skill Badges & Games Completed")]
    pub all_badges_and_games_completed: String,
    #[serde(rename = "# of Skill Badges Completed")]
    pub skill_badges_completed: i64,
    #[serde(rename = "Names of Completed Skill Badges")]
    pub skill_badge_names: Option<String>,
    #[serde(rename = "# of Arcade Games Completed")]
    pub arcade_games_completed: i64,
    #[serde(rename = "Names of Completed Arcade Games")]
    pub arcade_game_names: Option<String>,
}

/// Reshaped participant used by the leaderboard and profile views.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParticipantRecord {
    pub name: String,
    pub email: String,
    pub profile_url: String,
    pub profile_status: String,
    pub access_code_redeemed: String,
    pub all_badges_completed: String,
    pub skill_badge_count: i64,
    pub skill_badge_names: String,
    pub arcade_game_count: i64,
    pub arcade_game_names: String,
}

impl From<ParticipantDocument> for ParticipantRecord {
    fn from(doc: ParticipantDocument) -> Self {
        Self {
            name: doc.user_name,
            email: doc.user_email,
            profile_url: doc.profile_url,
            profile_status: doc.profile_url_status,
            access_code_redeemed: doc.access_code_redemption_status,
            all_badges_completed: doc.all_badges_and_games_completed,
            skill_badge_count: doc.skill_badges_completed,
            skill_badge_names: doc.skill_badge_names.unwrap_or_default(),
            arcade_game_count: doc.arcade_games_completed,
            arcade_game_names: doc.arcade_game_names.unwrap_or_default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn reshapes_stored_keys() {
        let doc: ParticipantDocument = serde_json::from_value(json!({
            "_id": "66f1",
            "User Name": "Alen Alexander",
            "User Email": "alenalexander001@gmail.com",
            "Google Cloud Skills Boost Profile URL": "https://www.cloudskillsboost.google/",
            "Profile URL Status": "All Good",
            "Access Code Redemption Status": "Yes",
            "All Skill Badges & Games Completed": "No",
            "# of Skill Badges Completed": 8,
            "# of Arcade Games Completed": 1
        }))
        .unwrap();

        let record = ParticipantRecord::from(doc);
        assert_eq!(record.name, "Alen Alexander");
        assert_eq!(record.email, "alenalexander001@gmail.com");
        assert_eq!(record.profile_url, "https://www.cloudskillsboost.google/");
        assert_eq!(record.access_code_redeemed, "Yes");
        assert_eq!(record.skill_badge_count, 8);
        assert_eq!(record.arcade_game_count, 1);
        assert_eq!(record.skill_badge_names, "");
        assert_eq!(record.arcade_game_names, "");
    }

    #[test]
    fn missing_fields_fall_back_to_empty() {
        let doc: ParticipantDocument =
            serde_json::from_value(json!({ "User Email": "x@example.com" })).unwrap();
        let record = ParticipantRecord::from(doc);
        assert_eq!(record.email, "x@example.com");
        assert_eq!(record.name, "");
        assert_eq!(record.skill_badge_count, 0);
    }

    #[test]
    fn wrong_count_type_is_rejected() {
        let parsed = serde_json::from_value::<ParticipantDocument>(json!({
            "User Email": "x@example.com",
            "# of Skill Badges Completed": "many"
        }));
        assert!(parsed.is_err());
    }
}
