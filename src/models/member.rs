use serde::{Deserialize, Serialize};

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct MemberEntity {
    pub id: i64,
    pub login: String,
    pub avatar_url: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_member_list_deserializes() {
        let json = r#"[
            {"id": 1, "login": "alice", "avatar_url": "https://example.org/a.png"},
            {"id": 2, "login": "bob", "avatar_url": "https://example.org/b.png"}
        ]"#;

        let members: Vec<MemberEntity> = serde_json::from_str(json).unwrap();

        assert_eq!(members.len(), 2);
        assert_eq!(members[0].login, "alice");
        assert_eq!(members[1].id, 2);
    }
}
