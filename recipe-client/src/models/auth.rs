use serde::{Deserialize, Serialize};

/// Body returned by the credential-exchange endpoints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthResponseData {
    pub id_token: String,
    pub email: String,
    pub refresh_token: String,
    pub expires_in: String,
    pub local_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub registered: Option<bool>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_sign_in_response() {
        let raw = r#"{
            "kind": "identitytoolkit#VerifyPasswordResponse",
            "localId": "abc",
            "email": "cook@example.com",
            "displayName": "",
            "idToken": "id-token",
            "registered": true,
            "refreshToken": "refresh",
            "expiresIn": "3600"
        }"#;
        let data: AuthResponseData = serde_json::from_str(raw).unwrap();
        assert_eq!(data.local_id, "abc");
        assert_eq!(data.expires_in, "3600");
        assert_eq!(data.registered, Some(true));
    }

    #[test]
    fn registered_is_optional() {
        let raw = r#"{"localId":"abc","email":"e","idToken":"t","refreshToken":"r","expiresIn":"60"}"#;
        let data: AuthResponseData = serde_json::from_str(raw).unwrap();
        assert_eq!(data.registered, None);
    }
}
