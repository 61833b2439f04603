use serde::de::DeserializeOwned;

/// Parse a snake_case enum value using serde-deserialization.
pub fn parse_enum<T>(raw: &str, field: &str) -> anyhow::Result<T>
where
    T: DeserializeOwned,
{
    let normalized = raw.trim().to_ascii_lowercase().replace('-', "_");
    let json = format!("\"{normalized}\"");
    serde_json::from_str(&json).map_err(|error| anyhow::anyhow!("invalid {field} '{raw}': {error}"))
}

#[cfg(test)]
mod tests {
    use prolio_core::enums::{EntityKind, EntityStatus};

    use super::parse_enum;

    #[test]
    fn parses_snake_case_enum() {
        let kind: EntityKind = parse_enum("company", "kind").expect("kind should parse");
        assert_eq!(kind, EntityKind::Company);
    }

    #[test]
    fn accepts_status_aliases() {
        let status: EntityStatus = parse_enum("Active", "status").expect("status should parse");
        assert_eq!(status, EntityStatus::Verified);
    }

    #[test]
    fn errors_on_invalid_enum() {
        let err = parse_enum::<EntityStatus>("done", "status").expect_err("should fail");
        assert!(err.to_string().contains("invalid status 'done'"));
    }
}
