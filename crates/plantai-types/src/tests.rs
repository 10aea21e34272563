#[cfg(test)]
mod tests {
    use crate::config::*;
    use crate::error::*;
    use crate::message::*;

    // ─── Message Tests ───────────────────────────────────────

    #[test]
    fn test_message_user() {
        let msg = Message::user("Como calibrar a válvula FV-101?");
        assert_eq!(msg.role, Role::User);
        assert_eq!(msg.content, "Como calibrar a válvula FV-101?");
        assert!(msg.sources.is_none());
        assert!(!msg.id.is_empty());
        assert!(!msg.timestamp.is_empty());
    }

    #[test]
    fn test_message_answer_carries_sources() {
        let msg = Message::answer("Gire a válvula...", vec![sample_source()]);
        assert_eq!(msg.role, Role::Assistant);
        let sources = msg.sources.expect("answer must carry sources");
        assert_eq!(sources.len(), 1);
        assert_eq!(sources[0].uri, "manual.pdf");
    }

    #[test]
    fn test_message_notice_has_no_sources() {
        let msg = Message::notice("falhou");
        assert_eq!(msg.role, Role::Assistant);
        assert!(msg.sources.is_none());
    }

    #[test]
    fn test_message_ids_are_unique() {
        let a = Message::user("a");
        let b = Message::user("b");
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_message_serialization_roundtrip() {
        let msg = Message::answer("resposta", vec![sample_source()]);
        let json = serde_json::to_string(&msg).unwrap();
        let back: Message = serde_json::from_str(&json).unwrap();
        assert_eq!(back.role, Role::Assistant);
        assert_eq!(back.content, "resposta");
        assert_eq!(back.sources.unwrap()[0].score, 0.91);
    }

    #[test]
    fn test_message_without_sources_omits_field() {
        let msg = Message::user("pergunta");
        let json = serde_json::to_string(&msg).unwrap();
        assert!(!json.contains("sources"));
    }

    #[test]
    fn test_message_deserializes_without_sources_field() {
        let json = r#"{"id":"1","role":"user","content":"oi","timestamp":"2026-01-01T00:00:00Z"}"#;
        let msg: Message = serde_json::from_str(json).unwrap();
        assert!(msg.sources.is_none());
    }

    #[test]
    fn test_role_serialization() {
        assert_eq!(serde_json::to_string(&Role::User).unwrap(), r#""user""#);
        assert_eq!(
            serde_json::to_string(&Role::Assistant).unwrap(),
            r#""assistant""#
        );
    }

    #[test]
    fn test_role_deserialization() {
        let role: Role = serde_json::from_str(r#""assistant""#).unwrap();
        assert_eq!(role, Role::Assistant);
    }

    // ─── Source / Answer Tests ───────────────────────────────

    #[test]
    fn test_source_serialization_roundtrip() {
        let source = sample_source();
        let json = serde_json::to_string(&source).unwrap();
        let back: Source = serde_json::from_str(&json).unwrap();
        assert_eq!(back, source);
    }

    #[test]
    fn test_answer_sources_default_to_empty() {
        let json = r#"{"answer":"sem fontes"}"#;
        let answer: Answer = serde_json::from_str(json).unwrap();
        assert_eq!(answer.answer, "sem fontes");
        assert!(answer.sources.is_empty());
    }

    #[test]
    fn test_answer_deserializes_service_payload() {
        let json = r#"{
            "answer": "Gire a válvula...",
            "sources": [{
                "source": "manual",
                "uri": "manual.pdf",
                "page": 12,
                "chunk_id": "c-7",
                "content": "Para calibrar a FV-101...",
                "score": 0.91
            }]
        }"#;
        let answer: Answer = serde_json::from_str(json).unwrap();
        assert_eq!(answer.sources.len(), 1);
        assert_eq!(answer.sources[0].page, 12);
        assert_eq!(answer.sources[0].score, 0.91);
    }

    // ─── Config Tests ────────────────────────────────────────

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.service.base_url, "http://localhost:8000");
        assert_eq!(config.service.api_key, "dev-key");
        assert_eq!(config.history_retention, DEFAULT_HISTORY_RETENTION);
        assert_eq!(config.history_retention, 10);
    }

    #[test]
    fn test_config_serialization_roundtrip() {
        let mut config = AppConfig::default();
        config.service.base_url = "https://rag.example.com".to_string();
        let json = serde_json::to_string(&config).unwrap();
        let back: AppConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back, config);
    }

    // ─── Error Tests ─────────────────────────────────────────

    #[test]
    fn test_error_display() {
        let err = ServiceError::Network("fetch failed".to_string());
        assert_eq!(err.to_string(), "Network error: fetch failed");

        let err = ServiceError::Http {
            status: 503,
            body: "unavailable".to_string(),
        };
        assert_eq!(err.to_string(), "Service returned HTTP 503: unavailable");

        let err = ServiceError::Storage("quota exceeded".to_string());
        assert_eq!(err.to_string(), "Storage error: quota exceeded");
    }

    #[test]
    fn test_error_from_serde() {
        let serde_err = serde_json::from_str::<serde_json::Value>("{{bad}}").unwrap_err();
        let err: ServiceError = serde_err.into();
        assert!(matches!(err, ServiceError::Serialization(_)));
    }

    #[test]
    fn test_error_clone() {
        let err = ServiceError::Config("missing base url".to_string());
        assert_eq!(err.to_string(), err.clone().to_string());
    }

    fn sample_source() -> Source {
        Source {
            source: "manual".to_string(),
            uri: "manual.pdf".to_string(),
            page: 12,
            chunk_id: "c-7".to_string(),
            content: "Para calibrar a FV-101...".to_string(),
            score: 0.91,
        }
    }
}
