use thiserror::Error;

#[derive(Debug, Error)]
pub enum DomainError {
    #[error("order {order_number} has a malformed items payload: {source}")]
    MalformedItems {
        order_number: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("store error: {0}")]
    Store(String),
    #[error("document sink error: {0}")]
    Sink(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse_failure() -> serde_json::Error {
        serde_json::from_str::<Vec<u8>>("not valid json").unwrap_err()
    }

    #[test]
    fn malformed_items_display_names_the_order() {
        let err = DomainError::MalformedItems {
            order_number: "ORD-2024-001".to_string(),
            source: parse_failure(),
        };
        assert!(err.to_string().starts_with("order ORD-2024-001"));
    }

    #[test]
    fn malformed_items_keeps_the_parse_error_as_source() {
        let err = DomainError::MalformedItems {
            order_number: "ORD-2024-001".to_string(),
            source: parse_failure(),
        };
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn store_error_display() {
        assert_eq!(
            DomainError::Store("unreachable".to_string()).to_string(),
            "store error: unreachable"
        );
    }

    #[test]
    fn sink_error_display() {
        assert_eq!(
            DomainError::Sink("disk full".to_string()).to_string(),
            "document sink error: disk full"
        );
    }
}
