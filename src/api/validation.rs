use super::ApiError;

pub fn validate_id(entity: &str, id: i32) -> Result<i32, ApiError> {
    if id <= 0 {
        return Err(ApiError::validation(format!(
            "Invalid {entity} ID: {id}. ID must be a positive integer"
        )));
    }
    Ok(id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_id() {
        assert!(validate_id("user", 1).is_ok());
        assert!(validate_id("map", 12345).is_ok());
        assert!(validate_id("video", 0).is_err());
        assert!(validate_id("article", -1).is_err());
    }
}
