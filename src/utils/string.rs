//! String manipulation utilities

/// Pluralize a word based on count
pub fn pluralize(word: &str, count: usize) -> String {
    if count == 1 {
        word.to_string()
    } else {
        format!("{word}s")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pluralize() {
        assert_eq!(pluralize("module", 0), "modules");
        assert_eq!(pluralize("module", 1), "module");
        assert_eq!(pluralize("module", 5), "modules");
    }
}
